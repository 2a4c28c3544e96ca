//! Bridge Core - Fundamental types shared by every translation crate

mod error;
mod types;
mod positions;

pub use error::*;
pub use types::*;
pub use positions::*;
