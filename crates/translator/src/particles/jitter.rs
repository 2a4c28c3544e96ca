//! Gaussian spread of multi-instance particle spawns

use bridge_core::Vector3f;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Random source for particle positions
///
/// Production translators draw from the thread-local generator, so every
/// packet gets fresh positions. Tests use [`ParticleJitter::seeded`] for
/// reproducible output.
#[derive(Debug, Default)]
pub enum ParticleJitter {
    #[default]
    ThreadLocal,
    Seeded(Mutex<StdRng>),
}

impl ParticleJitter {
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Positions of `count` particles around `origin`
    ///
    /// Each axis is displaced by a standard-normal draw scaled by that axis'
    /// offset; the three draws are independent.
    pub fn scatter(&self, origin: [f64; 3], offset: [f32; 3], count: usize) -> Vec<Vector3f> {
        match self {
            Self::ThreadLocal => scatter_with(&mut rand::thread_rng(), origin, offset, count),
            Self::Seeded(rng) => scatter_with(&mut *rng.lock(), origin, offset, count),
        }
    }
}

fn scatter_with<R: Rng>(rng: &mut R, origin: [f64; 3], offset: [f32; 3], count: usize) -> Vec<Vector3f> {
    (0..count)
        .map(|_| {
            let dx: f64 = StandardNormal.sample(rng);
            let dy: f64 = StandardNormal.sample(rng);
            let dz: f64 = StandardNormal.sample(rng);
            Vector3f::from_f64(
                origin[0] + dx * f64::from(offset[0]),
                origin[1] + dy * f64::from(offset[1]),
                origin[2] + dz * f64::from(offset[2]),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let a = ParticleJitter::seeded(42).scatter([0.0, 64.0, 0.0], [1.0, 1.0, 1.0], 8);
        let b = ParticleJitter::seeded(42).scatter([0.0, 64.0, 0.0], [1.0, 1.0, 1.0], 8);
        assert_eq!(a.len(), 8);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_offset_axis_stays_on_origin() {
        let positions = ParticleJitter::seeded(7).scatter([3.0, 70.0, -2.0], [0.0, 2.0, 0.0], 16);
        assert!(positions.iter().all(|p| p.x == 3.0 && p.z == -2.0));
        assert!(positions.iter().any(|p| p.y != 70.0));
    }

    #[test]
    fn test_thread_local_count() {
        let positions = ParticleJitter::ThreadLocal.scatter([0.0; 3], [0.5; 3], 5);
        assert_eq!(positions.len(), 5);
    }
}
