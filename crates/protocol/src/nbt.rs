//! # NBT Compound Model
//!
//! The subset of Bedrock NBT the translation core writes: compounds holding
//! floats, strings and nested compounds. Encoding to little-endian varint NBT
//! is the Bedrock codec's job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single NBT value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NbtValue {
    Float(f32),
    String(String),
    Compound(NbtMap),
}

/// An NBT compound tag
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NbtMap(BTreeMap<String, NbtValue>);

impl NbtMap {
    /// Start building a compound
    pub fn builder() -> NbtMapBuilder {
        NbtMapBuilder::default()
    }

    pub fn get(&self, key: &str) -> Option<&NbtValue> {
        self.0.get(key)
    }

    pub fn get_float(&self, key: &str) -> Option<f32> {
        match self.0.get(key) {
            Some(NbtValue::Float(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(NbtValue::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_compound(&self, key: &str) -> Option<&NbtMap> {
        match self.0.get(key) {
            Some(NbtValue::Compound(value)) => Some(value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builder for [`NbtMap`]
#[derive(Debug, Default)]
pub struct NbtMapBuilder {
    entries: BTreeMap<String, NbtValue>,
}

impl NbtMapBuilder {
    pub fn put_float(mut self, key: &str, value: f32) -> Self {
        self.entries.insert(key.to_string(), NbtValue::Float(value));
        self
    }

    pub fn put_string(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), NbtValue::String(value.into()));
        self
    }

    pub fn put_compound(mut self, key: &str, value: NbtMap) -> Self {
        self.entries.insert(key.to_string(), NbtValue::Compound(value));
        self
    }

    pub fn build(self) -> NbtMap {
        NbtMap(self.entries)
    }
}
