//! Hash collections used across the engine.
//! FxHash over SipHash: keys are short internal ids, never
//! attacker-controlled input.

pub use rustc_hash::{FxHashMap, FxHashSet};
