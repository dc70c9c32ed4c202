//! Coverage-guided input-sequence generation for fuzzing a simulated
//! pad-driven embedded device.
//!
//! Worker threads pull candidate button sequences with
//! [`Generator::generate`], execute them against the device externally, and
//! feed back instruction coverage plus the terminal memory snapshot with
//! [`Generator::record`]. Sequences that expose coverage beyond their parent
//! are expanded into longer candidates, closing the generation loop.

pub mod config;
pub mod cover;
pub mod dedup;
pub mod generator;
pub mod lineage;
pub mod pulse;
pub mod seq;
pub mod stats;
pub mod worklist;

pub use config::{Config, ConfigError};
pub use cover::Coverage;
pub use generator::Generator;
pub use pulse::{Button, Pulse};
pub use seq::InputSequence;

pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
pub type HashSet<V> = rustc_hash::FxHashSet<V>;
