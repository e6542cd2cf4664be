//! Scene configuration.

use serde::{Deserialize, Serialize};

/// Capacity hints for scene storage and per-frame batches.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity for the entity registry.
    pub entity_capacity: usize,
    /// Expected commands per emitted frame.
    pub commands_per_frame: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entity_capacity: 64,
            commands_per_frame: 256,
        }
    }
}
