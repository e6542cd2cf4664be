//! Entity identity.

use serde::{Deserialize, Serialize};

/// Opaque identity of a scene entity, assigned at creation and immutable.
///
/// Ids are dense and creation-ordered; command emission relies on that order
/// for deterministic output.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
