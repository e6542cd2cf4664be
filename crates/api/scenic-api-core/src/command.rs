//! Frame commands: the replay protocol emitted once per simulation tick.
//!
//! A Command serializes to JSON as:
//!   { "entity": 3, "property": "tint", "value": { "type": "color", "data": 65280 }, "curve": "elastic" }
//! with `curve` omitted entirely for the instantaneous sentinel.
//!
//! FrameBatch is the per-tick unit handed to the transport; batches are
//! immutable once emitted and consumed exactly once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Curve, EntityId, PropertyValue};

/// One property's value (and optional transition curve) at a specific frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub entity: EntityId,
    pub property: String,
    pub value: PropertyValue,
    /// `None` means the value snaps at the frame boundary with no tween.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<Curve>,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = serde_json::to_string(&self.value).map_err(|_| fmt::Error)?;
        match self.curve {
            Some(curve) => write!(
                f,
                "{{ entity: {}, property: {}, value: {}, curve: {} }}",
                self.entity, self.property, val, curve
            ),
            None => write!(
                f,
                "{{ entity: {}, property: {}, value: {} }}",
                self.entity, self.property, val
            ),
        }
    }
}

/// Ordered command batch for one simulation frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameBatch {
    pub frame: u64,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl FrameBatch {
    pub fn new(frame: u64) -> Self {
        Self {
            frame,
            commands: Vec::new(),
        }
    }

    pub fn with_capacity(frame: u64, capacity: usize) -> Self {
        Self {
            frame,
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
