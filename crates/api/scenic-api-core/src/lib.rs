//! scenic-api-core: wire types shared by the simulation and the viewer.
//!
//! The simulation side (scenic-entities-core) emits [`FrameBatch`]es of
//! [`Command`]s; the viewer side (scenic-replay-core) consumes them and
//! evaluates the same [`Curve`] catalog. Both sides must agree on these
//! types bit-for-bit, so everything here is serde-visible and deterministic.

pub mod command;
pub mod curve;
pub mod error;
pub mod ids;
pub mod value;

pub use command::{Command, FrameBatch};
pub use curve::Curve;
pub use error::SceneError;
pub use ids::EntityId;
pub use value::{PropertyKind, PropertyValue, MAX_RGB};
