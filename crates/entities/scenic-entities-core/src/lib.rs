//! scenic-entities-core: the simulation side of the replay protocol.
//!
//! A [`Scene`] owns visual entities; simulation code mutates them through
//! typed fluent setters, each mutation is recorded as a pending change, and
//! [`Scene::commit_frame`] snapshots every dirty property into an ordered
//! [`FrameBatch`] for the transport. Ordering is entity creation order, then
//! property declaration order, so identical runs emit identical bytes.

pub mod config;
pub mod entity;
pub mod ids;
pub mod property;
pub mod scene;
pub mod shapes;
pub mod sprite;

// Re-exports for consumers (transport adapters, tests)
pub use config::Config;
pub use entity::{EntityCore, Spatial};
pub use ids::IdAllocator;
pub use property::{PendingChange, PropertyStore};
pub use scene::{Scene, SceneEntity};
pub use shapes::{Circle, Line, Stroked};
pub use sprite::{BlendMode, Sprite, TextureBased};

pub use scenic_api_core::{
    Command, Curve, EntityId, FrameBatch, PropertyKind, PropertyValue, SceneError,
};
