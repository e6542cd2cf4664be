//! scenic-replay-core: the viewer side of the replay protocol.
//!
//! A [`Timeline`] ingests the ordered [`FrameBatch`] stream the simulation
//! emitted; a [`Playhead`] steps through it frame by frame, holding the
//! committed baseline per (entity, property) and sampling the active frame's
//! transitions at any normalized progress. Curve evaluation is pure, so
//! sampling can run concurrently per property without synchronization.

pub mod interp;
pub mod playhead;
pub mod timeline;

pub use interp::{interpolate, lerp_color, lerp_f64};
pub use playhead::{Playhead, PropertySample};
pub use timeline::Timeline;

pub use scenic_api_core::{Command, Curve, EntityId, FrameBatch, PropertyValue, SceneError};
