//! Error types shared by the scene and replay sides.

use serde::{Deserialize, Serialize};

use crate::value::PropertyKind;

/// Errors surfaced by property mutation and stream loading.
///
/// Every operation in the core either succeeds deterministically or fails
/// immediately with no side effect; there is no retry path.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SceneError {
    /// Color outside the valid 24-bit RGB range.
    #[error("invalid RGB color {value:#08x} (valid range is 0x000000..=0xFFFFFF)")]
    InvalidColor { value: u32 },

    /// Alpha outside the normalized range.
    #[error("invalid alpha {value} (valid range is 0.0..=1.0)")]
    InvalidAlpha { value: f64 },

    /// Value kind does not match the property's declared kind.
    #[error("value kind mismatch for '{property}': expected {expected:?}, got {actual:?}")]
    KindMismatch {
        property: String,
        expected: PropertyKind,
        actual: PropertyKind,
    },

    /// Property name not declared on the entity.
    #[error("unknown property: {name}")]
    UnknownProperty { name: String },

    /// Curve name not in the closed catalog.
    #[error("unknown curve: {name}")]
    UnknownCurve { name: String },

    /// Frame index not strictly greater than the previously loaded frame.
    #[error("frame {requested} is not after already-loaded frame {last}")]
    NonMonotonicFrame { last: u64, requested: u64 },

    /// Malformed command stream at the replay boundary.
    #[error("decode error: {reason}")]
    Decode { reason: String },
}

impl SceneError {
    /// Coarse bucket for logging and metrics.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidColor { .. }
            | Self::InvalidAlpha { .. }
            | Self::KindMismatch { .. }
            | Self::UnknownProperty { .. } => "validation",
            Self::UnknownCurve { .. } | Self::Decode { .. } => "decode",
            Self::NonMonotonicFrame { .. } => "ordering",
        }
    }
}
