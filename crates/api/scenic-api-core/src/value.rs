//! PropertyValue: runtime values for the closed set of property types.
//!
//! The catalog of semantic types is fixed by the replay protocol: doubles,
//! integer wire codes, 24-bit RGB colors, and booleans. Range validation
//! lives here so that both the setter surface and dynamic access reject bad
//! values before any mutation happens.

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Largest valid 24-bit RGB color.
pub const MAX_RGB: u32 = 0xFF_FF_FF;

/// Coarse kind of a [`PropertyValue`], used for declaration and validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Float,
    Int,
    Color,
    Bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum PropertyValue {
    /// Scalar double (positions, scales, anchors, rotation, alpha).
    Float(f64),

    /// Integer wire code (blend mode, z-index).
    Int(i32),

    /// Packed 24-bit RGB color, `0x000000..=0xFFFFFF`.
    Color(u32),

    /// Boolean flag (visibility).
    Bool(bool),
}

impl PropertyValue {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Float(_) => PropertyKind::Float,
            PropertyValue::Int(_) => PropertyKind::Int,
            PropertyValue::Color(_) => PropertyKind::Color,
            PropertyValue::Bool(_) => PropertyKind::Bool,
        }
    }

    /// Range-check the value. Colors must fit in 24 bits; the other kinds
    /// have no invalid representations.
    pub fn validate(&self) -> Result<(), SceneError> {
        match self {
            PropertyValue::Color(c) if *c > MAX_RGB => {
                Err(SceneError::InvalidColor { value: *c })
            }
            _ => Ok(()),
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_color(&self) -> Option<u32> {
        match self {
            PropertyValue::Color(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(PropertyValue::Float(0.5).kind(), PropertyKind::Float);
        assert_eq!(PropertyValue::Int(3).kind(), PropertyKind::Int);
        assert_eq!(PropertyValue::Color(0xFF00FF).kind(), PropertyKind::Color);
        assert_eq!(PropertyValue::Bool(true).kind(), PropertyKind::Bool);
    }

    #[test]
    fn color_range_validation() {
        assert!(PropertyValue::Color(0x000000).validate().is_ok());
        assert!(PropertyValue::Color(MAX_RGB).validate().is_ok());
        let err = PropertyValue::Color(MAX_RGB + 1).validate().unwrap_err();
        assert!(matches!(err, SceneError::InvalidColor { value } if value == MAX_RGB + 1));
    }

    #[test]
    fn serde_roundtrip() {
        for v in [
            PropertyValue::Float(1.25),
            PropertyValue::Int(-7),
            PropertyValue::Color(0x00FF00),
            PropertyValue::Bool(false),
        ] {
            let s = serde_json::to_string(&v).unwrap();
            let back: PropertyValue = serde_json::from_str(&s).unwrap();
            assert_eq!(v, back);
        }
    }
}
