//! Texture-based entities: blend mode, anchors and tint.

use serde::{Deserialize, Serialize};

use scenic_api_core::{Curve, EntityId, SceneError};

use crate::entity::{declare_spatial, EntityCore, Spatial};
use crate::property::PropertyStore;

/// Supported blend modes and their renderer wire constants.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Normal,
    Add,
    Multiply,
    Screen,
}

impl BlendMode {
    /// Integer code expected by the renderer. An explicit table; the wire
    /// format must not depend on declaration order.
    pub fn wire_code(self) -> i32 {
        match self {
            BlendMode::Normal => 0,
            BlendMode::Add => 1,
            BlendMode::Multiply => 2,
            BlendMode::Screen => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(BlendMode::Normal),
            1 => Some(BlendMode::Add),
            2 => Some(BlendMode::Multiply),
            3 => Some(BlendMode::Screen),
            _ => None,
        }
    }
}

/// Properties shared by every entity drawn from a texture.
///
/// The anchors are the normalized pivot used as the origin for rotation and
/// scaling; tint is an RGB multiplier over the texture.
pub trait TextureBased: Spatial {
    fn blend_mode(&self) -> BlendMode {
        BlendMode::from_code(self.props().int("blendMode")).unwrap_or_default()
    }

    fn set_blend_mode(&mut self, blend_mode: BlendMode) -> &mut Self {
        self.props_mut()
            .set_int("blendMode", blend_mode.wire_code(), None);
        self
    }

    fn anchor_x(&self) -> f64 {
        self.props().float("anchorX")
    }

    fn set_anchor_x(&mut self, anchor_x: f64) -> &mut Self {
        self.set_anchor_x_with(anchor_x, None)
    }

    fn set_anchor_x_with(&mut self, anchor_x: f64, curve: Option<Curve>) -> &mut Self {
        self.props_mut().set_float("anchorX", anchor_x, curve);
        self
    }

    fn anchor_y(&self) -> f64 {
        self.props().float("anchorY")
    }

    fn set_anchor_y(&mut self, anchor_y: f64) -> &mut Self {
        self.set_anchor_y_with(anchor_y, None)
    }

    fn set_anchor_y_with(&mut self, anchor_y: f64, curve: Option<Curve>) -> &mut Self {
        self.props_mut().set_float("anchorY", anchor_y, curve);
        self
    }

    /// Set both anchors as one fraction of the entity's size. The two
    /// sub-properties are applied sequentially and emit separate commands.
    fn set_anchor(&mut self, anchor: f64) -> &mut Self {
        self.set_anchor_x(anchor);
        self.set_anchor_y(anchor);
        self
    }

    /// Tint as a packed RGB integer. Default is 0xFFFFFF (white).
    fn tint(&self) -> u32 {
        self.props().color("tint")
    }

    fn set_tint(&mut self, color: u32) -> Result<&mut Self, SceneError> {
        self.set_tint_with(color, None)
    }

    fn set_tint_with(&mut self, color: u32, curve: Option<Curve>) -> Result<&mut Self, SceneError> {
        self.props_mut().set_color("tint", color, curve)?;
        Ok(self)
    }
}

/// A textured image entity. Texture/asset binding is owned by the broader
/// entity catalog; the core tracks only the animatable properties.
#[derive(Debug)]
pub struct Sprite {
    id: EntityId,
    props: PropertyStore,
}

impl Sprite {
    pub(crate) fn new(id: EntityId) -> Self {
        let mut props = PropertyStore::new();
        declare_spatial(&mut props);
        use scenic_api_core::PropertyValue as V;
        props.declare("blendMode", V::Int(BlendMode::Normal.wire_code()));
        props.declare("anchorX", V::Float(0.0));
        props.declare("anchorY", V::Float(0.0));
        props.declare("tint", V::Color(0xFFFFFF));
        Self { id, props }
    }
}

impl EntityCore for Sprite {
    fn id(&self) -> EntityId {
        self.id
    }

    fn props(&self) -> &PropertyStore {
        &self.props
    }

    fn props_mut(&mut self) -> &mut PropertyStore {
        &mut self.props
    }
}

impl Spatial for Sprite {}
impl TextureBased for Sprite {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_mode_wire_table() {
        assert_eq!(BlendMode::Normal.wire_code(), 0);
        assert_eq!(BlendMode::Add.wire_code(), 1);
        assert_eq!(BlendMode::Multiply.wire_code(), 2);
        assert_eq!(BlendMode::Screen.wire_code(), 3);
        for mode in [
            BlendMode::Normal,
            BlendMode::Add,
            BlendMode::Multiply,
            BlendMode::Screen,
        ] {
            assert_eq!(BlendMode::from_code(mode.wire_code()), Some(mode));
        }
        assert_eq!(BlendMode::from_code(4), None);
    }

    #[test]
    fn sprite_defaults() {
        let sprite = Sprite::new(EntityId(0));
        assert_eq!(sprite.tint(), 0xFFFFFF);
        assert_eq!(sprite.anchor_x(), 0.0);
        assert_eq!(sprite.blend_mode(), BlendMode::Normal);
        assert_eq!(sprite.scale_x(), 1.0);
        assert!(sprite.visible());
    }

    #[test]
    fn fluent_chaining() {
        let mut sprite = Sprite::new(EntityId(0));
        sprite
            .set_x(10.0)
            .set_y(20.0)
            .set_anchor(0.5)
            .set_blend_mode(BlendMode::Add);
        assert_eq!(sprite.x(), 10.0);
        assert_eq!(sprite.anchor_y(), 0.5);
        assert_eq!(sprite.blend_mode(), BlendMode::Add);
    }
}
