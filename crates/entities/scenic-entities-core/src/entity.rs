//! Entity seams: identity, property access, and the shared spatial surface.
//!
//! The catalog uses traits with provided methods where the original design
//! used an inheritance chain: every setter returns `&mut Self` for chaining,
//! and the `_with` variants take the transition curve applied between the
//! previous and new committed value. `None` snaps at the frame boundary.

use scenic_api_core::{Curve, EntityId, SceneError};

use crate::property::PropertyStore;

/// Identity plus property access; everything an entity is to the core.
pub trait EntityCore {
    fn id(&self) -> EntityId;
    fn props(&self) -> &PropertyStore;
    fn props_mut(&mut self) -> &mut PropertyStore;
}

/// Declare the base properties every drawable entity carries, in their
/// emission order.
pub(crate) fn declare_spatial(store: &mut PropertyStore) {
    use scenic_api_core::PropertyValue as V;
    store.declare("x", V::Float(0.0));
    store.declare("y", V::Float(0.0));
    store.declare("scaleX", V::Float(1.0));
    store.declare("scaleY", V::Float(1.0));
    store.declare("rotation", V::Float(0.0));
    store.declare("alpha", V::Float(1.0));
    store.declare("visible", V::Bool(true));
    store.declare("zIndex", V::Int(0));
}

/// Position, scale, rotation, opacity, visibility and draw order.
pub trait Spatial: EntityCore + Sized {
    fn x(&self) -> f64 {
        self.props().float("x")
    }

    fn set_x(&mut self, x: f64) -> &mut Self {
        self.set_x_with(x, None)
    }

    fn set_x_with(&mut self, x: f64, curve: Option<Curve>) -> &mut Self {
        self.props_mut().set_float("x", x, curve);
        self
    }

    fn y(&self) -> f64 {
        self.props().float("y")
    }

    fn set_y(&mut self, y: f64) -> &mut Self {
        self.set_y_with(y, None)
    }

    fn set_y_with(&mut self, y: f64, curve: Option<Curve>) -> &mut Self {
        self.props_mut().set_float("y", y, curve);
        self
    }

    fn scale_x(&self) -> f64 {
        self.props().float("scaleX")
    }

    fn set_scale_x(&mut self, scale: f64) -> &mut Self {
        self.set_scale_x_with(scale, None)
    }

    fn set_scale_x_with(&mut self, scale: f64, curve: Option<Curve>) -> &mut Self {
        self.props_mut().set_float("scaleX", scale, curve);
        self
    }

    fn scale_y(&self) -> f64 {
        self.props().float("scaleY")
    }

    fn set_scale_y(&mut self, scale: f64) -> &mut Self {
        self.set_scale_y_with(scale, None)
    }

    fn set_scale_y_with(&mut self, scale: f64, curve: Option<Curve>) -> &mut Self {
        self.props_mut().set_float("scaleY", scale, curve);
        self
    }

    /// Set both scale axes. The two sub-properties are applied sequentially
    /// and emit separate commands.
    fn set_scale(&mut self, scale: f64) -> &mut Self {
        self.set_scale_with(scale, None)
    }

    fn set_scale_with(&mut self, scale: f64, curve: Option<Curve>) -> &mut Self {
        self.set_scale_x_with(scale, curve);
        self.set_scale_y_with(scale, curve);
        self
    }

    /// Rotation in radians.
    fn rotation(&self) -> f64 {
        self.props().float("rotation")
    }

    fn set_rotation(&mut self, rotation: f64) -> &mut Self {
        self.set_rotation_with(rotation, None)
    }

    fn set_rotation_with(&mut self, rotation: f64, curve: Option<Curve>) -> &mut Self {
        self.props_mut().set_float("rotation", rotation, curve);
        self
    }

    fn alpha(&self) -> f64 {
        self.props().float("alpha")
    }

    fn set_alpha(&mut self, alpha: f64) -> Result<&mut Self, SceneError> {
        self.set_alpha_with(alpha, None)
    }

    /// Alpha must stay in `[0,1]`; out-of-range values are rejected before
    /// any mutation.
    fn set_alpha_with(&mut self, alpha: f64, curve: Option<Curve>) -> Result<&mut Self, SceneError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(SceneError::InvalidAlpha { value: alpha });
        }
        self.props_mut().set_float("alpha", alpha, curve);
        Ok(self)
    }

    fn visible(&self) -> bool {
        self.props().bool("visible")
    }

    fn set_visible(&mut self, visible: bool) -> &mut Self {
        self.props_mut().set_bool("visible", visible, None);
        self
    }

    fn z_index(&self) -> i32 {
        self.props().int("zIndex")
    }

    fn set_z_index(&mut self, z_index: i32) -> &mut Self {
        self.props_mut().set_int("zIndex", z_index, None);
        self
    }
}
