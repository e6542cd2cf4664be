//! Vector shape entities: circles and line segments.

use scenic_api_core::{Curve, EntityId, SceneError};

use crate::entity::{declare_spatial, EntityCore, Spatial};
use crate::property::PropertyStore;

/// Outline properties shared by stroked shapes.
pub trait Stroked: Spatial {
    fn line_width(&self) -> f64 {
        self.props().float("lineWidth")
    }

    fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.set_line_width_with(width, None)
    }

    fn set_line_width_with(&mut self, width: f64, curve: Option<Curve>) -> &mut Self {
        self.props_mut().set_float("lineWidth", width, curve);
        self
    }

    fn line_color(&self) -> u32 {
        self.props().color("lineColor")
    }

    fn set_line_color(&mut self, color: u32) -> Result<&mut Self, SceneError> {
        self.set_line_color_with(color, None)
    }

    fn set_line_color_with(
        &mut self,
        color: u32,
        curve: Option<Curve>,
    ) -> Result<&mut Self, SceneError> {
        self.props_mut().set_color("lineColor", color, curve)?;
        Ok(self)
    }

    /// Set outline width and color together. Sub-properties apply
    /// sequentially: if the color is rejected, the width has already been
    /// committed.
    fn set_stroke(&mut self, width: f64, color: u32) -> Result<&mut Self, SceneError> {
        self.set_line_width(width);
        self.set_line_color(color)?;
        Ok(self)
    }
}

/// A filled circle centered on the entity's position.
#[derive(Debug)]
pub struct Circle {
    id: EntityId,
    props: PropertyStore,
}

impl Circle {
    pub(crate) fn new(id: EntityId) -> Self {
        let mut props = PropertyStore::new();
        declare_spatial(&mut props);
        use scenic_api_core::PropertyValue as V;
        props.declare("radius", V::Float(25.0));
        props.declare("lineWidth", V::Float(1.0));
        props.declare("lineColor", V::Color(0xFFFFFF));
        props.declare("fillColor", V::Color(0xFFFFFF));
        Self { id, props }
    }

    pub fn radius(&self) -> f64 {
        self.props.float("radius")
    }

    pub fn set_radius(&mut self, radius: f64) -> &mut Self {
        self.set_radius_with(radius, None)
    }

    pub fn set_radius_with(&mut self, radius: f64, curve: Option<Curve>) -> &mut Self {
        self.props.set_float("radius", radius, curve);
        self
    }

    pub fn fill_color(&self) -> u32 {
        self.props.color("fillColor")
    }

    pub fn set_fill_color(&mut self, color: u32) -> Result<&mut Self, SceneError> {
        self.set_fill_color_with(color, None)
    }

    pub fn set_fill_color_with(
        &mut self,
        color: u32,
        curve: Option<Curve>,
    ) -> Result<&mut Self, SceneError> {
        self.props.set_color("fillColor", color, curve)?;
        Ok(self)
    }
}

impl EntityCore for Circle {
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

impl Spatial for Circle {}
impl Stroked for Circle {}

/// A line segment from the entity's position to (x2, y2).
#[derive(Debug)]
pub struct Line {
    id: EntityId,
    props: PropertyStore,
}

impl Line {
    pub(crate) fn new(id: EntityId) -> Self {
        let mut props = PropertyStore::new();
        declare_spatial(&mut props);
        use scenic_api_core::PropertyValue as V;
        props.declare("x2", V::Float(0.0));
        props.declare("y2", V::Float(0.0));
        props.declare("lineWidth", V::Float(1.0));
        props.declare("lineColor", V::Color(0xFFFFFF));
        Self { id, props }
    }

    pub fn x2(&self) -> f64 {
        self.props.float("x2")
    }

    pub fn set_x2(&mut self, x2: f64) -> &mut Self {
        self.set_x2_with(x2, None)
    }

    pub fn set_x2_with(&mut self, x2: f64, curve: Option<Curve>) -> &mut Self {
        self.props.set_float("x2", x2, curve);
        self
    }

    pub fn y2(&self) -> f64 {
        self.props.float("y2")
    }

    pub fn set_y2(&mut self, y2: f64) -> &mut Self {
        self.set_y2_with(y2, None)
    }

    pub fn set_y2_with(&mut self, y2: f64, curve: Option<Curve>) -> &mut Self {
        self.props.set_float("y2", y2, curve);
        self
    }
}

impl EntityCore for Line {
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

impl Spatial for Line {}
impl Stroked for Line {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_defaults_and_validation() {
        let mut circle = Circle::new(EntityId(0));
        assert_eq!(circle.radius(), 25.0);
        assert_eq!(circle.fill_color(), 0xFFFFFF);
        assert!(circle.set_fill_color(0x1000000).is_err());
        assert_eq!(circle.fill_color(), 0xFFFFFF);
    }

    #[test]
    fn line_endpoint_chaining() {
        let mut line = Line::new(EntityId(1));
        line.set_x2(30.0).set_y2(40.0).set_line_width(2.0);
        assert_eq!(line.x2(), 30.0);
        assert_eq!(line.y2(), 40.0);
        assert_eq!(line.line_width(), 2.0);
    }
}
