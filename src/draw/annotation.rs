//! Closed set of annotation types stored by a [`Frame`](super::Frame).

use super::context::DrawContext;
use super::error::GeometryError;
use super::label::TextLabel;
use super::object::DrawingObject;
use super::shape::Shape;
use super::transform::Transform;
use crate::util::Rect;

/// Any annotation the editor can place on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum Annotation {
    Label(TextLabel),
    Shape(Shape),
}

impl Annotation {
    fn object(&self) -> &dyn DrawingObject {
        match self {
            Annotation::Label(label) => label,
            Annotation::Shape(shape) => shape,
        }
    }

    fn object_mut(&mut self) -> &mut dyn DrawingObject {
        match self {
            Annotation::Label(label) => label,
            Annotation::Shape(shape) => shape,
        }
    }
}

impl From<TextLabel> for Annotation {
    fn from(label: TextLabel) -> Self {
        Annotation::Label(label)
    }
}

impl From<Shape> for Annotation {
    fn from(shape: Shape) -> Self {
        Annotation::Shape(shape)
    }
}

impl DrawingObject for Annotation {
    fn set_selected(&mut self, selected: bool) {
        self.object_mut().set_selected(selected);
    }

    fn is_selected(&self) -> bool {
        self.object().is_selected()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.object_mut().translate(dx, dy);
    }

    fn bounding_rect(&self) -> Rect {
        self.object().bounding_rect()
    }

    fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), GeometryError> {
        self.object_mut().set_rect(x, y, width, height)
    }

    fn scale(&mut self, factor: f64) -> Result<(), GeometryError> {
        self.object_mut().scale(factor)
    }

    fn draw(&self, ctx: &mut dyn DrawContext, transform: &Transform) {
        self.object().draw(ctx, transform);
    }

    fn is_movable(&self) -> bool {
        self.object().is_movable()
    }
}
