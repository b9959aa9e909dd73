//! The contract shared by every on-canvas annotation.

use super::context::DrawContext;
use super::error::GeometryError;
use super::transform::Transform;
use crate::util::Rect;

/// A user-manipulable overlay element on the molecule canvas.
///
/// The editor selects, moves, resizes, scales, and renders annotations only
/// through this trait. Implementers own their geometry and selection flag;
/// [`DrawingObject::bounding_rect`] must reflect every successful
/// `translate`, `set_rect`, or `scale` call.
///
/// Callers must not invoke `translate` or `set_rect` on an object whose
/// [`DrawingObject::is_movable`] returns `false`. The trait does not enforce
/// this; [`Frame`](super::Frame) does.
pub trait DrawingObject {
    fn set_selected(&mut self, selected: bool);

    fn is_selected(&self) -> bool;

    /// Shifts the object by the given offsets.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Axis-aligned bounds in editor coordinates, used for hit-testing.
    fn bounding_rect(&self) -> Rect;

    /// Replaces position and size. Afterwards the bounding rectangle is
    /// exactly `(x, y, width, height)`.
    ///
    /// # Errors
    /// Negative or non-finite values are rejected and leave the object unchanged.
    fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), GeometryError>;

    /// Scales the geometry uniformly about the top-left corner of the bounds.
    ///
    /// # Errors
    /// Factors that are zero, negative, or non-finite are rejected with
    /// [`GeometryError::InvalidScale`].
    fn scale(&mut self, factor: f64) -> Result<(), GeometryError>;

    /// Renders the object through `ctx` after mapping it with `transform`.
    fn draw(&self, ctx: &mut dyn DrawContext, transform: &Transform);

    fn is_movable(&self) -> bool;
}

/// Checks the arguments of [`DrawingObject::set_rect`].
pub(crate) fn validate_rect(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Result<Rect, GeometryError> {
    let rect = Rect::new(x, y, width, height);
    if !rect.is_finite() {
        return Err(GeometryError::NonFinite);
    }
    if width < 0.0 || height < 0.0 {
        return Err(GeometryError::NegativeSize { width, height });
    }
    Ok(rect)
}

/// Checks the argument of [`DrawingObject::scale`].
pub(crate) fn validate_scale(factor: f64) -> Result<f64, GeometryError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(GeometryError::InvalidScale(factor))
    }
}
