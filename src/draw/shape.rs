//! Geometric annotations: rectangles, ellipses, lines, and arrows.

use super::color::Color;
use super::context::DrawContext;
use super::error::GeometryError;
use super::object::{DrawingObject, validate_rect, validate_scale};
use super::render::draw_selection_outline;
use super::transform::Transform;
use crate::util::{self, Rect};

/// Geometry of a [`Shape`].
///
/// Every kind is described by its bounding rectangle. Lines and arrows run
/// corner to corner; `flip_x`/`flip_y` put their first point (start or tail)
/// on the right/bottom edge so the direction survives a resize.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    /// Rectangle outline
    Rectangle { rect: Rect },
    /// Ellipse outline inscribed in `rect`
    Ellipse { rect: Rect },
    /// Straight line across `rect`
    Line { rect: Rect, flip_x: bool, flip_y: bool },
    /// Line across `rect` with a V-shaped head at its second point
    Arrow {
        rect: Rect,
        flip_x: bool,
        flip_y: bool,
        /// Arrowhead length in model units
        head_length: f64,
        /// Arrowhead angle in degrees
        head_angle: f64,
    },
}

impl ShapeKind {
    fn rect(&self) -> &Rect {
        match self {
            ShapeKind::Rectangle { rect }
            | ShapeKind::Ellipse { rect }
            | ShapeKind::Line { rect, .. }
            | ShapeKind::Arrow { rect, .. } => rect,
        }
    }

    fn rect_mut(&mut self) -> &mut Rect {
        match self {
            ShapeKind::Rectangle { rect }
            | ShapeKind::Ellipse { rect }
            | ShapeKind::Line { rect, .. }
            | ShapeKind::Arrow { rect, .. } => rect,
        }
    }
}

/// A stroked geometric annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    /// Stroke color
    pub color: Color,
    /// Stroke width in model units
    pub thickness: f64,
    locked: bool,
    selected: bool,
}

impl Shape {
    pub fn new(kind: ShapeKind, color: Color, thickness: f64) -> Self {
        Self {
            kind,
            color,
            thickness,
            locked: false,
            selected: false,
        }
    }

    pub fn rectangle(rect: Rect, color: Color, thickness: f64) -> Self {
        Self::new(ShapeKind::Rectangle { rect }, color, thickness)
    }

    pub fn ellipse(rect: Rect, color: Color, thickness: f64) -> Self {
        Self::new(ShapeKind::Ellipse { rect }, color, thickness)
    }

    pub fn line(start: (f64, f64), end: (f64, f64), color: Color, thickness: f64) -> Self {
        let (rect, flip_x, flip_y) = span(start, end);
        Self::new(ShapeKind::Line { rect, flip_x, flip_y }, color, thickness)
    }

    pub fn arrow(
        tail: (f64, f64),
        head: (f64, f64),
        head_length: f64,
        head_angle: f64,
        color: Color,
        thickness: f64,
    ) -> Self {
        let (rect, flip_x, flip_y) = span(tail, head);
        Self::new(
            ShapeKind::Arrow {
                rect,
                flip_x,
                flip_y,
                head_length,
                head_angle,
            },
            color,
            thickness,
        )
    }

    /// Pins the shape in place; locked shapes report `is_movable() == false`.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Start and end point of a line, or tail and head of an arrow.
    pub fn endpoints(&self) -> Option<((f64, f64), (f64, f64))> {
        match &self.kind {
            ShapeKind::Line {
                rect,
                flip_x,
                flip_y,
            }
            | ShapeKind::Arrow {
                rect,
                flip_x,
                flip_y,
                ..
            } => Some(corner_points(rect, *flip_x, *flip_y)),
            ShapeKind::Rectangle { .. } | ShapeKind::Ellipse { .. } => None,
        }
    }

    /// Bounding rectangle grown to cover the stroke and arrowhead.
    ///
    /// Suitable for repaint hints; hit-testing uses [`DrawingObject::bounding_rect`].
    pub fn damage_rect(&self) -> Rect {
        let mut rect = self.bounding_rect();
        if let (
            ShapeKind::Arrow {
                head_length,
                head_angle,
                ..
            },
            Some((tail, head)),
        ) = (&self.kind, self.endpoints())
        {
            for (px, py) in util::arrowhead_points(head, tail, *head_length, *head_angle) {
                rect = rect.union(Rect::new(px, py, 0.0, 0.0));
            }
        }
        rect.inflate(stroke_padding(self.thickness));
        rect
    }
}

fn stroke_padding(thickness: f64) -> f64 {
    (thickness / 2.0).max(1.0)
}

/// Bounding rectangle of a segment and whether `from` lies on the far edge of each axis.
fn span(from: (f64, f64), to: (f64, f64)) -> (Rect, bool, bool) {
    let rect = Rect::from_corners(from.0, from.1, to.0, to.1);
    (rect, from.0 > to.0, from.1 > to.1)
}

fn corner_points(rect: &Rect, flip_x: bool, flip_y: bool) -> ((f64, f64), (f64, f64)) {
    let (x1, x2) = if flip_x {
        (rect.max_x(), rect.x)
    } else {
        (rect.x, rect.max_x())
    };
    let (y1, y2) = if flip_y {
        (rect.max_y(), rect.y)
    } else {
        (rect.y, rect.max_y())
    };
    ((x1, y1), (x2, y2))
}

impl DrawingObject for Shape {
    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.kind.rect_mut().translate(dx, dy);
    }

    fn bounding_rect(&self) -> Rect {
        *self.kind.rect()
    }

    fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), GeometryError> {
        *self.kind.rect_mut() = validate_rect(x, y, width, height)?;
        Ok(())
    }

    fn scale(&mut self, factor: f64) -> Result<(), GeometryError> {
        let factor = validate_scale(factor)?;
        let rect = self.kind.rect_mut();
        rect.width *= factor;
        rect.height *= factor;
        if let ShapeKind::Arrow { head_length, .. } = &mut self.kind {
            *head_length *= factor;
        }
        Ok(())
    }

    fn draw(&self, ctx: &mut dyn DrawContext, transform: &Transform) {
        ctx.save();
        ctx.set_color(self.color);
        ctx.set_line_width(transform.apply_length(self.thickness));

        match &self.kind {
            ShapeKind::Rectangle { rect } => {
                let r = transform.apply_to_rect(rect);
                ctx.stroke_rect(r.x, r.y, r.width, r.height);
            }
            ShapeKind::Ellipse { rect } => {
                let r = transform.apply_to_rect(rect);
                ctx.stroke_ellipse(r.x, r.y, r.width, r.height);
            }
            ShapeKind::Line {
                rect,
                flip_x,
                flip_y,
            } => {
                let (start, end) = corner_points(rect, *flip_x, *flip_y);
                let (x1, y1) = transform.apply_to_point(start);
                let (x2, y2) = transform.apply_to_point(end);
                ctx.stroke_line(x1, y1, x2, y2);
            }
            ShapeKind::Arrow {
                rect,
                flip_x,
                flip_y,
                head_length,
                head_angle,
            } => {
                let (tail, head) = corner_points(rect, *flip_x, *flip_y);
                let tail = transform.apply_to_point(tail);
                let tip = transform.apply_to_point(head);
                ctx.stroke_line(tail.0, tail.1, tip.0, tip.1);

                let [left, right] = util::arrowhead_points(
                    tip,
                    tail,
                    transform.apply_length(*head_length),
                    *head_angle,
                );
                ctx.stroke_polyline(&[left, tip, right]);
            }
        }
        ctx.restore();

        if self.selected {
            draw_selection_outline(ctx, &transform.apply_to_rect(&self.bounding_rect()));
        }
    }

    fn is_movable(&self) -> bool {
        !self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};
    use crate::draw::context::recording::{Op, RecordingContext};

    fn assert_rect_close(actual: Rect, expected: Rect) {
        let eps = 1e-9;
        assert!(
            (actual.x - expected.x).abs() < eps
                && (actual.y - expected.y).abs() < eps
                && (actual.width - expected.width).abs() < eps
                && (actual.height - expected.height).abs() < eps,
            "{actual:?} != {expected:?}"
        );
    }

    fn all_kinds() -> Vec<Shape> {
        vec![
            Shape::rectangle(Rect::new(10.0, 20.0, 30.0, 40.0), RED, 2.0),
            Shape::ellipse(Rect::new(-5.0, 0.0, 12.0, 6.0), RED, 1.0),
            Shape::line((50.0, 40.0), (70.0, 90.0), BLACK, 4.0),
            Shape::arrow((100.0, 100.0), (50.0, 120.0), 20.0, 30.0, BLACK, 3.0),
        ]
    }

    #[test]
    fn set_rect_yields_exact_bounds_for_every_kind() {
        for mut shape in all_kinds() {
            shape.set_rect(3.0, 4.0, 25.0, 7.5).unwrap();
            assert_eq!(shape.bounding_rect(), Rect::new(3.0, 4.0, 25.0, 7.5));
        }
    }

    #[test]
    fn translate_shifts_origin_only() {
        for mut shape in all_kinds() {
            let before = shape.bounding_rect();
            shape.translate(-7.0, 2.5);
            let after = shape.bounding_rect();
            assert_rect_close(
                after,
                Rect::new(before.x - 7.0, before.y + 2.5, before.width, before.height),
            );
        }
    }

    #[test]
    fn scale_and_inverse_restore_bounds() {
        for mut shape in all_kinds() {
            let before = shape.bounding_rect();
            shape.scale(3.0).unwrap();
            assert_rect_close(
                shape.bounding_rect(),
                Rect::new(before.x, before.y, before.width * 3.0, before.height * 3.0),
            );
            shape.scale(1.0 / 3.0).unwrap();
            assert_rect_close(shape.bounding_rect(), before);
        }
    }

    #[test]
    fn invalid_geometry_is_rejected_without_change() {
        let mut shape = Shape::rectangle(Rect::new(0.0, 0.0, 10.0, 10.0), RED, 1.0);
        assert!(shape.set_rect(0.0, 0.0, -1.0, 5.0).is_err());
        assert_eq!(shape.scale(0.0), Err(GeometryError::InvalidScale(0.0)));
        assert!(shape.scale(-1.0).is_err());
        assert_eq!(shape.bounding_rect(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn line_keeps_direction_after_resize() {
        let mut shape = Shape::line((10.0, 0.0), (0.0, 10.0), BLACK, 1.0);
        shape.set_rect(100.0, 100.0, 20.0, 40.0).unwrap();
        assert_eq!(shape.endpoints(), Some(((120.0, 100.0), (100.0, 140.0))));
    }

    #[test]
    fn arrow_head_stays_at_head_end() {
        let mut shape = Shape::arrow((0.0, 10.0), (10.0, 0.0), 4.0, 30.0, BLACK, 1.0);
        shape.translate(5.0, 5.0);
        shape.scale(2.0).unwrap();
        assert_eq!(shape.endpoints(), Some(((5.0, 25.0), (25.0, 5.0))));
        assert!(matches!(shape.kind, ShapeKind::Arrow { head_length, .. } if head_length == 8.0));
    }

    #[test]
    fn fractional_set_rect_is_exact_for_every_kind() {
        for mut shape in all_kinds() {
            shape.set_rect(0.1, 0.1, 0.2, 0.2).unwrap();
            assert_eq!(shape.bounding_rect(), Rect::new(0.1, 0.1, 0.2, 0.2));

            shape.set_rect(1e16, 0.0, 1.0, 1.0).unwrap();
            assert_eq!(shape.bounding_rect(), Rect::new(1e16, 0.0, 1.0, 1.0));
        }
    }

    #[test]
    fn fractional_translate_keeps_extent() {
        let mut shape = Shape::line((0.0, 0.0), (0.3, 0.3), BLACK, 1.0);
        let before = shape.bounding_rect();
        shape.translate(0.1, 0.7);
        let after = shape.bounding_rect();
        assert_eq!((after.width, after.height), (before.width, before.height));
        assert_eq!((after.x, after.y), (0.1, 0.7));
    }

    #[test]
    fn horizontal_line_grows_to_requested_height() {
        let mut shape = Shape::line((0.0, 5.0), (10.0, 5.0), BLACK, 1.0);
        assert_eq!(shape.bounding_rect().height, 0.0);
        shape.set_rect(0.0, 0.0, 10.0, 4.0).unwrap();
        assert_eq!(shape.bounding_rect(), Rect::new(0.0, 0.0, 10.0, 4.0));
    }

    #[test]
    fn damage_rect_covers_stroke_and_arrowhead() {
        let shape = Shape::arrow((100.0, 100.0), (50.0, 120.0), 20.0, 30.0, BLACK, 3.0);
        let damage = shape.damage_rect();
        for (px, py) in util::arrowhead_points((50.0, 120.0), (100.0, 100.0), 20.0, 30.0) {
            assert!(damage.contains(px, py));
        }
        let bounds = shape.bounding_rect();
        assert!(damage.x < bounds.x && damage.max_y() > bounds.max_y());
    }

    #[test]
    fn locked_shapes_are_not_movable() {
        let shape = Shape::rectangle(Rect::new(0.0, 0.0, 1.0, 1.0), RED, 1.0);
        assert!(shape.is_movable());
        assert!(!shape.locked().is_movable());
    }

    #[test]
    fn draw_applies_transform_and_selection_outline() {
        let mut shape = Shape::rectangle(Rect::new(1.0, 2.0, 3.0, 4.0), RED, 2.0);
        let transform = Transform::new(10.0, 20.0, 2.0);

        let mut ctx = RecordingContext::default();
        shape.draw(&mut ctx, &transform);
        assert!(ctx.ops.contains(&Op::LineWidth(4.0)));
        assert!(ctx.ops.contains(&Op::StrokeRect(12.0, 24.0, 6.0, 8.0)));
        assert_eq!(ctx.depth, 0);
        let plain_len = ctx.ops.len();

        shape.set_selected(true);
        assert!(shape.is_selected());
        let mut ctx = RecordingContext::default();
        shape.draw(&mut ctx, &transform);
        assert!(ctx.ops.len() > plain_len);
        assert_eq!(ctx.depth, 0);

        shape.set_selected(false);
        assert!(!shape.is_selected());
    }
}
