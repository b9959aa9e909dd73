//! Geometry helpers shared by the drawable annotations.
//!
//! This module provides:
//! - [`Rect`], the axis-aligned rectangle used for bounds and hit-testing
//! - Arrowhead geometry calculations
//! - Color name lookups used by the configuration system

use crate::draw::{Color, color::*};

// ============================================================================
// Rectangle
// ============================================================================

/// Axis-aligned rectangle in editor coordinates.
///
/// Width and height are never negative for rectangles produced by this crate;
/// a zero extent is allowed (a horizontal line has a zero-height bounding box).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from two opposite corners in any order.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::from_min_max(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
    }

    /// Builds a rectangle from min/max bounds.
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns true if the point lies inside or on the edge of the rectangle.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.max_x() && py >= self.y && py <= self.max_y()
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Expands the rectangle evenly in all directions by `amount`.
    pub fn inflate(&mut self, amount: f64) {
        self.x -= amount;
        self.y -= amount;
        self.width += amount * 2.0;
        self.height += amount * 2.0;
    }

    /// Returns a rectangle that covers both input rectangles.
    pub fn union(self, other: Rect) -> Rect {
        Rect::from_min_max(
            self.x.min(other.x),
            self.y.min(other.y),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// Returns true if all components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates the two barb points of an arrowhead.
///
/// The head sits at `tip` and points away from `tail`. Its length is capped at
/// 30% of the shaft so short arrows keep a sane shape. When the shaft is shorter
/// than one unit both barbs collapse onto the tip.
pub fn arrowhead_points(
    tip: (f64, f64),
    tail: (f64, f64),
    length: f64,
    angle_degrees: f64,
) -> [(f64, f64); 2] {
    let dx = tip.0 - tail.0;
    let dy = tip.1 - tail.1;
    let shaft = (dx * dx + dy * dy).sqrt();

    if shaft < 1.0 {
        return [tip, tip];
    }

    let ux = dx / shaft;
    let uy = dy / shaft;
    let head = length.min(shaft * 0.3);

    let angle = angle_degrees.to_radians();
    let (sin_a, cos_a) = angle.sin_cos();

    let left = (
        tip.0 - head * (ux * cos_a - uy * sin_a),
        tip.1 - head * (uy * cos_a + ux * sin_a),
    );
    let right = (
        tip.0 - head * (ux * cos_a + uy * sin_a),
        tip.1 - head * (uy * cos_a - ux * sin_a),
    );

    [left, right]
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values (case-insensitive).
///
/// Used by the configuration system and scene files to parse color names.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "orange" => Some(ORANGE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "gray" | "grey" => Some(GRAY),
        "selection" => Some(SELECTION_BLUE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrowhead_caps_at_thirty_percent_of_shaft() {
        let [(lx, ly), _] = arrowhead_points((10.0, 10.0), (0.0, 10.0), 100.0, 30.0);
        let distance = ((10.0 - lx).powi(2) + (10.0 - ly).powi(2)).sqrt();
        assert!((distance - 3.0).abs() < 1e-9);
    }

    #[test]
    fn arrowhead_handles_degenerate_shafts() {
        let barbs = arrowhead_points((5.0, 5.0), (5.0, 5.0), 15.0, 45.0);
        assert_eq!(barbs, [(5.0, 5.0), (5.0, 5.0)]);
    }

    #[test]
    fn rect_from_corners_normalizes_order() {
        let rect = Rect::from_corners(10.0, 8.0, 2.0, 4.0);
        assert_eq!(rect, Rect::new(2.0, 4.0, 8.0, 4.0));
    }

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(10.0, 5.0));
        assert!(!rect.contains(10.5, 2.0));
    }

    #[test]
    fn rect_union_and_inflate() {
        let mut rect = Rect::new(0.0, 0.0, 4.0, 4.0).union(Rect::new(6.0, -2.0, 2.0, 2.0));
        assert_eq!(rect, Rect::new(0.0, -2.0, 8.0, 6.0));
        rect.inflate(1.0);
        assert_eq!(rect, Rect::new(-1.0, -3.0, 10.0, 8.0));
    }

    #[test]
    fn color_names_resolve() {
        assert_eq!(name_to_color("White").unwrap(), WHITE);
        assert_eq!(name_to_color("grey").unwrap(), GRAY);
        assert!(name_to_color("chartreuse").is_none());
    }
}
