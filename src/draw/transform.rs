//! Model-to-device coordinate mapping.

use crate::util::Rect;

/// Depictor transformation: uniform scaling followed by a translation.
///
/// A model coordinate `x` maps to `x * scaling + offset_x` on the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scaling: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scaling: 1.0,
        }
    }

    pub const fn new(offset_x: f64, offset_y: f64, scaling: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            scaling,
        }
    }

    pub fn apply_x(&self, x: f64) -> f64 {
        x * self.scaling + self.offset_x
    }

    pub fn apply_y(&self, y: f64) -> f64 {
        y * self.scaling + self.offset_y
    }

    pub fn apply_to_point(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (self.apply_x(x), self.apply_y(y))
    }

    /// Maps a length (line width, font size) which only scales.
    pub fn apply_length(&self, length: f64) -> f64 {
        length * self.scaling.abs()
    }

    pub fn apply_to_rect(&self, rect: &Rect) -> Rect {
        Rect::from_corners(
            self.apply_x(rect.x),
            self.apply_y(rect.y),
            self.apply_x(rect.max_x()),
            self.apply_y(rect.max_y()),
        )
    }

    /// Returns the transformation that applies `self` first and `next` afterwards.
    pub fn then(&self, next: &Transform) -> Transform {
        Transform {
            offset_x: next.apply_x(self.offset_x),
            offset_y: next.apply_y(self.offset_y),
            scaling: self.scaling * next.scaling,
        }
    }

    /// Inverse mapping (device to model), or `None` for a degenerate scaling.
    pub fn inverse(&self) -> Option<Transform> {
        if self.scaling == 0.0 || !self.scaling.is_finite() {
            return None;
        }
        Some(Transform {
            offset_x: -self.offset_x / self.scaling,
            offset_y: -self.offset_y / self.scaling,
            scaling: 1.0 / self.scaling,
        })
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Transform {
        Transform {
            offset_x: self.offset_x + dx,
            offset_y: self.offset_y + dy,
            ..*self
        }
    }

    /// Zooms the device output by `factor` around the device origin.
    pub fn scaled(&self, factor: f64) -> Transform {
        Transform {
            offset_x: self.offset_x * factor,
            offset_y: self.offset_y * factor,
            scaling: self.scaling * factor,
        }
    }
}
