//! Frame container for managing the annotations on a canvas.

use super::annotation::Annotation;
use super::context::DrawContext;
use super::object::DrawingObject;
use super::transform::Transform;
use crate::util::Rect;

/// Ordered collection of annotations (first = bottom layer, last = top layer).
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub annotations: Vec<Annotation>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an annotation on top of the existing ones and returns its index.
    pub fn add(&mut self, annotation: impl Into<Annotation>) -> usize {
        self.annotations.push(annotation.into());
        self.annotations.len() - 1
    }

    pub fn clear(&mut self) {
        self.annotations.clear();
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Returns the index of the topmost annotation whose bounds contain the point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.annotations
            .iter()
            .rposition(|a| a.bounding_rect().contains(x, y))
    }

    /// Selects the annotation at `index` and deselects every other one.
    pub fn select_only(&mut self, index: usize) {
        for (i, annotation) in self.annotations.iter_mut().enumerate() {
            annotation.set_selected(i == index);
        }
    }

    pub fn clear_selection(&mut self) {
        for annotation in &mut self.annotations {
            annotation.set_selected(false);
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter().filter(|a| a.is_selected())
    }

    /// Moves every selected, movable annotation. Returns how many were moved.
    pub fn translate_selected(&mut self, dx: f64, dy: f64) -> usize {
        let mut moved = 0;
        for annotation in self.annotations.iter_mut().filter(|a| a.is_selected()) {
            if annotation.is_movable() {
                annotation.translate(dx, dy);
                moved += 1;
            } else {
                log::debug!("Skipping immovable annotation during move");
            }
        }
        moved
    }

    /// Removes every selected annotation and returns them in their previous order.
    pub fn remove_selected(&mut self) -> Vec<Annotation> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.annotations)
            .into_iter()
            .partition(|a| a.is_selected());
        self.annotations = kept;
        removed
    }

    /// Union of all annotation bounds, or `None` for an empty frame.
    pub fn bounds(&self) -> Option<Rect> {
        self.annotations
            .iter()
            .map(|a| a.bounding_rect())
            .reduce(Rect::union)
    }

    /// Draws all annotations bottom to top.
    pub fn draw_all(&self, ctx: &mut dyn DrawContext, transform: &Transform) {
        for annotation in &self.annotations {
            annotation.draw(ctx, transform);
        }
    }
}
