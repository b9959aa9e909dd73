//! Drawable annotations and their rendering (Cairo-based).
//!
//! This module defines the annotation layer overlaid on the molecule canvas:
//! - [`DrawingObject`]: the contract every annotation satisfies
//! - [`TextLabel`] and [`Shape`]: the concrete annotation types
//! - [`Frame`]: ordered container of annotations
//! - [`Transform`] and [`DrawContext`]: the rendering boundary

pub mod annotation;
pub mod color;
pub mod context;
pub mod error;
pub mod font;
pub mod frame;
pub mod label;
pub mod object;
pub mod render;
pub mod shape;
pub mod transform;

pub use annotation::Annotation;
pub use color::Color;
pub use context::{CairoDrawContext, DrawContext};
pub use error::GeometryError;
pub use font::FontDescriptor;
pub use frame::Frame;
pub use label::TextLabel;
pub use object::DrawingObject;
pub use render::{render_frame, render_frame_png};
pub use shape::{Shape, ShapeKind};
pub use transform::Transform;

pub use color::{BLACK, BLUE, GRAY, GREEN, ORANGE, RED, WHITE};
