//! Free-standing text annotations.

use super::color::Color;
use super::context::DrawContext;
use super::error::GeometryError;
use super::font::FontDescriptor;
use super::object::{DrawingObject, validate_rect, validate_scale};
use super::render::draw_selection_outline;
use super::transform::Transform;
use crate::util::Rect;

/// A text label placed on the canvas.
///
/// The label's box starts out as the measured size of its text and can then
/// be moved, resized, or scaled like any other annotation. Scaling also scales
/// the font size so the text keeps filling its box. Resizing leaves the font
/// alone; text that no longer fits is clipped to the box when drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    text: String,
    rect: Rect,
    font: FontDescriptor,
    size: f64,
    color: Color,
    background: Option<Color>,
    selected: bool,
}

impl TextLabel {
    /// Creates a label with its top-left corner at `(x, y)`, sized to fit the text.
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font: FontDescriptor,
        size: f64,
        color: Color,
    ) -> Self {
        let text = text.into();
        let (width, height) = measure_text(&text, &font, size);
        Self::with_rect(text, Rect::new(x, y, width, height), font, size, color)
    }

    /// Creates a label occupying an explicit rectangle.
    pub fn with_rect(
        text: impl Into<String>,
        rect: Rect,
        font: FontDescriptor,
        size: f64,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            rect,
            font,
            size,
            color,
            background: None,
            selected: false,
        }
    }

    /// Fills the label's box with `color` behind the text.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> f64 {
        self.size
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Measures the logical extent of `text` with Pango.
///
/// Falls back to a rough estimate when no Cairo surface can be created.
pub fn measure_text(text: &str, font: &FontDescriptor, size: f64) -> (f64, f64) {
    match pango_extent(text, font, size) {
        Some(extent) => extent,
        None => {
            log::debug!("Text measurement unavailable, estimating extent for '{}'", text);
            let chars = text.chars().count() as f64;
            (chars * size * 0.6, size * 1.2)
        }
    }
}

fn pango_extent(text: &str, font: &FontDescriptor, size: f64) -> Option<(f64, f64)> {
    // A tiny image surface is enough; only the layout is needed.
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 1, 1).ok()?;
    let ctx = cairo::Context::new(&surface).ok()?;

    let layout = pangocairo::functions::create_layout(&ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    let (_ink, logical) = layout.extents();
    let scale = pango::SCALE as f64;
    Some((logical.width() as f64 / scale, logical.height() as f64 / scale))
}

impl DrawingObject for TextLabel {
    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.rect.translate(dx, dy);
    }

    fn bounding_rect(&self) -> Rect {
        self.rect
    }

    fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), GeometryError> {
        self.rect = validate_rect(x, y, width, height)?;
        Ok(())
    }

    fn scale(&mut self, factor: f64) -> Result<(), GeometryError> {
        let factor = validate_scale(factor)?;
        self.rect.width *= factor;
        self.rect.height *= factor;
        self.size *= factor;
        Ok(())
    }

    fn draw(&self, ctx: &mut dyn DrawContext, transform: &Transform) {
        let device = transform.apply_to_rect(&self.rect);

        ctx.save();
        ctx.clip_rect(device.x, device.y, device.width, device.height);
        if let Some(bg) = self.background {
            ctx.set_color(bg);
            ctx.fill_rect(device.x, device.y, device.width, device.height);
        }
        ctx.set_color(self.color);
        ctx.draw_text(
            device.x,
            device.y,
            &self.text,
            &self.font,
            transform.apply_length(self.size),
        );
        ctx.restore();

        if self.selected {
            draw_selection_outline(ctx, &device);
        }
    }

    fn is_movable(&self) -> bool {
        true
    }
}
