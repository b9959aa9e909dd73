//! Rendering boundary for annotations.
//!
//! Drawables never talk to Cairo directly; they render through the
//! [`DrawContext`] trait in device coordinates. [`CairoDrawContext`] is the
//! production implementation, tests substitute a recording context.

use super::color::Color;
use super::font::FontDescriptor;

/// Primitive drawing operations in device coordinates.
pub trait DrawContext {
    /// Pushes the current drawing state (color, line width, dash pattern).
    fn save(&mut self);
    /// Pops the state pushed by the matching [`DrawContext::save`].
    fn restore(&mut self);

    fn set_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    /// Sets a dash pattern; an empty slice restores solid strokes.
    fn set_dash(&mut self, dashes: &[f64]);

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    /// Strokes the ellipse inscribed in the given rectangle.
    fn stroke_ellipse(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_polyline(&mut self, points: &[(f64, f64)]);

    /// Restricts later drawing to the given rectangle until the next [`DrawContext::restore`].
    fn clip_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Draws text with its layout box anchored at the top-left `(x, y)`.
    fn draw_text(&mut self, x: f64, y: f64, text: &str, font: &FontDescriptor, size: f64);
}

/// [`DrawContext`] backed by a Cairo context, with text laid out by Pango.
pub struct CairoDrawContext<'a> {
    ctx: &'a cairo::Context,
}

impl<'a> CairoDrawContext<'a> {
    pub fn new(ctx: &'a cairo::Context) -> Self {
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);
        Self { ctx }
    }

    fn stroke(&self) {
        if let Err(err) = self.ctx.stroke() {
            log::debug!("Cairo stroke failed: {}", err);
        }
    }

    fn fill(&self) {
        if let Err(err) = self.ctx.fill() {
            log::debug!("Cairo fill failed: {}", err);
        }
    }

    fn trace_path(&self, points: &[(f64, f64)]) -> bool {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return false;
        };
        self.ctx.move_to(x0, y0);
        for &(x, y) in rest {
            self.ctx.line_to(x, y);
        }
        true
    }
}

impl DrawContext for CairoDrawContext<'_> {
    fn save(&mut self) {
        let _ = self.ctx.save();
    }

    fn restore(&mut self) {
        let _ = self.ctx.restore();
    }

    fn set_color(&mut self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_dash(&mut self, dashes: &[f64]) {
        self.ctx.set_dash(dashes, 0.0);
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.stroke();
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.rectangle(x, y, w, h);
        self.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.rectangle(x, y, w, h);
        self.fill();
    }

    fn stroke_ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let rx = w / 2.0;
        let ry = h / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            // Degenerate ellipse collapses to a line
            self.stroke_line(x, y, x + w, y + h);
            return;
        }

        // Scale a unit circle, then stroke in the original space so the
        // line width stays uniform.
        let _ = self.ctx.save();
        self.ctx.translate(x + rx, y + ry);
        self.ctx.scale(rx, ry);
        self.ctx.arc(0.0, 0.0, 1.0, 0.0, std::f64::consts::PI * 2.0);
        let _ = self.ctx.restore();
        self.stroke();
    }

    fn stroke_polyline(&mut self, points: &[(f64, f64)]) {
        if self.trace_path(points) {
            self.stroke();
        }
    }

    fn clip_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.rectangle(x, y, w, h);
        self.ctx.clip();
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, font: &FontDescriptor, size: f64) {
        if text.is_empty() {
            return;
        }
        let layout = pangocairo::functions::create_layout(self.ctx);
        let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        self.ctx.move_to(x, y);
        pangocairo::functions::show_layout(self.ctx, &layout);
    }
}
