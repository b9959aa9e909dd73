//! Cairo-based rendering of annotation frames.

use super::color::{Color, SELECTION_BLUE};
use super::context::{CairoDrawContext, DrawContext};
use super::frame::Frame;
use super::transform::Transform;
use crate::util::Rect;
use thiserror::Error;

/// Gap between an annotation's bounds and its selection outline, in device pixels.
pub const SELECTION_PADDING: f64 = 3.0;

const SELECTION_DASH: [f64; 2] = [4.0, 3.0];

/// Errors raised while rasterizing a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// Draws the dashed outline that marks a selected annotation.
///
/// `device_rect` is already in device coordinates.
pub fn draw_selection_outline(ctx: &mut dyn DrawContext, device_rect: &Rect) {
    let mut outline = *device_rect;
    outline.inflate(SELECTION_PADDING);

    ctx.save();
    ctx.set_color(SELECTION_BLUE);
    ctx.set_line_width(1.0);
    ctx.set_dash(&SELECTION_DASH);
    ctx.stroke_rect(outline.x, outline.y, outline.width, outline.height);
    ctx.set_dash(&[]);
    ctx.restore();
}

/// Renders a frame onto a Cairo context, painting `background` first if given.
pub fn render_frame(
    ctx: &cairo::Context,
    frame: &Frame,
    transform: &Transform,
    background: Option<Color>,
) {
    if let Some(bg) = background {
        ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
        let _ = ctx.paint();
    }

    let mut draw_ctx = CairoDrawContext::new(ctx);
    frame.draw_all(&mut draw_ctx, transform);
}

/// Rasterizes a frame into an ARGB surface and encodes it as PNG.
pub fn render_frame_png(
    frame: &Frame,
    transform: &Transform,
    width: i32,
    height: i32,
    background: Option<Color>,
) -> Result<Vec<u8>, RenderError> {
    if width <= 0 || height <= 0 {
        return Err(RenderError::InvalidSize { width, height });
    }

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        render_frame(&ctx, frame, transform, background);
    }
    surface.flush();

    let mut buffer = Vec::new();
    surface.write_to_png(&mut buffer)?;
    log::debug!(
        "Rendered {} annotations into {}x{} PNG ({} bytes)",
        frame.len(),
        width,
        height,
        buffer.len()
    );
    Ok(buffer)
}

/// Computes a transform that fits `bounds` into a `width` x `height` surface with a margin.
pub fn fit_transform(bounds: &Rect, width: f64, height: f64, margin: f64) -> Transform {
    let avail_w = (width - 2.0 * margin).max(1.0);
    let avail_h = (height - 2.0 * margin).max(1.0);
    let sx = if bounds.width > 0.0 { avail_w / bounds.width } else { 1.0 };
    let sy = if bounds.height > 0.0 { avail_h / bounds.height } else { 1.0 };
    let scaling = sx.min(sy);

    let (cx, cy) = bounds.center();
    Transform::new(width / 2.0 - cx * scaling, height / 2.0 - cy * scaling, scaling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::context::recording::{Op, RecordingContext};
    use crate::draw::{RED, Shape};

    #[test]
    fn selection_outline_is_padded_and_dashed() {
        let mut ctx = RecordingContext::default();
        draw_selection_outline(&mut ctx, &Rect::new(10.0, 10.0, 20.0, 5.0));
        assert!(ctx.ops.contains(&Op::Dash(SELECTION_DASH.to_vec())));
        assert!(ctx.ops.contains(&Op::StrokeRect(7.0, 7.0, 26.0, 11.0)));
        assert_eq!(ctx.depth, 0);
    }

    #[test]
    fn png_output_has_signature() {
        let mut frame = Frame::new();
        frame.add(Shape::rectangle(Rect::new(2.0, 2.0, 10.0, 10.0), RED, 2.0));
        let png = render_frame_png(&frame, &Transform::identity(), 16, 16, None).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn png_rejects_empty_surface() {
        let frame = Frame::new();
        assert!(matches!(
            render_frame_png(&frame, &Transform::identity(), 0, 10, None),
            Err(RenderError::InvalidSize { .. })
        ));
    }

    #[test]
    fn fit_transform_centers_bounds() {
        let t = fit_transform(&Rect::new(0.0, 0.0, 10.0, 5.0), 120.0, 120.0, 10.0);
        assert_eq!(t.scaling, 10.0);
        assert_eq!(t.apply_to_point((5.0, 2.5)), (60.0, 60.0));
    }
}
