use crate::render::DrawContext;

/// Stroke an arrow from (x1, y1) to (x2, y2) in surface coordinates:
/// the shaft plus a V-shaped head of two barbs at the terminal end,
/// sized at 1/7th of the shaft length.
///
/// Zero-length (and non-finite) vectors have no direction to point the
/// head along and are skipped outright instead of dividing by zero.
pub fn draw_arrow(ctx: &mut DrawContext<'_>, x1: f64, y1: f64, x2: f64, y2: f64) {
    let (dx, dy) = (x2 - x1, y2 - y1);
    let norm = (dx * dx + dy * dy).sqrt();
    if !norm.is_finite() || norm <= f64::EPSILON {
        tracing::trace!(x1, y1, x2, y2, "skipping degenerate arrow");
        return;
    }
    let (udx, udy) = (dx / norm, dy / norm);
    let size = norm / 7.0;

    ctx.stroke_line(x1, y1, x2, y2);
    // barbs point back along the shaft, offset to either side
    ctx.stroke_line(x2, y2, x2 - udx * size - udy * size, y2 - udy * size + udx * size);
    ctx.stroke_line(x2, y2, x2 - udx * size + udy * size, y2 - udy * size - udx * size);
}

#[cfg(test)]
mod tests {
    use crate::render::{Rgba, Surface};
    use crate::types::{Result, Viewport};

    use super::*;

    #[test]
    fn test_arrow_strokes_shaft_and_head() -> Result<()> {
        let mut surface = Surface::new(&Viewport::new(100, 100)?);
        let mut ctx = surface.context();
        draw_arrow(&mut ctx, 10.0, 50.0, 80.0, 50.0);
        drop(ctx);
        assert_eq!(surface.pixel(10, 50), Some(Rgba::BLACK));
        assert_eq!(surface.pixel(80, 50), Some(Rgba::BLACK));
        // barbs land one head-length back, 10px to either side
        assert_eq!(surface.pixel(70, 60), Some(Rgba::BLACK));
        assert_eq!(surface.pixel(70, 40), Some(Rgba::BLACK));
        Ok(())
    }

    #[test]
    fn test_zero_length_arrow_is_skipped() -> Result<()> {
        let mut surface = Surface::new(&Viewport::new(100, 100)?);
        let mut ctx = surface.context();
        draw_arrow(&mut ctx, 42.0, 42.0, 42.0, 42.0);
        drop(ctx);
        assert_eq!(surface.count_not(Rgba::TRANSPARENT), 0);
        Ok(())
    }
}
