use crate::curve::DomainWindow;
use crate::types::Viewport;

/// Affine maps from domain values to pixel coordinates, built once per
/// render pass. The vertical map is inverted because pixel rows grow
/// downward while domain values grow upward.
///
/// No clamping: values outside the window map off-surface and are
/// clipped per pixel by the rasterizer.
#[derive(Debug, Clone, Copy)]
pub struct PixelMapper {
    window: DomainWindow,
    width: f64,
    height: f64,
}

impl PixelMapper {
    pub fn new(window: DomainWindow, viewport: &Viewport) -> Self {
        Self {
            window,
            width: viewport.width as f64,
            height: viewport.height as f64,
        }
    }

    pub fn plot_x(&self, x: f64) -> f64 {
        (x - self.window.min_x) / self.window.width() * self.width
    }

    pub fn plot_y(&self, y: f64) -> f64 {
        self.height - (y - self.window.min_y) / self.window.height() * self.height
    }

    /// Map a domain point to pixel coordinates
    pub fn plot(&self, x: f64, y: f64) -> (f64, f64) {
        (self.plot_x(x), self.plot_y(y))
    }

    pub fn window(&self) -> &DomainWindow {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use crate::curve::PoolReserves;
    use crate::types::Result;

    use super::*;

    fn mapper() -> Result<PixelMapper> {
        let reserves = PoolReserves::new(100.0, 100.0)?;
        let viewport = Viewport::new(500, 500)?;
        let window = DomainWindow::frame(&reserves, &viewport);
        Ok(PixelMapper::new(window, &viewport))
    }

    #[test]
    fn test_window_corners_map_to_surface_corners() -> Result<()> {
        let mapper = mapper()?;
        assert_eq!(mapper.plot_x(10.0), 0.0);
        assert_eq!(mapper.plot_x(400.0), 500.0);
        assert_eq!(mapper.plot_y(10.0), 500.0);
        assert_eq!(mapper.plot_y(400.0), 0.0);
        Ok(())
    }

    #[test]
    fn test_plot_x_strictly_increasing() -> Result<()> {
        let mapper = mapper()?;
        let mut previous = mapper.plot_x(10.0);
        let mut x = 11.0;
        while x <= 400.0 {
            let px = mapper.plot_x(x);
            assert!(px > previous);
            previous = px;
            x += 1.0;
        }
        Ok(())
    }

    #[test]
    fn test_plot_y_strictly_decreasing() -> Result<()> {
        let mapper = mapper()?;
        let mut previous = mapper.plot_y(10.0);
        let mut y = 11.0;
        while y <= 400.0 {
            let py = mapper.plot_y(y);
            assert!(py < previous);
            previous = py;
            y += 1.0;
        }
        Ok(())
    }

    #[test]
    fn test_out_of_window_values_map_off_surface() -> Result<()> {
        let mapper = mapper()?;
        assert!(mapper.plot_x(5.0) < 0.0);
        assert!(mapper.plot_y(0.0) > 500.0);
        Ok(())
    }
}
