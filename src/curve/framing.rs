use serde::{Deserialize, Serialize};

use crate::curve::PoolReserves;
use crate::types::Viewport;

/// Value range visible on each axis for one render pass.
///
/// The horizontal window widens to roughly 4x the current reserve scale
/// and narrows to roughly 1/10th of it, clamped so the bounds stay
/// positive and non-degenerate. The vertical window follows from the
/// viewport aspect ratio so the visual slope of the curve matches the
/// pixel grid rather than independently fitting `reserveB`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainWindow {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl DomainWindow {
    /// Frame the reserves. Only called for funded pools; zero reserves
    /// abort the pass before framing.
    pub fn frame(reserves: &PoolReserves, viewport: &Viewport) -> Self {
        let k = reserves.product();

        let max_x = k / (reserves.token_a() / 4.0).max(1.0);
        let min_x = (k / (reserves.token_a() * 10.0)).max(1.0);

        let aspect = viewport.aspect();
        Self {
            min_x,
            max_x,
            min_y: min_x * aspect,
            max_y: max_x * aspect,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
