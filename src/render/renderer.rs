use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::{DomainWindow, PixelMapper, PoolReserves, SwapAmounts, SwapProjection};
use crate::render::{DrawContext, Surface, draw_arrow};
use crate::types::{Result, TokenSide};
use crate::utils::config::StyleConfig;

pub const CAPTION_TOKEN_A: &str = "-- TokenA Reserve --";
pub const CAPTION_TOKEN_B: &str = "-- TokenB Reserve --";

/// Where a caption sits relative to the drawing surface. Captions are
/// host-positioned text outside the surface bounds, not surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptionPlacement {
    BelowSurface,
    LeftOfSurfaceRotated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    pub text: &'static str,
    pub placement: CaptionPlacement,
}

/// What a render pass did
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// A reserve is still zero; nothing was drawn and the previous
    /// pixels were left untouched
    NotReady,
    Rendered(RenderSummary),
}

/// Quantities computed during a completed pass, for hosts that report
/// the swap outcome alongside the pixels
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub window: DomainWindow,
    pub projections: Vec<SwapProjection>,
}

/// Full repaint of the constant-product curve for one set of inputs.
///
/// Each pass is synchronous and idempotent: clear, axes, sampled
/// hyperbola, current-reserve marker, then one overlay per positive
/// swap amount. Identical inputs produce identical pixels.
pub struct CurveRenderer {
    style: StyleConfig,
}

impl CurveRenderer {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// The two fixed axis captions the host lays out around the surface
    pub fn captions(&self) -> [Caption; 2] {
        [
            Caption {
                text: CAPTION_TOKEN_A,
                placement: CaptionPlacement::BelowSurface,
            },
            Caption {
                text: CAPTION_TOKEN_B,
                placement: CaptionPlacement::LeftOfSurfaceRotated,
            },
        ]
    }

    pub fn render(
        &self,
        surface: &mut Surface,
        reserves: &PoolReserves,
        swap: &SwapAmounts,
    ) -> Result<RenderOutcome> {
        if !reserves.is_ready() {
            debug!(
                reserve_a = reserves.token_a(),
                reserve_b = reserves.token_b(),
                "pool not funded yet, leaving surface untouched"
            );
            return Ok(RenderOutcome::NotReady);
        }

        let viewport = surface.viewport();
        let k = reserves.product();
        let window = DomainWindow::frame(reserves, &viewport);
        let mapper = PixelMapper::new(window, &viewport);
        debug!(%viewport, k, ?window, "render pass");

        let mut ctx = surface.context();
        ctx.clear();

        self.draw_axes(&mut ctx, &mapper);
        self.draw_curve(&mut ctx, &mapper, k, viewport.width);
        self.draw_current_marker(&mut ctx, &mapper, reserves);

        let mut projections = Vec::new();
        if swap.amount_a() > 0.0 {
            let projection = SwapProjection::token_a_in(reserves, swap.amount_a());
            self.draw_overlay(&mut ctx, &mapper, reserves, &projection);
            projections.push(projection);
        }
        if swap.amount_b() > 0.0 {
            let projection = SwapProjection::token_b_in(reserves, swap.amount_b());
            self.draw_overlay(&mut ctx, &mapper, reserves, &projection);
            projections.push(projection);
        }

        Ok(RenderOutcome::Rendered(RenderSummary {
            window,
            projections,
        }))
    }

    /// Vertical axis at x = minX, horizontal axis at y = minY
    fn draw_axes(&self, ctx: &mut DrawContext<'_>, mapper: &PixelMapper) {
        let window = *mapper.window();
        ctx.set_stroke(self.style.axis_color);
        ctx.set_line_width(self.style.line_width);
        ctx.stroke_line(
            mapper.plot_x(window.min_x),
            mapper.plot_y(0.0),
            mapper.plot_x(window.min_x),
            mapper.plot_y(window.max_y),
        );
        ctx.stroke_line(
            mapper.plot_x(0.0),
            mapper.plot_y(window.min_y),
            mapper.plot_x(window.max_x),
            mapper.plot_y(window.min_y),
        );
    }

    /// Sample y = k / x at one step per horizontal pixel and stroke the
    /// connected polyline. Non-finite samples near x = 0 are dropped.
    fn draw_curve(&self, ctx: &mut DrawContext<'_>, mapper: &PixelMapper, k: f64, width: u32) {
        let window = mapper.window();
        let step = window.max_x / width as f64;
        let mut points = Vec::with_capacity(width as usize + 1);
        let mut x = window.min_x;
        while x <= window.max_x {
            let y = k / x;
            if y.is_finite() {
                points.push(mapper.plot(x, y));
            }
            x += step;
        }
        ctx.set_stroke(self.style.curve_color);
        ctx.set_line_width(self.style.curve_width);
        ctx.stroke_polyline(&points);
        ctx.set_line_width(self.style.line_width);
    }

    fn draw_current_marker(
        &self,
        ctx: &mut DrawContext<'_>,
        mapper: &PixelMapper,
        reserves: &PoolReserves,
    ) {
        let (cx, cy) = mapper.plot(reserves.token_a(), reserves.token_b());
        ctx.set_fill(self.style.current_marker_color);
        ctx.fill_circle(cx, cy, self.style.marker_radius);
    }

    /// Projected marker, the two-segment axis-aligned arrow path from
    /// the current point, and the output label
    fn draw_overlay(
        &self,
        ctx: &mut DrawContext<'_>,
        mapper: &PixelMapper,
        reserves: &PoolReserves,
        projection: &SwapProjection,
    ) {
        let (x0, y0) = mapper.plot(reserves.token_a(), reserves.token_b());
        let (x1, y1) = mapper.plot(projection.new_reserve_a, projection.new_reserve_b);

        ctx.set_fill(self.style.projected_marker_color);
        ctx.fill_circle(x1, y1, self.style.marker_radius);

        ctx.set_stroke(self.style.arrow_color);
        let text_size = self.style.text_size as f64;
        match projection.side {
            // B falls first, then A grows: vertical then horizontal
            TokenSide::TokenA => {
                draw_arrow(ctx, x0, y0, x0, y1);
                draw_arrow(ctx, x0, y1, x1, y1);
                ctx.set_fill(self.style.text_color);
                ctx.fill_text(&projection.label(), x1 + text_size, y1, self.style.text_size);
            }
            // A falls first, then B grows: horizontal then vertical
            TokenSide::TokenB => {
                draw_arrow(ctx, x0, y0, x1, y0);
                draw_arrow(ctx, x1, y0, x1, y1);
                ctx.set_fill(self.style.text_color);
                ctx.fill_text(
                    &projection.label(),
                    x1 + text_size,
                    y1 - text_size,
                    self.style.text_size,
                );
            }
        }
    }
}
