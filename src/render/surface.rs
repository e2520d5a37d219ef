use serde::{Deserialize, Serialize};
use std::fmt;

use crate::render::font;
use crate::types::{RenderError, Result, Viewport};

/// 8-bit RGBA color, written as "#rrggbb" in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0, g: 0, b: 0, a: 0 };
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a "#rrggbb" hex string
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(RenderError::ColorParse(format!(
                "expected #rrggbb, got {:?}",
                value
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| RenderError::ColorParse(format!("{:?}: {}", value, e)))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgba {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// Owned RGBA drawing surface of exactly `width x height` pixels.
///
/// The surface is the only shared mutable resource of a render pass;
/// all mutation goes through the scoped [`DrawContext`] borrow.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Surface {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            pixels: vec![Rgba::TRANSPARENT; viewport.width as usize * viewport.height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.width,
            height: self.height,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Count of pixels that differ from the given color
    pub fn count_not(&self, color: Rgba) -> usize {
        self.pixels.iter().filter(|p| **p != color).count()
    }

    /// Acquire the drawing context for one render pass. The mutable
    /// borrow is released when the returned guard goes out of scope,
    /// on every path including early returns.
    pub fn context(&mut self) -> DrawContext<'_> {
        DrawContext {
            surface: self,
            stroke: Rgba::BLACK,
            fill: Rgba::BLACK,
            line_width: 1.0,
        }
    }

    /// Encode as binary PPM (P6), compositing onto an opaque backdrop
    pub fn to_ppm(&self, backdrop: Rgba) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n255\n", self.width, self.height).into_bytes();
        out.reserve(self.pixels.len() * 3);
        for p in &self.pixels {
            let alpha = p.a as u16;
            let over = |c: u8, b: u8| {
                ((c as u16 * alpha + b as u16 * (255 - alpha)) / 255) as u8
            };
            out.push(over(p.r, backdrop.r));
            out.push(over(p.g, backdrop.g));
            out.push(over(p.b, backdrop.b));
        }
        out
    }
}

/// Scoped drawing handle mirroring a 2D canvas context: stroke/fill
/// color and line-width state plus the primitives the render pass
/// needs. All rasterization clips per pixel to the surface bounds.
#[derive(Debug)]
pub struct DrawContext<'a> {
    surface: &'a mut Surface,
    stroke: Rgba,
    fill: Rgba,
    line_width: f64,
}

impl DrawContext<'_> {
    pub fn set_stroke(&mut self, color: Rgba) {
        self.stroke = color;
    }

    pub fn set_fill(&mut self, color: Rgba) {
        self.fill = color;
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.line_width = width.max(1.0);
    }

    /// Reset every pixel, the first step of an idempotent repaint
    pub fn clear(&mut self) {
        self.surface.pixels.fill(Rgba::TRANSPARENT);
    }

    /// Stroke a straight segment. Non-finite endpoints are skipped
    /// rather than rasterized.
    pub fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
            tracing::trace!(x1, y1, x2, y2, "skipping non-finite segment");
            return;
        }
        let (dx, dy) = (x2 - x1, y2 - y1);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0);
        let mut i = 0.0;
        while i <= steps {
            let t = i / steps;
            self.stamp(x1 + dx * t, y1 + dy * t);
            i += 1.0;
        }
    }

    /// Stroke a connected polyline through the given points
    pub fn stroke_polyline(&mut self, points: &[(f64, f64)]) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0].0, pair[0].1, pair[1].0, pair[1].1);
        }
    }

    /// Fill a disc of the given radius centered on (cx, cy)
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
        if !(cx.is_finite() && cy.is_finite()) || radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let mut y = (cy - radius).floor();
        while y <= (cy + radius).ceil() {
            let mut x = (cx - radius).floor();
            while x <= (cx + radius).ceil() {
                if (x - cx).powi(2) + (y - cy).powi(2) <= r2 {
                    self.put(x as i64, y as i64, self.fill);
                }
                x += 1.0;
            }
            y += 1.0;
        }
    }

    /// Draw text with the built-in bitmap font; y is the baseline
    pub fn fill_text(&mut self, text: &str, x: f64, y: f64, size: u32) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        let scale = (size / 8).max(1) as i64;
        let cell = ((font::GLYPH_WIDTH + font::GLYPH_SPACING) as i64) * scale;
        let top = y as i64 - font::GLYPH_HEIGHT as i64 * scale;
        let mut pen = x as i64;
        for c in text.chars() {
            if let Some(rows) = font::glyph(c) {
                for (row, &bits) in rows.iter().enumerate() {
                    for col in 0..font::GLYPH_WIDTH {
                        if bits & (1u8 << (font::GLYPH_WIDTH - 1 - col)) != 0 {
                            self.block(
                                pen + col as i64 * scale,
                                top + row as i64 * scale,
                                scale,
                                self.fill,
                            );
                        }
                    }
                }
            }
            pen += cell;
        }
    }

    fn stamp(&mut self, x: f64, y: f64) {
        let w = self.line_width.round() as i64;
        let start = -(w / 2);
        let (px, py) = (x.round() as i64, y.round() as i64);
        for oy in start..start + w {
            for ox in start..start + w {
                self.put(px + ox, py + oy, self.stroke);
            }
        }
    }

    fn block(&mut self, x: i64, y: i64, side: i64, color: Rgba) {
        for oy in 0..side {
            for ox in 0..side {
                self.put(x + ox, y + oy, color);
            }
        }
    }

    fn put(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.surface.width as i64 || y >= self.surface.height as i64 {
            return;
        }
        let idx = y as usize * self.surface.width as usize + x as usize;
        if let Some(px) = self.surface.pixels.get_mut(idx) {
            *px = color;
        }
    }
}
