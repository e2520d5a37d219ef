use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{RenderError, Result};

/// Pixel dimensions of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::Viewport(format!(
                "viewport must be non-empty, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    /// height / width, used to derive the vertical domain window
    pub fn aspect(&self) -> f64 {
        self.height as f64 / self.width as f64
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Which side of the pool a quantity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenSide {
    TokenA,
    TokenB,
}

impl TokenSide {
    pub fn name(&self) -> &'static str {
        match self {
            TokenSide::TokenA => "TokenA",
            TokenSide::TokenB => "TokenB",
        }
    }

    /// The opposite side of the pool
    pub fn other(&self) -> TokenSide {
        match self {
            TokenSide::TokenA => TokenSide::TokenB,
            TokenSide::TokenB => TokenSide::TokenA,
        }
    }
}

impl fmt::Display for TokenSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_rejects_empty() {
        assert!(Viewport::new(0, 500).is_err());
        assert!(Viewport::new(500, 0).is_err());
        assert!(Viewport::new(500, 500).is_ok());
    }

    #[test]
    fn test_aspect_ratio() -> Result<()> {
        let viewport = Viewport::new(400, 200)?;
        assert_eq!(viewport.aspect(), 0.5);
        Ok(())
    }

    #[test]
    fn test_token_side_names() {
        assert_eq!(TokenSide::TokenA.to_string(), "TokenA");
        assert_eq!(TokenSide::TokenA.other(), TokenSide::TokenB);
        assert_eq!(TokenSide::TokenB.other(), TokenSide::TokenA);
    }
}
