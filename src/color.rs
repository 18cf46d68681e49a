//! Site palette and CSS color formatting

use serde::{Deserialize, Serialize};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba()` string with the given alpha
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// CSS hex string (`#rrggbb`)
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const INDIGO: Rgb = Rgb::new(99, 102, 241);
pub const PURPLE: Rgb = Rgb::new(139, 92, 246);
pub const PINK: Rgb = Rgb::new(236, 72, 153);
pub const EMERALD: Rgb = Rgb::new(16, 185, 129);
/// Pale indigo used for the portfolio grid lines
pub const GRID_LINE: Rgb = Rgb::new(224, 231, 255);

/// Four-color accent palette (particles, polygons)
pub const ACCENTS: [Rgb; 4] = [INDIGO, PURPLE, PINK, EMERALD];

/// Three-color palette (waves, ribbons, orbs)
pub const TRIAD: [Rgb; 3] = [INDIGO, PURPLE, PINK];
