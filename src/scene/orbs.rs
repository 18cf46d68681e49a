//! Contact scene: large soft gradient orbs
//!
//! Each orb paints a radial gradient over the whole canvas. Orbs are layered
//! in order with plain alpha blending, so overlaps brighten; nothing is capped.

use glam::DVec2;
use rand::Rng;

use super::{Scene, SceneKind, SceneStats};
use crate::bounce;
use crate::color::{Rgb, TRIAD};
use crate::paint::{GradientStop, Painter};
use crate::settings::ContactSettings;
use crate::Size;

/// Gradient stops as (offset, alpha)
const STOPS: [(f64, f64); 3] = [(0.0, 0.15), (0.5, 0.08), (1.0, 0.0)];

/// A drifting glow that bounces off the canvas edges
#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub color: Rgb,
}

impl Orb {
    /// Orb `index`, placed within 100px of the canvas center
    pub fn spawn(rng: &mut impl Rng, size: Size, index: usize) -> Self {
        let center = DVec2::new(size.w(), size.h()) / 2.0;
        let jitter = DVec2::new(
            (rng.random::<f64>() - 0.5) * 200.0,
            (rng.random::<f64>() - 0.5) * 200.0,
        );
        let vel = DVec2::new(
            (rng.random::<f64>() - 0.5) * 0.5,
            (rng.random::<f64>() - 0.5) * 0.5,
        );
        Self {
            pos: center + jitter,
            vel,
            radius: rng.random::<f64>() * 100.0 + 100.0,
            color: TRIAD[index % TRIAD.len()],
        }
    }

    pub fn update(&mut self, bounds: DVec2) {
        bounce(&mut self.pos, &mut self.vel, bounds);
    }

    pub fn gradient(&self) -> [GradientStop; 3] {
        STOPS.map(|(offset, alpha)| GradientStop {
            offset,
            color: self.color.rgba(alpha),
        })
    }

    pub fn draw(&self, painter: &mut dyn Painter, size: Size) {
        painter.fill_radial_gradient(self.pos, self.radius, &self.gradient(), size);
    }
}

/// Contact canvas controller
#[derive(Debug, Clone)]
pub struct OrbField {
    size: Size,
    pub orbs: Vec<Orb>,
}

impl OrbField {
    pub fn new(size: Size, settings: &ContactSettings, rng: &mut impl Rng) -> Self {
        Self {
            size,
            orbs: (0..settings.count)
                .map(|i| Orb::spawn(rng, size, i))
                .collect(),
        }
    }
}

impl Scene for OrbField {
    fn kind(&self) -> SceneKind {
        SceneKind::Contact
    }

    fn size(&self) -> Size {
        self.size
    }

    fn step(&mut self) {
        let bounds = DVec2::new(self.size.w(), self.size.h());
        for orb in &mut self.orbs {
            orb.update(bounds);
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.clear(self.size);
        for orb in &self.orbs {
            orb.draw(painter, self.size);
        }
    }

    fn stats(&self) -> SceneStats {
        SceneStats {
            entities: self.orbs.len(),
            phase: 0.0,
        }
    }
}
