//! Hero scene: drifting particles linked by faint lines
//!
//! The link pass checks every unique pair, so cost grows with n². Fine at the
//! default 80 particles (3160 pairs per frame).

use glam::DVec2;
use rand::Rng;

use super::{Scene, SceneKind, SceneStats};
use crate::bounce;
use crate::color::{ACCENTS, INDIGO, Rgb};
use crate::paint::Painter;
use crate::settings::HeroSettings;
use crate::Size;

/// A small colored dot that bounces off the canvas edges
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub color: Rgb,
}

impl Particle {
    /// Random particle somewhere inside `size`
    pub fn spawn(rng: &mut impl Rng, size: Size) -> Self {
        let pos = DVec2::new(rng.random::<f64>() * size.w(), rng.random::<f64>() * size.h());
        let vel = DVec2::new(
            (rng.random::<f64>() - 0.5) * 0.5,
            (rng.random::<f64>() - 0.5) * 0.5,
        );
        Self {
            pos,
            vel,
            radius: rng.random::<f64>() * 2.5 + 1.0,
            color: ACCENTS[rng.random_range(0..ACCENTS.len())],
        }
    }

    pub fn update(&mut self, bounds: DVec2) {
        bounce(&mut self.pos, &mut self.vel, bounds);
    }

    pub fn draw(&self, painter: &mut dyn Painter) {
        painter.begin_path();
        painter.circle(self.pos, self.radius);
        painter.fill(&self.color.hex());
    }
}

/// Opacity of the link between two particles `distance` apart.
///
/// Linear from `peak` at 0 down to 0 at `max_distance`, and 0 beyond.
#[inline]
pub fn link_opacity(distance: f64, max_distance: f64, peak: f64) -> f64 {
    if max_distance <= 0.0 || distance >= max_distance {
        return 0.0;
    }
    (1.0 - distance / max_distance) * peak
}

/// Hero canvas controller
#[derive(Debug, Clone)]
pub struct ParticleField {
    size: Size,
    pub particles: Vec<Particle>,
    link_distance: f64,
    link_opacity: f64,
    frames: u64,
}

impl ParticleField {
    pub fn new(size: Size, settings: &HeroSettings, rng: &mut impl Rng) -> Self {
        let particles = (0..settings.count)
            .map(|_| Particle::spawn(rng, size))
            .collect();
        Self {
            size,
            particles,
            link_distance: settings.link_distance,
            link_opacity: settings.link_opacity,
            frames: 0,
        }
    }

    fn bounds(&self) -> DVec2 {
        DVec2::new(self.size.w(), self.size.h())
    }

    fn draw_links(&self, painter: &mut dyn Painter) {
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.pos.distance(b.pos);
                if distance < self.link_distance {
                    let opacity = link_opacity(distance, self.link_distance, self.link_opacity);
                    painter.begin_path();
                    painter.move_to(a.pos);
                    painter.line_to(b.pos);
                    painter.stroke(&INDIGO.rgba(opacity), 1.0);
                }
            }
        }
    }
}

impl Scene for ParticleField {
    fn kind(&self) -> SceneKind {
        SceneKind::Hero
    }

    fn size(&self) -> Size {
        self.size
    }

    fn step(&mut self) {
        let bounds = self.bounds();
        for particle in &mut self.particles {
            particle.update(bounds);
        }
        self.frames += 1;
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.clear(self.size);
        for particle in &self.particles {
            particle.draw(painter);
        }
        self.draw_links(painter);
    }

    fn stats(&self) -> SceneStats {
        SceneStats {
            entities: self.particles.len(),
            phase: self.frames as f64,
        }
    }
}
