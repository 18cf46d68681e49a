//! Service scene: slowly rotating outlined polygons

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;

use super::{Scene, SceneKind, SceneStats};
use crate::color::{ACCENTS, Rgb};
use crate::paint::Painter;
use crate::polar_to_cartesian;
use crate::settings::ServiceSettings;
use crate::Size;

const LINE_WIDTH: f64 = 2.0;

/// A regular polygon that drifts, spins and wraps around the canvas edges
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Current rotation (radians)
    pub rotation: f64,
    /// Rotation per frame (radians)
    pub rotation_speed: f64,
    /// Side count, 4 to 6
    pub sides: u32,
    /// Circumradius (px)
    pub size: f64,
    pub color: Rgb,
}

impl Shape {
    pub fn spawn(rng: &mut impl Rng, size: Size) -> Self {
        let pos = DVec2::new(rng.random::<f64>() * size.w(), rng.random::<f64>() * size.h());
        let radius = rng.random::<f64>() * 50.0 + 30.0;
        let vel = DVec2::new(
            (rng.random::<f64>() - 0.5) * 0.3,
            (rng.random::<f64>() - 0.5) * 0.3,
        );
        Self {
            pos,
            vel,
            rotation: rng.random::<f64>() * TAU,
            rotation_speed: (rng.random::<f64>() - 0.5) * 0.02,
            sides: rng.random_range(4..=6),
            size: radius,
            color: ACCENTS[rng.random_range(0..ACCENTS.len())],
        }
    }

    /// Move, spin and wrap. A shape leaves one edge fully before reappearing
    /// fully outside the opposite one.
    pub fn update(&mut self, bounds: DVec2) {
        self.pos += self.vel;
        self.rotation += self.rotation_speed;

        let margin = self.size;
        if self.pos.x < -margin {
            self.pos.x = bounds.x + margin;
        }
        if self.pos.x > bounds.x + margin {
            self.pos.x = -margin;
        }
        if self.pos.y < -margin {
            self.pos.y = bounds.y + margin;
        }
        if self.pos.y > bounds.y + margin {
            self.pos.y = -margin;
        }
    }

    /// Vertices around the local origin, before rotation
    pub fn vertices(&self) -> impl Iterator<Item = DVec2> + '_ {
        let step = TAU / self.sides as f64;
        (0..self.sides).map(move |i| polar_to_cartesian(self.size, step * i as f64))
    }

    pub fn draw(&self, painter: &mut dyn Painter, alpha: f64) {
        painter.save();
        painter.translate(self.pos);
        painter.rotate(self.rotation);

        painter.begin_path();
        for (i, v) in self.vertices().enumerate() {
            if i == 0 {
                painter.move_to(v);
            } else {
                painter.line_to(v);
            }
        }
        painter.close_path();

        painter.set_global_alpha(alpha);
        painter.stroke(&self.color.hex(), LINE_WIDTH);

        painter.restore();
    }
}

/// Service canvas controller
#[derive(Debug, Clone)]
pub struct PolygonField {
    size: Size,
    pub shapes: Vec<Shape>,
    alpha: f64,
}

impl PolygonField {
    pub fn new(size: Size, settings: &ServiceSettings, rng: &mut impl Rng) -> Self {
        Self {
            size,
            shapes: (0..settings.count).map(|_| Shape::spawn(rng, size)).collect(),
            alpha: settings.alpha,
        }
    }
}

impl Scene for PolygonField {
    fn kind(&self) -> SceneKind {
        SceneKind::Service
    }

    fn size(&self) -> Size {
        self.size
    }

    fn step(&mut self) {
        let bounds = DVec2::new(self.size.w(), self.size.h());
        for shape in &mut self.shapes {
            shape.update(bounds);
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.clear(self.size);
        painter.set_global_alpha(1.0);
        for shape in &self.shapes {
            shape.draw(painter, self.alpha);
        }
    }

    fn stats(&self) -> SceneStats {
        SceneStats {
            entities: self.shapes.len(),
            phase: 0.0,
        }
    }
}
