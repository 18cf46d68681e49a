//! Per-canvas scenes
//!
//! Each scene owns its entities and phase accumulators and knows how to
//! advance one frame and draw itself. Scenes are pure:
//! - Seeded RNG only (one `Pcg32` per scene)
//! - No DOM access; drawing goes through `Painter`
//! - No shared state between scenes

pub mod grid;
pub mod orbs;
pub mod particles;
pub mod polygons;
pub mod ribbons;
pub mod waves;

pub use grid::Grid;
pub use orbs::{Orb, OrbField};
pub use particles::{Particle, ParticleField, link_opacity};
pub use polygons::{PolygonField, Shape};
pub use ribbons::{Line, RibbonField};
pub use waves::WaveField;

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::paint::Painter;
use crate::settings::Settings;
use crate::Size;

/// Which site section a scene decorates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// Linked particles
    Hero,
    /// Layered sine waves
    Philosophy,
    /// Rotating polygons
    Service,
    /// Flowing ribbons
    Process,
    /// Drifting grid
    Portfolio,
    /// Gradient orbs
    Contact,
}

impl SceneKind {
    pub const ALL: [SceneKind; 6] = [
        SceneKind::Hero,
        SceneKind::Philosophy,
        SceneKind::Service,
        SceneKind::Process,
        SceneKind::Portfolio,
        SceneKind::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SceneKind::Hero => "hero",
            SceneKind::Philosophy => "philosophy",
            SceneKind::Service => "service",
            SceneKind::Process => "process",
            SceneKind::Portfolio => "portfolio",
            SceneKind::Contact => "contact",
        }
    }

    /// DOM id of the canvas this scene draws into
    pub fn canvas_id(&self) -> &'static str {
        match self {
            SceneKind::Hero => "hero-canvas",
            SceneKind::Philosophy => "philosophy-canvas",
            SceneKind::Service => "service-canvas",
            SceneKind::Process => "process-canvas",
            SceneKind::Portfolio => "portfolio-canvas",
            SceneKind::Contact => "contact-canvas",
        }
    }

    /// Per-kind RNG stream so scenes seeded together don't mirror each other
    fn stream(&self) -> u64 {
        *self as u64 + 1
    }
}

/// Observable scene state, used by the stage and tests
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneStats {
    /// Entities owned by the scene (0 for entity-free scenes)
    pub entities: usize,
    /// Main phase accumulator (0 for scenes without one)
    pub phase: f64,
}

/// A per-canvas controller
pub trait Scene {
    fn kind(&self) -> SceneKind;

    /// Surface size the scene was built for
    fn size(&self) -> Size;

    /// Advance one frame
    fn step(&mut self);

    /// Draw the current frame, starting from a cleared surface
    fn draw(&self, painter: &mut dyn Painter);

    fn stats(&self) -> SceneStats;

    /// Advance and draw (one display refresh)
    fn frame(&mut self, painter: &mut dyn Painter) {
        self.step();
        self.draw(painter);
    }
}

/// RNG for a scene of `kind`
pub fn scene_rng(kind: SceneKind, seed: u64) -> Pcg32 {
    Pcg32::new(seed, kind.stream())
}

/// Build a fresh scene for a surface of `size`
pub fn build(kind: SceneKind, size: Size, settings: &Settings, seed: u64) -> Box<dyn Scene> {
    let mut rng = scene_rng(kind, seed);
    match kind {
        SceneKind::Hero => Box::new(ParticleField::new(size, &settings.hero, &mut rng)),
        SceneKind::Philosophy => Box::new(WaveField::new(size, &settings.philosophy)),
        SceneKind::Service => Box::new(PolygonField::new(size, &settings.service, &mut rng)),
        SceneKind::Process => Box::new(RibbonField::new(size, &settings.process, &mut rng)),
        SceneKind::Portfolio => Box::new(Grid::new(size, &settings.portfolio)),
        SceneKind::Contact => Box::new(OrbField::new(size, &settings.contact, &mut rng)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Recorder;

    #[test]
    fn test_build_all_kinds() {
        let settings = Settings::default();
        let size = Size::new(800, 600);
        for kind in SceneKind::ALL {
            let scene = build(kind, size, &settings, 7);
            assert_eq!(scene.kind(), kind);
            assert_eq!(scene.size(), size);
        }
    }

    #[test]
    fn test_entity_counts() {
        let settings = Settings::default();
        let size = Size::new(800, 600);
        let count = |kind| build(kind, size, &settings, 1).stats().entities;
        assert_eq!(count(SceneKind::Hero), 80);
        assert_eq!(count(SceneKind::Philosophy), 0);
        assert_eq!(count(SceneKind::Service), 15);
        assert_eq!(count(SceneKind::Process), 6);
        assert_eq!(count(SceneKind::Portfolio), 0);
        assert_eq!(count(SceneKind::Contact), 3);
    }

    #[test]
    fn test_canvas_ids_unique() {
        let mut ids: Vec<_> = SceneKind::ALL.iter().map(|k| k.canvas_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
        assert!(ids.iter().all(|id| id.ends_with("-canvas")));
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let settings = Settings::default();
        let size = Size::new(320, 240);
        for kind in SceneKind::ALL {
            let mut scene = build(kind, size, &settings, 3);
            let mut rec = Recorder::new();
            scene.frame(&mut rec);
            assert_eq!(rec.commands.first(), Some(&crate::paint::Command::Clear(size)));
        }
    }

    #[test]
    fn test_zero_sized_surface_is_harmless() {
        let settings = Settings::default();
        for kind in SceneKind::ALL {
            let mut scene = build(kind, Size::default(), &settings, 3);
            let mut rec = Recorder::new();
            for _ in 0..10 {
                scene.frame(&mut rec);
            }
        }
    }

    #[test]
    fn test_same_seed_same_scene() {
        let settings = Settings::default();
        let size = Size::new(640, 480);
        let mut a = build(SceneKind::Hero, size, &settings, 99);
        let mut b = build(SceneKind::Hero, size, &settings, 99);
        let (mut ra, mut rb) = (Recorder::new(), Recorder::new());
        for _ in 0..5 {
            a.frame(&mut ra);
            b.frame(&mut rb);
        }
        assert_eq!(ra.commands, rb.commands);
    }
}
