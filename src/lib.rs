//! Backdrop - decorative canvas animations for the marketing site
//!
//! Core modules:
//! - `scene`: Per-canvas simulations (particles, waves, polygons, ribbons, grid, orbs)
//! - `paint`: Drawing seam between scenes and the Canvas 2D API
//! - `reveal`: Staggered scroll-reveal scheduling
//! - `stage`: Resize coordinator that owns every running canvas loop
//! - `platform`: Browser glue (frame loops, observers, canvas painter)
//! - `settings`: Data-driven tuning, loaded from the page

pub mod color;
pub mod paint;
pub mod platform;
pub mod reveal;
pub mod scene;
pub mod settings;
pub mod stage;

pub use paint::{Painter, Recorder};
pub use scene::{Scene, SceneKind, SceneStats};
pub use settings::Settings;
pub use stage::Stage;

use glam::DVec2;

/// Scene constants (defaults for `Settings`)
pub mod consts {
    /// Hero particle count
    pub const PARTICLE_COUNT: usize = 80;
    /// Max distance for drawing a link between two particles
    pub const LINK_DISTANCE: f64 = 150.0;
    /// Link opacity at zero distance
    pub const LINK_OPACITY: f64 = 0.15;

    /// Philosophy wave curves
    pub const WAVE_CURVES: usize = 3;
    /// Horizontal sample spacing for wave curves (px)
    pub const WAVE_STEP: f64 = 5.0;
    /// Time added to the wave phase every frame
    pub const WAVE_TIME_STEP: f64 = 0.01;
    pub const WAVE_ALPHA: f64 = 0.1;

    /// Service polygon count
    pub const SHAPE_COUNT: usize = 15;
    pub const SHAPE_ALPHA: f64 = 0.15;

    /// Process ribbon count
    pub const RIBBON_COUNT: usize = 6;
    /// Horizontal sample spacing for ribbons (px)
    pub const RIBBON_SPACING: f64 = 10.0;
    pub const RIBBON_ALPHA: f64 = 0.2;

    /// Portfolio grid cell size (px)
    pub const GRID_CELL: f64 = 60.0;
    /// Grid drift per frame (px)
    pub const GRID_DRIFT: f64 = 0.3;
    pub const GRID_DOT_RADIUS: f64 = 2.0;

    /// Contact orb count
    pub const ORB_COUNT: usize = 3;

    /// Reveal observer intersection threshold
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    /// Reveal triggers this many px before the viewport bottom
    pub const REVEAL_BOTTOM_MARGIN: u32 = 100;
    /// Delay between reveals in the same notification batch (ms)
    pub const REVEAL_STAGGER_MS: u32 = 100;
    /// Attribute marking an element for scroll reveal
    pub const REVEAL_ATTRIBUTE: &str = "data-scroll-fade";
    /// Class added to an element once revealed
    pub const REVEAL_CLASS: &str = "visible";
}

/// Pixel size of a canvas backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.width as f64
    }

    #[inline]
    pub fn h(&self) -> f64 {
        self.height as f64
    }

    /// True when the canvas has no drawable area
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Move `pos` by `vel` and reflect off the `[0, bounds]` box.
///
/// On contact the velocity component flips sign and the position is clamped
/// back inside, so a body can't get stuck flipping outside the edge.
#[inline]
pub fn bounce(pos: &mut DVec2, vel: &mut DVec2, bounds: DVec2) {
    *pos += *vel;

    if pos.x < 0.0 || pos.x > bounds.x {
        vel.x = -vel.x;
        pos.x = pos.x.clamp(0.0, bounds.x.max(0.0));
    }
    if pos.y < 0.0 || pos.y > bounds.y {
        vel.y = -vel.y;
        pos.y = pos.y.clamp(0.0, bounds.y.max(0.0));
    }
}

/// Point on a circle of `radius` at `theta`
#[inline]
pub fn polar_to_cartesian(radius: f64, theta: f64) -> DVec2 {
    DVec2::new(radius * theta.cos(), radius * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bounce_right_edge() {
        let mut pos = DVec2::new(799.9, 300.0);
        let mut vel = DVec2::new(0.25, 0.1);
        bounce(&mut pos, &mut vel, DVec2::new(800.0, 600.0));

        assert!(vel.x < 0.0);
        assert!(vel.y > 0.0);
        assert_eq!(pos.x, 800.0);
    }

    #[test]
    fn test_bounce_zero_sized_bounds() {
        let mut pos = DVec2::ZERO;
        let mut vel = DVec2::new(0.2, -0.2);
        bounce(&mut pos, &mut vel, DVec2::ZERO);
        assert_eq!(pos, DVec2::ZERO);
        assert_eq!(vel, DVec2::new(-0.2, 0.2));
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, std::f64::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_bounce_stays_in_bounds(
            x in 0.0f64..800.0,
            y in 0.0f64..600.0,
            vx in -0.25f64..0.25,
            vy in -0.25f64..0.25,
            frames in 1usize..2000,
        ) {
            let bounds = DVec2::new(800.0, 600.0);
            let mut pos = DVec2::new(x, y);
            let mut vel = DVec2::new(vx, vy);
            for _ in 0..frames {
                let before = vel;
                bounce(&mut pos, &mut vel, bounds);
                // A component either keeps its value or flips sign exactly
                prop_assert!(vel.x == before.x || vel.x == -before.x);
                prop_assert!(vel.y == before.y || vel.y == -before.y);
                prop_assert!((0.0..=800.0).contains(&pos.x));
                prop_assert!((0.0..=600.0).contains(&pos.y));
            }
        }
    }
}
