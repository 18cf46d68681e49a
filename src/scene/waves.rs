//! Philosophy scene: layered sine waves
//!
//! No entities. Every frame bumps a shared time accumulator and strokes each
//! curve at low alpha so they layer into a soft band.

use glam::DVec2;

use super::{Scene, SceneKind, SceneStats};
use crate::color::TRIAD;
use crate::paint::Painter;
use crate::settings::PhilosophySettings;
use crate::Size;

/// Horizontal wave frequency (radians per px)
const WAVE_FREQUENCY: f64 = 0.01;
/// Amplitude of the first curve; curve `i` gets `(i + 1)` times this
const BASE_AMPLITUDE: f64 = 30.0;
const LINE_WIDTH: f64 = 2.0;

/// Philosophy canvas controller
#[derive(Debug, Clone)]
pub struct WaveField {
    size: Size,
    curves: usize,
    step: f64,
    time_step: f64,
    alpha: f64,
    /// Phase accumulator
    pub time: f64,
}

impl WaveField {
    pub fn new(size: Size, settings: &PhilosophySettings) -> Self {
        Self {
            size,
            curves: settings.curves,
            step: settings.step.max(1.0),
            time_step: settings.time_step,
            alpha: settings.alpha,
            time: 0.0,
        }
    }

    /// Height of curve `index` at `x` for the current time
    pub fn sample(&self, index: usize, x: f64) -> f64 {
        let amplitude = BASE_AMPLITUDE * (index + 1) as f64;
        self.size.h() / 2.0 + (x * WAVE_FREQUENCY + self.time + index as f64).sin() * amplitude
    }
}

impl Scene for WaveField {
    fn kind(&self) -> SceneKind {
        SceneKind::Philosophy
    }

    fn size(&self) -> Size {
        self.size
    }

    fn step(&mut self) {
        self.time += self.time_step;
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.clear(self.size);
        let mid = self.size.h() / 2.0;

        for index in 0..self.curves {
            let color = TRIAD[index % TRIAD.len()];
            painter.begin_path();
            painter.move_to(DVec2::new(0.0, mid));

            let mut x = 0.0;
            while x < self.size.w() {
                painter.line_to(DVec2::new(x, self.sample(index, x)));
                x += self.step;
            }

            painter.set_global_alpha(self.alpha);
            painter.stroke(&color.hex(), LINE_WIDTH);
        }

        painter.set_global_alpha(1.0);
    }

    fn stats(&self) -> SceneStats {
        SceneStats {
            entities: 0,
            phase: self.time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Command, Recorder};

    #[test]
    fn test_time_accumulates() {
        let mut waves = WaveField::new(Size::new(100, 100), &PhilosophySettings::default());
        assert_eq!(waves.time, 0.0);
        for _ in 0..100 {
            waves.step();
        }
        assert!((waves.time - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_three_strokes_sampled_every_5px() {
        let size = Size::new(100, 200);
        let mut waves = WaveField::new(size, &PhilosophySettings::default());
        let mut rec = Recorder::new();
        waves.frame(&mut rec);

        let strokes: Vec<_> = rec.strokes().collect();
        assert_eq!(strokes, vec![("#6366f1", 2.0), ("#8b5cf6", 2.0), ("#ec4899", 2.0)]);
        // x = 0, 5, ... 95 per curve
        assert_eq!(rec.count(|c| matches!(c, Command::LineTo(_))), 3 * 20);
        assert_eq!(rec.count(|c| *c == Command::GlobalAlpha(0.1)), 3);
        assert_eq!(rec.commands.last(), Some(&Command::GlobalAlpha(1.0)));
    }

    #[test]
    fn test_amplitude_grows_with_index() {
        let waves = WaveField::new(Size::new(800, 400), &PhilosophySettings::default());
        for index in 0..3 {
            let amplitude = 30.0 * (index + 1) as f64;
            for x in (0..800).step_by(5) {
                let y = waves.sample(index, x as f64);
                assert!((y - 200.0).abs() <= amplitude + 1e-9);
            }
        }
    }
}
