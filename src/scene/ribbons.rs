//! Process scene: horizontal ribbons that ripple sideways

use glam::DVec2;
use rand::Rng;

use super::{Scene, SceneKind, SceneStats};
use crate::color::{Rgb, TRIAD};
use crate::paint::Painter;
use crate::settings::ProcessSettings;
use crate::Size;

const LINE_WIDTH: f64 = 2.0;

/// A sampled sine ribbon around a fixed baseline.
///
/// Sample x positions are fixed at construction; only their y values move.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub baseline: f64,
    pub points: Vec<DVec2>,
    /// Offset added per frame (px)
    pub speed: f64,
    pub amplitude: f64,
    /// Radians per px
    pub frequency: f64,
    /// Phase accumulator (px)
    pub offset: f64,
    pub color: Rgb,
}

impl Line {
    /// Line `index` of `count`, evenly spaced down the canvas
    pub fn spawn(rng: &mut impl Rng, size: Size, index: usize, count: usize, spacing: f64) -> Self {
        let baseline = size.h() / (count + 1) as f64 * (index + 1) as f64;

        let mut points = Vec::new();
        let mut x = 0.0;
        while x <= size.w() {
            points.push(DVec2::new(x, baseline));
            x += spacing;
        }

        Self {
            baseline,
            points,
            speed: rng.random::<f64>() * 2.0 + 1.0,
            amplitude: rng.random::<f64>() * 25.0 + 15.0,
            frequency: rng.random::<f64>() * 0.02 + 0.01,
            offset: 0.0,
            color: TRIAD[index % TRIAD.len()],
        }
    }

    /// Advance the phase and recompute every sample's height in place
    pub fn update(&mut self) {
        self.offset += self.speed;
        for point in &mut self.points {
            point.y = self.baseline
                + ((point.x + self.offset) * self.frequency).sin() * self.amplitude;
        }
    }

    pub fn draw(&self, painter: &mut dyn Painter, alpha: f64) {
        let Some((first, rest)) = self.points.split_first() else {
            return;
        };

        painter.begin_path();
        painter.move_to(*first);
        for point in rest {
            painter.line_to(*point);
        }

        painter.set_global_alpha(alpha);
        painter.stroke(&self.color.hex(), LINE_WIDTH);
    }
}

/// Process canvas controller
#[derive(Debug, Clone)]
pub struct RibbonField {
    size: Size,
    pub lines: Vec<Line>,
    alpha: f64,
}

impl RibbonField {
    pub fn new(size: Size, settings: &ProcessSettings, rng: &mut impl Rng) -> Self {
        let spacing = settings.spacing.max(1.0);
        let lines = (0..settings.count)
            .map(|i| Line::spawn(rng, size, i, settings.count, spacing))
            .collect();
        Self {
            size,
            lines,
            alpha: settings.alpha,
        }
    }
}

impl Scene for RibbonField {
    fn kind(&self) -> SceneKind {
        SceneKind::Process
    }

    fn size(&self) -> Size {
        self.size
    }

    fn step(&mut self) {
        for line in &mut self.lines {
            line.update();
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.clear(self.size);
        painter.set_global_alpha(1.0);
        for line in &self.lines {
            line.draw(painter, self.alpha);
        }
    }

    fn stats(&self) -> SceneStats {
        SceneStats {
            entities: self.lines.len(),
            phase: self.lines.first().map(|l| l.offset).unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Command, Recorder};
    use crate::scene::scene_rng;

    fn field(width: u32, height: u32) -> RibbonField {
        RibbonField::new(
            Size::new(width, height),
            &ProcessSettings::default(),
            &mut scene_rng(SceneKind::Process, 11),
        )
    }

    #[test]
    fn test_baselines_and_samples() {
        let field = field(100, 700);
        assert_eq!(field.lines.len(), 6);
        for (i, line) in field.lines.iter().enumerate() {
            assert!((line.baseline - 100.0 * (i + 1) as f64).abs() < 1e-9);
            // x = 0, 10, ... 100
            assert_eq!(line.points.len(), 11);
            assert_eq!(line.color, TRIAD[i % 3]);
            assert!((1.0..3.0).contains(&line.speed));
            assert!((15.0..40.0).contains(&line.amplitude));
            assert!((0.01..0.03).contains(&line.frequency));
        }
    }

    #[test]
    fn test_update_moves_only_y() {
        let mut field = field(200, 600);
        let xs: Vec<Vec<f64>> = field
            .lines
            .iter()
            .map(|l| l.points.iter().map(|p| p.x).collect())
            .collect();

        for _ in 0..50 {
            field.step();
        }

        for (line, before) in field.lines.iter().zip(xs) {
            let after: Vec<f64> = line.points.iter().map(|p| p.x).collect();
            assert_eq!(after, before);
            assert!((line.offset - line.speed * 50.0).abs() < 1e-9);
            for p in &line.points {
                let expected =
                    line.baseline + ((p.x + line.offset) * line.frequency).sin() * line.amplitude;
                assert!((p.y - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_draw_polyline_per_line() {
        let mut field = field(50, 300);
        let mut rec = Recorder::new();
        field.frame(&mut rec);

        assert_eq!(rec.strokes().count(), 6);
        assert_eq!(rec.count(|c| matches!(c, Command::MoveTo(_))), 6);
        // 6 samples per line, first one is the move
        assert_eq!(rec.count(|c| matches!(c, Command::LineTo(_))), 6 * 5);
        assert_eq!(rec.count(|c| *c == Command::GlobalAlpha(0.2)), 6);
    }

    #[test]
    fn test_empty_line_draws_nothing() {
        let mut line = field(100, 100).lines.remove(0);
        line.points.clear();
        let mut rec = Recorder::new();
        line.draw(&mut rec, 0.2);
        assert!(rec.commands.is_empty());
    }
}
