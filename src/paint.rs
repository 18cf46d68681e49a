//! Drawing seam between scenes and the Canvas 2D API
//!
//! Scenes only ever talk to a `Painter`. The browser implements it over
//! `CanvasRenderingContext2d` (see `platform::canvas`); tests and the native
//! binary use `Recorder`, which keeps every call as a `Command`.

use glam::DVec2;

use crate::Size;

/// One stop of a radial gradient: offset in `[0, 1]` and a CSS color
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
}

/// The subset of Canvas 2D the scenes draw with
pub trait Painter {
    /// Clear the whole surface
    fn clear(&mut self, size: Size);
    fn set_global_alpha(&mut self, alpha: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn line_to(&mut self, p: DVec2);
    fn close_path(&mut self);
    /// Full circle sub-path
    fn circle(&mut self, center: DVec2, radius: f64);

    /// Stroke the current path
    fn stroke(&mut self, color: &str, width: f64);
    /// Fill the current path
    fn fill(&mut self, color: &str);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: DVec2);
    fn rotate(&mut self, angle: f64);

    /// Fill the rectangle `(0, 0, size)` with a radial gradient from `center`
    /// (inner radius 0) out to `radius`
    fn fill_radial_gradient(
        &mut self,
        center: DVec2,
        radius: f64,
        stops: &[GradientStop],
        size: Size,
    );
}

/// A recorded painter call
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Clear(Size),
    GlobalAlpha(f64),
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    ClosePath,
    Circle { center: DVec2, radius: f64 },
    Stroke { color: String, width: f64 },
    Fill { color: String },
    Save,
    Restore,
    Translate(DVec2),
    Rotate(f64),
    RadialGradient {
        center: DVec2,
        radius: f64,
        stops: Vec<GradientStop>,
        size: Size,
    },
}

/// Painter that records calls instead of drawing
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<Command>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn strokes(&self) -> impl Iterator<Item = (&str, f64)> {
        self.commands.iter().filter_map(|c| match c {
            Command::Stroke { color, width } => Some((color.as_str(), *width)),
            _ => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            Command::Fill { color } => Some(color.as_str()),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Painter for Recorder {
    fn clear(&mut self, size: Size) {
        self.commands.push(Command::Clear(size));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(Command::GlobalAlpha(alpha));
    }

    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }

    fn move_to(&mut self, p: DVec2) {
        self.commands.push(Command::MoveTo(p));
    }

    fn line_to(&mut self, p: DVec2) {
        self.commands.push(Command::LineTo(p));
    }

    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }

    fn circle(&mut self, center: DVec2, radius: f64) {
        self.commands.push(Command::Circle { center, radius });
    }

    fn stroke(&mut self, color: &str, width: f64) {
        self.commands.push(Command::Stroke {
            color: color.to_string(),
            width,
        });
    }

    fn fill(&mut self, color: &str) {
        self.commands.push(Command::Fill {
            color: color.to_string(),
        });
    }

    fn save(&mut self) {
        self.commands.push(Command::Save);
    }

    fn restore(&mut self) {
        self.commands.push(Command::Restore);
    }

    fn translate(&mut self, offset: DVec2) {
        self.commands.push(Command::Translate(offset));
    }

    fn rotate(&mut self, angle: f64) {
        self.commands.push(Command::Rotate(angle));
    }

    fn fill_radial_gradient(
        &mut self,
        center: DVec2,
        radius: f64,
        stops: &[GradientStop],
        size: Size,
    ) {
        self.commands.push(Command::RadialGradient {
            center,
            radius,
            stops: stops.to_vec(),
            size,
        });
    }
}
