//! Portfolio scene: a drifting grid with accent dots at intersections

use glam::DVec2;

use super::{Scene, SceneKind, SceneStats};
use crate::color::{GRID_LINE, INDIGO};
use crate::paint::Painter;
use crate::settings::PortfolioSettings;
use crate::Size;

/// Portfolio canvas controller
#[derive(Debug, Clone)]
pub struct Grid {
    size: Size,
    cell: f64,
    drift: f64,
    dot_radius: f64,
    /// Phase accumulator, always in `[0, cell]`
    pub offset: f64,
}

impl Grid {
    pub fn new(size: Size, settings: &PortfolioSettings) -> Self {
        Self {
            size,
            cell: settings.cell.max(1.0),
            drift: settings.drift,
            dot_radius: settings.dot_radius,
            offset: 0.0,
        }
    }

    /// Line positions along an axis of `length`, starting at `-offset`
    pub fn positions(&self, length: f64) -> impl Iterator<Item = f64> + '_ {
        std::iter::successors(Some(-self.offset), move |p| Some(p + self.cell))
            .take_while(move |p| *p < length)
    }
}

impl Scene for Grid {
    fn kind(&self) -> SceneKind {
        SceneKind::Portfolio
    }

    fn size(&self) -> Size {
        self.size
    }

    fn step(&mut self) {
        self.offset += self.drift;
        if self.offset > self.cell {
            self.offset = 0.0;
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        let (w, h) = (self.size.w(), self.size.h());
        painter.clear(self.size);

        let line = GRID_LINE.hex();
        for x in self.positions(w) {
            painter.begin_path();
            painter.move_to(DVec2::new(x, 0.0));
            painter.line_to(DVec2::new(x, h));
            painter.stroke(&line, 1.0);
        }
        for y in self.positions(h) {
            painter.begin_path();
            painter.move_to(DVec2::new(0.0, y));
            painter.line_to(DVec2::new(w, y));
            painter.stroke(&line, 1.0);
        }

        let dot = INDIGO.hex();
        for x in self.positions(w) {
            for y in self.positions(h) {
                painter.begin_path();
                painter.circle(DVec2::new(x, y), self.dot_radius);
                painter.fill(&dot);
            }
        }
    }

    fn stats(&self) -> SceneStats {
        SceneStats {
            entities: 0,
            phase: self.offset,
        }
    }
}
