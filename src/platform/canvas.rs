//! `Painter` over the browser's Canvas 2D context

use std::f64::consts::TAU;

use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::paint::{GradientStop, Painter};
use crate::Size;

/// Draws into one canvas element
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, size: Size) {
        self.ctx.clear_rect(0.0, 0.0, size.w(), size.h());
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: DVec2) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: DVec2) {
        self.ctx.line_to(p.x, p.y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn circle(&mut self, center: DVec2, radius: f64) {
        // Only fails on a negative radius
        let _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
    }

    fn stroke(&mut self, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
    }

    fn fill(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: DVec2) {
        let _ = self.ctx.translate(offset.x, offset.y);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.ctx.rotate(angle);
    }

    fn fill_radial_gradient(
        &mut self,
        center: DVec2,
        radius: f64,
        stops: &[GradientStop],
        size: Size,
    ) {
        let gradient = match self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius.max(0.0))
        {
            Ok(gradient) => gradient,
            Err(e) => {
                log::debug!("Radial gradient rejected: {:?}", e);
                return;
            }
        };
        for stop in stops {
            let _ = gradient.add_color_stop(stop.offset as f32, &stop.color);
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, size.w(), size.h());
    }
}
