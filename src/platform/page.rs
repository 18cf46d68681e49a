//! The live page as a stage `Backend`

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement};

use super::{CanvasPainter, FrameHandle, frame_loop};
use crate::scene::Scene;
use crate::stage::Backend;
use crate::Size;

/// Canvases of the current document
pub struct Page {
    document: Document,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Backend for Page {
    type Surface = HtmlCanvasElement;
    type Handle = FrameHandle;

    fn find(&self, id: &str) -> Option<HtmlCanvasElement> {
        self.document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn measure(&self, canvas: &HtmlCanvasElement) -> Size {
        Size::new(
            canvas.offset_width().max(0) as u32,
            canvas.offset_height().max(0) as u32,
        )
    }

    fn apply_size(&self, canvas: &HtmlCanvasElement, size: Size) {
        canvas.set_width(size.width);
        canvas.set_height(size.height);
    }

    fn start(&self, canvas: HtmlCanvasElement, scene: Box<dyn Scene>) -> Option<FrameHandle> {
        let kind = scene.kind();
        let started = CanvasPainter::new(&canvas).and_then(|painter| frame_loop::start(scene, painter));
        match started {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::warn!("#{}: {:?}", kind.canvas_id(), e);
                None
            }
        }
    }

    fn seed(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
