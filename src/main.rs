//! Backdrop entry point
//!
//! On the web: wires scroll reveals, starts every canvas scene and rebuilds
//! them on resize. Natively: a headless smoke run of every scene.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use backdrop::platform::{Page, observer};
    use backdrop::{Settings, Stage};

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Backdrop starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let settings = Settings::load();

        // Scroll reveals
        match observer::watch(&document, &settings.reveal) {
            Ok(count) => log::info!("Watching {} reveal target(s)", count),
            Err(e) => log::warn!("Scroll reveal unavailable: {:?}", e),
        }

        // Canvas scenes
        let stage = Rc::new(RefCell::new(Stage::new(Page::new(document), settings)));
        let count = stage.borrow_mut().start();
        log::info!("Started {} canvas scene(s)", count);

        // Rebuild everything on resize
        {
            let stage = stage.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                stage.borrow_mut().resize();
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_site::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use backdrop::scene::{self, SceneKind};
    use backdrop::{Recorder, Settings, Size};

    env_logger::init();
    log::info!("Backdrop (native) starting...");
    log::info!("Native mode draws nothing - build for wasm32 and serve the page for the real thing");

    const FRAMES: usize = 120;
    let settings = Settings::load();
    let size = Size::new(800, 600);

    for kind in SceneKind::ALL {
        let mut scene = scene::build(kind, size, &settings, 42);
        let mut recorder = Recorder::new();
        for _ in 0..FRAMES {
            scene.frame(&mut recorder);
        }
        let stats = scene.stats();
        log::info!(
            "{:>10}: {} entities, phase {:.2}, {} draw calls over {} frames",
            kind.as_str(),
            stats.entities,
            stats.phase,
            recorder.commands.len(),
            FRAMES
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
