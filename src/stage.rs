//! Resize coordinator
//!
//! The stage owns one running loop per canvas. On start-up and on every
//! viewport resize it stops every loop, re-measures each canvas, and starts a
//! brand-new scene. It is a full reset: entity positions and phase
//! accumulators start over.

use crate::scene::{self, Scene, SceneKind};
use crate::settings::Settings;
use crate::Size;

/// A running render loop that can be stopped
pub trait LoopHandle {
    /// Stop requesting frames. Calling it twice is harmless.
    fn stop(&mut self);
}

/// Where the stage finds canvases and runs scenes
pub trait Backend {
    type Surface;
    type Handle: LoopHandle;

    /// Look up a canvas by DOM id
    fn find(&self, id: &str) -> Option<Self::Surface>;
    /// Size the canvas is displayed at
    fn measure(&self, surface: &Self::Surface) -> Size;
    /// Resize the canvas backing store
    fn apply_size(&self, surface: &Self::Surface, size: Size);
    /// Start driving `scene` into `surface`, or `None` if it can't be drawn to
    fn start(&self, surface: Self::Surface, scene: Box<dyn Scene>) -> Option<Self::Handle>;
    /// Seed for the next batch of scenes
    fn seed(&self) -> u64;
}

/// All running canvases
pub struct Stage<B: Backend> {
    backend: B,
    settings: Settings,
    running: Vec<(SceneKind, B::Handle)>,
}

impl<B: Backend> Stage<B> {
    pub fn new(backend: B, settings: Settings) -> Self {
        Self {
            backend,
            settings,
            running: Vec::new(),
        }
    }

    /// Start every enabled scene that has a canvas on the page.
    /// Returns the number of scenes running.
    pub fn start(&mut self) -> usize {
        self.rebuild()
    }

    /// Viewport resized: stop, re-measure and restart everything
    pub fn resize(&mut self) -> usize {
        let count = self.rebuild();
        log::info!("Resize: rebuilt {} canvas scene(s)", count);
        count
    }

    /// Stop every running loop
    pub fn stop_all(&mut self) {
        for (_, handle) in &mut self.running {
            handle.stop();
        }
        self.running.clear();
    }

    /// Kinds currently running, in start order
    pub fn running(&self) -> impl Iterator<Item = SceneKind> + '_ {
        self.running.iter().map(|(kind, _)| *kind)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn rebuild(&mut self) -> usize {
        self.stop_all();

        let seed = self.backend.seed();
        for kind in SceneKind::ALL {
            if !self.settings.is_enabled(kind) {
                continue;
            }
            let Some(surface) = self.backend.find(kind.canvas_id()) else {
                log::debug!("No #{} on this page", kind.canvas_id());
                continue;
            };

            let size = self.backend.measure(&surface);
            self.backend.apply_size(&surface, size);
            if size.is_empty() {
                log::debug!("#{} has no area (hidden?), running anyway", kind.canvas_id());
            } else {
                log::debug!("#{}: {}x{}", kind.canvas_id(), size.width, size.height);
            }

            let scene = scene::build(kind, size, &self.settings, seed);
            match self.backend.start(surface, scene) {
                Some(handle) => self.running.push((kind, handle)),
                None => log::warn!("Could not start {} scene", kind.as_str()),
            }
        }

        self.running.len()
    }
}

impl<B: Backend> Drop for Stage<B> {
    fn drop(&mut self) {
        self.stop_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Recorder;
    use crate::scene::SceneStats;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    /// A started scene and whether its loop is still live
    struct Slot {
        kind: SceneKind,
        scene: Box<dyn Scene>,
        live: Rc<Cell<bool>>,
    }

    struct FakeHandle(Rc<Cell<bool>>);

    impl LoopHandle for FakeHandle {
        fn stop(&mut self) {
            self.0.set(false);
        }
    }

    /// In-memory page: canvas id -> displayed size
    #[derive(Default)]
    struct FakePage {
        canvases: HashMap<&'static str, Size>,
        applied: RefCell<Vec<(&'static str, Size)>>,
        slots: RefCell<Vec<Slot>>,
        refuse: Option<SceneKind>,
    }

    impl FakePage {
        fn with_all(size: Size) -> Self {
            Self {
                canvases: SceneKind::ALL.iter().map(|k| (k.canvas_id(), size)).collect(),
                ..Default::default()
            }
        }

        /// Advance every live scene by `frames`
        fn run(&self, frames: usize) {
            let mut rec = Recorder::new();
            for slot in self.slots.borrow_mut().iter_mut() {
                if slot.live.get() {
                    for _ in 0..frames {
                        slot.scene.frame(&mut rec);
                    }
                }
            }
        }

        fn live(&self) -> Vec<(SceneKind, SceneStats)> {
            self.slots
                .borrow()
                .iter()
                .filter(|s| s.live.get())
                .map(|s| (s.kind, s.scene.stats()))
                .collect()
        }
    }

    impl Backend for FakePage {
        type Surface = &'static str;
        type Handle = FakeHandle;

        fn find(&self, id: &str) -> Option<&'static str> {
            self.canvases.keys().copied().find(|k| *k == id)
        }

        fn measure(&self, surface: &&'static str) -> Size {
            self.canvases[surface]
        }

        fn apply_size(&self, surface: &&'static str, size: Size) {
            self.applied.borrow_mut().push((*surface, size));
        }

        fn start(&self, _surface: &'static str, scene: Box<dyn Scene>) -> Option<FakeHandle> {
            if self.refuse == Some(scene.kind()) {
                return None;
            }
            let live = Rc::new(Cell::new(true));
            self.slots.borrow_mut().push(Slot {
                kind: scene.kind(),
                scene,
                live: live.clone(),
            });
            Some(FakeHandle(live))
        }

        fn seed(&self) -> u64 {
            1234
        }
    }

    #[test]
    fn test_start_all_six() {
        let mut stage = Stage::new(FakePage::with_all(Size::new(800, 600)), Settings::default());
        assert_eq!(stage.start(), 6);
        assert_eq!(stage.running().collect::<Vec<_>>(), SceneKind::ALL.to_vec());
        assert_eq!(stage.backend().applied.borrow().len(), 6);
    }

    #[test]
    fn test_missing_canvas_is_skipped() {
        let mut page = FakePage::with_all(Size::new(800, 600));
        page.canvases.remove("portfolio-canvas");
        let mut stage = Stage::new(page, Settings::default());

        assert_eq!(stage.start(), 5);
        assert!(!stage.running().any(|k| k == SceneKind::Portfolio));
    }

    #[test]
    fn test_unstartable_canvas_is_skipped() {
        let page = FakePage {
            refuse: Some(SceneKind::Hero),
            ..FakePage::with_all(Size::new(800, 600))
        };
        let mut stage = Stage::new(page, Settings::default());
        assert_eq!(stage.start(), 5);
    }

    #[test]
    fn test_disabled_scenes_not_started() {
        let settings = Settings {
            enabled: vec![SceneKind::Contact],
            ..Default::default()
        };
        let mut stage = Stage::new(FakePage::with_all(Size::new(800, 600)), settings);
        assert_eq!(stage.start(), 1);
        assert_eq!(stage.running().collect::<Vec<_>>(), vec![SceneKind::Contact]);
    }

    #[test]
    fn test_resize_stops_old_loops_and_resets() {
        let mut stage = Stage::new(FakePage::with_all(Size::new(800, 600)), Settings::default());
        stage.start();
        stage.backend().run(30);

        stage.resize();
        let page = stage.backend();
        assert_eq!(page.slots.borrow().len(), 12);
        assert_eq!(page.live().len(), 6);
        // Fresh scenes: accumulators back at zero
        for (kind, stats) in page.live() {
            assert_eq!(stats.phase, 0.0, "{kind:?}");
        }
    }

    #[test]
    fn test_resize_uses_new_measurement() {
        let mut stage = Stage::new(FakePage::with_all(Size::new(800, 600)), Settings::default());
        stage.start();
        stage.backend.canvases.insert("hero-canvas", Size::new(1024, 300));
        stage.resize();

        let applied = stage.backend().applied.borrow();
        assert!(applied.contains(&("hero-canvas", Size::new(1024, 300))));
    }

    #[test]
    fn test_double_resize_matches_single() {
        let settings = Settings::default();

        let mut once = Stage::new(FakePage::with_all(Size::new(800, 600)), settings.clone());
        once.start();
        once.backend().run(10);
        once.resize();
        once.backend().run(25);

        let mut twice = Stage::new(FakePage::with_all(Size::new(800, 600)), settings);
        twice.start();
        twice.backend().run(10);
        twice.resize();
        twice.resize();
        twice.backend().run(25);

        let a = once.backend().live();
        let b = twice.backend().live();
        assert_eq!(a.len(), b.len());
        for ((ka, sa), (kb, sb)) in a.iter().zip(&b) {
            assert_eq!(ka, kb);
            assert_eq!(sa.entities, sb.entities);
            assert_eq!(sa.phase, sb.phase);
        }
    }

    #[test]
    fn test_drop_stops_loops() {
        let page_slots;
        {
            let mut stage =
                Stage::new(FakePage::with_all(Size::new(400, 300)), Settings::default());
            stage.start();
            page_slots = stage
                .backend()
                .slots
                .borrow()
                .iter()
                .map(|s| s.live.clone())
                .collect::<Vec<_>>();
        }
        assert!(page_slots.iter().all(|live| !live.get()));
    }
}
