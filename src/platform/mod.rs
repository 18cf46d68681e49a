//! Browser glue
//!
//! Everything that touches the DOM lives here:
//! - `canvas`: `Painter` over `CanvasRenderingContext2d`
//! - `frame_loop`: `requestAnimationFrame` loop with an explicit stop handle
//! - `observer`: `IntersectionObserver` wiring for scroll reveals
//! - `page`: the `Backend` the stage runs against
//!
//! Only compiled for wasm32; the rest of the crate is host-testable.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod frame_loop;
#[cfg(target_arch = "wasm32")]
pub mod observer;
#[cfg(target_arch = "wasm32")]
pub mod page;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
#[cfg(target_arch = "wasm32")]
pub use frame_loop::FrameHandle;
#[cfg(target_arch = "wasm32")]
pub use page::Page;
