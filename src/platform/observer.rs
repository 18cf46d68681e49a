//! Scroll reveal wiring
//!
//! Elements marked with `data-scroll-fade` get the `visible` class once they
//! scroll into view. Revealed elements are unobserved right away.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::consts::{REVEAL_ATTRIBUTE, REVEAL_CLASS};
use crate::reveal::{Notice, Reveal, RevealQueue, RevealTarget};
use crate::settings::RevealSettings;

impl RevealTarget for Element {
    fn is_revealed(&self) -> bool {
        self.class_list().contains(REVEAL_CLASS)
    }

    fn reveal(&self) {
        let _ = self.class_list().add_1(REVEAL_CLASS);
    }
}

/// Observe every reveal-marked element in `document`.
/// Returns how many elements are being watched.
pub fn watch(document: &Document, settings: &RevealSettings) -> Result<u32, JsValue> {
    let elements = document.query_selector_all(&format!("[{}]", REVEAL_ATTRIBUTE))?;
    if elements.length() == 0 {
        return Ok(0);
    }

    let queue = RevealQueue::new(settings);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Notice {
                    target: entry.target(),
                    intersecting: entry.is_intersecting(),
                });

            for reveal in queue.plan(batch) {
                observer.unobserve(&reveal.target);
                schedule(reveal);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(settings.threshold));
    init.set_root_margin(&settings.root_margin());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    // Lives as long as the page
    callback.forget();

    let mut watched = 0;
    for i in 0..elements.length() {
        if let Some(element) = elements.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
            watched += 1;
        }
    }
    Ok(watched)
}

/// Fire `reveal` after its delay
fn schedule(reveal: Reveal<Element>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let delay = i32::try_from(reveal.delay_ms).unwrap_or(i32::MAX);
    let callback = Closure::once_into_js(move || {
        reveal.fire();
        log::debug!("Revealed <{}>", reveal.target.tag_name().to_lowercase());
    });
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        log::warn!("Could not schedule reveal: {:?}", e);
    }
}
