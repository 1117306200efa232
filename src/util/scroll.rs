//! Window scroll helpers: position, smooth scrolling and reveal-on-scroll.
//!
//! Browser-only; natively the page is always at the top and nothing moves.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Fraction of the viewport height an element's top must pass to be revealed.
pub const REVEAL_THRESHOLD: f64 = 0.88;

/// Delay before revealing elements that were just mounted.
#[cfg(feature = "csr")]
const REVEAL_SETTLE_MS: u32 = 50;

#[must_use]
pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_THRESHOLD
}

pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport.
pub fn scroll_into_view(id: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Mark every `.reveal-on-scroll` element that entered the viewport as `revealed`.
pub fn reveal_visible() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let viewport = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
        let Some(nodes) = window
            .document()
            .and_then(|d| d.query_selector_all(".reveal-on-scroll:not(.revealed)").ok())
        else {
            return;
        };
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            if should_reveal(el.get_bounding_client_rect().top(), viewport) {
                let _ = el.class_list().add_1("revealed");
            }
        }
    }
}

/// Run [`reveal_visible`] once freshly rendered content has been laid out.
pub fn schedule_reveal() {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(REVEAL_SETTLE_MS, reveal_visible).forget();
    }
}

/// Document offsets of the anchored article headings, in order.
///
/// A heading missing from the DOM reports `f64::INFINITY`, so indices stay
/// aligned with the table of contents and the missing entry is never active.
pub fn heading_offsets(count: usize) -> Vec<f64> {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let base = scroll_y();
        (0..count)
            .map(|i| {
                doc.get_element_by_id(&crate::util::toc::heading_id(i))
                    .map_or(f64::INFINITY, |el| el.get_bounding_client_rect().top() + base)
            })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = count;
        Vec::new()
    }
}

/// Stop the page behind a modal panel from scrolling.
pub fn lock_body_scroll(locked: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let style = body.style();
            let _ = if locked {
                style.set_property("overflow", "hidden")
            } else {
                style.remove_property("overflow").map(|_| ())
            };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}
