//! Floating button that returns to the top of the page.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::scroll::scroll_to_top;

#[component]
pub fn BackToTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class=move || if ui.get().back_to_top_visible { "back-to-top visible" } else { "back-to-top" }
            aria-label="Back to top"
            on:click=move |_| scroll_to_top()
        >
            "\u{2191}"
        </button>
    }
}
