//! Toast notifications rendered in a fixed stack.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};
#[cfg(feature = "csr")]
use crate::state::toast::{TOAST_DURATION_MS, TOAST_HIDE_MS};

/// Queue a toast; in the browser it dismisses itself after a few seconds.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));

    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || dismiss_toast(toasts, id)).forget();
}

/// Start the hiding phase, then drop the toast once it has faded out.
pub fn dismiss_toast(toasts: RwSignal<ToastState>, id: u64) {
    let Some(started) = toasts.try_update(|t| t.begin_hide(id)) else {
        return;
    };
    if !started {
        return;
    }

    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(TOAST_HIDE_MS, move || {
        let _ = toasts.try_update(|t| t.remove(id));
    })
    .forget();
    #[cfg(not(feature = "csr"))]
    toasts.update(|t| t.remove(id));
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-container" aria-live="polite">
            <For each=move || toasts.get().toasts key=|toast| (toast.id, toast.hiding) let:toast>
                <div class=format!(
                    "toast {} {}",
                    toast.kind.class(),
                    if toast.hiding { "hide" } else { "show" },
                )>
                    <span class="toast-icon">{toast.kind.icon()}</span>
                    <span class="toast-message">{toast.message.clone()}</span>
                    <button
                        class="toast-close"
                        aria-label="Close notification"
                        on:click=move |_| dismiss_toast(toasts, toast.id)
                    >
                        "\u{00D7}"
                    </button>
                </div>
            </For>
        </div>
    }
}
