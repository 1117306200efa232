//! Site header: logo, primary navigation, search toggle and mobile menu.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

pub const NAV_LINKS: [(&str, &str); 3] = [("/", "Home"), ("/blog", "Blog"), ("/team", "Team")];

/// Whether the nav link `href` is the current section for `path`.
///
/// Articles belong to the blog section.
pub fn nav_link_active(path: &str, href: &str) -> bool {
    let path = path.trim_end_matches('/');
    let path = if path.is_empty() { "/" } else { path };
    match href {
        "/" => path == "/",
        "/blog" => path == "/blog" || path == "/article",
        _ => path == href,
    }
}

/// Identity of the current route including its query string.
///
/// `/blog` and `/blog?tag=rust` are different navigations even though the
/// path is the same.
pub fn navigation_key(path: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { path.to_owned() } else { format!("{path}?{search}") }
}

fn header_class(ui: &UiState) -> String {
    let mut class = String::from("header");
    if ui.scrolled {
        class.push_str(" scrolled");
    }
    if ui.header_hidden {
        class.push_str(" hidden");
    }
    class
}

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let nav_ref = NodeRef::<leptos::html::Nav>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    let route = Memo::new(move |_| navigation_key(&location.pathname.get(), &location.search.get()));
    Effect::new(move || {
        route.track();
        ui.update(UiState::on_navigate);
    });

    let handle = window_event_listener(leptos::ev::click, move |ev| {
        if ui.get_untracked().mobile_nav_open && clicked_outside(&ev, nav_ref, toggle_ref) {
            ui.update(UiState::close_mobile_nav);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <header class=move || ui.with(header_class)>
            <div class="container header-inner">
                <a href="/" class="logo">
                    <span class="logo-mark">"TB"</span>
                    <span class="logo-text">"Team Blog"</span>
                </a>
                <nav class=move || if ui.get().mobile_nav_open { "nav active" } else { "nav" } node_ref=nav_ref>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    on:click=move |_| ui.update(UiState::on_navigate)
                                    class=move || {
                                        if nav_link_active(&location.pathname.get(), href) {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="header-actions">
                    <button class="search-toggle" aria-label="Search" on:click=move |_| ui.update(UiState::open_search)>
                        "\u{1F50D}"
                    </button>
                    <button
                        class=move || if ui.get().mobile_nav_open { "mobile-menu-toggle active" } else { "mobile-menu-toggle" }
                        aria-label="Menu"
                        node_ref=toggle_ref
                        on:click=move |_| ui.update(UiState::toggle_mobile_nav)
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Whether a click landed outside both the nav and its toggle button.
fn clicked_outside(
    ev: &leptos::ev::MouseEvent,
    nav_ref: NodeRef<leptos::html::Nav>,
    toggle_ref: NodeRef<leptos::html::Button>,
) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        let in_nav = nav_ref.get_untracked().is_some_and(|el| el.contains(target.as_ref()));
        let in_toggle = toggle_ref.get_untracked().is_some_and(|el| el.contains(target.as_ref()));
        !in_nav && !in_toggle
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ev, nav_ref, toggle_ref);
        false
    }
}
