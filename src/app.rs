//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    back_to_top::BackToTop, footer::Footer, header::Header, search_overlay::SearchOverlay,
    theme_menu::{ThemeContext, ThemeMenu}, toast_stack::ToastStack,
};
use crate::net::api::ContentApi;
use crate::pages::{article::ArticlePage, blog::BlogPage, home::HomePage, team::TeamPage};
use crate::state::{toast::ToastState, ui::UiState};
use crate::util::scroll::{reveal_visible, scroll_y};
use crate::util::theme_dom::watch_system_scheme;

/// Root application component.
///
/// Provides the content API, page chrome state and the theme controller,
/// then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    let theme = ThemeContext::new();

    let api = ContentApi::default();
    if api.config().use_mock {
        log::info!("content: serving fixtures in-process");
    } else {
        log::info!("content: fetching from {}", api.config().base_url);
    }
    provide_context(api);
    provide_context(ui);
    provide_context(toasts);
    provide_context(theme);

    theme.load();
    watch_system_scheme(move |prefers_dark| {
        theme.system_changed(prefers_dark);
    });

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        ui.update(|u| u.on_scroll(scroll_y()));
        reveal_visible();
    });
    on_cleanup(move || handle.remove());

    view! {
        <Title text="Team Blog"/>

        <Router>
            <Header/>
            <SearchOverlay/>
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("blog") view=BlogPage/>
                    <Route path=StaticSegment("article") view=ArticlePage/>
                    <Route path=StaticSegment("team") view=TeamPage/>
                </Routes>
            </main>
            <Footer/>
            <ThemeMenu/>
            <BackToTop/>
            <ToastStack/>
        </Router>
    }
}
