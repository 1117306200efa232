//! Full-screen quick search.
//!
//! Input is debounced, searches run through the shared `ContentApi`, and each
//! request carries a `RequestSequence` token so only the latest response is
//! shown. Closing the overlay clears the input and any pending result.

use content::PostQuery;
use leptos::prelude::*;

use crate::net::api::ContentApi;
use crate::state::ui::UiState;
use crate::util::links::{article_href, search_href};
use crate::util::search::{RequestSequence, SEARCH_RESULT_LIMIT, SearchStatus, normalize_keyword};
#[cfg(feature = "csr")]
use crate::util::search::SEARCH_DEBOUNCE_MS;

#[cfg(feature = "csr")]
const FOCUS_DELAY_MS: u32 = 100;

#[component]
pub fn SearchOverlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ContentApi>();
    let input = RwSignal::new(String::new());
    let status = RwSignal::new(SearchStatus::Idle);
    let sequence = StoredValue::new(RequestSequence::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let close = move || ui.update(UiState::close_search);
    let is_open = Memo::new(move |_| ui.get().search_open);

    // However the overlay closes (button, backdrop, Escape, navigation), the
    // input and any in-flight result are discarded.
    Effect::new(move || {
        if is_open.get() {
            #[cfg(feature = "csr")]
            gloo_timers::callback::Timeout::new(FOCUS_DELAY_MS, move || {
                if let Some(el) = input_ref.get_untracked() {
                    let _ = el.focus();
                }
            })
            .forget();
        } else {
            input.set(String::new());
            status.set(SearchStatus::Idle);
            sequence.update_value(RequestSequence::invalidate);
        }
    });

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && is_open.get_untracked() {
            close();
        }
    });
    on_cleanup(move || handle.remove());

    let run_search = move |keyword: String, token: u64| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let query = PostQuery::new().with_per_page(SEARCH_RESULT_LIMIT);
            let envelope = api.search_posts(&keyword, &query).await;
            if !sequence.with_value(|s| s.is_current(token)) {
                log::debug!("search: dropping stale response for {keyword:?}");
                return;
            }
            if !envelope.success {
                log::warn!("search failed: {}", envelope.message);
            }
            status.set(SearchStatus::from_envelope(&keyword, envelope));
        });
    };

    let on_input = move |ev| {
        let raw = event_target_value(&ev);
        input.set(raw.clone());
        let token = sequence.try_update_value(RequestSequence::issue).unwrap_or_default();
        let Some(keyword) = normalize_keyword(&raw) else {
            status.set(SearchStatus::Idle);
            return;
        };
        #[cfg(feature = "csr")]
        {
            let run_search = run_search.clone();
            gloo_timers::callback::Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                if sequence.with_value(|s| s.is_current(token)) {
                    status.set(SearchStatus::Loading);
                    run_search(keyword, token);
                }
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (keyword, token, &run_search);
        }
    };

    view! {
        <div
            class=move || if is_open.get() { "search-overlay active" } else { "search-overlay" }
            on:click=move |_| close()
        >
            <div class="search-container" on:click=|ev| ev.stop_propagation()>
                <div class="search-box">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search articles..."
                        node_ref=input_ref
                        prop:value=move || input.get()
                        on:input=on_input
                    />
                    <button class="search-close" aria-label="Close search" on:click=move |_| close()>
                        "\u{00D7}"
                    </button>
                </div>
                <div class="search-results">{move || render_status(status.get())}</div>
            </div>
        </div>
    }
}

fn render_status(status: SearchStatus) -> AnyView {
    match status {
        SearchStatus::Idle => ().into_any(),
        SearchStatus::Loading => view! {
            <div class="search-loading">
                <div class="spinner"></div>
                <span>"Searching..."</span>
            </div>
        }
        .into_any(),
        SearchStatus::Empty => view! { <div class="search-empty">"No matching articles"</div> }.into_any(),
        SearchStatus::Failed(_) => view! { <div class="search-error">"Search failed, please try again"</div> }.into_any(),
        SearchStatus::Results { keyword, posts } => view! {
            <div class="search-results-list">
                {posts
                    .into_iter()
                    .map(|post| {
                        view! {
                            <a href=article_href(post.id) class="search-result-item">
                                <div class="search-result-title">{post.title}</div>
                                <div class="search-result-excerpt">{post.excerpt}</div>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="search-results-more">
                <a href=search_href(&keyword)>"View all results"</a>
            </div>
        }
        .into_any(),
    }
}
