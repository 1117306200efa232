//! Article detail: body with anchored headings, table of contents with
//! scroll-spy, popular posts and reader actions (like, bookmark, share).
//!
//! ERROR HANDLING
//! ==============
//! A missing `id` redirects to `/blog`. A failed lookup or an absent post
//! renders an inline error with a way back; the sidebar keeps loading on its
//! own either way.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use content::{Post, PostQuery};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::toast_stack::show_toast;
use crate::net::api::ContentApi;
use crate::state::article::ArticleActions;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::format::{format_relative, now_ms};
use crate::util::links::{article_href, category_href, tag_href};
use crate::util::scroll::{heading_offsets, schedule_reveal, scroll_into_view, scroll_y};
use crate::util::toc::{TocEntry, active_heading, anchor_headings};

const POPULAR_POSTS: u32 = 5;

/// Positive numeric article id from the `id` query value.
pub fn parse_article_id(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|id| *id > 0)
}

/// In-page link to a table-of-contents entry.
pub fn toc_anchor(entry: &TocEntry) -> String {
    format!("#{}", entry.id)
}

pub fn page_title(post_title: &str) -> String {
    format!("{post_title} - Team Blog")
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ArticleLoad {
    Found(Post),
    NotFound,
    Failed,
}

#[component]
pub fn ArticlePage() -> impl IntoView {
    let api = expect_context::<ContentApi>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_query_map();
    let navigate = use_navigate();

    let article_id = Memo::new(move |_| parse_article_id(params.get().get("id").as_deref()));

    Effect::new(move || {
        if article_id.get().is_none() {
            navigate("/blog", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let article_api = api.clone();
    let article = LocalResource::new(move || {
        let id = article_id.get();
        let api = article_api.clone();
        async move {
            let Some(id) = id else {
                return ArticleLoad::NotFound;
            };
            let envelope = api.get_post(id).await;
            if !envelope.success {
                log::warn!("article {id}: {}", envelope.message);
                return ArticleLoad::Failed;
            }
            envelope.data.map_or(ArticleLoad::NotFound, ArticleLoad::Found)
        }
    });
    let popular = LocalResource::new(move || {
        let api = api.clone();
        async move {
            api.get_posts(&PostQuery::new().with_per_page(POPULAR_POSTS))
                .await
                .into_data()
                .map(|page| page.data)
                .unwrap_or_default()
        }
    });

    let actions = RwSignal::new(ArticleActions::default());
    let toc = RwSignal::new(Vec::<TocEntry>::new());
    let active = RwSignal::new(None::<usize>);

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let count = toc.with_untracked(Vec::len);
        if count > 0 {
            active.set(active_heading(&heading_offsets(count), scroll_y()));
        }
    });
    on_cleanup(move || handle.remove());

    let on_like = move |_| actions.update(|a| {
        a.toggle_like();
    });
    let on_bookmark = move |_| {
        let mut message = "";
        let mut added = false;
        actions.update(|a| {
            message = a.toggle_bookmark();
            added = a.bookmarked;
        });
        show_toast(toasts, if added { ToastKind::Success } else { ToastKind::Info }, message);
    };
    let on_share = move |_| share_current_page(toasts);

    // Reset reader state whenever a different article finishes loading.
    Effect::new(move || {
        let Some(load) = article.get() else {
            return;
        };
        match load {
            ArticleLoad::Found(post) => {
                actions.set(ArticleActions::new(post.likes));
                toc.set(anchor_headings(&post.content).1);
                schedule_reveal();
            }
            ArticleLoad::NotFound | ArticleLoad::Failed => toc.set(Vec::new()),
        }
        active.set(None);
    });

    let render_article = move |load: ArticleLoad| match load {
        ArticleLoad::Found(post) => {
            let html = anchor_headings(&post.content).0;
            view! {
                <Title text=page_title(&post.title)/>
                <ArticleBody post=post html=html/>
                <div class="article-actions">
                    <button
                        class=move || if actions.get().liked { "action-btn active" } else { "action-btn" }
                        id="like-btn"
                        on:click=on_like
                    >
                        <span class="action-icon">{move || if actions.get().liked { "\u{2665}" } else { "\u{2661}" }}</span>
                        <span id="like-count">{move || actions.get().likes}</span>
                    </button>
                    <button
                        class=move || if actions.get().bookmarked { "action-btn active" } else { "action-btn" }
                        id="bookmark-btn"
                        on:click=on_bookmark
                    >
                        "\u{1F516} Bookmark"
                    </button>
                    <button class="action-btn" id="share-btn" on:click=on_share>
                        "\u{1F517} Share"
                    </button>
                </div>
            }
            .into_any()
        }
        ArticleLoad::NotFound => article_error("This article does not exist").into_any(),
        ArticleLoad::Failed => article_error("Failed to load the article, please try again").into_any(),
    };

    view! {
        <section class="section article-section">
            <div class="container article-layout">
                <article class="article-main">
                    <Suspense fallback=|| view! { <div class="article-loading"><div class="spinner"></div></div> }>
                        {move || article.get().map(render_article)}
                    </Suspense>
                </article>

                <aside class="article-sidebar">
                    <Show when=move || !toc.get().is_empty()>
                        <div class="sidebar-widget toc-widget">
                            <h3 class="widget-title">"Contents"</h3>
                            <ul class="article-toc" id="article-toc">
                                {move || {
                                    toc.get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, entry)| {
                                            let target = entry.id.clone();
                                            let class = entry.class();
                                            let href = toc_anchor(&entry);
                                            view! {
                                                <li class=class>
                                                    <a
                                                        href=href
                                                        data-target=entry.id
                                                        class:active=move || active.get() == Some(index)
                                                        on:click=move |ev| {
                                                            ev.prevent_default();
                                                            scroll_into_view(&target);
                                                        }
                                                    >
                                                        {entry.text}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                        </div>
                    </Show>

                    <div class="sidebar-widget">
                        <h3 class="widget-title">"Popular posts"</h3>
                        <ol class="popular-posts" id="popular-posts">
                            <Suspense fallback=|| ()>
                                {move || {
                                    popular.get().map(|posts| {
                                        posts
                                            .into_iter()
                                            .enumerate()
                                            .map(|(index, post)| {
                                                view! {
                                                    <li>
                                                        <a href=article_href(post.id)>
                                                            <span class="popular-rank">{index + 1}</span>
                                                            <span class="popular-title">{post.title}</span>
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()
                                    })
                                }}
                            </Suspense>
                        </ol>
                    </div>
                </aside>
            </div>
        </section>
    }
}

#[component]
fn ArticleBody(post: Post, html: String) -> impl IntoView {
    let published = format_relative(&post.created_at, now_ms());

    view! {
        <header class="article-header">
            <div class="article-cover">
                <img src=post.cover alt=post.title.clone()/>
            </div>
            <a href=category_href(&post.category.slug) class="article-category">{post.category.name}</a>
            <h1 class="article-title">{post.title}</h1>
            <div class="article-meta" id="article-meta">
                <div class="meta-author">
                    <img src=post.author.avatar.clone() alt=post.author.name.clone() class="author-avatar"/>
                    <span>{post.author.name.clone()}</span>
                </div>
                <div class="meta-divider"></div>
                <div class="meta-date">{published}</div>
                <div class="meta-divider"></div>
                <div class="meta-views">{format!("{} views", post.views)}</div>
            </div>
        </header>
        <div class="article-content" id="article-content" inner_html=html></div>
        <div class="article-tags" id="article-tags">
            {post
                .tags
                .into_iter()
                .map(|tag| view! { <a href=tag_href(&tag) class="tag">{tag.clone()}</a> })
                .collect_view()}
        </div>
        <div class="author-card">
            <img src=post.author.avatar alt=post.author.name.clone() class="author-card-avatar" loading="lazy"/>
            <div class="author-card-info">
                <span class="author-card-label">"Written by"</span>
                <h4 class="author-card-name">{post.author.name}</h4>
            </div>
        </div>
    }
}

fn article_error(message: &'static str) -> impl IntoView {
    view! {
        <div class="error-message">
            <span class="state-icon">"!"</span>
            <p>{message}</p>
            <a href="/blog" class="btn btn-primary">"Back to the blog"</a>
        </div>
    }
}

/// Copy the current URL to the clipboard and report the outcome.
fn share_current_page(toasts: RwSignal<ToastState>) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(url) = window.location().href() else {
            show_toast(toasts, ToastKind::Error, "Could not read the page address");
            return;
        };
        // Older browsers (and insecure origins) have no `navigator.clipboard`.
        let Some(clipboard) = js_sys::Reflect::get(&window.navigator(), &"clipboard".into())
            .ok()
            .and_then(|value| value.dyn_into::<web_sys::Clipboard>().ok())
        else {
            show_toast(toasts, ToastKind::Error, "Clipboard is not available");
            return;
        };
        leptos::task::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&url)).await {
                Ok(_) => show_toast(toasts, ToastKind::Success, "Link copied to clipboard"),
                Err(e) => {
                    log::warn!("clipboard write failed: {e:?}");
                    show_toast(toasts, ToastKind::Error, "Could not copy the link");
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        show_toast(toasts, ToastKind::Info, "Sharing is only available in the browser");
    }
}
