//! Blog listing with category / tag / search filters and pagination.
//!
//! The URL query is the only source of truth: `category`, `tag`, `search` and
//! `page` are read on every navigation and the list reloads from them.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use content::{Envelope, Post, PostPage, PostQuery};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::pagination::PaginationNav;
use crate::components::post_card::PostCardSkeleton;
use crate::net::api::ContentApi;
use crate::util::links::{article_href, category_href, tag_href};
use crate::util::scroll::schedule_reveal;

pub const BLOG_PER_PAGE: u32 = 9;
const SKELETON_CARDS: usize = 6;
const QUERY_KEYS: [&str; 4] = ["category", "tag", "search", "page"];

/// List query for the blog page from URL query pairs.
pub fn blog_query_from<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> PostQuery
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut query = PostQuery::from_pairs(pairs);
    query.id = None;
    query.per_page = Some(BLOG_PER_PAGE);
    query
}

/// Heading describing the active filter.
pub fn listing_title(query: &PostQuery) -> String {
    if let Some(search) = &query.search {
        format!("Search: {search}")
    } else if let Some(category) = &query.category {
        format!("Category: {category}")
    } else if let Some(tag) = &query.tag {
        format!("Tag: {tag}")
    } else {
        "All posts".to_owned()
    }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let api = expect_context::<ContentApi>();
    let params = use_query_map();

    let query = Memo::new(move |_| {
        let params = params.get();
        blog_query_from(QUERY_KEYS.into_iter().filter_map(|key| params.get(key).map(|v| (key, v))))
    });

    let posts_api = api.clone();
    let posts = LocalResource::new(move || {
        let query = query.get();
        let api = posts_api.clone();
        async move { api.get_posts(&query).await }
    });
    let categories_api = api.clone();
    let categories = LocalResource::new(move || {
        let api = categories_api.clone();
        async move { api.get_categories().await.into_data().unwrap_or_default() }
    });
    let tags = LocalResource::new(move || {
        let api = api.clone();
        async move { api.get_tags().await.into_data().unwrap_or_default() }
    });

    let total = move || {
        posts
            .get()
            .and_then(|env| env.into_data())
            .map_or(0, |page| page.pagination.total)
    };

    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">{move || listing_title(&query.get())}</h1>
                <p class="page-subtitle">
                    <span id="total-posts">{total}</span>
                    " posts"
                </p>
            </div>
        </section>

        <section class="section">
            <div class="container blog-layout">
                <div class="blog-main">
                    <Suspense fallback=|| {
                        view! {
                            <div class="posts-list">
                                {(0..SKELETON_CARDS).map(|_| view! { <PostCardSkeleton/> }).collect_view()}
                            </div>
                        }
                    }>
                        {move || posts.get().map(|env| render_listing(env, query.get_untracked()))}
                    </Suspense>
                </div>

                <aside class="blog-sidebar">
                    <div class="sidebar-widget">
                        <h3 class="widget-title">"Categories"</h3>
                        <ul class="category-list" id="sidebar-categories">
                            <Suspense fallback=|| ()>
                                {move || {
                                    let active = query.get().category;
                                    categories.get().map(|list| {
                                        list.into_iter()
                                            .map(|category| {
                                                let class = if active.as_deref() == Some(category.slug.as_str()) {
                                                    "active"
                                                } else {
                                                    ""
                                                };
                                                view! {
                                                    <li>
                                                        <a href=category_href(&category.slug) class=class>
                                                            <span>{category.name}</span>
                                                            <span class="count">{category.count}</span>
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()
                                    })
                                }}
                            </Suspense>
                        </ul>
                    </div>
                    <div class="sidebar-widget">
                        <h3 class="widget-title">"Tags"</h3>
                        <div class="tag-cloud" id="sidebar-tags">
                            <Suspense fallback=|| ()>
                                {move || {
                                    tags.get().map(|list| {
                                        list.into_iter()
                                            .map(|tag| view! { <a href=tag_href(&tag.slug) class="tag">{tag.name}</a> })
                                            .collect_view()
                                    })
                                }}
                            </Suspense>
                        </div>
                    </div>
                </aside>
            </div>
        </section>
    }
}

fn render_listing(envelope: Envelope<PostPage>, query: PostQuery) -> AnyView {
    if !envelope.success {
        log::warn!("blog: failed to load posts: {}", envelope.message);
        return view! {
            <div class="error-state">
                <span class="state-icon">"!"</span>
                <p>"Failed to load posts, please refresh and try again"</p>
            </div>
        }
        .into_any();
    }
    let Some(page) = envelope.data.filter(|page| !page.data.is_empty()) else {
        return view! {
            <div class="empty-state">
                <span class="state-icon">"\u{1F4ED}"</span>
                <p>"No posts yet"</p>
            </div>
        }
        .into_any();
    };

    schedule_reveal();
    let pagination = page.pagination;
    view! {
        <div class="posts-list" id="posts-container">
            {page
                .data
                .into_iter()
                .enumerate()
                .map(|(index, post)| view! { <BlogPostItem post=post index=index/> })
                .collect_view()}
        </div>
        <div class="pagination" id="pagination">
            <PaginationNav pagination=pagination query=query/>
        </div>
    }
    .into_any()
}

/// Wide list card with tags, used only on the blog listing.
#[component]
fn BlogPostItem(post: Post, index: usize) -> impl IntoView {
    let delay = format!("animation-delay: {}ms", index.saturating_mul(50));

    view! {
        <article class="post-card reveal-on-scroll" style=delay>
            <div class="post-image img-hover-zoom">
                <img src=post.cover alt=post.title.clone() loading="lazy"/>
                <span class="post-category">{post.category.name}</span>
            </div>
            <div class="post-content">
                <h2 class="post-title">
                    <a href=article_href(post.id)>{post.title}</a>
                </h2>
                <p class="post-excerpt">{post.excerpt}</p>
                <div class="post-meta">
                    <div class="post-author">
                        <img src=post.author.avatar alt=post.author.name.clone() loading="lazy"/>
                        <span>{post.author.name}</span>
                    </div>
                    <div class="post-stats">
                        <span>"\u{1F441} " {post.views}</span>
                        <span>"\u{2665} " {post.likes}</span>
                    </div>
                </div>
                <div class="post-tags">
                    {post
                        .tags
                        .into_iter()
                        .map(|tag| view! { <a href=tag_href(&tag) class="tag">{tag.clone()}</a> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
