//! Post cards for the home and blog grids.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use content::Post;
use leptos::prelude::*;

use crate::util::format::truncate;
use crate::util::links::article_href;

const EXCERPT_CHARS: usize = 120;

/// Excerpt shortened to fit a grid card.
pub fn card_excerpt(excerpt: &str) -> String {
    truncate(excerpt, EXCERPT_CHARS)
}

/// Staggered entrance delay for the `index`-th card of a grid.
pub fn animation_delay(index: usize) -> String {
    format!("animation-delay: {}ms", index.saturating_mul(100))
}

#[component]
pub fn PostCard(post: Post, index: usize) -> impl IntoView {
    let href = article_href(post.id);

    view! {
        <article class="card card-hover reveal-on-scroll" style=animation_delay(index)>
            <div class="card-image img-hover-zoom">
                <img src=post.cover alt=post.title.clone() loading="lazy"/>
                <div class="card-category">{post.category.name}</div>
            </div>
            <div class="card-body">
                <h3 class="card-title">
                    <a href=href>{post.title}</a>
                </h3>
                <p class="card-excerpt">{card_excerpt(&post.excerpt)}</p>
                <div class="card-meta">
                    <div class="card-author">
                        <img src=post.author.avatar alt=post.author.name.clone() class="author-avatar" loading="lazy"/>
                        <span class="author-name">{post.author.name}</span>
                    </div>
                    <div class="card-stats">
                        <span class="stat-views">"\u{1F441} " {post.views}</span>
                        <span class="stat-likes">"\u{2665} " {post.likes}</span>
                    </div>
                </div>
            </div>
        </article>
    }
}

/// Placeholder shown while a page of posts loads.
#[component]
pub fn PostCardSkeleton() -> impl IntoView {
    view! {
        <div class="card skeleton-card">
            <div class="skeleton skeleton-image"></div>
            <div class="card-body">
                <div class="skeleton skeleton-title"></div>
                <div class="skeleton skeleton-text"></div>
                <div class="skeleton skeleton-text short"></div>
            </div>
        </div>
    }
}
