//! Landing page: hero, latest posts, categories and a team preview.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use content::PostQuery;
use leptos::prelude::*;

use crate::components::member_card::TeamCard;
use crate::components::post_card::{PostCard, animation_delay};
use crate::net::api::ContentApi;
use crate::util::links::category_href;
use crate::util::scroll::schedule_reveal;

const LATEST_POSTS: u32 = 3;
const TEAM_PREVIEW: usize = 4;
const CATEGORY_ICONS: [&str; 5] = ["\u{1F3A8}", "\u{1F4BB}", "\u{1F465}", "\u{2615}", "\u{270F}"];

/// Icon for the `index`-th category card; icons repeat after the last one.
pub fn category_icon(index: usize) -> &'static str {
    CATEGORY_ICONS[index % CATEGORY_ICONS.len()]
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ContentApi>();

    let posts_api = api.clone();
    let posts = LocalResource::new(move || {
        let api = posts_api.clone();
        async move { api.get_posts(&PostQuery::new().with_per_page(LATEST_POSTS)).await }
    });
    let categories_api = api.clone();
    let categories = LocalResource::new(move || {
        let api = categories_api.clone();
        async move { api.get_categories().await }
    });
    let members = LocalResource::new(move || {
        let api = api.clone();
        async move { api.get_members().await }
    });

    view! {
        <section class="hero">
            <div class="container hero-inner">
                <h1 class="hero-title">"Notes from the team"</h1>
                <p class="hero-subtitle">"Design, engineering and the way we work, written down as we go."</p>
                <div class="hero-actions">
                    <a href="/blog" class="btn btn-primary">"Read the blog"</a>
                    <a href="/team" class="btn btn-outline">"Meet the team"</a>
                </div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Latest posts"</h2>
                    <a href="/blog" class="section-link">"View all"</a>
                </div>
                <div class="posts-grid" id="latest-posts">
                    <Suspense fallback=|| ()>
                        {move || {
                            posts
                                .get()
                                .and_then(|env| env.into_data())
                                .map(|page| {
                                    schedule_reveal();
                                    page.data
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, post)| view! { <PostCard post=post index=index/> })
                                        .collect_view()
                                })
                        }}
                    </Suspense>
                </div>
            </div>
        </section>

        <section class="section section-alt">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Categories"</h2>
                </div>
                <div class="categories-grid" id="categories">
                    <Suspense fallback=|| ()>
                        {move || {
                            categories
                                .get()
                                .and_then(|env| env.into_data())
                                .map(|list| {
                                    schedule_reveal();
                                    list.into_iter()
                                        .enumerate()
                                        .map(|(index, category)| {
                                            view! {
                                                <a
                                                    href=category_href(&category.slug)
                                                    class="category-card reveal-on-scroll"
                                                    style=animation_delay(index)
                                                >
                                                    <div class="category-icon">{category_icon(index)}</div>
                                                    <h3 class="category-name">{category.name}</h3>
                                                    <p class="category-count">{format!("{} posts", category.count)}</p>
                                                </a>
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </Suspense>
                </div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"The team"</h2>
                    <a href="/team" class="section-link">"Everyone"</a>
                </div>
                <div class="team-grid" id="team-members">
                    <Suspense fallback=|| ()>
                        {move || {
                            members
                                .get()
                                .and_then(|env| env.into_data())
                                .map(|list| {
                                    schedule_reveal();
                                    list.into_iter()
                                        .take(TEAM_PREVIEW)
                                        .enumerate()
                                        .map(|(index, member)| view! { <TeamCard member=member index=index/> })
                                        .collect_view()
                                })
                        }}
                    </Suspense>
                </div>
            </div>
        </section>
    }
}
