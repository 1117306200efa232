//! Site footer populated from `/api/site`.

use leptos::prelude::*;

use crate::components::header::NAV_LINKS;
use crate::components::member_card::social_links;
use crate::net::api::ContentApi;

#[component]
pub fn Footer() -> impl IntoView {
    let api = expect_context::<ContentApi>();
    let site = LocalResource::new(move || {
        let api = api.clone();
        async move { api.get_site_info().await.into_data() }
    });

    let name = move || site.get().flatten().map_or_else(|| "Team Blog".to_owned(), |s| s.name);
    let description = move || site.get().flatten().map(|s| s.description).unwrap_or_default();
    let social = move || {
        site.get()
            .flatten()
            .map(|s| social_links(&s.social))
            .unwrap_or_default()
            .into_iter()
            .map(|(label, url)| {
                view! {
                    <a href=url class="footer-social-link" title=label target="_blank" rel="noopener noreferrer">
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <h3 class="footer-title">{name}</h3>
                    <p class="footer-description">{description}</p>
                </div>
                <nav class="footer-links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a href=href>{label}</a> })
                        .collect_view()}
                </nav>
                <div class="footer-social">{social}</div>
            </div>
            <div class="footer-bottom">
                <p>{move || format!("\u{00A9} {}. All rights reserved.", name())}</p>
            </div>
        </footer>
    }
}
