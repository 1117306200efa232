//! Page navigation under the blog grid.
//!
//! Each page is a plain link to `/blog` with the current filters, so the
//! router updates the URL and the blog page reloads from it.

use content::{Pagination, PostQuery};
use leptos::prelude::*;

use crate::util::links::blog_page_href;
use crate::util::pagination::{PageItem, page_items};
use crate::util::scroll::scroll_to_top;

#[component]
pub fn PaginationNav(pagination: Pagination, query: PostQuery) -> impl IntoView {
    let href = move |page: u32| blog_page_href(&query, page);

    page_items(pagination.page, pagination.total_pages)
        .into_iter()
        .map(|item| match item {
            PageItem::Prev(target) => arrow(target.map(&href), "\u{2039}", "Previous page"),
            PageItem::Next(target) => arrow(target.map(&href), "\u{203A}", "Next page"),
            PageItem::Gap => view! { <span class="page-item disabled">"..."</span> }.into_any(),
            PageItem::Page { number, active: true } => view! {
                <span class="page-item active" aria-current="page">{number}</span>
            }
            .into_any(),
            PageItem::Page { number, active: false } => view! {
                <a class="page-item" href=href(number) on:click=|_| scroll_to_top()>{number}</a>
            }
            .into_any(),
        })
        .collect_view()
}

fn arrow(href: Option<String>, glyph: &'static str, label: &'static str) -> AnyView {
    match href {
        Some(href) => view! {
            <a class="page-item" href=href aria-label=label on:click=|_| scroll_to_top()>{glyph}</a>
        }
        .into_any(),
        None => view! { <span class="page-item disabled" aria-label=label>{glyph}</span> }.into_any(),
    }
}
