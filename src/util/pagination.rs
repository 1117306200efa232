//! Pagination control layout.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    /// Previous-page arrow; `None` when already on the first page.
    Prev(Option<u32>),
    Page { number: u32, active: bool },
    Gap,
    /// Next-page arrow; `None` when already on the last page.
    Next(Option<u32>),
}

/// Items for the control: first, last, and a window of one page around
/// `page`, with a gap wherever pages are skipped. Empty for a single page.
pub fn page_items(page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let page = page.clamp(1, total_pages);
    let mut items = vec![PageItem::Prev((page > 1).then(|| page - 1))];

    for n in 1..=total_pages {
        if n == 1 || n == total_pages || n.abs_diff(page) <= 1 {
            items.push(PageItem::Page { number: n, active: n == page });
        } else if n.abs_diff(page) == 2 {
            items.push(PageItem::Gap);
        }
    }

    items.push(PageItem::Next((page < total_pages).then(|| page + 1)));
    items
}
