//! Reader interactions on the article page.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArticleActions {
    pub liked: bool,
    pub bookmarked: bool,
    pub likes: u32,
}

impl ArticleActions {
    #[must_use]
    pub fn new(likes: u32) -> Self {
        Self { likes, ..Self::default() }
    }

    /// Flip the like and return the new count.
    pub fn toggle_like(&mut self) -> u32 {
        self.liked = !self.liked;
        self.likes = if self.liked { self.likes.saturating_add(1) } else { self.likes.saturating_sub(1) };
        self.likes
    }

    /// Flip the bookmark and return the toast text for it.
    pub fn toggle_bookmark(&mut self) -> &'static str {
        self.bookmarked = !self.bookmarked;
        if self.bookmarked { "Added to bookmarks" } else { "Removed from bookmarks" }
    }
}
