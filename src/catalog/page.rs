use serde::{Deserialize, Serialize};

/// One page of a catalog listing (popular movies, search results).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage<T> {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

fn first_page() -> u32 {
    1
}

impl<T> MoviePage<T> {
    /// True if pages after this one exist.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Page-number tracker for incremental "load more" listings.
///
/// Pages are fetched in order starting at 1. After each fetch, `observe` the
/// returned page; `next_page` then yields the following page number until the
/// listing reports no more pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    next: u32,
    exhausted: bool,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            next: 1,
            exhausted: false,
        }
    }

    /// Page number to fetch next, or `None` once the last page was observed.
    pub fn next_page(&self) -> Option<u32> {
        if self.exhausted {
            None
        } else {
            Some(self.next)
        }
    }

    /// Record a fetched page.
    pub fn observe<T>(&mut self, page: &MoviePage<T>) {
        self.next = page.page.saturating_add(1);
        self.exhausted = !page.has_more();
    }

    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    /// Start over from page 1 (e.g. a new search query).
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
