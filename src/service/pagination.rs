//! Page arithmetic shared by every listing endpoint.
//!
//! Pages are 1-indexed. Page `p` of size `n` covers the half-open index range
//! `[(p-1)*n, p*n)`. Pages past the end, pages below 1, and pages whose offset
//! does not fit in an `i64` are all empty.

use serde::Serialize;

pub const DEFAULT_PAGE: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: i64,
    pub size: i64,
}

impl Page {
    pub fn new(number: i64, size: i64) -> Self {
        Self { number, size }
    }

    /// Row offset of the first item, or `None` when the page can hold nothing.
    pub fn offset(&self) -> Option<i64> {
        if self.number < 1 || self.size < 1 {
            return None;
        }
        (self.number - 1).checked_mul(self.size)
    }

    /// In-process slicing of an already ordered collection.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let Some(start) = self.offset().and_then(|o| usize::try_from(o).ok()) else {
            return Vec::new();
        };
        if start >= items.len() {
            return Vec::new();
        }
        let end = start.saturating_add(self.size as usize).min(items.len());
        items[start..end].to_vec()
    }
}

/// How much of a result set a repository query should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    All,
    Page(Page),
}

impl Window {
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        match self {
            Window::All => items.to_vec(),
            Window::Page(page) => page.slice(items),
        }
    }
}

/// One window of results plus the size of the unpaged result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<T> Paged<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
