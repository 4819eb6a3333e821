//! Pagination
//!
//! Listing endpoints return one page of results wrapped in a [`Page`]. Requests address
//! pages by a zero-based index while responses report a one-based `page_number`.

use serde::{Deserialize, Serialize};

/// One page of a server-paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Items on this page
    #[serde(default)]
    pub data: Vec<T>,

    /// Number of items across all pages
    #[serde(default)]
    pub total_elements: u64,

    /// One-based number of this page
    #[serde(default)]
    pub page_number: u32,

    /// Number of pages
    #[serde(default)]
    pub total_pages: u32,

    /// This is the first page
    #[serde(default)]
    pub is_first: bool,

    /// This is the last page
    #[serde(default)]
    pub is_last: bool,

    /// A following page exists
    #[serde(default)]
    pub has_next: bool,

    /// A preceding page exists
    #[serde(default)]
    pub has_previous: bool,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total_elements: 0,
            page_number: 0,
            total_pages: 0,
            is_first: true,
            is_last: false,
            has_next: false,
            has_previous: false,
        }
    }
}

impl<T> Page<T> {
    /// Zero-based index of this page, as used when requesting it.
    pub fn index(&self) -> u32 {
        self.page_number.saturating_sub(1)
    }

    /// Validate a requested page index against this listing.
    pub fn go_to(&self, index: u32) -> Option<u32> {
        (index < self.total_pages).then_some(index)
    }

    /// Index of the following page, if there is one.
    pub fn next_page(&self) -> Option<u32> {
        if self.has_next {
            self.go_to(self.page_number)
        } else {
            None
        }
    }

    /// Index of the preceding page, if there is one.
    pub fn previous_page(&self) -> Option<u32> {
        if self.has_previous {
            self.page_number.checked_sub(2).and_then(|index| self.go_to(index))
        } else {
            None
        }
    }

    /// Index of the first page, unless this is it.
    pub fn first_page(&self) -> Option<u32> {
        if self.is_first { None } else { self.go_to(0) }
    }

    /// Index of the last page, unless this is it.
    pub fn last_page(&self) -> Option<u32> {
        if self.is_last {
            None
        } else {
            self.total_pages
                .checked_sub(1)
                .and_then(|index| self.go_to(index))
        }
    }

    /// Convert the items on this page, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            page_number: self.page_number,
            total_pages: self.total_pages,
            is_first: self.is_first,
            is_last: self.is_last,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
