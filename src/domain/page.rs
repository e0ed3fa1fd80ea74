// src/domain/page.rs
//
// Paginated collection envelope: `{ results, count, next, previous }`

use serde::{Deserialize, Serialize};

use crate::domain::serde_helpers::null_as_empty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub results: Vec<T>,

    /// Total number of matches across all pages
    #[serde(default)]
    pub count: u64,

    /// Opaque cursor (a URL) to the following page
    #[serde(default)]
    pub next: Option<String>,

    #[serde(default)]
    pub previous: Option<String>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Number of pages for `count` items at `page_size` per page
    pub fn page_count(&self, page_size: u32) -> u64 {
        page_count(self.count, page_size)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
            next: None,
            previous: None,
        }
    }
}

pub fn page_count(count: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(u64::from(page_size))
}
