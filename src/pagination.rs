//! Page requests and page-number navigation

use serde::{Deserialize, Serialize, Serializer};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Number of page links shown before ellipses kick in
const MAX_VISIBLE_PAGES: i64 = 7;

/// Raw `page` / `pageSize` query parameters
///
/// Kept as strings so that garbage falls back to defaults instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// A validated page request (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Row offset of the first item on this page, saturating for absurd pages
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Number of pages needed for `total` items
    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.page_size - 1) / self.page_size
    }
}

impl From<&ListParams> for PageRequest {
    fn from(params: &ListParams) -> Self {
        let parse = |value: &Option<String>| {
            value
                .as_deref()
                .and_then(|v| v.trim().parse::<i64>().ok())
                .filter(|v| *v >= 1)
        };

        Self {
            page: parse(&params.page).unwrap_or(1),
            page_size: parse(&params.page_size)
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .min(MAX_PAGE_SIZE),
        }
    }
}

/// An entry of the page navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(i64),
    Ellipsis,
}

impl Serialize for PageLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLink::Page(n) => serializer.serialize_i64(*n),
            PageLink::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Page links for `current` out of `total_pages`
///
/// Short ranges list every page. Longer ones keep the first and last page and
/// a five-page window around the current one, with ellipses for the gaps.
pub fn pagination_pages(current: i64, total_pages: i64) -> Vec<PageLink> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let last_inner = total_pages - 1;
    let (start, end) = if current - 2 < 2 {
        (2, 6)
    } else if current.saturating_add(2) > last_inner {
        (last_inner - 4, last_inner)
    } else {
        (current - 2, current + 2)
    };

    let mut pages = vec![PageLink::Page(1)];
    if start > 2 {
        pages.push(PageLink::Ellipsis);
    }
    pages.extend((start..=end).map(PageLink::Page));
    if end < last_inner {
        pages.push(PageLink::Ellipsis);
    }
    pages.push(PageLink::Page(total_pages));

    pages
}
