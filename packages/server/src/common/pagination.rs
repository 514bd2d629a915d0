//! Offset pagination for the website listing
//!
//! # Usage
//!
//! ```rust,ignore
//! let page = OffsetPage::new(params.page, params.per_page);
//! let items = Model::find_filtered_page(&filter, &page, pool).await?;
//! let total = Model::count_filtered(&filter, pool).await?;
//! let result = Page::new(items, total, &page);
//! ```

use serde::Serialize;

/// Default page size when the caller does not ask for one.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Largest page size a caller may request.
pub const MAX_PER_PAGE: u32 = 100;

// ============================================================================
// Arguments
// ============================================================================

/// Validated 1-based page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetPage {
    /// 1-based page number (always >= 1).
    pub page: u32,
    /// Items per page (1-100).
    pub per_page: u32,
}

impl OffsetPage {
    /// Apply defaults and bounds to raw caller input.
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        let page = page.unwrap_or(1).clamp(1, u32::MAX as i64) as u32;
        let per_page = per_page
            .unwrap_or(DEFAULT_PER_PAGE as i64)
            .clamp(1, MAX_PER_PAGE as i64) as u32;
        Self { page, per_page }
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.per_page as i64
    }
}

impl Default for OffsetPage {
    fn default() -> Self {
        Self::new(None, None)
    }
}

// ============================================================================
// Page
// ============================================================================

/// One page of results plus the numbers a pager needs.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
    pub pages: i64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, args: &OffsetPage) -> Self {
        let per_page = args.per_page as i64;
        let pages = if total <= 0 {
            0
        } else {
            (total + per_page - 1) / per_page
        };

        Page {
            items,
            page: args.page,
            per_page: args.per_page,
            total,
            pages,
            has_prev: args.page > 1,
            has_next: (args.page as i64) < pages,
        }
    }

    /// Transform the items while keeping the pager numbers.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            pages: self.pages,
            has_prev: self.has_prev,
            has_next: self.has_next,
        }
    }
}
