// src/data.rs
//! Row and report shapes shared by the extractor, filter and runner.

use crate::core::net::FetchError;

/// One `<tr>` of the listing table, as read. Never merged, never invented.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawAnnouncement {
    /// Display text ("18:02"), not parsed.
    pub time: String,
    /// Fixed-width company code; empty when the anchor or handler is missing.
    pub company_code: String,
    pub company_name: String,
    /// `<font>` tag labels joined by `_`.
    pub note: String,
    pub title: String,
    pub submitter: String,
    pub acceptance_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredAnnouncement {
    pub announcement: RawAnnouncement,
    pub detail_url: Option<String>,
}

impl FilteredAnnouncement {
    pub const HEADERS: [&'static str; 7] =
        ["Time", "Company code", "Company", "Note", "Title", "Submitter", "Detail URL"];

    /// Flat row in `HEADERS` order.
    pub fn to_row(&self) -> [&str; 7] {
        let a = &self.announcement;
        [
            &a.time,
            &a.company_code,
            &a.company_name,
            &a.note,
            &a.title,
            &a.submitter,
            self.detail_url.as_deref().unwrap_or(""),
        ]
    }
}

/// Totals read from page 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageDescriptor {
    /// `None` when the counter was missing or unreadable.
    pub total_items: Option<u64>,
    /// Always ≥ 1.
    pub total_pages: u32,
    /// The page indicator could not be read and we fell back to one page.
    pub degraded: bool,
}

impl PageDescriptor {
    pub fn single_page_fallback() -> Self {
        Self { total_items: None, total_pages: 1, degraded: true }
    }
}

/// Per-stage rejection tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub excluded: usize,
    pub no_form_match: usize,
    pub not_on_roster: usize,
    pub kept: usize,
}

/// Everything a run produced. Failed pages are listed, not fatal.
#[derive(Debug)]
pub struct DisclosureReport {
    pub pages: PageDescriptor,
    pub rows_scanned: usize,
    pub stats: FilterStats,
    pub announcements: Vec<FilteredAnnouncement>,
    pub failed_pages: Vec<FetchError>,
}

impl DisclosureReport {
    pub fn is_complete(&self) -> bool {
        self.failed_pages.is_empty() && !self.pages.degraded
    }
}
