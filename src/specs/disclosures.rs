// src/specs/disclosures.rs
//! Scraping *spec* for the same-day disclosure listing.
//!
//! Purpose:
//! - Read one listing page and turn every body row of `table.list.type-00.mt10`
//!   into a [`RawAnnouncement`], in document order.
//!
//! Row shape (cells are direct `<td>` children of the `<tr>`):
//! ```text
//! td[0]  time text                    "18:02"
//! td[1]  <a id="companysum" onclick="companysummary_open('00123')">Name</a>
//! td[2]  <a title="Full title" onclick="openDisclsViewer('20240814000123','')">
//!            <font>정정</font> Title text</a>
//! td[3]  submitter text
//! td[4]  (unused, but its presence is what marks a data row)
//! ```
//!
//! Non-Responsibilities:
//! - **No filtering.** Every row with enough cells comes out.
//! - **No networking.**

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::config::consts::NOTE_SEP;
use crate::core::html::{self, attr, child_elements, trimmed_text};
use crate::data::RawAnnouncement;

/// Rows with fewer cells are footers or "no data" banners.
pub const MIN_CELLS: usize = 5;

/// The two inline-handler contracts. Group 1 of each pattern is the value.
///
/// - `company_code`: `companysummary_open('<alnum>')` on the company anchor.
/// - `acceptance_id`: `openDisclsViewer('<digits>'` on the title anchor.
///
/// Kept apart from the row walk so a portal change only touches this value.
#[derive(Clone, Debug)]
pub struct ExtractionPatterns {
    pub company_code: Regex,
    pub acceptance_id: Regex,
}

impl Default for ExtractionPatterns {
    fn default() -> Self {
        Self {
            company_code: regex!(r"companysummary_open\('([A-Za-z0-9]+)'\)").clone(),
            acceptance_id: regex!(r"openDisclsViewer\('(\d+)'").clone(),
        }
    }
}

impl ExtractionPatterns {
    pub fn new(company_code: &str, acceptance_id: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            company_code: Regex::new(company_code)?,
            acceptance_id: Regex::new(acceptance_id)?,
        })
    }

    fn capture(re: &Regex, haystack: &str) -> Option<String> {
        re.captures(haystack)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }
}

#[derive(Clone, Debug, Default)]
pub struct RowExtractor {
    patterns: ExtractionPatterns,
}

impl RowExtractor {
    pub fn new(patterns: ExtractionPatterns) -> Self {
        Self { patterns }
    }

    pub fn extract(&self, doc: &Html) -> Vec<RawAnnouncement> {
        let Some(table) = doc.select(selector!("table.list.type-00.mt10")).next() else {
            return Vec::new();
        };
        let Some(tbody) = child_elements(table, "tbody").into_iter().next() else {
            return Vec::new();
        };

        child_elements(tbody, "tr")
            .into_iter()
            .filter_map(|tr| self.read_row(tr))
            .collect()
    }

    fn read_row(&self, tr: ElementRef<'_>) -> Option<RawAnnouncement> {
        let cells = child_elements(tr, "td");
        if cells.len() < MIN_CELLS {
            return None;
        }

        let mut row = RawAnnouncement {
            time: trimmed_text(cells[0]),
            submitter: trimmed_text(cells[3]),
            ..RawAnnouncement::default()
        };

        // Company: name + code from the summary popup handler.
        if let Some(a) = cells[1].select(selector!("a#companysum")).next() {
            row.company_name = trimmed_text(a);
            row.company_code = attr(a, "onclick")
                .and_then(|h| ExtractionPatterns::capture(&self.patterns.company_code, h))
                .unwrap_or_default();
        }

        // Title anchor: title attr, <font> tags as note, viewer handler as id.
        if let Some(a) = cells[2].select(selector!("a")).next() {
            row.title = attr(a, "title").unwrap_or_default().to_string();
            row.note = a
                .select(selector!("font"))
                .map(trimmed_text)
                .collect::<Vec<_>>()
                .join(NOTE_SEP);
            row.acceptance_id = attr(a, "onclick")
                .and_then(|h| ExtractionPatterns::capture(&self.patterns.acceptance_id, h));
        }

        Some(row)
    }
}

/// Default patterns, straight from a page string.
pub fn extract(doc: &str) -> Vec<RawAnnouncement> {
    RowExtractor::default().extract(&html::parse(doc))
}
