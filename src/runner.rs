// src/runner.rs
//! One run for one date:
//! first page → page count → remaining pages → rows → filter → links.
//!
//! Only two things abort a run: empty reference data (checked before any
//! request) and a failed first page. Everything else shrinks the result.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    config::options::ScrapeOptions,
    core::{html, net::{FetchError, HttpFetcher, PageSource}},
    data::{DisclosureReport, FilteredAnnouncement},
    filter::AnnouncementFilter,
    progress::Progress,
    reference::{DisclosureForms, EligibleRoster},
    scrape::Paginator,
    specs::{disclosures::RowExtractor, paging::resolve_page_count},
    viewer::build_url,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceKind {
    Forms,
    Roster,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReferenceKind::Forms => "disclosure form names",
            ReferenceKind::Roster => "eligible company roster",
        })
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("{0} is empty; nothing to filter against")]
    EmptyReference(ReferenceKind),
    #[error("first page failed, nothing to report: {0}")]
    FirstPage(#[source] FetchError),
    #[error("HTTP client setup failed: {0}")]
    Client(#[from] reqwest::Error),
}

/// Top-level entry: live HTTP, default extraction patterns.
pub fn run(
    opts: &ScrapeOptions,
    forms: &DisclosureForms,
    roster: &EligibleRoster,
    progress: Option<&mut dyn Progress>,
) -> Result<DisclosureReport, RunError> {
    check_reference(forms, roster)?;
    let fetcher = HttpFetcher::new(opts)?;
    run_with(&fetcher, &RowExtractor::default(), opts, forms, roster, progress)
}

/// Same pipeline over any page source.
pub fn run_with<S: PageSource + ?Sized>(
    source: &S,
    extractor: &RowExtractor,
    opts: &ScrapeOptions,
    forms: &DisclosureForms,
    roster: &EligibleRoster,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DisclosureReport, RunError> {
    check_reference(forms, roster)?;

    let date = opts.date_param();
    info!(%date, forms = forms.len(), roster = roster.len(), "collecting disclosures");

    let mut paginator = Paginator::new(source, opts.date, opts.request_pause());

    let first = match paginator.first_page() {
        Ok(p) => p,
        Err(e) => {
            if let Some(p) = progress.as_deref_mut() {
                p.page_failed(&e);
                p.finish();
            }
            return Err(RunError::FirstPage(e));
        }
    };

    // Page 1 is parsed once: counter and rows come from the same document.
    let (pages, mut rows) = {
        let doc = html::parse(&first.html);
        (resolve_page_count(&doc, opts.page_size), extractor.extract(&doc))
    };
    if pages.degraded {
        warn!(%date, "continuing with page 1 only");
    }
    info!(total_items = ?pages.total_items, total_pages = pages.total_pages, "page 1 read");

    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages.total_pages);
        p.page_done(1);
    }

    let (rest, failed_pages) = paginator.fetch_rest(pages.total_pages, progress.as_deref_mut());
    for page in &rest {
        let page_rows = extractor.extract(&html::parse(&page.html));
        debug!(page = page.page, rows = page_rows.len(), "page read");
        rows.extend(page_rows);
    }

    let (kept, stats) = AnnouncementFilter::new(forms, roster).apply(&rows);
    let announcements: Vec<FilteredAnnouncement> = kept
        .into_iter()
        .map(|a| FilteredAnnouncement {
            detail_url: build_url(a.acceptance_id.as_deref()),
            announcement: a.clone(),
        })
        .collect();

    info!(
        scanned = rows.len(),
        kept = stats.kept,
        excluded = stats.excluded,
        no_form_match = stats.no_form_match,
        not_on_roster = stats.not_on_roster,
        failed_pages = failed_pages.len(),
        "run complete"
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(DisclosureReport {
        pages,
        rows_scanned: rows.len(),
        stats,
        announcements,
        failed_pages,
    })
}

fn check_reference(forms: &DisclosureForms, roster: &EligibleRoster) -> Result<(), RunError> {
    if forms.is_empty() {
        return Err(RunError::EmptyReference(ReferenceKind::Forms));
    }
    if roster.is_empty() {
        return Err(RunError::EmptyReference(ReferenceKind::Roster));
    }
    Ok(())
}
