// src/scrape/paginate.rs
use std::thread;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::core::net::{FetchError, PageSource};
use crate::progress::Progress;

/// Raw listing HTML for one page.
#[derive(Clone, Debug)]
pub struct FetchedPage {
    pub page: u32,
    pub html: String,
}

/// Minimum spacing between request starts.
struct Pacer {
    pause: Duration,
    last: Option<Instant>,
}

impl Pacer {
    fn new(pause: Duration) -> Self {
        Self { pause, last: None }
    }

    fn wait(&mut self) {
        if let Some(last) = self.last {
            let left = self.pause.saturating_sub(last.elapsed());
            if !left.is_zero() {
                thread::sleep(left);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Walks the listing for one date, one request at a time.
pub struct Paginator<'s, S: PageSource + ?Sized> {
    source: &'s S,
    date: NaiveDate,
    pacer: Pacer,
}

impl<'s, S: PageSource + ?Sized> Paginator<'s, S> {
    pub fn new(source: &'s S, date: NaiveDate, pause: Duration) -> Self {
        Self { source, date, pacer: Pacer::new(pause) }
    }

    pub fn first_page(&mut self) -> Result<FetchedPage, FetchError> {
        self.fetch(1)
    }

    /// Pages 2..=total_pages, in order. A failed page is reported and
    /// skipped; it never stops the pages after it.
    pub fn fetch_rest(
        &mut self,
        total_pages: u32,
        mut progress: Option<&mut (dyn Progress + '_)>,
    ) -> (Vec<FetchedPage>, Vec<FetchError>) {
        let mut pages = Vec::new();
        let mut failed = Vec::new();

        for page in 2..=total_pages {
            match self.fetch(page) {
                Ok(p) => {
                    if let Some(pr) = progress.as_deref_mut() {
                        pr.page_done(page);
                    }
                    pages.push(p);
                }
                Err(e) => {
                    warn!(page, error = %e, "page fetch failed; skipping");
                    if let Some(pr) = progress.as_deref_mut() {
                        pr.page_failed(&e);
                    }
                    failed.push(e);
                }
            }
        }
        (pages, failed)
    }

    fn fetch(&mut self, page: u32) -> Result<FetchedPage, FetchError> {
        self.pacer.wait();
        let t = Instant::now();
        let html = self.source.fetch(self.date, page)?;
        debug!(page, bytes = html.len(), elapsed = ?t.elapsed(), "page fetched");
        Ok(FetchedPage { page, html })
    }
}
