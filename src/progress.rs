// src/progress.rs
use crate::core::net::FetchError;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once page 1 is in, with the page count it announced.
    fn begin(&mut self, _total_pages: u32) {}

    /// One page fetched.
    fn page_done(&mut self, _page: u32) {}

    /// One page could not be fetched; the run goes on without it.
    fn page_failed(&mut self, _err: &FetchError) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
