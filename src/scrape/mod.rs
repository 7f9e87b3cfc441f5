// src/scrape/mod.rs
mod paginate;

pub use paginate::{FetchedPage, Paginator};
