// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific reading rules for the KIND listing. Each spec encodes *where the
//! ground truth lives in the HTML* and *how to extract it without falling over*
//! when the markup drifts.
//!
//! ## What lives here
//! - **Pure HTML reading** of an already-fetched listing page.
//! - **Selector and pattern choice** (`table.list.type-00.mt10`, `a#companysum`,
//!   the inline `onclick` handlers).
//! - **Tolerant extraction**: a missing anchor yields empty fields, a missing
//!   table yields no rows, a missing page counter yields a one-page fallback.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and **pacing** (`scrape`).
//! - **Filtering** against the reference sets (`filter`).
//! - **URL assembly** (`viewer`).
//!
//! ## Typical call chain
//! ```text
//! runner::run → scrape::Paginator → PageSource::fetch
//!             ↘ specs::paging::resolve_page_count (page 1)
//!             ↘ specs::disclosures::extract (every page)
//! ```
//!
//! ## Testing notes
//! - Everything here runs offline against inline HTML fixtures.
pub mod disclosures;
pub mod paging;
