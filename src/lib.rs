// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod data;
pub mod file;
pub mod filter;
pub mod progress;
pub mod reference;
pub mod runner;
pub mod scrape;
pub mod viewer;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use data::{DisclosureReport, FilteredAnnouncement, PageDescriptor, RawAnnouncement};
pub use reference::{DisclosureForms, EligibleRoster};
pub use runner::{run, RunError};
