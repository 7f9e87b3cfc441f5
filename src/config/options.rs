// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{Local, NaiveDate};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Market segment selector sent as `marketType`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Market {
    Kospi,
    #[default]
    Kosdaq,
    Konex,
}

impl Market {
    pub fn code(self) -> &'static str {
        match self {
            Market::Kospi => "1",
            Market::Kosdaq => "2",
            Market::Konex => "6",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub date: NaiveDate,
    pub market: Market,
    pub page_size: u32,
    pub timeout: Duration,
    pub listing_url: String,
    request_pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            date: Local::now().date_naive(),
            market: Market::default(),
            page_size: PAGE_SIZE,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            listing_url: s!(LISTING_URL),
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl ScrapeOptions {
    pub fn for_date(date: NaiveDate) -> Self {
        Self { date, ..Self::default() }
    }

    pub fn request_pause(&self) -> Duration {
        self.request_pause
    }

    /// Never below `MIN_REQUEST_PAUSE_MS`; the portal is not ours to load.
    pub fn set_request_pause(&mut self, pause: Duration) {
        self.request_pause = pause.max(Duration::from_millis(MIN_REQUEST_PAUSE_MS));
    }

    /// `selDate` value.
    pub fn date_param(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, or the user's own file name when one was given.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match &self.out_path.file_name {
            Some(name) => path.push(name),
            None => {
                let stem = self.out_path.file_stem.to_string_lossy();
                path.push(join!(stem, ".", self.format.ext()));
            }
        }
        path
    }

    /// Parse user text into dir + file. An explicit extension is kept as typed.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        match (p.file_stem(), p.extension()) {
            (Some(_), Some(_)) => self.out_path.file_name = p.file_name().map(|n| n.to_os_string()),
            (Some(stem), None) => {
                self.out_path.file_stem = stem.to_os_string();
                self.out_path.file_name = None;
            }
            _ => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    file_name: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            file_name: None,
        }
    }
}
