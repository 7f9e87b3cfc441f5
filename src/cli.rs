// src/cli.rs
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};

use crate::config::consts::*;
use crate::config::options::{AppOptions, ExportFormat, Market, ScrapeOptions};
use crate::core::net::FetchError;
use crate::data::DisclosureReport;
use crate::progress::Progress;
use crate::{file, reference, runner};

/// Same-day KOSDAQ disclosures that are translation targets.
#[derive(Parser, Debug)]
#[command(name = "kosdaq_discl", version, about)]
pub struct Cli {
    /// Listing date (YYYY-MM-DD). Default: today, or the Friday before on weekends.
    #[arg(short, long, env = "KOSDAQ_DISCL_DATE")]
    pub date: Option<NaiveDate>,

    /// CSV of supported form names (column `서식명`).
    #[arg(long, env = "KOSDAQ_DISCL_FORMS", default_value = DEFAULT_FORMS_FILE)]
    pub forms: PathBuf,

    /// CSV of eligible companies (column `회사코드`, optional `회사명`).
    #[arg(long, env = "KOSDAQ_DISCL_COMPANIES", default_value = DEFAULT_COMPANIES_FILE)]
    pub companies: PathBuf,

    #[arg(long, value_enum, env = "KOSDAQ_DISCL_MARKET", default_value_t = Market::Kosdaq)]
    pub market: Market,

    /// Pause between page requests; never below the built-in floor.
    #[arg(long, env = "KOSDAQ_DISCL_PAUSE_MS", default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,

    #[arg(long, env = "KOSDAQ_DISCL_TIMEOUT_SECS", default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Earliest date accepted.
    #[arg(long, env = "KOSDAQ_DISCL_MIN_DATE", default_value = "2020-01-01")]
    pub min_date: NaiveDate,

    /// Write results to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    #[arg(long)]
    pub no_headers: bool,

    /// -v info, -vv debug, -vvv trace (stderr).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn app_options(&self, date: NaiveDate) -> AppOptions {
        let mut scrape = ScrapeOptions::for_date(date);
        scrape.market = self.market;
        scrape.timeout = Duration::from_secs(self.timeout_secs);
        scrape.set_request_pause(Duration::from_millis(self.pause_ms));

        let mut opts = AppOptions { scrape, ..AppOptions::default() };
        opts.export.format = self.format;
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Weekends fall back to the preceding Friday.
pub fn default_date(today: NaiveDate) -> NaiveDate {
    let back = match today.weekday() {
        Weekday::Sat => 1,
        Weekday::Sun => 2,
        _ => 0,
    };
    today.checked_sub_days(Days::new(back)).unwrap_or(today)
}

pub fn resolve_date(
    requested: Option<NaiveDate>,
    floor: NaiveDate,
    today: NaiveDate,
) -> color_eyre::Result<NaiveDate> {
    let date = requested.unwrap_or_else(|| default_date(today));
    if date < floor || date > today {
        bail!("date {date} is outside {floor}..={today}");
    }
    Ok(date)
}

pub fn run() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    crate::log::init(cli.verbose);

    let today = Local::now().date_naive();
    let date = resolve_date(cli.date, cli.min_date, today)?;

    let forms = reference::load_forms(&cli.forms)
        .wrap_err_with(|| format!("loading form names from {}", cli.forms.display()))?;
    let roster = reference::load_roster(&cli.companies)
        .wrap_err_with(|| format!("loading company roster from {}", cli.companies.display()))?;
    eprintln!("{} form names, {} companies", forms.len(), roster.len());

    let opts = cli.app_options(date);
    let mut progress = CliProgress::default();
    let report = runner::run(&opts.scrape, &forms, &roster, Some(&mut progress))?;

    print_summary(date, &report);

    match &cli.out {
        Some(_) => {
            let path = file::write_export(&opts.export, &report.announcements)?;
            eprintln!("Wrote {}", path.display());
        }
        None => file::write_rows(io::stdout().lock(), &opts.export, &report.announcements)?,
    }
    Ok(())
}

fn print_summary(date: NaiveDate, report: &DisclosureReport) {
    let p = &report.pages;
    match p.total_items {
        Some(n) => eprintln!("{date}: {n} disclosures on {} page(s)", p.total_pages),
        None => eprintln!("{date}: page counter unreadable; page 1 only"),
    }
    let s = &report.stats;
    eprintln!(
        "{} rows scanned → {} kept (excluded {}, no form match {}, not on roster {})",
        report.rows_scanned, s.kept, s.excluded, s.no_form_match, s.not_on_roster
    );
    for e in &report.failed_pages {
        eprintln!("  missing {e}");
    }
    if report.announcements.is_empty() {
        eprintln!("No matching disclosures.");
    }
}

#[derive(Default)]
struct CliProgress {
    total: u32,
    done: u32,
}

impl Progress for CliProgress {
    fn begin(&mut self, total_pages: u32) {
        self.total = total_pages;
    }
    fn page_done(&mut self, page: u32) {
        self.done += 1;
        if self.total > 1 {
            eprintln!("Fetched page {page} ({}/{})", self.done, self.total);
        }
    }
    fn page_failed(&mut self, err: &FetchError) {
        eprintln!("Failed {err}");
    }
}
