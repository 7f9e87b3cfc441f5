// src/reference.rs
//! Reference sets the filter runs against: supported form names and the
//! eligible company roster. Both are plain values handed to the runner;
//! loading them (from the CSV exports, or anywhere else) is the caller's call.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::config::consts::{CODE_COLUMN, COMPANY_CODE_WIDTH, COMPANY_NAME_COLUMN, FORMS_COLUMN};
use crate::core::sanitize::pad_code;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("cannot open {path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("column '{0}' not found")]
    MissingColumn(&'static str),
}

/// Form names matched as title substrings. Unique, first-seen order kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureForms {
    names: Vec<String>,
}

impl DisclosureForms {
    /// Blank names are dropped: an empty substring would match every title.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty() && seen.insert(n.clone()))
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[String] { &self.names }
    pub fn len(&self) -> usize { self.names.len() }
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    /// First form name found inside `title`.
    pub fn matching(&self, title: &str) -> Option<&str> {
        self.names.iter().map(String::as_str).find(|n| title.contains(n))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub code: String,
    pub name: String,
}

/// Eligible companies keyed by 5-wide, zero-padded code.
#[derive(Clone, Debug, Default)]
pub struct EligibleRoster {
    entries: Vec<RosterEntry>,
    codes: HashSet<String>,
}

impl EligibleRoster {
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_entries(codes.into_iter().map(|c| (c, "")))
    }

    /// `(code, name)` pairs. Codes are padded; blanks and repeats dropped.
    pub fn from_entries<I, C, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: AsRef<str>,
    {
        let mut roster = Self::default();
        for (code, name) in entries {
            let code = code.as_ref().trim();
            if code.is_empty() { continue; }
            let code = pad_code(code, COMPANY_CODE_WIDTH);
            if roster.codes.insert(code.clone()) {
                roster.entries.push(RosterEntry { code, name: name.as_ref().trim().to_string() });
            }
        }
        roster
    }

    pub fn contains(&self, code: &str) -> bool { self.codes.contains(code) }
    pub fn entries(&self) -> &[RosterEntry] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/* ---------------- CSV loading ---------------- */

pub fn load_forms(path: &Path) -> Result<DisclosureForms, ReferenceError> {
    forms_from_reader(open(path)?)
}

pub fn load_roster(path: &Path) -> Result<EligibleRoster, ReferenceError> {
    roster_from_reader(open(path)?)
}

/// `서식명` column, or the first column when the header is something else.
pub fn forms_from_reader<R: Read>(rdr: R) -> Result<DisclosureForms, ReferenceError> {
    let mut rdr = csv_reader(rdr);
    let col = column(rdr.headers()?, FORMS_COLUMN).unwrap_or(0);

    let mut names = Vec::new();
    for rec in rdr.records() {
        if let Some(v) = rec?.get(col) {
            names.push(v.to_string());
        }
    }
    let forms = DisclosureForms::new(names);
    debug!(count = forms.len(), "loaded form names");
    Ok(forms)
}

/// `회사코드` column is required; `회사명` is picked up when present.
pub fn roster_from_reader<R: Read>(rdr: R) -> Result<EligibleRoster, ReferenceError> {
    let mut rdr = csv_reader(rdr);
    let headers = rdr.headers()?.clone();
    let code_col = column(&headers, CODE_COLUMN).ok_or(ReferenceError::MissingColumn(CODE_COLUMN))?;
    let name_col = column(&headers, COMPANY_NAME_COLUMN);

    let mut entries = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let code = rec.get(code_col).unwrap_or_default().to_string();
        let name = name_col.and_then(|i| rec.get(i)).unwrap_or_default().to_string();
        entries.push((code, name));
    }
    let roster = EligibleRoster::from_entries(entries);
    debug!(count = roster.len(), "loaded company roster");
    Ok(roster)
}

fn open(path: &Path) -> Result<File, ReferenceError> {
    File::open(path).map_err(|source| ReferenceError::Io { path: path.display().to_string(), source })
}

fn csv_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().flexible(true).trim(csv::Trim::All).from_reader(rdr)
}

/// Header lookup tolerant of a UTF-8 BOM on the first field.
fn column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim_start_matches('\u{feff}').trim() == name)
}
