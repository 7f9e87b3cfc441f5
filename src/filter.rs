// src/filter.rs
//! Translation-target filter: exclusion, then form-name inclusion, then roster.
//!
//! Exclusion runs first because listing-administration titles ("추가상장(...)",
//! "변경상장(...)") can contain a supported form name as a substring.

use crate::config::consts::EXCLUDED_TITLE_PREFIXES;
use crate::data::{FilterStats, RawAnnouncement};
use crate::reference::{DisclosureForms, EligibleRoster};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    /// Empty title or a listing-administration prefix.
    Excluded,
    NoFormMatch,
    NotOnRoster,
}

pub struct AnnouncementFilter<'a> {
    forms: &'a DisclosureForms,
    roster: &'a EligibleRoster,
}

impl<'a> AnnouncementFilter<'a> {
    pub fn new(forms: &'a DisclosureForms, roster: &'a EligibleRoster) -> Self {
        Self { forms, roster }
    }

    pub fn verdict(&self, row: &RawAnnouncement) -> Verdict {
        let title = row.title.as_str();
        if title.is_empty() || EXCLUDED_TITLE_PREFIXES.iter().any(|p| title.starts_with(p)) {
            return Verdict::Excluded;
        }
        if self.forms.matching(title).is_none() {
            return Verdict::NoFormMatch;
        }
        if !self.roster.contains(&row.company_code) {
            return Verdict::NotOnRoster;
        }
        Verdict::Keep
    }

    /// Stable: kept rows come out in input order.
    pub fn apply<'r>(&self, rows: &'r [RawAnnouncement]) -> (Vec<&'r RawAnnouncement>, FilterStats) {
        let mut stats = FilterStats::default();
        let mut kept = Vec::new();
        for row in rows {
            match self.verdict(row) {
                Verdict::Keep => {
                    stats.kept += 1;
                    kept.push(row);
                }
                Verdict::Excluded => stats.excluded += 1,
                Verdict::NoFormMatch => stats.no_form_match += 1,
                Verdict::NotOnRoster => stats.not_on_roster += 1,
            }
        }
        (kept, stats)
    }
}

/// Owned convenience over [`AnnouncementFilter::apply`].
pub fn filter(
    rows: &[RawAnnouncement],
    forms: &DisclosureForms,
    roster: &EligibleRoster,
) -> Vec<RawAnnouncement> {
    let (kept, _) = AnnouncementFilter::new(forms, roster).apply(rows);
    kept.into_iter().cloned().collect()
}
