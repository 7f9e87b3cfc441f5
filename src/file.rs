// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::config::options::ExportOptions;
use crate::data::FilteredAnnouncement;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Write the announcements to the file implied by `ExportOptions`.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    rows: &[FilteredAnnouncement],
) -> Result<PathBuf, ExportError> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = fs::File::create(&path).map_err(|e| io_err(&path, e))?;
    write_rows(file, export, rows)?;
    Ok(path)
}

/// Same table, any writer (stdout, a buffer).
pub fn write_rows<W: Write>(
    w: W,
    export: &ExportOptions,
    rows: &[FilteredAnnouncement],
) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(export.format.delim())
        .from_writer(w);

    if export.include_headers {
        wtr.write_record(FilteredAnnouncement::HEADERS)?;
    }
    for r in rows {
        wtr.write_record(r.to_row())?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(dir).map_err(|e| io_err(dir, e))
}

fn io_err(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io { path: path.display().to_string(), source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ExportFormat;
    use crate::data::RawAnnouncement;

    fn one() -> FilteredAnnouncement {
        FilteredAnnouncement {
            announcement: RawAnnouncement {
                time: s!("18:02"),
                company_code: s!("00123"),
                company_name: s!("에이비씨"),
                note: s!("정정"),
                title: s!("반기보고서, 정정"),
                submitter: s!("에이비씨"),
                acceptance_id: Some(s!("1")),
            },
            detail_url: Some(s!("https://example.test/?acptno=1")),
        }
    }

    #[test]
    fn csv_quotes_commas_and_writes_headers() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &ExportOptions::default(), &[one()]).unwrap();
        let s = String::from_utf8(buf).unwrap();
        let mut lines = s.lines();
        assert_eq!(lines.next(), Some("Time,Company code,Company,Note,Title,Submitter,Detail URL"));
        assert_eq!(
            lines.next(),
            Some("18:02,00123,에이비씨,정정,\"반기보고서, 정정\",에이비씨,https://example.test/?acptno=1")
        );
    }

    #[test]
    fn tsv_without_headers() {
        let mut opts = ExportOptions::default();
        opts.format = ExportFormat::Tsv;
        opts.include_headers = false;
        let mut row = one();
        row.detail_url = None;

        let mut buf = Vec::new();
        write_rows(&mut buf, &opts, &[row]).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "18:02\t00123\t에이비씨\t정정\t반기보고서, 정정\t에이비씨\t\n");
    }
}
