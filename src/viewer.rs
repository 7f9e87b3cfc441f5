// src/viewer.rs
//! Detail-view links: `disclsviewer.do?method=search&acptno=<id>&docno=&viewerhost=&viewerport=`.
//! The viewer wants the three trailing parameters present even when empty.

use url::Url;

use crate::config::consts::VIEWER_URL;

const ACCEPTANCE_PARAM: &str = "acptno";

/// `None` for a missing or blank id: no link rather than a broken one.
pub fn build_url(acceptance_id: Option<&str>) -> Option<String> {
    let id = acceptance_id.map(str::trim).filter(|id| !id.is_empty())?;
    let params = [
        ("method", "search"),
        (ACCEPTANCE_PARAM, id),
        ("docno", ""),
        ("viewerhost", ""),
        ("viewerport", ""),
    ];
    Url::parse_with_params(VIEWER_URL, &params).ok().map(String::from)
}

/// Reads `acptno` back out of a viewer link.
pub fn acceptance_id_from_url(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()?
        .query_pairs()
        .find(|(k, _)| k == ACCEPTANCE_PARAM)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}
