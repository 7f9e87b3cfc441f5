// src/core/net.rs
//! Listing page fetch over HTTP (blocking reqwest).

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use thiserror::Error;
use tracing::debug;

use crate::config::consts::{DATE_FORMAT, KIND_ORIGIN, USER_AGENT};
use crate::config::options::{Market, ScrapeOptions};

#[derive(Debug, Error)]
pub enum FetchErrorKind {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}")]
    Status { status: u16 },
}

/// One page that could not be fetched. Carries the 1-based page index.
#[derive(Debug, Error)]
#[error("page {page}: {kind}")]
pub struct FetchError {
    pub page: u32,
    #[source]
    pub kind: FetchErrorKind,
}

impl FetchError {
    pub fn new(page: u32, kind: impl Into<FetchErrorKind>) -> Self {
        Self { page, kind: kind.into() }
    }

    pub fn status(page: u32, status: u16) -> Self {
        Self { page, kind: FetchErrorKind::Status { status } }
    }
}

/// Anything that can hand back the listing HTML for (date, page).
/// The HTTP client is one; tests plug in canned pages.
pub trait PageSource {
    fn fetch(&self, date: NaiveDate, page: u32) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
    url: String,
    market: Market,
    page_size: u32,
}

impl HttpFetcher {
    pub fn new(opts: &ScrapeOptions) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_client(opts.timeout)?,
            url: opts.listing_url.clone(),
            market: opts.market,
            page_size: opts.page_size,
        })
    }
}

/// The portal degrades requests without a browser UA and its own Referer,
/// so both go on every request.
fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(header::REFERER, HeaderValue::from_static(KIND_ORIGIN));
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
    );

    Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(timeout)
        .build()
}

impl PageSource for HttpFetcher {
    fn fetch(&self, date: NaiveDate, page: u32) -> Result<String, FetchError> {
        let sel_date = date.format(DATE_FORMAT).to_string();
        let page_index = page.to_string();
        let page_size = self.page_size.to_string();

        let params: [(&str, &str); 16] = [
            ("method", "searchTodayDisclosureSub"),
            ("currentPageSize", &page_size),
            ("pageIndex", &page_index),
            ("orderMode", "0"),
            ("orderStat", "D"),
            ("marketType", self.market.code()),
            ("forward", "todaydisclosure_sub"),
            ("searchMode", ""),
            ("searchCodeType", ""),
            ("chose", "S"),
            ("todayFlag", "Y"),
            ("repIsuSrtCd", ""),
            ("kosdaqSegment", ""),
            ("selDate", &sel_date),
            ("searchCorpName", ""),
            ("copyUrl", ""),
        ];

        debug!(page, date = %sel_date, "POST {}", self.url);
        let resp = self
            .client
            .post(&self.url)
            .query(&params)
            .send()
            .map_err(|e| FetchError::new(page, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::status(page, status.as_u16()));
        }
        resp.text().map_err(|e| FetchError::new(page, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves one request with `reply`, hands back the request head (lowercased header names).
    fn serve_once(reply: &'static str) -> (String, thread::JoinHandle<(String, HashMap<String, String>)>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/disclosure/todaydisclosure.do", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut headers = HashMap::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((k, v)) = line.split_once(':') {
                    headers.insert(k.trim().to_ascii_lowercase(), v.trim().to_string());
                }
            }
            stream.write_all(reply.as_bytes()).unwrap();
            (request_line.trim_end().to_string(), headers)
        });
        (url, handle)
    }

    fn opts_for(url: String) -> ScrapeOptions {
        let mut opts = ScrapeOptions::for_date(NaiveDate::from_ymd_opt(2024, 8, 14).unwrap());
        opts.listing_url = url;
        opts.timeout = Duration::from_secs(5);
        opts
    }

    #[test]
    fn posts_listing_query_with_browser_headers() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: 7\r\nConnection: close\r\n\r\n<html/>",
        );
        let fetcher = HttpFetcher::new(&opts_for(url)).unwrap();
        let body = fetcher.fetch(NaiveDate::from_ymd_opt(2024, 8, 14).unwrap(), 3).unwrap();
        assert_eq!(body, "<html/>");

        let (request_line, headers) = server.join().unwrap();
        let mut parts = request_line.split_whitespace();
        assert_eq!(parts.next(), Some("POST"));
        let target = parts.next().unwrap();
        let query: HashMap<String, String> = url::Url::parse(&format!("http://x{target}"))
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect();

        let expected = [
            ("method", "searchTodayDisclosureSub"),
            ("currentPageSize", "100"),
            ("pageIndex", "3"),
            ("orderMode", "0"),
            ("orderStat", "D"),
            ("marketType", "2"),
            ("forward", "todaydisclosure_sub"),
            ("searchMode", ""),
            ("searchCodeType", ""),
            ("chose", "S"),
            ("todayFlag", "Y"),
            ("repIsuSrtCd", ""),
            ("kosdaqSegment", ""),
            ("selDate", "2024-08-14"),
            ("searchCorpName", ""),
            ("copyUrl", ""),
        ];
        assert_eq!(query.len(), expected.len());
        for (k, v) in expected {
            assert_eq!(query.get(k).map(String::as_str), Some(v), "param {k}");
        }

        assert_eq!(headers.get("user-agent").map(String::as_str), Some(USER_AGENT));
        assert_eq!(headers.get("referer").map(String::as_str), Some(KIND_ORIGIN));
    }

    #[test]
    fn non_success_reply_is_a_status_error() {
        let (url, server) = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let fetcher = HttpFetcher::new(&opts_for(url)).unwrap();
        let err = fetcher.fetch(NaiveDate::from_ymd_opt(2024, 8, 14).unwrap(), 2).unwrap_err();
        server.join().unwrap();

        assert_eq!(err.page, 2);
        assert!(matches!(err.kind, FetchErrorKind::Status { status: 503 }), "{err}");
    }

    #[test]
    fn fetch_error_names_page_and_status() {
        let e = FetchError::status(3, 503);
        assert_eq!(e.to_string(), "page 3: server returned 503");
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let mut opts = ScrapeOptions::default();
        // Port 1 on loopback: refused immediately, no external traffic.
        opts.listing_url = s!("http://127.0.0.1:1/disclosure/todaydisclosure.do");
        opts.timeout = Duration::from_secs(2);
        let fetcher = HttpFetcher::new(&opts).unwrap();

        let err = fetcher.fetch(opts.date, 1).unwrap_err();
        assert_eq!(err.page, 1);
        assert!(matches!(err.kind, FetchErrorKind::Transport(_)));
    }
}
