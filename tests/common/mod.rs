// tests/common/mod.rs
//
// Listing-page fixtures shaped like the KIND same-day disclosure page.
//
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use chrono::NaiveDate;
use kosdaq_discl::core::net::{FetchError, PageSource};

pub struct Row<'a> {
    pub time: &'a str,
    pub code: &'a str,
    pub company: &'a str,
    pub title: &'a str,
    pub tags: &'a [&'a str],
    pub acptno: &'a str,
}

impl<'a> Row<'a> {
    pub fn new(code: &'a str, title: &'a str, acptno: &'a str) -> Self {
        Self { time: "17:30", code, company: "테스트", title, tags: &[], acptno }
    }

    fn html(&self) -> String {
        let tags: String = self.tags.iter().map(|t| format!("<font color=\"red\">{t}</font>")).collect();
        format!(
            r##"<tr>
                <td class="txc">{time}</td>
                <td><a href="#companysum" id="companysum" onclick="companysummary_open('{code}'); return false;">{company}</a></td>
                <td><a href="#viewer" onclick="openDisclsViewer('{acptno}','');return false;" title="{title}">{tags}{title}</a></td>
                <td>{company}</td>
                <td><a href="#chart">차트</a></td>
            </tr>"##,
            time = self.time,
            code = self.code,
            company = self.company,
            acptno = self.acptno,
            title = self.title,
        )
    }
}

pub fn listing_page(total_items: u64, page: u32, total_pages: u32, rows: &[Row]) -> String {
    let body: String = rows.iter().map(Row::html).collect();
    format!(
        r#"<html><body>
        <section class="paging-group">
          <div class="info type-00">전체 <em>{total_items}</em> 건 &nbsp;:&nbsp; {page}/{total_pages}</div>
        </section>
        <table class="list type-00 mt10">
          <thead><tr><th>시간</th><th>회사명</th><th>공시제목</th><th>제출인</th><th>차트/주가</th></tr></thead>
          <tbody>{body}</tbody>
        </table>
        </body></html>"#
    )
}

/// Canned pages by index; `Err(status)` makes that page fail.
pub struct CannedSource {
    pages: HashMap<u32, Result<String, u16>>,
    pub calls: RefCell<Vec<u32>>,
}

impl CannedSource {
    pub fn new(pages: impl IntoIterator<Item = (u32, Result<String, u16>)>) -> Self {
        Self { pages: pages.into_iter().collect(), calls: RefCell::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<u32> {
        self.calls.borrow().clone()
    }
}

impl PageSource for CannedSource {
    fn fetch(&self, _date: NaiveDate, page: u32) -> Result<String, FetchError> {
        self.calls.borrow_mut().push(page);
        match self.pages.get(&page) {
            Some(Ok(html)) => Ok(html.clone()),
            Some(Err(status)) => Err(FetchError::status(page, *status)),
            None => Err(FetchError::status(page, 404)),
        }
    }
}

pub fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 14).unwrap()
}
