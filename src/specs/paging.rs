// src/specs/paging.rs
//! Page counter on the listing: `<div class="info type-00"><em>234</em>건 : 1/3</div>`.
//! `<em>` is the total item count, the trailing `current/total` gives the page count.
//! The page count is only trusted when it agrees with the item count at the
//! requested page size and stays under `MAX_PAGES`.

use scraper::Html;
use tracing::warn;

use crate::config::consts::MAX_PAGES;
use crate::core::html::text_of;
use crate::core::sanitize::parse_count;
use crate::data::PageDescriptor;

pub fn resolve_page_count(doc: &Html, page_size: u32) -> PageDescriptor {
    let Some(info) = doc.select(selector!(".info.type-00")).next() else {
        warn!("page counter missing; assuming a single page");
        return PageDescriptor::single_page_fallback();
    };

    let total_items = info
        .select(selector!("em"))
        .next()
        .and_then(|em| parse_count(&text_of(em)));

    let text = text_of(info);
    let total_pages = regex!(r"(\d+)\s*/\s*(\d+)")
        .captures(&text)
        .and_then(|c| c.get(2))
        .and_then(|m| m.as_str().parse::<u32>().ok());

    match (total_items, total_pages) {
        (Some(items), Some(pages)) => {
            let pages = pages.max(1);
            let expected = items.div_ceil(u64::from(page_size.max(1))).max(1);
            if u64::from(pages) != expected || pages > MAX_PAGES {
                warn!(counter = %text, items, pages, expected, "page count out of step with items; assuming a single page");
                return PageDescriptor { total_items: Some(items), total_pages: 1, degraded: true };
            }
            PageDescriptor { total_items: Some(items), total_pages: pages, degraded: false }
        }
        _ => {
            warn!(counter = %text, "page counter unreadable; assuming a single page");
            PageDescriptor::single_page_fallback()
        }
    }
}
