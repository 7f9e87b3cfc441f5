// src/core/html.rs
use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// All descendant text, whitespace-collapsed and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// All descendant text, trimmed at the ends only. Interior spacing is kept.
pub fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Direct element children named `tag` (case-insensitive), in order.
/// Nested tables never leak cells into the outer row.
pub fn child_elements<'a>(el: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| c.value().name().eq_ignore_ascii_case(tag))
        .collect()
}

/// Attribute value, trimmed; `None` if absent.
pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name).map(str::trim)
}
