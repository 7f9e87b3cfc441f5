// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Left-pad with '0' to `width`. Longer input is returned as-is.
pub fn pad_code(code: &str, width: usize) -> String {
    let code = code.trim();
    format!("{code:0>width$}")
}

/// "1,234" → 1234. Anything else non-numeric → None.
pub fn parse_count(s: &str) -> Option<u64> {
    let digits: String = s.trim().chars().filter(|c| *c != ',').collect();
    if digits.is_empty() { return None; }
    digits.parse().ok()
}
