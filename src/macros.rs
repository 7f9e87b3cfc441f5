// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// `&'static scraper::Selector` parsed on first use.
/// Only for literal selectors: a typo is a bug, not a runtime condition.
#[macro_export]
macro_rules! selector {
    ($css:literal) => {{
        static SEL: ::std::sync::LazyLock<::scraper::Selector> = ::std::sync::LazyLock::new(|| {
            ::scraper::Selector::parse($css).expect(concat!("bad selector: ", $css))
        });
        &*SEL
    }};
}

/// `&'static regex::Regex` compiled on first use. Same rule as `selector!`.
#[macro_export]
macro_rules! regex {
    ($re:literal) => {{
        static RE: ::std::sync::LazyLock<::regex::Regex> = ::std::sync::LazyLock::new(|| {
            ::regex::Regex::new($re).expect(concat!("bad regex: ", $re))
        });
        &*RE
    }};
}
