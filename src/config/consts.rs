// src/config/consts.rs

// Net config
pub const KIND_ORIGIN: &str = "https://kind.krx.co.kr/";
pub const LISTING_URL: &str = "https://kind.krx.co.kr/disclosure/todaydisclosure.do";
pub const VIEWER_URL: &str = "https://kind.krx.co.kr/common/disclsviewer.do";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/105.0.0.0 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Listing query
pub const PAGE_SIZE: u32 = 100;
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Upper bound on a believable page counter (100k disclosures in a day).
pub const MAX_PAGES: u32 = 1_000;

// Pacing
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite
pub const MIN_REQUEST_PAUSE_MS: u64 = 500;

// Filtering
pub const EXCLUDED_TITLE_PREFIXES: [&str; 2] = ["추가상장", "변경상장"];
pub const NOTE_SEP: &str = "_";
pub const COMPANY_CODE_WIDTH: usize = 5;

// Reference data
pub const FORMS_COLUMN: &str = "서식명";
pub const CODE_COLUMN: &str = "회사코드";
pub const COMPANY_NAME_COLUMN: &str = "회사명";
pub const DEFAULT_FORMS_FILE: &str = "kosdaq_format.csv";
pub const DEFAULT_COMPANIES_FILE: &str = "kosdaq_company.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "disclosures";
