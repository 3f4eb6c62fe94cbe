//! Rewrite Gaia-archive ADQL into the dialect of a SQLite-style evaluator.
//!
//! Two incompatibilities show up in queries copied from the Gaia archive:
//!
//! - `SELECT TOP n ...` row limits, which become a trailing `LIMIT n`.
//! - Quoted boolean literals (`'t'`, `'f'`, `'true'`, `'false'`), which become
//!   `1` and `0` since boolean columns are stored as integers.
//!
//! Everything else passes through unchanged.
//!
//! ```
//! use astroqlite::preprocess_query;
//!
//! let q = preprocess_query("SELECT TOP 10 source_id FROM gaiadr3.gaia_source WHERE has_xp_continuous = 'true'");
//! assert_eq!(q, "SELECT source_id FROM gaiadr3.gaia_source WHERE has_xp_continuous = 1 LIMIT 10");
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TOP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+TOP\s+(\d+)\b").expect("valid TOP regex"));

static BOOL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)'\s?\b(t|f|true|false)\b\s?'").expect("valid boolean regex")
});

pub fn preprocess_query(query: &str) -> String {
    let mut out = BOOL_REGEX
        .replace_all(query, |caps: &Captures| {
            if caps[1].eq_ignore_ascii_case("t") || caps[1].eq_ignore_ascii_case("true") {
                "1"
            } else {
                "0"
            }
        })
        .into_owned();

    let limit = TOP_REGEX
        .captures(&out)
        .map(|caps| (caps.get(0).map(|m| m.range()), caps[1].to_string()));

    if let Some((Some(range), n)) = limit {
        out.replace_range(range, "");
        let body_end = out.trim_end().trim_end_matches(';').trim_end().len();
        let tail = out[body_end..].to_string();
        out.truncate(body_end);
        out.push_str(" LIMIT ");
        out.push_str(&n);
        out.push_str(tail.trim());
    }

    out
}
