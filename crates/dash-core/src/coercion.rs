//! Cell-level coercion rules for the cleaning step.
//!
//! Monetary cells arrive as heterogeneous text (`"$1,234.50"`, `"1234.5"`,
//! `"n/a"`); dates arrive in whichever format the spreadsheet exported.
//! Coercion never fails: bad numbers become `0.0`, bad dates become `None`.

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

// ── MoneyParser ───────────────────────────────────────────────────────────────

/// Parses monetary text into `f64`, stripping currency symbols and thousands
/// separators first.
///
/// Holds the compiled strip pattern so per-cell parsing does not recompile it;
/// construct once per table build.
pub struct MoneyParser {
    strip: Regex,
}

impl MoneyParser {
    pub fn new() -> Self {
        Self {
            strip: Regex::new(r"[$,]").expect("regex is valid"),
        }
    }

    /// Coerce a raw cell to a number.
    ///
    /// `"$1,234.50"` → `1234.50`; anything that still fails to parse after
    /// stripping (including empty cells) → `0.0`.
    pub fn parse(&self, raw: &str) -> f64 {
        let cleaned = self.strip.replace_all(raw.trim(), "");
        cleaned.parse::<f64>().unwrap_or(0.0)
    }
}

impl Default for MoneyParser {
    fn default() -> Self {
        Self::new()
    }
}

// ── Dates ─────────────────────────────────────────────────────────────────────

/// Parse a date cell into a [`NaiveDate`], returning `None` on failure.
///
/// Tries a series of common export patterns; cells carrying a time component
/// (`"2024-03-15 00:00:00"`, ISO `T` separator) are retried on the date part
/// alone.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    const FORMATS: &[&str] = &[
        "%Y-%m-%d",
        "%m/%d/%Y",
        "%m/%d/%y",
        "%d-%m-%Y",
        "%Y/%m/%d",
        "%d-%b-%Y",
        "%b %d, %Y",
    ];

    for fmt in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    // Retry with any time component dropped.
    if let Some(date_part) = s.split(['T', ' ']).next() {
        if date_part != s {
            for fmt in FORMATS {
                if let Ok(date) = NaiveDate::parse_from_str(date_part, fmt) {
                    return Some(date);
                }
            }
        }
    }

    debug!("could not parse date cell \"{}\"", s);
    None
}

/// Year-month composite key: `"<year>-<month>"` with no zero padding.
///
/// A row dated 2024-03-15 yields `"2024-3"`.
pub fn year_month_key(year: i32, month: u32) -> String {
    format!("{}-{}", year, month)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── MoneyParser ───────────────────────────────────────────────────────────

    #[test]
    fn test_money_currency_and_thousands() {
        let parser = MoneyParser::new();
        assert!((parser.parse("$1,234.50") - 1234.50).abs() < 1e-9);
    }

    #[test]
    fn test_money_plain_number() {
        let parser = MoneyParser::new();
        assert!((parser.parse("42.5") - 42.5).abs() < 1e-9);
    }

    #[test]
    fn test_money_negative() {
        let parser = MoneyParser::new();
        assert!((parser.parse("-$300.25") - (-300.25)).abs() < 1e-9);
    }

    #[test]
    fn test_money_non_numeric_is_zero() {
        let parser = MoneyParser::new();
        assert_eq!(parser.parse("pending"), 0.0);
        assert_eq!(parser.parse("n/a"), 0.0);
    }

    #[test]
    fn test_money_empty_is_zero() {
        let parser = MoneyParser::new();
        assert_eq!(parser.parse(""), 0.0);
        assert_eq!(parser.parse("   "), 0.0);
    }

    #[test]
    fn test_money_whitespace_trimmed() {
        let parser = MoneyParser::new();
        assert!((parser.parse("  $2,000 ") - 2000.0).abs() < 1e-9);
    }

    // ── parse_date ────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_date_iso() {
        let d = parse_date("2024-03-15").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_date_us_slash() {
        let d = parse_date("10/05/2023").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2023, 10, 5).unwrap());
    }

    #[test]
    fn test_parse_date_with_time_component() {
        let d = parse_date("2024-03-15 00:00:00").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_date_garbage_is_none() {
        assert!(parse_date("not a date").is_none());
        assert!(parse_date("").is_none());
        assert!(parse_date("2024-13-45").is_none());
    }

    // ── year_month_key ────────────────────────────────────────────────────────

    #[test]
    fn test_year_month_key_no_padding() {
        assert_eq!(year_month_key(2024, 3), "2024-3");
        assert_eq!(year_month_key(2024, 10), "2024-10");
    }
}
