//! Shared utility functions for the embalse crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

    /// Spanish month names, January first. Used for filter options and chart labels.
    pub const MONTH_NAMES: [&str; 12] = [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ];

    /// Date-only layouts accepted for the `last_updated` column, tried in order.
    ///
    /// Slash dates are read month-first like a browser `Date` would, with a
    /// day-first fallback for values such as `15/03/2024`.
    const DATE_LAYOUTS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y"];

    /// Date-time layouts accepted for the `last_updated` column.
    const DATE_TIME_LAYOUTS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

    /// Leniently parse a record's last-updated value.
    ///
    /// Returns `None` for empty or unrecognised text; callers treat that as
    /// "no date" rather than an error.
    pub fn parse_record_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }
        if let Some(date) = DATE_TIME_LAYOUTS
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
        {
            return Some(date.date());
        }
        DATE_LAYOUTS
            .iter()
            .find_map(|layout| NaiveDate::parse_from_str(s, layout).ok())
    }

    /// First and last calendar day of `month` (1-12) in `year`.
    pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some((first, next_first.pred_opt()?))
    }

    /// Spanish name for a 1-based month number.
    pub fn month_name(month: u32) -> Option<&'static str> {
        MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
    }

    /// Calendar year of a lenient record date, if it parses.
    pub fn record_year(s: &str) -> Option<i32> {
        parse_record_date(s).map(|d| d.year())
    }

}

/// Lenient numeric coercion. Malformed text becomes 0, never an error.
pub mod numbers {
    /// Length of the longest prefix of `s` that reads as a decimal float
    /// (`[+-]digits[.digits][e[+-]digits]`), or 0 when there is none.
    fn float_prefix_len(s: &str) -> usize {
        let bytes = s.as_bytes();
        let mut i = 0;
        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let int_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let mut digits = i - int_start;
        if i < bytes.len() && bytes[i] == b'.' {
            let frac_start = i + 1;
            let mut j = frac_start;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            digits += j - frac_start;
            if digits > 0 {
                i = j;
            }
        }
        if digits == 0 {
            return 0;
        }
        if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
            let mut j = i + 1;
            if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
                j += 1;
            }
            let exp_start = j;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > exp_start {
                i = j;
            }
        }
        i
    }

    /// Parse the leading float in `s`, or 0.0 when there is none.
    ///
    /// Trailing text is ignored, so `"12.5 hm3"` reads as `12.5`.
    pub fn parse_float_or_zero(s: &str) -> f64 {
        let s = s.trim_start();
        let len = float_prefix_len(s);
        if len == 0 {
            return 0.0;
        }
        match s[..len].parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => 0.0,
        }
    }

    /// Parse the leading integer in `s`, or 0 when there is none.
    pub fn parse_int_or_zero(s: &str) -> i64 {
        let s = s.trim_start();
        let bytes = s.as_bytes();
        let mut end = 0;
        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == digits_start {
            return 0;
        }
        s[..end].parse::<i64>().unwrap_or(0)
    }

    /// Round to the nearest integer, ties toward positive infinity.
    pub fn round_half_up(value: f64) -> i64 {
        (value + 0.5).floor() as i64
    }

}
