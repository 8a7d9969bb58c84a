//! Filter engine producing the working subset of reservoirs.
//!
//! Active predicates combine with AND. Output keeps input order.

use chrono::{Datelike, NaiveDate};
use emb_core::reservoir::ReservoirRecord;
use emb_utils::dates::{month_bounds, parse_record_date, MONTH_NAMES};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inclusive range of calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Bounds may be given in either order.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn single(year: i32) -> Self {
        Self::new(year, year)
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

impl FromStr for YearRange {
    type Err = anyhow::Error;

    /// `2023` or `2019-2023`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| -> anyhow::Result<i32> {
            part.trim()
                .parse::<i32>()
                .map_err(|e| anyhow::anyhow!("invalid year '{}': {}", part.trim(), e))
        };
        match s.split_once('-') {
            Some((a, b)) => Ok(Self::new(parse(a)?, parse(b)?)),
            None => Ok(Self::single(parse(s)?)),
        }
    }
}

/// Inclusive range of months (1-12), applied within each record's own year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    start: u32,
    end: u32,
}

impl MonthRange {
    /// `None` unless both months are in 1..=12. Bounds may be given in either order.
    pub fn new(a: u32, b: u32) -> Option<Self> {
        if !(1..=12).contains(&a) || !(1..=12).contains(&b) {
            return None;
        }
        Some(Self {
            start: a.min(b),
            end: a.max(b),
        })
    }

    pub fn single(month: u32) -> Option<Self> {
        Self::new(month, month)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains_month(&self, month: u32) -> bool {
        (self.start..=self.end).contains(&month)
    }

    /// Months in the range, ascending.
    pub fn months(&self) -> Vec<u32> {
        (self.start..=self.end).collect()
    }

    /// Whether `date` lies between the first day of the start month and the
    /// last day of the end month of the date's own year.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        let year = date.year();
        match (month_bounds(year, self.start), month_bounds(year, self.end)) {
            (Some((first, _)), Some((_, last))) => first <= date && date <= last,
            _ => false,
        }
    }
}

fn parse_month(part: &str) -> anyhow::Result<u32> {
    let part = part.trim();
    if let Ok(n) = part.parse::<u32>() {
        return Ok(n);
    }
    let lowered = part.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| name.to_lowercase() == lowered)
        .map(|idx| idx as u32 + 1)
        .ok_or_else(|| anyhow::anyhow!("invalid month '{}'", part))
}

impl FromStr for MonthRange {
    type Err = anyhow::Error;

    /// `3`, `3-6` or Spanish names such as `marzo-junio`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = match s.split_once('-') {
            Some((a, b)) => (parse_month(a)?, parse_month(b)?),
            None => {
                let m = parse_month(s)?;
                (m, m)
            }
        };
        MonthRange::new(a, b).ok_or_else(|| anyhow::anyhow!("months must be between 1 and 12: '{}'", s))
    }
}

/// The recognised filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Case-insensitive substring of name or municipality. Empty matches all.
    pub search_text: String,
    pub year_range: Option<YearRange>,
    pub month_range: Option<MonthRange>,
}

impl FilterOptions {
    pub fn has_date_filter(&self) -> bool {
        self.year_range.is_some() || self.month_range.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && !self.has_date_filter()
    }

    fn matches_search(&self, record: &ReservoirRecord, needle: &str) -> bool {
        needle.is_empty()
            || record.name.to_lowercase().contains(needle)
            || record.municipality.to_lowercase().contains(needle)
    }

    fn matches_dates(&self, record: &ReservoirRecord) -> bool {
        if !self.has_date_filter() {
            return true;
        }
        let Some(date) = parse_record_date(&record.last_updated) else {
            return false;
        };
        let year_ok = self.year_range.map_or(true, |r| r.contains(date.year()));
        let month_ok = self.month_range.map_or(true, |r| r.contains_date(date));
        year_ok && month_ok
    }

    /// Records passing every active filter, in input order.
    pub fn apply(&self, records: &[ReservoirRecord]) -> Vec<ReservoirRecord> {
        let needle = self.search_text.to_lowercase();
        records
            .iter()
            .filter(|r| self.matches_search(r, &needle) && self.matches_dates(r))
            .cloned()
            .collect()
    }
}
