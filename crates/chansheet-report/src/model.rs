//! Input records for the monthly report.
//!
//! Everything here is already aggregated upstream; the report never derives
//! monthly totals from daily rows itself.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ReportError, Result};

/// Calendar month key in zero-padded `YYYY-MM` form.
///
/// Ordering follows the string, which is chronological because both parts
/// are zero-padded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey(String);

impl MonthKey {
    pub fn parse(key: &str) -> Result<Self> {
        let bytes = key.as_bytes();
        let shape_ok = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes[..4].iter().chain(&bytes[5..]).all(u8::is_ascii_digit);
        if !shape_ok {
            return Err(ReportError::InvalidMonthKey(key.to_string()));
        }
        NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d")
            .map_err(|_| ReportError::InvalidMonthKey(key.to_string()))?;
        Ok(MonthKey(key.to_string()))
    }

    /// Key of the month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey(format!("{:04}-{:02}", date.year(), date.month()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn year(&self) -> i32 {
        self.0[..4].parse().unwrap_or_default()
    }

    /// Month number, 1 to 12
    pub fn month(&self) -> u32 {
        self.0[5..].parse().unwrap_or_default()
    }
}

impl FromStr for MonthKey {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        MonthKey::parse(s)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = ReportError;

    fn try_from(value: String) -> Result<Self> {
        MonthKey::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a per-month top-N country list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryValue {
    pub country_code: String,
    pub value: u64,
}

impl CountryValue {
    pub fn new(country_code: impl Into<String>, value: u64) -> Self {
        CountryValue {
            country_code: country_code.into(),
            value,
        }
    }
}

/// Per-month rollup of channel metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyAggregate {
    pub views: u64,
    pub watch_time_minutes: f64,
    pub subscribers_gained: u64,
    pub subscribers_lost: u64,
    /// Top countries by views, sorted descending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geographic_views_top: Option<Vec<CountryValue>>,
    /// Top countries by subscribers gained, sorted descending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geographic_subscribers_top: Option<Vec<CountryValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_count: Option<u64>,
}

impl MonthlyAggregate {
    /// `gained - lost` for the month
    pub fn net_subscribers(&self) -> i64 {
        self.subscribers_gained as i64 - self.subscribers_lost as i64
    }

    pub fn watch_time_hours(&self) -> f64 {
        (self.watch_time_minutes / 60.0 * 10.0).round() / 10.0
    }

    pub fn has_geography(&self) -> bool {
        self.geographic_views_top.is_some() || self.geographic_subscribers_top.is_some()
    }
}

/// Current channel totals at export time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelSnapshot {
    pub subscriber_count: u64,
    pub video_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertiser_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrations: Option<String>,
}

/// Monthly aggregates keyed by `YYYY-MM`
pub type MonthlyData = BTreeMap<String, MonthlyAggregate>;

/// All keys of `data` as validated month keys, ascending
pub fn sorted_months(data: &MonthlyData) -> Result<Vec<MonthKey>> {
    // BTreeMap iterates in key order, which is chronological for valid keys
    data.keys().map(|k| MonthKey::parse(k)).collect()
}
