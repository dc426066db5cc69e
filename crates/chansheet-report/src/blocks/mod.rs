//! Block factories.
//!
//! Each factory turns the report input into one [`Fragment`]. Factories are
//! independent of each other: they only read the shared [`ReportInput`].
//!
//! Every block uses the same column geometry. Column 0 holds the row label
//! and month `k` owns columns `1 + 3k ..= 3 + 3k`, of which the factories
//! fill the first and leave the other two blank unless stated otherwise.

mod channel;
mod geography;
mod header;
mod metrics;
mod section;
mod subscribers;

pub use channel::channel;
pub use geography::{geography, SUBSCRIBER_RANKS, VIEW_RANKS};
pub use header::header;
pub use metrics::metrics;
pub use section::section_header;
pub use subscribers::subscriber_total;

use chansheet_core::{CellValue, Row};

use crate::labels::ReportLabels;
use crate::model::{ChannelSnapshot, MonthKey, MonthlyAggregate, MonthlyData};

/// Cells per month group
pub const GROUP_WIDTH: usize = 3;

/// Shared input of every block factory
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub data: &'a MonthlyData,
    /// Months to render, ascending
    pub months: &'a [MonthKey],
    pub channel: Option<&'a ChannelSnapshot>,
    pub labels: &'a ReportLabels,
}

impl<'a> ReportInput<'a> {
    pub fn new(data: &'a MonthlyData, months: &'a [MonthKey], labels: &'a ReportLabels) -> Self {
        ReportInput {
            data,
            months,
            channel: None,
            labels,
        }
    }

    pub fn with_channel(mut self, channel: &'a ChannelSnapshot) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Row width: label column plus one group per month
    pub fn width(&self) -> usize {
        row_width(self.months.len())
    }

    /// Aggregate for `month`; months absent from the data read as zeros
    pub fn month(&self, month: &MonthKey) -> MonthView<'a> {
        MonthView(self.data.get(month.as_str()))
    }

    /// Row of `label` followed by one `(value, blank, blank)` group per month
    pub fn month_row<F>(&self, label: &str, mut value: F) -> Row
    where
        F: FnMut(&MonthKey) -> CellValue,
    {
        self.group_row(label, |month| [value(month), CellValue::Empty, CellValue::Empty])
    }

    /// Row of `label` followed by one three-cell group per month
    pub fn group_row<F>(&self, label: &str, mut group: F) -> Row
    where
        F: FnMut(&MonthKey) -> [CellValue; GROUP_WIDTH],
    {
        let mut row = Vec::with_capacity(self.width());
        row.push(CellValue::text(label));
        for month in self.months {
            row.extend(group(month));
        }
        row
    }

    /// Row with a label and blank month groups
    pub fn label_row(&self, label: &str) -> Row {
        self.month_row(label, |_| CellValue::Empty)
    }
}

/// Read access to one month that defaults missing months to zero
#[derive(Debug, Clone, Copy)]
pub struct MonthView<'a>(Option<&'a MonthlyAggregate>);

impl<'a> MonthView<'a> {
    pub fn get(&self) -> Option<&'a MonthlyAggregate> {
        self.0
    }

    pub fn views(&self) -> u64 {
        self.0.map_or(0, |m| m.views)
    }

    pub fn watch_time_hours(&self) -> f64 {
        self.0.map_or(0.0, MonthlyAggregate::watch_time_hours)
    }

    pub fn subscribers_gained(&self) -> u64 {
        self.0.map_or(0, |m| m.subscribers_gained)
    }

    pub fn subscribers_lost(&self) -> u64 {
        self.0.map_or(0, |m| m.subscribers_lost)
    }

    pub fn net_subscribers(&self) -> i64 {
        self.0.map_or(0, MonthlyAggregate::net_subscribers)
    }
}

/// Width of a row covering `months` month groups
pub fn row_width(months: usize) -> usize {
    1 + GROUP_WIDTH * months
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::model::CountryValue;

    pub fn months(keys: &[&str]) -> Vec<MonthKey> {
        keys.iter().map(|k| MonthKey::parse(k).unwrap()).collect()
    }

    pub fn aggregate(views: u64, gained: u64, lost: u64) -> MonthlyAggregate {
        MonthlyAggregate {
            views,
            watch_time_minutes: views as f64 * 3.0,
            subscribers_gained: gained,
            subscribers_lost: lost,
            ..Default::default()
        }
    }

    pub fn countries(entries: &[(&str, u64)]) -> Vec<CountryValue> {
        entries
            .iter()
            .map(|(code, value)| CountryValue::new(*code, *value))
            .collect()
    }

    pub fn snapshot(subscribers: u64) -> ChannelSnapshot {
        ChannelSnapshot {
            subscriber_count: subscribers,
            video_count: 42,
            advertiser_count: None,
            integrations: None,
        }
    }

    pub fn two_months() -> MonthlyData {
        let mut data = MonthlyData::new();
        data.insert("2024-01".into(), aggregate(1000, 50, 10));
        data.insert("2024-02".into(), aggregate(2000, 20, 5));
        data
    }
}
