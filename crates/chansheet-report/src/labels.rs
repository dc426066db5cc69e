use serde::{Deserialize, Serialize};

use crate::model::MonthKey;

/// Every label string the report prints.
///
/// Strings are used verbatim, so callers supply them already localized.
/// The default set is Russian.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLabels {
    /// Text of the first header row's label cell
    pub marker: String,
    /// Abbreviated month names, January first
    pub month_names: [String; 12],

    pub video_count: String,
    pub advertiser_count: String,
    pub integrations: String,
    /// Shown where a value must be filled in by hand
    pub manual_input: String,

    pub metrics_section: String,
    pub views: String,
    pub watch_time_hours: String,
    pub subscribers_gained: String,
    pub subscribers_lost: String,
    pub net_change: String,
    pub subscriber_count: String,
    pub subscriber_total: String,

    pub geography_views: String,
    pub geography_views_rank: String,
    pub geography_views_other: String,
    pub geography_subscribers: String,
    pub geography_subscribers_rank: String,
    pub geography_subscribers_other: String,
    /// Country cell of the remainder row
    pub other_country: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        let months = [
            "янв", "февр", "мар", "апр", "мая", "июн", "июл", "авг", "сент", "окт", "нояб", "дек",
        ];
        ReportLabels {
            marker: "MM".into(),
            month_names: months.map(String::from),
            video_count: "Количество роликов".into(),
            advertiser_count: "Количество рекламодателей".into(),
            integrations: "Интеграции Ghost Writer или Школьных продуктов".into(),
            manual_input: "[Требуется ручной ввод]".into(),
            metrics_section: "Метрики".into(),
            views: "Просмотры".into(),
            watch_time_hours: "Время просмотра (часы)".into(),
            subscribers_gained: "Новые подписчики".into(),
            subscribers_lost: "Потерянные подписчики".into(),
            net_change: "Чистый прирост".into(),
            subscriber_count: "Количество подписчиков".into(),
            subscriber_total: "Всего подписчиков".into(),
            geography_views: "География просмотров".into(),
            geography_views_rank: "География, топ-".into(),
            geography_views_other: "География, остальные".into(),
            geography_subscribers: "География подписчиков".into(),
            geography_subscribers_rank: "топ-".into(),
            geography_subscribers_other: "остальные".into(),
            other_country: "Other".into(),
        }
    }
}

impl ReportLabels {
    /// English label set
    pub fn english() -> Self {
        let months = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        ReportLabels {
            marker: "MM".into(),
            month_names: months.map(String::from),
            video_count: "Videos".into(),
            advertiser_count: "Advertisers".into(),
            integrations: "Integrations".into(),
            manual_input: "[Manual input required]".into(),
            metrics_section: "Metrics".into(),
            views: "Views".into(),
            watch_time_hours: "Watch time (hours)".into(),
            subscribers_gained: "Subscribers gained".into(),
            subscribers_lost: "Subscribers lost".into(),
            net_change: "Net change".into(),
            subscriber_count: "Subscribers".into(),
            subscriber_total: "Total subscribers".into(),
            geography_views: "Views by country".into(),
            geography_views_rank: "Country, top-".into(),
            geography_views_other: "Country, other".into(),
            geography_subscribers: "Subscribers by country".into(),
            geography_subscribers_rank: "top-".into(),
            geography_subscribers_other: "other".into(),
            other_country: "Other".into(),
        }
    }

    /// Header text for a month, e.g. `"янв. 2025"`
    pub fn month_header(&self, month: &MonthKey) -> String {
        let name = (month.month() as usize)
            .checked_sub(1)
            .and_then(|idx| self.month_names.get(idx))
            .cloned()
            .unwrap_or_else(|| month.month().to_string());
        format!("{}. {}", name, month.year())
    }
}
