use chansheet_core::{CellValue, Fragment, Grid};

use super::ReportInput;

/// Channel info rows: video count, advertiser count and integrations.
///
/// Values repeat in every month group. A month's own video count wins over
/// the channel total when the aggregate carries one. Unknown advertiser and
/// integration values print the manual-input placeholder. Without a channel
/// the block is empty.
pub fn channel(input: &ReportInput<'_>) -> Fragment {
    let Some(channel) = input.channel else {
        return Fragment::Plain(Grid::new());
    };
    let labels = input.labels;
    let placeholder = || CellValue::text(labels.manual_input.as_str());

    let videos = input.month_row(&labels.video_count, |month| {
        let monthly = input.month(month).get().and_then(|m| m.video_count);
        CellValue::from(monthly.unwrap_or(channel.video_count))
    });
    let advertisers = input.month_row(&labels.advertiser_count, |_| {
        channel
            .advertiser_count
            .map(CellValue::from)
            .unwrap_or_else(placeholder)
    });
    let integrations = input.month_row(&labels.integrations, |_| {
        channel
            .integrations
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(CellValue::text)
            .unwrap_or_else(placeholder)
    });

    Fragment::Plain(Grid::from_rows([videos, advertisers, integrations]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::fixtures::*;
    use crate::labels::ReportLabels;
    use crate::model::ChannelSnapshot;

    #[test]
    fn test_channel_rows_with_placeholders() {
        let data = two_months();
        let months = months(&["2024-01", "2024-02"]);
        let labels = ReportLabels::english();
        let snapshot = snapshot(1000);
        let input = ReportInput::new(&data, &months, &labels).with_channel(&snapshot);

        let block = channel(&input);
        let rows = block.to_rows();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 7));

        assert_eq!(rows[0][0], CellValue::text("Videos"));
        assert_eq!(rows[0][1], CellValue::Number(42.0));
        assert_eq!(rows[0][4], CellValue::Number(42.0));
        assert_eq!(rows[1][1], CellValue::text("[Manual input required]"));
        assert_eq!(rows[2][4], CellValue::text("[Manual input required]"));
        assert!(rows[1][2].is_empty());
    }

    #[test]
    fn test_channel_known_values_and_monthly_video_count() {
        let mut data = two_months();
        if let Some(jan) = data.get_mut("2024-01") {
            jan.video_count = Some(3);
        }
        let months = months(&["2024-01", "2024-02"]);
        let labels = ReportLabels::english();
        let snapshot = ChannelSnapshot {
            advertiser_count: Some(4),
            integrations: Some("GW".into()),
            ..snapshot(10)
        };
        let input = ReportInput::new(&data, &months, &labels).with_channel(&snapshot);

        let rows = channel(&input).to_rows().to_vec();
        assert_eq!(rows[0][1], CellValue::Number(3.0));
        assert_eq!(rows[0][4], CellValue::Number(42.0));
        assert_eq!(rows[1][1], CellValue::Number(4.0));
        assert_eq!(rows[2][4], CellValue::text("GW"));
    }

    #[test]
    fn test_channel_missing_is_empty() {
        let data = two_months();
        let months = months(&["2024-01"]);
        let labels = ReportLabels::default();
        let input = ReportInput::new(&data, &months, &labels);

        assert!(channel(&input).is_empty());
    }
}
