use chansheet_core::{CellValue, Fragment, Grid};

use super::ReportInput;

/// One row repeating the channel's current subscriber count in every month.
///
/// This is the present-day total, not a per-month historical figure; the
/// running count lives in the metrics block. Empty without a channel.
pub fn subscriber_total(input: &ReportInput<'_>) -> Fragment {
    let Some(channel) = input.channel else {
        return Fragment::Plain(Grid::new());
    };

    let row = input.month_row(&input.labels.subscriber_total, |_| {
        CellValue::from(channel.subscriber_count)
    });
    Fragment::Plain(Grid::from_rows([row]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::fixtures::*;
    use crate::labels::ReportLabels;

    #[test]
    fn test_subscriber_total_repeats_current_count() {
        let data = two_months();
        let months = months(&["2024-01", "2024-02"]);
        let labels = ReportLabels::default();
        let snapshot = snapshot(1234);
        let input = ReportInput::new(&data, &months, &labels).with_channel(&snapshot);

        let block = subscriber_total(&input);
        assert!(!block.is_formatted());
        let row = &block.to_rows()[0];
        assert_eq!(row[0], CellValue::text("Всего подписчиков"));
        assert_eq!(row[1], CellValue::Number(1234.0));
        assert_eq!(row[4], CellValue::Number(1234.0));
        assert_eq!(row.len(), 7);
    }

    #[test]
    fn test_subscriber_total_without_channel() {
        let data = two_months();
        let months = months(&["2024-01"]);
        let labels = ReportLabels::default();
        let input = ReportInput::new(&data, &months, &labels);

        assert_eq!(subscriber_total(&input).row_count(), 0);
    }
}
