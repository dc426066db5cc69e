//! Fixed-order assembly of the block factories into one report grid.

use chansheet_core::{merge, FormattedGrid, Fragment};

use crate::blocks::{self, ReportInput};
use crate::error::Result;
use crate::labels::ReportLabels;
use crate::model::{sorted_months, ChannelSnapshot, MonthlyData};

/// Compose the full report for `input.months`.
///
/// Blocks are stacked in this order:
///
/// 1. header
/// 2. channel
/// 3. one blank row, then the metrics section title
/// 4. metrics
/// 5. subscriber total, when it has rows
/// 6. one blank row, then geography, when it has rows
///
/// No months yields an empty grid.
pub fn compose(input: &ReportInput<'_>) -> FormattedGrid {
    if input.months.is_empty() {
        tracing::debug!("no months to render, report is empty");
        return FormattedGrid::default();
    }

    let mut report = blocks::header(input);
    report = stack(report, blocks::channel(input), 0);
    report = stack(
        report,
        blocks::section_header(input, &input.labels.metrics_section),
        1,
    );
    report = stack(report, blocks::metrics(input), 0);

    let total = blocks::subscriber_total(input);
    if !total.is_empty() {
        report = stack(report, total, 0);
    }

    let geography = blocks::geography(input);
    if !geography.is_empty() {
        report = stack(report, geography, 1);
    }

    let report = report.into_formatted();
    tracing::debug!(
        months = input.months.len(),
        rows = report.to_rows().len(),
        formats = report.formats().len(),
        "composed report"
    );
    report
}

/// Compose the report over every month present in `data`.
///
/// Fails when a key of `data` is not a valid `YYYY-MM` month.
pub fn compose_all(
    data: &MonthlyData,
    channel: Option<&ChannelSnapshot>,
    labels: &ReportLabels,
) -> Result<FormattedGrid> {
    let months = sorted_months(data)?;
    let mut input = ReportInput::new(data, &months, labels);
    input.channel = channel;
    Ok(compose(&input))
}

fn stack(top: Fragment, bottom: Fragment, gap_rows: usize) -> Fragment {
    merge::vertical(&top, &bottom, gap_rows)
}
