use chansheet_core::{CellStyle, CellValue, FormatRange, FormattedGrid, Fragment, Grid, HorizontalAlign};

use super::ReportInput;

const WATCH_TIME_ROW: usize = 1;

/// Six metric rows in fixed order: views, watch time in hours, subscribers
/// gained, subscribers lost, signed net change and the running subscriber
/// count.
///
/// The running count starts from the channel's current subscriber count
/// (zero without a channel) and adds each month's net change in the order
/// the months are given, so `input.months` must be ascending.
pub fn metrics(input: &ReportInput<'_>) -> Fragment {
    let labels = input.labels;

    let views = input.month_row(&labels.views, |m| CellValue::from(input.month(m).views()));
    let watch = input.month_row(&labels.watch_time_hours, |m| {
        CellValue::Number(input.month(m).watch_time_hours())
    });
    let gained = input.month_row(&labels.subscribers_gained, |m| {
        CellValue::from(input.month(m).subscribers_gained())
    });
    let lost = input.month_row(&labels.subscribers_lost, |m| {
        CellValue::from(input.month(m).subscribers_lost())
    });
    let net = input.month_row(&labels.net_change, |m| {
        CellValue::text(signed(input.month(m).net_subscribers()))
    });

    let mut running = input.channel.map_or(0, |c| c.subscriber_count as i64);
    let total = input.month_row(&labels.subscriber_count, |m| {
        running += input.month(m).net_subscribers();
        CellValue::from(running)
    });

    let grid = Grid::from_rows([views, watch, gained, lost, net, total]);
    let (rows, width) = (grid.row_count(), grid.width());

    let mut formats = vec![FormatRange::column(0, rows, CellStyle::bold())];
    if width > 1 {
        let numbers = |pattern: &str| {
            CellStyle::new()
                .with_number_format(pattern)
                .with_horizontal_align(HorizontalAlign::Right)
        };
        formats.push(FormatRange::new(0, 1, WATCH_TIME_ROW - 1, width - 1, numbers("#,##0")));
        formats.push(FormatRange::new(
            WATCH_TIME_ROW,
            1,
            WATCH_TIME_ROW,
            width - 1,
            numbers("#,##0.0"),
        ));
        formats.push(FormatRange::new(WATCH_TIME_ROW + 1, 1, rows - 1, width - 1, numbers("#,##0")));
    }

    Fragment::Formatted(FormattedGrid::new(grid, formats))
}

/// Net change with an explicit sign; zero stays unsigned
fn signed(value: i64) -> String {
    if value == 0 {
        "0".to_string()
    } else {
        format!("{:+}", value)
    }
}
