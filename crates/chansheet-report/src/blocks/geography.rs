use chansheet_core::{blank_row, merge, CellStyle, CellValue, FormatRange, FormattedGrid, Fragment, Grid};

use super::{ReportInput, GROUP_WIDTH};
use crate::model::{CountryValue, MonthKey, MonthlyAggregate};

/// Rows reserved for the views-by-country section
pub const VIEW_RANKS: usize = 9;
/// Rows reserved for the subscribers-by-country section
pub const SUBSCRIBER_RANKS: usize = 5;

struct Section<'a> {
    title: &'a str,
    rank_label: &'a str,
    other_label: &'a str,
    cap: usize,
    countries: fn(&MonthlyAggregate) -> Option<&[CountryValue]>,
    total: fn(&MonthlyAggregate) -> u64,
    /// Emit the other row only below at least one rank row
    other_needs_ranks: bool,
}

/// Views and subscribers by country, stacked with one blank row between.
///
/// Each section has a bold title row, then one row per rank up to its cap
/// with `(country, value, share of month total)` groups. The ranks shown
/// are as many as the longest month list, capped. When some month's total
/// exceeds the sum of its shown countries, an "other" row with the
/// remainder follows the last rank; months without a positive remainder
/// stay blank in it. The subscribers section only has that row below at
/// least one rank, while views report their remainder even with no ranks.
/// Fully blank rows then pad the section to its cap.
///
/// Country lists are taken as given: sorted descending with each country
/// listed once. A country repeated in a list is counted once per entry.
///
/// The block is empty when no month carries any country list.
pub fn geography(input: &ReportInput<'_>) -> Fragment {
    let has_geography = input
        .months
        .iter()
        .any(|m| input.month(m).get().is_some_and(MonthlyAggregate::has_geography));
    if !has_geography {
        return Fragment::Plain(Grid::new());
    }

    let labels = input.labels;
    let views = section(
        input,
        &Section {
            title: &labels.geography_views,
            rank_label: &labels.geography_views_rank,
            other_label: &labels.geography_views_other,
            cap: VIEW_RANKS,
            countries: |m| m.geographic_views_top.as_deref(),
            total: |m| m.views,
            other_needs_ranks: false,
        },
    );
    let subscribers = section(
        input,
        &Section {
            title: &labels.geography_subscribers,
            rank_label: &labels.geography_subscribers_rank,
            other_label: &labels.geography_subscribers_other,
            cap: SUBSCRIBER_RANKS,
            countries: |m| m.geographic_subscribers_top.as_deref(),
            total: |m| m.subscribers_gained,
            other_needs_ranks: true,
        },
    );

    merge::vertical(&views, &subscribers, 1)
}

fn section(input: &ReportInput<'_>, part: &Section<'_>) -> Fragment {
    let width = input.width();
    let countries = |month: &MonthKey| {
        input
            .month(month)
            .get()
            .and_then(part.countries)
            .unwrap_or_default()
    };
    let total = |month: &MonthKey| input.month(month).get().map_or(0, part.total);

    let shown = input
        .months
        .iter()
        .map(|m| countries(m).len())
        .max()
        .unwrap_or(0)
        .min(part.cap);

    let mut rows = vec![input.label_row(part.title)];

    for rank in 0..shown {
        let label = format!("{}{}", part.rank_label, rank + 1);
        rows.push(input.group_row(&label, |month| match countries(month).get(rank) {
            Some(entry) => [
                CellValue::text(entry.country_code.as_str()),
                amount(entry.value),
                share(entry.value, total(month)),
            ],
            None => blank_group(),
        }));
    }

    let remainders: Vec<Option<u64>> = input
        .months
        .iter()
        .map(|month| {
            let listed: u64 = countries(month).iter().take(part.cap).map(|c| c.value).sum();
            total(month).checked_sub(listed).filter(|rest| *rest > 0)
        })
        .collect();

    let mut used = shown;
    let ranked = shown > 0 || !part.other_needs_ranks;
    if ranked && remainders.iter().any(Option::is_some) {
        let mut remainder = remainders.iter();
        rows.push(input.group_row(part.other_label, |month| {
            match remainder.next().copied().flatten() {
                Some(rest) => [
                    CellValue::text(input.labels.other_country.as_str()),
                    CellValue::from(rest),
                    share(rest, total(month)),
                ],
                None => blank_group(),
            }
        }));
        used += 1;
    }
    for _ in used..part.cap {
        rows.push(blank_row(width));
    }

    let formats = vec![FormatRange::row(0, width, CellStyle::bold())];
    Fragment::Formatted(FormattedGrid::new(Grid::from_rows(rows), formats))
}

fn blank_group() -> [CellValue; GROUP_WIDTH] {
    [CellValue::Empty, CellValue::Empty, CellValue::Empty]
}

fn amount(value: u64) -> CellValue {
    if value > 0 {
        CellValue::from(value)
    } else {
        CellValue::Empty
    }
}

/// Share of `total` as a one-decimal percentage; blank when it rounds to zero
fn share(value: u64, total: u64) -> CellValue {
    if total == 0 {
        return CellValue::Empty;
    }
    let percent = (value as f64 / total as f64 * 1000.0).round() / 10.0;
    if percent == 0.0 {
        CellValue::Empty
    } else {
        CellValue::text(format!("{:.1}%", percent))
    }
}
