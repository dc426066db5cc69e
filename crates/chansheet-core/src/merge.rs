//! Composition of two fragments into one.
//!
//! Three strategies are provided: stacking ([`vertical`]), placing side by
//! side ([`horizontal`]) and weaving column groups of equally tall grids
//! ([`interleave`]). All of them are pure and leave their inputs untouched.

use crate::cell::CellValue;
use crate::error::{GridError, Result};
use crate::fragment::{FormattedGrid, Fragment};
use crate::grid::{blank_row, Grid, Row};
use crate::range::FormatRange;

/// Stack `bottom` below `top` with `gap_rows` blank rows in between.
///
/// Gap rows are as wide as the wider input. The result is plain when
/// neither input carries formats; otherwise it keeps `top`'s formats as
/// they are, followed by `bottom`'s formats moved down by
/// `top.row_count() + gap_rows`.
pub fn vertical(top: &Fragment, bottom: &Fragment, gap_rows: usize) -> Fragment {
    let width = top.width().max(bottom.width());

    let mut rows: Vec<Row> = Vec::with_capacity(top.row_count() + gap_rows + bottom.row_count());
    rows.extend(top.to_rows().iter().cloned());
    rows.extend((0..gap_rows).map(|_| blank_row(width)));
    rows.extend(bottom.to_rows().iter().cloned());
    let grid = Grid::from_rows(rows);

    if !top.is_formatted() && !bottom.is_formatted() {
        return Fragment::Plain(grid);
    }

    let offset = top.row_count() + gap_rows;
    let formats = top
        .formats()
        .unwrap_or_default()
        .iter()
        .cloned()
        .chain(
            bottom
                .formats()
                .unwrap_or_default()
                .iter()
                .map(|f| f.shifted_rows(offset)),
        )
        .collect();

    Fragment::Formatted(FormattedGrid::new(grid, formats))
}

/// Place `right` beside `left` with `gap_cols` blank columns in between.
///
/// Each side is padded to its own widest row, and the shorter side gets
/// blank rows so both span `max(rows)`. When either input carries formats,
/// `right`'s formats move right by `left.width() + gap_cols`.
pub fn horizontal(left: &Fragment, right: &Fragment, gap_cols: usize) -> Fragment {
    let left_width = left.width();
    let right_width = right.width();
    let height = left.row_count().max(right.row_count());

    let rows: Vec<Row> = (0..height)
        .map(|idx| {
            let mut row = Vec::with_capacity(left_width + gap_cols + right_width);
            append_padded(&mut row, left.to_rows().get(idx), left_width);
            row.extend(blank_row(gap_cols));
            append_padded(&mut row, right.to_rows().get(idx), right_width);
            row
        })
        .collect();
    let grid = Grid::from_rows(rows);

    if !left.is_formatted() && !right.is_formatted() {
        return Fragment::Plain(grid);
    }

    let offset = left_width + gap_cols;
    let formats: Vec<FormatRange> = left
        .formats()
        .unwrap_or_default()
        .iter()
        .cloned()
        .chain(
            right
                .formats()
                .unwrap_or_default()
                .iter()
                .map(|f| f.shifted_cols(offset)),
        )
        .collect();

    Fragment::Formatted(FormattedGrid::new(grid, formats))
}

/// Weave the columns of two equally tall grids.
///
/// For every row pair, takes `left_cols` cells from the left row and then
/// `right_cols` cells from the right row, repeating until both rows are
/// used up; a source that runs short contributes blanks. Formats are not
/// carried over, so the result is always a plain grid.
///
/// Fails with [`GridError::SizeMismatch`] when the row counts differ.
pub fn interleave(
    left: &Fragment,
    right: &Fragment,
    left_cols: usize,
    right_cols: usize,
) -> Result<Fragment> {
    if left.row_count() != right.row_count() {
        return Err(GridError::SizeMismatch {
            left: left.row_count(),
            right: right.row_count(),
        });
    }
    if left_cols == 0 || right_cols == 0 {
        return Err(GridError::construction(format!(
            "interleave group sizes must be positive, got {}/{}",
            left_cols, right_cols
        )));
    }

    let rows: Vec<Row> = left
        .to_rows()
        .iter()
        .zip(right.to_rows())
        .map(|(l, r)| interleave_row(l, r, left_cols, right_cols))
        .collect();

    Ok(Fragment::Plain(Grid::from_rows(rows)))
}

fn interleave_row(left: &[CellValue], right: &[CellValue], left_cols: usize, right_cols: usize) -> Row {
    let mut merged = Vec::new();
    let mut l = left.iter();
    let mut r = right.iter();
    let mut l_left = left.len();
    let mut r_left = right.len();

    while l_left > 0 || r_left > 0 {
        for _ in 0..left_cols {
            merged.push(l.next().cloned().unwrap_or_default());
        }
        for _ in 0..right_cols {
            merged.push(r.next().cloned().unwrap_or_default());
        }
        l_left = l_left.saturating_sub(left_cols);
        r_left = r_left.saturating_sub(right_cols);
    }

    merged
}

fn append_padded(out: &mut Row, row: Option<&Row>, width: usize) {
    let cells = row.map(Vec::as_slice).unwrap_or_default();
    out.extend(cells.iter().cloned());
    out.extend(blank_row(width.saturating_sub(cells.len())));
}
