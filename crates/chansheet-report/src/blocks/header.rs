use chansheet_core::{
    CellStyle, CellValue, Color, FormatRange, FormattedGrid, Fragment, Grid, HorizontalAlign,
};

use super::ReportInput;

/// Two header rows: the marker row and the month label row.
///
/// Both rows are bold, and so is column 0 across the block.
pub fn header(input: &ReportInput<'_>) -> Fragment {
    let labels = input.labels;
    let marker = input.label_row(&labels.marker);
    let months = input.group_row("", |month| {
        [
            CellValue::text(labels.month_header(month)),
            CellValue::Empty,
            CellValue::Empty,
        ]
    });

    let grid = Grid::from_rows([marker, months]);
    let width = grid.width();
    let formats = vec![
        FormatRange::row(0, width, CellStyle::bold().with_font_size(11)),
        FormatRange::row(
            1,
            width,
            CellStyle::bold()
                .with_font_size(10)
                .with_horizontal_align(HorizontalAlign::Center)
                .with_background_color(Color::HEADER_BLUE),
        ),
        FormatRange::column(0, grid.row_count(), CellStyle::bold()),
    ];

    Fragment::Formatted(FormattedGrid::new(grid, formats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::fixtures::*;
    use crate::labels::ReportLabels;
    use chansheet_core::row;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_rows() {
        let data = two_months();
        let months = months(&["2024-01", "2024-02"]);
        let labels = ReportLabels::english();
        let input = ReportInput::new(&data, &months, &labels);

        let block = header(&input);
        let e = CellValue::Empty;
        assert_eq!(
            block.to_rows(),
            &[
                row!["MM", e.clone(), e.clone(), e.clone(), e.clone(), e.clone(), e.clone()],
                row!["", "Jan. 2024", e.clone(), e.clone(), "Feb. 2024", e.clone(), e],
            ]
        );
    }

    #[test]
    fn test_header_is_bold() {
        let data = two_months();
        let months = months(&["2024-01"]);
        let labels = ReportLabels::default();
        let input = ReportInput::new(&data, &months, &labels);

        let block = header(&input).into_formatted();
        assert_eq!(block.formats().len(), 3);
        assert!(block.out_of_bounds_formats().is_empty());
        for row in 0..2 {
            for col in 0..4 {
                assert_eq!(block.style_at(row, col).bold, Some(true), "({row}, {col})");
            }
        }
        assert_eq!(block.style_at(1, 1).background_color, Some(Color::HEADER_BLUE));
        assert_eq!(block.style_at(1, 1).horizontal_align, Some(HorizontalAlign::Center));
        assert_eq!(block.to_rows()[1][1], CellValue::text("янв. 2024"));
    }
}
