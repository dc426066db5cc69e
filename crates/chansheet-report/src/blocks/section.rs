use chansheet_core::{CellStyle, Color, FormatRange, FormattedGrid, Fragment, Grid};

use super::ReportInput;

/// One bold title row spanning every month column
pub fn section_header(input: &ReportInput<'_>, title: &str) -> Fragment {
    let grid = Grid::from_rows([input.label_row(title)]);
    let style = CellStyle::bold()
        .with_font_size(11)
        .with_background_color(Color::SECTION_GREY);
    let formats = vec![FormatRange::row(0, grid.width(), style)];

    Fragment::Formatted(FormattedGrid::new(grid, formats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::fixtures::*;
    use crate::labels::ReportLabels;
    use chansheet_core::CellValue;

    #[test]
    fn test_section_header() {
        let data = two_months();
        let months = months(&["2024-01", "2024-02"]);
        let labels = ReportLabels::default();
        let input = ReportInput::new(&data, &months, &labels);

        let block = section_header(&input, "Метрики").into_formatted();
        assert_eq!(block.to_rows().len(), 1);
        assert_eq!(block.to_rows()[0].len(), 7);
        assert_eq!(block.to_rows()[0][0], CellValue::text("Метрики"));
        assert!(block.to_rows()[0][1..].iter().all(CellValue::is_empty));

        let formats = block.formats();
        assert_eq!(formats.len(), 1);
        assert_eq!((formats[0].start_col, formats[0].end_col), (0, 6));
        assert_eq!(formats[0].style.background_color, Some(Color::SECTION_GREY));
        assert_eq!(formats[0].style.bold, Some(true));
    }
}
