use crate::format::CellStyle;
use crate::grid::{Grid, Row};
use crate::range::{CellCoord, FormatRange};

/// A grid paired with an ordered list of format directives.
///
/// Appending rows keeps the format list exactly as it was: new rows are not
/// covered by any existing range. Add a fresh [`FormatRange`] after
/// appending to style them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormattedGrid {
    grid: Grid,
    formats: Vec<FormatRange>,
}

impl FormattedGrid {
    pub fn new(grid: Grid, formats: Vec<FormatRange>) -> Self {
        FormattedGrid { grid, formats }
    }

    pub fn with_row(&self, row: impl Into<Row>) -> Self {
        FormattedGrid::new(self.grid.with_row(row), self.formats.clone())
    }

    pub fn with_rows<I, R>(&self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        FormattedGrid::new(self.grid.with_rows(rows), self.formats.clone())
    }

    /// New formatted grid with `range` appended to the format list
    pub fn with_format(&self, range: FormatRange) -> Self {
        let mut formats = self.formats.clone();
        formats.push(range);
        FormattedGrid::new(self.grid.clone(), formats)
    }

    pub fn to_rows(&self) -> &[Row] {
        self.grid.to_rows()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn formats(&self) -> &[FormatRange] {
        &self.formats
    }

    pub fn into_parts(self) -> (Grid, Vec<FormatRange>) {
        (self.grid, self.formats)
    }

    /// Formats reaching past the current grid bounds
    pub fn out_of_bounds_formats(&self) -> Vec<&FormatRange> {
        let (rows, cols) = (self.grid.row_count(), self.grid.width());
        self.formats
            .iter()
            .filter(|f| !f.fits_within(rows, cols))
            .collect()
    }

    /// Effective style at a cell: every covering range overlaid in list order
    pub fn style_at(&self, row: usize, col: usize) -> CellStyle {
        let coord = CellCoord::new(row, col);
        let mut style = CellStyle::default();
        for range in self.formats.iter().filter(|f| f.contains(coord)) {
            style.overlay(&range.style);
        }
        style
    }
}

/// A report piece: either a plain grid or a grid carrying formats
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Plain(Grid),
    Formatted(FormattedGrid),
}

impl Default for Fragment {
    fn default() -> Self {
        Fragment::Plain(Grid::new())
    }
}

impl Fragment {
    pub fn grid(&self) -> &Grid {
        match self {
            Fragment::Plain(grid) => grid,
            Fragment::Formatted(formatted) => formatted.grid(),
        }
    }

    pub fn to_rows(&self) -> &[Row] {
        self.grid().to_rows()
    }

    pub fn row_count(&self) -> usize {
        self.grid().row_count()
    }

    pub fn width(&self) -> usize {
        self.grid().width()
    }

    pub fn is_empty(&self) -> bool {
        self.grid().is_empty()
    }

    /// Format list; `None` for a plain grid
    pub fn formats(&self) -> Option<&[FormatRange]> {
        match self {
            Fragment::Plain(_) => None,
            Fragment::Formatted(formatted) => Some(formatted.formats()),
        }
    }

    pub fn is_formatted(&self) -> bool {
        matches!(self, Fragment::Formatted(_))
    }

    /// Append a row, keeping the variant and any formats unchanged
    pub fn with_row(&self, row: impl Into<Row>) -> Self {
        match self {
            Fragment::Plain(grid) => Fragment::Plain(grid.with_row(row)),
            Fragment::Formatted(formatted) => Fragment::Formatted(formatted.with_row(row)),
        }
    }

    pub fn with_rows<I, R>(&self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        match self {
            Fragment::Plain(grid) => Fragment::Plain(grid.with_rows(rows)),
            Fragment::Formatted(formatted) => Fragment::Formatted(formatted.with_rows(rows)),
        }
    }

    /// View as a formatted grid; a plain grid gets an empty format list
    pub fn into_formatted(self) -> FormattedGrid {
        match self {
            Fragment::Plain(grid) => FormattedGrid::new(grid, Vec::new()),
            Fragment::Formatted(formatted) => formatted,
        }
    }
}

impl From<Grid> for Fragment {
    fn from(grid: Grid) -> Self {
        Fragment::Plain(grid)
    }
}

impl From<FormattedGrid> for Fragment {
    fn from(formatted: FormattedGrid) -> Self {
        Fragment::Formatted(formatted)
    }
}
