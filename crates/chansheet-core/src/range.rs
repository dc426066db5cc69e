use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::CellStyle;

/// Cell coordinate (0-indexed)
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        CellCoord { row, col }
    }

    /// Parse a cell reference such as `"B3"`; letters are case-insensitive
    /// and rows start at 1
    pub fn from_a1(notation: &str) -> Option<Self> {
        let notation = notation.trim();
        let digits_at = notation.find(|c: char| c.is_ascii_digit())?;
        let (letters, digits) = notation.split_at(digits_at);
        if letters.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let col = col_from_label(letters)?;
        let row = digits.parse::<usize>().ok()?.checked_sub(1)?;
        Some(CellCoord::new(row, col))
    }

    /// Convert to A1 notation (e.g., (0, 0) -> "A1")
    pub fn to_a1(&self) -> String {
        format!("{}{}", col_to_label(self.col), self.row + 1)
    }
}

impl Default for CellCoord {
    fn default() -> Self {
        CellCoord::new(0, 0)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

/// Column label of a 0-based index: 0 is `A`, 25 is `Z`, 26 is `AA`
pub fn col_to_label(col: usize) -> String {
    let mut letters = Vec::new();
    let mut rest = col + 1;
    while rest > 0 {
        letters.push(b'A' + ((rest - 1) % 26) as u8);
        rest = (rest - 1) / 26;
    }
    letters.iter().rev().map(|&b| char::from(b)).collect()
}

/// 0-based index of a column label; `None` for empty or non-letter input
pub fn col_from_label(label: &str) -> Option<usize> {
    label
        .chars()
        .try_fold(0usize, |acc, c| {
            if !c.is_ascii_alphabetic() {
                return None;
            }
            let digit = usize::from(c.to_ascii_uppercase() as u8 - b'A') + 1;
            acc.checked_mul(26)?.checked_add(digit)
        })?
        .checked_sub(1)
}

/// A rectangular format directive.
///
/// Bounds are inclusive and 0-based, relative to the grid the range is
/// attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatRange {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
    pub style: CellStyle,
}

impl FormatRange {
    /// Create a range; corners are normalized so start is top-left
    pub fn new(
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
        style: CellStyle,
    ) -> Self {
        FormatRange {
            start_row: start_row.min(end_row),
            start_col: start_col.min(end_col),
            end_row: start_row.max(end_row),
            end_col: start_col.max(end_col),
            style,
        }
    }

    /// Whole row `row`, columns `0..width`
    pub fn row(row: usize, width: usize, style: CellStyle) -> Self {
        FormatRange::new(row, 0, row, width.saturating_sub(1), style)
    }

    /// Whole column `col`, rows `0..height`
    pub fn column(col: usize, height: usize, style: CellStyle) -> Self {
        FormatRange::new(0, col, height.saturating_sub(1), col, style)
    }

    /// Same range moved down by `rows`
    pub fn shifted_rows(&self, rows: usize) -> Self {
        FormatRange {
            start_row: self.start_row + rows,
            end_row: self.end_row + rows,
            ..self.clone()
        }
    }

    /// Same range moved right by `cols`
    pub fn shifted_cols(&self, cols: usize) -> Self {
        FormatRange {
            start_col: self.start_col + cols,
            end_col: self.end_col + cols,
            ..self.clone()
        }
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.row >= self.start_row
            && coord.row <= self.end_row
            && coord.col >= self.start_col
            && coord.col <= self.end_col
    }

    /// Rows covered; zero when the corners are inverted
    pub fn row_count(&self) -> usize {
        (self.end_row + 1).saturating_sub(self.start_row)
    }

    /// Columns covered; zero when the corners are inverted
    pub fn col_count(&self) -> usize {
        (self.end_col + 1).saturating_sub(self.start_col)
    }

    /// Check the range is well-formed and lies inside a grid of `rows` x `cols`
    pub fn fits_within(&self, rows: usize, cols: usize) -> bool {
        self.start_row <= self.end_row
            && self.start_col <= self.end_col
            && self.end_row < rows
            && self.end_col < cols
    }

    /// A1 notation of the covered cells
    pub fn to_a1(&self) -> String {
        let start = CellCoord::new(self.start_row, self.start_col);
        let end = CellCoord::new(self.end_row, self.end_col);
        if start == end {
            start.to_a1()
        } else {
            format!("{}:{}", start.to_a1(), end.to_a1())
        }
    }
}

impl fmt::Display for FormatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}
