use serde_json::Value;

use crate::cell::CellValue;
use crate::error::{GridError, Result};

/// One row of cells; rows in a grid may differ in length
pub type Row = Vec<CellValue>;

/// Immutable 2-D container of cell values.
///
/// A grid is never modified after construction. Every `with_*` method
/// returns a new grid and leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// An empty grid with zero rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid holding `rows` as given
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        Grid {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// New grid with `row` appended
    pub fn with_row(&self, row: impl Into<Row>) -> Self {
        let mut rows = self.rows.clone();
        rows.push(row.into());
        Grid { rows }
    }

    /// New grid with every row of `rows` appended in order
    pub fn with_rows<I, R>(&self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        let mut all = self.rows.clone();
        all.extend(rows.into_iter().map(Into::into));
        Grid { rows: all }
    }

    /// New grid with a row parsed from JSON appended.
    ///
    /// Fails with [`GridError::Construction`] unless `row` is a JSON array.
    pub fn with_json_row(&self, row: &Value) -> Result<Self> {
        Ok(self.with_row(json_row(row, self.rows.len())?))
    }

    /// Build a grid from a JSON array of arrays.
    ///
    /// The whole input is validated before anything is built.
    pub fn from_json_rows(value: &Value) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| GridError::construction(format!("expected array of rows, got {}", kind(value))))?;

        let rows = items
            .iter()
            .enumerate()
            .map(|(idx, row)| json_row(row, idx))
            .collect::<Result<Vec<_>>>()?;

        Ok(Grid { rows })
    }

    /// Build a grid from a list of JSON objects.
    ///
    /// The first row is the header: `columns` when given, otherwise the keys
    /// of the first record in insertion order. Each record then becomes one
    /// row; fields a record lacks are left blank. An empty record list yields
    /// an empty grid.
    pub fn from_records(records: &[Value], columns: Option<&[&str]>) -> Result<Self> {
        let objects = records
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                record.as_object().ok_or_else(|| {
                    GridError::construction(format!("record {} is {}, expected object", idx, kind(record)))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let Some(first) = objects.first() else {
            return Ok(Grid::new());
        };

        let header: Vec<String> = match columns {
            Some(cols) => cols.iter().map(|c| c.to_string()).collect(),
            None => first.keys().cloned().collect(),
        };

        let mut rows = Vec::with_capacity(objects.len() + 1);
        rows.push(header.iter().map(|c| CellValue::text(c.as_str())).collect());
        for object in &objects {
            rows.push(
                header
                    .iter()
                    .map(|col| object.get(col).map(CellValue::from_json).unwrap_or_default())
                    .collect(),
            );
        }

        Ok(Grid { rows })
    }

    /// The raw row sequence
    pub fn to_rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consume the grid, returning its rows
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Rows padded with blanks to a common width
    pub fn padded_rows(&self) -> Vec<Row> {
        let width = self.width();
        self.rows
            .iter()
            .map(|row| {
                let mut padded = row.clone();
                padded.resize(width, CellValue::Empty);
                padded
            })
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell, `None` when outside the row's length
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(col)
    }
}

/// A row of `width` blank cells
pub fn blank_row(width: usize) -> Row {
    vec![CellValue::Empty; width]
}

fn json_row(row: &Value, idx: usize) -> Result<Row> {
    let cells = row.as_array().ok_or_else(|| {
        GridError::construction(format!("row {} is {}, expected array", idx, kind(row)))
    })?;
    Ok(cells.iter().map(CellValue::from_json).collect())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.width(), 0);
        assert!(grid.to_rows().is_empty());
    }

    #[test]
    fn test_with_row_appends_and_leaves_original() {
        let grid = Grid::from_rows([row!["a", 1_i64]]);
        let before = grid.to_rows().to_vec();

        let next = grid.with_row(row!["b"]);

        let mut expected = before.clone();
        expected.push(row!["b"]);
        assert_eq!(next.to_rows(), expected.as_slice());
        assert_eq!(grid.to_rows(), before.as_slice());
    }

    #[test]
    fn test_with_rows_keeps_order() {
        let grid = Grid::new().with_rows([row!["x"], row!["y", "z"]]);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.cell(1, 1), Some(&CellValue::text("z")));
        assert_eq!(grid.cell(0, 1), None);
    }

    #[test]
    fn test_padded_rows() {
        let grid = Grid::from_rows([row!["a"], row!["b", "c", "d"]]);
        let padded = grid.padded_rows();
        assert_eq!(padded[0], row!["a", CellValue::Empty, CellValue::Empty]);
        assert_eq!(padded[1].len(), 3);
    }

    #[test]
    fn test_json_row_rejects_non_array() {
        let grid = Grid::from_rows([row!["a"]]);
        let err = grid.with_json_row(&json!("not a row")).unwrap_err();
        assert!(matches!(err, GridError::Construction(_)));

        let ok = grid.with_json_row(&json!(["b", 2, null])).unwrap();
        assert_eq!(ok.to_rows()[1], row!["b", 2_i64, CellValue::Empty]);
    }

    #[test]
    fn test_from_json_rows_fails_without_partial_build() {
        let err = Grid::from_json_rows(&json!([["a"], 5, ["c"]])).unwrap_err();
        assert_eq!(
            err,
            GridError::Construction("row 1 is a number, expected array".to_string())
        );

        let err = Grid::from_json_rows(&json!({"rows": []})).unwrap_err();
        assert!(matches!(err, GridError::Construction(_)));
    }

    #[test]
    fn test_from_records_uses_first_record_keys() {
        let records = vec![
            json!({"country": "US", "views": 10}),
            json!({"views": 4, "country": "DE", "extra": true}),
            json!({"country": "FR"}),
        ];
        let grid = Grid::from_records(&records, None).unwrap();

        assert_eq!(
            grid.to_rows(),
            &[
                row!["country", "views"],
                row!["US", 10_i64],
                row!["DE", 4_i64],
                row!["FR", CellValue::Empty],
            ]
        );
    }

    #[test]
    fn test_from_records_with_columns() {
        let records = vec![json!({"a": 1, "b": 2})];
        let grid = Grid::from_records(&records, Some(&["b", "c"][..])).unwrap();
        assert_eq!(grid.to_rows(), &[row!["b", "c"], row![2_i64, CellValue::Empty]]);
    }

    #[test]
    fn test_from_records_edge_cases() {
        assert!(Grid::from_records(&[], None).unwrap().is_empty());

        let err = Grid::from_records(&[json!({"a": 1}), json!([1])], None).unwrap_err();
        assert!(matches!(err, GridError::Construction(_)));
    }
}
