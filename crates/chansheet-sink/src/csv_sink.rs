use std::io::Write;

use chansheet_core::{CellValue, Fragment};

use crate::error::{Result, SinkError};

/// Writes fragments as CSV, one record per grid row.
///
/// Rows are padded to the grid width so every record has the same number
/// of fields. Formats are ignored.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(inner),
        }
    }

    /// Write every row of `fragment`, returning the number of records
    pub fn write(&mut self, fragment: &Fragment) -> Result<usize> {
        let rows = fragment.grid().padded_rows();
        for row in &rows {
            self.writer.write_record(row.iter().map(CellValue::as_text))?;
        }
        self.writer.flush()?;
        tracing::debug!(records = rows.len(), "Wrote CSV records");
        Ok(rows.len())
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| SinkError::Io(e.into_error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chansheet_core::{row, CellStyle, FormatRange, FormattedGrid, Grid};

    fn to_string(fragment: &Fragment) -> String {
        let mut sink = CsvSink::new(Vec::new());
        sink.write(fragment).unwrap();
        String::from_utf8(sink.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_rows_are_padded() {
        let grid = Grid::from_rows([row!["Views", 1000_i64, 2.5], row!["Net change"]]);
        let csv = to_string(&Fragment::Plain(grid));
        assert_eq!(csv, "Views,1000,2.5\nNet change,,\n");
    }

    #[test]
    fn test_quotes_and_formats_ignored() {
        let grid = Grid::from_rows([row!["a, b", "say \"hi\""]]);
        let fragment = Fragment::Formatted(FormattedGrid::new(
            grid,
            vec![FormatRange::row(0, 2, CellStyle::bold())],
        ));
        assert_eq!(to_string(&fragment), "\"a, b\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn test_empty_fragment_writes_nothing() {
        let mut sink = CsvSink::new(Vec::new());
        assert_eq!(sink.write(&Fragment::default()).unwrap(), 0);
        assert!(sink.into_inner().unwrap().is_empty());
    }
}
