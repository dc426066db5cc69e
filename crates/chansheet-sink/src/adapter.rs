use chansheet_core::{FormatRange, FormattedGrid, Fragment, Grid};

use crate::config::SinkConfig;
use crate::error::{FormatWriteError, Result, SinkError};
use crate::request::{repeat_cell, value_rows};
use crate::transport::SheetTransport;

/// Result of a completed export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub rows_written: usize,
    pub formats_applied: usize,
    /// Format ranges the destination did not apply
    pub format_errors: Vec<FormatWriteError>,
    /// Link to the destination document
    pub url: String,
}

impl ExportOutcome {
    /// Whether every format range was applied
    pub fn is_complete(&self) -> bool {
        self.format_errors.is_empty()
    }
}

/// Writes composed grids to one destination tab
pub struct SheetSink<T> {
    config: SinkConfig,
    transport: T,
}

impl<T: SheetTransport> SheetSink<T> {
    pub fn new(config: SinkConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &SinkConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Export a plain or formatted fragment
    pub async fn export_fragment(&self, fragment: &Fragment) -> Result<ExportOutcome> {
        match fragment {
            Fragment::Plain(grid) => self.write(grid, &[]).await,
            Fragment::Formatted(grid) => self.export(grid).await,
        }
    }

    /// Export `report` in two round trips: one bulk value write at the
    /// configured anchor, then one batch carrying every format range.
    ///
    /// Values are sent as a rectangle padded to the grid width, so a
    /// re-export overwrites the whole region. An empty grid makes no calls
    /// and applies none of its formats.
    ///
    /// A failed value write aborts the export before any formatting is
    /// sent. Format ranges the destination refuses, or a batch that fails
    /// as a whole, are reported in [`ExportOutcome::format_errors`] and do
    /// not fail the export.
    pub async fn export(&self, report: &FormattedGrid) -> Result<ExportOutcome> {
        for range in report.out_of_bounds_formats() {
            tracing::warn!(%range, "format range exceeds grid bounds");
        }
        self.write(report.grid(), report.formats()).await
    }

    async fn write(&self, grid: &Grid, formats: &[FormatRange]) -> Result<ExportOutcome> {
        if grid.is_empty() {
            tracing::debug!(
                skipped_formats = formats.len(),
                "Grid is empty, nothing to export"
            );
            return Ok(ExportOutcome {
                rows_written: 0,
                formats_applied: 0,
                format_errors: Vec::new(),
                url: self.config.url(),
            });
        }

        let rows = grid.padded_rows();
        let range = self.config.value_range();
        if let Err(e) = self
            .transport
            .write_values(&self.config.spreadsheet_id, &range, value_rows(&rows))
            .await
        {
            tracing::error!("Value write to {} failed: {}", range, e);
            return Err(SinkError::ValueWrite(e));
        }

        let placed: Vec<FormatRange> = formats.iter().map(|f| self.place(f)).collect();
        let format_errors = if placed.is_empty() {
            Vec::new()
        } else {
            self.apply_formats(&placed).await
        };
        let formats_applied = placed.len() - format_errors.len();

        let outcome = ExportOutcome {
            rows_written: rows.len(),
            formats_applied,
            format_errors,
            url: self.config.url(),
        };
        tracing::info!(
            rows = outcome.rows_written,
            formats = outcome.formats_applied,
            format_errors = outcome.format_errors.len(),
            "Exported report to {}",
            outcome.url
        );
        Ok(outcome)
    }

    /// Move a grid-relative range to the anchor
    fn place(&self, range: &FormatRange) -> FormatRange {
        let anchor = self.config.anchor;
        range.shifted_rows(anchor.row).shifted_cols(anchor.col)
    }

    async fn apply_formats(&self, placed: &[FormatRange]) -> Vec<FormatWriteError> {
        let requests = placed
            .iter()
            .map(|f| repeat_cell(f, self.config.sheet_id))
            .collect();

        let failed: Vec<(usize, String)> = match self
            .transport
            .batch_update(&self.config.spreadsheet_id, requests)
            .await
        {
            Ok(reply) => {
                let mut rejected = reply.rejected;
                rejected.retain(|(idx, _)| *idx < placed.len());
                rejected.sort_by_key(|(idx, _)| *idx);
                rejected.dedup_by_key(|(idx, _)| *idx);
                rejected
            }
            Err(e) => {
                let reason = e.to_string();
                (0..placed.len()).map(|idx| (idx, reason.clone())).collect()
            }
        };

        failed
            .into_iter()
            .map(|(index, reason)| {
                let range = placed[index].to_a1();
                tracing::warn!("Format range #{} ({}) not applied: {}", index, range, reason);
                FormatWriteError {
                    index,
                    range,
                    reason,
                }
            })
            .collect()
    }
}
