//! Destinations for composed report grids.
//!
//! [`SheetSink`] writes a grid to a spreadsheet tab through a
//! [`SheetTransport`] in two batched round trips, values first and formats
//! second. [`CsvSink`] writes the values of any fragment as CSV.

pub mod adapter;
pub mod config;
pub mod csv_sink;
pub mod error;
pub mod request;
pub mod transport;

pub use adapter::{ExportOutcome, SheetSink};
pub use config::SinkConfig;
pub use csv_sink::CsvSink;
pub use error::{FormatWriteError, Result, SinkError, TransportError};
pub use transport::{BatchReply, RecordedCall, RecordingTransport, SheetTransport};

#[cfg(test)]
mod tests {
    use super::*;
    use chansheet_core::Fragment;
    use chansheet_report::{compose_all, ChannelSnapshot, MonthlyData, ReportLabels};
    use serde_json::json;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn monthly_data() -> MonthlyData {
        serde_json::from_value(json!({
            "2024-01": {
                "views": 1000,
                "watch_time_minutes": 3000.0,
                "subscribers_gained": 50,
                "subscribers_lost": 10,
                "geographic_views_top": [
                    {"country_code": "US", "value": 400},
                    {"country_code": "DE", "value": 200},
                    {"country_code": "FR", "value": 100}
                ]
            },
            "2024-02": {
                "views": 2000,
                "watch_time_minutes": 6000.0,
                "subscribers_gained": 20,
                "subscribers_lost": 5
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_report_export_end_to_end() {
        init_tracing();
        let channel = ChannelSnapshot {
            subscriber_count: 1000,
            video_count: 12,
            ..Default::default()
        };
        let report = compose_all(&monthly_data(), Some(&channel), &ReportLabels::english()).unwrap();

        let sink = SheetSink::new(
            SinkConfig::new("doc-1", "Monthly").with_sheet_id(3),
            RecordingTransport::new(),
        );
        let outcome = sink.export(&report).await.unwrap();
        assert_eq!(outcome.rows_written, report.to_rows().len());
        assert_eq!(outcome.formats_applied, report.formats().len());
        assert!(outcome.is_complete());

        let calls = sink.transport().calls().await;
        assert_eq!(calls.len(), 2);
        let RecordedCall::WriteValues { values, range, .. } = &calls[0] else {
            panic!("expected the value write first");
        };
        assert_eq!(range, "'Monthly'!A1");
        assert!(values.iter().all(|row| row.len() == 7));
        let running_total = values
            .iter()
            .find(|row| row[0] == json!("Subscribers"))
            .unwrap();
        assert_eq!(running_total[1], json!(1040));
        assert_eq!(running_total[4], json!(1055));
        let other = values
            .iter()
            .find(|row| row[0] == json!("Country, other"))
            .unwrap();
        assert_eq!(other[2], json!(300));
        assert_eq!(other[3], json!("30.0%"));

        let RecordedCall::BatchUpdate { requests, .. } = &calls[1] else {
            panic!("expected the format batch second");
        };
        assert_eq!(requests.len(), report.formats().len());
        assert!(requests
            .iter()
            .all(|r| r["repeatCell"]["range"]["sheetId"] == json!(3)));
    }

    #[test]
    fn test_report_to_csv() {
        let report = compose_all(&monthly_data(), None, &ReportLabels::english()).unwrap();
        let rows = report.to_rows().len();

        let mut sink = CsvSink::new(Vec::new());
        let written = sink.write(&Fragment::Formatted(report)).unwrap();
        assert_eq!(written, rows);

        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("MM,,,,,,"));
        assert_eq!(lines.next(), Some(",Jan. 2024,,,Feb. 2024,,"));
    }
}
