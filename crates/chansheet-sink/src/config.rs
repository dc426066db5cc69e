use anyhow::Context;
use chansheet_core::CellCoord;
use std::env;

const SPREADSHEET_URL: &str = "https://docs.google.com/spreadsheets/d/";

/// Destination of a report export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Destination document id
    pub spreadsheet_id: String,
    /// Destination tab title
    pub sheet_name: String,
    /// Numeric tab id used by format requests
    pub sheet_id: i64,
    /// Top-left cell of the value write
    pub anchor: CellCoord,
}

impl SinkConfig {
    pub fn new(spreadsheet_id: impl Into<String>, sheet_name: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            sheet_name: sheet_name.into(),
            sheet_id: 0,
            anchor: CellCoord::default(),
        }
    }

    pub fn with_sheet_id(mut self, sheet_id: i64) -> Self {
        self.sheet_id = sheet_id;
        self
    }

    pub fn with_anchor(mut self, anchor: CellCoord) -> Self {
        self.anchor = anchor;
        self
    }

    /// Load configuration from environment variables, reading `.env` first
    pub fn from_env() -> anyhow::Result<Self> {
        // A missing .env file is fine; the variables may come from the process
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let spreadsheet_id = lookup("CHANSHEET_SPREADSHEET_ID")
            .filter(|v| !v.trim().is_empty())
            .context("CHANSHEET_SPREADSHEET_ID must be set")?;
        let sheet_name = lookup("CHANSHEET_SHEET_NAME")
            .filter(|v| !v.trim().is_empty())
            .context("CHANSHEET_SHEET_NAME must be set")?;
        let sheet_id = match lookup("CHANSHEET_SHEET_ID") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("CHANSHEET_SHEET_ID is not an integer: {raw:?}"))?,
            None => 0,
        };
        let anchor = match lookup("CHANSHEET_ANCHOR") {
            Some(raw) => CellCoord::from_a1(&raw)
                .with_context(|| format!("CHANSHEET_ANCHOR is not an A1 cell: {raw:?}"))?,
            None => CellCoord::default(),
        };

        Ok(Self {
            spreadsheet_id,
            sheet_name,
            sheet_id,
            anchor,
        })
    }

    /// Value range of the bulk write, e.g. `'Report'!A1`
    pub fn value_range(&self) -> String {
        format!("'{}'!{}", self.sheet_name.replace('\'', "''"), self.anchor.to_a1())
    }

    /// Browser link to the destination document
    pub fn url(&self) -> String {
        format!("{}{}", SPREADSHEET_URL, self.spreadsheet_id)
    }
}
