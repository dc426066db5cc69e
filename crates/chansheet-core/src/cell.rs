use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single value stored in a grid cell
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Create a number cell
    pub fn number(value: impl Into<f64>) -> Self {
        CellValue::Number(value.into())
    }

    /// Check if the value is blank
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.parse().ok(),
            CellValue::Empty => None,
        }
    }

    /// Render the value the way it is handed to a sink
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Text(s) => s.clone(),
        }
    }

    /// Convert a JSON scalar into a cell.
    ///
    /// Nested arrays and objects are kept as their JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
            Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or_default(),
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => CellValue::Text(value.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Build a row of cells from anything convertible into `CellValue`
#[macro_export]
macro_rules! row {
    () => { ::std::vec::Vec::<$crate::CellValue>::new() };
    ($($cell:expr),+ $(,)?) => {
        ::std::vec![$($crate::CellValue::from($cell)),+]
    };
}
