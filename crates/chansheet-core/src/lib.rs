//! Immutable grid algebra for composing formatted spreadsheet reports.
//!
//! A report is built from independent [`Fragment`]s, each either a plain
//! [`Grid`] or a [`FormattedGrid`] carrying [`FormatRange`] directives, and
//! combined with the operators in [`merge`]. Format coordinates are
//! renumbered as fragments are stacked or placed side by side.

pub mod cell;
pub mod error;
pub mod format;
pub mod fragment;
pub mod grid;
pub mod merge;
pub mod range;

pub use cell::CellValue;
pub use error::{GridError, Result};
pub use format::{Borders, CellStyle, Color, HorizontalAlign, VerticalAlign};
pub use fragment::{FormattedGrid, Fragment};
pub use grid::{blank_row, Grid, Row};
pub use range::{col_from_label, col_to_label, CellCoord, FormatRange};
