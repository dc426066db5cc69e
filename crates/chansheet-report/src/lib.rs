//! Monthly channel report built on the chansheet grid algebra.
//!
//! The input is a map of pre-aggregated monthly metrics plus an optional
//! snapshot of the channel's current totals. Block factories in [`blocks`]
//! each render one part of the report, and [`layout::compose`] stacks them
//! in a fixed order into a single [`FormattedGrid`](chansheet_core::FormattedGrid).

pub mod blocks;
pub mod error;
pub mod labels;
pub mod layout;
pub mod model;

pub use blocks::ReportInput;
pub use error::{ReportError, Result};
pub use labels::ReportLabels;
pub use layout::{compose, compose_all};
pub use model::{sorted_months, ChannelSnapshot, CountryValue, MonthKey, MonthlyAggregate, MonthlyData};
