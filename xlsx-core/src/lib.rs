//! Minimal tabular spreadsheet output for report generators.
//!
//! This crate defines a small contract for tabular report sinks and one
//! concrete implementation that writes Office Open XML workbooks (`.xlsx`).
//!
//! - [`sink`] — the [`TabularSink`] trait plus the [`Cell`] and [`Header`]
//!   value types shared by all sinks
//! - [`workbook`] — [`XlsxWorkbook`], an in-memory workbook builder that
//!   serializes worksheet and table parts with `quick-xml` and packages them
//!   with `zip` on [`TabularSink::save_and_close`]
//!
//! The sink model is deliberately sequential: create a sheet, set its header,
//! append rows, optionally register the range as a table, then move on to the
//! next sheet. Nothing touches the filesystem until `save_and_close`.

pub mod sink;
pub mod workbook;

pub use sink::{Cell, Header, SinkError, TabularSink};
pub use workbook::XlsxWorkbook;
