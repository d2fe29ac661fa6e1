use thiserror::Error;

/// A single cell value in a report row.
///
/// Lists render as one multi-line cell; empty text and empty lists render as
/// a blank cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Int(u64),
    Text(String),
    List(Vec<String>),
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Int(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Int(value as u64)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<Vec<String>> for Cell {
    fn from(value: Vec<String>) -> Self {
        Cell::List(value)
    }
}

impl From<&[String]> for Cell {
    fn from(value: &[String]) -> Self {
        Cell::List(value.to_vec())
    }
}

/// A column header: display label plus a column-width hint in character units.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub label: String,
    pub width: f64,
}

impl Header {
    pub fn new(label: impl Into<String>, width: f64) -> Self {
        Self {
            label: label.into(),
            width,
        }
    }
}

/// Errors raised by a tabular sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Failed to assemble the output package.
    #[error("failed to write workbook package: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// Failed to serialize a workbook part.
    #[error("failed to write workbook part: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Failed to write the output file.
    #[error("failed to write workbook file: {0}")]
    Io(#[from] std::io::Error),
    /// Sink operations were called in an invalid order.
    #[error("invalid sink call sequence: {0}")]
    Sequence(String),
}

/// An ordered tabular output target.
///
/// Callers drive the sink one sheet at a time: [`new_sheet`] opens a sheet,
/// [`set_header`] defines its columns, [`set_row`] appends rows in order,
/// [`add_table`] registers the filled range as a named table. A final
/// [`save_and_close`] persists everything; nothing is written before it.
///
/// [`new_sheet`]: TabularSink::new_sheet
/// [`set_header`]: TabularSink::set_header
/// [`set_row`]: TabularSink::set_row
/// [`add_table`]: TabularSink::add_table
/// [`save_and_close`]: TabularSink::save_and_close
pub trait TabularSink {
    fn new_sheet(&mut self, name: &str) -> Result<(), SinkError>;
    fn set_header(&mut self, headers: &[Header]) -> Result<(), SinkError>;
    fn set_row(&mut self, cells: Vec<Cell>) -> Result<(), SinkError>;
    fn add_table(&mut self, name: &str) -> Result<(), SinkError>;
    fn save_and_close(&mut self) -> Result<(), SinkError>;
}
