//! Conversion pipeline orchestration.
//!
//! The pipeline is sequential and single-threaded: load raw bytes, parse the
//! configuration, generate every report sheet into a workbook buffered in
//! memory, then commit the output. The workbook is saved to a temporary
//! sibling path and renamed into place, so a failure mid-run never leaves a
//! half-written file that looks complete.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;
use xlsx_core::{SinkError, TabularSink, XlsxWorkbook};

use crate::archive::{self, LoadError};
use crate::parse::{self, ParseError};
use crate::report::{self, ReportError};

/// Device families the converter knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    PaloAlto,
    FortiGate,
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceType::PaloAlto => write!(f, "PaloAlto"),
            DeviceType::FortiGate => write!(f, "FortiGate"),
        }
    }
}

impl DeviceType {
    /// Convert `input` into a parameter-sheet workbook at `output`.
    pub fn convert(self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        match self {
            DeviceType::PaloAlto => convert_paloalto(input, output),
            DeviceType::FortiGate => Err(ConvertError::Unsupported(self)),
        }
    }
}

/// Errors from the conversion pipeline, prefixed with the failing stage.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("load: {0}")]
    Load(#[from] LoadError),
    #[error("parse: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("save workbook: {0}")]
    Save(#[source] SinkError),
    #[error("{stage} {}: {source}", path.display())]
    Io {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0} conversion is not implemented")]
    Unsupported(DeviceType),
}

/// Convert a PaloAlto configuration export into a parameter-sheet workbook.
pub fn convert_paloalto(input: &Path, output: &Path) -> Result<(), ConvertError> {
    info!(input = %input.display(), output = %output.display(), "converting PaloAlto configuration");

    let data = archive::load(input)?;
    let (config, vsys) = parse::parse_config(&data)?;
    info!(
        version = %config.version,
        detail_version = %config.detail_version,
        "parsed configuration"
    );

    if output.exists() {
        info!(path = %output.display(), "removing existing output file");
        fs::remove_file(output).map_err(|source| ConvertError::Io {
            stage: "failed to remove",
            path: output.to_path_buf(),
            source,
        })?;
    }

    let staging = staging_path(output);
    let mut workbook = XlsxWorkbook::create(&staging);
    report::write_reports(&mut workbook, &config, &vsys)?;
    workbook.save_and_close().map_err(|source| {
        let _ = fs::remove_file(&staging);
        ConvertError::Save(source)
    })?;
    fs::rename(&staging, output).map_err(|source| {
        let _ = fs::remove_file(&staging);
        ConvertError::Io {
            stage: "failed to rename",
            path: output.to_path_buf(),
            source,
        }
    })?;

    info!(path = %output.display(), "wrote parameter sheet workbook");
    Ok(())
}

fn staging_path(output: &Path) -> PathBuf {
    let mut staging = output.as_os_str().to_owned();
    staging.push(".tmp");
    PathBuf::from(staging)
}
