use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "paconf-convert")]
#[command(about = "Convert firewall XML configurations into spreadsheet parameter sheets")]
pub struct Cli {
    /// Configuration export to convert (.xml, .tar.gz, or .tgz).
    pub input: PathBuf,
    /// Device type of the configuration export.
    #[arg(long, value_enum, default_value_t = Device::Paloalto)]
    pub device: Device,
    /// Output workbook path (defaults to the input path with an .xlsx extension).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Device {
    Paloalto,
    Fortigate,
}

/// Derive the output path by swapping the input's extension for `.xlsx`.
/// Bundle suffixes are treated as one extension, so `conf.tar.gz` becomes
/// `conf.xlsx` rather than `conf.tar.xlsx`.
pub fn default_output(input: &Path) -> PathBuf {
    let name = input.to_string_lossy();
    if let Some(stem) = name.strip_suffix(".tar.gz") {
        return PathBuf::from(format!("{stem}.xlsx"));
    }
    input.with_extension("xlsx")
}
