//! PaloAlto firewall configuration to spreadsheet parameter sheets.
//!
//! This library reads a PAN-OS `running-config.xml` export (optionally inside
//! a tech-support `.tar.gz`/`.tgz` bundle), parses the subset of the
//! configuration the parameter sheets need, and renders twelve report tables
//! into any [`xlsx_core::TabularSink`].
//!
//! # Architecture
//!
//! - [`archive`] — Locate and read the raw configuration bytes, extracting
//!   `./running-config.xml` from support bundles
//! - [`model`] — Typed configuration tree deserialized with `quick-xml`;
//!   permissive about missing structure, strict about well-formedness
//! - [`parse`] — Deserialization plus the single hard validation gate: the
//!   operative virtual system `vsys1` must exist
//! - [`colors`] — PAN-OS tag palette code to display-name table
//! - [`report`] — One pure row builder per report table, plus the fixed-order
//!   sheet sequence driven against the sink
//! - [`convert`] — Device-type dispatch and pipeline orchestration (load,
//!   parse, report, commit output atomically)
//!
//! # Example
//!
//! ```ignore
//! use paconf_convert::convert::DeviceType;
//!
//! DeviceType::PaloAlto.convert("running-config.xml".as_ref(), "sheets.xlsx".as_ref())?;
//! ```

pub mod archive;
pub mod colors;
pub mod convert;
pub mod model;
pub mod parse;
pub mod report;
