//! Report table builders and the fixed sheet sequence.
//!
//! Each submodule owns one report family: a `headers()` definition and a pure
//! `rows()` builder that selects, sorts, and reshapes parsed entries into
//! ordered rows. [`write_reports`] drives the twelve sheets against a
//! [`TabularSink`] in the order the parameter-sheet layout expects; callers
//! must not reorder or parallelize the sequence.
//!
//! Every report sorts by entry name except the security rules, which keep the
//! authored order because the device evaluates them top to bottom.

use thiserror::Error;
use xlsx_core::{Cell, Header, SinkError, TabularSink};

use crate::model::{Config, Vsys};

pub mod address;
pub mod application;
pub mod ethernet;
pub mod security;
pub mod service;
pub mod tag;
pub mod users;
pub mod virtual_router;
pub mod zone;

/// One report row, index column included.
pub type Row = Vec<Cell>;

/// A sink failure wrapped with the sheet it occurred on.
#[derive(Debug, Error)]
#[error("report '{sheet}': {source}")]
pub struct ReportError {
    pub sheet: String,
    #[source]
    pub source: SinkError,
}

/// Generate all report sheets in their fixed order.
pub fn write_reports<S: TabularSink>(
    sink: &mut S,
    config: &Config,
    vsys: &Vsys,
) -> Result<(), ReportError> {
    let ethernet = config.ethernet_interfaces();
    let routers = config.virtual_routers();

    write_sheet(sink, users::SHEET, users::headers(), users::rows(config.users()))?;
    write_sheet(sink, ethernet::SHEET, ethernet::headers(), ethernet::rows(&ethernet))?;
    write_sheet(sink, zone::SHEET, zone::headers(), zone::rows(vsys.zones()))?;
    write_sheet(
        sink,
        virtual_router::INTERFACE_SHEET,
        virtual_router::interface_headers(),
        virtual_router::interface_rows(&routers),
    )?;
    write_sheet(
        sink,
        virtual_router::STATIC_ROUTE_SHEET,
        virtual_router::static_route_headers(),
        virtual_router::static_route_rows(&routers),
    )?;
    write_sheet(sink, tag::SHEET, tag::headers(), tag::rows(vsys.tags()))?;
    write_sheet(sink, address::SHEET, address::headers(), address::rows(vsys.addresses()))?;
    write_sheet(
        sink,
        address::GROUP_SHEET,
        address::group_headers(),
        address::group_rows(vsys.address_groups()),
    )?;
    write_sheet(
        sink,
        application::SHEET,
        application::headers(),
        application::rows(vsys.application_groups()),
    )?;
    write_sheet(sink, service::SHEET, service::headers(), service::rows(vsys.services()))?;
    write_sheet(
        sink,
        service::GROUP_SHEET,
        service::group_headers(),
        service::group_rows(vsys.service_groups()),
    )?;
    write_sheet(
        sink,
        security::SHEET,
        security::headers(),
        security::rows(vsys.security_rules()),
    )?;
    Ok(())
}

fn write_sheet<S: TabularSink>(
    sink: &mut S,
    sheet: &str,
    headers: Vec<Header>,
    rows: Vec<Row>,
) -> Result<(), ReportError> {
    let run = || -> Result<(), SinkError> {
        sink.new_sheet(sheet)?;
        sink.set_header(&headers)?;
        for row in rows {
            sink.set_row(row)?;
        }
        sink.add_table(sheet)
    };
    run().map_err(|source| ReportError {
        sheet: sheet.to_string(),
        source,
    })
}

/// Stable name-sorted view over entries; equal names keep their input order.
fn sorted_by_name<'a, T, F>(entries: &'a [T], name: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let mut sorted: Vec<&T> = entries.iter().collect();
    sorted.sort_by(|a, b| name(a).cmp(name(b)));
    sorted
}

/// Presence-marker projection: `true` renders as a fixed token, `false` as an
/// empty cell.
fn marker(present: bool, token: &str) -> Cell {
    if present {
        Cell::from(token)
    } else {
        Cell::from("")
    }
}
