use xlsx_core::{Cell, Header};

use super::{sorted_by_name, Row};
use crate::model::{Address, AddressGroup};

pub const SHEET: &str = "Addresses";
pub const GROUP_SHEET: &str = "Address Groups";

pub fn headers() -> Vec<Header> {
    vec![
        Header::new("#", 4.0),
        Header::new("Name", 20.0),
        Header::new("Address", 20.0),
        Header::new("Tags", 12.0),
        Header::new("Description", 60.0),
    ]
}

pub fn rows(addresses: &[Address]) -> Vec<Row> {
    sorted_by_name(addresses, |address| address.name.as_str())
        .iter()
        .enumerate()
        .map(|(idx, address)| {
            // IP/netmask wins over FQDN when both are set.
            let content = if !address.ip_netmask.is_empty() {
                address.ip_netmask.as_str()
            } else {
                address.fqdn.as_str()
            };
            vec![
                Cell::from(idx + 1),
                Cell::from(address.name.as_str()),
                Cell::from(content),
                Cell::from(address.tag.as_slice()),
                Cell::from(address.description.as_str()),
            ]
        })
        .collect()
}

pub fn group_headers() -> Vec<Header> {
    vec![
        Header::new("#", 4.0),
        Header::new("Name", 20.0),
        Header::new("Members", 60.0),
        Header::new("Tags", 12.0),
        Header::new("Description", 60.0),
    ]
}

pub fn group_rows(groups: &[AddressGroup]) -> Vec<Row> {
    sorted_by_name(groups, |group| group.name.as_str())
        .iter()
        .enumerate()
        .map(|(idx, group)| {
            vec![
                Cell::from(idx + 1),
                Cell::from(group.name.as_str()),
                Cell::from(group.static_members.as_slice()),
                Cell::from(group.tag.as_slice()),
                Cell::from(group.description.as_str()),
            ]
        })
        .collect()
}
