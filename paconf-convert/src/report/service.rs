use tracing::warn;
use xlsx_core::{Cell, Header};

use super::{sorted_by_name, Row};
use crate::model::{Service, ServiceGroup};

pub const SHEET: &str = "Services";
pub const GROUP_SHEET: &str = "Service Groups";

pub fn headers() -> Vec<Header> {
    vec![
        Header::new("#", 4.0),
        Header::new("Name", 30.0),
        Header::new("Protocol", 10.0),
        Header::new("Destination Port", 20.0),
        Header::new("Description", 60.0),
    ]
}

pub fn rows(services: &[Service]) -> Vec<Row> {
    sorted_by_name(services, |service| service.name.as_str())
        .iter()
        .enumerate()
        .map(|(idx, service)| {
            let (protocol, port) = resolve_protocol(service);
            vec![
                Cell::from(idx + 1),
                Cell::from(service.name.as_str()),
                Cell::from(protocol),
                Cell::from(port),
                Cell::from(service.description.as_str()),
            ]
        })
        .collect()
}

/// A service object carries a TCP port or a UDP port. When a document sets
/// both, the conflict is logged and the UDP value wins, matching how the
/// sheets have historically resolved it.
fn resolve_protocol(service: &Service) -> (&'static str, &str) {
    let mut protocol = "";
    let mut port = "";
    if !service.tcp_port().is_empty() {
        protocol = "TCP";
        port = service.tcp_port();
    }
    if !service.udp_port().is_empty() {
        if !service.tcp_port().is_empty() {
            warn!(service = %service.name, "service object has both tcp and udp ports; reporting udp");
        }
        protocol = "UDP";
        port = service.udp_port();
    }
    (protocol, port)
}

pub fn group_headers() -> Vec<Header> {
    vec![
        Header::new("#", 4.0),
        Header::new("Name", 20.0),
        Header::new("Members", 60.0),
        Header::new("Tags", 12.0),
    ]
}

pub fn group_rows(groups: &[ServiceGroup]) -> Vec<Row> {
    sorted_by_name(groups, |group| group.name.as_str())
        .iter()
        .enumerate()
        .map(|(idx, group)| {
            vec![
                Cell::from(idx + 1),
                Cell::from(group.name.as_str()),
                Cell::from(group.members.as_slice()),
                Cell::from(group.tag.as_slice()),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use xlsx_core::Cell;

    use super::{group_rows, rows};
    use crate::model::{Service, ServiceGroup};

    fn service(xml: &str) -> Service {
        quick_xml::de::from_str(xml).expect("service fixture")
    }

    #[test]
    fn tcp_only_reports_tcp() {
        let services = vec![service(
            r#"<entry name="https"><protocol><tcp><port>443</port></tcp></protocol></entry>"#,
        )];
        let row = &rows(&services)[0];
        assert_eq!(row[2], Cell::Text("TCP".to_string()));
        assert_eq!(row[3], Cell::Text("443".to_string()));
    }

    #[test]
    fn udp_overrides_tcp_when_both_are_set() {
        let services = vec![service(
            r#"<entry name="conflicted"><protocol>
                 <tcp><port>80</port></tcp><udp><port>53</port></udp>
               </protocol></entry>"#,
        )];
        let row = &rows(&services)[0];
        assert_eq!(row[2], Cell::Text("UDP".to_string()));
        assert_eq!(row[3], Cell::Text("53".to_string()));
    }

    #[test]
    fn no_port_reports_empty_protocol() {
        let services = vec![service(r#"<entry name="any"/>"#)];
        let row = &rows(&services)[0];
        assert_eq!(row[2], Cell::Text(String::new()));
        assert_eq!(row[3], Cell::Text(String::new()));
    }

    #[test]
    fn group_members_and_tags_are_listed() {
        let groups = vec![quick_xml::de::from_str::<ServiceGroup>(
            r#"<entry name="web"><members><member>http</member><member>https</member></members></entry>"#,
        )
        .expect("service group fixture")];
        let rows = group_rows(&groups);
        assert_eq!(
            rows[0][2],
            Cell::List(vec!["http".to_string(), "https".to_string()])
        );
        assert_eq!(rows[0][3], Cell::List(vec![]));
    }
}
