use xlsx_core::{Cell, Header};

use super::{marker, Row};
use crate::model::Ethernet;

pub const SHEET: &str = "Ethernet";

pub fn headers() -> Vec<Header> {
    vec![
        Header::new("#", 4.0),
        Header::new("Name", 16.0),
        Header::new("Aggregate Group", 10.0),
        Header::new("Port Priority", 10.0),
        Header::new("Link State", 6.0),
        Header::new("IP Address", 18.0),
        Header::new("Management Profile", 10.0),
        Header::new("Netflow Profile", 10.0),
        Header::new("LLDP", 8.0),
        Header::new("HA", 4.0),
        Header::new("Comment", 60.0),
    ]
}

pub fn rows(interfaces: &[Ethernet]) -> Vec<Row> {
    let mut sorted: Vec<&Ethernet> = interfaces.iter().collect();
    sorted.sort_by(|a, b| slot_port_key(&a.name).cmp(&slot_port_key(&b.name)));

    sorted
        .iter()
        .enumerate()
        .map(|(idx, iface)| {
            vec![
                Cell::from(idx + 1),
                Cell::from(iface.name.as_str()),
                Cell::from(iface.aggregate_group.as_str()),
                Cell::from(iface.port_priority()),
                Cell::from(iface.link_state.as_str()),
                Cell::from(iface.addresses()),
                Cell::from(iface.management_profile()),
                Cell::from(iface.netflow_profile()),
                Cell::from(iface.lldp_enable()),
                marker(iface.ha, "HA"),
                Cell::from(iface.comment.as_str()),
            ]
        })
        .collect()
}

/// Two-part sort key for names like `ethernet1/2`: textual slot prefix, then
/// numeric port. A name without the slot/port form, or with a non-numeric
/// port, keys its numeric part as 0 and falls back to the prefix comparison.
fn slot_port_key(name: &str) -> (&str, u32) {
    match name.split_once('/') {
        Some((slot, port)) => (slot, port.parse().unwrap_or(0)),
        None => (name, 0),
    }
}

#[cfg(test)]
mod tests {
    use xlsx_core::Cell;

    use super::{rows, slot_port_key};
    use crate::model::Ethernet;

    fn iface(name: &str) -> Ethernet {
        quick_xml::de::from_str(&format!(r#"<entry name="{name}"/>"#)).expect("ethernet fixture")
    }

    #[test]
    fn ports_sort_numerically_within_a_slot() {
        let interfaces = vec![iface("ethernet1/10"), iface("ethernet1/2"), iface("ethernet2/1")];
        let names: Vec<Cell> = rows(&interfaces).into_iter().map(|mut r| r.remove(1)).collect();
        assert_eq!(
            names,
            vec![
                Cell::Text("ethernet1/2".to_string()),
                Cell::Text("ethernet1/10".to_string()),
                Cell::Text("ethernet2/1".to_string()),
            ]
        );
    }

    #[test]
    fn malformed_names_fall_back_without_panicking() {
        assert_eq!(slot_port_key("ethernet1/2"), ("ethernet1", 2));
        assert_eq!(slot_port_key("ethernet1/x"), ("ethernet1", 0));
        assert_eq!(slot_port_key("mgmt"), ("mgmt", 0));

        let interfaces = vec![iface("mgmt"), iface("ethernet1/1")];
        assert_eq!(rows(&interfaces).len(), 2);
    }

    #[test]
    fn ha_marker_and_address_list_are_projected() {
        let interfaces = vec![quick_xml::de::from_str::<Ethernet>(
            r#"<entry name="ethernet1/1">
                 <layer3><ip><entry name="10.0.0.1/24"/><entry name="10.0.1.1/24"/></ip></layer3>
                 <ha/>
               </entry>"#,
        )
        .expect("ethernet fixture")];
        let row = &rows(&interfaces)[0];
        assert_eq!(
            row[5],
            Cell::List(vec!["10.0.0.1/24".to_string(), "10.0.1.1/24".to_string()])
        );
        assert_eq!(row[9], Cell::Text("HA".to_string()));
    }
}
