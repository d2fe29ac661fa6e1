use xlsx_core::{Cell, Header};

use super::{sorted_by_name, Row};
use crate::model::Zone;

pub const SHEET: &str = "Zones";

pub fn headers() -> Vec<Header> {
    vec![
        Header::new("#", 4.0),
        Header::new("Name", 20.0),
        Header::new("Type", 10.0),
        Header::new("Interfaces", 20.0),
        Header::new("Description", 60.0),
    ]
}

pub fn rows(zones: &[Zone]) -> Vec<Row> {
    sorted_by_name(zones, |zone| zone.name.as_str())
        .iter()
        .enumerate()
        .map(|(idx, zone)| {
            let members = zone.layer3_members();
            let zone_type = if members.is_empty() { "" } else { "Layer3" };
            vec![
                Cell::from(idx + 1),
                Cell::from(zone.name.as_str()),
                Cell::from(zone_type),
                Cell::from(members),
                Cell::from(zone.description.as_str()),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use xlsx_core::Cell;

    use super::rows;
    use crate::model::Zone;

    fn zone(xml: &str) -> Zone {
        quick_xml::de::from_str(xml).expect("zone fixture")
    }

    #[test]
    fn layer3_type_is_synthesized_from_members() {
        let zones = vec![
            zone(r#"<entry name="trust"><network><layer3><member>ethernet1/1</member></layer3></network></entry>"#),
            zone(r#"<entry name="empty"/>"#),
        ];
        let rows = rows(&zones);
        // sorted: empty, trust
        assert_eq!(rows[0][2], Cell::Text(String::new()));
        assert_eq!(rows[0][3], Cell::List(vec![]));
        assert_eq!(rows[1][2], Cell::Text("Layer3".to_string()));
        assert_eq!(rows[1][3], Cell::List(vec!["ethernet1/1".to_string()]));
    }
}
