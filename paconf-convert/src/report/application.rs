use xlsx_core::{Cell, Header};

use super::{sorted_by_name, Row};
use crate::model::ApplicationGroup;

pub const SHEET: &str = "Application Groups";

pub fn headers() -> Vec<Header> {
    vec![
        Header::new("#", 4.0),
        Header::new("Name", 20.0),
        Header::new("Members", 60.0),
        Header::new("Tags", 12.0),
        Header::new("Description", 60.0),
    ]
}

pub fn rows(groups: &[ApplicationGroup]) -> Vec<Row> {
    sorted_by_name(groups, |group| group.name.as_str())
        .iter()
        .enumerate()
        .map(|(idx, group)| {
            vec![
                Cell::from(idx + 1),
                Cell::from(group.name.as_str()),
                Cell::from(group.members.as_slice()),
                Cell::from(group.tag.as_slice()),
                Cell::from(group.description.as_str()),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use xlsx_core::Cell;

    use super::rows;
    use crate::model::ApplicationGroup;

    #[test]
    fn groups_sort_by_name() {
        let groups: Vec<ApplicationGroup> = vec![
            quick_xml::de::from_str(r#"<entry name="web-apps"><members><member>ssl</member></members></entry>"#)
                .expect("fixture"),
            quick_xml::de::from_str(r#"<entry name="mgmt-apps"><members><member>ssh</member></members></entry>"#)
                .expect("fixture"),
        ];
        let rows = rows(&groups);
        assert_eq!(rows[0][1], Cell::Text("mgmt-apps".to_string()));
        assert_eq!(rows[1][2], Cell::List(vec!["ssl".to_string()]));
    }
}
