use xlsx_core::{Cell, Header};

use super::{sorted_by_name, Row};
use crate::colors::color_name;
use crate::model::Tag;

pub const SHEET: &str = "Tags";

pub fn headers() -> Vec<Header> {
    vec![
        Header::new("#", 4.0),
        Header::new("Name", 20.0),
        Header::new("Color", 20.0),
        Header::new("Comments", 60.0),
    ]
}

pub fn rows(tags: &[Tag]) -> Vec<Row> {
    sorted_by_name(tags, |tag| tag.name.as_str())
        .iter()
        .enumerate()
        .map(|(idx, tag)| {
            vec![
                Cell::from(idx + 1),
                Cell::from(tag.name.as_str()),
                Cell::from(color_name(&tag.color)),
                Cell::from(tag.comments.as_str()),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use xlsx_core::Cell;

    use super::rows;
    use crate::model::Tag;

    fn tag(xml: &str) -> Tag {
        quick_xml::de::from_str(xml).expect("tag fixture")
    }

    #[test]
    fn colors_translate_and_unmapped_codes_pass_through() {
        let tags = vec![
            tag(r#"<entry name="prod"><color>color1</color><comments>production</comments></entry>"#),
            tag(r#"<entry name="lab"><color>color99</color></entry>"#),
        ];
        let rows = rows(&tags);
        // sorted: lab, prod
        assert_eq!(rows[0][2], Cell::Text("color99".to_string()));
        assert_eq!(rows[1][2], Cell::Text("Red".to_string()));
        assert_eq!(rows[1][3], Cell::Text("production".to_string()));
    }
}
