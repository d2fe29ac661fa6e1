//! The security rulebase is the one report that never resorts: the device
//! evaluates rules in authored order, so the sheet preserves it.

use xlsx_core::{Cell, Header};

use super::Row;
use crate::model::SecurityRule;

pub const SHEET: &str = "Security";

pub fn headers() -> Vec<Header> {
    vec![
        Header::new("#", 4.0),
        Header::new("Name", 20.0),
        Header::new("Source Zone", 10.0),
        Header::new("Destination Zone", 10.0),
        Header::new("Source", 30.0),
        Header::new("Destination", 30.0),
        Header::new("Application", 30.0),
        Header::new("Service", 30.0),
        Header::new("Action", 10.0),
        Header::new("Description", 60.0),
    ]
}

pub fn rows(rules: &[SecurityRule]) -> Vec<Row> {
    rules
        .iter()
        .enumerate()
        .map(|(idx, rule)| {
            vec![
                Cell::from(idx + 1),
                Cell::from(rule.name.as_str()),
                Cell::from(rule.from.as_slice()),
                Cell::from(rule.to.as_slice()),
                Cell::from(rule.source.as_slice()),
                Cell::from(rule.destination.as_slice()),
                Cell::from(rule.application.as_slice()),
                Cell::from(rule.service.as_slice()),
                Cell::from(rule.action.as_str()),
                Cell::from(rule.description.as_str()),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use xlsx_core::Cell;

    use super::rows;
    use crate::model::SecurityRule;

    fn rule(xml: &str) -> SecurityRule {
        quick_xml::de::from_str(xml).expect("security rule fixture")
    }

    #[test]
    fn document_order_is_preserved() {
        let rules = vec![
            rule(r#"<entry name="zebra"><action>allow</action></entry>"#),
            rule(r#"<entry name="alpha"><action>deny</action></entry>"#),
        ];
        let rows = rows(&rules);
        assert_eq!(rows[0][1], Cell::Text("zebra".to_string()));
        assert_eq!(rows[1][1], Cell::Text("alpha".to_string()));
        assert_eq!(rows[1][0], Cell::Int(2));
    }

    #[test]
    fn member_lists_are_projected() {
        let rules = vec![rule(
            r#"<entry name="allow-web">
                 <from><member>trust</member></from>
                 <to><member>untrust</member></to>
                 <source><member>any</member></source>
                 <destination><member>web-servers</member></destination>
                 <application><member>web-browsing</member><member>ssl</member></application>
                 <service><member>application-default</member></service>
                 <action>allow</action>
               </entry>"#,
        )];
        let row = &rows(&rules)[0];
        assert_eq!(row[2], Cell::List(vec!["trust".to_string()]));
        assert_eq!(
            row[6],
            Cell::List(vec!["web-browsing".to_string(), "ssl".to_string()])
        );
        assert_eq!(row[8], Cell::Text("allow".to_string()));
    }
}
