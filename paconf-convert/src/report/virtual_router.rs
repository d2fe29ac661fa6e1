//! Two reports flatten the virtual-router one-to-many relations: one row per
//! member interface and one row per static route, each with its own running
//! row counter.

use xlsx_core::{Cell, Header};

use super::{sorted_by_name, Row};
use crate::model::VirtualRouter;

pub const INTERFACE_SHEET: &str = "VR Interfaces";
pub const STATIC_ROUTE_SHEET: &str = "VR Static Routes";

pub fn interface_headers() -> Vec<Header> {
    vec![
        Header::new("#", 4.0),
        Header::new("Virtual Router", 20.0),
        Header::new("Interface", 20.0),
    ]
}

pub fn interface_rows(routers: &[VirtualRouter]) -> Vec<Row> {
    let mut rows = Vec::new();
    for router in sorted_by_name(routers, |router| router.name.as_str()) {
        for member in router.interface.as_slice() {
            rows.push(vec![
                Cell::from(rows.len() + 1),
                Cell::from(router.name.as_str()),
                Cell::from(member.as_str()),
            ]);
        }
    }
    rows
}

pub fn static_route_headers() -> Vec<Header> {
    vec![
        Header::new("#", 4.0),
        Header::new("Virtual Router", 20.0),
        Header::new("Name", 20.0),
        Header::new("Destination", 20.0),
        Header::new("Interface", 20.0),
        Header::new("Next Hop", 14.0),
        Header::new("Metric", 4.0),
        Header::new("BFD", 10.0),
    ]
}

pub fn static_route_rows(routers: &[VirtualRouter]) -> Vec<Row> {
    let mut rows = Vec::new();
    for router in sorted_by_name(routers, |router| router.name.as_str()) {
        for route in router.static_routes() {
            rows.push(vec![
                Cell::from(rows.len() + 1),
                Cell::from(router.name.as_str()),
                Cell::from(route.name.as_str()),
                Cell::from(route.destination.as_str()),
                Cell::from(route.interface.as_str()),
                Cell::from(route.nexthop_ip()),
                Cell::from(route.metric.as_str()),
                Cell::from(route.bfd_profile()),
            ]);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use xlsx_core::Cell;

    use super::{interface_rows, static_route_rows};
    use crate::model::VirtualRouter;

    fn router(xml: &str) -> VirtualRouter {
        quick_xml::de::from_str(xml).expect("virtual router fixture")
    }

    fn fixtures() -> Vec<VirtualRouter> {
        vec![
            router(
                r#"<entry name="vr2">
                     <interface><member>ethernet1/3</member></interface>
                     <routing-table><ip><static-route>
                       <entry name="r2"><destination>10.2.0.0/16</destination></entry>
                     </static-route></ip></routing-table>
                   </entry>"#,
            ),
            router(
                r#"<entry name="vr1">
                     <interface><member>ethernet1/1</member><member>ethernet1/2</member></interface>
                     <routing-table><ip><static-route>
                       <entry name="r1"><destination>10.1.0.0/16</destination>
                         <nexthop><ip-address>10.0.0.1</ip-address></nexthop><metric>10</metric></entry>
                     </static-route></ip></routing-table>
                   </entry>"#,
            ),
        ]
    }

    #[test]
    fn member_rows_repeat_the_router_with_a_running_counter() {
        let rows = interface_rows(&fixtures());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], Cell::Int(1));
        assert_eq!(rows[0][1], Cell::Text("vr1".to_string()));
        assert_eq!(rows[1][2], Cell::Text("ethernet1/2".to_string()));
        assert_eq!(rows[2][0], Cell::Int(3));
        assert_eq!(rows[2][1], Cell::Text("vr2".to_string()));
    }

    #[test]
    fn route_rows_use_an_independent_counter() {
        let rows = static_route_rows(&fixtures());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], Cell::Int(1));
        assert_eq!(rows[0][2], Cell::Text("r1".to_string()));
        assert_eq!(rows[0][5], Cell::Text("10.0.0.1".to_string()));
        assert_eq!(rows[1][0], Cell::Int(2));
        assert_eq!(rows[1][1], Cell::Text("vr2".to_string()));
    }
}
