use thiserror::Error;

use crate::model::{Config, Vsys};

/// Name of the operative virtual system every report is generated from.
pub const OPERATIVE_VSYS: &str = "vsys1";

/// Errors that can occur while parsing a configuration document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input could not be deserialized as a PAN-OS configuration document.
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::DeError),
    /// Document was well-formed but holds no operative virtual system.
    #[error("operative virtual system '{0}' missing")]
    VsysNotFound(String),
}

/// Parse configuration bytes and locate the operative virtual system.
///
/// Missing optional elements deserialize to empty values; the only hard
/// validation gate is the presence of a vsys entry named [`OPERATIVE_VSYS`].
pub fn parse_config(data: &[u8]) -> Result<(Config, Vsys), ParseError> {
    let config: Config = quick_xml::de::from_reader(data)?;
    let vsys = config
        .vsys_entries()
        .find(|vsys| vsys.name == OPERATIVE_VSYS)
        .cloned()
        .ok_or_else(|| ParseError::VsysNotFound(OPERATIVE_VSYS.to_string()))?;
    Ok((config, vsys))
}

#[cfg(test)]
mod tests {
    use super::{parse_config, ParseError};

    const MINIMAL: &str = r#"<config version="10.1.0" detail-version="10.1.6">
  <mgt-config>
    <users>
      <entry name="admin">
        <phash>$1$secret$</phash>
        <permissions><role-based><superuser>yes</superuser></role-based></permissions>
      </entry>
      <entry name="audit">
        <permissions><role-based><devicereader/></role-based></permissions>
      </entry>
    </users>
  </mgt-config>
  <devices>
    <entry name="localhost.localdomain">
      <network>
        <interface>
          <ethernet>
            <entry name="ethernet1/1">
              <link-state>up</link-state>
              <layer3>
                <ip><entry name="192.0.2.1/24"/></ip>
                <lldp><enable>yes</enable></lldp>
              </layer3>
              <ha/>
              <comment>uplink</comment>
              <units>
                <entry name="ethernet1/1.10">
                  <ip><entry name="198.51.100.1/24"/></ip>
                  <tag>10</tag>
                </entry>
              </units>
            </entry>
          </ethernet>
        </interface>
        <virtual-router>
          <entry name="default">
            <interface><member>ethernet1/1</member></interface>
            <routing-table><ip><static-route>
              <entry name="default-route">
                <nexthop><ip-address>192.0.2.254</ip-address></nexthop>
                <interface>ethernet1/1</interface>
                <metric>10</metric>
                <destination>0.0.0.0/0</destination>
              </entry>
            </static-route></ip></routing-table>
          </entry>
        </virtual-router>
      </network>
      <vsys>
        <entry name="vsys1">
          <service>
            <entry name="web"><protocol><tcp><port>443</port></tcp></protocol></entry>
          </service>
        </entry>
      </vsys>
    </entry>
  </devices>
</config>"#;

    #[test]
    fn parses_versions_users_and_markers() {
        let (config, vsys) = parse_config(MINIMAL.as_bytes()).expect("parse");
        assert_eq!(config.version, "10.1.0");
        assert_eq!(config.detail_version, "10.1.6");
        assert_eq!(vsys.name, "vsys1");

        let users = config.users();
        assert_eq!(users.len(), 2);
        assert!(users[0].is_superuser());
        assert!(!users[0].is_devicereader());
        assert!(users[1].is_devicereader());
        assert_eq!(users[0].phash, "$1$secret$");
    }

    #[test]
    fn parses_interfaces_and_subinterfaces() {
        let (config, _) = parse_config(MINIMAL.as_bytes()).expect("parse");
        let ethernet = config.ethernet_interfaces();
        assert_eq!(ethernet.len(), 1);
        assert!(ethernet[0].ha);
        assert_eq!(ethernet[0].addresses(), vec!["192.0.2.1/24".to_string()]);
        assert_eq!(ethernet[0].lldp_enable(), "yes");

        let units = &ethernet[0].units.entry;
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].name, "ethernet1/1.10");
        assert_eq!(units[0].tag, "10");
        assert_eq!(units[0].addresses(), vec!["198.51.100.1/24".to_string()]);
    }

    #[test]
    fn parses_static_routes() {
        let (config, _) = parse_config(MINIMAL.as_bytes()).expect("parse");
        let routers = config.virtual_routers();
        assert_eq!(routers.len(), 1);
        let routes = routers[0].static_routes();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].nexthop_ip(), "192.0.2.254");
        assert_eq!(routes[0].destination, "0.0.0.0/0");
        assert_eq!(routes[0].bfd_profile(), "");
    }

    #[test]
    fn missing_vsys1_is_a_distinct_error() {
        let xml = r#"<config><devices><entry name="localhost.localdomain">
            <vsys><entry name="vsys2"/></vsys>
        </entry></devices></config>"#;
        let err = parse_config(xml.as_bytes()).expect_err("must fail");
        assert!(matches!(err, ParseError::VsysNotFound(_)));
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let err = parse_config(b"<config><devices>").expect_err("must fail");
        assert!(matches!(err, ParseError::Xml(_)));
    }

    #[test]
    fn missing_optional_structure_defaults_to_empty() {
        let xml = r#"<config><devices><entry name="localhost.localdomain">
            <vsys><entry name="vsys1"/></vsys>
        </entry></devices></config>"#;
        let (config, vsys) = parse_config(xml.as_bytes()).expect("parse");
        assert!(config.users().is_empty());
        assert!(config.ethernet_interfaces().is_empty());
        assert!(vsys.zones().is_empty());
        assert!(vsys.security_rules().is_empty());
    }
}
