//! Typed view of a PAN-OS `running-config.xml`.
//!
//! Only the elements the parameter sheets need are modeled; everything else
//! in the document is ignored during deserialization. Absent optional
//! structure maps to empty values rather than errors. Entities are read-only
//! once parsed.

use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;

/// Root `<config>` element.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "@version")]
    pub version: String,
    #[serde(rename = "@detail-version")]
    pub detail_version: String,
    #[serde(rename = "mgt-config")]
    mgt_config: MgtConfig,
    devices: Devices,
}

impl Config {
    /// Administrative users from `mgt-config>users`.
    pub fn users(&self) -> &[User] {
        &self.mgt_config.users.entry
    }

    /// Ethernet interfaces across all device entries.
    pub fn ethernet_interfaces(&self) -> Vec<Ethernet> {
        self.devices
            .entry
            .iter()
            .flat_map(|device| device.network.interface.ethernet.entry.iter())
            .cloned()
            .collect()
    }

    /// Virtual routers across all device entries.
    pub fn virtual_routers(&self) -> Vec<VirtualRouter> {
        self.devices
            .entry
            .iter()
            .flat_map(|device| device.network.virtual_router.entry.iter())
            .cloned()
            .collect()
    }

    /// Virtual system entries across all device entries.
    pub fn vsys_entries(&self) -> impl Iterator<Item = &Vsys> {
        self.devices
            .entry
            .iter()
            .flat_map(|device| device.vsys.entry.iter())
    }
}

/// Repeated `<entry>` children under a container element.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Entries<T> {
    pub entry: Vec<T>,
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self { entry: Vec::new() }
    }
}

/// Repeated `<member>` children under a container element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Members {
    pub member: Vec<String>,
}

impl Members {
    pub fn is_empty(&self) -> bool {
        self.member.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.member
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.member.clone()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct MgtConfig {
    users: Entries<User>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Devices {
    entry: Vec<DeviceEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DeviceEntry {
    network: Network,
    vsys: Entries<Vsys>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Network {
    interface: Interface,
    #[serde(rename = "virtual-router")]
    virtual_router: Entries<VirtualRouter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Interface {
    ethernet: Entries<Ethernet>,
}

/// `mgt-config>users>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "@name")]
    pub name: String,
    /// Stored hash; reports never emit this value.
    pub phash: String,
    permissions: Permissions,
}

impl User {
    pub fn is_superuser(&self) -> bool {
        self.permissions.role_based.superuser
    }

    pub fn is_devicereader(&self) -> bool {
        self.permissions.role_based.devicereader
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Permissions {
    #[serde(rename = "role-based")]
    role_based: RoleBased,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RoleBased {
    #[serde(deserialize_with = "presence")]
    superuser: bool,
    #[serde(deserialize_with = "presence")]
    devicereader: bool,
}

/// `devices>entry>network>interface>ethernet>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Ethernet {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "aggregate-group")]
    pub aggregate_group: String,
    lacp: Lacp,
    #[serde(rename = "link-state")]
    pub link_state: String,
    layer3: Layer3,
    #[serde(deserialize_with = "presence")]
    pub ha: bool,
    pub comment: String,
    pub units: Entries<SubInterface>,
}

impl Ethernet {
    pub fn port_priority(&self) -> &str {
        &self.lacp.port_priority
    }

    pub fn addresses(&self) -> Vec<String> {
        self.layer3.ip.entry.iter().map(|ip| ip.name.clone()).collect()
    }

    pub fn management_profile(&self) -> &str {
        &self.layer3.interface_management_profile
    }

    pub fn netflow_profile(&self) -> &str {
        &self.layer3.netflow_profile
    }

    pub fn lldp_enable(&self) -> &str {
        &self.layer3.lldp.enable
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Lacp {
    #[serde(rename = "port-priority")]
    port_priority: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Layer3 {
    ip: Entries<IpEntry>,
    #[serde(rename = "interface-management-profile")]
    interface_management_profile: String,
    #[serde(rename = "netflow-profile")]
    netflow_profile: String,
    lldp: Lldp,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Lldp {
    enable: String,
}

/// IP/netmask assignment, keyed by the `name` attribute.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IpEntry {
    #[serde(rename = "@name")]
    pub name: String,
}

/// `units>entry` sub-interface under an ethernet interface.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubInterface {
    #[serde(rename = "@name")]
    pub name: String,
    ip: Entries<IpEntry>,
    #[serde(rename = "interface-management-profile")]
    pub interface_management_profile: String,
    pub tag: String,
    pub comment: String,
}

impl SubInterface {
    pub fn addresses(&self) -> Vec<String> {
        self.ip.entry.iter().map(|ip| ip.name.clone()).collect()
    }
}

/// `devices>entry>network>virtual-router>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VirtualRouter {
    #[serde(rename = "@name")]
    pub name: String,
    pub interface: Members,
    #[serde(rename = "routing-table")]
    routing_table: RoutingTable,
}

impl VirtualRouter {
    pub fn static_routes(&self) -> &[StaticRoute] {
        &self.routing_table.ip.static_route.entry
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RoutingTable {
    ip: RoutingTableIp,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RoutingTableIp {
    #[serde(rename = "static-route")]
    static_route: Entries<StaticRoute>,
}

/// `routing-table>ip>static-route>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StaticRoute {
    #[serde(rename = "@name")]
    pub name: String,
    nexthop: Nexthop,
    bfd: Bfd,
    pub interface: String,
    pub metric: String,
    pub destination: String,
}

impl StaticRoute {
    pub fn nexthop_ip(&self) -> &str {
        &self.nexthop.ip_address
    }

    pub fn bfd_profile(&self) -> &str {
        &self.bfd.profile
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Nexthop {
    #[serde(rename = "ip-address")]
    ip_address: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Bfd {
    profile: String,
}

/// `devices>entry>vsys>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Vsys {
    #[serde(rename = "@name")]
    pub name: String,
    zone: Entries<Zone>,
    tag: Entries<Tag>,
    address: Entries<Address>,
    #[serde(rename = "address-group")]
    address_group: Entries<AddressGroup>,
    #[serde(rename = "application-group")]
    application_group: Entries<ApplicationGroup>,
    service: Entries<Service>,
    #[serde(rename = "service-group")]
    service_group: Entries<ServiceGroup>,
    rulebase: Rulebase,
}

impl Vsys {
    pub fn zones(&self) -> &[Zone] {
        &self.zone.entry
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tag.entry
    }

    pub fn addresses(&self) -> &[Address] {
        &self.address.entry
    }

    pub fn address_groups(&self) -> &[AddressGroup] {
        &self.address_group.entry
    }

    pub fn application_groups(&self) -> &[ApplicationGroup] {
        &self.application_group.entry
    }

    pub fn services(&self) -> &[Service] {
        &self.service.entry
    }

    pub fn service_groups(&self) -> &[ServiceGroup] {
        &self.service_group.entry
    }

    /// Security rules in authored (evaluation) order.
    pub fn security_rules(&self) -> &[SecurityRule] {
        &self.rulebase.security.rules.entry
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Rulebase {
    security: SecuritySection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SecuritySection {
    rules: Entries<SecurityRule>,
}

/// `vsys>entry>zone>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Zone {
    #[serde(rename = "@name")]
    pub name: String,
    network: ZoneNetwork,
    pub description: String,
}

impl Zone {
    pub fn layer3_members(&self) -> &[String] {
        self.network.layer3.as_slice()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ZoneNetwork {
    layer3: Members,
}

/// `vsys>entry>tag>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(rename = "@name")]
    pub name: String,
    pub color: String,
    pub comments: String,
}

/// `vsys>entry>address>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "ip-netmask")]
    pub ip_netmask: String,
    pub fqdn: String,
    pub tag: Members,
    pub description: String,
}

/// `vsys>entry>address-group>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressGroup {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "static")]
    pub static_members: Members,
    pub tag: Members,
    pub description: String,
}

/// `vsys>entry>application-group>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationGroup {
    #[serde(rename = "@name")]
    pub name: String,
    pub members: Members,
    pub tag: Members,
    pub description: String,
}

/// `vsys>entry>service>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(rename = "@name")]
    pub name: String,
    protocol: Protocol,
    pub description: String,
}

impl Service {
    pub fn tcp_port(&self) -> &str {
        &self.protocol.tcp.port
    }

    pub fn udp_port(&self) -> &str {
        &self.protocol.udp.port
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Protocol {
    tcp: PortSpec,
    udp: PortSpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PortSpec {
    port: String,
}

/// `vsys>entry>service-group>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceGroup {
    #[serde(rename = "@name")]
    pub name: String,
    pub members: Members,
    pub tag: Members,
}

/// `vsys>entry>rulebase>security>rules>entry`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecurityRule {
    #[serde(rename = "@name")]
    pub name: String,
    pub from: Members,
    pub to: Members,
    pub source: Members,
    pub destination: Members,
    pub application: Members,
    pub service: Members,
    pub action: String,
    pub description: String,
}

/// Maps the presence of an otherwise-irrelevant element to `true`; any
/// content inside it is discarded. Combined with `#[serde(default)]`, an
/// absent element stays `false`.
fn presence<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}
