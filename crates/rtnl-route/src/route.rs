//! Route and next-hop model.
//!
//! [`Route`] is the aggregate entity a codec populates when decoding an
//! RTM_NEWROUTE/RTM_DELROUTE attribute stream and reads back when encoding
//! one. A route is either single-path (the `gw` field is meaningful and
//! `multipath` is empty) or multipath (`multipath` is non-empty and the
//! single `gw` is ignored for display and semantics). The wire format can
//! legitimately carry both in transitional states, so both being populated
//! is tolerated; multipath takes precedence.
//!
//! The `Display` implementations render a deterministic single-line form
//! used for diagnostics and test fixtures. The segment order is a display
//! contract, not a wire contract.

use std::fmt;
use std::net::IpAddr;

use crate::encap::{Destination, Encap};
use crate::metrics::{IntRouteMetric, StrRouteMetric};
use crate::types::route::{RouteProtocol, RouteScope, RouteType};

/// Next-hop flags (RTNH_F_*).
///
/// Routes and next hops store their flag field as a raw `u32` so that bits
/// newer than this enum survive a decode/encode round trip; only display
/// name lookup is limited to the bits named here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum NextHopFlag {
    Dead = 0x1,
    Pervasive = 0x2,
    Onlink = 0x4,
    Offload = 0x8,
    Linkdown = 0x10,
    Unresolved = 0x20,
    Trap = 0x40,
}

impl NextHopFlag {
    /// All named flags, in ascending bit order.
    pub const ALL: [Self; 7] = [
        Self::Dead,
        Self::Pervasive,
        Self::Onlink,
        Self::Offload,
        Self::Linkdown,
        Self::Unresolved,
        Self::Trap,
    ];

    /// Get the name of this flag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dead => "dead",
            Self::Pervasive => "pervasive",
            Self::Onlink => "onlink",
            Self::Offload => "offload",
            Self::Linkdown => "linkdown",
            Self::Unresolved => "unresolved",
            Self::Trap => "trap",
        }
    }
}

/// Names of the known flags set in `flags`, in ascending bit order.
///
/// Unknown bits stay in the integer value but have no name to list.
fn list_flags(flags: u32) -> Vec<&'static str> {
    NextHopFlag::ALL
        .iter()
        .filter(|f| flags & **f as u32 != 0)
        .map(|f| f.name())
        .collect()
}

fn fmt_addr(addr: &Option<IpAddr>) -> String {
    match addr {
        Some(a) => a.to_string(),
        None => "<nil>".to_string(),
    }
}

/// One next hop of a multipath route.
#[derive(Debug, Default)]
pub struct NexthopInfo {
    /// Outgoing interface index.
    pub link_index: u32,
    /// On-wire weight minus one.
    ///
    /// The wire encoding's minimum weight is 1, so storing weight-1 makes
    /// zero the natural default. The +1 translation happens only at the
    /// presentation boundary; re-encoding writes this field as-is.
    pub hops: u8,
    /// Gateway address.
    pub gw: Option<IpAddr>,
    /// Next-hop flags (RTNH_F_*), unknown bits preserved.
    pub flags: u32,
    /// Rewrite destination, exclusively owned by this next hop.
    pub new_dst: Option<Box<dyn Destination>>,
    /// Encapsulation, exclusively owned by this next hop.
    pub encap: Option<Box<dyn Encap>>,
}

impl NexthopInfo {
    /// Create an empty next hop.
    pub fn new() -> Self {
        Self::default()
    }

    /// The relative weight as it appears on the wire and in display.
    pub fn weight(&self) -> u32 {
        self.hops as u32 + 1
    }

    /// Set a flag.
    pub fn set_flag(&mut self, flag: NextHopFlag) {
        self.flags |= flag as u32;
    }

    /// Clear a flag.
    pub fn clear_flag(&mut self, flag: NextHopFlag) {
        self.flags &= !(flag as u32);
    }

    /// Names of the set known flags, in ascending bit order.
    pub fn list_flags(&self) -> Vec<&'static str> {
        list_flags(self.flags)
    }
}

impl fmt::Display for NexthopInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Ifindex: {}", self.link_index)?;
        if let Some(ref new_dst) = self.new_dst {
            write!(f, " NewDst: {}", new_dst)?;
        }
        if let Some(ref encap) = self.encap {
            write!(f, " Encap: {}", encap)?;
        }
        write!(f, " Weight: {}", self.weight())?;
        write!(f, " Gw: {}", fmt_addr(&self.gw))?;
        write!(f, " Flags: [{}]}}", self.list_flags().join(" "))
    }
}

/// A routing-table entry.
#[derive(Debug, Default)]
pub struct Route {
    /// Outgoing interface index.
    pub link_index: u32,
    /// Input interface index.
    pub ilink_index: u32,
    /// Administrative scope.
    pub scope: RouteScope,
    /// Destination network address; `None` means default route.
    pub dst: Option<IpAddr>,
    /// Destination prefix length.
    pub dst_len: u8,
    /// Preferred source address.
    pub src: Option<IpAddr>,
    /// Single-path gateway; ignored when `multipath` is non-empty.
    pub gw: Option<IpAddr>,
    /// Multipath next hops; empty means single-path.
    pub multipath: Vec<NexthopInfo>,
    /// Who installed the route.
    pub protocol: RouteProtocol,
    /// Route priority (metric).
    pub priority: u32,
    /// Routing table ID.
    pub table: u32,
    /// Route type (unicast, blackhole, ...).
    pub route_type: RouteType,
    /// Type of service.
    pub tos: u8,
    /// Route flags, unknown bits preserved.
    pub flags: u32,
    /// MPLS label destination; takes display precedence over `dst`.
    pub mpls_dst: Option<u32>,
    /// Rewrite destination, exclusively owned by this route.
    pub new_dst: Option<Box<dyn Destination>>,
    /// Encapsulation, exclusively owned by this route.
    pub encap: Option<Box<dyn Encap>>,
    /// String-valued metrics, in append order.
    pub str_metrics: Vec<StrRouteMetric>,
    /// Integer-valued metrics, in append order.
    pub int_metrics: Vec<IntRouteMetric>,
}

impl Route {
    /// Create an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this is a default route (no destination network).
    pub fn is_default(&self) -> bool {
        self.dst.is_none() && self.mpls_dst.is_none()
    }

    /// Check if this is a multipath route.
    pub fn is_multipath(&self) -> bool {
        !self.multipath.is_empty()
    }

    /// Set a flag.
    pub fn set_flag(&mut self, flag: NextHopFlag) {
        self.flags |= flag as u32;
    }

    /// Clear a flag.
    pub fn clear_flag(&mut self, flag: NextHopFlag) {
        self.flags &= !(flag as u32);
    }

    /// Names of the set known flags, in ascending bit order.
    pub fn list_flags(&self) -> Vec<&'static str> {
        list_flags(self.flags)
    }

    /// Append an integer metric.
    pub fn add_int_metric(&mut self, metric: IntRouteMetric) {
        self.int_metrics.push(metric);
    }

    /// Append a string metric.
    pub fn add_str_metric(&mut self, metric: StrRouteMetric) {
        self.str_metrics.push(metric);
    }

    /// Rendered metrics, integer metrics first then string metrics, each
    /// collection in append order.
    pub fn list_metrics(&self) -> Vec<String> {
        let mut metrics = Vec::with_capacity(self.int_metrics.len() + self.str_metrics.len());
        for m in &self.int_metrics {
            metrics.push(m.to_string());
        }
        for m in &self.str_metrics {
            metrics.push(m.to_string());
        }
        metrics
    }

    /// Format the destination network as CIDR, or "default" when absent.
    pub fn destination_str(&self) -> String {
        match self.dst {
            Some(dst) => format!("{}/{}", dst, self.dst_len),
            None => "default".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        if self.multipath.is_empty() {
            write!(f, "Ifindex: {} ", self.link_index)?;
        }
        match self.mpls_dst {
            Some(label) => write!(f, "Dst: {}", label)?,
            None => write!(f, "Dst: {}", self.destination_str())?,
        }
        if let Some(ref new_dst) = self.new_dst {
            write!(f, " NewDst: {}", new_dst)?;
        }
        if let Some(ref encap) = self.encap {
            write!(f, " Encap: {}", encap)?;
        }
        write!(f, " Src: {}", fmt_addr(&self.src))?;
        if self.multipath.is_empty() {
            write!(f, " Gw: {}", fmt_addr(&self.gw))?;
        } else {
            let hops: Vec<String> = self.multipath.iter().map(|nh| nh.to_string()).collect();
            write!(f, " Gw: [{}]", hops.join(" "))?;
        }
        write!(f, " Flags: [{}]", self.list_flags().join(" "))?;
        if !self.int_metrics.is_empty() || !self.str_metrics.is_empty() {
            write!(f, " Metrics: [{}]", self.list_metrics().join(" "))?;
        }
        write!(f, " Table: {}}}", self.table)
    }
}

/// A route change notification: RTM_NEWROUTE or RTM_DELROUTE plus the route.
#[derive(Debug, Default)]
pub struct RouteUpdate {
    /// Message type ([`rtm::NEWROUTE`](crate::types::route::rtm::NEWROUTE)
    /// or [`rtm::DELROUTE`](crate::types::route::rtm::DELROUTE)).
    pub msg_type: u16,
    /// The route that changed.
    pub route: Route,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::RouteMetricType;
    use crate::mpls::{MplsDestination, MplsEncap};
    use crate::types::route::{rt_table, rtm};
    use std::net::Ipv4Addr;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_set_clear_flag_round_trip() {
        for flag in NextHopFlag::ALL {
            for initial in [0u32, 0x7F, 0x8000_0001] {
                let mut route = Route {
                    flags: initial,
                    ..Route::default()
                };
                let was_set = initial & flag as u32 != 0;
                route.set_flag(flag);
                assert_ne!(route.flags & flag as u32, 0);
                route.clear_flag(flag);
                assert_eq!(route.flags & flag as u32, 0);
                if !was_set {
                    assert_eq!(route.flags, initial);
                }
            }
        }
    }

    #[test]
    fn test_set_flag_is_idempotent() {
        let mut route = Route::new();
        route.set_flag(NextHopFlag::Onlink);
        let once = route.flags;
        route.set_flag(NextHopFlag::Onlink);
        assert_eq!(route.flags, once);
        route.clear_flag(NextHopFlag::Dead);
        assert_eq!(route.flags, once);
    }

    #[test]
    fn test_list_flags_order_and_unknown_bits() {
        let mut route = Route::new();
        route.set_flag(NextHopFlag::Linkdown);
        route.set_flag(NextHopFlag::Dead);
        assert_eq!(route.list_flags(), vec!["dead", "linkdown"]);

        // Unknown bit: preserved in the value, absent from the names.
        route.flags |= 0x8000_0000;
        assert_eq!(route.list_flags(), vec!["dead", "linkdown"]);
        assert_ne!(route.flags & 0x8000_0000, 0);
    }

    #[test]
    fn test_list_flags_skips_unset_bits() {
        let route = Route::new();
        assert!(route.list_flags().is_empty());
    }

    #[test]
    fn test_nexthop_weight_is_hops_plus_one() {
        let nh = NexthopInfo::new();
        assert_eq!(nh.weight(), 1);
        assert!(nh.to_string().contains("Weight: 1"));

        let nh = NexthopInfo {
            hops: 4,
            ..NexthopInfo::default()
        };
        assert_eq!(nh.weight(), 5);
        assert!(nh.to_string().contains("Weight: 5"));
    }

    #[test]
    fn test_single_path_display() {
        let route = Route {
            link_index: 2,
            dst: Some(ip("10.0.0.0")),
            dst_len: 24,
            gw: Some(ip("10.0.0.1")),
            table: rt_table::MAIN,
            ..Route::default()
        };

        assert_eq!(
            route.to_string(),
            "{Ifindex: 2 Dst: 10.0.0.0/24 Src: <nil> Gw: 10.0.0.1 Flags: [] Table: 254}"
        );
        assert!(!route.to_string().contains("Metrics:"));
    }

    #[test]
    fn test_display_with_metric() {
        let mut route = Route {
            link_index: 2,
            dst: Some(ip("10.0.0.0")),
            dst_len: 24,
            gw: Some(ip("10.0.0.1")),
            table: rt_table::MAIN,
            ..Route::default()
        };
        route.add_int_metric(IntRouteMetric::new(RouteMetricType::MTU, 1400));

        let s = route.to_string();
        assert!(s.contains("Metrics: [mtu 1400]"), "got {}", s);
    }

    #[test]
    fn test_metrics_order_int_then_str() {
        let mut route = Route::new();
        route.add_str_metric(StrRouteMetric::new(RouteMetricType::CC_ALGO, "cubic"));
        route.add_int_metric(IntRouteMetric::new(RouteMetricType::MTU, 1400));
        route.add_int_metric(IntRouteMetric::new(RouteMetricType::HOPLIMIT, 64));

        assert_eq!(
            route.list_metrics(),
            vec!["mtu 1400", "hoplimit 64", "congctl cubic"]
        );
    }

    #[test]
    fn test_multipath_display_precedence() {
        let route = Route {
            multipath: vec![
                NexthopInfo {
                    link_index: 3,
                    hops: 0,
                    gw: Some(ip("10.0.0.2")),
                    ..NexthopInfo::default()
                },
                NexthopInfo {
                    link_index: 4,
                    hops: 2,
                    gw: Some(ip("10.0.0.3")),
                    ..NexthopInfo::default()
                },
            ],
            table: rt_table::MAIN,
            ..Route::default()
        };

        let s = route.to_string();
        // Per-hop ifindex replaces the route-level one.
        assert!(!s.starts_with("{Ifindex:"), "got {}", s);
        assert!(
            s.contains(
                "Gw: [{Ifindex: 3 Weight: 1 Gw: 10.0.0.2 Flags: []} \
                 {Ifindex: 4 Weight: 3 Gw: 10.0.0.3 Flags: []}]"
            ),
            "got {}",
            s
        );
    }

    #[test]
    fn test_mpls_dst_display_precedence() {
        let route = Route {
            dst: Some(ip("10.0.0.0")),
            dst_len: 24,
            mpls_dst: Some(100),
            ..Route::default()
        };
        let s = route.to_string();
        assert!(s.contains("Dst: 100 "), "got {}", s);
        assert!(!s.contains("10.0.0.0"), "got {}", s);
    }

    #[test]
    fn test_default_route_display() {
        let route = Route {
            gw: Some(ip("192.168.1.1")),
            table: rt_table::MAIN,
            ..Route::default()
        };
        assert!(route.is_default());
        assert!(route.to_string().contains("Dst: default"));
    }

    #[test]
    fn test_new_dst_and_encap_display() {
        let route = Route {
            link_index: 2,
            new_dst: Some(Box::new(MplsDestination::new(vec![200, 300]))),
            encap: Some(Box::new(MplsEncap::new(vec![100]).with_ttl(64))),
            ..Route::default()
        };
        let s = route.to_string();
        assert!(s.contains("NewDst: 200/300"), "got {}", s);
        assert!(s.contains("Encap: mpls 100 ttl 64"), "got {}", s);
    }

    #[test]
    fn test_nexthop_owns_new_dst_and_encap() {
        let nh = NexthopInfo {
            link_index: 7,
            new_dst: Some(Box::new(MplsDestination::new(vec![50]))),
            encap: Some(Box::new(MplsEncap::new(vec![60]))),
            ..NexthopInfo::default()
        };
        let s = nh.to_string();
        assert!(s.contains("NewDst: 50"), "got {}", s);
        assert!(s.contains("Encap: mpls 60"), "got {}", s);
    }

    #[test]
    fn test_route_update() {
        let update = RouteUpdate {
            msg_type: rtm::NEWROUTE,
            route: Route {
                dst: Some(ip("10.1.0.0")),
                dst_len: 16,
                ..Route::default()
            },
        };
        assert_eq!(update.msg_type, 24);
        assert_eq!(update.route.destination_str(), "10.1.0.0/16");
    }

    #[test]
    fn test_ipv4_fixture_addresses() {
        // IpAddr parses and displays dotted quads unchanged.
        assert_eq!(ip("10.0.0.1"), IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
    }
}
