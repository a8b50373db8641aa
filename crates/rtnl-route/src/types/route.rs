//! Route enums and constants (RTN_*, RTPROT_*, RT_SCOPE_*, RT_TABLE_*).

/// Route types (RTN_*).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum RouteType {
    #[default]
    Unspec = 0,
    Unicast = 1,
    Local = 2,
    Broadcast = 3,
    Anycast = 4,
    Multicast = 5,
    Blackhole = 6,
    Unreachable = 7,
    Prohibit = 8,
    Throw = 9,
    Nat = 10,
    ExternalResolver = 11,
}

impl From<u8> for RouteType {
    fn from(val: u8) -> Self {
        match val {
            0 => Self::Unspec,
            1 => Self::Unicast,
            2 => Self::Local,
            3 => Self::Broadcast,
            4 => Self::Anycast,
            5 => Self::Multicast,
            6 => Self::Blackhole,
            7 => Self::Unreachable,
            8 => Self::Prohibit,
            9 => Self::Throw,
            10 => Self::Nat,
            11 => Self::ExternalResolver,
            _ => Self::Unspec,
        }
    }
}

impl RouteType {
    /// Get the name of this route type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unspec => "unspec",
            Self::Unicast => "unicast",
            Self::Local => "local",
            Self::Broadcast => "broadcast",
            Self::Anycast => "anycast",
            Self::Multicast => "multicast",
            Self::Blackhole => "blackhole",
            Self::Unreachable => "unreachable",
            Self::Prohibit => "prohibit",
            Self::Throw => "throw",
            Self::Nat => "nat",
            Self::ExternalResolver => "xresolve",
        }
    }
}

/// Route protocols (RTPROT_*), i.e. who installed the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum RouteProtocol {
    #[default]
    Unspec = 0,
    Redirect = 1,
    Kernel = 2,
    Boot = 3,
    Static = 4,
    // Routing daemons
    Gated = 8,
    Ra = 9,
    Mrt = 10,
    Zebra = 11,
    Bird = 12,
    Dnrouted = 13,
    Xorp = 14,
    Ntk = 15,
    Dhcp = 16,
    Mrouted = 17,
    Keepalived = 18,
    Babel = 42,
    Bgp = 186,
    Isis = 187,
    Ospf = 188,
    Rip = 189,
    Eigrp = 192,
}

impl From<u8> for RouteProtocol {
    fn from(val: u8) -> Self {
        match val {
            0 => Self::Unspec,
            1 => Self::Redirect,
            2 => Self::Kernel,
            3 => Self::Boot,
            4 => Self::Static,
            8 => Self::Gated,
            9 => Self::Ra,
            10 => Self::Mrt,
            11 => Self::Zebra,
            12 => Self::Bird,
            13 => Self::Dnrouted,
            14 => Self::Xorp,
            15 => Self::Ntk,
            16 => Self::Dhcp,
            17 => Self::Mrouted,
            18 => Self::Keepalived,
            42 => Self::Babel,
            186 => Self::Bgp,
            187 => Self::Isis,
            188 => Self::Ospf,
            189 => Self::Rip,
            192 => Self::Eigrp,
            _ => Self::Unspec,
        }
    }
}

impl RouteProtocol {
    /// Get the name of this protocol.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unspec => "unspec",
            Self::Redirect => "redirect",
            Self::Kernel => "kernel",
            Self::Boot => "boot",
            Self::Static => "static",
            Self::Gated => "gated",
            Self::Ra => "ra",
            Self::Mrt => "mrt",
            Self::Zebra => "zebra",
            Self::Bird => "bird",
            Self::Dnrouted => "dnrouted",
            Self::Xorp => "xorp",
            Self::Ntk => "ntk",
            Self::Dhcp => "dhcp",
            Self::Mrouted => "mrouted",
            Self::Keepalived => "keepalived",
            Self::Babel => "babel",
            Self::Bgp => "bgp",
            Self::Isis => "isis",
            Self::Ospf => "ospf",
            Self::Rip => "rip",
            Self::Eigrp => "eigrp",
        }
    }
}

/// Route scope (RT_SCOPE_*).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum RouteScope {
    #[default]
    Universe = 0,
    Site = 200,
    Link = 253,
    Host = 254,
    Nowhere = 255,
}

impl From<u8> for RouteScope {
    fn from(val: u8) -> Self {
        match val {
            0 => Self::Universe,
            200 => Self::Site,
            253 => Self::Link,
            254 => Self::Host,
            255 => Self::Nowhere,
            _ => Self::Universe,
        }
    }
}

impl RouteScope {
    /// Get the name of this scope.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Universe => "global",
            Self::Site => "site",
            Self::Link => "link",
            Self::Host => "host",
            Self::Nowhere => "nowhere",
        }
    }
}

/// Route table IDs.
pub mod rt_table {
    pub const UNSPEC: u32 = 0;
    pub const COMPAT: u32 = 252;
    pub const DEFAULT: u32 = 253;
    pub const MAIN: u32 = 254;
    pub const LOCAL: u32 = 255;
}

/// Route message types (RTM_*).
pub mod rtm {
    pub const NEWROUTE: u16 = 24;
    pub const DELROUTE: u16 = 25;
    pub const GETROUTE: u16 = 26;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_type_round_trip() {
        for val in 0..=11u8 {
            let rt = RouteType::from(val);
            assert_eq!(rt as u8, val);
        }
        assert_eq!(RouteType::from(200), RouteType::Unspec);
    }

    #[test]
    fn test_scope_names() {
        assert_eq!(RouteScope::Universe.name(), "global");
        assert_eq!(RouteScope::from(253), RouteScope::Link);
        assert_eq!(RouteScope::from(7), RouteScope::Universe);
    }

    #[test]
    fn test_protocol_names() {
        assert_eq!(RouteProtocol::from(3).name(), "boot");
        assert_eq!(RouteProtocol::from(186).name(), "bgp");
    }
}
