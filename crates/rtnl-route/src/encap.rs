//! Capability traits for family- and type-specific route payloads.
//!
//! Two route attributes have a shape the core cannot know in advance: the
//! rewrite destination (RTA_NEWDST, selected by address family) and the
//! encapsulation (RTA_ENCAP, selected by RTA_ENCAP_TYPE). Concrete variants
//! implement the traits here; [`Route`](crate::route::Route) and
//! [`NexthopInfo`](crate::route::NexthopInfo) hold any conforming
//! implementation as an exclusively-owned trait object.
//!
//! Encode and decode must be mutually inverse: decoding the bytes produced
//! by `encode` and re-encoding must reproduce the same bytes. A decode
//! failure is a real error for the codec to propagate, never grounds for
//! handing back a partially-valid value.

use std::fmt;

use crate::error::Result;

/// A family-specific route destination payload.
///
/// Used for destination rewriting (RTA_NEWDST); the address family tag tells
/// the codec which concrete variant to decode into.
pub trait Destination: fmt::Debug + fmt::Display {
    /// Address family tag (AF_*) this destination belongs to.
    fn family(&self) -> u16;

    /// Decode from an attribute payload, replacing the current value.
    fn decode(&mut self, payload: &[u8]) -> Result<()>;

    /// Encode to an attribute payload.
    fn encode(&self) -> Result<Vec<u8>>;
}

/// An encapsulation payload attached to a route or next hop.
///
/// The type tag (LWTUNNEL_ENCAP_*) travels separately as RTA_ENCAP_TYPE and
/// selects the concrete variant to decode the RTA_ENCAP payload into.
pub trait Encap: fmt::Debug + fmt::Display {
    /// Encapsulation type tag (LWTUNNEL_ENCAP_*).
    fn encap_type(&self) -> u16;

    /// Decode from an RTA_ENCAP payload, replacing the current value.
    fn decode(&mut self, payload: &[u8]) -> Result<()>;

    /// Encode to an RTA_ENCAP payload.
    fn encode(&self) -> Result<Vec<u8>>;
}
