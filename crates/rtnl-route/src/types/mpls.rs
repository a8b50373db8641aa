//! MPLS structures for netlink.
//!
//! Kernel-level layout of an MPLS label stack entry plus the attribute and
//! encapsulation-type constants used around it.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// MPLS label entry (struct mpls_label).
///
/// The entry is a big-endian 32-bit value with:
/// - Bits 31-12: Label (20 bits)
/// - Bits 11-9: Traffic Class (3 bits)
/// - Bit 8: Bottom-of-Stack (S bit)
/// - Bits 7-0: TTL (8 bits)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
pub struct MplsLabelEntry {
    /// Big-endian encoded label entry.
    pub entry: u32,
}

impl MplsLabelEntry {
    /// Size of this structure.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Create a new label entry (not bottom of stack).
    ///
    /// Creates an entry with TC=0, S=0, TTL=0.
    pub fn new(label: u32) -> Self {
        Self {
            entry: ((label & 0xFFFFF) << 12).to_be(),
        }
    }

    /// Create a bottom-of-stack entry with TTL.
    ///
    /// Creates an entry with TC=0, S=1, and specified TTL.
    pub fn bottom(label: u32, ttl: u8) -> Self {
        let entry = ((label & 0xFFFFF) << 12) | (1 << 8) | (ttl as u32);
        Self {
            entry: entry.to_be(),
        }
    }

    /// Get the label value (20 bits).
    pub fn label(&self) -> u32 {
        (u32::from_be(self.entry) >> 12) & 0xFFFFF
    }

    /// Get the traffic class (3 bits).
    pub fn tc(&self) -> u8 {
        ((u32::from_be(self.entry) >> 9) & 0x7) as u8
    }

    /// Check if this is the bottom of stack.
    pub fn is_bos(&self) -> bool {
        (u32::from_be(self.entry) & 0x100) != 0
    }

    /// Get the TTL value.
    pub fn ttl(&self) -> u8 {
        (u32::from_be(self.entry) & 0xFF) as u8
    }

    /// Convert to bytes.
    pub fn as_bytes(&self) -> &[u8] {
        <Self as IntoBytes>::as_bytes(self)
    }

    /// Parse from bytes.
    pub fn from_bytes(data: &[u8]) -> Option<&Self> {
        Self::ref_from_prefix(data).map(|(r, _)| r).ok()
    }
}

/// MPLS tunnel attributes (MPLS_IPTUNNEL_*).
pub mod mpls_tunnel {
    /// Unspecified.
    pub const UNSPEC: u16 = 0;
    /// Destination label stack.
    pub const DST: u16 = 1;
    /// TTL.
    pub const TTL: u16 = 2;
}

/// Lightweight tunnel encapsulation types (LWTUNNEL_ENCAP_*).
pub mod lwtunnel_encap {
    /// No encapsulation.
    pub const NONE: u16 = 0;
    /// MPLS encapsulation.
    pub const MPLS: u16 = 1;
    /// IP encapsulation.
    pub const IP: u16 = 2;
    /// ILA encapsulation.
    pub const ILA: u16 = 3;
    /// IPv6 encapsulation.
    pub const IP6: u16 = 4;
    /// Segment Routing IPv6.
    pub const SEG6: u16 = 5;
    /// BPF encapsulation.
    pub const BPF: u16 = 6;
    /// Segment Routing IPv6 local.
    pub const SEG6_LOCAL: u16 = 7;
}

/// Special MPLS label values.
pub mod mpls_label {
    /// IPv4 Explicit NULL.
    pub const IPV4_EXPLICIT_NULL: u32 = 0;
    /// Router Alert.
    pub const ROUTER_ALERT: u32 = 1;
    /// IPv6 Explicit NULL.
    pub const IPV6_EXPLICIT_NULL: u32 = 2;
    /// Implicit NULL (penultimate hop popping).
    pub const IMPLICIT_NULL: u32 = 3;
    /// Maximum valid label value.
    pub const MAX: u32 = 0xFFFFF; // 2^20 - 1 = 1048575
}
