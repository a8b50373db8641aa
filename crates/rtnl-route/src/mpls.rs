//! MPLS destination and encapsulation variants.
//!
//! Concrete [`Destination`] and [`Encap`] implementations for MPLS label
//! stacks: `MplsDestination` carries the label stack used as a rewrite
//! destination (RTA_NEWDST for AF_MPLS routes), `MplsEncap` carries the
//! label stack pushed onto IP packets via a lightweight tunnel
//! (RTA_ENCAP with RTA_ENCAP_TYPE = MPLS).

use std::fmt;

use crate::attr::{AttrIter, append_attr};
use crate::encap::{Destination, Encap};
use crate::error::{Error, Result};
use crate::types::mpls::{MplsLabelEntry, lwtunnel_encap, mpls_tunnel};

/// AF_MPLS address family.
pub const AF_MPLS: u16 = 28;

/// An MPLS label-stack destination.
///
/// Labels are stored outer to inner; the bottom-of-stack bit is a property
/// of the encoding, not of the stored stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MplsDestination {
    /// Label stack, outer to inner.
    pub labels: Vec<u32>,
}

impl MplsDestination {
    /// Create a destination from a label stack.
    pub fn new(labels: impl Into<Vec<u32>>) -> Self {
        Self {
            labels: labels.into(),
        }
    }
}

impl Destination for MplsDestination {
    fn family(&self) -> u16 {
        AF_MPLS
    }

    fn decode(&mut self, payload: &[u8]) -> Result<()> {
        if payload.len() < MplsLabelEntry::SIZE {
            return Err(Error::Truncated {
                expected: MplsLabelEntry::SIZE,
                actual: payload.len(),
            });
        }
        if payload.len() % MplsLabelEntry::SIZE != 0 {
            return Err(Error::InvalidAttribute(format!(
                "label stack length {} not a multiple of {}",
                payload.len(),
                MplsLabelEntry::SIZE
            )));
        }

        let mut labels = Vec::with_capacity(payload.len() / MplsLabelEntry::SIZE);
        for chunk in payload.chunks_exact(MplsLabelEntry::SIZE) {
            let entry = MplsLabelEntry::from_bytes(chunk).ok_or(Error::Truncated {
                expected: MplsLabelEntry::SIZE,
                actual: chunk.len(),
            })?;
            labels.push(entry.label());
            if entry.is_bos() {
                break;
            }
        }
        self.labels = labels;
        Ok(())
    }

    fn encode(&self) -> Result<Vec<u8>> {
        if self.labels.is_empty() {
            return Err(Error::InvalidAttribute("empty MPLS label stack".into()));
        }
        let mut data = Vec::with_capacity(self.labels.len() * MplsLabelEntry::SIZE);
        for (i, &label) in self.labels.iter().enumerate() {
            let is_bottom = i == self.labels.len() - 1;
            let entry = if is_bottom {
                MplsLabelEntry::bottom(label, 0)
            } else {
                MplsLabelEntry::new(label)
            };
            data.extend_from_slice(entry.as_bytes());
        }
        Ok(data)
    }
}

impl fmt::Display for MplsDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

/// MPLS encapsulation for IP routes.
///
/// Pushes the label stack onto packets forwarded by the holding route or
/// next hop. The payload encoded and decoded here is the RTA_ENCAP nested
/// attribute stream: MPLS_IPTUNNEL_DST with the label stack, plus an
/// optional MPLS_IPTUNNEL_TTL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MplsEncap {
    /// Label stack, outer to inner.
    pub labels: Vec<u32>,
    /// TTL for the bottom label.
    pub ttl: Option<u8>,
}

impl MplsEncap {
    /// Create an encapsulation from a label stack.
    pub fn new(labels: impl Into<Vec<u32>>) -> Self {
        Self {
            labels: labels.into(),
            ttl: None,
        }
    }

    /// Set the TTL for the bottom label.
    pub fn with_ttl(mut self, ttl: u8) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

impl Encap for MplsEncap {
    fn encap_type(&self) -> u16 {
        lwtunnel_encap::MPLS
    }

    fn decode(&mut self, payload: &[u8]) -> Result<()> {
        let mut labels = Vec::new();
        let mut ttl = None;

        for (attr_type, data) in AttrIter::new(payload) {
            match attr_type {
                mpls_tunnel::DST => {
                    if data.len() % MplsLabelEntry::SIZE != 0 || data.is_empty() {
                        return Err(Error::InvalidAttribute(format!(
                            "bad MPLS_IPTUNNEL_DST length {}",
                            data.len()
                        )));
                    }
                    for chunk in data.chunks_exact(MplsLabelEntry::SIZE) {
                        let entry = MplsLabelEntry::from_bytes(chunk).ok_or(Error::Truncated {
                            expected: MplsLabelEntry::SIZE,
                            actual: chunk.len(),
                        })?;
                        labels.push(entry.label());
                        if entry.is_bos() {
                            break;
                        }
                    }
                }
                mpls_tunnel::TTL => {
                    if data.is_empty() {
                        return Err(Error::InvalidAttribute("empty MPLS_IPTUNNEL_TTL".into()));
                    }
                    ttl = Some(data[0]);
                }
                other => {
                    tracing::trace!(attr = other, "ignoring unknown MPLS tunnel attribute");
                }
            }
        }

        if labels.is_empty() {
            return Err(Error::InvalidAttribute(
                "MPLS encap without MPLS_IPTUNNEL_DST".into(),
            ));
        }

        self.labels = labels;
        self.ttl = ttl;
        Ok(())
    }

    fn encode(&self) -> Result<Vec<u8>> {
        if self.labels.is_empty() {
            return Err(Error::InvalidAttribute("empty MPLS label stack".into()));
        }

        let ttl = self.ttl.unwrap_or(0);
        let mut stack = Vec::with_capacity(self.labels.len() * MplsLabelEntry::SIZE);
        for (i, &label) in self.labels.iter().enumerate() {
            let is_bottom = i == self.labels.len() - 1;
            let entry = if is_bottom {
                MplsLabelEntry::bottom(label, ttl)
            } else {
                MplsLabelEntry::new(label)
            };
            stack.extend_from_slice(entry.as_bytes());
        }

        let mut payload = Vec::new();
        append_attr(&mut payload, mpls_tunnel::DST, &stack);
        if let Some(ttl) = self.ttl {
            append_attr(&mut payload, mpls_tunnel::TTL, &[ttl]);
        }
        Ok(payload)
    }
}

impl fmt::Display for MplsEncap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("mpls ")?;
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}", label)?;
        }
        if let Some(ttl) = self.ttl {
            write!(f, " ttl {}", ttl)?;
        }
        Ok(())
    }
}
