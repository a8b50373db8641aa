//! Kernel-level structures and constants.

pub mod mpls;
pub mod route;
