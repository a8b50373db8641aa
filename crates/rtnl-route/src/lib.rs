//! Typed route model for rtnetlink.
//!
//! This crate models an operating-system routing-table entry as exchanged
//! over rtnetlink: [`Route`] with its next hops, metrics, flags and
//! polymorphic destination/encapsulation payloads, together with the
//! classification and formatting rules a message codec relies on. The
//! socket layer and the full message codec live elsewhere; this crate is
//! the in-memory shape they populate and read back.
//!
//! # Features
//!
//! - `output` - JSON rendering of routes and next hops
//! - `full` - All features enabled
//!
//! # Example
//!
//! ```
//! use rtnl_route::{IntRouteMetric, NextHopFlag, Route, RouteMetricType};
//! use rtnl_route::types::route::rt_table;
//!
//! let mut route = Route {
//!     link_index: 2,
//!     dst: Some("192.168.2.0".parse().unwrap()),
//!     dst_len: 24,
//!     gw: Some("192.168.1.1".parse().unwrap()),
//!     table: rt_table::MAIN,
//!     ..Route::default()
//! };
//! route.set_flag(NextHopFlag::Onlink);
//! route.add_int_metric(IntRouteMetric::new(RouteMetricType::MTU, 1400));
//!
//! assert_eq!(route.list_flags(), vec!["onlink"]);
//! assert!(route.to_string().contains("Metrics: [mtu 1400]"));
//! ```

pub mod attr;
pub mod encap;
mod error;
pub mod metrics;
pub mod mpls;
#[cfg(feature = "output")]
pub mod output;
pub mod route;
pub mod types;

pub use attr::{AttrIter, NlAttr};
pub use encap::{Destination, Encap};
pub use error::{Error, Result};
pub use metrics::{IntRouteMetric, MetricClass, RouteMetricType, StrRouteMetric};
pub use mpls::{MplsDestination, MplsEncap};
pub use route::{NextHopFlag, NexthopInfo, Route, RouteUpdate};
pub use types::route::{RouteProtocol, RouteScope, RouteType};
