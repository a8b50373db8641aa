//! JSON rendering for routes and next hops.
//!
//! Available behind the `output` feature. The shape mirrors the text form:
//! optional fields are omitted rather than emitted as null, and multipath
//! next hops nest as an array.

use serde_json::{Value, json};

use crate::route::{NexthopInfo, Route};

impl Route {
    /// Render this route as a JSON value.
    pub fn to_json(&self) -> Value {
        let mut obj = json!({
            "type": self.route_type.name(),
            "protocol": self.protocol.name(),
            "scope": self.scope.name(),
            "table": self.table,
            "flags": self.list_flags(),
        });

        match self.mpls_dst {
            Some(label) => obj["dst"] = json!(label),
            None => obj["dst"] = json!(self.destination_str()),
        }

        if self.multipath.is_empty() {
            obj["ifindex"] = json!(self.link_index);
            if let Some(ref gw) = self.gw {
                obj["gateway"] = json!(gw.to_string());
            }
        } else {
            let hops: Vec<Value> = self.multipath.iter().map(|nh| nh.to_json()).collect();
            obj["nexthops"] = json!(hops);
        }

        if let Some(ref src) = self.src {
            obj["src"] = json!(src.to_string());
        }
        if let Some(ref new_dst) = self.new_dst {
            obj["newdst"] = json!(new_dst.to_string());
        }
        if let Some(ref encap) = self.encap {
            obj["encap"] = json!(encap.to_string());
        }
        if !self.int_metrics.is_empty() || !self.str_metrics.is_empty() {
            obj["metrics"] = json!(self.list_metrics());
        }

        obj
    }
}

impl NexthopInfo {
    /// Render this next hop as a JSON value.
    pub fn to_json(&self) -> Value {
        let mut obj = json!({
            "ifindex": self.link_index,
            "weight": self.weight(),
            "flags": self.list_flags(),
        });

        if let Some(ref gw) = self.gw {
            obj["gateway"] = json!(gw.to_string());
        }
        if let Some(ref new_dst) = self.new_dst {
            obj["newdst"] = json!(new_dst.to_string());
        }
        if let Some(ref encap) = self.encap {
            obj["encap"] = json!(encap.to_string());
        }

        obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{IntRouteMetric, RouteMetricType};
    use crate::types::route::rt_table;

    #[test]
    fn test_route_to_json() {
        let mut route = Route {
            link_index: 2,
            dst: Some("10.0.0.0".parse().unwrap()),
            dst_len: 24,
            gw: Some("10.0.0.1".parse().unwrap()),
            table: rt_table::MAIN,
            ..Route::default()
        };
        route.add_int_metric(IntRouteMetric::new(RouteMetricType::MTU, 1400));

        let v = route.to_json();
        assert_eq!(v["dst"], "10.0.0.0/24");
        assert_eq!(v["gateway"], "10.0.0.1");
        assert_eq!(v["ifindex"], 2);
        assert_eq!(v["table"], 254);
        assert_eq!(v["metrics"][0], "mtu 1400");
        assert!(v.get("src").is_none());
    }

    #[test]
    fn test_multipath_to_json() {
        let route = Route {
            multipath: vec![NexthopInfo {
                link_index: 3,
                hops: 1,
                gw: Some("10.0.0.2".parse().unwrap()),
                ..NexthopInfo::default()
            }],
            ..Route::default()
        };

        let v = route.to_json();
        assert!(v.get("ifindex").is_none());
        assert_eq!(v["nexthops"][0]["ifindex"], 3);
        assert_eq!(v["nexthops"][0]["weight"], 2);
        assert_eq!(v["nexthops"][0]["gateway"], "10.0.0.2");
    }
}
