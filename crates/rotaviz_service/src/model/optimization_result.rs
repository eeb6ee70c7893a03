use std::collections::BTreeMap;

use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Order id the optimizer puts on stops that are not deliveries, such as the depot.
pub const NON_ORDER_STOP_ID: u64 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub routes: Vec<VehicleRoute>,

    /// Volume allocated per vehicle id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocations: Option<BTreeMap<String, f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_flow: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_demand: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_capacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRoute {
    pub vehicle_id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,

    pub total_volume: f64,

    /// Meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,

    /// Stops in visiting order, depot included
    pub route: Vec<RouteSegment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub latitude: f64,
    pub longitude: f64,

    #[serde(rename = "pedido_id")]
    pub order_id: u64,

    #[serde(rename = "cliente_id", default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    #[serde(rename = "cliente_nome")]
    pub customer_name: String,

    pub volume: f64,

    #[serde(rename = "endereco", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl RouteSegment {
    pub fn is_order_stop(&self) -> bool {
        self.order_id != NON_ORDER_STOP_ID
    }

    pub fn point(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}

impl OptimizationResult {
    /// Checks that every stop can be placed on a map.
    pub fn validate(&self) -> Result<(), String> {
        for route in &self.routes {
            for (index, segment) in route.route.iter().enumerate() {
                let valid_lat = segment.latitude.is_finite() && segment.latitude.abs() <= 90.0;
                let valid_lon = segment.longitude.is_finite() && segment.longitude.abs() <= 180.0;

                if !valid_lat || !valid_lon {
                    return Err(format!(
                        "route of vehicle {} has an invalid coordinate at stop {}: ({}, {})",
                        route.vehicle_id, index, segment.latitude, segment.longitude
                    ));
                }
            }
        }

        Ok(())
    }
}
