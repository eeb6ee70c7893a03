use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{customer::Customer, order::Order, vehicle::Vehicle};

/// Snapshot of the entities fetched from the service. Serialized as is, it is
/// the body of the optimization request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "OptimizationRequest")]
pub struct ApplicationState {
    #[serde(rename = "clientes")]
    pub customers: Vec<Customer>,

    #[serde(rename = "pedidos")]
    pub orders: Vec<Order>,

    #[serde(rename = "veiculos")]
    pub vehicles: Vec<Vehicle>,
}

impl ApplicationState {
    pub fn new(customers: Vec<Customer>, orders: Vec<Order>, vehicles: Vec<Vehicle>) -> Self {
        Self {
            customers,
            orders,
            vehicles,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.orders.is_empty() && self.vehicles.is_empty()
    }
}
