use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum OrderStatus {
    #[serde(rename = "PENDENTE")]
    Pending,
    #[serde(rename = "ENTREGUE")]
    Delivered,
    #[serde(rename = "CANCELADO")]
    Cancelled,
    #[serde(rename = "EM_TRANSPORTE")]
    InTransit,
    /// A status this client does not know, sent back as received.
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Pedido")]
pub struct Order {
    pub id: u64,

    /// Kept as the wire number so an integer volume is sent back as an integer.
    pub volume: Number,

    #[serde(
        rename = "cliente_id",
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<u64>")]
    pub customer_id: Option<Option<u64>>,

    #[serde(
        rename = "prioridade",
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<i64>")]
    pub priority: Option<Option<i64>>,

    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<OrderStatus>")]
    pub status: Option<Option<OrderStatus>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
