use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Veiculo")]
pub struct Vehicle {
    pub id: u64,

    #[serde(rename = "tipo")]
    pub vehicle_type: String,

    /// Kept as the wire number so an integer capacity is sent back as an integer.
    #[serde(
        rename = "capacidade",
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Number>")]
    pub capacity: Option<Option<Number>>,

    #[serde(
        rename = "disponivel",
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<bool>")]
    pub available: Option<Option<bool>>,

    #[serde(
        rename = "zonas_permitidas",
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<Vec<String>>")]
    pub allowed_zones: Option<Option<Vec<String>>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Vehicle {
    pub fn capacity(&self) -> Option<f64> {
        self.capacity
            .as_ref()
            .and_then(Option::as_ref)
            .and_then(Number::as_f64)
    }
}
