use geo_types::Point;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Cliente")]
pub struct Customer {
    pub id: u64,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "zona")]
    pub zone: String,

    /// Outer `None` when the key was absent, `Some(None)` when it was sent as null.
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<f64>")]
    pub latitude: Option<Option<f64>>,

    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<f64>")]
    pub longitude: Option<Option<f64>>,

    #[serde(
        rename = "endereco",
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub address: Option<Option<String>>,

    /// Fields the service sends that this client does not interpret, kept so
    /// the entity is sent back exactly as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Customer {
    /// Location of the customer, only when both latitude and longitude are known.
    pub fn coordinate(&self) -> Option<Point> {
        match (self.latitude.flatten(), self.longitude.flatten()) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(Point::new(lon, lat))
            }
            _ => None,
        }
    }
}
