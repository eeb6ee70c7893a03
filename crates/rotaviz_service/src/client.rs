use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    error::ServiceError,
    model::{
        application_state::ApplicationState, customer::Customer,
        optimization_result::OptimizationResult, order::Order, vehicle::Vehicle,
    },
    route_service::RouteService,
};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

pub const CUSTOMERS_PATH: &str = "clientes";
pub const ORDERS_PATH: &str = "pedidos";
pub const VEHICLES_PATH: &str = "veiculos";
pub const OPTIMIZE_ROUTES_PATH: &str = "optimize-routes";

pub struct RouteServiceClientParams {
    pub base_url: String,

    /// Network-level timeout applied to every request. None waits forever.
    pub timeout: Option<Duration>,
}

impl Default for RouteServiceClientParams {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

pub struct RouteServiceClient {
    base_url: Url,
    client: reqwest::Client,
}

impl RouteServiceClient {
    pub fn new(params: RouteServiceClientParams) -> Result<Self, ServiceError> {
        let base_url = parse_base_url(&params.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.base_url
            .join(path)
            .map_err(|err| ServiceError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: err.to_string(),
            })
    }

    #[instrument(skip(self), level = "debug")]
    async fn get_list<T>(&self, path: &str) -> Result<Vec<T>, ServiceError>
    where
        T: DeserializeOwned,
    {
        let response = self.client.get(self.endpoint(path)?).send().await?;
        let items: Vec<T> = handle_response(response).await?;

        debug!("RouteService: fetched {} items from /{}", items.len(), path);

        Ok(items)
    }
}

impl RouteService for RouteServiceClient {
    async fn fetch_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        self.get_list(CUSTOMERS_PATH).await
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, ServiceError> {
        self.get_list(ORDERS_PATH).await
    }

    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, ServiceError> {
        self.get_list(VEHICLES_PATH).await
    }

    #[instrument(skip_all, level = "debug")]
    async fn optimize_routes(
        &self,
        state: &ApplicationState,
    ) -> Result<OptimizationResult, ServiceError> {
        let response = self
            .client
            .post(self.endpoint(OPTIMIZE_ROUTES_PATH)?)
            .json(state)
            .send()
            .await?;

        let result: OptimizationResult = handle_response(response).await?;

        debug!(
            "RouteService: optimization returned {} routes",
            result.routes.len()
        );

        Ok(result)
    }
}

/// Parses the base url, making sure it ends with a slash so that joined
/// endpoints keep any path prefix.
fn parse_base_url(base_url: &str) -> Result<Url, ServiceError> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };

    Url::parse(&normalized).map_err(|err| ServiceError::InvalidUrl {
        url: base_url.to_string(),
        reason: err.to_string(),
    })
}

async fn handle_response<T>(response: reqwest::Response) -> Result<T, ServiceError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        Ok(serde_json::from_slice(&bytes)?)
    } else {
        let message = String::from_utf8_lossy(&bytes).into_owned();
        Err(ServiceError::Api {
            status: status.as_u16(),
            detail: error_detail(&bytes),
            message,
        })
    }
}

fn error_detail(body: &[u8]) -> Option<String> {
    let body: ErrorBody = serde_json::from_slice(body).ok()?;

    match body.detail? {
        Value::Null => None,
        Value::String(detail) if detail.trim().is_empty() => None,
        Value::String(detail) => Some(detail),
        // Validation errors come back as a list of objects
        other => Some(other.to_string()),
    }
}
