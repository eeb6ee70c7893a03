use crate::{
    error::ServiceError,
    model::{
        application_state::ApplicationState, customer::Customer,
        optimization_result::OptimizationResult, order::Order, vehicle::Vehicle,
    },
};

/// The remote service that lists the entities and optimizes routes over them.
pub trait RouteService {
    fn fetch_customers(&self) -> impl Future<Output = Result<Vec<Customer>, ServiceError>> + Send;

    fn fetch_orders(&self) -> impl Future<Output = Result<Vec<Order>, ServiceError>> + Send;

    fn fetch_vehicles(&self) -> impl Future<Output = Result<Vec<Vehicle>, ServiceError>> + Send;

    fn optimize_routes(
        &self,
        state: &ApplicationState,
    ) -> impl Future<Output = Result<OptimizationResult, ServiceError>> + Send;
}
