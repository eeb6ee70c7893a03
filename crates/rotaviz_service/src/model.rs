pub mod application_state;
pub mod customer;
pub mod optimization_result;
pub mod order;
pub mod vehicle;
