pub mod client;
pub mod error;
pub mod model;
pub mod route_service;
