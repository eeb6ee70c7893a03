pub mod load_tier;
pub mod popup;
pub mod route_renderer;
