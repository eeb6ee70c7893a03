pub mod layer_registry;
pub mod render;
pub mod state_store;
pub mod surface;
pub mod sync;

#[cfg(test)]
pub(crate) mod test_utils;
