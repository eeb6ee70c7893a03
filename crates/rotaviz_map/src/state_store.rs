use std::sync::Arc;

use parking_lot::RwLock;
use rotaviz_service::model::application_state::ApplicationState;
use tracing::debug;

/// Holds the last successfully fetched [`ApplicationState`].
///
/// The state is only ever swapped as a whole: readers get a shared snapshot and
/// never observe a mix of old and new collections.
#[derive(Debug, Default)]
pub struct StateStore {
    current: RwLock<Arc<ApplicationState>>,
}

impl StateStore {
    pub fn new(state: ApplicationState) -> Self {
        StateStore {
            current: RwLock::new(Arc::new(state)),
        }
    }

    pub fn get(&self) -> Arc<ApplicationState> {
        Arc::clone(&self.current.read())
    }

    pub fn replace(&self, state: ApplicationState) {
        debug!(
            "StateStore: replacing state ({} customers, {} orders, {} vehicles)",
            state.customers.len(),
            state.orders.len(),
            state.vehicles.len()
        );

        *self.current.write() = Arc::new(state);
    }
}
