use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use parking_lot::Mutex;
use rotaviz_service::{
    model::application_state::ApplicationState, route_service::RouteService,
};
use tracing::{error, info, instrument};

use crate::{
    layer_registry::LayerRegistry,
    render::route_renderer::{RenderSummary, render_customers, render_optimization_result},
    state_store::StateStore,
    surface::map_surface::MapSurface,
    sync::{
        error::SyncError,
        notifier::{Notification, Notifier},
    },
};

struct Canvas<M> {
    surface: M,
    registry: LayerRegistry,
}

/// Releases the in-flight flag when the optimization call ends, whatever the outcome.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Drives the two interactions with the route service and redraws the map
/// with their outcome.
///
/// Only one optimization may be in flight: triggering another one before the
/// first completes fails with [`SyncError::OptimizationInProgress`] and sends
/// nothing.
pub struct DataSyncController<S, M, N> {
    service: S,
    notifier: N,
    store: StateStore,
    canvas: Mutex<Canvas<M>>,
    optimization_in_flight: AtomicBool,
}

impl<S, M, N> DataSyncController<S, M, N>
where
    S: RouteService,
    M: MapSurface,
    N: Notifier,
{
    pub fn new(service: S, surface: M, notifier: N) -> Self {
        DataSyncController {
            service,
            notifier,
            store: StateStore::default(),
            canvas: Mutex::new(Canvas {
                surface,
                registry: LayerRegistry::new(),
            }),
            optimization_in_flight: AtomicBool::new(false),
        }
    }

    pub fn state(&self) -> Arc<ApplicationState> {
        self.store.get()
    }

    pub fn tracked_layers(&self) -> usize {
        self.canvas.lock().registry.len()
    }

    pub fn is_optimizing(&self) -> bool {
        self.optimization_in_flight.load(Ordering::Acquire)
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        f(&self.canvas.lock().surface)
    }

    pub fn into_surface(self) -> M {
        self.canvas.into_inner().surface
    }

    /// Fetches customers, orders and vehicles concurrently and draws the customers.
    ///
    /// The state is only replaced when all three calls succeed.
    #[instrument(skip_all, level = "debug")]
    pub async fn load_initial_data(&self) -> Result<RenderSummary, SyncError> {
        let fetched = futures::future::try_join3(
            self.service.fetch_customers(),
            self.service.fetch_orders(),
            self.service.fetch_vehicles(),
        )
        .await;

        let (customers, orders, vehicles) = match fetched {
            Ok(entities) => entities,
            Err(err) => return Err(self.fail(SyncError::InitialLoad(err))),
        };

        info!(
            "Loaded {} customers, {} orders and {} vehicles",
            customers.len(),
            orders.len(),
            vehicles.len()
        );

        self.store.replace(ApplicationState::new(customers, orders, vehicles));
        let state = self.store.get();

        let summary = {
            let mut canvas = self.canvas.lock();
            let Canvas { surface, registry } = &mut *canvas;
            render_customers(surface, registry, &state.customers)
        };

        self.notifier.notify(Notification::success(format!(
            "Loaded {} customers, {} orders and {} vehicles",
            state.customers.len(),
            state.orders.len(),
            state.vehicles.len()
        )));

        Ok(summary)
    }

    /// Sends the current state to the optimizer and draws the returned routes.
    ///
    /// On failure the state and the drawn layers are left untouched.
    #[instrument(skip_all, level = "debug")]
    pub async fn submit_for_optimization(&self) -> Result<RenderSummary, SyncError> {
        let Some(_guard) = InFlightGuard::acquire(&self.optimization_in_flight) else {
            return Err(self.fail(SyncError::OptimizationInProgress));
        };

        let state = self.store.get();

        self.notifier.notify(Notification::info("Submitting data for optimization"));

        let result = match self.service.optimize_routes(&state).await {
            Ok(result) => result,
            Err(err) => return Err(self.fail(SyncError::from_optimization(err))),
        };

        if let Err(reason) = result.validate() {
            return Err(self.fail(SyncError::MalformedResult(reason)));
        }

        let summary = {
            let mut canvas = self.canvas.lock();
            let Canvas { surface, registry } = &mut *canvas;
            render_optimization_result(surface, registry, &result, &state.vehicles)
        };

        self.notifier.notify(Notification::success(format!(
            "Optimization finished, {} routes drawn",
            summary.routes.len()
        )));

        Ok(summary)
    }

    fn fail(&self, err: SyncError) -> SyncError {
        error!("{}", err);
        self.notifier.notify(Notification::failure(err.to_string()));
        err
    }
}
