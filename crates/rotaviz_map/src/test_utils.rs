use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use geo_types::{LineString, Point};
use parking_lot::Mutex;
use rotaviz_service::{
    error::ServiceError,
    model::{
        application_state::ApplicationState,
        customer::Customer,
        optimization_result::{OptimizationResult, RouteSegment, VehicleRoute},
        order::Order,
        vehicle::Vehicle,
    },
    route_service::RouteService,
};
use serde_json::{Map, Number};
use tokio::sync::oneshot;

use crate::{
    surface::map_surface::{LayerHandle, MapSurface, MarkerOptions, PolylineStyle},
    sync::notifier::{Notification, NotificationLevel, Notifier},
};

pub fn customer(id: u64, coordinate: Option<(f64, f64)>) -> Customer {
    Customer {
        id,
        name: format!("Customer {}", id),
        zone: String::from("Zona 1"),
        latitude: coordinate.map(|(lat, _)| Some(lat)),
        longitude: coordinate.map(|(_, lon)| Some(lon)),
        address: None,
        extra: Map::new(),
    }
}

pub fn order(id: u64, customer_id: u64, volume: f64) -> Order {
    Order {
        id,
        volume: Number::from_f64(volume).unwrap(),
        customer_id: Some(Some(customer_id)),
        priority: Some(Some(1)),
        status: None,
        extra: Map::new(),
    }
}

pub fn vehicle(id: u64, capacity: Option<f64>) -> Vehicle {
    Vehicle {
        id,
        vehicle_type: String::from("VAN"),
        capacity: capacity.map(Number::from_f64),
        available: Some(Some(true)),
        allowed_zones: None,
        extra: Map::new(),
    }
}

pub fn segment(order_id: u64, latitude: f64, longitude: f64) -> RouteSegment {
    RouteSegment {
        latitude,
        longitude,
        order_id,
        customer_id: None,
        customer_name: format!("Customer of {}", order_id),
        volume: 5.0,
        address: None,
    }
}

pub fn route(vehicle_id: u64, total_volume: f64, segments: Vec<RouteSegment>) -> VehicleRoute {
    VehicleRoute {
        vehicle_id,
        vehicle_type: None,
        total_volume,
        total_distance: None,
        route: segments,
    }
}

#[derive(Debug, Clone)]
pub enum SurfaceEvent {
    AddMarker { id: u64 },
    AddPolyline { id: u64 },
    Remove { id: u64 },
    BindPopup { id: u64 },
}

#[derive(Debug, Clone)]
pub enum RecordedLayer {
    Marker(Point, MarkerOptions),
    Polyline(LineString, PolylineStyle),
}

#[derive(Debug, Clone)]
struct LiveLayer {
    layer: RecordedLayer,
    popup: Option<String>,
}

/// Map surface keeping what is currently drawn plus a log of every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    live: BTreeMap<u64, LiveLayer>,
    events: Vec<SurfaceEvent>,
    next_id: u64,
}

impl RecordingSurface {
    fn insert(&mut self, layer: RecordedLayer) -> u64 {
        self.next_id += 1;
        self.live
            .insert(self.next_id, LiveLayer { layer, popup: None });
        self.next_id
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_ids(&self) -> Vec<u64> {
        self.live.keys().copied().collect()
    }

    pub fn removed_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SurfaceEvent::Remove { .. }))
            .count()
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn popups(&self) -> Vec<String> {
        self.live
            .values()
            .filter_map(|layer| layer.popup.clone())
            .collect()
    }

    pub fn live_markers(&self) -> Vec<(Point, MarkerOptions)> {
        self.live
            .values()
            .filter_map(|layer| match &layer.layer {
                RecordedLayer::Marker(point, options) => Some((*point, options.clone())),
                RecordedLayer::Polyline(..) => None,
            })
            .collect()
    }

    pub fn live_polylines(&self) -> Vec<(LineString, PolylineStyle)> {
        self.live
            .values()
            .filter_map(|layer| match &layer.layer {
                RecordedLayer::Polyline(path, style) => Some((path.clone(), style.clone())),
                RecordedLayer::Marker(..) => None,
            })
            .collect()
    }
}

impl MapSurface for RecordingSurface {
    fn add_marker(&mut self, coordinate: Point, options: MarkerOptions) -> LayerHandle {
        let id = self.insert(RecordedLayer::Marker(coordinate, options));
        self.events.push(SurfaceEvent::AddMarker { id });
        LayerHandle::new(id)
    }

    fn add_polyline(&mut self, path: &LineString, style: PolylineStyle) -> LayerHandle {
        let id = self.insert(RecordedLayer::Polyline(path.clone(), style));
        self.events.push(SurfaceEvent::AddPolyline { id });
        LayerHandle::new(id)
    }

    fn remove_layer(&mut self, handle: LayerHandle) {
        self.live.remove(&handle.id());
        self.events.push(SurfaceEvent::Remove { id: handle.id() });
    }

    fn bind_popup(&mut self, handle: &LayerHandle, html: &str) {
        if let Some(layer) = self.live.get_mut(&handle.id()) {
            layer.popup = Some(html.to_string());
        }
        self.events.push(SurfaceEvent::BindPopup { id: handle.id() });
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn messages(&self, level: NotificationLevel) -> Vec<String> {
        self.notifications
            .lock()
            .iter()
            .filter(|notification| notification.level == level)
            .map(|notification| notification.message.clone())
            .collect()
    }

    pub fn count(&self, level: NotificationLevel) -> usize {
        self.messages(level).len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }
}

#[derive(Debug, Clone)]
pub enum FakeFailure {
    Status(u16, Option<String>),
    Malformed,
    Unreachable,
}

impl FakeFailure {
    fn into_error(self) -> ServiceError {
        match self {
            FakeFailure::Status(status, detail) => ServiceError::Api {
                status,
                message: detail.clone().unwrap_or_default(),
                detail,
            },
            FakeFailure::Malformed => ServiceError::Deserialize(
                serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
            ),
            FakeFailure::Unreachable => ServiceError::InvalidUrl {
                url: String::from("http://127.0.0.1:9"),
                reason: String::from("connection refused"),
            },
        }
    }
}

type FakeResponse<T> = Result<T, FakeFailure>;

/// Route service answering from canned responses.
pub struct FakeRouteService {
    customers: Mutex<FakeResponse<Vec<Customer>>>,
    orders: Mutex<FakeResponse<Vec<Order>>>,
    vehicles: Mutex<FakeResponse<Vec<Vehicle>>>,
    optimization: Mutex<FakeResponse<Vec<VehicleRoute>>>,
    optimize_gate: Mutex<Option<oneshot::Receiver<()>>>,
    optimize_calls: AtomicUsize,
    last_payload: Mutex<Option<ApplicationState>>,
}

impl FakeRouteService {
    pub fn new(customers: Vec<Customer>, vehicles: Vec<Vehicle>) -> Self {
        let orders = customers
            .iter()
            .enumerate()
            .map(|(index, customer)| order(index as u64 + 1, customer.id, 10.0))
            .collect();

        FakeRouteService {
            customers: Mutex::new(Ok(customers)),
            orders: Mutex::new(Ok(orders)),
            vehicles: Mutex::new(Ok(vehicles)),
            optimization: Mutex::new(Ok(vec![])),
            optimize_gate: Mutex::new(None),
            optimize_calls: AtomicUsize::new(0),
            last_payload: Mutex::new(None),
        }
    }

    pub fn fail_customers(&self, failure: FakeFailure) {
        *self.customers.lock() = Err(failure);
    }

    pub fn fail_orders(&self, failure: FakeFailure) {
        *self.orders.lock() = Err(failure);
    }

    pub fn fail_vehicles(&self, failure: FakeFailure) {
        *self.vehicles.lock() = Err(failure);
    }

    pub fn set_optimization(&self, response: FakeResponse<Vec<VehicleRoute>>) {
        *self.optimization.lock() = response;
    }

    /// Makes the next optimization call wait until the returned sender fires.
    pub fn hold_optimization(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.optimize_gate.lock() = Some(rx);
        tx
    }

    pub fn optimize_calls(&self) -> usize {
        self.optimize_calls.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<ApplicationState> {
        self.last_payload.lock().clone()
    }
}

impl RouteService for FakeRouteService {
    async fn fetch_customers(&self) -> Result<Vec<Customer>, ServiceError> {
        let response = self.customers.lock().clone();
        response.map_err(FakeFailure::into_error)
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, ServiceError> {
        let response = self.orders.lock().clone();
        response.map_err(FakeFailure::into_error)
    }

    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, ServiceError> {
        let response = self.vehicles.lock().clone();
        response.map_err(FakeFailure::into_error)
    }

    async fn optimize_routes(
        &self,
        state: &ApplicationState,
    ) -> Result<OptimizationResult, ServiceError> {
        self.optimize_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock() = Some(state.clone());

        let gate = self.optimize_gate.lock().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let response = self.optimization.lock().clone();
        response
            .map(|routes| OptimizationResult {
                message: None,
                routes,
                allocations: None,
                max_flow: None,
                total_demand: None,
                total_capacity: None,
            })
            .map_err(FakeFailure::into_error)
    }
}
