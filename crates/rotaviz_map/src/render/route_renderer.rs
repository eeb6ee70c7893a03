use geo_types::{Coord, LineString};
use rotaviz_service::model::{
    customer::Customer,
    optimization_result::{OptimizationResult, VehicleRoute},
    vehicle::Vehicle,
};
use tracing::{debug, info, instrument};

use crate::{
    layer_registry::LayerRegistry,
    render::{
        load_tier::{LoadTier, classify, utilization},
        popup::{customer_popup, meters_to_km, order_stop_popup, route_popup},
    },
    surface::map_surface::{MapSurface, MarkerOptions, PolylineStyle},
};

#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub vehicle_id: u64,
    pub vehicle_type: Option<String>,
    pub tier: LoadTier,
    pub utilization: Option<f64>,
    pub total_volume: f64,
    pub capacity: Option<f64>,
    pub distance_km: Option<f64>,
    pub stops: usize,
    pub has_polyline: bool,
}

/// What a render pass drew.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSummary {
    pub markers: usize,
    pub polylines: usize,
    pub routes: Vec<RouteSummary>,
}

/// Draws one marker per customer with a known location.
///
/// Starts by clearing everything previously drawn.
#[instrument(skip_all, level = "debug")]
pub fn render_customers<M: MapSurface + ?Sized>(
    surface: &mut M,
    registry: &mut LayerRegistry,
    customers: &[Customer],
) -> RenderSummary {
    registry.clear_all(surface);

    let mut summary = RenderSummary::default();

    for customer in customers {
        let Some(coordinate) = customer.coordinate() else {
            debug!("Customer {} has no coordinate, skipping", customer.id);
            continue;
        };

        let marker = surface.add_marker(coordinate, MarkerOptions::default());
        surface.bind_popup(&marker, &customer_popup(customer));
        registry.track(marker);
        summary.markers += 1;
    }

    info!(
        "Rendered {} of {} customers",
        summary.markers,
        customers.len()
    );

    summary
}

/// Draws the routes of an optimization result, colored by vehicle load.
///
/// Every stop that carries an order gets a marker. A route gets a polyline when
/// it has more than one stop and its vehicle is among `vehicles`.
#[instrument(skip_all, level = "debug")]
pub fn render_optimization_result<M: MapSurface + ?Sized>(
    surface: &mut M,
    registry: &mut LayerRegistry,
    result: &OptimizationResult,
    vehicles: &[Vehicle],
) -> RenderSummary {
    registry.clear_all(surface);

    let mut summary = RenderSummary::default();

    for route in &result.routes {
        let route_summary = render_route(surface, registry, route, vehicles, &mut summary);
        summary.routes.push(route_summary);
    }

    info!(
        "Rendered {} routes: {} markers, {} polylines",
        summary.routes.len(),
        summary.markers,
        summary.polylines
    );

    summary
}

fn render_route<M: MapSurface + ?Sized>(
    surface: &mut M,
    registry: &mut LayerRegistry,
    route: &VehicleRoute,
    vehicles: &[Vehicle],
    summary: &mut RenderSummary,
) -> RouteSummary {
    let vehicle = vehicles.iter().find(|vehicle| vehicle.id == route.vehicle_id);
    let capacity = vehicle.and_then(Vehicle::capacity);
    let tier = classify(route.total_volume, capacity);
    let color = tier.color();

    if vehicle.is_none() {
        debug!(
            "Vehicle {} is not known, route drawn without load color",
            route.vehicle_id
        );
    }

    let mut path: Vec<Coord> = Vec::with_capacity(route.route.len());
    let mut stops = 0;

    for segment in &route.route {
        if segment.is_order_stop() {
            let marker = surface.add_marker(
                segment.point(),
                MarkerOptions {
                    color: Some(color.to_string()),
                    label: Some(segment.order_id.to_string()),
                },
            );
            surface.bind_popup(&marker, &order_stop_popup(segment));
            registry.track(marker);
            summary.markers += 1;
            stops += 1;
        }

        path.push(segment.point().into());
    }

    let mut has_polyline = false;
    if let Some(vehicle) = vehicle.filter(|_| path.len() > 1) {
        let polyline = surface.add_polyline(&LineString::new(path), PolylineStyle::route(color));
        surface.bind_popup(&polyline, &route_popup(route, vehicle));
        registry.track(polyline);
        summary.polylines += 1;
        has_polyline = true;
    }

    debug!(
        "Route of vehicle {}: {} stops, tier {}",
        route.vehicle_id,
        stops,
        tier.label()
    );

    RouteSummary {
        vehicle_id: route.vehicle_id,
        vehicle_type: vehicle
            .map(|vehicle| vehicle.vehicle_type.clone())
            .or_else(|| route.vehicle_type.clone()),
        tier,
        utilization: utilization(route.total_volume, capacity),
        total_volume: route.total_volume,
        capacity,
        distance_km: route.total_distance.map(meters_to_km),
        stops,
        has_polyline,
    }
}
