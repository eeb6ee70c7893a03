use rotaviz_service::model::{
    customer::Customer,
    optimization_result::{RouteSegment, VehicleRoute},
    vehicle::Vehicle,
};

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn customer_popup(customer: &Customer) -> String {
    format!(
        "<b>{}</b><br>Zone: {}",
        escape_html(&customer.name),
        escape_html(&customer.zone)
    )
}

pub fn order_stop_popup(segment: &RouteSegment) -> String {
    format!(
        "<b>Customer: {}</b><br>Order ID: {}<br>Volume: {}",
        escape_html(&segment.customer_name),
        segment.order_id,
        segment.volume
    )
}

pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

/// Summary of a vehicle's route: load against capacity and distance in km.
pub fn route_popup(route: &VehicleRoute, vehicle: &Vehicle) -> String {
    let load = match vehicle.capacity() {
        Some(capacity) => format!("{} / {}", route.total_volume, capacity),
        None => format!("{} / n/a", route.total_volume),
    };
    let distance = match route.total_distance {
        Some(meters) => format!("{:.2} km", meters_to_km(meters)),
        None => String::from("n/a"),
    };

    format!(
        "<b>Route of vehicle {} ({})</b><br>Load: {}<br>Total distance: {}",
        route.vehicle_id,
        escape_html(&vehicle.vehicle_type),
        load,
        distance
    )
}
