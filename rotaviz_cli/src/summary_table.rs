use comfy_table::{Table, presets::UTF8_FULL};
use rotaviz_map::render::route_renderer::{RenderSummary, RouteSummary};

fn format_optional(value: Option<f64>, precision: usize) -> String {
    value
        .map(|value| format!("{:.*}", precision, value))
        .unwrap_or_else(|| String::from("-"))
}

fn row(route: &RouteSummary) -> Vec<String> {
    vec![
        route.vehicle_id.to_string(),
        route.vehicle_type.clone().unwrap_or_else(|| String::from("?")),
        route.total_volume.to_string(),
        route
            .capacity
            .map(|capacity| capacity.to_string())
            .unwrap_or_else(|| String::from("-")),
        route
            .utilization
            .map(|utilization| format!("{:.0}%", utilization * 100.0))
            .unwrap_or_else(|| String::from("-")),
        route.tier.label().to_string(),
        format_optional(route.distance_km, 2),
        route.stops.to_string(),
    ]
}

pub fn render(summary: &RenderSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Vehicle",
        "Type",
        "Load",
        "Capacity",
        "Utilization",
        "Status",
        "Distance (km)",
        "Stops",
    ]);

    for route in &summary.routes {
        table.add_row(row(route));
    }

    table
}
