pub mod geojson_surface;
pub mod map_surface;
