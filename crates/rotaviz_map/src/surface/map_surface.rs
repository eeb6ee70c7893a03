use geo_types::{LineString, Point};

/// Handle to a primitive drawn on a [`MapSurface`].
///
/// Handles are not `Clone`: whoever holds one owns the drawn primitive and is
/// the only one able to remove it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct LayerHandle(u64);

impl LayerHandle {
    pub fn new(id: u64) -> Self {
        LayerHandle(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerOptions {
    /// Pin color. None draws the surface's default marker.
    pub color: Option<String>,

    /// Short text drawn on the pin
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolylineStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
}

impl PolylineStyle {
    pub const ROUTE_WEIGHT: f64 = 5.0;
    pub const ROUTE_OPACITY: f64 = 0.8;

    pub fn route(color: impl Into<String>) -> Self {
        PolylineStyle {
            color: color.into(),
            weight: Self::ROUTE_WEIGHT,
            opacity: Self::ROUTE_OPACITY,
        }
    }
}

/// Primitive drawing operations of the underlying map.
///
/// Coordinates follow the geo convention: x is the longitude, y the latitude.
pub trait MapSurface {
    fn add_marker(&mut self, coordinate: Point, options: MarkerOptions) -> LayerHandle;

    fn add_polyline(&mut self, path: &LineString, style: PolylineStyle) -> LayerHandle;

    fn remove_layer(&mut self, handle: LayerHandle);

    fn bind_popup(&mut self, handle: &LayerHandle, html: &str);
}
