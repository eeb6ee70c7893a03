use std::{collections::BTreeMap, io::Write};

use geo::BoundingRect;
use geo_types::{GeometryCollection, LineString, Point};
use geojson::{Feature, FeatureCollection, JsonObject, feature::Id};
use serde_json::{Value, json};
use tracing::debug;

use crate::surface::map_surface::{LayerHandle, MapSurface, MarkerOptions, PolylineStyle};

/// Where the map is centered before anything is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Point,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        // Maceió
        MapView {
            center: Point::new(-35.7, -9.56),
            zoom: 12,
        }
    }
}

struct DrawnLayer {
    geometry: geo_types::Geometry,
    feature_geometry: geojson::Geometry,
    properties: JsonObject,
}

/// Map surface that keeps every drawn primitive as a GeoJSON feature.
///
/// Markers become points and polylines become line strings. Styling uses the
/// simplestyle property names so the exported collection renders with colors
/// in most GeoJSON viewers.
pub struct GeoJsonSurface {
    view: MapView,
    layers: BTreeMap<u64, DrawnLayer>,
    next_id: u64,
}

impl Default for GeoJsonSurface {
    fn default() -> Self {
        GeoJsonSurface::new(MapView::default())
    }
}

impl GeoJsonSurface {
    pub fn new(view: MapView) -> Self {
        GeoJsonSurface {
            view,
            layers: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn properties(&self, handle: &LayerHandle) -> Option<&JsonObject> {
        self.layers.get(&handle.id()).map(|layer| &layer.properties)
    }

    fn insert(
        &mut self,
        geometry: geo_types::Geometry,
        feature_geometry: geojson::Geometry,
        properties: JsonObject,
    ) -> LayerHandle {
        let id = self.next_id;
        self.next_id += 1;

        self.layers.insert(
            id,
            DrawnLayer {
                geometry,
                feature_geometry,
                properties,
            },
        );

        LayerHandle::new(id)
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .layers
            .iter()
            .map(|(&id, layer)| Feature {
                id: Some(Id::Number(id.into())),
                geometry: Some(layer.feature_geometry.clone()),
                properties: Some(layer.properties.clone()),
                ..Default::default()
            })
            .collect();

        let geometries = self
            .layers
            .values()
            .map(|layer| layer.geometry.clone())
            .collect::<Vec<_>>();
        let bbox = GeometryCollection::from(geometries)
            .bounding_rect()
            .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]);

        let mut foreign_members = JsonObject::new();
        foreign_members.insert(
            String::from("view"),
            json!({
                "center": [self.view.center.x(), self.view.center.y()],
                "zoom": self.view.zoom,
            }),
        );

        FeatureCollection {
            bbox,
            features,
            foreign_members: Some(foreign_members),
        }
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, &self.to_feature_collection())
    }
}

impl MapSurface for GeoJsonSurface {
    fn add_marker(&mut self, coordinate: Point, options: MarkerOptions) -> LayerHandle {
        let mut properties = JsonObject::new();
        properties.insert(String::from("kind"), Value::from("marker"));
        if let Some(color) = options.color {
            properties.insert(String::from("marker-color"), Value::from(color));
        }
        if let Some(label) = options.label {
            properties.insert(String::from("label"), Value::from(label));
        }

        self.insert(
            geo_types::Geometry::Point(coordinate),
            geojson::Geometry::from(&coordinate),
            properties,
        )
    }

    fn add_polyline(&mut self, path: &LineString, style: PolylineStyle) -> LayerHandle {
        let mut properties = JsonObject::new();
        properties.insert(String::from("kind"), Value::from("polyline"));
        properties.insert(String::from("stroke"), Value::from(style.color));
        properties.insert(String::from("stroke-width"), Value::from(style.weight));
        properties.insert(String::from("stroke-opacity"), Value::from(style.opacity));

        self.insert(
            geo_types::Geometry::LineString(path.clone()),
            geojson::Geometry::from(path),
            properties,
        )
    }

    fn remove_layer(&mut self, handle: LayerHandle) {
        if self.layers.remove(&handle.id()).is_none() {
            debug!("GeoJsonSurface: layer {} was already removed", handle.id());
        }
    }

    fn bind_popup(&mut self, handle: &LayerHandle, html: &str) {
        if let Some(layer) = self.layers.get_mut(&handle.id()) {
            layer
                .properties
                .insert(String::from("popup"), Value::from(html));
        }
    }
}
