use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Args;
use geo_types::Point;
use rotaviz_map::surface::geojson_surface::{GeoJsonSurface, MapView};
use tracing::info;

#[derive(Args)]
pub struct MapArgs {
    /// GeoJSON file the drawn map is written to
    #[arg(short, long, default_value = "map.geojson")]
    pub out: PathBuf,

    /// Latitude of the initial view center
    #[arg(long, allow_hyphen_values = true)]
    pub center_lat: Option<f64>,

    /// Longitude of the initial view center
    #[arg(long, allow_hyphen_values = true)]
    pub center_lon: Option<f64>,

    #[arg(long)]
    pub zoom: Option<u8>,
}

impl MapArgs {
    pub fn view(&self) -> MapView {
        let default = MapView::default();

        MapView {
            center: Point::new(
                self.center_lon.unwrap_or(default.center.x()),
                self.center_lat.unwrap_or(default.center.y()),
            ),
            zoom: self.zoom.unwrap_or(default.zoom),
        }
    }
}

pub fn write_map(surface: &GeoJsonSurface, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(64 * 1024, file);
    surface.write_to(&mut writer)?;
    writer.flush()?;

    info!(
        "Map with {} layers written to {}",
        surface.layer_count(),
        path.display()
    );

    Ok(())
}
