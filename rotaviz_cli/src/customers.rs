use rotaviz_map::{
    surface::geojson_surface::GeoJsonSurface, sync::data_sync_controller::DataSyncController,
};
use rotaviz_service::client::RouteServiceClient;

use crate::{
    console_notifier::ConsoleNotifier,
    map_args::{MapArgs, write_map},
};

pub async fn run(client: RouteServiceClient, map: MapArgs) -> anyhow::Result<()> {
    let controller =
        DataSyncController::new(client, GeoJsonSurface::new(map.view()), ConsoleNotifier);

    controller.load_initial_data().await?;

    write_map(&controller.into_surface(), &map.out)
}
