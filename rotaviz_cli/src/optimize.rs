use clap::Args;
use rotaviz_map::{
    surface::geojson_surface::GeoJsonSurface, sync::data_sync_controller::DataSyncController,
};
use rotaviz_service::client::RouteServiceClient;

use crate::{
    console_notifier::ConsoleNotifier,
    map_args::{MapArgs, write_map},
    summary_table,
};

#[derive(Args)]
pub struct OptimizeArgs {
    #[command(flatten)]
    map: MapArgs,

    /// Skip the route summary table
    #[arg(long)]
    quiet: bool,
}

pub async fn run(client: RouteServiceClient, args: OptimizeArgs) -> anyhow::Result<()> {
    let controller = DataSyncController::new(
        client,
        GeoJsonSurface::new(args.map.view()),
        ConsoleNotifier,
    );

    controller.load_initial_data().await?;
    let summary = controller.submit_for_optimization().await?;

    if !args.quiet {
        println!("{}", summary_table::render(&summary));
    }

    write_map(&controller.into_surface(), &args.map.out)
}
