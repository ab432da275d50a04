use crate::app_config::AppConfig;
use crate::connection::SysfsConnectionMetadata;
use crate::domain::events::Event;
use crate::geolocate::IpLocationProvider;
use crate::store::Store;
use crate::ui::renderer::UiCommand;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task;
use tracing::info;

mod app_config;
mod connection;
mod domain;
mod geolocate;
mod idle;
mod nominatim;
mod pipeline;
mod store;
mod ui;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🚻 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load());
    info!("✅  Loaded configuration");

    let nominatim_client = nominatim::new_client(&config)?;
    let provider = Arc::new(IpLocationProvider::new(&config)?);

    let (tx, rx) = mpsc::channel::<Event>(config.core().store_buffer_size());
    let mut store = Store::new(rx);
    let notifier_rx = store.notifier();

    task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized store");

    let pipeline_snapshots = notifier_rx.clone();
    let pipeline_config = config.clone();
    let pipeline_tx = tx.clone();
    task::spawn(async move {
        pipeline::pipeline(pipeline_snapshots, provider, nominatim_client, pipeline_config, pipeline_tx).await;
    });
    info!("✅  Initialized fetch pipeline");

    let metadata = SysfsConnectionMetadata::new(&config);
    let poll_interval = config.connection().poll_interval();
    let connection_tx = tx.clone();
    task::spawn(async move {
        connection::observe(metadata, poll_interval, connection_tx).await;
    });
    info!("✅  Initialized connection observer");

    let (command_tx, command_rx) = mpsc::channel::<UiCommand>(8);
    task::spawn(async move {
        ui::input::read_commands(tx, command_tx).await;
    });
    info!("🚻 {} is up and running", env!("CARGO_PKG_NAME"));

    ui::renderer::run(notifier_rx, command_rx, &config).await;

    Ok(())
}
