use crate::app_config::AppConfig;
use crate::domain::Category;
use crate::domain::events::Event;
use crate::geolocate::LocationProvider;
use crate::idle;
use crate::nominatim;
use crate::store::ViewSnapshot;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;
use tokio::sync::watch::Receiver as WatchReceiver;
use tokio::task;
use tracing::{error, info, instrument, warn};

/// Watches the store for generation changes (startup, category switches) and
/// runs one acquisition per generation: locate the device, resolve the
/// display address right away and hand the place search to the idle
/// scheduler. Results are tagged with the generation they belong to, so the
/// store can drop whatever a later switch made stale.
#[instrument(skip_all)]
pub async fn pipeline(
    mut snapshots: WatchReceiver<ViewSnapshot>,
    provider: Arc<dyn LocationProvider>,
    client: Client,
    config: Arc<AppConfig>,
    tx: Sender<Event>,
) {
    let mut last_generation = None;

    loop {
        let (generation, category) = {
            let snapshot = snapshots.borrow_and_update();
            (snapshot.generation, snapshot.category)
        };

        if last_generation != Some(generation) {
            last_generation = Some(generation);
            acquire(generation, category, provider.clone(), client.clone(), config.clone(), tx.clone()).await;
        }

        if snapshots.changed().await.is_err() {
            break;
        }
    }
}

#[instrument(skip(provider, client, config, tx))]
async fn acquire(generation: u64, category: Category, provider: Arc<dyn LocationProvider>, client: Client, config: Arc<AppConfig>, tx: Sender<Event>) {
    match provider.current_position().await {
        Ok(coordinates) => {
            info!("📍 Detected coordinates: {}, {}", coordinates.latitude, coordinates.longitude);
            let _ = tx.send(Event::LocationAcquired { generation, coordinates }).await;

            let reverse_client = client.clone();
            let reverse_config = config.clone();
            let reverse_tx = tx.clone();
            task::spawn(async move {
                match nominatim::reverse(&reverse_client, &reverse_config, coordinates).await {
                    Ok(address) => {
                        let _ = reverse_tx.send(Event::AddressResolved { generation, address }).await;
                    }
                    Err(e) => warn!("⚠️ Address lookup failed: {}", e),
                }
            });

            idle::defer(config.idle().fallback_delay(), async move {
                match nominatim::search(&client, &config, category, coordinates).await {
                    Ok(places) => {
                        let _ = tx.send(Event::PlacesFetched { generation, places }).await;
                    }
                    Err(e) => warn!("⚠️ Place search failed: {}", e),
                }
            });
        }
        Err(e) => {
            error!("Location error: {}", e);
            let _ = tx.send(Event::LocationFailed { generation }).await;
        }
    }
}
