use crate::connection::ConnectionMetadata;
use crate::domain::ConnectionInfo;
use crate::domain::events::Event;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::time;
use tracing::{debug, instrument};

/// Polls the platform for connection metadata and reports the initial
/// reading plus every change for the lifetime of the view.
#[instrument(skip(provider, tx))]
pub async fn observe(provider: impl ConnectionMetadata + 'static, poll_interval: Duration, tx: Sender<Event>) {
    let mut interval = time::interval(poll_interval);
    let mut last: Option<Option<ConnectionInfo>> = None;

    loop {
        interval.tick().await;

        let info = provider.read();
        if !changed(&mut last, &info) {
            continue;
        }

        debug!("📶 Connection changed: {:?}", info);
        if tx.send(Event::ConnectionChanged(info)).await.is_err() {
            break;
        }
    }
}

fn changed(last: &mut Option<Option<ConnectionInfo>>, next: &Option<ConnectionInfo>) -> bool {
    if last.as_ref() == Some(next) {
        return false;
    }

    *last = Some(next.clone());
    true
}
