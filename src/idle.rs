use std::future::Future;
use std::time::Duration;
use tokio::task::{self, JoinHandle};
use tokio::time::sleep;

const SETTLE_ROUNDS: usize = 16;

/// Runs a job once the executor has had a chance to drain more urgent work,
/// or after the fallback delay, whichever comes first. Best effort; there is
/// no true idle signal to wait on.
pub fn defer<F>(fallback_delay: Duration, job: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    task::spawn(async move {
        tokio::select! {
            _ = settle() => {}
            _ = sleep(fallback_delay) => {}
        }

        job.await;
    })
}

async fn settle() {
    for _ in 0..SETTLE_ROUNDS {
        task::yield_now().await;
    }
}
