use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::RateLimiter;

/// Run [`RateLimiter::cleanup`] every `period` until `shutdown` is cancelled.
///
/// The first sweep happens one full period after spawning. The returned
/// handle completes once the token is cancelled.
pub fn spawn_cleanup_task(
    limiter: Arc<RateLimiter>,
    period: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        debug!(period_secs = period.as_secs(), "Rate limiter cleanup task started");

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Rate limiter cleanup task stopped");
                    break;
                }
                _ = ticker.tick() => {
                    limiter.cleanup();
                }
            }
        }
    })
}
