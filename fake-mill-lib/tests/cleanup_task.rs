use std::sync::Arc;
use std::time::Duration;

use fake_mill_lib::security::rate_limit::{ManualClock, RateLimiter};
use fake_mill_lib::security::spawn_cleanup_task;
use tokio_util::sync::CancellationToken;

#[tokio::test(start_paused = true)]
async fn periodic_sweep_evicts_and_stops_on_cancel(
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let clock = Arc::new(ManualClock::new());
    let limiter = Arc::new(RateLimiter::with_clock(3, Duration::from_secs(1), clock.clone()));
    assert!(limiter.admit("198.51.100.4"));

    let shutdown = CancellationToken::new();
    let handle = spawn_cleanup_task(Arc::clone(&limiter), Duration::from_secs(5), shutdown.clone());

    clock.advance(Duration::from_secs(3));
    tokio::time::sleep(Duration::from_secs(6)).await;
    assert_eq!(limiter.tracked_clients(), 0);

    shutdown.cancel();
    tokio::time::timeout(Duration::from_secs(1), handle).await??;
    Ok(())
}
