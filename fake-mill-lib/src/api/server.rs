use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hyper::body::Incoming;
use hyper::Request;
use hyper_util::rt::{TokioExecutor, TokioIo, TokioTimer};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::{Config, KeepAliveConfig};
use crate::error::{FakeMillError, Result};
use crate::security::{spawn_cleanup_task, RateLimiter};

use super::context::AppContext;
use super::router;

/// Guard to decrement active connections counter when dropped
struct ConnectionGuard(Arc<AtomicUsize>);

impl ConnectionGuard {
    fn new(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::Relaxed);
        Self(counter)
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::Relaxed);
    }
}

/// Bind `config.listen` and serve until a signal arrives or `shutdown` is cancelled.
pub async fn run(config: Arc<Config>, shutdown: CancellationToken) -> Result<()> {
    let listener = TcpListener::bind(config.listen).await.map_err(FakeMillError::Io)?;
    serve(listener, config, shutdown).await
}

/// Serve on an already bound listener.
///
/// The rate limiter and its cleanup task live exactly as long as this call.
pub async fn serve(
    listener: TcpListener,
    config: Arc<Config>,
    shutdown: CancellationToken,
) -> Result<()> {
    let addr = listener.local_addr().map_err(FakeMillError::Io)?;

    let limiter = config.rate_limit.enabled.then(|| {
        Arc::new(RateLimiter::new(config.rate_limit.requests, config.rate_limit.window()))
    });
    let background = CancellationToken::new();
    let cleanup = limiter.as_ref().map(|limiter| {
        spawn_cleanup_task(
            Arc::clone(limiter),
            config.rate_limit.cleanup_interval(),
            background.clone(),
        )
    });

    let ctx = Arc::new(AppContext::new(Arc::clone(&config), limiter)?);
    let builder = connection_builder(&config.timeout.keep_alive);

    // Track active connections for graceful shutdown
    let active_connections = Arc::new(AtomicUsize::new(0));
    let draining = CancellationToken::new();

    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).map_err(|e| {
        FakeMillError::Io(std::io::Error::other(format!("Failed to setup SIGTERM handler: {e}")))
    })?;
    let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).map_err(|e| {
        FakeMillError::Io(std::io::Error::other(format!("Failed to setup SIGINT handler: {e}")))
    })?;

    info!(
        ?addr,
        rate_limit = config.rate_limit.enabled,
        requests = config.rate_limit.requests,
        window_secs = config.rate_limit.window_secs,
        "starting fake mill api"
    );

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("Shutdown requested, initiating graceful shutdown");
                break;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, initiating graceful shutdown");
                break;
            }
            _ = sigint.recv() => {
                info!("Received SIGINT, initiating graceful shutdown");
                break;
            }
            result = listener.accept() => {
                let (stream, peer) = match result {
                    Ok((stream, peer)) => (stream, peer),
                    Err(e) => {
                        warn!(error = %e, "accept error");
                        continue;
                    }
                };

                let guard = ConnectionGuard::new(Arc::clone(&active_connections));
                let builder = builder.clone();
                let ctx = Arc::clone(&ctx);
                let draining = draining.clone();

                tokio::spawn(async move {
                    let _guard = guard;
                    serve_connection(stream, peer, builder, ctx, draining).await;
                });
            }
        }
    }

    drop(listener);
    draining.cancel();
    background.cancel();
    if let Some(handle) = cleanup {
        if let Err(e) = handle.await {
            warn!(error = %e, "rate limit cleanup task ended abnormally");
        }
    }

    info!(
        "Waiting for active connections to finish (timeout: {}s)",
        config.timeout.shutdown_secs
    );
    let shutdown_timeout = Duration::from_secs(config.timeout.shutdown_secs);
    let start = std::time::Instant::now();

    loop {
        let active = active_connections.load(Ordering::Relaxed);
        if active == 0 {
            info!("All connections closed, shutdown complete");
            break;
        }

        if start.elapsed() >= shutdown_timeout {
            warn!(
                active_connections = active,
                "Shutdown timeout reached, {} connections still active", active
            );
            break;
        }

        debug!(active_connections = active, "Waiting for connections to close");
        sleep(Duration::from_millis(100)).await;
    }

    info!("Server stopped");
    Ok(())
}

fn connection_builder(keep_alive: &KeepAliveConfig) -> ConnBuilder<TokioExecutor> {
    let mut builder = ConnBuilder::new(TokioExecutor::new());
    let mut http1 = builder.http1();
    http1.timer(TokioTimer::new()).keep_alive(keep_alive.enabled);
    if keep_alive.enabled {
        http1.header_read_timeout(Duration::from_secs(keep_alive.timeout_secs));
    }
    builder
}

async fn serve_connection(
    stream: TcpStream,
    peer: SocketAddr,
    builder: ConnBuilder<TokioExecutor>,
    ctx: Arc<AppContext>,
    draining: CancellationToken,
) {
    let svc = hyper::service::service_fn(move |req: Request<Incoming>| {
        let ctx = Arc::clone(&ctx);
        async move { Ok::<_, hyper::Error>(router::handle(&req, Some(peer), &ctx)) }
    });

    let conn = builder.serve_connection(TokioIo::new(stream), svc);
    tokio::pin!(conn);

    let mut shutting_down = false;
    loop {
        tokio::select! {
            result = conn.as_mut() => {
                if let Err(e) = result {
                    debug!(?peer, error = %e, "serve_connection error");
                }
                break;
            }
            _ = draining.cancelled(), if !shutting_down => {
                conn.as_mut().graceful_shutdown();
                shutting_down = true;
            }
        }
    }
}
