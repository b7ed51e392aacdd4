//! Sliding-window rate limiter keyed by client identifier.

use ahash::AHashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::clock::{Clock, SystemClock};

/// Result of a rate limit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateLimitResult {
    /// Request was admitted and recorded.
    Allowed {
        /// Maximum number of requests allowed in the window
        limit: usize,
        /// Admissions left for this client in the current window
        remaining: usize,
    },
    /// Request was rejected and nothing was recorded.
    Limited {
        /// Maximum number of requests allowed in the window
        limit: usize,
        /// Time until the oldest live admission leaves the window
        reset_after: Duration,
    },
}

impl RateLimitResult {
    /// Returns true if the request is allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitResult::Allowed { .. })
    }

    /// Returns true if the request is limited.
    pub fn is_limited(&self) -> bool {
        matches!(self, RateLimitResult::Limited { .. })
    }

    pub fn limit(&self) -> usize {
        match self {
            RateLimitResult::Allowed { limit, .. } => *limit,
            RateLimitResult::Limited { limit, .. } => *limit,
        }
    }

    /// Remaining admissions; always 0 when limited.
    pub fn remaining(&self) -> usize {
        match self {
            RateLimitResult::Allowed { remaining, .. } => *remaining,
            RateLimitResult::Limited { .. } => 0,
        }
    }

    /// Get the reset duration if limited.
    pub fn reset_after(&self) -> Option<Duration> {
        match self {
            RateLimitResult::Limited { reset_after, .. } => Some(*reset_after),
            RateLimitResult::Allowed { .. } => None,
        }
    }
}

/// Per-client sliding-window rate limiter.
///
/// Each client owns the list of instants at which it was admitted. A request
/// is admitted when fewer than `limit` of those instants are younger than
/// `window`.
///
/// # Locking
///
/// Admission is two-phase. A shared read lock counts the live admissions and
/// rejects early when the client is already at its quota. Otherwise the write
/// lock is taken, the window is filtered again (other callers may have been
/// admitted in between) and the decision and append happen under that same
/// lock. The quota therefore holds under any number of concurrent callers.
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use fake_mill_lib::security::rate_limit::RateLimiter;
///
/// let limiter = RateLimiter::new(60, Duration::from_secs(60));
/// if !limiter.admit("203.0.113.7") {
///     // respond with 429 Too Many Requests
/// }
/// ```
pub struct RateLimiter {
    windows: RwLock<AHashMap<String, Vec<Instant>>>,
    limit: usize,
    window: Duration,
    clock: Arc<dyn Clock>,
}

impl RateLimiter {
    /// Create a limiter driven by the system clock.
    ///
    /// # Panics
    /// Panics if `limit` is zero or `window` is zero.
    pub fn new(limit: usize, window: Duration) -> Self {
        Self::with_clock(limit, window, Arc::new(SystemClock))
    }

    /// Create a limiter driven by the given clock.
    ///
    /// # Panics
    /// Panics if `limit` is zero or `window` is zero.
    pub fn with_clock(limit: usize, window: Duration, clock: Arc<dyn Clock>) -> Self {
        assert!(limit > 0, "rate limiter limit must be positive");
        assert!(!window.is_zero(), "rate limiter window must be positive");
        Self { windows: RwLock::new(AHashMap::new()), limit, window, clock }
    }

    /// Admit or reject one request from `client_id`.
    ///
    /// Returns `true` when the request was counted.
    pub fn admit(&self, client_id: &str) -> bool {
        self.check(client_id).is_allowed()
    }

    /// Same decision as [`admit`](Self::admit), with quota details for response headers.
    pub fn check(&self, client_id: &str) -> RateLimitResult {
        let now = self.clock.now();

        {
            let windows = self.read();
            if let Some(timestamps) = windows.get(client_id) {
                let live = timestamps.iter().filter(|t| self.is_live(now, **t)).count();
                if live >= self.limit {
                    return self.limited(now, timestamps);
                }
            }
        }

        let mut windows = self.write();
        let Some(timestamps) = windows.get_mut(client_id) else {
            windows.insert(client_id.to_owned(), vec![now]);
            return RateLimitResult::Allowed {
                limit: self.limit,
                remaining: self.limit.saturating_sub(1),
            };
        };
        timestamps.retain(|t| self.is_live(now, *t));

        if timestamps.len() >= self.limit {
            return self.limited(now, timestamps);
        }

        timestamps.push(now);
        RateLimitResult::Allowed {
            limit: self.limit,
            remaining: self.limit.saturating_sub(timestamps.len()),
        }
    }

    /// Evict admissions older than twice the window and forget clients left empty.
    ///
    /// Returns the number of clients removed. The write lock is only taken
    /// when a shared scan found something stale.
    pub fn cleanup(&self) -> usize {
        let now = self.clock.now();
        let horizon = self.window.saturating_mul(2);
        let is_stale = |t: &Instant| now.saturating_duration_since(*t) >= horizon;

        let has_work = self.read().values().any(|timestamps| timestamps.iter().any(is_stale));
        if !has_work {
            return 0;
        }

        let mut windows = self.write();
        let before = windows.len();
        windows.retain(|_, timestamps| {
            timestamps.retain(|t| !is_stale(t));
            !timestamps.is_empty()
        });
        let removed = before.saturating_sub(windows.len());

        if removed > 0 {
            debug!(
                removed_clients = removed,
                active_clients = windows.len(),
                "Rate limiter cleanup completed"
            );
        }

        removed
    }

    /// Number of clients currently holding a window.
    pub fn tracked_clients(&self) -> usize {
        self.read().len()
    }

    /// Whether `client_id` currently holds a window.
    pub fn is_tracked(&self, client_id: &str) -> bool {
        self.read().contains_key(client_id)
    }

    /// Admissions currently recorded for `client_id`, stale ones included.
    pub fn recorded(&self, client_id: &str) -> usize {
        self.read().get(client_id).map_or(0, Vec::len)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    fn is_live(&self, now: Instant, admitted_at: Instant) -> bool {
        now.saturating_duration_since(admitted_at) < self.window
    }

    fn limited(&self, now: Instant, timestamps: &[Instant]) -> RateLimitResult {
        let reset_after = timestamps
            .iter()
            .filter(|t| self.is_live(now, **t))
            .min()
            .map(|oldest| self.window.saturating_sub(now.saturating_duration_since(*oldest)))
            .unwrap_or(self.window);

        RateLimitResult::Limited { limit: self.limit, reset_after }
    }

    fn read(&self) -> RwLockReadGuard<'_, AHashMap<String, Vec<Instant>>> {
        self.windows.read().unwrap_or_else(|poisoned| {
            warn!("Rate limiter lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, AHashMap<String, Vec<Instant>>> {
        self.windows.write().unwrap_or_else(|poisoned| {
            warn!("Rate limiter lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limit", &self.limit)
            .field("window", &self.window)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
