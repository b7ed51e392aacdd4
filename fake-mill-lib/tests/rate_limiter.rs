use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use fake_mill_lib::security::rate_limit::{ManualClock, RateLimitResult, RateLimiter};

const WINDOW: Duration = Duration::from_secs(60);

fn limiter(limit: usize) -> (Arc<ManualClock>, RateLimiter) {
    let clock = Arc::new(ManualClock::new());
    let limiter = RateLimiter::with_clock(limit, WINDOW, clock.clone());
    (clock, limiter)
}

#[test]
fn concurrent_admits_at_one_instant_respect_quota() {
    const LIMIT: usize = 25;
    const THREADS: usize = 16;
    const PER_THREAD: usize = 10;

    let (_clock, limiter) = limiter(LIMIT);
    let limiter = Arc::new(limiter);
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let limiter = Arc::clone(&limiter);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..PER_THREAD).filter(|_| limiter.admit("203.0.113.9")).count()
            })
        })
        .collect();

    let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(admitted, LIMIT);
    assert_eq!(limiter.recorded("203.0.113.9"), LIMIT);
}

#[test]
fn window_slides_after_exactly_one_window() {
    let (clock, limiter) = limiter(3);
    for _ in 0..3 {
        assert!(limiter.admit("client"));
    }
    assert!(!limiter.admit("client"));

    clock.advance(WINDOW - Duration::from_millis(1));
    assert!(!limiter.admit("client"));

    clock.advance(Duration::from_millis(1));
    assert!(limiter.admit("client"));
}

#[test]
fn rejections_are_not_recorded() {
    let (clock, limiter) = limiter(2);
    assert!(limiter.admit("a"));
    clock.advance(Duration::from_secs(10));
    assert!(limiter.admit("a"));
    for _ in 0..50 {
        assert!(!limiter.admit("a"));
    }
    assert_eq!(limiter.recorded("a"), 2);

    // Only the first admission has aged out.
    clock.advance(Duration::from_secs(50));
    assert!(limiter.admit("a"));
    assert!(!limiter.admit("a"));
}

#[test]
fn clients_are_independent() {
    let (_clock, limiter) = limiter(1);
    assert!(limiter.admit("10.0.0.1"));
    assert!(limiter.admit("10.0.0.2"));
    assert!(!limiter.admit("10.0.0.1"));
    assert!(!limiter.admit("10.0.0.2"));
    assert_eq!(limiter.tracked_clients(), 2);
}

#[test]
fn check_reports_quota_details() {
    let (clock, limiter) = limiter(2);

    assert_eq!(limiter.check("x"), RateLimitResult::Allowed { limit: 2, remaining: 1 });
    clock.advance(Duration::from_secs(20));
    assert_eq!(limiter.check("x"), RateLimitResult::Allowed { limit: 2, remaining: 0 });

    let result = limiter.check("x");
    assert!(result.is_limited());
    assert_eq!(result.remaining(), 0);
    assert_eq!(result.reset_after(), Some(Duration::from_secs(40)));
}

#[test]
fn cleanup_evicts_stale_clients_and_keeps_fresh_ones() {
    let (clock, limiter) = limiter(5);
    assert!(limiter.admit("stale"));

    clock.advance(WINDOW * 2 + Duration::from_millis(1));
    assert!(limiter.admit("fresh"));

    assert_eq!(limiter.cleanup(), 1);
    assert!(!limiter.is_tracked("stale"));
    assert!(limiter.is_tracked("fresh"));
    assert_eq!(limiter.recorded("fresh"), 1);
}

#[test]
fn cleanup_within_two_windows_is_a_no_op() {
    let (clock, limiter) = limiter(5);
    assert!(limiter.admit("client"));
    clock.advance(WINDOW + Duration::from_secs(30));

    assert_eq!(limiter.cleanup(), 0);
    assert!(limiter.is_tracked("client"));
}

#[test]
fn cleanup_runs_alongside_admissions() {
    let (clock, limiter) = limiter(1_000);
    let limiter = Arc::new(limiter);
    for i in 0..100 {
        assert!(limiter.admit(&format!("old-{i}")));
    }
    clock.advance(WINDOW * 3);

    let admitting = {
        let limiter = Arc::clone(&limiter);
        thread::spawn(move || (0..500).filter(|_| limiter.admit("busy")).count())
    };
    let removed: usize = (0..20).map(|_| limiter.cleanup()).sum();

    assert_eq!(admitting.join().unwrap(), 500);
    assert_eq!(removed, 100);
    assert_eq!(limiter.tracked_clients(), 1);
}
