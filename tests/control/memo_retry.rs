//! Memoization and retry behavior.

use crate::common::init_tracing;
use sidekick::{retry, Memo};
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
enum TestError {
    #[error("transient failure on attempt {0}")]
    Transient(usize),
    #[error("permanently broken")]
    Permanent,
}

// ============================================================================
// Memoize
// ============================================================================

#[test]
fn memo_computes_each_key_once() {
    let runs = Arc::new(AtomicUsize::new(0));
    let tally = Arc::clone(&runs);
    let square = Memo::new(move |n: &i64| {
        tally.fetch_add(1, Ordering::SeqCst);
        n * n
    });

    assert_eq!(square.call(5), 25);
    assert_eq!(square.call(5), 25);
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    // A different key computes again.
    assert_eq!(square.call(6), 36);
    assert_eq!(runs.load(Ordering::SeqCst), 2);
}

#[test]
fn memo_string_keys() {
    let upper = Memo::new(|s: &String| s.to_uppercase());
    assert_eq!(upper.call("hi".to_string()), "HI");
    assert_eq!(upper.call("hi".to_string()), "HI");
}

#[test]
fn memo_concurrent_same_key_computes_once() {
    let runs = Arc::new(AtomicUsize::new(0));
    let tally = Arc::clone(&runs);
    let memo = Arc::new(Memo::new(move |n: &i32| {
        tally.fetch_add(1, Ordering::SeqCst);
        n + 100
    }));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let memo = Arc::clone(&memo);
            std::thread::spawn(move || memo.call(1))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 101);
    }
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Retry
// ============================================================================

#[test]
fn retry_returns_first_success() {
    init_tracing();
    let attempts = Cell::new(0usize);
    let result = retry(5, Duration::from_millis(1), || {
        attempts.set(attempts.get() + 1);
        if attempts.get() < 3 {
            Err(TestError::Transient(attempts.get()))
        } else {
            Ok("ok")
        }
    });

    assert_eq!(result, Ok("ok"));
    // Succeeded on attempt 3, so no further attempts were made.
    assert_eq!(attempts.get(), 3);
}

#[test]
fn retry_exhaustion_returns_last_error() {
    init_tracing();
    let attempts = Cell::new(0usize);
    let result: Result<(), TestError> = retry(2, Duration::from_millis(1), || {
        attempts.set(attempts.get() + 1);
        if attempts.get() < 3 {
            Err(TestError::Transient(attempts.get()))
        } else {
            Err(TestError::Permanent)
        }
    });

    // 1 initial attempt + 2 retries, last error wins.
    assert_eq!(attempts.get(), 3);
    assert_eq!(result, Err(TestError::Permanent));
}

#[test]
fn retry_immediate_success_never_sleeps() {
    let start = Instant::now();
    let result: Result<i32, TestError> = retry(5, Duration::from_millis(200), || Ok(1));
    assert_eq!(result, Ok(1));
    assert!(start.elapsed() < Duration::from_millis(100));
}

#[test]
fn retry_sleeps_between_attempts_but_not_after_last() {
    let start = Instant::now();
    let result: Result<(), TestError> =
        retry(2, Duration::from_millis(50), || Err(TestError::Permanent));
    assert_eq!(result, Err(TestError::Permanent));

    // Two sleeps (before retries 1 and 2), none after the final failure.
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(100));
    assert!(elapsed < Duration::from_millis(400));
}
