//! Tests for the timer combinators, run against a paused Tokio clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use brook::Subject;
use tokio::task::yield_now;
use tokio::time::advance;

fn collector<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl FnMut(&T) + Send + 'static)
{
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |value: &T| sink.lock().unwrap().push(value.clone()))
}

/// Let spawned forwarding tasks catch up with pending channel sends.
async fn settle() {
    for _ in 0..4 {
        yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_debounce_emits_latest_after_quiet_period() {
    let subject = Subject::new();
    let debounced = subject.stream().debounce(Duration::from_millis(100));
    let (seen, cb) = collector::<i32>();
    debounced.subscribe(cb).detach();

    subject.emit(1);
    subject.emit(2);
    subject.emit(3);
    settle().await;

    advance(Duration::from_millis(99)).await;
    settle().await;
    assert!(seen.lock().unwrap().is_empty());

    advance(Duration::from_millis(1)).await;
    settle().await;
    assert_eq!(*seen.lock().unwrap(), vec![3]);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_restarts_timer_on_new_value() {
    let subject = Subject::new();
    let debounced = subject.stream().debounce(Duration::from_millis(100));
    let (seen, cb) = collector::<i32>();
    debounced.subscribe(cb).detach();

    subject.emit(1);
    settle().await;
    advance(Duration::from_millis(60)).await;
    settle().await;

    subject.emit(2);
    settle().await;
    advance(Duration::from_millis(60)).await;
    settle().await;
    // 120ms since the first value, but only 60ms since the second.
    assert!(seen.lock().unwrap().is_empty());

    advance(Duration::from_millis(40)).await;
    settle().await;
    assert_eq!(*seen.lock().unwrap(), vec![2]);
}

#[tokio::test(start_paused = true)]
async fn test_debounce_emits_separate_bursts() {
    let subject = Subject::new();
    let debounced = subject.stream().debounce(Duration::from_millis(100));
    let (seen, cb) = collector::<i32>();
    debounced.subscribe(cb).detach();

    subject.emit(1);
    settle().await;
    advance(Duration::from_millis(100)).await;
    settle().await;

    subject.emit(2);
    settle().await;
    advance(Duration::from_millis(100)).await;
    settle().await;

    assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn test_delay_defers_each_value() {
    let subject = Subject::new();
    let delayed = subject.stream().delay(Duration::from_millis(10));
    let (seen, cb) = collector::<i32>();
    delayed.subscribe(cb).detach();

    subject.emit(1);
    settle().await;
    assert!(seen.lock().unwrap().is_empty());

    advance(Duration::from_millis(10)).await;
    settle().await;
    assert_eq!(*seen.lock().unwrap(), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn test_delay_preserves_order() {
    let subject = Subject::new();
    let delayed = subject.stream().delay(Duration::from_millis(10));
    let (seen, cb) = collector::<i32>();
    delayed.subscribe(cb).detach();

    subject.emit(1);
    subject.emit(2);
    subject.emit(3);
    settle().await;

    advance(Duration::from_millis(10)).await;
    settle().await;
    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn test_delay_then_sample_sees_interim_updates() {
    // The widget's blur handling relies on this: a delayed trigger samples
    // the held value as it is *after* the delay, not when the trigger fired.
    let trigger = Subject::new();
    let source = Subject::new();
    let held = source.stream().hold(false);
    let resolved = trigger
        .stream()
        .delay(Duration::from_millis(10))
        .sample(&held);
    let (seen, cb) = collector::<bool>();
    resolved.subscribe(cb).detach();

    trigger.emit(());
    source.emit(true);
    settle().await;

    advance(Duration::from_millis(10)).await;
    settle().await;
    assert_eq!(*seen.lock().unwrap(), vec![true]);
}
