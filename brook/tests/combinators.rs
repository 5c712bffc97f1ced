//! Tests for the synchronous stream combinators.

use std::sync::{Arc, Mutex};

use brook::{Subject, Value};

fn collector<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl FnMut(&T) + Send + 'static)
{
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |value: &T| sink.lock().unwrap().push(value.clone()))
}

#[test]
fn test_subject_multicasts_to_all_subscribers() {
    let subject = Subject::new();
    let (first, first_cb) = collector::<i32>();
    let (second, second_cb) = collector::<i32>();
    subject.stream().subscribe(first_cb).detach();
    subject.stream().subscribe(second_cb).detach();

    subject.emit(1);
    subject.emit(2);

    assert_eq!(*first.lock().unwrap(), vec![1, 2]);
    assert_eq!(*second.lock().unwrap(), vec![1, 2]);
}

#[test]
fn test_map_transforms_values() {
    let subject = Subject::new();
    let doubled = subject.stream().map(|v: &i32| v * 2);
    let (seen, cb) = collector::<i32>();
    doubled.subscribe(cb).detach();

    subject.emit(3);
    subject.emit(5);

    assert_eq!(*seen.lock().unwrap(), vec![6, 10]);
}

#[test]
fn test_filter_drops_non_matching_values() {
    let subject = Subject::new();
    let evens = subject.stream().filter(|v: &i32| v % 2 == 0);
    let (seen, cb) = collector::<i32>();
    evens.subscribe(cb).detach();

    for v in 1..=6 {
        subject.emit(v);
    }

    assert_eq!(*seen.lock().unwrap(), vec![2, 4, 6]);
}

#[test]
fn test_filter_map_maps_and_drops() {
    let subject = Subject::new();
    let parsed = subject
        .stream()
        .filter_map(|v: &String| v.parse::<i32>().ok());
    let (seen, cb) = collector::<i32>();
    parsed.subscribe(cb).detach();

    subject.emit("7".to_string());
    subject.emit("not a number".to_string());
    subject.emit("9".to_string());

    assert_eq!(*seen.lock().unwrap(), vec![7, 9]);
}

#[test]
fn test_to_replaces_every_value() {
    let subject = Subject::new();
    let trues = subject.stream().to(true);
    let (seen, cb) = collector::<bool>();
    trues.subscribe(cb).detach();

    subject.emit("anything");
    subject.emit("else");

    assert_eq!(*seen.lock().unwrap(), vec![true, true]);
}

#[test]
fn test_tap_runs_side_effect_and_passes_through() {
    let subject = Subject::new();
    let (taps, tap_cb) = collector::<i32>();
    let tapped = subject.stream().tap(tap_cb);
    let (seen, cb) = collector::<i32>();
    tapped.subscribe(cb).detach();

    subject.emit(4);

    assert_eq!(*taps.lock().unwrap(), vec![4]);
    assert_eq!(*seen.lock().unwrap(), vec![4]);
}

#[test]
fn test_merge_interleaves_sources() {
    let left = Subject::new();
    let right = Subject::new();
    let merged = left.stream().merge(&right.stream());
    let (seen, cb) = collector::<i32>();
    merged.subscribe(cb).detach();

    left.emit(1);
    right.emit(2);
    left.emit(3);

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_distinct_until_changed_suppresses_consecutive_duplicates() {
    let subject = Subject::new();
    let distinct = subject.stream().distinct_until_changed();
    let (seen, cb) = collector::<i32>();
    distinct.subscribe(cb).detach();

    for v in [1, 1, 2, 2, 2, 1] {
        subject.emit(v);
    }

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 1]);
}

#[test]
fn test_dropping_subscription_unsubscribes() {
    let subject = Subject::new();
    let (seen, cb) = collector::<i32>();
    let subscription = subject.stream().subscribe(cb);

    subject.emit(1);
    drop(subscription);
    subject.emit(2);

    assert_eq!(*seen.lock().unwrap(), vec![1]);
}

#[test]
fn test_hold_tracks_latest_value() {
    let subject = Subject::new();
    let value: Value<i32> = subject.stream().hold(0);

    assert_eq!(value.get(), 0);
    subject.emit(5);
    assert_eq!(value.get(), 5);
    subject.emit(-1);
    assert_eq!(value.get(), -1);
}

#[test]
fn test_hold_forwards_changes_without_dedup() {
    let subject = Subject::new();
    let value = subject.stream().hold(0);
    let (seen, cb) = collector::<i32>();
    value.changes().subscribe(cb).detach();

    subject.emit(1);
    subject.emit(1);

    assert_eq!(*seen.lock().unwrap(), vec![1, 1]);
}

#[test]
fn test_value_map_is_eager_and_tracks_changes() {
    let subject = Subject::new();
    let value = subject.stream().hold(2);
    let squared = value.map(|v: &i32| v * v);

    assert_eq!(squared.get(), 4);
    subject.emit(3);
    assert_eq!(squared.get(), 9);
}

#[test]
fn test_sample_reads_latest_held_value() {
    let trigger = Subject::new();
    let source = Subject::new();
    let held = source.stream().hold(false);
    let sampled = trigger.stream().sample(&held);
    let (seen, cb) = collector::<bool>();
    sampled.subscribe(cb).detach();

    trigger.emit(());
    source.emit(true);
    trigger.emit(());

    assert_eq!(*seen.lock().unwrap(), vec![false, true]);
}
