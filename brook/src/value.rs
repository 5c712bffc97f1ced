//! Held values: a stream plus its most recent value.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::stream::Stream;

/// A stream's most recent value, readable at any time.
///
/// A `Value` is produced by [`Stream::hold`]: it starts at `initial` and
/// tracks every value its source stream emits. [`Value::changes`] exposes the
/// underlying change stream; changes are forwarded as-is, without
/// deduplication.
pub struct Value<T> {
    current: Arc<Mutex<T>>,
    changes: Stream<T>,
}

impl<T> Clone for Value<T> {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
            changes: self.changes.clone(),
        }
    }
}

impl<T> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Value(..)")
    }
}

impl<T: Clone + Send + 'static> Value<T> {
    /// A clone of the current value.
    pub fn get(&self) -> T {
        match self.current.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The stream of changes to this value.
    pub fn changes(&self) -> Stream<T> {
        self.changes.clone()
    }

    /// Derive a value by transforming this one.
    ///
    /// The derived value is computed eagerly from the current value and then
    /// recomputed on every change.
    pub fn map<U: Clone + Send + 'static>(
        &self,
        mut f: impl FnMut(&T) -> U + Send + 'static,
    ) -> Value<U> {
        let initial = f(&self.get());
        self.changes.map(f).hold(initial)
    }
}

impl<T: Clone + Send + 'static> Stream<T> {
    /// Hold this stream's latest value, starting from `initial`.
    pub fn hold(&self, initial: T) -> Value<T> {
        let current = Arc::new(Mutex::new(initial));
        let subject = crate::stream::Subject::new();
        let changes = subject.stream();
        let store = Arc::clone(&current);
        self.subscribe(move |value| {
            match store.lock() {
                Ok(mut guard) => *guard = value.clone(),
                Err(poisoned) => *poisoned.into_inner() = value.clone(),
            }
            subject.emit(value.clone());
        })
        .detach();
        Value { current, changes }
    }

    /// On every value from this stream, emit the current value of `sampled`.
    ///
    /// The triggering value itself is discarded.
    pub fn sample<U: Clone + Send + 'static>(&self, sampled: &Value<U>) -> Stream<U> {
        let sampled = sampled.clone();
        self.map(move |_| sampled.get())
    }
}
