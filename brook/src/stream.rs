//! Subjects, streams, and the synchronous combinators.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

type Callback<T> = Box<dyn FnMut(&T) + Send>;

struct Subscribers<T> {
    next_id: usize,
    entries: Vec<(usize, Callback<T>)>,
}

impl<T> Subscribers<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

/// Recover the guard from a poisoned mutex; subscriber lists stay usable
/// even if a callback panicked mid-dispatch.
fn lock_subscribers<T>(inner: &Mutex<Subscribers<T>>) -> MutexGuard<'_, Subscribers<T>> {
    match inner.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// A multicast event stream.
///
/// Cloning a `Stream` clones the handle, not the graph: all clones share the
/// same subscriber list. Values are pushed to subscribers synchronously, in
/// subscription order.
///
/// Callbacks must not subscribe to or unsubscribe from the stream that is
/// currently notifying them; the subscriber list is locked during dispatch.
pub struct Stream<T> {
    inner: Arc<Mutex<Subscribers<T>>>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stream(..)")
    }
}

/// An event source that pushes values into its [`Stream`].
pub struct Subject<T> {
    stream: Stream<T>,
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            stream: self.stream.clone(),
        }
    }
}

impl<T> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subject(..)")
    }
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Subject<T> {
    /// Create a new subject with no subscribers.
    pub fn new() -> Self {
        Self {
            stream: Stream {
                inner: Arc::new(Mutex::new(Subscribers::new())),
            },
        }
    }

    /// Push a value to every subscriber of the subject's stream.
    pub fn emit(&self, value: T) {
        self.stream.push(&value);
    }

    /// The stream side of this subject.
    pub fn stream(&self) -> Stream<T> {
        self.stream.clone()
    }
}

/// Handle for an active subscription.
///
/// Dropping the handle unsubscribes; [`Subscription::detach`] leaves the
/// callback installed for as long as the stream lives. Graph-internal wiring
/// detaches, since those observers live exactly as long as the graph.
#[must_use = "dropping a subscription unsubscribes; call detach() to keep it"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Keep the callback installed for the stream's lifetime.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subscription(..)")
    }
}

impl<T> Stream<T> {
    /// Register a callback invoked for every value pushed into this stream.
    pub fn subscribe(&self, callback: impl FnMut(&T) + Send + 'static) -> Subscription
    where
        T: 'static,
    {
        let id = {
            let mut subscribers = lock_subscribers(&self.inner);
            let id = subscribers.next_id;
            subscribers.next_id += 1;
            subscribers.entries.push((id, Box::new(callback)));
            id
        };
        let weak: Weak<Mutex<Subscribers<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    lock_subscribers(&inner)
                        .entries
                        .retain(|(entry_id, _)| *entry_id != id);
                }
            })),
        }
    }

    pub(crate) fn push(&self, value: &T) {
        let mut subscribers = lock_subscribers(&self.inner);
        for (_, callback) in subscribers.entries.iter_mut() {
            callback(value);
        }
    }
}

impl<T: Clone + Send + 'static> Stream<T> {
    /// Derive a stream by transforming every value.
    pub fn map<U: Send + 'static>(
        &self,
        mut f: impl FnMut(&T) -> U + Send + 'static,
    ) -> Stream<U> {
        let subject = Subject::new();
        let out = subject.stream();
        self.subscribe(move |value| subject.emit(f(value))).detach();
        out
    }

    /// Derive a stream that replaces every value with `value`.
    pub fn to<U: Clone + Send + 'static>(&self, value: U) -> Stream<U> {
        self.map(move |_| value.clone())
    }

    /// Derive a stream keeping only values matching the predicate.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool + Send + 'static) -> Stream<T> {
        let subject = Subject::new();
        let out = subject.stream();
        self.subscribe(move |value| {
            if predicate(value) {
                subject.emit(value.clone());
            }
        })
        .detach();
        out
    }

    /// Map and filter in one step.
    pub fn filter_map<U: Send + 'static>(
        &self,
        mut f: impl FnMut(&T) -> Option<U> + Send + 'static,
    ) -> Stream<U> {
        let subject = Subject::new();
        let out = subject.stream();
        self.subscribe(move |value| {
            if let Some(mapped) = f(value) {
                subject.emit(mapped);
            }
        })
        .detach();
        out
    }

    /// Run a side effect for every value, passing the value through.
    pub fn tap(&self, mut f: impl FnMut(&T) + Send + 'static) -> Stream<T> {
        self.map(move |value| {
            f(value);
            value.clone()
        })
    }

    /// Merge two streams into one carrying values from either.
    pub fn merge(&self, other: &Stream<T>) -> Stream<T> {
        let subject = Subject::new();
        let out = subject.stream();
        let forward = subject.clone();
        self.subscribe(move |value| forward.emit(value.clone()))
            .detach();
        other
            .subscribe(move |value| subject.emit(value.clone()))
            .detach();
        out
    }

    /// Suppress values equal to the previously emitted one.
    pub fn distinct_until_changed(&self) -> Stream<T>
    where
        T: PartialEq,
    {
        let subject = Subject::new();
        let out = subject.stream();
        let mut last: Option<T> = None;
        self.subscribe(move |value| {
            if last.as_ref() != Some(value) {
                last = Some(value.clone());
                subject.emit(value.clone());
            }
        })
        .detach();
        out
    }
}
