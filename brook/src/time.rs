//! Timer combinators backed by the Tokio clock.
//!
//! Both combinators spawn a forwarding task on the ambient runtime, so the
//! stream they derive from must be built inside a runtime context. Under
//! `tokio::time::pause` the timers follow the test clock, which is how the
//! widget's timing behavior is tested deterministically.

use std::time::Duration;

use log::trace;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep, sleep_until};

use crate::stream::{Stream, Subject};

impl<T: Clone + Send + 'static> Stream<T> {
    /// Emit only the latest value once the stream has been quiet for
    /// `duration`.
    ///
    /// Trailing-edge debounce: every upstream value restarts the timer, and
    /// the most recent value is emitted when the timer fires.
    pub fn debounce(&self, duration: Duration) -> Stream<T> {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();
        self.subscribe(move |value: &T| {
            let _ = tx.send(value.clone());
        })
        .detach();

        let subject = Subject::new();
        let out = subject.stream();
        tokio::spawn(async move {
            while let Some(first) = rx.recv().await {
                let mut latest = first;
                let timer = sleep(duration);
                tokio::pin!(timer);
                loop {
                    tokio::select! {
                        _ = &mut timer => break,
                        next = rx.recv() => match next {
                            Some(value) => {
                                latest = value;
                                timer.as_mut().reset(Instant::now() + duration);
                            }
                            // Upstream gone; flush the pending value and stop.
                            None => break,
                        },
                    }
                }
                trace!("debounce fired after {duration:?}");
                subject.emit(latest);
            }
        });
        out
    }

    /// Emit every value `duration` after it arrived, preserving order.
    pub fn delay(&self, duration: Duration) -> Stream<T> {
        let (tx, mut rx) = mpsc::unbounded_channel::<(Instant, T)>();
        self.subscribe(move |value: &T| {
            let _ = tx.send((Instant::now() + duration, value.clone()));
        })
        .detach();

        let subject = Subject::new();
        let out = subject.stream();
        tokio::spawn(async move {
            while let Some((deadline, value)) = rx.recv().await {
                sleep_until(deadline).await;
                subject.emit(value);
            }
        });
        out
    }
}
