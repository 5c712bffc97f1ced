//! Small push-based reactive stream library.
//!
//! `brook` models a widget's event wiring as an explicit signal graph:
//! event sources are [`Subject`]s, derived computations are [`Stream`]s
//! built with combinators (`map`, `filter`, `merge`, `debounce`, ...), and
//! "current value" views are [`Value`]s produced by holding a stream.
//!
//! Every stream is multicast: a derived stream is computed once per emission
//! and pushed to all of its subscribers, never re-executed per subscriber.
//! Emission is synchronous on the emitting thread; the only asynchrony comes
//! from the timer combinators ([`Stream::debounce`] and [`Stream::delay`]),
//! which schedule on the ambient Tokio runtime. Building a graph that uses
//! timer combinators therefore requires a runtime context.
//!
//! Internal graph wiring keeps a subscription alive for the life of its
//! upstream by calling [`Subscription::detach`]; subscriptions held by
//! external observers unsubscribe when dropped.

pub mod stream;
pub mod time;
pub mod value;

pub use stream::{Stream, Subject, Subscription};
pub use value::Value;
