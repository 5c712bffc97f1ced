//! Dropdown visibility: an explicit two-state machine.
//!
//! The open/closed boolean a renderer binds to is driven by four independent
//! signals (decoy interaction, list blur, resolved filter blur, option
//! chosen). Rather than merging them last-write-wins, the transitions are
//! named so each source states what it means; the emitted booleans are the
//! same either way.

use std::sync::{Arc, RwLock};

use brook::{Stream, Subject, Value};
use log::debug;

use crate::options::ChosenOption;

/// The dropdown's visibility states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    /// Dropdown container and filter box visible.
    Open,
    /// Only the decoy box visible.
    Closed,
}

/// What happened, as reported by one of the source signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The decoy box was focused, typed into, or clicked.
    DecoyInteracted,
    /// The list box lost focus.
    ListBlurred,
    /// The filter box blurred and the list box turned out to have focus.
    FilterBlurredListFocused,
    /// The filter box blurred and focus left the widget entirely.
    FilterBlurredListUnfocused,
    /// A selection was committed.
    OptionChosen,
}

impl Trigger {
    /// The state this trigger moves the dropdown to, regardless of the
    /// current state.
    pub fn next_state(self) -> DropdownState {
        match self {
            Trigger::DecoyInteracted | Trigger::FilterBlurredListFocused => DropdownState::Open,
            Trigger::ListBlurred
            | Trigger::FilterBlurredListUnfocused
            | Trigger::OptionChosen => DropdownState::Closed,
        }
    }
}

#[derive(Clone)]
struct Machine {
    state: Arc<RwLock<DropdownState>>,
    output: Subject<bool>,
}

impl Machine {
    fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(DropdownState::Closed)),
            output: Subject::new(),
        }
    }

    /// Apply a trigger and forward the resulting open/closed boolean.
    ///
    /// Every trigger is forwarded, including ones that do not change the
    /// state; the source signals re-emit equal values and the output
    /// preserves that.
    fn apply(&self, trigger: Trigger) {
        let next = trigger.next_state();
        if let Ok(mut guard) = self.state.write() {
            if *guard != next {
                debug!("dropdown {:?} -> {next:?} on {trigger:?}", *guard);
            }
            *guard = next;
        }
        self.output.emit(next == DropdownState::Open);
    }
}

/// Wire the four source signals into the `active` output value.
pub(crate) fn build(
    decoy_interacted: &Stream<bool>,
    filter_blur_resolved: &Stream<bool>,
    list_blur: &Stream<()>,
    option_chosen: &Stream<ChosenOption>,
) -> Value<bool> {
    let machine = Machine::new();
    let active = machine.output.stream().hold(false);

    let m = machine.clone();
    decoy_interacted
        .subscribe(move |_| m.apply(Trigger::DecoyInteracted))
        .detach();

    let m = machine.clone();
    filter_blur_resolved
        .subscribe(move |list_has_focus| {
            m.apply(if *list_has_focus {
                Trigger::FilterBlurredListFocused
            } else {
                Trigger::FilterBlurredListUnfocused
            })
        })
        .detach();

    let m = machine.clone();
    list_blur
        .subscribe(move |()| m.apply(Trigger::ListBlurred))
        .detach();

    option_chosen
        .subscribe(move |_| machine.apply(Trigger::OptionChosen))
        .detach();

    active
}
