//! Input signal adapters.
//!
//! Wraps the raw interaction events of the three controls into the clean
//! streams the rest of the widget composes: the debounced filter text, the
//! decoy-interaction signal, the list box's focus state, and the resolved
//! filter-box blur.

use brook::{Stream, Value};
use crossterm::event::KeyCode;
use log::trace;

use crate::config::Timings;
use crate::controls::{BoundControls, ControlId};

pub(crate) struct InputAdapters {
    /// The debounced, deduplicated filter text, starting at `""` so the
    /// unfiltered list exists before the first keystroke.
    pub filter_text: Value<String>,
    /// `true` whenever the decoy box is focused, typed into, or clicked.
    pub decoy_interacted: Stream<bool>,
    /// The list box's focus state, initially unfocused.
    pub list_focused: Value<bool>,
    /// Fires after each filter-box blur, once the blur-sampling delay has
    /// passed: `true` means focus effectively moved to the list box, `false`
    /// means it left the widget.
    pub filter_blur_resolved: Stream<bool>,
}

pub(crate) fn build(controls: &BoundControls, timings: &Timings) -> InputAdapters {
    let focus = controls.focus.clone();
    let filter_input = controls.filter_input.clone();
    let filter_text = controls
        .filter_input
        .key_ups()
        // Down hands the keyboard to the list box and never reaches the
        // filter pipeline; Enter belongs to the selection pipeline.
        .tap(move |key| {
            if *key == KeyCode::Down {
                focus.focus(ControlId::SelectBox);
            }
        })
        .filter(|key| *key != KeyCode::Enter && *key != KeyCode::Down)
        .debounce(timings.filter_debounce)
        .map(move |_| filter_input.value())
        .distinct_until_changed()
        .tap(|text| trace!("filter text changed: {text:?}"))
        .hold(String::new());

    let decoy = &controls.fake_input;
    let focus = controls.focus.clone();
    let open_focus_delay = timings.open_focus_delay;
    let decoy_interacted = decoy
        .focus_events()
        .to(true)
        .merge(&decoy.key_ups().to(true))
        .merge(&decoy.clicks().to(true))
        // The filter box only becomes focusable once the dropdown container
        // is visible and laid out, hence the deferral.
        .tap(move |_| {
            let focus = focus.clone();
            tokio::spawn(async move {
                tokio::time::sleep(open_focus_delay).await;
                focus.focus(ControlId::FilterInput);
            });
        });

    let list_focused = controls
        .select_box
        .blur_events()
        .to(false)
        .merge(&controls.select_box.focus_events().to(true))
        .hold(false);

    // Whether a filter-box blur means "focus left the widget" or "focus
    // moved to the list box" can only be told after the list box's own focus
    // event had a chance to land, so the blur is delayed and the list box's
    // focus state sampled afterwards.
    let filter_blur_resolved = controls
        .filter_input
        .blur_events()
        .delay(timings.blur_sample_delay)
        .sample(&list_focused);

    InputAdapters {
        filter_text,
        decoy_interacted,
        list_focused,
        filter_blur_resolved,
    }
}
