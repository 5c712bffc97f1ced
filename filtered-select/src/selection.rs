//! The selection pipeline: commit triggers and the chosen-option stream.

use brook::Stream;
use crossterm::event::KeyCode;
use log::{debug, trace};

use crate::controls::BoundControls;
use crate::options::ChosenOption;

/// Build the outward "option chosen" stream.
///
/// A commit is Enter released in the list box, any click on the list box, or
/// Enter released in the filter box (the only way to commit without touching
/// the list box). The committed entry is whatever the list box currently
/// highlights; with nothing highlighted (empty filtered list) the commit is
/// a no-op and nothing is emitted.
///
/// The payload carries the entry's text and value only; the group label is
/// deliberately left off the outward event.
pub(crate) fn build(controls: &BoundControls) -> Stream<ChosenOption> {
    let enter_in_list = controls
        .select_box
        .key_ups()
        .filter(|key| *key == KeyCode::Enter)
        .to(());
    let enter_in_filter = controls
        .filter_input
        .key_ups()
        .filter(|key| *key == KeyCode::Enter)
        .to(());

    let select_box = controls.select_box.clone();
    enter_in_list
        .merge(&controls.select_box.clicks())
        .merge(&enter_in_filter)
        .filter_map(move |()| {
            let entry = select_box.highlighted_entry();
            if entry.is_none() {
                trace!("commit with no highlighted entry ignored");
            }
            entry.map(|entry| ChosenOption {
                text: entry.text,
                id: entry.value,
            })
        })
        .tap(|chosen| debug!("option chosen: {} ({})", chosen.text, chosen.id))
}
