//! Headless control models.
//!
//! The widget does not own a DOM or a terminal; it observes three logical
//! controls the rendering layer drives. Each control lives in its own module:
//! - `text_box.rs` - the filter box and the decoy display box
//! - `list_box.rs` - the list of filtered entries
//! - `focus.rs` - focus tracking across the three controls

mod focus;
mod list_box;
mod text_box;

use std::fmt;

pub use focus::FocusController;
pub use list_box::{ListBox, ListEntry};
pub use text_box::TextBox;

use crate::error::SetupError;

/// The three logical controls making up the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// The real filter text box, hidden while the dropdown is closed.
    FilterInput,
    /// The list box showing the filtered entries.
    SelectBox,
    /// The decoy display box shown in place of the filter box.
    FakeInput,
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlId::FilterInput => f.write_str("filter input"),
            ControlId::SelectBox => f.write_str("select box"),
            ControlId::FakeInput => f.write_str("fake input"),
        }
    }
}

/// The controls a rendering layer hands to [`crate::FilteredSelect::bind`].
///
/// All three controls must be present; binding fails fast on a missing one
/// since every downstream stream depends on them.
#[derive(Debug, Default)]
pub struct ControlSet {
    filter_input: Option<TextBox>,
    select_box: Option<ListBox>,
    fake_input: Option<TextBox>,
    focus: FocusController,
}

impl ControlSet {
    /// Start an empty set with a fresh focus controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// A complete set of headless controls, for tests and terminal hosts.
    pub fn headless() -> Self {
        Self::new()
            .with_filter_input(TextBox::new(ControlId::FilterInput))
            .with_select_box(ListBox::new())
            .with_fake_input(TextBox::new(ControlId::FakeInput))
    }

    /// Provide the filter text box.
    pub fn with_filter_input(mut self, control: TextBox) -> Self {
        self.focus
            .register(control.id(), control.focus_subject(), control.blur_subject());
        self.filter_input = Some(control);
        self
    }

    /// Provide the list box.
    pub fn with_select_box(mut self, control: ListBox) -> Self {
        self.focus.register(
            ControlId::SelectBox,
            control.focus_subject(),
            control.blur_subject(),
        );
        self.select_box = Some(control);
        self
    }

    /// Provide the decoy display box.
    pub fn with_fake_input(mut self, control: TextBox) -> Self {
        self.focus
            .register(control.id(), control.focus_subject(), control.blur_subject());
        self.fake_input = Some(control);
        self
    }

    pub(crate) fn into_bound(self) -> Result<BoundControls, SetupError> {
        Ok(BoundControls {
            filter_input: self
                .filter_input
                .ok_or(SetupError::MissingControl(ControlId::FilterInput))?,
            select_box: self
                .select_box
                .ok_or(SetupError::MissingControl(ControlId::SelectBox))?,
            fake_input: self
                .fake_input
                .ok_or(SetupError::MissingControl(ControlId::FakeInput))?,
            focus: self.focus,
        })
    }
}

/// A validated, complete control set.
#[derive(Debug, Clone)]
pub(crate) struct BoundControls {
    pub filter_input: TextBox,
    pub select_box: ListBox,
    pub fake_input: TextBox,
    pub focus: FocusController,
}
