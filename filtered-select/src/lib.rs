//! A searchable, filterable single-select widget, headless.
//!
//! The widget is the reactive core of a "filtered select" control: a filter
//! text box, a list box showing the matching options (optionally grouped),
//! and a decoy display box standing in for the whole control while the
//! dropdown is closed. Raw interaction events (key up, focus, blur, click)
//! on those three controls feed a [`brook`] signal graph which derives
//! everything a rendering layer needs to bind to:
//!
//! - the filtered, sorted option list (and its grouped partitioning),
//! - whether the dropdown is open,
//! - the text shown in the decoy box,
//! - a "option chosen" event stream.
//!
//! Rendering, styling, and event capture belong to the host; the controls
//! here are headless models the host drives. See `examples/picker.rs` for a
//! terminal host.

mod adapters;
pub mod config;
pub mod controls;
pub mod error;
pub mod filter;
pub mod options;
mod selection;
pub mod visibility;
pub mod widget;

pub use config::{SelectConfig, Timings};
pub use error::SetupError;
pub use options::{ChosenOption, FilteredOption, GroupedOptions, OptionItem, SelectOption};
pub use widget::FilteredSelect;

pub mod prelude {
    pub use crate::config::{SelectConfig, Timings};
    pub use crate::controls::{ControlId, ControlSet, FocusController, ListBox, ListEntry, TextBox};
    pub use crate::error::SetupError;
    pub use crate::options::{
        ChosenOption, FilteredOption, GroupedOptions, OptionItem, SelectOption,
    };
    pub use crate::visibility::{DropdownState, Trigger};
    pub use crate::widget::FilteredSelect;
}
