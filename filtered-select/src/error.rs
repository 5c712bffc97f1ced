//! Setup error types.

use thiserror::Error;

use crate::controls::ControlId;

/// Errors raised while binding a widget to its controls.
///
/// All of the widget's derived streams hang off the three controls, so a
/// missing control fails fast at bind time instead of degrading silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The control set was handed over without the named control.
    #[error("control set is missing the {0}")]
    MissingControl(ControlId),
}
