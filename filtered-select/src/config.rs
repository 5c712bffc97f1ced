//! Widget configuration.

use std::time::Duration;

/// The widget's scheduling delays.
///
/// These are empirical UI-timing values carried over from the behavior this
/// widget models, not protocol requirements; they are named and tunable so a
/// host can revisit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Quiet period coalescing rapid filter-box keystrokes before the
    /// filtered list is recomputed.
    pub filter_debounce: Duration,
    /// Deferral between a decoy-box interaction and programmatic focus of
    /// the filter box, giving the dropdown time to become visible and laid
    /// out first.
    pub open_focus_delay: Duration,
    /// Deferral between a filter-box blur and sampling the list box's focus
    /// state, giving an in-flight focus transfer to the list box time to
    /// register.
    pub blur_sample_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            filter_debounce: Duration::from_millis(100),
            open_focus_delay: Duration::from_millis(20),
            blur_sample_delay: Duration::from_millis(10),
        }
    }
}

/// Presentation and timing configuration for a [`crate::FilteredSelect`].
///
/// Everything except `timings` is cosmetic passthrough for the rendering
/// layer; none of it affects the widget's logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectConfig {
    /// Whether the rendering layer should bind the grouped view instead of
    /// the flat one.
    pub grouped: bool,
    /// Visible row count of the list box.
    pub lines: u16,
    /// Background color of the dropdown container.
    pub background_color: String,
    /// Border style of the dropdown container.
    pub border_style: String,
    /// Scheduling delays.
    pub timings: Timings,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            grouped: false,
            lines: 5,
            // Hardcoded so the dropdown isn't transparent over the page.
            background_color: "#fff".to_string(),
            border_style: "1px solid #999".to_string(),
            timings: Timings::default(),
        }
    }
}
