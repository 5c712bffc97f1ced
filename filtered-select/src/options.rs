//! Option data model: caller-supplied records and the derived views.

use serde::{Deserialize, Serialize};

/// A selectable entry supplied by the caller.
///
/// `id` is the value reported when the option is chosen; it need not be
/// unique across the set (e.g. nickname records reusing a person's id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display text.
    pub text: String,
    /// Identifier reported on selection.
    pub id: String,
    /// Optional group label used for matching, sorting, and partitioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl SelectOption {
    /// Create an ungrouped option.
    pub fn new(text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: id.into(),
            group: None,
        }
    }

    /// Attach a group label.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Trait for anything that can be handed to the widget as an option.
///
/// # Example
///
/// ```ignore
/// struct Person {
///     id: u32,
///     name: String,
/// }
///
/// impl OptionItem for Person {
///     fn option_text(&self) -> String {
///         self.name.clone()
///     }
///
///     fn option_id(&self) -> String {
///         self.id.to_string()
///     }
/// }
/// ```
pub trait OptionItem {
    /// Display text for this item.
    fn option_text(&self) -> String;

    /// Identifier reported when this item is chosen.
    fn option_id(&self) -> String;

    /// Optional group label.
    fn option_group(&self) -> Option<String> {
        None
    }

    /// Convert into the widget's own record.
    fn to_select_option(&self) -> SelectOption {
        SelectOption {
            text: self.option_text(),
            id: self.option_id(),
            group: self.option_group(),
        }
    }
}

impl OptionItem for SelectOption {
    fn option_text(&self) -> String {
        self.text.clone()
    }

    fn option_id(&self) -> String {
        self.id.clone()
    }

    fn option_group(&self) -> Option<String> {
        self.group.clone()
    }
}

impl OptionItem for String {
    fn option_text(&self) -> String {
        self.clone()
    }

    fn option_id(&self) -> String {
        self.clone()
    }
}

impl OptionItem for &str {
    fn option_text(&self) -> String {
        (*self).to_string()
    }

    fn option_id(&self) -> String {
        (*self).to_string()
    }
}

// (id, text) tuples
impl<S1, S2> OptionItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn option_text(&self) -> String {
        self.1.as_ref().to_string()
    }

    fn option_id(&self) -> String {
        self.0.as_ref().to_string()
    }
}

// (id, text, group) tuples
impl<S1, S2, S3> OptionItem for (S1, S2, S3)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
    S3: AsRef<str>,
{
    fn option_text(&self) -> String {
        self.1.as_ref().to_string()
    }

    fn option_id(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn option_group(&self) -> Option<String> {
        Some(self.2.as_ref().to_string())
    }
}

/// One entry of the filtered view.
///
/// The `selected` marker lives here rather than on [`SelectOption`] so the
/// widget never mutates caller-owned data. Within any non-empty filtered
/// result exactly the first entry is `selected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredOption {
    /// The matched option.
    pub option: SelectOption,
    /// Whether this entry is the default highlight (always the first entry).
    pub selected: bool,
}

/// One partition of the grouped view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedOptions {
    /// The partition's group label; `None` collects the ungrouped options.
    pub group_name: Option<String>,
    /// The partition's entries, in filtered order.
    pub options: Vec<FilteredOption>,
}

/// The payload emitted when a selection is committed.
///
/// Carries only `text` and `id`; the group label is deliberately not part of
/// the outward event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenOption {
    /// Display text of the chosen entry.
    pub text: String,
    /// Identifier of the chosen entry.
    pub id: String,
}
