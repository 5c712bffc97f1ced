//! Headless list box model.

use std::sync::{Arc, RwLock};

use brook::{Stream, Subject};
use crossterm::event::KeyCode;
use serde::Serialize;

/// One row of the list box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    /// Display text of the row.
    pub text: String,
    /// Value reported when the row is committed.
    pub value: String,
}

#[derive(Debug, Default)]
struct ListBoxInner {
    entries: Vec<ListEntry>,
    highlighted: Option<usize>,
}

/// The list control showing the filtered entries.
///
/// Mirrors a native single-select list: replacing the entries resets the
/// highlight to the first row (or none, when the list is empty), matching a
/// `<select>` defaulting its selected index to 0.
#[derive(Debug, Clone)]
pub struct ListBox {
    inner: Arc<RwLock<ListBoxInner>>,
    key_up: Subject<KeyCode>,
    focus: Subject<()>,
    blur: Subject<()>,
    click: Subject<()>,
}

impl Default for ListBox {
    fn default() -> Self {
        Self::new()
    }
}

impl ListBox {
    /// Create an empty list box.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ListBoxInner::default())),
            key_up: Subject::new(),
            focus: Subject::new(),
            blur: Subject::new(),
            click: Subject::new(),
        }
    }

    /// Replace the entries, resetting the highlight to the first row.
    pub fn set_entries(&self, entries: Vec<ListEntry>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.highlighted = if entries.is_empty() { None } else { Some(0) };
            guard.entries = entries;
        }
    }

    /// The current entries.
    pub fn entries(&self) -> Vec<ListEntry> {
        self.inner
            .read()
            .map(|guard| guard.entries.clone())
            .unwrap_or_default()
    }

    /// Index of the highlighted row, if any.
    pub fn highlighted(&self) -> Option<usize> {
        self.inner.read().map(|guard| guard.highlighted).unwrap_or(None)
    }

    /// The highlighted row, if any.
    pub fn highlighted_entry(&self) -> Option<ListEntry> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .highlighted
                .and_then(|index| guard.entries.get(index).cloned())
        })
    }

    /// Move the highlight to `index`, clamped to the entry range.
    pub fn set_highlighted(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.entries.is_empty()
        {
            guard.highlighted = Some(index.min(guard.entries.len() - 1));
        }
    }

    /// Move the highlight down one row.
    pub fn highlight_next(&self) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(current) = guard.highlighted
        {
            let max = guard.entries.len().saturating_sub(1);
            guard.highlighted = Some((current + 1).min(max));
        }
    }

    /// Move the highlight up one row.
    pub fn highlight_prev(&self) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(current) = guard.highlighted
        {
            guard.highlighted = Some(current.saturating_sub(1));
        }
    }

    /// Report a key released in the list box.
    pub fn emit_key_up(&self, key: KeyCode) {
        self.key_up.emit(key);
    }

    /// Report a click on the list box.
    pub fn emit_click(&self) {
        self.click.emit(());
    }

    /// Key-up events in the list box.
    pub fn key_ups(&self) -> Stream<KeyCode> {
        self.key_up.stream()
    }

    /// Focus-gained events for the list box.
    pub fn focus_events(&self) -> Stream<()> {
        self.focus.stream()
    }

    /// Focus-lost events for the list box.
    pub fn blur_events(&self) -> Stream<()> {
        self.blur.stream()
    }

    /// Click events on the list box.
    pub fn clicks(&self) -> Stream<()> {
        self.click.stream()
    }

    pub(crate) fn focus_subject(&self) -> Subject<()> {
        self.focus.clone()
    }

    pub(crate) fn blur_subject(&self) -> Subject<()> {
        self.blur.clone()
    }
}
