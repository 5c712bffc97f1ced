//! Headless text box model.

use std::sync::{Arc, RwLock};

use brook::{Stream, Subject};
use crossterm::event::KeyCode;

use super::ControlId;

/// A single-line text control: the filter box or the decoy display box.
///
/// Holds the current text value and exposes the raw interaction event
/// streams the widget's adapters subscribe to. The rendering layer (or a
/// test) drives it through `set_value` and the `emit_*` methods; focus and
/// blur events are emitted by the [`super::FocusController`].
#[derive(Debug, Clone)]
pub struct TextBox {
    id: ControlId,
    value: Arc<RwLock<String>>,
    key_up: Subject<KeyCode>,
    focus: Subject<()>,
    blur: Subject<()>,
    click: Subject<()>,
}

impl TextBox {
    /// Create an empty text box for the given control slot.
    pub fn new(id: ControlId) -> Self {
        Self {
            id,
            value: Arc::new(RwLock::new(String::new())),
            key_up: Subject::new(),
            focus: Subject::new(),
            blur: Subject::new(),
            click: Subject::new(),
        }
    }

    /// Which control slot this box occupies.
    pub fn id(&self) -> ControlId {
        self.id
    }

    /// The current text value.
    pub fn value(&self) -> String {
        self.value
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Replace the text value. Does not emit a key event.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.value.write() {
            *guard = value.into();
        }
    }

    /// Report a key released in this box.
    pub fn emit_key_up(&self, key: KeyCode) {
        self.key_up.emit(key);
    }

    /// Report a click on this box.
    pub fn emit_click(&self) {
        self.click.emit(());
    }

    /// Append a character and report its key-up, like a host forwarding a
    /// keystroke.
    pub fn type_char(&self, c: char) {
        if let Ok(mut guard) = self.value.write() {
            guard.push(c);
        }
        self.emit_key_up(KeyCode::Char(c));
    }

    /// Type a string one character at a time.
    pub fn type_str(&self, text: &str) {
        for c in text.chars() {
            self.type_char(c);
        }
    }

    /// Remove the last character and report the Backspace key-up.
    pub fn backspace(&self) {
        if let Ok(mut guard) = self.value.write() {
            guard.pop();
        }
        self.emit_key_up(KeyCode::Backspace);
    }

    /// Key-up events in this box.
    pub fn key_ups(&self) -> Stream<KeyCode> {
        self.key_up.stream()
    }

    /// Focus-gained events for this box.
    pub fn focus_events(&self) -> Stream<()> {
        self.focus.stream()
    }

    /// Focus-lost events for this box.
    pub fn blur_events(&self) -> Stream<()> {
        self.blur.stream()
    }

    /// Click events on this box.
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
