//! Focus tracking across the widget's controls.

use std::sync::{Arc, Mutex};

use brook::Subject;
use log::trace;

use super::ControlId;

struct FocusTarget {
    id: ControlId,
    focus: Subject<()>,
    blur: Subject<()>,
}

#[derive(Default)]
struct FocusInner {
    current: Option<ControlId>,
    targets: Vec<FocusTarget>,
}

/// Tracks which control currently has input focus and emits the matching
/// focus/blur events on the controls, the way a host environment would.
///
/// Moving focus blurs the previously focused control first, then focuses the
/// target; re-focusing the already focused control is a no-op. Focus
/// transitions across the three controls cannot be observed atomically, so
/// downstream consumers resolve "did focus leave the widget" by delayed
/// sampling rather than by asking the controller.
#[derive(Clone, Default)]
pub struct FocusController {
    inner: Arc<Mutex<FocusInner>>,
}

impl std::fmt::Debug for FocusController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FocusController(..)")
    }
}

impl FocusController {
    /// Create a controller with no registered controls.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&self, id: ControlId, focus: Subject<()>, blur: Subject<()>) {
        if let Ok(mut guard) = self.inner.lock() {
            guard.targets.retain(|target| target.id != id);
            guard.targets.push(FocusTarget { id, focus, blur });
        }
    }

    /// The currently focused control, if any.
    pub fn current(&self) -> Option<ControlId> {
        self.inner.lock().map(|guard| guard.current).unwrap_or(None)
    }

    /// Whether the given control is focused.
    pub fn is_focused(&self, id: ControlId) -> bool {
        self.current() == Some(id)
    }

    /// Move focus to the given control.
    pub fn focus(&self, id: ControlId) {
        let (blur, focus) = {
            let mut guard = match self.inner.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if guard.current == Some(id) {
                return;
            }
            let previous = guard.current.replace(id);
            let blur = previous.and_then(|prev_id| {
                guard
                    .targets
                    .iter()
                    .find(|target| target.id == prev_id)
                    .map(|target| target.blur.clone())
            });
            let focus = guard
                .targets
                .iter()
                .find(|target| target.id == id)
                .map(|target| target.focus.clone());
            (blur, focus)
        };
        trace!("focus -> {id}");
        // Emit outside the lock: blur/focus subscribers may call back in.
        if let Some(blur) = blur {
            blur.emit(());
        }
        if let Some(focus) = focus {
            focus.emit(());
        }
    }

    /// Drop focus entirely, blurring the focused control if any.
    pub fn blur_all(&self) {
        let blur = {
            let mut guard = match self.inner.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            guard.current.take().and_then(|prev_id| {
                guard
                    .targets
                    .iter()
                    .find(|target| target.id == prev_id)
                    .map(|target| target.blur.clone())
            })
        };
        trace!("focus cleared");
        if let Some(blur) = blur {
            blur.emit(());
        }
    }
}
