use serde::{Deserialize, Serialize};

use super::{View, ViewFilter, ViewId};

/// Snapshot of the window manager's view arrangement.
///
/// Every view lives in exactly one of the three slots. `visible` holds the
/// views shown on other outputs, in output order. `hidden` holds the views
/// shown nowhere, ordered most recently shown first; that ordering is the
/// recency record the cycling gesture browses and preserves.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub current: View,
    pub visible: Vec<View>,
    pub hidden: Vec<View>,
}

impl ViewState {
    pub fn new(current: View, visible: Vec<View>, hidden: Vec<View>) -> Self {
        Self {
            current,
            visible,
            hidden,
        }
    }

    /// Builds the candidate list for one cycling gesture: all visible views,
    /// then all hidden views, then the current view last. Current-last is
    /// deliberate, it is the "return to start" entry and the toggle target
    /// when nothing else qualifies.
    #[must_use]
    pub fn recent_views(&self, filter: ViewFilter) -> Vec<ViewId> {
        self.visible
            .iter()
            .chain(self.hidden.iter())
            .chain(std::iter::once(&self.current))
            .filter(|view| filter.accepts(view))
            .map(|view| view.id)
            .collect()
    }

    /// Looks a view up by id across all three slots.
    #[must_use]
    pub fn view(&self, id: ViewId) -> Option<&View> {
        if self.current.id == id {
            return Some(&self.current);
        }
        self.visible
            .iter()
            .chain(self.hidden.iter())
            .find(|view| view.id == id)
    }
}
