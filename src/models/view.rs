use serde::{Deserialize, Serialize};

use super::ViewId;

/// A named unit of window content (a workspace) the user can switch to.
///
/// The cycling core never looks inside a view except through a
/// [`ViewFilter`]; everything else about its payload belongs to the
/// window manager.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct View {
    pub id: ViewId,
    pub label: String,
    /// Number of windows currently placed on this view.
    pub windows: usize,
}

impl View {
    pub fn new(id: ViewId, label: &str, windows: usize) -> Self {
        Self {
            id,
            label: label.to_owned(),
            windows,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows == 0
    }
}

/// Which views may appear in a cycle's candidate list.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFilter {
    /// Every view qualifies, including the current one.
    #[default]
    All,
    /// Only views holding at least one window qualify.
    NonEmpty,
}

impl ViewFilter {
    #[must_use]
    pub fn accepts(self, view: &View) -> bool {
        match self {
            Self::All => true,
            Self::NonEmpty => !view.is_empty(),
        }
    }
}
