use serde::{Deserialize, Serialize};

/// Cycling actions a window manager can bind keys to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CycleRecentViews,
    CycleRecentNonEmptyViews,
    ToggleRecentView,
    ToggleRecentNonEmptyView,
}
