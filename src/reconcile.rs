//! Order-preserving reconciliation of preview switches.
//!
//! Every preview during a cycling gesture is a real switch to the window
//! manager and gets recorded in its recency bookkeeping. Reconciling the
//! post-switch snapshot against the pre-switch snapshot reinserts the
//! displaced view where the switch target used to live, so intermediate
//! previews leave no trace in the ordering while legitimate changes picked
//! up during the switch (created or destroyed views, moved windows) are
//! kept.

use crate::models::{View, ViewId, ViewState};
use crate::utils::helpers::common_prefix_len;

/// Where the newly current view lived before the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Visible,
    Hidden,
    NotFound,
}

fn locate(before: &ViewState, view: ViewId) -> Origin {
    if before.visible.first().map(|head| head.id) == Some(view) {
        return Origin::Visible;
    }
    if before.hidden.iter().any(|hidden| hidden.id == view) {
        return Origin::Hidden;
    }
    Origin::NotFound
}

fn extract(list: &mut Vec<View>, id: ViewId) -> Option<View> {
    let index = list.iter().position(|view| view.id == id)?;
    Some(list.remove(index))
}

/// Takes the pre-switch current view out of `after`, wherever the switch
/// left it, so its post-switch record survives. Falls back to the record
/// `before` holds when the switch dropped it entirely.
fn take_old_current(before: &ViewState, after: &mut ViewState) -> View {
    extract(&mut after.visible, before.current.id)
        .or_else(|| extract(&mut after.hidden, before.current.id))
        .unwrap_or_else(|| before.current.clone())
}

/// The insertion slot is the longest common prefix of the full pre-switch
/// sequence and the post-switch sequence with the old current view removed.
/// That pins the displaced view to the slot the switch target vacated, even
/// when unrelated views appeared or disappeared during the switch.
fn insertion_index(before_list: &[View], after_rest: &[View]) -> usize {
    let before_ids: Vec<ViewId> = before_list.iter().map(|view| view.id).collect();
    let after_ids: Vec<ViewId> = after_rest.iter().map(|view| view.id).collect();
    common_prefix_len(&before_ids, &after_ids)
}

/// Rebuilds `after`'s ordering so the views not involved in the switch keep
/// the relative order they had in `before`.
///
/// Precondition: `after` was produced from `before` by switching the current
/// view to exactly one other view present in `before`. A violation is not an
/// error; the state comes back unchanged and that one step loses order
/// preservation.
#[must_use]
pub fn reconcile(before: &ViewState, mut after: ViewState) -> ViewState {
    if after.current.id == before.current.id {
        return after;
    }
    match locate(before, after.current.id) {
        Origin::Visible => {
            let old = take_old_current(before, &mut after);
            let index = insertion_index(&before.visible, &after.visible);
            after.visible.insert(index, old);
        }
        Origin::Hidden => {
            let old = take_old_current(before, &mut after);
            let index = insertion_index(&before.hidden, &after.hidden);
            after.hidden.insert(index, old);
        }
        Origin::NotFound => {}
    }
    after
}
