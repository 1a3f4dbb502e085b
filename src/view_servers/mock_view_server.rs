use std::collections::VecDeque;

use super::{KeyboardGrab, ViewServer};
use crate::errors::{CycleError, Result};
use crate::key_event::KeyEvent;
use crate::models::{ViewId, ViewState};

/// In-memory server for handler tests. Key events are scripted up front;
/// every switch, restore and grab is recorded for assertions.
pub struct MockViewServer {
    pub state: ViewState,
    events: VecDeque<KeyEvent>,
    pub switches: Vec<ViewId>,
    pub restores: usize,
    pub grabs: usize,
    pub ungrabs: usize,
    pub deny_grab: bool,
}

impl MockViewServer {
    pub fn new(state: ViewState) -> Self {
        Self::with_events(state, vec![])
    }

    pub fn with_events(state: ViewState, events: Vec<KeyEvent>) -> Self {
        Self {
            state,
            events: events.into(),
            switches: vec![],
            restores: 0,
            grabs: 0,
            ungrabs: 0,
            deny_grab: false,
        }
    }
}

impl ViewServer for MockViewServer {
    fn view_state(&self) -> ViewState {
        self.state.clone()
    }

    // Switches the way a slot-keeping window manager does: a visible view
    // trades places with the current one, a hidden view becomes current and
    // the old current view goes to the front of the hidden sequence.
    fn switch_to(&mut self, view: ViewId) {
        self.switches.push(view);
        if view == self.state.current.id {
            return;
        }
        if let Some(index) = self.state.visible.iter().position(|v| v.id == view) {
            std::mem::swap(&mut self.state.current, &mut self.state.visible[index]);
            return;
        }
        if let Some(index) = self.state.hidden.iter().position(|v| v.id == view) {
            let target = self.state.hidden.remove(index);
            let old = std::mem::replace(&mut self.state.current, target);
            self.state.hidden.insert(0, old);
        }
    }

    fn restore_order(&mut self, state: &ViewState) {
        self.restores += 1;
        self.state = state.clone();
    }

    fn grab_keyboard(&mut self) -> Result<KeyboardGrab> {
        if self.deny_grab {
            return Err(CycleError::GrabDenied);
        }
        self.grabs += 1;
        Ok(KeyboardGrab::new(self.grabs as u32))
    }

    fn ungrab_keyboard(&mut self, _grab: KeyboardGrab) {
        self.ungrabs += 1;
    }

    fn next_key_event(&mut self) -> Result<KeyEvent> {
        self.events.pop_front().ok_or(CycleError::EventStreamClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::View;

    fn state() -> ViewState {
        ViewState::new(
            View::new(1, "one", 1),
            vec![View::new(2, "two", 1), View::new(3, "three", 1)],
            vec![View::new(4, "four", 1), View::new(5, "five", 1)],
        )
    }

    #[test]
    fn switching_to_a_hidden_view_prepends_the_old_current() {
        let mut server = MockViewServer::new(state());
        server.switch_to(4);
        assert_eq!(server.state.current.id, 4);
        let hidden: Vec<ViewId> = server.state.hidden.iter().map(|v| v.id).collect();
        assert_eq!(hidden, vec![1, 5]);
        assert_eq!(server.switches, vec![4]);
    }

    #[test]
    fn switching_to_a_visible_view_trades_slots() {
        let mut server = MockViewServer::new(state());
        server.switch_to(3);
        assert_eq!(server.state.current.id, 3);
        let visible: Vec<ViewId> = server.state.visible.iter().map(|v| v.id).collect();
        assert_eq!(visible, vec![2, 1]);
    }

    #[test]
    fn switching_to_the_current_view_changes_nothing() {
        let mut server = MockViewServer::new(state());
        server.switch_to(1);
        assert_eq!(server.state, state());
        assert_eq!(server.switches, vec![1]);
    }

    #[test]
    fn key_events_come_back_in_script_order_then_the_stream_closes() {
        let script = vec![KeyEvent::Press(0x31), KeyEvent::Release(0x32)];
        let mut server = MockViewServer::with_events(state(), script);
        assert_eq!(server.next_key_event().ok(), Some(KeyEvent::Press(0x31)));
        assert_eq!(server.next_key_event().ok(), Some(KeyEvent::Release(0x32)));
        assert!(matches!(
            server.next_key_event(),
            Err(CycleError::EventStreamClosed)
        ));
    }
}
