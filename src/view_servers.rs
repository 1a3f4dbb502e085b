#[cfg(test)]
mod mock_view_server;

use crate::errors::Result;
use crate::key_event::KeyEvent;
use crate::models::{ViewId, ViewState};

#[cfg(test)]
pub use self::mock_view_server::MockViewServer;

/// Proof that a keyboard grab is held. Releasing consumes the token, so a
/// grab cannot be released twice and every exit path has to hand it back.
#[derive(Debug)]
pub struct KeyboardGrab {
    id: u32,
}

impl KeyboardGrab {
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }
}

/// What a window manager exposes for cycling to drive it.
pub trait ViewServer {
    /// Snapshot of the current view arrangement.
    fn view_state(&self) -> ViewState;

    /// Make `view` current. Switching to the already current view must be
    /// a no-op; ids the server does not know are its business to ignore.
    fn switch_to(&mut self, view: ViewId);

    /// Overwrite the server's recency bookkeeping with the ordering in
    /// `state`, without moving any windows.
    fn restore_order(&mut self, state: &ViewState);

    /// Take exclusive keyboard input for the length of a gesture.
    fn grab_keyboard(&mut self) -> Result<KeyboardGrab>;

    /// Release a grab taken with [`ViewServer::grab_keyboard`].
    fn ungrab_keyboard(&mut self, grab: KeyboardGrab);

    /// Block until the next key press or release while grabbed.
    fn next_key_event(&mut self) -> Result<KeyEvent>;
}
