use super::*;
use crate::errors::{CycleError, Result};
use crate::key_event::KeyEvent;
use crate::models::ViewId;
use crate::reconcile::reconcile;
use crate::utils::helpers;
use crate::utils::keysym_lookup::{self, XKeysym};

impl<C, SERVER> Cycler<C, SERVER>
where
    C: Config,
    SERVER: ViewServer,
{
    /// Cycles through every view by recency while a bound modifier is held.
    ///
    /// Grabs the keyboard, switches to the most recently used view right
    /// away and steps further on every tap of the bound keys. Releasing a
    /// bound modifier commits whatever view is current. Views stepped over
    /// on the way keep their place in the recency order.
    pub fn cycle_recent_views(&mut self) -> Result<()> {
        self.cycle_views(ViewFilter::All)
    }

    /// Like [`Cycler::cycle_recent_views`], but views without windows are
    /// skipped.
    pub fn cycle_recent_non_empty_views(&mut self) -> Result<()> {
        self.cycle_views(ViewFilter::NonEmpty)
    }

    /// Runs one cycling gesture over the views accepted by `filter`.
    ///
    /// Blocks on the server's key events until a bound modifier is released.
    /// The grab is handed back on every way out, including event errors.
    pub fn cycle_views(&mut self, filter: ViewFilter) -> Result<()> {
        let binding = self.config.cycle_binding();
        let mut modifiers: Vec<XKeysym> = Vec::with_capacity(binding.modifiers.len());
        for name in &binding.modifiers {
            match keysym_lookup::into_keysym(name) {
                Some(sym) => modifiers.push(sym),
                None => tracing::warn!("unknown modifier key name: {}", name),
            }
        }
        if modifiers.is_empty() {
            return Err(CycleError::NoModifierKeys);
        }
        let next = keysym_lookup::into_keysym(&binding.next);
        if next.is_none() {
            tracing::warn!("unknown cycle key name: {}", binding.next);
        }
        let previous = keysym_lookup::into_keysym(&binding.previous);
        if previous.is_none() {
            tracing::warn!("unknown cycle key name: {}", binding.previous);
        }

        let candidates = self.server.view_state().recent_views(filter);
        if candidates.is_empty() {
            tracing::debug!("no views qualify for cycling");
            return Ok(());
        }

        let grab = self.server.grab_keyboard()?;
        let result = self.preview_loop(&candidates, next, previous, &modifiers);
        self.server.ungrab_keyboard(grab);
        result
    }

    fn preview_loop(
        &mut self,
        candidates: &[ViewId],
        next: Option<XKeysym>,
        previous: Option<XKeysym>,
        modifiers: &[XKeysym],
    ) -> Result<()> {
        let mut cursor: isize = 0;
        self.preview_at(candidates, cursor);
        loop {
            // When the same key is bound to both directions, forward wins.
            match self.server.next_key_event()? {
                KeyEvent::Press(sym) if Some(sym) == next => {
                    cursor += 1;
                    self.preview_at(candidates, cursor);
                }
                KeyEvent::Press(sym) if Some(sym) == previous => {
                    cursor -= 1;
                    self.preview_at(candidates, cursor);
                }
                KeyEvent::Release(sym) if modifiers.contains(&sym) => {
                    let current = self.server.view_state().current.id;
                    self.server.switch_to(current);
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    fn preview_at(&mut self, candidates: &[ViewId], cursor: isize) {
        if let Some(target) = helpers::cyclic_index(candidates, cursor) {
            self.preview(*target);
        }
    }

    // One preview step: a real switch, then the recency record is put back
    // the way a direct switch from the gesture's starting view would have
    // left it. Anything else the switch changed stays.
    fn preview(&mut self, target: ViewId) {
        let before = self.server.view_state();
        self.server.switch_to(target);
        let after = self.server.view_state();
        let reconciled = reconcile(&before, after);
        self.server.restore_order(&reconciled);
    }
}
