use super::*;

impl<C, SERVER> Cycler<C, SERVER>
where
    C: Config,
    SERVER: ViewServer,
{
    /// Switches straight to the most recently used view.
    ///
    /// The tap half of the gesture without the hold: no keyboard grab, no
    /// preview loop, and the switch lands in the server's recency record
    /// like any other. Two toggles in a row bounce between the same pair
    /// of views.
    pub fn toggle_recent_view(&mut self) -> bool {
        self.toggle_views(ViewFilter::All)
    }

    /// Like [`Cycler::toggle_recent_view`], but views without windows are
    /// skipped.
    pub fn toggle_recent_non_empty_view(&mut self) -> bool {
        self.toggle_views(ViewFilter::NonEmpty)
    }

    /// Switches to the first view accepted by `filter`, if there is one.
    pub fn toggle_views(&mut self, filter: ViewFilter) -> bool {
        let candidates = self.server.view_state().recent_views(filter);
        match candidates.first() {
            Some(target) => {
                self.server.switch_to(*target);
                true
            }
            None => {
                tracing::debug!("no views qualify for toggling");
                false
            }
        }
    }
}
