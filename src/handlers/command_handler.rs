use super::*;

impl<C, SERVER> Cycler<C, SERVER>
where
    C: Config,
    SERVER: ViewServer,
{
    /// Processes a command and invokes the associated action.
    ///
    /// Returns `false` when the command could not do its work, with the
    /// reason logged rather than bubbled up, so key-binding dispatch loops
    /// can carry on.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        match command {
            Command::CycleRecentViews => self.cycle(ViewFilter::All),
            Command::CycleRecentNonEmptyViews => self.cycle(ViewFilter::NonEmpty),
            Command::ToggleRecentView => self.toggle_recent_view(),
            Command::ToggleRecentNonEmptyView => self.toggle_recent_non_empty_view(),
        }
    }

    fn cycle(&mut self, filter: ViewFilter) -> bool {
        match self.cycle_views(filter) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("view cycling failed: {}", err);
                false
            }
        }
    }
}
