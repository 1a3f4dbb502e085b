use crate::config::Config;
use crate::view_servers::ViewServer;

/// Drives recency-ordered view cycling against one view server.
#[derive(Debug)]
pub struct Cycler<C, SERVER> {
    pub config: C,
    pub server: SERVER,
}

impl<C, SERVER> Cycler<C, SERVER>
where
    C: Config,
    SERVER: ViewServer,
{
    pub fn new(config: C, server: SERVER) -> Self {
        Self { config, server }
    }
}

#[cfg(test)]
impl Cycler<crate::config::tests::TestConfig, crate::view_servers::MockViewServer> {
    pub fn new_test(state: crate::models::ViewState, events: Vec<crate::KeyEvent>) -> Self {
        Self::new(
            crate::config::tests::TestConfig::default(),
            crate::view_servers::MockViewServer::with_events(state, events),
        )
    }
}
