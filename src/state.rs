use std::sync::Arc;

use crate::bot::{CommandRouter, Notifier};
use crate::config::Config;
use crate::store::EventStore;

/// Shared by every handler. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn EventStore>,
    pub commands: Arc<CommandRouter>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn EventStore>, notifier: Arc<dyn Notifier>) -> Self {
        let commands = CommandRouter::new(store.clone(), config.privileges.clone(), config.timezone);
        Self {
            config: Arc::new(config),
            store,
            commands: Arc::new(commands),
            notifier,
        }
    }
}
