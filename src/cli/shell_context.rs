use std::sync::Arc;

use maison_config::{Config, ConfigManager};
use maison_core::{BookingSession, ReservationDispatcher};
use maison_domain::RoomCatalog;

use crate::i18n::Locale;

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything one shell process owns: a single booking session plus the
/// collaborators it was configured with.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub locale: Locale,
    pub catalog: Arc<RoomCatalog>,
    pub session: BookingSession,
    pub dispatcher: Box<dyn ReservationDispatcher>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn currency(&self) -> &str {
        &self.config.currency
    }
}
