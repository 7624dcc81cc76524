//! Shell error types, dispatch and the context helpers shared by commands.

use std::{io, sync::Arc};

use chrono::NaiveDate;
use maison_config::{ConfigError, ConfigManager};
use maison_core::{BookingSession, CoreError, LogDispatcher, ReservationDispatcher};
use maison_domain::{BookingDraft, RoomCatalog, Step};
use maison_storage_json::{load_catalog, JsonOutboxDispatcher, StorageError};
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::i18n::Locale;

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};
use super::render;
pub use crate::cli::shell_context::{CliMode, ShellContext};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failures that stop the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("line editor failure: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Command(String),
}

/// Failures of a single command. They are reported and the loop goes on.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::from_env()?)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        cli_io::apply_config(&config);

        let catalog = Arc::new(configured_catalog(&config)?);
        let dispatcher = configured_dispatcher(&config)?;

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        tracing::debug!(
            config = %config_manager.config_path().display(),
            rooms = catalog.len(),
            "shell context ready"
        );

        Ok(Self {
            mode,
            registry,
            locale: Locale::from_tag(&config.locale),
            session: BookingSession::new(Arc::clone(&catalog)),
            catalog,
            dispatcher,
            config_manager,
            config,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.all_names()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        if self.session.is_submitted() {
            return "maison [confirmed]> ".to_string();
        }
        let step = self.session.step();
        format!(
            "maison [{}/{} {}]> ",
            step.number(),
            Step::ALL.len(),
            self.locale.step_title(step)
        )
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            tracing::debug!(command, args = args.len(), "dispatching command");
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes one input line and runs it.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err);
                return Ok(LoopControl::Continue);
            }
        };

        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        let prompt = if self.has_unsubmitted_progress() {
            "Discard the booking in progress and exit?"
        } else {
            "Exit shell?"
        };
        Ok(cli_io::confirm_action(prompt, !self.has_unsubmitted_progress())?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(CoreError::Validation(failure)) => {
                cli_io::print_error("The booking cannot be submitted yet.");
                render::print_issues(self.locale, &failure);
            }
            CommandError::Core(CoreError::StepIncomplete(step)) => {
                cli_io::print_error(format!(
                    "Finish the booking first: you are on step {} ({}).",
                    step.number(),
                    self.locale.step_title(step)
                ));
                cli_io::print_hint("Use `next` to move on once the current step is complete.");
            }
            CommandError::Core(CoreError::AlreadySubmitted) => {
                cli_io::print_error("This booking has already been submitted.");
                cli_io::print_hint("Use `confirmation` to review it or `start` for a new one.");
            }
            other => cli_io::print_error(other),
        }
        Ok(())
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Re-reads the catalog and dispatcher from the current configuration.
    /// The running session keeps its catalog until the next `start`.
    pub(crate) fn reload_collaborators(&mut self) -> CommandResult {
        self.catalog = Arc::new(configured_catalog(&self.config)?);
        self.dispatcher = configured_dispatcher(&self.config)?;
        self.locale = Locale::from_tag(&self.config.locale);
        cli_io::apply_config(&self.config);
        Ok(())
    }

    pub(crate) fn start_session(&mut self, query: Option<&str>) {
        let catalog = Arc::clone(&self.catalog);
        self.session = match query {
            Some(query) => BookingSession::from_deep_link(catalog, query),
            None => BookingSession::new(catalog),
        };
        tracing::info!(
            room = self.session.draft().selected_room_id.as_deref().unwrap_or("-"),
            "booking session started"
        );
    }

    pub(crate) fn has_unsubmitted_progress(&self) -> bool {
        !self.session.is_submitted() && *self.session.draft() != BookingDraft::new()
    }

    pub(crate) fn require_open(&self) -> CommandResult {
        if self.session.is_submitted() {
            return Err(CommandError::Message(
                "This booking is confirmed and can no longer be edited. Use `start` to begin a new one."
                    .into(),
            ));
        }
        Ok(())
    }

    /// Edits are only accepted on the step that shows the field.
    pub(crate) fn require_step(&self, step: Step) -> CommandResult {
        self.require_open()?;
        let current = self.session.step();
        if current == step {
            return Ok(());
        }
        let how = if current > step { "back" } else { "next" };
        Err(CommandError::InvalidArguments(format!(
            "That belongs to step {} ({}); you are on step {}. Use `{}` to get there.",
            step.number(),
            self.locale.step_title(step),
            current.number(),
            how
        )))
    }
}

/// Parses `YYYY-MM-DD`; `-` or `none` clears the date.
pub(crate) fn parse_date(input: &str) -> Result<Option<NaiveDate>, CommandError> {
    let trimmed = input.trim();
    if trimmed == "-" || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| {
            CommandError::InvalidArguments(format!(
                "`{}` is not a date; use YYYY-MM-DD or `-` to clear",
                trimmed
            ))
        })
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn configured_catalog(config: &maison_config::Config) -> Result<RoomCatalog, StorageError> {
    match &config.catalog_path {
        Some(path) => load_catalog(path),
        None => Ok(RoomCatalog::seed()),
    }
}

fn configured_dispatcher(
    config: &maison_config::Config,
) -> Result<Box<dyn ReservationDispatcher>, StorageError> {
    Ok(match &config.outbox_dir {
        Some(dir) => Box::new(JsonOutboxDispatcher::new(dir.clone())?),
        None => Box::new(LogDispatcher),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use maison_domain::GuestKind;
    use tempfile::{tempdir, TempDir};

    fn process_script(lines: &[&str]) -> (ShellContext, TempDir) {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        let mut context =
            ShellContext::with_config_manager(CliMode::Script, manager).expect("context");
        for line in lines {
            match context.process_line(line) {
                Ok(LoopControl::Exit) => break,
                Ok(LoopControl::Continue) => {}
                Err(err) => context.report_error(err).expect("report"),
            }
        }
        (context, dir)
    }

    #[test]
    fn parse_line_handles_quotes() {
        let tokens =
            crate::cli::shell::parse_command_line("contact requests \"late arrival, 23:00\"")
                .unwrap();
        assert_eq!(tokens, vec!["contact", "requests", "late arrival, 23:00"]);
    }

    #[test]
    fn script_walks_through_a_booking() {
        let (context, _dir) = process_script(&[
            "dates 2025-06-10 2025-06-13",
            "guests children +",
            "next",
            "room garden-suite",
            "next",
            "contact first-name Ana",
            "contact last-name \"da Silva\"",
            "contact email ana@example.pt",
            "contact phone \"+351 21 000 0000\"",
            "submit",
        ]);

        let confirmation = context.session.confirmation().expect("submitted");
        assert_eq!(confirmation.nights(), 3);
        assert_eq!(confirmation.guest_name(), "Ana da Silva");
        assert_eq!(confirmation.guests().get(GuestKind::Children), 1);
        assert_eq!(context.prompt(), "maison [confirmed]> ");
    }

    #[test]
    fn next_without_room_stays_on_room_step() {
        let (context, _dir) = process_script(&["dates 2025-06-10 2025-06-13", "next", "next"]);
        assert_eq!(context.session.step(), Step::RoomSelect);
        assert_eq!(context.prompt(), "maison [2/3 Room]> ");
    }

    #[test]
    fn edits_outside_their_step_are_rejected() {
        let (mut context, _dir) = process_script(&["dates 2025-06-10 2025-06-13", "next"]);
        let err = context.process_line("guests adults +").unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
        assert_eq!(context.session.guests().adults(), 2);
    }

    #[test]
    fn exit_stops_the_loop() {
        let (context, _dir) = process_script(&["exit", "dates 2025-06-10 2025-06-13"]);
        assert!(!context.running);
        assert!(context.session.draft().check_in.is_none());
    }

    #[test]
    fn start_with_query_preselects_room() {
        let (context, _dir) = process_script(&["start ?room=family-loft"]);
        assert_eq!(
            context.session.draft().selected_room_id.as_deref(),
            Some("family-loft")
        );
        assert!(context.has_unsubmitted_progress());
    }

    #[test]
    fn dates_accept_dash_to_clear() {
        assert_eq!(parse_date("-").unwrap(), None);
        assert_eq!(
            parse_date("2025-02-28").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
        assert!(parse_date("28/02/2025").is_err());
    }

    #[test]
    fn config_set_locale_switches_prompt_language() {
        let (context, dir) = process_script(&["config set locale fr"]);
        assert_eq!(context.locale, Locale::Fr);
        assert_eq!(context.prompt(), "maison [1/3 Dates et voyageurs]> ");
        let saved = ConfigManager::with_base_dir(dir.path().to_path_buf())
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(saved.locale, "fr");
    }
}
