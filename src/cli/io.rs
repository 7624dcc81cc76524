use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};
use maison_config::{Config, Theme};

use crate::cli::core::CommandError;
use crate::cli::output::{self, OutputPreferences};

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(prompt: &str, default: bool) -> Result<bool, CommandError> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

pub(crate) fn output_preferences(config: &Config) -> OutputPreferences {
    OutputPreferences {
        plain_output: config.accessibility.plain_output,
        high_contrast: config.accessibility.high_contrast,
        quiet_mode: false,
        text_labels: config.theme == Theme::Plain,
    }
}

/// Pushes the display-related configuration into the output helpers.
pub fn apply_config(config: &Config) {
    output::set_preferences(output_preferences(config));
    if !config.ui_color_enabled || config.accessibility.plain_output {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
}
