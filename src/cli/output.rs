use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the shell output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
    Separator,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// No colors, no icons: labels only. Suits screen readers and logs.
    pub plain_output: bool,
    pub high_contrast: bool,
    pub quiet_mode: bool,
    /// `OK:`/`WARNING:` prefixes instead of icons, colors kept. Set by the
    /// `plain` theme.
    pub text_labels: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn icon(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "[✓]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Hint => "[?]",
        MessageKind::Info | MessageKind::Section | MessageKind::Separator => "",
    }
}

pub(crate) fn format_message(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();

    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Separator => String::from("----------------------------------------"),
        MessageKind::Info => text,
        _ if prefs.plain_output || prefs.text_labels => {
            let label = match kind {
                MessageKind::Success => "OK",
                MessageKind::Warning => "WARNING",
                MessageKind::Error => "ERROR",
                _ => "HINT",
            };
            format!("{label}: {text}")
        }
        _ => format!("{} {}", icon(kind), text),
    };

    if prefs.plain_output {
        return base;
    }

    if prefs.high_contrast {
        return match kind {
            MessageKind::Info | MessageKind::Separator => base,
            _ => base.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Hint => base.bright_cyan().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info | MessageKind::Separator => base,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    if prefs.quiet_mode && matches!(kind, MessageKind::Separator) {
        return;
    }
    let formatted = format_message(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

pub fn separator() {
    print(MessageKind::Separator, "");
}

/// Prints an indented `label: value` row with labels padded to `width`.
pub fn field(label: &str, value: impl fmt::Display, width: usize) {
    info(format!("  {:<width$} : {}", label, value, width = width));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_uses_text_labels() {
        let prefs = OutputPreferences {
            plain_output: true,
            ..OutputPreferences::default()
        };
        assert_eq!(
            format_message(MessageKind::Warning, "Room is required", &prefs),
            "WARNING: Room is required"
        );
        assert_eq!(format_message(MessageKind::Info, "hello", &prefs), "hello");
        assert_eq!(
            format_message(MessageKind::Section, " Status ", &prefs),
            "=== Status ==="
        );
    }

    #[test]
    fn text_labels_replace_icons_but_keep_styling() {
        let prefs = OutputPreferences {
            text_labels: true,
            ..OutputPreferences::default()
        };
        let message = format_message(MessageKind::Warning, "Room is required", &prefs);
        assert!(message.contains("WARNING: Room is required"));
        assert!(!message.contains("[!]"));

        let iconic = format_message(
            MessageKind::Warning,
            "Room is required",
            &OutputPreferences::default(),
        );
        assert!(iconic.contains("[!] Room is required"));
    }
}
