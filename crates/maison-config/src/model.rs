use serde::{de::Deserializer, Deserialize, Serialize};
use std::{fmt, path::PathBuf};

use crate::ConfigError;

/// Stores user-configurable shell preferences and collaborator locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// JSON room catalog to load instead of the built-in one.
    pub catalog_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory receiving submitted bookings. Without it bookings are only logged.
    pub outbox_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en".into(),
            currency: "EUR".into(),
            theme: Theme::default(),
            accessibility: AccessibilitySettings::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            catalog_path: None,
            outbox_dir: None,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 7] = [
        "locale",
        "currency",
        "theme",
        "color",
        "plain-output",
        "catalog",
        "outbox",
    ];

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Applies a `config set <key> <value>` style update. `none` clears the
    /// optional paths.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "locale" => self.locale = non_empty(key, value)?.to_string(),
            "currency" => self.currency = non_empty(key, value)?.to_ascii_uppercase(),
            "theme" => self.theme = Theme::from_str(value),
            "color" => self.ui_color_enabled = parse_bool(key, value)?,
            "plain-output" => self.accessibility.plain_output = parse_bool(key, value)?,
            "catalog" => self.catalog_path = optional_path(value),
            "outbox" => self.outbox_dir = optional_path(value),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// `(key, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let path_label = |path: &Option<PathBuf>| {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".into())
        };
        vec![
            ("locale", self.locale.clone()),
            ("currency", self.currency.clone()),
            ("theme", self.theme.to_string()),
            ("color", self.ui_color_enabled.to_string()),
            ("plain-output", self.accessibility.plain_output.to_string()),
            ("catalog", path_label(&self.catalog_path)),
            ("outbox", path_label(&self.outbox_dir)),
        ]
    }
}

fn non_empty<'a>(key: &str, value: &'a str) -> Result<&'a str, ConfigError> {
    if value.is_empty() {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "value cannot be empty".into(),
        })
    } else {
        Ok(value)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected on/off, got `{}`", value),
        }),
    }
}

fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Plain,
    Iconic,
}

impl Theme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Theme::from_str(v.trim()))
            .unwrap_or_default()
    }

    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Theme::Plain,
            _ => Theme::Iconic,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Iconic
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Plain => "plain",
            Theme::Iconic => "iconic",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Theme::from_value(value))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}
