use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub reading: ReadingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the counter widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Heading shown above the value, rendered verbatim.
    #[serde(default = "default_title")]
    pub title: String,
}

/// Settings for the remote value display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingConfig {
    /// Endpoint queried once per mount (e.g., "http://localhost:5001/temperature").
    #[serde(default = "default_url")]
    pub url: String,
    /// Name of the numeric field in the JSON response body.
    #[serde(default = "default_field")]
    pub field: String,
    /// Heading of the display panel.
    #[serde(default = "default_label")]
    pub label: String,
    /// Suffix appended to the rendered value.
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Upper bound for the whole request in seconds. `0` disables the timeout.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

/// Settings for the terminal shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds when no input arrives.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_title() -> String {
    "Counter Title".to_string()
}

fn default_url() -> String {
    "http://localhost:5001/temperature".to_string()
}

fn default_field() -> String {
    "temperature".to_string()
}

fn default_label() -> String {
    "Temperature".to_string()
}

fn default_unit() -> String {
    "°C".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl ReadingConfig {
    /// The request timeout, or `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            field: default_field(),
            label: default_label(),
            unit: default_unit(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
