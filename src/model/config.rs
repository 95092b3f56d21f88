use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::task::Priority;

/// Configuration from taskpad.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme color overrides by name, as `#RRGGBB`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Kitty keyboard protocol: true = force on, false = force off, absent = on (default).
    /// Ctrl+I is only distinguishable from Tab with it enabled.
    #[serde(default)]
    pub kitty_keyboard: Option<bool>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            kitty_keyboard: None,
        }
    }
}

/// Values used to seed a new task draft
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub priority: Priority,
}

fn default_true() -> bool {
    true
}
