use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use roundups_domain::RoundUpPolicy;

/// Stores the user's round-up policy and the presentation preferences the
/// mobile shell reads alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub policy: RoundUpPolicy,
    pub locale: String,
    pub currency: String,
    #[serde(default = "Settings::default_haptics_enabled")]
    pub haptics_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: RoundUpPolicy::default(),
            locale: "en-US".into(),
            currency: "USD".into(),
            haptics_enabled: Settings::default_haptics_enabled(),
        }
    }
}

impl Settings {
    pub fn default_haptics_enabled() -> bool {
        true
    }

    /// Platform base directory for settings storage. Falls back to the home
    /// directory, then the working directory.
    pub fn default_base_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("roundups")
    }
}
