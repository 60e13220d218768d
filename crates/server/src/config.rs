use std::fs;

use mail_relay::{
    config::{parse_settings_table, RelaySettings},
    RelayCredentials,
};
use url::Url;

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub relay: RelaySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            relay: RelaySettings::default(),
        }
    }
}

impl Settings {
    pub fn relay_credentials(&self) -> RelayCredentials {
        self.relay.credentials()
    }

    pub fn relay_endpoint(&self) -> anyhow::Result<Url> {
        Ok(self.relay.endpoint_url()?)
    }
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    settings_from_sources(file.as_deref(), |key| std::env::var(key).ok())
}

/// Layers defaults, then the flat `server.toml` table, then environment variables.
pub(crate) fn settings_from_sources(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let file_cfg = parse_settings_table(file);
    let mut settings = Settings {
        relay: RelaySettings::from_sources(&file_cfg, &env),
        ..Settings::default()
    };

    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = ["APP__BIND_ADDR", "SERVER_BIND"]
        .iter()
        .find_map(|key| env(key))
    {
        settings.server_bind = v;
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
