use std::collections::HashMap;

use thiserror::Error;
use url::Url;

use crate::{RelayCredentials, EMAILJS_SEND_ENDPOINT};

#[derive(Debug, Error)]
#[error("invalid mail relay endpoint '{endpoint}': {source}")]
pub struct InvalidEndpoint {
    pub endpoint: String,
    #[source]
    pub source: url::ParseError,
}

/// Relay endpoint and identifiers, shared by every binary that sends mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaySettings {
    pub endpoint: String,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_SEND_ENDPOINT.into(),
            service_id: None,
            template_id: None,
            public_key: None,
        }
    }
}

impl RelaySettings {
    /// Applies the flat settings table, then the environment, later sources winning.
    pub fn from_sources(
        file_cfg: &HashMap<String, String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let mut settings = Self::default();

        if let Some(v) = file_cfg.get("emailjs_endpoint") {
            settings.endpoint = v.clone();
        }
        if let Some(v) = file_cfg.get("emailjs_service_id") {
            settings.service_id = Some(v.clone());
        }
        if let Some(v) = file_cfg.get("emailjs_template_id") {
            settings.template_id = Some(v.clone());
        }
        if let Some(v) = file_cfg.get("emailjs_public_key") {
            settings.public_key = Some(v.clone());
        }

        let first = |keys: &[&str]| keys.iter().find_map(|key| env(key));

        if let Some(v) = first(&["EMAILJS_ENDPOINT"]) {
            settings.endpoint = v;
        }
        if let Some(v) = first(&["EMAILJS_SERVICE_ID", "NEXT_PUBLIC_EMAILJS_SERVICE_ID"]) {
            settings.service_id = Some(v);
        }
        if let Some(v) = first(&["EMAILJS_TEMPLATE_ID", "NEXT_PUBLIC_EMAILJS_TEMPLATE_ID"]) {
            settings.template_id = Some(v);
        }
        if let Some(v) = first(&["EMAILJS_PUBLIC_KEY", "NEXT_PUBLIC_EMAILJS_PUBLIC_KEY"]) {
            settings.public_key = Some(v);
        }

        settings
    }

    /// Missing identifiers become empty strings; the relay refuses to send with them.
    pub fn credentials(&self) -> RelayCredentials {
        RelayCredentials::new(
            self.service_id.clone().unwrap_or_default(),
            self.template_id.clone().unwrap_or_default(),
            self.public_key.clone().unwrap_or_default(),
        )
    }

    pub fn endpoint_url(&self) -> Result<Url, InvalidEndpoint> {
        Url::parse(self.endpoint.trim()).map_err(|source| InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })
    }
}

/// Parses a flat `key = "value"` toml table. Malformed input yields an empty table.
pub fn parse_settings_table(raw: Option<&str>) -> HashMap<String, String> {
    raw.and_then(|raw| toml::from_str::<HashMap<String, String>>(raw).ok())
        .unwrap_or_default()
}
