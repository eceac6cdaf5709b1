//! Client configuration
//!
//! The page embeds an optional JSON blob (`<script id="mayoor-config">`);
//! anything it leaves out takes the defaults below.

use crate::i18n::Language;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_KEY: &str = "auth-token";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub graphql_endpoint: String,
    pub token_key: String,
    pub language: Language,
    /// Show a generic message when a login fails for a reason the form
    /// cannot attribute to a field. Off keeps such failures silent.
    pub report_unknown_errors: bool,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: "/graphql".to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            language: Language::En,
            report_unknown_errors: false,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the config blob embedded in the host page, if there is one
    pub fn load() -> Self {
        let blob = leptos::document()
            .get_element_by_id("mayoor-config")
            .and_then(|el| el.text_content());

        match blob {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring malformed client config");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.graphql_endpoint, "/graphql");
        assert_eq!(config.token_key, "auth-token");
        assert!(!config.report_unknown_errors);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            ClientConfig::from_json(r#"{ "graphql_endpoint": "https://api.example.com/graphql", "language": "cs" }"#)
                .unwrap();

        assert_eq!(config.graphql_endpoint, "https://api.example.com/graphql");
        assert_eq!(config.language, Language::Cs);
        assert_eq!(config.token_key, DEFAULT_TOKEN_KEY);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_json() {
        assert!(ClientConfig::from_json("{ graphql_endpoint: ").is_err());
    }
}
