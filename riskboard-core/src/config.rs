use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::DashboardError;

/// What the submit controller does with a successful score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitMode {
    /// Prepend a locally synthesized row without re-fetching the table.
    #[default]
    Optimistic,
    /// Leave the table alone; the caller re-fetches it.
    Refetch,
}

/// Client configuration. Every field has a default so a partial JSON
/// override (e.g. only `api_key`) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Absolute origin of the scoring service, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Sent as `X-API-Key` on scoring calls when set.
    pub api_key: Option<String>,
    /// Transport timeout for native builds. Browsers use the fetch default.
    pub timeout_secs: Option<u64>,
    /// Prefix for rendered amounts.
    pub currency_label: String,
    pub submit_mode: SubmitMode,
    /// Categories offered by the filter and the score form.
    pub categories: Vec<String>,
}

pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "alimentação",
    "transporte",
    "taxi",
    "pedágio",
    "hospedagem",
];

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_key: None,
            timeout_secs: Some(30),
            currency_label: "R$".to_string(),
            submit_mode: SubmitMode::Optimistic,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl DashboardConfig {
    /// Parse a JSON override and validate it.
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DashboardError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, DashboardError> {
        serde_json::to_string(self)
            .map_err(|e| DashboardError::Config(format!("Failed to serialize config: {}", e)))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `base_url` must be an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), DashboardError> {
        let url = Url::parse(self.base_url.trim()).map_err(|e| {
            DashboardError::Config(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(DashboardError::Config(format!(
                "Unsupported URL scheme '{}' in '{}'",
                other, self.base_url
            ))),
        }
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn origin(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.currency_label, "R$");
        assert_eq!(config.submit_mode, SubmitMode::Optimistic);
        assert_eq!(config.categories.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            DashboardConfig::from_json(r#"{"api_key": "secret", "submit_mode": "refetch"}"#)
                .unwrap();
        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.submit_mode, SubmitMode::Refetch);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.currency_label, "R$");
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let err = DashboardConfig::from_json(r#"{"base_url": "/dashboard"}"#).unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = DashboardConfig::default().with_base_url("ftp://example.com");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ftp"), "got: {}", err);
    }

    #[test]
    fn test_origin_strips_trailing_slash() {
        let config = DashboardConfig::default().with_base_url("https://risk.example.com/");
        assert_eq!(config.origin(), "https://risk.example.com");
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let mut config = DashboardConfig::default();
        config.api_key = Some("   ".to_string());
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_json_round_trip_of_defaults() {
        let config = DashboardConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(DashboardConfig::from_json(&json).unwrap(), config);
    }
}
