use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    errors::{DataSourceError, DataSourceResult},
    listing::FilterCriteria,
    logging::LogLevel,
    mortgage::LoanTerms,
};

/// Initial values of the search form.
///
/// Missing fields in a JSON override fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchDefaults {
    pub criteria: FilterCriteria,
    pub terms: LoanTerms,
}

impl Default for SearchDefaults {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::new("Sunnyvale, CA", 750_000, 1_600_000, 3, 2),
            terms: LoanTerms::new(0.20, 6.75, 30, 1.1, 120.0),
        }
    }
}

/// Page settings, read once at startup from an inline JSON block:
///
/// ```json
/// { "logLevel": "debug", "search": { "criteria": { "location": "San Jose" } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Console verbosity by name, case-insensitive
    pub log_level: Option<String>,
    pub search: SearchDefaults,
}

impl AppConfig {
    pub fn from_json(json: &str) -> DataSourceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Config from the page's inline block, if any.
    ///
    /// Malformed text falls back to the defaults and hands back the parse
    /// error so it can be logged once a logger exists.
    pub fn from_page(text: Option<&str>) -> (Self, Option<DataSourceError>) {
        match text.map(str::trim).filter(|t| !t.is_empty()) {
            None => (Self::default(), None),
            Some(json) => match Self::from_json(json) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
        }
    }

    /// Requested minimum log level; `None` for absent or unknown names
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_level
            .as_deref()
            .and_then(|name| LogLevel::from_str(name.trim()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = AppConfig::from_json(
            r#"{"search": {"criteria": {"location": "San Jose", "minPrice": 0, "maxPrice": 900000, "minBeds": 1, "minBaths": 1}}}"#,
        )
        .unwrap();
        assert_eq!(config.search.criteria.location, "San Jose");
        assert_eq!(config.search.terms, SearchDefaults::default().terms);
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn missing_or_blank_page_block_uses_defaults() {
        for text in [None, Some(""), Some("  \n ")] {
            let (config, err) = AppConfig::from_page(text);
            assert_eq!(config, AppConfig::default());
            assert!(err.is_none());
        }
    }

    #[test]
    fn malformed_page_block_falls_back_with_error() {
        let (config, err) = AppConfig::from_page(Some("{ logLevel: debug"));
        assert_eq!(config.search, SearchDefaults::default());
        assert!(matches!(err, Some(DataSourceError::Parse(_))));
    }

    #[test]
    fn log_level_is_read_by_name() {
        let (config, _) = AppConfig::from_page(Some(r#"{"logLevel": " WARN "}"#));
        assert_eq!(config.log_level(), Some(LogLevel::Warn));

        let (config, _) = AppConfig::from_page(Some(r#"{"logLevel": "debug"}"#));
        assert_eq!(config.log_level(), Some(LogLevel::Debug));

        let (config, _) = AppConfig::from_page(Some(r#"{"logLevel": "loud"}"#));
        assert_eq!(config.log_level(), None);
    }
}
