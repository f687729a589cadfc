//! Configuration types for entable.toml

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::naming::NamingStyle;

/// Process-level mapping configuration.
///
/// ```toml
/// style = "camelhump"
/// identity = "mysql"
/// schema = "app"
/// sequence_format = "nextval('{sequence}')"
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MapperConfig {
    /// Default naming style for types without their own style declaration
    #[serde(default)]
    pub style: NamingStyle,
    /// Default identity retrieval: a dialect name or a literal statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    /// Read database identities back before the insert runs instead of after
    #[serde(default)]
    pub before: bool,
    /// Catalog prefixed to table names; takes precedence over `schema`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    /// Schema prefixed to table names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Template for sequence next-value text.
    /// Placeholders: `{sequence}`, `{column}`, `{property}`, `{table}`
    #[serde(default = "default_sequence_format")]
    pub sequence_format: String,
}

fn default_sequence_format() -> String {
    "{sequence}.nextval".to_string()
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            style: NamingStyle::default(),
            identity: None,
            before: false,
            catalog: None,
            schema: None,
            sequence_format: default_sequence_format(),
        }
    }
}

impl MapperConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        if config.sequence_format.is_empty() {
            return Err(ConfigError::Parse("sequence_format must not be empty".to_string()));
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_style(mut self, style: NamingStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    #[must_use]
    pub fn with_before(mut self, before: bool) -> Self {
        self.before = before;
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    #[must_use]
    pub fn with_sequence_format(mut self, format: impl Into<String>) -> Self {
        self.sequence_format = format.into();
        self
    }

    /// The qualifier prefixed to table names, if any.
    pub fn table_prefix(&self) -> Option<&str> {
        self.catalog
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| self.schema.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
style = "camelhump_and_uppercase"
identity = "mysql"
before = true
schema = "app"
sequence_format = "nextval('{sequence}')"
"#;

        let config = MapperConfig::parse(toml).unwrap();
        assert_eq!(config.style, NamingStyle::CamelhumpAndUppercase);
        assert_eq!(config.identity.as_deref(), Some("mysql"));
        assert!(config.before);
        assert_eq!(config.table_prefix(), Some("app"));
        assert_eq!(config.sequence_format, "nextval('{sequence}')");
    }

    #[test]
    fn test_default_config() {
        let config = MapperConfig::parse("").unwrap();
        assert_eq!(config, MapperConfig::default());
        assert_eq!(config.style, NamingStyle::Camelhump);
        assert_eq!(config.sequence_format, "{sequence}.nextval");
        assert_eq!(config.table_prefix(), None);
    }

    #[test]
    fn test_catalog_wins_over_schema() {
        let config = MapperConfig::default()
            .with_schema("public")
            .with_catalog("main");
        assert_eq!(config.table_prefix(), Some("main"));
    }

    #[test]
    fn test_rejects_unknown_style() {
        let err = MapperConfig::parse("style = \"kebab\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_empty_sequence_format() {
        let err = MapperConfig::parse("sequence_format = \"\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
