//! Configuration for record collections
//!
//! Handles loading `recordlist.toml`:
//!
//! ```toml
//! default_order_by = "name, id"
//! on_missing_record = "skip"
//!
//! [tables.regions]
//! columns = ["id", "name", "code"]
//! ```

use indexmap::IndexMap;
use recordlist_core::{OrderBy, RecordListError, Schema};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "recordlist.toml";

// ============================================================================
// Missing record policy
// ============================================================================

/// What a load does when the id scan returns an id the hydrator cannot find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingRecordPolicy {
    /// Fail the whole load with `RecordNotFound`.
    #[default]
    Abort,
    /// Leave the id out and keep loading.
    Skip,
}

impl MissingRecordPolicy {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }
}

impl std::fmt::Display for MissingRecordPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Raw TOML shape
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default = "default_order_by")]
    default_order_by: String,
    #[serde(default)]
    on_missing_record: MissingRecordPolicy,
    #[serde(default)]
    tables: IndexMap<String, RawTable>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTable {
    columns: Vec<String>,
}

fn default_order_by() -> String {
    "id".into()
}

// ============================================================================
// Config
// ============================================================================

/// Validated collection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionConfig {
    default_order_by: OrderBy,
    on_missing_record: MissingRecordPolicy,
    schema: Option<Schema>,
}

impl CollectionConfig {
    /// Load from default config file
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.into())
            } else {
                ConfigError::Io(path.into(), e)
            }
        })?;

        let raw: RawConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseFile(path.into(), e))?;
        Self::from_raw(raw)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_raw(toml::from_str(content)?)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let default_order_by = OrderBy::parse(&raw.default_order_by)?;

        let schema = if raw.tables.is_empty() {
            None
        } else {
            let mut schema = Schema::new();
            for (name, table) in raw.tables {
                schema.add_table(&name, table.columns)?;
            }
            Some(schema)
        };

        Ok(Self {
            default_order_by,
            on_missing_record: raw.on_missing_record,
            schema,
        })
    }

    pub fn with_default_order_by(mut self, order_by: OrderBy) -> Self {
        self.default_order_by = order_by;
        self
    }

    pub fn with_missing_record_policy(mut self, policy: MissingRecordPolicy) -> Self {
        self.on_missing_record = policy;
        self
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn default_order_by(&self) -> &OrderBy {
        &self.default_order_by
    }

    pub fn on_missing_record(&self) -> MissingRecordPolicy {
        self.on_missing_record
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    ParseFile(PathBuf, #[source] toml::de::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] RecordListError),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = CollectionConfig::from_toml_str("").unwrap();
        assert_eq!(cfg.default_order_by().to_string(), "id");
        assert_eq!(cfg.on_missing_record(), MissingRecordPolicy::Abort);
        assert!(cfg.schema().is_none());
        assert_eq!(cfg, CollectionConfig::default());
    }

    #[test]
    fn full() {
        let cfg = CollectionConfig::from_toml_str(
            r#"
            default_order_by = "name DESC, id"
            on_missing_record = "skip"

            [tables.regions]
            columns = ["id", "name"]

            [tables.accounts]
            columns = ["id", "status", "region"]
        "#,
        )
        .unwrap();
        assert_eq!(cfg.default_order_by().to_string(), "name desc, id");
        assert_eq!(cfg.on_missing_record(), MissingRecordPolicy::Skip);
        let schema = cfg.schema().unwrap();
        assert_eq!(
            schema.tables().map(|t| t.name()).collect::<Vec<_>>(),
            ["regions", "accounts"]
        );
    }

    #[test]
    fn rejects_bad_order_by() {
        let err = CollectionConfig::from_toml_str(r#"default_order_by = "random()""#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(RecordListError::InvalidOrderBy(_))
        ));
    }

    #[test]
    fn rejects_table_without_id() {
        let err = CollectionConfig::from_toml_str(
            r#"
            [tables.logs]
            columns = ["message"]
        "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(RecordListError::MissingId { .. })
        ));
    }

    #[test]
    fn rejects_unknown_keys_and_policies() {
        assert!(matches!(
            CollectionConfig::from_toml_str(r#"order = "id""#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CollectionConfig::from_toml_str(r#"on_missing_record = "retry""#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "on_missing_record = \"skip\"\n").unwrap();

        let cfg = CollectionConfig::load_from(&path).unwrap();
        assert_eq!(cfg.on_missing_record(), MissingRecordPolicy::Skip);

        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            CollectionConfig::load_from(&missing),
            Err(ConfigError::NotFound(p)) if p == missing
        ));
    }
}
