use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Free-form label for the loaded profile.
    pub profile_name: String,
    pub data_file: PathBuf,
    pub columns: Vec<ColumnDef>,
    pub display: DisplayRules,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            profile_name: "base".to_string(),
            data_file: PathBuf::from("nodes.info"),
            columns: default_columns(),
            display: DisplayRules::default(),
        }
    }
}

impl FinderConfig {
    pub fn layout(&self) -> Layout<'_> {
        Layout {
            columns: &self.columns,
        }
    }
}

/// How the values of a column are ordered when compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Lexicographic byte order.
    Text,
    /// Both sides parsed as floating point numbers.
    Numeric,
    /// Numeric, rendered as a duration.
    Seconds,
    /// Numeric when both sides parse, lexicographic otherwise.
    Auto,
}

impl ColumnKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Numeric | ColumnKind::Seconds)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    /// 1-based field position.
    pub position: usize,
    #[serde(default = "default_kind")]
    pub kind: ColumnKind,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub filterable: bool,
}

fn default_kind() -> ColumnKind {
    ColumnKind::Auto
}

impl ColumnDef {
    fn new(name: &str, position: usize, kind: ColumnKind, filterable: bool) -> Self {
        Self {
            name: name.to_string(),
            position,
            kind,
            aliases: Vec::new(),
            filterable,
        }
    }

    fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

fn default_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("build", 1, ColumnKind::Auto, true),
        ColumnDef::new("name", 2, ColumnKind::Text, false).with_aliases(&["hostname"]),
        ColumnDef::new("host", 3, ColumnKind::Text, false).with_aliases(&["ip"]),
        ColumnDef::new("port", 4, ColumnKind::Numeric, true),
        ColumnDef::new("uptime", 5, ColumnKind::Seconds, true),
        ColumnDef::new("storage", 6, ColumnKind::Numeric, true),
        ColumnDef::new("x_coord", 7, ColumnKind::Numeric, true).with_aliases(&["x"]),
        ColumnDef::new("y_coord", 8, ColumnKind::Numeric, true).with_aliases(&["y"]),
        ColumnDef::new("estimate", 9, ColumnKind::Numeric, true),
    ]
}

/// Columns used for the `N - <label> <host>:<port>` listing line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayRules {
    pub label_column: String,
    pub host_column: String,
    pub port_column: String,
}

impl Default for DisplayRules {
    fn default() -> Self {
        Self {
            label_column: "name".to_string(),
            host_column: "host".to_string(),
            port_column: "port".to_string(),
        }
    }
}

/// Read-only view over the configured columns.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    columns: &'a [ColumnDef],
}

impl<'a> Layout<'a> {
    pub fn columns(&self) -> &'a [ColumnDef] {
        self.columns
    }

    pub fn resolve(&self, name: &str) -> Option<&'a ColumnDef> {
        self.columns.iter().find(|c| c.answers_to(name))
    }

    pub fn at(&self, position: usize) -> Option<&'a ColumnDef> {
        self.columns.iter().find(|c| c.position == position)
    }

    /// Undeclared positions compare loosely.
    pub fn kind_at(&self, position: usize) -> ColumnKind {
        self.at(position).map(|c| c.kind).unwrap_or(ColumnKind::Auto)
    }

    pub fn filterable(&self) -> impl Iterator<Item = &'a ColumnDef> {
        self.columns.iter().filter(|c| c.filterable)
    }

    pub fn name_at(&self, position: usize) -> String {
        self.at(position)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("#{position}"))
    }
}

pub fn load_config(path: Option<&Path>) -> Result<FinderConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<FinderConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<FinderConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

pub fn default_config() -> &'static FinderConfig {
    static DEFAULT_CONFIG: LazyLock<FinderConfig> = LazyLock::new(FinderConfig::default);
    &DEFAULT_CONFIG
}
