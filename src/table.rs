use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// TableControlConfig
///
/// The declarative schema driving one listing page's table controls: the search
/// box, the filter dropdowns, the sort selector, and the responsive column set.
/// One instance exists per page, built once by its page module and never mutated
/// at runtime. All transient table state (current query string, selections,
/// hidden columns) lives in `interpreter::TableState`, not here.
///
/// The config carries no behavior. A single shared interpreter consumes it, so
/// adding a listing page means writing a new literal, not new table logic.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct TableControlConfig {
    pub query: QueryConfig,
    pub filters: Vec<FilterConfig>,
    pub sort_options: Vec<SortOption>,
    pub columns: Vec<ColumnConfig>,
}

/// QueryConfig
///
/// Search-box configuration: the placeholder text and, per viewport class, the
/// ordered list of column ids the query string is matched against. Both lists
/// must reference ids declared in `TableControlConfig::columns`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct QueryConfig {
    pub placeholder: String,
    pub desktop_columns: Vec<String>,
    pub mobile_columns: Vec<String>,
}

/// FilterConfig
///
/// One filter dropdown: the column it constrains, its UI labels, and the closed
/// set of selectable options. Option values must be unique within one filter.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct FilterConfig {
    pub column_id: String,
    pub label: String,
    pub placeholder: String,
    pub options: Vec<FilterOption>,
}

/// A single selectable filter entry: display label plus the exact value rows
/// are matched against.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

/// One selectable sort criterion, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct SortOption {
    pub column_id: String,
    pub label: String,
}

/// ColumnConfig
///
/// One displayable column. Non-hideable columns (identity and actions columns)
/// are always rendered regardless of the user's column-visibility preference.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[ts(export)]
pub struct ColumnConfig {
    pub column_id: String,
    pub label: String,
    pub hideable: bool,
}

impl QueryConfig {
    pub fn new(placeholder: &str, desktop_columns: &[&str], mobile_columns: &[&str]) -> Self {
        Self {
            placeholder: placeholder.to_string(),
            desktop_columns: desktop_columns.iter().map(|s| s.to_string()).collect(),
            mobile_columns: mobile_columns.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FilterConfig {
    pub fn new(column_id: &str, label: &str, placeholder: &str, options: Vec<FilterOption>) -> Self {
        Self {
            column_id: column_id.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            options,
        }
    }
}

impl FilterOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

impl SortOption {
    pub fn new(column_id: &str, label: &str) -> Self {
        Self {
            column_id: column_id.to_string(),
            label: label.to_string(),
        }
    }
}

impl ColumnConfig {
    pub fn new(column_id: &str, label: &str, hideable: bool) -> Self {
        Self {
            column_id: column_id.to_string(),
            label: label.to_string(),
            hideable,
        }
    }
}

/// ConfigError
///
/// A malformed table-control config. These are development-time defects: every
/// shipped page config is checked by `validate` in the test suite, and the
/// runtime interpreter assumes configs are well formed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("duplicate column id: {0}")]
    DuplicateColumn(String),
    #[error("{referenced_by} references unknown column id: {column_id}")]
    UnknownColumn {
        referenced_by: &'static str,
        column_id: String,
    },
    #[error("filter '{filter}' has duplicate option value: {value}")]
    DuplicateFilterValue { filter: String, value: String },
}

impl TableControlConfig {
    /// validate
    ///
    /// Checks the structural invariants of the config:
    /// 1. Column ids are unique.
    /// 2. Every column id referenced by the query lists, the filters, and the
    ///    sort options names a declared column.
    /// 3. Option values within each filter are unique.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Column id uniqueness.
        let mut known: HashSet<&str> = HashSet::new();
        for column in &self.columns {
            if !known.insert(column.column_id.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.column_id.clone()));
            }
        }

        // 2. Referential integrity for every column id used elsewhere.
        let check = |referenced_by: &'static str, column_id: &str| {
            if known.contains(column_id) {
                Ok(())
            } else {
                Err(ConfigError::UnknownColumn {
                    referenced_by,
                    column_id: column_id.to_string(),
                })
            }
        };
        for id in &self.query.desktop_columns {
            check("query.desktop_columns", id)?;
        }
        for id in &self.query.mobile_columns {
            check("query.mobile_columns", id)?;
        }
        for filter in &self.filters {
            check("filters", &filter.column_id)?;
        }
        for sort in &self.sort_options {
            check("sort_options", &sort.column_id)?;
        }

        // 3. Option value uniqueness within each filter.
        for filter in &self.filters {
            let mut seen: HashSet<&str> = HashSet::new();
            for option in &filter.options {
                if !seen.insert(option.value.as_str()) {
                    return Err(ConfigError::DuplicateFilterValue {
                        filter: filter.column_id.clone(),
                        value: option.value.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
