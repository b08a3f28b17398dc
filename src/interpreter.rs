use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::table::{ColumnConfig, TableControlConfig};

/// CellValue
///
/// The value a row yields for one column id. `Missing` is the sentinel for a
/// field the row does not carry: it stringifies to the empty string, never
/// matches an active filter, and sorts after every present value. Because every
/// lookup funnels into this type, the interpreter never fails on a column id
/// that is absent from a row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
    Missing,
}

impl CellValue {
    /// The display/search form of the value. Whole numbers render without a
    /// trailing fraction so filter option values can be written as plain
    /// integers.
    pub fn render(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                format!("{}", *n as i64)
            }
            CellValue::Number(n) => n.to_string(),
            CellValue::Date(d) => d.to_rfc3339(),
            CellValue::Missing => String::new(),
        }
    }
}

/// TableRow
///
/// Implemented by every entity that appears in a listing page. The contract is
/// total: unknown column ids return `CellValue::Missing` rather than panicking,
/// which is what lets one interpreter serve every page.
pub trait TableRow {
    fn cell(&self, column_id: &str) -> CellValue;
}

/// Rows decoded straight from a query-cache payload are JSON objects; map their
/// fields onto cell values so ad-hoc data can flow through the same interpreter
/// as the typed models. Non-object values and unknown keys yield `Missing`.
impl TableRow for serde_json::Value {
    fn cell(&self, column_id: &str) -> CellValue {
        match self.get(column_id) {
            Some(serde_json::Value::String(s)) => CellValue::Text(s.clone()),
            Some(serde_json::Value::Number(n)) => {
                n.as_f64().map(CellValue::Number).unwrap_or(CellValue::Missing)
            }
            Some(serde_json::Value::Bool(b)) => CellValue::Text(b.to_string()),
            _ => CellValue::Missing,
        }
    }
}

/// Viewport class the table is rendered in. Decides which column subset the
/// search query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// The active sort criterion chosen from `TableControlConfig::sort_options`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SortSelection {
    pub column_id: String,
    pub direction: SortDirection,
}

/// TableState
///
/// The transient, per-session UI state of one rendered table: what the user has
/// typed, selected, and hidden. Owned by the rendering component instance and
/// rebuilt freely; the page's `TableControlConfig` never changes in response.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    // Raw search-box contents. Trimmed and lowercased before matching.
    pub query: String,
    // Active filter selections: column id to the selected option value.
    pub filters: HashMap<String, String>,
    pub sort: Option<SortSelection>,
    pub viewport: Viewport,
    // Column ids the user has toggled out of view. Non-hideable ids listed
    // here are ignored.
    pub hidden_columns: HashSet<String>,
}

/// TableView
///
/// The render-ready output of `interpret`: the rows that survive search and
/// filtering, in sorted order, plus the column set left visible. The same
/// column list applies to every row.
#[derive(Debug)]
pub struct TableView<'a, R> {
    pub visible_columns: Vec<ColumnConfig>,
    pub rows: Vec<&'a R>,
}

/// interpret
///
/// The single shared table-control interpreter. Applies the page's config and
/// the user's transient state to a raw row collection and produces the view to
/// render. Pure and synchronous: no side effects, no suspension, safe to call
/// on every render pass.
///
/// Semantics:
/// 1. Search: case-insensitive, trimmed substring match against the columns
///    named for the current viewport. An empty query matches every row.
/// 2. Filters: exact match on the selected option value, all active filters
///    combined with AND.
/// 3. Sort: stable order by the selected column, missing values last. No
///    selection preserves the data source's original order.
/// 4. Columns: the declared columns minus hidden ids, with non-hideable
///    columns always retained.
pub fn interpret<'a, R: TableRow>(
    config: &TableControlConfig,
    state: &TableState,
    rows: &'a [R],
) -> TableView<'a, R> {
    let needle = state.query.trim().to_lowercase();
    let search_columns = match state.viewport {
        Viewport::Desktop => &config.query.desktop_columns,
        Viewport::Mobile => &config.query.mobile_columns,
    };

    let mut selected: Vec<&'a R> = rows
        .iter()
        .filter(|row| matches_query(*row, search_columns, &needle))
        .filter(|row| matches_filters(*row, &state.filters))
        .collect();

    if let Some(sort) = &state.sort {
        // Vec::sort_by is stable, so equal keys keep their original relative
        // order.
        selected.sort_by(|a, b| {
            compare_cells(a.cell(&sort.column_id), b.cell(&sort.column_id), sort.direction)
        });
    }

    let visible_columns = config
        .columns
        .iter()
        .filter(|column| !column.hideable || !state.hidden_columns.contains(&column.column_id))
        .cloned()
        .collect();

    TableView {
        visible_columns,
        rows: selected,
    }
}

/// matches_query
///
/// A row matches when any searched column's rendered value contains the
/// lowercased needle. Missing cells render empty and therefore never match a
/// non-empty needle.
fn matches_query<R: TableRow>(row: &R, columns: &[String], needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    columns
        .iter()
        .any(|id| row.cell(id).render().to_lowercase().contains(needle))
}

/// matches_filters
///
/// Every active filter must match exactly (logical AND). A missing cell fails
/// any active filter on its column.
fn matches_filters<R: TableRow>(row: &R, filters: &HashMap<String, String>) -> bool {
    filters.iter().all(|(column_id, selected)| {
        let cell = row.cell(column_id);
        !matches!(cell, CellValue::Missing) && cell.render() == *selected
    })
}

/// compare_cells
///
/// Total order over cell values for sorting. Missing sorts after every present
/// value regardless of direction; same-typed values use their natural order
/// (lexicographic, numeric, chronological); mixed-type cells fall back to
/// comparing rendered strings.
fn compare_cells(a: CellValue, b: CellValue, direction: SortDirection) -> Ordering {
    // Missing is pinned last before the direction is applied, so descending
    // sorts do not float absent values to the top.
    let ordering = match (&a, &b) {
        (CellValue::Missing, CellValue::Missing) => return Ordering::Equal,
        (CellValue::Missing, _) => return Ordering::Greater,
        (_, CellValue::Missing) => return Ordering::Less,
        (CellValue::Text(x), CellValue::Text(y)) => x.cmp(y),
        (CellValue::Number(x), CellValue::Number(y)) => x.total_cmp(y),
        (CellValue::Date(x), CellValue::Date(y)) => x.cmp(y),
        _ => a.render().cmp(&b.render()),
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
