use crate::config::{FinderConfig, Layout};
use crate::filter::{FilterSpec, Operator};
use crate::loader::Record;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one query, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub total_records: usize,
    pub matched: usize,
    pub filters: Vec<FilterSummary>,
    pub matches: Vec<MatchedNode>,
}

/// An active filter as the user sees it
#[derive(Debug, Clone, Serialize)]
pub struct FilterSummary {
    pub column: String,
    pub position: usize,
    pub operator: Operator,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchedNode {
    /// 1-based position in the match list
    pub rank: usize,
    pub line: usize,
    /// Field values keyed by column name (`#N` for undeclared positions)
    pub fields: BTreeMap<String, String>,
    #[serde(skip)]
    pub record: Record,
}

impl MatchedNode {
    /// Field by column name, empty when the column or the field is missing.
    pub fn named(&self, layout: &Layout<'_>, column: &str) -> String {
        layout
            .resolve(column)
            .and_then(|c| self.record.field(c.position))
            .unwrap_or_default()
            .to_string()
    }
}

/// Build the report from the selected records
///
/// Blank lines survive an empty filter list but describe no node, so they
/// count towards `total_records` and nowhere else.
pub fn build_query_report(
    total_records: usize,
    selected: Vec<Record>,
    specs: &[FilterSpec],
    config: &FinderConfig,
) -> QueryReport {
    let layout = config.layout();

    let filters = specs
        .iter()
        .filter_map(|spec| {
            spec.active_value().map(|value| FilterSummary {
                column: layout.name_at(spec.column),
                position: spec.column,
                operator: spec.operator,
                value: value.to_string(),
            })
        })
        .collect();

    let matches: Vec<MatchedNode> = selected
        .into_iter()
        .filter(|record| !record.is_blank())
        .enumerate()
        .map(|(idx, record)| {
            let fields = record
                .fields()
                .iter()
                .enumerate()
                .map(|(i, value)| (layout.name_at(i + 1), value.clone()))
                .collect();
            MatchedNode {
                rank: idx + 1,
                line: record.source_line_number,
                fields,
                record,
            }
        })
        .collect();

    QueryReport {
        total_records,
        matched: matches.len(),
        filters,
        matches,
    }
}

/// Generates JSON output for a query report
pub fn generate_json_output(report: &QueryReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        serde_json::json!({ "error": format!("Failed to serialize report: {e}") }).to_string()
    })
}
