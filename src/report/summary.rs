use super::{create_styled_table, format_seconds};
use crate::config::{ColumnKind, FinderConfig};
use crate::filter::compare;
use crate::loader::Record;
use comfy_table::Cell;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Shape of a loaded inventory
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub blank_records: usize,
    /// Field count → number of records with that many fields
    pub width_histogram: BTreeMap<usize, usize>,
    pub columns: Vec<ColumnStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnStats {
    pub name: String,
    pub position: usize,
    pub kind: ColumnKind,
    pub present: usize,
    /// Values that fail to parse on a numeric column
    pub unparseable: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

/// Collects per-column statistics, ordering values the way filters do
pub fn summarize(records: &[Record], config: &FinderConfig) -> DatasetSummary {
    let mut width_histogram = BTreeMap::new();
    for record in records {
        *width_histogram.entry(record.width()).or_insert(0) += 1;
    }

    let columns = config
        .columns
        .iter()
        .map(|column| {
            let mut stats = ColumnStats {
                name: column.name.clone(),
                position: column.position,
                kind: column.kind,
                present: 0,
                unparseable: 0,
                min: None,
                max: None,
            };

            for value in records.iter().filter_map(|r| r.field(column.position)) {
                stats.present += 1;
                if column.kind.is_numeric() && compare(column.kind, value, value).is_none() {
                    stats.unparseable += 1;
                    continue;
                }
                if stats
                    .min
                    .as_deref()
                    .is_none_or(|min| compare(column.kind, value, min).is_some_and(|o| o.is_lt()))
                {
                    stats.min = Some(value.to_string());
                }
                if stats
                    .max
                    .as_deref()
                    .is_none_or(|max| compare(column.kind, value, max).is_some_and(|o| o.is_gt()))
                {
                    stats.max = Some(value.to_string());
                }
            }

            stats
        })
        .collect();

    DatasetSummary {
        total_records: records.len(),
        blank_records: records.iter().filter(|r| r.is_blank()).count(),
        width_histogram,
        columns,
    }
}

/// Format a dataset summary as text
pub fn format_summary_text(summary: &DatasetSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Records:       {}", summary.total_records);
    let _ = writeln!(out, "Blank lines:   {}", summary.blank_records);
    let widths: Vec<String> = summary
        .width_histogram
        .iter()
        .map(|(width, count)| format!("{width} fields x{count}"))
        .collect();
    let _ = writeln!(out, "Row widths:    {}", widths.join(", "));
    let _ = writeln!(out);

    let mut table = create_styled_table(&[
        "Column",
        "Position",
        "Kind",
        "Present",
        "Unparseable",
        "Min",
        "Max",
    ]);

    for column in &summary.columns {
        let show = |value: &Option<String>| match (value, column.kind) {
            (Some(v), ColumnKind::Seconds) => format_seconds(v),
            (Some(v), _) => v.clone(),
            (None, _) => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(column.position),
            Cell::new(format!("{:?}", column.kind).to_lowercase()),
            Cell::new(column.present),
            Cell::new(column.unparseable),
            Cell::new(show(&column.min)),
            Cell::new(show(&column.max)),
        ]);
    }

    let _ = writeln!(out, "{table}");
    out
}
