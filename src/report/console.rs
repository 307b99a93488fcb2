use super::entities::QueryReport;
use super::{create_styled_table, format_seconds};
use crate::config::{ColumnKind, FinderConfig};
use colored::Colorize;
use comfy_table::Cell;
use std::fmt::Write as _;

/// Listing in the shape of the node search page:
/// `N - <name> <host>:<port>` per node, then the match count.
pub fn format_listing(report: &QueryReport, config: &FinderConfig) -> String {
    let layout = config.layout();
    let display = &config.display;
    let mut out = String::new();

    let _ = writeln!(out, "Matching nodes:");
    for node in &report.matches {
        let _ = writeln!(
            out,
            "{} - {} {}:{}",
            node.rank,
            node.named(&layout, &display.label_column),
            node.named(&layout, &display.host_column),
            node.named(&layout, &display.port_column)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", match_count_line(report));
    out
}

fn match_count_line(report: &QueryReport) -> String {
    format!("{} nodes matched the search criteria.", report.matched)
}

/// Every column of every match, one row per node
pub fn format_table(report: &QueryReport, config: &FinderConfig) -> String {
    let layout = config.layout();
    let width = report
        .matches
        .iter()
        .map(|m| m.record.width())
        .chain(layout.columns().iter().map(|c| c.position))
        .max()
        .unwrap_or(0);

    let names: Vec<String> = (1..=width).map(|pos| layout.name_at(pos)).collect();
    let mut headers: Vec<&str> = vec!["#", "Line"];
    headers.extend(names.iter().map(String::as_str));

    let mut table = create_styled_table(&headers);
    for node in &report.matches {
        let mut row = vec![Cell::new(node.rank), Cell::new(node.line)];
        for pos in 1..=width {
            let raw = node.record.field(pos).unwrap_or("");
            let shown = match layout.kind_at(pos) {
                ColumnKind::Seconds => format_seconds(raw),
                _ => raw.to_string(),
            };
            row.push(Cell::new(shown));
        }
        table.add_row(row);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{table}");
    let _ = writeln!(out, "{}", match_count_line(report));
    out
}

/// Prints a query report to stdout with emphasis on the count line
pub fn display_query_report(text: &str, report: &QueryReport) {
    let count_line = match_count_line(report);
    for line in text.lines() {
        if line == count_line {
            if report.matched == 0 {
                println!("{}", line.yellow().bold());
            } else {
                println!("{}", line.green().bold());
            }
        } else if line == "Matching nodes:" {
            println!("{}", line.bold());
        } else {
            println!("{line}");
        }
    }
}
