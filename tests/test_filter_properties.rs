use node_finder::config::default_config;
use node_finder::filter::{Evaluator, FilterSpec, Operator};
use node_finder::loader::{Record, load};

const BUILD: usize = 1;
const PORT: usize = 4;
const UPTIME: usize = 5;
const ESTIMATE: usize = 9;

const SAMPLE: &str = "A 10 srv1 80 100 50 1 1 5\nB 9 srv2 81 200 60 2 2 9\n";

const INVENTORY: &str = "\
10 planet1 10.0.0.1 3630 86400 120 1.5 -2.0 350
10 planet2 10.0.0.2 3630 3600 80 0.5 1.0 340

11 planet3 10.0.0.3 3631 172800 200 -3.0 4.5 360
9 planet4 10.0.0.4
12 planet5 10.0.0.5 3632 60 10 2.0 2.0 n/a
";

fn select(raw: &str, specs: &[FilterSpec]) -> Vec<Record> {
    Evaluator::new(default_config().layout()).select(load(raw), specs)
}

fn spec(column: usize, op: &str, value: &str) -> FilterSpec {
    FilterSpec::from_form(column, Some(value), Some(op))
}

fn first_fields(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.field(1).unwrap_or("")).collect()
}

#[test]
fn test_port_greater_than_keeps_second_record() {
    let selected = select(SAMPLE, &[spec(PORT, ">", "80")]);
    assert_eq!(first_fields(&selected), vec!["B"]);
}

#[test]
fn test_port_greater_or_equal_keeps_both() {
    let selected = select(SAMPLE, &[spec(PORT, ">=", "80")]);
    assert_eq!(first_fields(&selected), vec!["A", "B"]);
}

#[test]
fn test_missing_operator_defaults_to_equality() {
    let selected = select(SAMPLE, &[FilterSpec::from_form(BUILD, Some("A"), None)]);
    assert_eq!(first_fields(&selected), vec!["A"]);

    let selected = select(SAMPLE, &[FilterSpec::from_form(BUILD, Some("A"), Some("~"))]);
    assert_eq!(first_fields(&selected), vec!["A"]);
}

#[test]
fn test_blank_value_never_removes_records() {
    for op in ["=", ">", "<", ">=", "<=", "bogus"] {
        let selected = select(SAMPLE, &[FilterSpec::from_form(UPTIME, Some("  "), Some(op))]);
        assert_eq!(selected.len(), 2, "operator {op}");

        let selected = select(INVENTORY, &[FilterSpec::from_form(UPTIME, None, Some(op))]);
        assert_eq!(selected.len(), 6, "operator {op}");
    }
}

#[test]
fn test_empty_filter_list_is_identity() {
    let records = load(INVENTORY);
    let selected = select(INVENTORY, &[]);
    assert_eq!(selected, records);
}

#[test]
fn test_empty_input_has_no_matches() {
    assert!(load("").is_empty());
    assert!(select("", &[spec(PORT, ">", "0")]).is_empty());
}

#[test]
fn test_absent_column_removes_row() {
    let selected = select(INVENTORY, &[spec(PORT, ">", "0")]);
    assert_eq!(
        first_fields(&selected),
        vec!["10", "10", "11", "12"],
        "blank and short rows have no port"
    );

    assert!(select(INVENTORY, &[spec(42, "<", "zzz")]).is_empty());
}

#[test]
fn test_result_is_ordered_subset() {
    let records = load(INVENTORY);
    let selected = select(INVENTORY, &[spec(UPTIME, ">=", "3600")]);

    let mut cursor = records.iter();
    for kept in &selected {
        assert!(
            cursor.any(|r| r == kept),
            "record on line {} out of order",
            kept.source_line_number
        );
    }
    let lines: Vec<usize> = selected.iter().map(|r| r.source_line_number).collect();
    assert_eq!(lines, vec![1, 2, 4]);
}

#[test]
fn test_filters_are_idempotent() {
    let specs = [spec(PORT, "<=", "3631"), spec(ESTIMATE, ">", "340")];
    let evaluator = Evaluator::new(default_config().layout());

    let once = evaluator.select(load(INVENTORY), &specs);
    let twice = evaluator.select(once.clone(), &specs);
    assert_eq!(once, twice);
    assert_eq!(first_fields(&once), vec!["10", "11"]);
}

#[test]
fn test_filter_order_does_not_matter() {
    let specs = [
        spec(BUILD, ">=", "10"),
        spec(UPTIME, ">", "100"),
        spec(7, "<", "2"),
    ];
    let expected = select(INVENTORY, &specs);
    assert_eq!(first_fields(&expected), vec!["10", "10", "11"]);

    let permutations = [[0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    for order in permutations {
        let permuted: Vec<FilterSpec> = order.iter().map(|&i| specs[i].clone()).collect();
        assert_eq!(select(INVENTORY, &permuted), expected, "order {order:?}");
    }
}

#[test]
fn test_non_numeric_value_on_numeric_column_narrows_to_nothing() {
    assert!(select(INVENTORY, &[spec(PORT, ">", "eighty")]).is_empty());
}

#[test]
fn test_non_numeric_field_only_fails_its_row() {
    let selected = select(INVENTORY, &[spec(ESTIMATE, ">=", "0")]);
    assert_eq!(first_fields(&selected), vec!["10", "10", "11"]);
}

#[test]
fn test_numeric_comparison_is_not_lexicographic() {
    let selected = select(INVENTORY, &[spec(UPTIME, "<", "10000")]);
    assert_eq!(first_fields(&selected), vec!["10", "12"]);

    let selected = select(INVENTORY, &[spec(8, "<", "0")]);
    assert_eq!(first_fields(&selected), vec!["10"]);
}

#[test]
fn test_apply_marks_flags_in_place() {
    let mut records = load(SAMPLE);
    Evaluator::new(default_config().layout())
        .apply(&mut records, &[FilterSpec::new(PORT, Operator::Lt, Some("81"))]);

    assert!(records[0].is_matching());
    assert!(!records[1].is_matching());
}
