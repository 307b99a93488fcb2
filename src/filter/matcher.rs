use super::error::FilterParseError;
use super::evaluator::compare;
use super::parser::{ColumnRef, FilterExpression};
use super::spec::FilterSpec;
use crate::config::{ColumnKind, Layout};

/// Per-column value/operator pairs, as submitted through the search form.
///
/// A blank or missing value leaves the column unconstrained; a missing or
/// unrecognized operator means `=`.
#[derive(Debug, Clone, Default)]
pub struct FormQuery {
    fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub column: String,
    pub value: Option<String>,
    pub operator: Option<String>,
}

impl FormQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(
        mut self,
        column: impl Into<String>,
        value: Option<impl Into<String>>,
        operator: Option<impl Into<String>>,
    ) -> Self {
        self.fields.push(FormField {
            column: column.into(),
            value: value.map(Into::into),
            operator: operator.map(Into::into),
        });
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Resolve every field against the layout.
    ///
    /// Fields without a value still produce a (no-op) spec so that the
    /// caller sees every submitted column.
    pub fn to_specs(&self, layout: &Layout<'_>) -> Result<Vec<FilterSpec>, FilterParseError> {
        self.fields
            .iter()
            .map(|field| {
                let column = layout
                    .resolve(&field.column)
                    .ok_or_else(|| FilterParseError::UnknownColumn(field.column.clone()))?;
                Ok(FilterSpec::from_form(
                    column.position,
                    field.value.as_deref(),
                    field.operator.as_deref(),
                ))
            })
            .collect()
    }
}

/// Convert a FilterExpression to filter specs
pub fn to_filter_specs(
    expr: &FilterExpression,
    layout: &Layout<'_>,
) -> Result<Vec<FilterSpec>, FilterParseError> {
    expr.terms
        .iter()
        .map(|term| {
            let position = match &term.column {
                ColumnRef::Position(position) => *position,
                ColumnRef::Name(name) => layout
                    .resolve(name)
                    .map(|c| c.position)
                    .ok_or_else(|| FilterParseError::UnknownColumn(name.clone()))?,
            };
            Ok(FilterSpec::new(position, term.operator, Some(&term.value)))
        })
        .collect()
}

/// Warnings for filters that can never match
///
/// A value that does not parse as a number on a numeric column narrows the
/// result to nothing. That is legal, but usually a typo.
pub fn filter_warnings(specs: &[FilterSpec], layout: &Layout<'_>) -> Vec<String> {
    specs
        .iter()
        .filter_map(|spec| {
            let value = spec.active_value()?;
            let kind = layout.kind_at(spec.column);
            if kind.is_numeric() && compare(ColumnKind::Numeric, value, value).is_none() {
                Some(format!(
                    "Warning: '{}' is not a number, filter {} {} {} matches no nodes",
                    value,
                    layout.name_at(spec.column),
                    spec.operator,
                    value
                ))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use crate::filter::Operator;

    #[test]
    fn test_form_query_resolves_columns() {
        let layout = default_config().layout();
        let specs = FormQuery::new()
            .field("build", Some("10"), None::<&str>)
            .field("port", Some("80"), Some(">"))
            .field("uptime", Some(""), Some("<"))
            .to_specs(&layout)
            .unwrap();

        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].column, 1);
        assert_eq!(specs[0].operator, Operator::Eq);
        assert_eq!(specs[1].column, 4);
        assert_eq!(specs[1].operator, Operator::Gt);
        assert!(!specs[2].is_active());
    }

    #[test]
    fn test_form_query_unknown_column() {
        let layout = default_config().layout();
        let result = FormQuery::new()
            .field("latency", Some("1"), None::<&str>)
            .to_specs(&layout);
        assert_eq!(
            result,
            Err(FilterParseError::UnknownColumn("latency".to_string()))
        );
    }

    #[test]
    fn test_expression_to_specs() {
        let layout = default_config().layout();
        let expr = FilterExpression::parse("ip = 10.0.0.1 & #10 > 3 & Y<=2.5").unwrap();
        let specs = to_filter_specs(&expr, &layout).unwrap();

        let columns: Vec<usize> = specs.iter().map(|s| s.column).collect();
        assert_eq!(columns, vec![3, 10, 8]);
        assert_eq!(specs[2].value.as_deref(), Some("2.5"));
    }

    #[test]
    fn test_warns_on_non_numeric_value() {
        let layout = default_config().layout();
        let specs = vec![
            FilterSpec::new(4, Operator::Gt, Some("eighty")),
            FilterSpec::new(4, Operator::Gt, Some("80")),
            FilterSpec::new(2, Operator::Eq, Some("planet")),
        ];
        let warnings = filter_warnings(&specs, &layout);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("eighty"));
    }
}
