use super::operator::Operator;
use serde::Serialize;

/// A single-column constraint: `field[column] OP value`.
///
/// A spec without a value leaves its column unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub column: usize,
    pub operator: Operator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FilterSpec {
    /// Blank values are normalized to `None`.
    pub fn new(column: usize, operator: Operator, value: Option<impl AsRef<str>>) -> Self {
        let value = value
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty());

        Self {
            column,
            operator,
            value,
        }
    }

    /// Builds a spec from raw form strings, defaulting unknown operators to `=`.
    pub fn from_form(column: usize, value: Option<&str>, operator: Option<&str>) -> Self {
        Self::new(column, Operator::parse_lenient(operator), value)
    }

    /// The value to compare against, or `None` when the column is
    /// unconstrained. Blank values count as unconstrained however the spec
    /// was built.
    pub fn active_value(&self) -> Option<&str> {
        self.value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn is_active(&self) -> bool {
        self.active_value().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_value_is_inactive() {
        assert!(!FilterSpec::new(4, Operator::Gt, Some("   ")).is_active());
        assert!(!FilterSpec::new(4, Operator::Gt, None::<&str>).is_active());
        assert!(FilterSpec::new(4, Operator::Gt, Some(" 80 ")).is_active());
    }

    #[test]
    fn test_literal_with_blank_value_is_inactive() {
        let spec = FilterSpec {
            column: 5,
            operator: Operator::Gt,
            value: Some("   ".to_string()),
        };
        assert!(!spec.is_active());
        assert_eq!(spec.active_value(), None);

        let spec = FilterSpec {
            column: 5,
            operator: Operator::Gt,
            value: Some(" 80 ".to_string()),
        };
        assert_eq!(spec.active_value(), Some("80"));
    }

    #[test]
    fn test_value_is_trimmed() {
        let spec = FilterSpec::from_form(4, Some(" 80\t"), Some(">"));
        assert_eq!(spec.value.as_deref(), Some("80"));
        assert_eq!(spec.operator, Operator::Gt);
    }
}
