use super::error::FilterParseError;
use super::operator::Operator;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static TERM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\S.*?)\s*(>=|<=|==|=|>|<)\s*(.*?)\s*$").expect("valid term regex")
});
static COLUMN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#\d+|[A-Za-z_][A-Za-z0-9_-]*)$").expect("valid column regex"));

/// How a term names its column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    /// Column name or alias, resolved against the layout
    Name(String),
    /// Explicit 1-based field position (`#N`)
    Position(usize),
}

impl FromStr for ColumnRef {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !COLUMN_RE.is_match(s) {
            return Err(FilterParseError::InvalidExpression(format!(
                "'{}' is not a column name or #position",
                s
            )));
        }

        match s.strip_prefix('#') {
            Some(digits) => match digits.parse::<usize>() {
                Ok(position) if position > 0 => Ok(ColumnRef::Position(position)),
                _ => Err(FilterParseError::InvalidExpression(format!(
                    "column position must be 1 or greater, got: {}",
                    s
                ))),
            },
            None => Ok(ColumnRef::Name(s.to_string())),
        }
    }
}

impl std::fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnRef::Name(name) => f.write_str(name),
            ColumnRef::Position(position) => write!(f, "#{position}"),
        }
    }
}

/// A single comparison (e.g., "port>=80" or "uptime < 3600")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTerm {
    pub column: ColumnRef,
    pub operator: Operator,
    pub value: String,
}

impl FilterTerm {
    /// Parse a single filter term from a string
    pub fn parse(s: &str) -> Result<Self, FilterParseError> {
        let caps = TERM_RE
            .captures(s)
            .ok_or_else(|| FilterParseError::MissingOperator(s.trim().to_string()))?;

        let column: ColumnRef = caps[1].parse()?;
        let operator: Operator = caps[2]
            .parse()
            .map_err(|_| FilterParseError::MissingOperator(s.trim().to_string()))?;
        let value = caps[3].to_string();

        if value.is_empty() {
            return Err(FilterParseError::EmptyValue(column.to_string()));
        }

        Ok(FilterTerm {
            column,
            operator,
            value,
        })
    }
}

/// A conjunction of filter terms joined with `&`
#[derive(Debug, Clone, Default)]
pub struct FilterExpression {
    pub terms: Vec<FilterTerm>,
}

impl FilterExpression {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Parse a filter expression from a string
    ///
    /// A blank expression has no terms.
    pub fn parse(s: &str) -> Result<Self, FilterParseError> {
        if s.trim().is_empty() {
            return Ok(Self::new());
        }

        let mut terms = Vec::new();
        for part in s.split('&') {
            if part.trim().is_empty() {
                return Err(FilterParseError::InvalidExpression(format!(
                    "empty term in '{}'",
                    s.trim()
                )));
            }
            terms.push(FilterTerm::parse(part)?);
        }

        Ok(FilterExpression { terms })
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn extend(&mut self, other: FilterExpression) {
        self.terms.extend(other.terms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_term() {
        let term = FilterTerm::parse("port>=80").unwrap();
        assert_eq!(term.column, ColumnRef::Name("port".to_string()));
        assert_eq!(term.operator, Operator::Ge);
        assert_eq!(term.value, "80");
    }

    #[test]
    fn test_parse_spaced_term() {
        let term = FilterTerm::parse("  uptime <  3600 ").unwrap();
        assert_eq!(term.column, ColumnRef::Name("uptime".to_string()));
        assert_eq!(term.operator, Operator::Lt);
        assert_eq!(term.value, "3600");
    }

    #[test]
    fn test_parse_position_term() {
        let term = FilterTerm::parse("#9 = 120").unwrap();
        assert_eq!(term.column, ColumnRef::Position(9));
        assert_eq!(term.operator, Operator::Eq);
    }

    #[test]
    fn test_parse_expression() {
        let expr = FilterExpression::parse("build = 10 & port>80 & hostname=planet1").unwrap();
        assert_eq!(expr.terms.len(), 3);
        assert_eq!(expr.terms[1].operator, Operator::Gt);
        assert_eq!(expr.terms[2].value, "planet1");
    }

    #[test]
    fn test_blank_expression_is_empty() {
        assert!(FilterExpression::parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_missing_operator() {
        assert_eq!(
            FilterTerm::parse("port 80"),
            Err(FilterParseError::MissingOperator("port 80".to_string()))
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(
            FilterTerm::parse("port >="),
            Err(FilterParseError::EmptyValue("port".to_string()))
        );
    }

    #[test]
    fn test_invalid_terms() {
        assert!(FilterExpression::parse("port=1 && build=2").is_err());
        assert!(FilterTerm::parse("#0=1").is_err());
        assert!(FilterTerm::parse("po rt=1").is_err());
    }
}
