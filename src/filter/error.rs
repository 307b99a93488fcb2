use thiserror::Error;

/// Errors that can occur when parsing filter expressions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("Unknown column: '{0}'")]
    UnknownColumn(String),

    #[error("Missing comparison operator in '{0}'. Valid operators are: =, >, <, >=, <=")]
    MissingOperator(String),

    #[error("Empty filter value for column '{0}'")]
    EmptyValue(String),

    #[error("Invalid filter expression: {0}")]
    InvalidExpression(String),
}
