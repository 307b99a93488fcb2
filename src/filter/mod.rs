//! Per-column filtering of node records
//!
//! Filters are `column operator value` comparisons combined with AND. They
//! come either from per-column form fields or from a compact expression.
//!
//! # Syntax
//!
//! ```text
//! column op value              Single comparison
//! term & term & ...            All terms must hold
//! ```
//!
//! Operators are `=`, `>`, `<`, `>=` and `<=`. Columns are named by the
//! layout (`build`, `port`, `uptime`, ...), by alias (`hostname`, `ip`),
//! or by position (`#9`).
//!
//! # Examples
//!
//! ```text
//! port >= 80                   # Ports 80 and above
//! build=10 & uptime>86400      # Build 10 nodes up for more than a day
//! #9 < 1000                    # Ninth field below 1000
//! ```

pub mod error;
pub mod evaluator;
pub mod matcher;
pub mod operator;
pub mod parser;
pub mod spec;

pub use error::FilterParseError;
pub use evaluator::{Evaluator, compare};
pub use matcher::{FormField, FormQuery, filter_warnings, to_filter_specs};
pub use operator::Operator;
pub use parser::{ColumnRef, FilterExpression, FilterTerm};
pub use spec::FilterSpec;
