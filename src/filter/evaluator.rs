use super::spec::FilterSpec;
use crate::config::{ColumnKind, Layout};
use crate::loader::Record;
use std::cmp::Ordering;

/// Applies conjunctions of [`FilterSpec`]s to records.
///
/// Each active spec narrows the set of matching records. Records that fail
/// a spec are never re-tested, so specs commute and re-applying them is a
/// no-op.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    layout: Layout<'a>,
}

impl<'a> Evaluator<'a> {
    pub fn new(layout: Layout<'a>) -> Self {
        Self { layout }
    }

    /// Downgrades the match flag of every record that fails a spec.
    pub fn apply(&self, records: &mut [Record], specs: &[FilterSpec]) {
        for spec in specs {
            self.apply_one(records, spec);
        }
    }

    fn apply_one(&self, records: &mut [Record], spec: &FilterSpec) {
        let Some(value) = spec.active_value() else {
            return;
        };
        let kind = self.layout.kind_at(spec.column);

        for record in records.iter_mut().filter(|r| r.is_matching()) {
            let satisfied = record
                .field(spec.column)
                .and_then(|field| compare(kind, field, value))
                .is_some_and(|ordering| spec.operator.accepts(ordering));

            if !satisfied {
                record.reject();
            }
        }
    }

    /// Runs the specs and keeps only the matching records, in input order.
    pub fn select(&self, mut records: Vec<Record>, specs: &[FilterSpec]) -> Vec<Record> {
        self.apply(&mut records, specs);
        records.retain(Record::is_matching);
        records
    }
}

/// Orders `field` against `value` for a column of the given kind.
///
/// `None` means the two cannot be compared, which fails every operator.
pub fn compare(kind: ColumnKind, field: &str, value: &str) -> Option<Ordering> {
    match kind {
        ColumnKind::Text => Some(field.cmp(value)),
        ColumnKind::Numeric | ColumnKind::Seconds => {
            let (lhs, rhs) = (parse_number(field)?, parse_number(value)?);
            lhs.partial_cmp(&rhs)
        }
        ColumnKind::Auto => match (parse_number(field), parse_number(value)) {
            (Some(lhs), Some(rhs)) => lhs.partial_cmp(&rhs),
            _ => Some(field.cmp(value)),
        },
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
