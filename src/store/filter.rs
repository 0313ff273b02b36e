//! Filter expressions over declared record fields.
//!
//! Restricted on purpose: equality and comparison predicates only,
//! combined with AND semantics. Which fields may be filtered is governed
//! by an allow-list checked at query time.

use std::cmp::Ordering;

use serde_json::Value;

/// Comparison operators accepted in `where` clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Equals
    Eq,
    /// Not equals
    Ne,
    /// Less than
    Lt,
    /// Less than or equal
    Le,
    /// Greater than
    Gt,
    /// Greater than or equal
    Ge,
}

impl FilterOp {
    /// The operator token as it appears in a `where` clause.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "==",
            FilterOp::Ne => "!=",
            FilterOp::Lt => "<",
            FilterOp::Le => "<=",
            FilterOp::Gt => ">",
            FilterOp::Ge => ">=",
        }
    }
}

/// One `field <op> value` predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpr {
    /// Field to filter on
    pub field: String,
    /// Comparison operator
    pub op: FilterOp,
    /// Value to compare against
    pub value: Value,
}

impl FilterExpr {
    /// Create a new filter expression
    pub fn new(field: impl Into<String>, op: FilterOp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    /// Create an equality filter
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::new(field, FilterOp::Eq, value)
    }

    /// Whether a document matches this predicate.
    ///
    /// Ordering comparisons between incomparable types never match.
    pub fn matches(&self, doc: &Value) -> bool {
        let field_value = match doc.get(&self.field) {
            Some(v) => v,
            None => return false,
        };

        match self.op {
            FilterOp::Eq => field_value == &self.value,
            FilterOp::Ne => field_value != &self.value,
            FilterOp::Lt => {
                compare_values(field_value, &self.value) == Some(Ordering::Less)
            }
            FilterOp::Le => matches!(
                compare_values(field_value, &self.value),
                Some(Ordering::Less) | Some(Ordering::Equal)
            ),
            FilterOp::Gt => {
                compare_values(field_value, &self.value) == Some(Ordering::Greater)
            }
            FilterOp::Ge => matches!(
                compare_values(field_value, &self.value),
                Some(Ordering::Greater) | Some(Ordering::Equal)
            ),
        }
    }
}

/// Ordering between two JSON scalars, when comparable.
pub(crate) fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Predicates combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub filters: Vec<FilterExpr>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a predicate.
    pub fn and(mut self, filter: FilterExpr) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether a document matches every predicate.
    pub fn matches(&self, doc: &Value) -> bool {
        self.filters.iter().all(|f| f.matches(doc))
    }

    /// Fields referenced by any predicate.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(|f| f.field.as_str())
    }
}

/// Which declared fields may appear in filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAllowList {
    /// Every declared field is filterable.
    All,
    /// The filter system is disabled; any filter is rejected.
    None,
    /// Only the listed fields are filterable.
    Fields(Vec<String>),
}

impl FilterAllowList {
    /// Builds an allow-list from a configured pattern list.
    ///
    /// An empty list disables filtering; a `"*"` entry allows every
    /// declared field; anything else enumerates the filterable fields.
    pub fn from_patterns(patterns: &[String]) -> Self {
        if patterns.is_empty() {
            FilterAllowList::None
        } else if patterns.iter().any(|p| p == "*") {
            FilterAllowList::All
        } else {
            FilterAllowList::Fields(patterns.to_vec())
        }
    }

    /// Whether the given field may be filtered on.
    pub fn permits(&self, field: &str) -> bool {
        match self {
            FilterAllowList::All => true,
            FilterAllowList::None => false,
            FilterAllowList::Fields(fields) => fields.iter().any(|f| f == field),
        }
    }

    /// Whether filtering is disabled entirely.
    pub fn is_disabled(&self) -> bool {
        matches!(self, FilterAllowList::None)
    }
}
