//! Filter sets and the canonical query they flatten into.
//!
//! # Design
//! Each resource declares its filters as a plain struct and lists them, in
//! declared order, through [`FilterSet::fields`]. [`format_params`] turns
//! that list into a [`CanonicalQuery`]: absent values, empty lists and empty
//! strings are dropped, lists are comma-joined, and flags follow one policy
//! for every field: `Some(true)` is sent as `"1"`, `Some(false)` and `None`
//! are both omitted (the upstream treats a missing flag as "do not narrow").

use std::fmt::Display;

/// One filter field's value before serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Absent,
    /// Already stringified scalar: text, a number, or an enum's wire value.
    Scalar(String),
    Flag(bool),
    List(Vec<String>),
}

impl FilterValue {
    pub fn text(value: Option<&str>) -> Self {
        match value {
            Some(s) => FilterValue::Scalar(s.to_string()),
            None => FilterValue::Absent,
        }
    }

    pub fn scalar<T: Display>(value: Option<T>) -> Self {
        match value {
            Some(v) => FilterValue::Scalar(v.to_string()),
            None => FilterValue::Absent,
        }
    }

    pub fn flag(value: Option<bool>) -> Self {
        match value {
            Some(b) => FilterValue::Flag(b),
            None => FilterValue::Absent,
        }
    }

    pub fn list(values: &[String]) -> Self {
        FilterValue::List(values.to_vec())
    }

    /// Serialized form, or `None` when the field must not be sent.
    fn render(&self) -> Option<String> {
        let rendered = match self {
            FilterValue::Absent => return None,
            FilterValue::Flag(false) => return None,
            FilterValue::Flag(true) => "1".to_string(),
            FilterValue::Scalar(s) => s.clone(),
            FilterValue::List(items) => items.join(","),
        };
        if rendered.is_empty() {
            None
        } else {
            Some(rendered)
        }
    }
}

/// A resource's filter state, listed field by field in declared order.
pub trait FilterSet {
    fn fields(&self) -> Vec<(&'static str, FilterValue)>;
}

/// Filter set of resources that take no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoFilters;

impl FilterSet for NoFilters {
    fn fields(&self) -> Vec<(&'static str, FilterValue)> {
        Vec::new()
    }
}

/// String-keyed, string-valued parameters ready to be URL-encoded.
///
/// Every value is non-empty. Order follows the filter set's declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalQuery {
    pairs: Vec<(String, String)>,
}

impl CanonicalQuery {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

/// Flatten a filter set into its canonical query. Never fails.
pub fn format_params<F: FilterSet + ?Sized>(filters: &F) -> CanonicalQuery {
    format_fields(filters.fields())
}

pub fn format_fields(fields: Vec<(&'static str, FilterValue)>) -> CanonicalQuery {
    let pairs = fields
        .into_iter()
        .filter_map(|(name, value)| value.render().map(|v| (name.to_string(), v)))
        .collect();
    CanonicalQuery { pairs }
}
