//! Descending sort driven by a caller-supplied "comes before" predicate.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ways of spelling the same `a > b` predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparatorStyle {
    /// A named `fn` item passed by path.
    NamedFunction,
    /// A closure with its parameter and return types written out.
    ClosureExpression,
    /// A block-bodied closure whose parameter types come from the call site.
    InferredTypes,
    /// The shortest closure form: inferred types, single expression.
    Shorthand,
    /// The `PartialOrd::gt` method passed directly.
    OperatorMethod,
    /// A multi-line closure block written as the last argument.
    TrailingClosure,
}

impl ComparatorStyle {
    pub const ALL: [ComparatorStyle; 6] = [
        ComparatorStyle::NamedFunction,
        ComparatorStyle::ClosureExpression,
        ComparatorStyle::InferredTypes,
        ComparatorStyle::Shorthand,
        ComparatorStyle::OperatorMethod,
        ComparatorStyle::TrailingClosure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComparatorStyle::NamedFunction => "named_function",
            ComparatorStyle::ClosureExpression => "closure_expression",
            ComparatorStyle::InferredTypes => "inferred_types",
            ComparatorStyle::Shorthand => "shorthand",
            ComparatorStyle::OperatorMethod => "operator_method",
            ComparatorStyle::TrailingClosure => "trailing_closure",
        }
    }
}

impl fmt::Display for ComparatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparatorStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.replace('-', "_");
        ComparatorStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = ComparatorStyle::ALL
                    .iter()
                    .map(|style| style.as_str())
                    .collect();
                format!(
                    "unknown comparator style '{s}' (expected one of: {})",
                    known.join(", ")
                )
            })
    }
}

/// `true` when `s1` belongs before `s2` in a descending ordering.
pub fn backward(s1: &str, s2: &str) -> bool {
    s1 > s2
}

/// Return a sorted copy of `names`, ordered by `are_in_increasing_order`.
///
/// The predicate answers "does the first argument come before the second"
/// and should be a strict ordering. A non-strict predicate such as `>=` is
/// tolerated: when it holds in both directions the pair counts as equal.
/// Equal elements keep their relative order.
pub fn sorted_by<F>(names: &[String], mut are_in_increasing_order: F) -> Vec<String>
where
    F: FnMut(&str, &str) -> bool,
{
    let mut sorted = names.to_vec();
    sorted.sort_by(|a, b| {
        let forward = are_in_increasing_order(a.as_str(), b.as_str());
        let reverse = are_in_increasing_order(b.as_str(), a.as_str());
        match (forward, reverse) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (true, true) | (false, false) => Ordering::Equal,
        }
    });
    sorted
}

/// Sort `names` in descending order using the predicate spelled as `style`.
pub fn sort_descending(names: &[String], style: ComparatorStyle) -> Vec<String> {
    match style {
        ComparatorStyle::NamedFunction => sorted_by(names, backward),
        ComparatorStyle::ClosureExpression => {
            sorted_by(names, |s1: &str, s2: &str| -> bool { s1 > s2 })
        }
        ComparatorStyle::InferredTypes => sorted_by(names, |s1, s2| { s1 > s2 }),
        ComparatorStyle::Shorthand => sorted_by(names, |a, b| a > b),
        ComparatorStyle::OperatorMethod => sorted_by(names, <str as PartialOrd>::gt),
        ComparatorStyle::TrailingClosure => sorted_by(names, |first, second| {
            match first.cmp(second) {
                Ordering::Greater => true,
                Ordering::Less | Ordering::Equal => false,
            }
        }),
    }
}

/// True if every adjacent pair is in strictly descending order.
pub fn is_strictly_descending(names: &[String]) -> bool {
    names.windows(2).all(|pair| pair[0] > pair[1])
}
