//! Filter signatures.
//!
//! A [`FilterSignature`] is the canonical comparison key derived from a
//! row-filter predicate. The engine never evaluates predicates; fan-out
//! decisions and partitioning compare signatures only.

use std::fmt;

use crate::item::FilterPredicate;

/// Canonical, comparable key for an optional row filter.
///
/// The no-filter signature is distinct from the signature of every real
/// predicate, including one whose expression is empty after trimming, so
/// "no filter" never collides with a legitimately empty-looking filter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilterSignature(Option<String>);

impl FilterSignature {
    /// The designated no-filter signature.
    pub const NONE: Self = Self(None);

    /// Derive the signature of an optional predicate.
    ///
    /// Deterministic and total: the same source expression always yields
    /// the same signature.
    #[must_use]
    pub fn of(filter: Option<&FilterPredicate>) -> Self {
        Self(filter.map(|predicate| canonicalize(predicate.expr())))
    }

    /// True when this is the no-filter signature.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for FilterSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(expr) => f.write_str(expr),
            None => f.write_str("<unfiltered>"),
        }
    }
}

/// Collapse whitespace runs so formatting differences in the same source
/// expression do not produce distinct signatures.
fn canonicalize(expr: &str) -> String {
    expr.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_same_expression_yields_same_signature() {
        let a = FilterPredicate::new("wave == 1");
        let b = FilterPredicate::new("wave == 1");

        assert_eq!(FilterSignature::of(Some(&a)), FilterSignature::of(Some(&b)));
    }

    #[test]
    fn test_whitespace_differences_collapse() {
        let a = FilterPredicate::new("wave  ==\t1");
        let b = FilterPredicate::new(" wave == 1 ");

        assert_eq!(FilterSignature::of(Some(&a)), FilterSignature::of(Some(&b)));
    }

    #[test]
    fn test_absent_filter_is_the_none_signature() {
        assert_eq!(FilterSignature::of(None), FilterSignature::NONE);
        assert!(FilterSignature::of(None).is_none());
    }

    #[test]
    fn test_empty_expression_distinct_from_none() {
        let empty = FilterPredicate::new("   ");

        let signature = FilterSignature::of(Some(&empty));
        assert!(!signature.is_none());
        assert_ne!(signature, FilterSignature::NONE);
    }

    #[test]
    fn test_distinct_expressions_differ() {
        let a = FilterPredicate::new("wave == 1");
        let b = FilterPredicate::new("wave == 2");

        assert_ne!(FilterSignature::of(Some(&a)), FilterSignature::of(Some(&b)));
    }

    #[test]
    fn test_display_renders_expression() {
        let predicate = FilterPredicate::new("wave == 1");

        assert_eq!(
            FilterSignature::of(Some(&predicate)).to_string(),
            "wave == 1"
        );
        assert_eq!(FilterSignature::NONE.to_string(), "<unfiltered>");
    }
}
