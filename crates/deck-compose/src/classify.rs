//! Fan-out classification.
//!
//! For each distinct root segment among items that declare a tabgroup,
//! decides whether the root takes the standard single-tree construction or
//! the filter-based construction of the reconciler. The check is
//! root-local: different roots may use different strategies within the
//! same build.

use crate::filter::FilterSignature;
use crate::item::VizItem;

/// An item whose tabgroup path has been parsed, paired with its filter
/// signature. Input unit for classification and tree construction.
#[derive(Clone, Debug)]
pub(crate) struct PlacedItem {
    /// Parsed, non-empty placement path.
    pub(crate) segments: Vec<String>,
    /// Canonical filter key.
    pub(crate) signature: FilterSignature,
    pub(crate) item: VizItem,
}

impl PlacedItem {
    /// First path segment.
    pub(crate) fn root(&self) -> &str {
        &self.segments[0]
    }

    /// True for items whose path has length 1 (tabs at the root itself).
    pub(crate) fn is_parent(&self) -> bool {
        self.segments.len() == 1
    }
}

/// Construction strategy for one root segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RootStrategy {
    /// Plain insertion into a single tree.
    Standard,
    /// Per-filter partitioning via the reconciler.
    Filtered,
}

/// Decide the strategy for one root's items.
///
/// Filter-based construction is required when sibling parents disagree on
/// their filters, or when a single filtered parent has filtered
/// descendants that must be matched per-parent to keep filter semantics
/// visible in the resulting structure.
pub(crate) fn classify_root(placed: &[PlacedItem]) -> RootStrategy {
    let parents: Vec<&PlacedItem> = placed.iter().filter(|p| p.is_parent()).collect();

    match parents.as_slice() {
        [first, rest @ ..] if !rest.is_empty() => {
            if rest.iter().any(|parent| parent.signature != first.signature) {
                RootStrategy::Filtered
            } else {
                RootStrategy::Standard
            }
        }
        [only] if !only.signature.is_none() => {
            let filtered_descendant = placed
                .iter()
                .any(|p| !p.is_parent() && !p.signature.is_none());
            if filtered_descendant {
                RootStrategy::Filtered
            } else {
                RootStrategy::Standard
            }
        }
        _ => RootStrategy::Standard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;

    fn placed(segments: &[&str], filter: Option<&str>, index: u64) -> PlacedItem {
        let mut item = VizItem::new(ItemKind::Chart).with_index(index);
        if let Some(expr) = filter {
            item = item.with_filter(expr);
        }
        PlacedItem {
            segments: segments.iter().map(|s| (*s).to_owned()).collect(),
            signature: FilterSignature::of(item.filter.as_ref()),
            item,
        }
    }

    #[test]
    fn test_parents_with_differing_filters_fan_out() {
        let group = vec![
            placed(&["wave"], Some("w == 1"), 1),
            placed(&["wave"], Some("w == 2"), 2),
        ];

        assert_eq!(classify_root(&group), RootStrategy::Filtered);
    }

    #[test]
    fn test_parents_with_identical_filters_stay_standard() {
        let group = vec![
            placed(&["wave"], Some("w == 1"), 1),
            placed(&["wave"], Some("w == 1"), 2),
        ];

        assert_eq!(classify_root(&group), RootStrategy::Standard);
    }

    #[test]
    fn test_filtered_and_unfiltered_parents_fan_out() {
        let group = vec![
            placed(&["wave"], Some("w == 1"), 1),
            placed(&["wave"], None, 2),
        ];

        assert_eq!(classify_root(&group), RootStrategy::Filtered);
    }

    #[test]
    fn test_single_filtered_parent_with_filtered_descendant_fans_out() {
        let group = vec![
            placed(&["wave"], Some("w == 1"), 1),
            placed(&["wave", "detail"], Some("w == 1"), 2),
        ];

        assert_eq!(classify_root(&group), RootStrategy::Filtered);
    }

    #[test]
    fn test_single_filtered_parent_with_unfiltered_descendants_stays_standard() {
        let group = vec![
            placed(&["wave"], Some("w == 1"), 1),
            placed(&["wave", "detail"], None, 2),
        ];

        assert_eq!(classify_root(&group), RootStrategy::Standard);
    }

    #[test]
    fn test_single_unfiltered_parent_stays_standard() {
        let group = vec![
            placed(&["wave"], None, 1),
            placed(&["wave", "detail"], Some("w == 1"), 2),
        ];

        assert_eq!(classify_root(&group), RootStrategy::Standard);
    }

    #[test]
    fn test_descendants_only_stay_standard() {
        let group = vec![
            placed(&["wave", "detail"], Some("w == 1"), 1),
            placed(&["wave", "extra"], Some("w == 2"), 2),
        ];

        assert_eq!(classify_root(&group), RootStrategy::Standard);
    }
}
