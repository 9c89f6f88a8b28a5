//! Page composition.
//!
//! [`Composer`] is the single entry point of the engine: it parses item
//! placements, classifies each tabgroup root, builds the hierarchy
//! (standard insertion or filter reconciliation per root), and flattens
//! the result into the ordered [`RenderNode`] list.

use std::collections::HashMap;

use crate::classify::{PlacedItem, RootStrategy, classify_root};
use crate::error::{ComposeError, ComposeWarning};
use crate::filter::FilterSignature;
use crate::flatten::{RenderNode, flatten_root};
use crate::item::VizItem;
use crate::reconcile::reconcile_root;
use crate::tree::HierarchyNode;

/// Result of composing one page.
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    /// Ordered render nodes for the document emitter.
    pub nodes: Vec<RenderNode>,
    /// Non-fatal issues collected along the way.
    pub warnings: Vec<ComposeWarning>,
}

/// Page composition engine.
///
/// A single-pass, stateless transform: composing the same item collection
/// twice yields structurally equal output, and nothing is retained across
/// calls.
#[derive(Clone, Debug, Default)]
pub struct Composer {
    labels: HashMap<String, String>,
}

impl Composer {
    /// Create a composer with no label overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the label lookup (segment name → display label).
    ///
    /// Unresolved segments fall back to their own name; the lookup never
    /// affects ordering or structure.
    #[must_use]
    pub fn with_labels(mut self, labels: HashMap<String, String>) -> Self {
        self.labels = labels;
        self
    }

    /// Add a single label override.
    #[must_use]
    pub fn with_label(mut self, segment: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(segment.into(), label.into());
        self
    }

    /// Compose a page's items into an ordered render-node list.
    ///
    /// An empty `items` slice yields an empty composition. Semantically
    /// unusual filter arrangements never fail; they degrade per the
    /// warnings collected in the result.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError`] when a tabgroup spec is malformed. The
    /// whole call aborts; no partial tree is returned.
    pub fn compose(&self, items: &[VizItem]) -> Result<Composition, ComposeError> {
        let mut warnings = Vec::new();
        let mut root = HierarchyNode::root();
        // Items grouped by root segment, in first-seen order.
        let mut grouped: Vec<(String, Vec<PlacedItem>)> = Vec::new();

        for item in items {
            let Some(spec) = &item.tabgroup else {
                root.insert(&[], item.clone());
                continue;
            };
            let placed = PlacedItem {
                segments: spec.segments()?,
                signature: FilterSignature::of(item.filter.as_ref()),
                item: item.clone(),
            };
            match grouped
                .iter_mut()
                .find(|(name, _)| name.as_str() == placed.root())
            {
                Some((_, group)) => group.push(placed),
                None => grouped.push((placed.root().to_owned(), vec![placed])),
            }
        }

        for (name, group) in grouped {
            match classify_root(&group) {
                RootStrategy::Standard => {
                    for placed in group {
                        root.insert(&placed.segments, placed.item);
                    }
                }
                RootStrategy::Filtered => {
                    root.attach(reconcile_root(&name, group, &mut warnings));
                }
            }
        }

        for warning in &warnings {
            tracing::warn!(%warning, "composition degraded");
        }

        Ok(Composition {
            nodes: flatten_root(&root, &self.labels),
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::flatten::{StandaloneNode, TabGroupNode};
    use crate::item::ItemKind;

    fn chart(index: u64) -> VizItem {
        VizItem::new(ItemKind::Chart).with_index(index)
    }

    fn group(node: &RenderNode) -> &TabGroupNode {
        let RenderNode::TabGroup(group) = node else {
            panic!("expected tab group, got {node:?}");
        };
        group
    }

    fn panel(node: &RenderNode) -> &StandaloneNode {
        let RenderNode::Standalone(panel) = node else {
            panic!("expected standalone, got {node:?}");
        };
        panel
    }

    #[test]
    fn test_empty_input_yields_empty_composition() {
        let composition = Composer::new().compose(&[]).unwrap();

        assert!(composition.nodes.is_empty());
        assert!(composition.warnings.is_empty());
    }

    #[test]
    fn test_pathless_items_preserve_insertion_order() {
        let items = vec![chart(3), chart(1), chart(2)];

        let composition = Composer::new().compose(&items).unwrap();

        let indices: Vec<u64> = composition
            .nodes
            .iter()
            .map(|node| panel(node).item.index)
            .collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_single_leaf_flattens_to_standalone() {
        let items = vec![chart(1).with_tabgroup("demographics")];

        let composition = Composer::new().compose(&items).unwrap();

        assert_eq!(composition.nodes.len(), 1);
        assert_eq!(
            panel(&composition.nodes[0]).label.as_deref(),
            Some("demographics")
        );
    }

    #[test]
    fn test_two_leaves_wrap_into_tab_group() {
        let items = vec![
            chart(1).with_tabgroup("demographics"),
            chart(2).with_tabgroup("demographics"),
        ];

        let composition = Composer::new().compose(&items).unwrap();

        let demographics = group(&composition.nodes[0]);
        assert_eq!(demographics.name, "demographics");
        assert_eq!(demographics.children.len(), 2);
        assert_eq!(panel(&demographics.children[0]).item.index, 1);
        assert_eq!(panel(&demographics.children[1]).item.index, 2);
    }

    #[test]
    fn test_filter_fan_out_builds_parent_tabs() {
        let items = vec![
            chart(1).with_tabgroup("wave").with_filter("w == 1"),
            chart(2).with_tabgroup("wave").with_filter("w == 2"),
            chart(3).with_tabgroup("wave/detail").with_filter("w == 1"),
        ];

        let composition = Composer::new().compose(&items).unwrap();

        assert!(composition.warnings.is_empty());
        let wave = group(&composition.nodes[0]);
        assert_eq!(wave.name, "wave");
        assert_eq!(wave.children.len(), 2);

        // First parent (w == 1) wraps its nested detail panel.
        let first = group(&wave.children[0]);
        assert_eq!(first.children.len(), 2);
        assert_eq!(panel(&first.children[0]).item.index, 1);
        assert_eq!(panel(&first.children[1]).label.as_deref(), Some("detail"));

        // Second parent (w == 2) has no nested structure.
        assert_eq!(panel(&wave.children[1]).item.index, 2);
    }

    #[test]
    fn test_mixed_strategy_roots_in_one_build() {
        let items = vec![
            chart(1).with_tabgroup("wave").with_filter("w == 1"),
            chart(2).with_tabgroup("wave").with_filter("w == 2"),
            chart(3).with_tabgroup("trend"),
            chart(4).with_tabgroup("trend/by-age"),
        ];

        let composition = Composer::new().compose(&items).unwrap();

        assert_eq!(composition.nodes.len(), 2);
        assert_eq!(group(&composition.nodes[0]).name, "wave");
        assert_eq!(group(&composition.nodes[1]).name, "trend");
    }

    #[test]
    fn test_label_lookup_changes_label_only() {
        let items = vec![
            chart(1).with_tabgroup("demographics"),
            chart(2).with_tabgroup("demographics"),
        ];

        let plain = Composer::new().compose(&items).unwrap();
        let labeled = Composer::new()
            .with_label("demographics", "Demographic Breakdown")
            .compose(&items)
            .unwrap();

        let plain_group = group(&plain.nodes[0]);
        let labeled_group = group(&labeled.nodes[0]);
        assert_eq!(labeled_group.label, "Demographic Breakdown");
        assert_eq!(labeled_group.name, plain_group.name);
        assert_eq!(labeled_group.children, plain_group.children);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let items = vec![
            chart(1).with_tabgroup("wave").with_filter("w == 1"),
            chart(2).with_tabgroup("wave").with_filter("w == 2"),
            chart(3).with_tabgroup("wave/detail").with_filter("w == 1"),
            chart(4),
        ];

        let first = Composer::new().compose(&items).unwrap();
        let second = Composer::new().compose(&items).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_blank_tabgroup_aborts_with_empty_path() {
        let items = vec![chart(1).with_tabgroup("   /   ")];

        let err = Composer::new().compose(&items).unwrap_err();

        assert!(matches!(err, ComposeError::EmptyPath { .. }));
    }

    #[test]
    fn test_unmatched_nested_filter_degrades_with_warning() {
        let items = vec![
            chart(1).with_tabgroup("wave").with_filter("w == 1"),
            chart(2).with_tabgroup("wave").with_filter("w == 2"),
            chart(3).with_tabgroup("wave/detail").with_filter("w == 9"),
        ];

        let composition = Composer::new().compose(&items).unwrap();

        assert_eq!(composition.warnings.len(), 1);
        let wave = group(&composition.nodes[0]);
        assert_eq!(wave.children.len(), 2);
        assert!(matches!(wave.children[0], RenderNode::Standalone(_)));
        assert!(matches!(wave.children[1], RenderNode::Standalone(_)));
    }

    #[test]
    fn test_root_level_items_interleave_with_groups_by_index() {
        let items = vec![
            chart(1),
            chart(2).with_tabgroup("demographics"),
            chart(3).with_tabgroup("demographics"),
            chart(4),
        ];

        let composition = Composer::new().compose(&items).unwrap();

        assert_eq!(composition.nodes.len(), 3);
        assert_eq!(panel(&composition.nodes[0]).item.index, 1);
        assert_eq!(group(&composition.nodes[1]).name, "demographics");
        assert_eq!(panel(&composition.nodes[2]).item.index, 4);
    }

    #[test]
    fn test_tab_groups_ordered_by_first_insertion() {
        let items = vec![
            chart(1).with_tabgroup("later/detail"),
            chart(2).with_tabgroup("earlier"),
            chart(3).with_tabgroup("later/other"),
        ];

        let composition = Composer::new().compose(&items).unwrap();

        assert_eq!(group(&composition.nodes[0]).name, "later");
        assert_eq!(panel(&composition.nodes[1]).label.as_deref(), Some("earlier"));
    }

    #[test]
    fn test_ordered_pair_spec_composes_like_path_spec() {
        let mut ordered = std::collections::BTreeMap::new();
        ordered.insert(1, "demographics".to_owned());
        ordered.insert(2, "details".to_owned());

        let from_pairs = Composer::new()
            .compose(&[chart(1).with_tabgroup(crate::TabgroupSpec::Ordered(ordered))])
            .unwrap();
        let from_path = Composer::new()
            .compose(&[chart(1).with_tabgroup("demographics/details")])
            .unwrap();

        assert_eq!(from_pairs, from_path);
    }
}
