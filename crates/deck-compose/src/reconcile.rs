//! Filter reconciliation.
//!
//! Builds the tree for a root whose sibling tabs disagree on filters:
//! items are partitioned by filter signature, each partition becomes a
//! private sub-tree with the leading root segment stripped, and the
//! partitions are merged back into a single tab group whose children are
//! per-filter parent tabs carrying their matching nested structure.

use crate::classify::PlacedItem;
use crate::error::ComposeWarning;
use crate::filter::FilterSignature;
use crate::item::VizItem;
use crate::tree::HierarchyNode;

/// Build the reconciled node for `root` from its placed items.
///
/// Unfiltered nested nodes attach to every parent tab; nested sub-trees
/// whose signature matches no parent are dropped and reported through
/// `warnings`. Attached sub-trees are independent deep copies, so a
/// structure shared across parents is never aliased.
pub(crate) fn reconcile_root(
    root: &str,
    placed: Vec<PlacedItem>,
    warnings: &mut Vec<ComposeWarning>,
) -> HierarchyNode {
    // Partition by signature, preserving first-seen order for determinism.
    let mut partitions: Vec<(FilterSignature, HierarchyNode)> = Vec::new();
    for p in placed {
        let slot = match partitions
            .iter()
            .position(|(signature, _)| *signature == p.signature)
        {
            Some(found) => found,
            None => {
                partitions.push((p.signature.clone(), HierarchyNode::root()));
                partitions.len() - 1
            }
        };
        // Strip the leading root segment; parents land at the sub-tree root.
        partitions[slot].1.insert(&p.segments[1..], p.item);
    }

    // Nested structure of the unfiltered partition attaches to any parent.
    let shared: Vec<HierarchyNode> = partitions
        .iter()
        .find(|(signature, _)| signature.is_none())
        .map(|(_, subtree)| subtree.children.clone())
        .unwrap_or_default();

    let mut group = HierarchyNode::new(root);

    for (signature, subtree) in &partitions {
        if subtree.items.is_empty() {
            // No parent tab carries this signature. The unfiltered
            // partition's nested nodes were already lifted into `shared`.
            if !signature.is_none() {
                warn_dropped(root, signature, subtree, warnings);
            }
            continue;
        }

        for parent in &subtree.items {
            let mut tab = HierarchyNode::new(parent_segment(parent, signature, root));
            tab.min_index = parent.index;
            tab.items.push(parent.clone());
            for nested in &subtree.children {
                tab.children.push(nested.clone());
            }
            if !signature.is_none() {
                for nested in &shared {
                    tab.children.push(nested.clone());
                }
            }
            group.min_index = group.min_index.min(parent.index);
            group.children.push(tab);
        }
    }

    group
}

/// Segment name for a parent tab node: explicit labels win, then the
/// filter expression, then the root segment itself.
fn parent_segment(parent: &VizItem, signature: &FilterSignature, root: &str) -> String {
    parent
        .tab_label
        .clone()
        .or_else(|| parent.title.clone())
        .unwrap_or_else(|| {
            if signature.is_none() {
                root.to_owned()
            } else {
                signature.to_string()
            }
        })
}

/// Report every item of a dropped partition sub-tree.
fn warn_dropped(
    root: &str,
    signature: &FilterSignature,
    subtree: &HierarchyNode,
    warnings: &mut Vec<ComposeWarning>,
) {
    for child in &subtree.children {
        collect_dropped(child, root, root, signature, warnings);
    }
}

fn collect_dropped(
    node: &HierarchyNode,
    prefix: &str,
    root: &str,
    signature: &FilterSignature,
    warnings: &mut Vec<ComposeWarning>,
) {
    let path = format!("{prefix}/{}", node.segment);
    for item in &node.items {
        warnings.push(ComposeWarning::AmbiguousFilterMatch {
            root: root.to_owned(),
            path: path.clone(),
            signature: signature.to_string(),
            index: item.index,
        });
    }
    for child in &node.children {
        collect_dropped(child, &path, root, signature, warnings);
    }
}
