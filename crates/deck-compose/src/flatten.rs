//! Tree flattening.
//!
//! Depth-first conversion of the final hierarchy into the ordered
//! [`RenderNode`] list consumed by document emission.

use std::collections::HashMap;

use serde::Serialize;

use crate::item::VizItem;
use crate::tree::HierarchyNode;

/// Immutable output unit of composition.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderNode {
    /// A single visualization rendered without a wrapping tab.
    Standalone(StandaloneNode),
    /// A tab container of further render nodes.
    TabGroup(TabGroupNode),
}

/// A single visualization panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StandaloneNode {
    /// Display label; `None` for an unlabeled root-level panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The visualization this panel renders.
    pub item: VizItem,
}

/// A tab container.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TabGroupNode {
    /// Segment name the group was built from.
    pub name: String,
    /// Display label (lookup override or the segment name).
    pub label: String,
    /// Ordered children; may nest further tab groups.
    pub children: Vec<RenderNode>,
}

/// Flatten the page root into the ordered top-level node list.
///
/// The root itself is not a tab group: its direct items and child groups
/// are merged into one list ordered by insertion index, ties resolved in
/// favor of items and then by segment name.
pub(crate) fn flatten_root(
    root: &HierarchyNode,
    labels: &HashMap<String, String>,
) -> Vec<RenderNode> {
    enum Entry<'a> {
        Item(&'a VizItem),
        Child(&'a HierarchyNode),
    }

    let mut entries: Vec<(u64, u8, &str, Entry<'_>)> = Vec::new();
    for item in &root.items {
        entries.push((item.index, 0, "", Entry::Item(item)));
    }
    for child in &root.children {
        entries.push((child.min_index, 1, child.segment.as_str(), Entry::Child(child)));
    }
    entries.sort_by(|a, b| (a.0, a.1, a.2).cmp(&(b.0, b.1, b.2)));

    let mut nodes = Vec::with_capacity(entries.len());
    for (_, _, _, entry) in entries {
        match entry {
            Entry::Item(item) => nodes.push(standalone(item, "", labels)),
            Entry::Child(child) => nodes.extend(flatten_node(child, labels)),
        }
    }
    nodes
}

/// Flatten one node.
///
/// A node with nothing rooted at it contributes nothing; a single-item
/// leaf becomes a [`RenderNode::Standalone`]; anything else becomes a
/// [`RenderNode::TabGroup`] whose children are the node's items (each
/// wrapped individually, in insertion order) followed by its child nodes
/// ordered by ascending `min_index`, ties broken by segment name.
fn flatten_node(node: &HierarchyNode, labels: &HashMap<String, String>) -> Option<RenderNode> {
    if node.is_empty() {
        return None;
    }

    if node.items.len() == 1 && node.children.is_empty() {
        return Some(standalone(&node.items[0], &node.segment, labels));
    }

    let mut children = Vec::with_capacity(node.items.len() + node.children.len());

    let mut items: Vec<&VizItem> = node.items.iter().collect();
    items.sort_by_key(|item| item.index);
    for item in items {
        children.push(standalone(item, &node.segment, labels));
    }

    let mut ordered: Vec<&HierarchyNode> = node.children.iter().collect();
    ordered.sort_by(|a, b| {
        a.min_index
            .cmp(&b.min_index)
            .then_with(|| a.segment.cmp(&b.segment))
    });
    for child in ordered {
        children.extend(flatten_node(child, labels));
    }

    Some(RenderNode::TabGroup(TabGroupNode {
        name: node.segment.clone(),
        label: labels
            .get(&node.segment)
            .cloned()
            .unwrap_or_else(|| node.segment.clone()),
        children,
    }))
}

/// Wrap one item as a standalone panel.
///
/// Label precedence: the item's tab label, its display title, the label
/// lookup for the enclosing segment, then the segment name itself.
fn standalone(item: &VizItem, segment: &str, labels: &HashMap<String, String>) -> RenderNode {
    let label = item
        .tab_label
        .clone()
        .or_else(|| item.title.clone())
        .or_else(|| labels.get(segment).cloned())
        .or_else(|| (!segment.is_empty()).then(|| segment.to_owned()));
    RenderNode::Standalone(StandaloneNode {
        label,
        item: item.clone(),
    })
}
