//! Visualization item model.
//!
//! A [`VizItem`] is the flat input record of the composition engine: an
//! opaque payload destined for a downstream renderer, plus the placement
//! fields (`tabgroup`, `filter`, `index`) pages are assembled from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Downstream renderer an item targets.
///
/// Opaque to the composition engine; only document emission branches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A chart panel.
    Chart,
    /// A tabular panel.
    Table,
    /// A free-text panel.
    Text,
}

/// Row-filter predicate attached to an item.
///
/// The engine never evaluates the expression; it only compares the
/// canonical [`FilterSignature`](crate::FilterSignature) derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterPredicate {
    expr: String,
}

impl FilterPredicate {
    /// Create a predicate from its source expression.
    #[must_use]
    pub fn new(expr: impl Into<String>) -> Self {
        Self { expr: expr.into() }
    }

    /// Source expression of the predicate.
    #[must_use]
    pub fn expr(&self) -> &str {
        &self.expr
    }
}

/// Tabgroup placement spec, as written by the author.
///
/// Three shapes are accepted: an atomic or slash-delimited path string,
/// an explicit segment list, and a position-keyed map that is sorted by
/// position before segment extraction. Loose authoring input is admitted
/// through [`TabgroupSpec::from_value`], which rejects every other shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TabgroupSpec {
    /// Atomic name or slash-delimited path (`"a/b/c"`).
    Path(String),
    /// Explicit segment list in author order.
    Segments(Vec<String>),
    /// Position-keyed segments; sorted by position before use.
    Ordered(BTreeMap<i64, String>),
}

impl From<&str> for TabgroupSpec {
    fn from(path: &str) -> Self {
        Self::Path(path.to_owned())
    }
}

impl From<String> for TabgroupSpec {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<String>> for TabgroupSpec {
    fn from(segments: Vec<String>) -> Self {
        Self::Segments(segments)
    }
}

/// Flat input record for the composition engine.
///
/// Immutable once handed to [`Composer::compose`](crate::Composer::compose);
/// the engine clones items into the output tree and never mutates them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VizItem {
    /// Renderer tag, carried through untouched.
    pub kind: ItemKind,
    /// Hierarchical placement address, or `None` for a root-level item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabgroup: Option<TabgroupSpec>,
    /// Row filter, compared by signature only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterPredicate>,
    /// Authoring-order index; unique per page and strictly increasing.
    pub index: u64,
    /// Panel heading used when flattening.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Tab button label used when flattening.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_label: Option<String>,
    /// Opaque renderer parameters, passed through untouched.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
}

impl VizItem {
    /// Create an item with index 0.
    ///
    /// The authoring layer assigns the real insertion index when the item
    /// is added to a page; see [`with_index`](Self::with_index).
    #[must_use]
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            tabgroup: None,
            filter: None,
            index: 0,
            title: None,
            tab_label: None,
            params: Map::new(),
        }
    }

    /// Set the tabgroup placement path.
    #[must_use]
    pub fn with_tabgroup(mut self, spec: impl Into<TabgroupSpec>) -> Self {
        self.tabgroup = Some(spec.into());
        self
    }

    /// Set the row-filter expression.
    #[must_use]
    pub fn with_filter(mut self, expr: impl Into<String>) -> Self {
        self.filter = Some(FilterPredicate::new(expr));
        self
    }

    /// Set the insertion index.
    #[must_use]
    pub fn with_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Set the panel heading.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the tab button label.
    #[must_use]
    pub fn with_tab_label(mut self, label: impl Into<String>) -> Self {
        self.tab_label = Some(label.into());
        self
    }

    /// Attach an opaque renderer parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}
