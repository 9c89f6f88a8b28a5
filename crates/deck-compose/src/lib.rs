//! Hierarchical tab-group composition for deck reports.
//!
//! Assembles independently specified visualization items into a nested,
//! ordered, de-duplicated tree of tab containers and standalone panels,
//! then flattens that tree into the ordered [`RenderNode`] list consumed
//! by document emission.
//!
//! # Architecture
//!
//! Data flows one way through the pipeline:
//!
//! 1. Path parsing and filter-signature extraction per item
//! 2. Fan-out classification per tabgroup root
//! 3. Tree construction — plain insertion, or per-filter reconciliation
//!    for roots whose sibling tabs disagree on filters
//! 4. Flattening into [`RenderNode`]s, ordered by insertion index
//!
//! The engine performs no I/O and holds no state across calls. Malformed
//! placement specs abort with [`ComposeError`]; semantically unusual
//! filter arrangements degrade to [`ComposeWarning`]s collected in the
//! [`Composition`] result.
//!
//! # Thread Safety
//!
//! Items and the resulting [`RenderNode`] tree are plain immutable values,
//! freely shareable across threads once produced. Independent builds may
//! compose concurrently; identifier allocation for emitted output lives in
//! the emission layer and is scoped per build there.
//!
//! # Example
//!
//! ```
//! use deck_compose::{Composer, ItemKind, VizItem};
//!
//! let items = vec![
//!     VizItem::new(ItemKind::Chart)
//!         .with_tabgroup("demographics")
//!         .with_index(0),
//!     VizItem::new(ItemKind::Table)
//!         .with_tabgroup("demographics")
//!         .with_index(1),
//! ];
//!
//! let composition = Composer::new()
//!     .with_label("demographics", "Demographic Breakdown")
//!     .compose(&items)
//!     .unwrap();
//!
//! // Two items at one node wrap into a single tab group.
//! assert_eq!(composition.nodes.len(), 1);
//! ```

mod classify;
mod compose;
mod error;
mod filter;
mod flatten;
mod item;
mod path;
mod reconcile;
mod tree;

pub use compose::{Composer, Composition};
pub use error::{ComposeError, ComposeWarning};
pub use filter::FilterSignature;
pub use flatten::{RenderNode, StandaloneNode, TabGroupNode};
pub use item::{FilterPredicate, ItemKind, TabgroupSpec, VizItem};

#[cfg(test)]
mod send_sync_tests {
    // Outputs must be freely shareable across threads.
    static_assertions::assert_impl_all!(crate::RenderNode: Send, Sync);
    static_assertions::assert_impl_all!(crate::Composition: Send, Sync);
}
