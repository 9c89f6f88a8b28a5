//! Page authoring and document build orchestration for deck.
//!
//! Ties the workspace together: [`Page`] is the authoring surface that
//! assigns insertion indexes, and [`DocumentBuilder`] runs one build —
//! composing every page with `deck-compose`, emitting it with
//! `deck-renderer`, and surfacing composition warnings on the resulting
//! [`PageOutput`]s.
//!
//! # Thread Safety
//!
//! A build holds its identifier allocator locally, so independent builds
//! (different documents) may run concurrently. [`Document`] and
//! [`PageOutput`] are immutable values, freely shareable once produced.

mod document;
mod page;

pub use document::{BuildError, Document, DocumentBuilder, PageOutput};
pub use page::Page;
