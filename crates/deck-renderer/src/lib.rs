//! HTML emission for composed deck report pages.
//!
//! This crate is the mechanical half of page production: it consumes the
//! ordered render-node list built by `deck-compose` and assembles nested
//! tab-container markup from it.
//!
//! # Architecture
//!
//! - [`HtmlEmitter`]: walks [`RenderNode`](deck_compose::RenderNode)s and
//!   emits accessible tabs (`role="tablist"` / `role="tabpanel"`), or
//!   CSS-only radio-input tabs in static mode.
//! - [`PanelRenderer`]: the seam to the actual visualization renderers;
//!   [`PlaceholderRenderer`] stubs panel bodies with a parameter-carrying
//!   element.
//! - [`ChunkLabeler`]: per-build allocator of unique, human-readable
//!   chunk identifiers, created by the build orchestrator and threaded
//!   through emission explicitly.

mod html;
mod labeler;
mod panel;

pub use html::{HtmlEmitter, escape_html};
pub use labeler::ChunkLabeler;
pub use panel::{PanelRenderer, PlaceholderRenderer};
