//! Document building.
//!
//! [`DocumentBuilder`] orchestrates one build: every page is composed by
//! `deck-compose` and emitted by `deck-renderer`, with a single
//! [`ChunkLabeler`] shared across the build so chunk identifiers stay
//! unique document-wide. The labeler is created inside [`build`]
//! (`DocumentBuilder::build`), so independent builds never share
//! identifier state and may run concurrently.

use std::collections::HashMap;

use deck_compose::{ComposeError, Composer};
use deck_config::Config;
use deck_renderer::{ChunkLabeler, HtmlEmitter};

use crate::page::Page;

/// Error returned when a document build fails.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Composition of one page failed.
    #[error("page {page:?}: {source}")]
    Compose {
        /// Title of the failing page.
        page: String,
        /// Underlying composition error.
        #[source]
        source: ComposeError,
    },
}

/// Rendered output of one page.
#[derive(Clone, Debug)]
pub struct PageOutput {
    /// Page title.
    pub title: String,
    /// Emitted HTML fragment.
    pub html: String,
    /// Warnings surfaced during composition.
    pub warnings: Vec<String>,
}

/// A fully built document.
#[derive(Clone, Debug)]
pub struct Document {
    /// Document title.
    pub title: String,
    /// Rendered pages in authoring order.
    pub pages: Vec<PageOutput>,
}

/// Builder orchestrating page composition and emission.
///
/// # Example
///
/// ```
/// use deck_compose::{ItemKind, VizItem};
/// use deck_document::{DocumentBuilder, Page};
///
/// let mut page = Page::new("Overview");
/// page.add(VizItem::new(ItemKind::Chart).with_tabgroup("demographics"));
///
/// let mut builder = DocumentBuilder::new("Quarterly Report");
/// builder.push_page(page);
///
/// let document = builder.build().unwrap();
/// assert_eq!(document.pages.len(), 1);
/// ```
pub struct DocumentBuilder {
    title: String,
    pages: Vec<Page>,
    labels: HashMap<String, String>,
    static_tabs: bool,
}

impl DocumentBuilder {
    /// Create a builder with no pages.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
            labels: HashMap::new(),
            static_tabs: false,
        }
    }

    /// Create a builder preconfigured from a loaded [`Config`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.document.title.clone(),
            pages: Vec::new(),
            labels: config.labels.clone(),
            static_tabs: config.tabs.static_tabs,
        }
    }

    /// Add a label override (segment name → display label).
    #[must_use]
    pub fn with_label(mut self, segment: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(segment.into(), label.into());
        self
    }

    /// Enable or disable CSS-only radio-input tabs.
    #[must_use]
    pub fn with_static_tabs(mut self, enabled: bool) -> Self {
        self.static_tabs = enabled;
        self
    }

    /// Append a page to the document.
    pub fn push_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Compose and emit every page.
    ///
    /// Warnings never abort the build; they are logged and returned on the
    /// affected [`PageOutput`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Compose`] when a page's tabgroup specs are
    /// malformed; the whole build aborts.
    pub fn build(&self) -> Result<Document, BuildError> {
        let composer = Composer::new().with_labels(self.labels.clone());
        let emitter = HtmlEmitter::new().with_static_tabs(self.static_tabs);
        // One labeler per build: identifiers are unique document-wide.
        let mut labeler = ChunkLabeler::new();

        let mut pages = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let composition =
                composer
                    .compose(page.items())
                    .map_err(|source| BuildError::Compose {
                        page: page.title().to_owned(),
                        source,
                    })?;
            for warning in &composition.warnings {
                tracing::warn!(page = page.title(), %warning, "build degraded");
            }
            pages.push(PageOutput {
                title: page.title().to_owned(),
                html: emitter.emit(&composition.nodes, &mut labeler),
                warnings: composition.warnings.iter().map(ToString::to_string).collect(),
            });
        }

        tracing::debug!(title = %self.title, pages = pages.len(), "document built");
        Ok(Document {
            title: self.title.clone(),
            pages,
        })
    }
}
