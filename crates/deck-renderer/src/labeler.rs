//! Chunk identifier allocation.
//!
//! Emitted containers, buttons, and panels need stable, human-readable,
//! unique identifiers. [`ChunkLabeler`] allocates them per build: it is
//! created by the build orchestrator and threaded through emission
//! explicitly, so concurrent independent builds never share identifier
//! state.

use std::collections::{HashMap, HashSet};

/// Per-build allocator of unique chunk identifiers.
///
/// The first use of a base label returns its bare slug; later uses gain a
/// numeric suffix (`demographics`, `demographics-2`, ...).
#[derive(Debug, Default)]
pub struct ChunkLabeler {
    counts: HashMap<String, usize>,
    used: HashSet<String>,
}

impl ChunkLabeler {
    /// Create a fresh labeler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a unique identifier derived from `base`.
    pub fn label(&mut self, base: &str) -> String {
        let slug = slugify(base);
        loop {
            let count = self.counts.entry(slug.clone()).or_insert(0);
            *count += 1;
            let candidate = if *count == 1 {
                slug.clone()
            } else {
                format!("{slug}-{count}")
            };
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Lowercase, alphanumeric-and-dash rendering of a label.
///
/// Runs of other characters collapse to a single dash; a label with no
/// usable characters falls back to `chunk`.
fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut dash_pending = false;
    for c in label.chars() {
        if c.is_alphanumeric() {
            if dash_pending && !slug.is_empty() {
                slug.push('-');
            }
            dash_pending = false;
            slug.extend(c.to_lowercase());
        } else {
            dash_pending = true;
        }
    }
    if slug.is_empty() { "chunk".to_owned() } else { slug }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_first_use_returns_bare_slug() {
        let mut labeler = ChunkLabeler::new();

        assert_eq!(labeler.label("Demographics"), "demographics");
    }

    #[test]
    fn test_repeated_use_gains_suffix() {
        let mut labeler = ChunkLabeler::new();

        assert_eq!(labeler.label("wave"), "wave");
        assert_eq!(labeler.label("wave"), "wave-2");
        assert_eq!(labeler.label("wave"), "wave-3");
    }

    #[test]
    fn test_never_repeats_an_identifier() {
        let mut labeler = ChunkLabeler::new();

        let mut seen = HashSet::new();
        for base in ["a", "a", "a-2", "a", "b", "a b"] {
            assert!(seen.insert(labeler.label(base)));
        }
    }

    #[test]
    fn test_slugify_collapses_punctuation_and_case() {
        assert_eq!(slugify("Wave 1: Details"), "wave-1-details");
        assert_eq!(slugify("  demographics  "), "demographics");
        assert_eq!(slugify("&&&"), "chunk");
    }

    #[test]
    fn test_fresh_labeler_restarts_identifiers() {
        let mut first = ChunkLabeler::new();
        let _ = first.label("wave");

        let mut second = ChunkLabeler::new();
        assert_eq!(second.label("wave"), "wave");
    }
}
