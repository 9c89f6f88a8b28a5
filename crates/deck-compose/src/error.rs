//! Error and warning taxonomy for composition.

use std::fmt;

/// Error raised while composing a page.
///
/// Structural errors abort the whole compose call and no partial tree is
/// returned; a half-built hierarchy cannot be rendered safely.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// A tabgroup spec yielded zero segments after trimming.
    #[error("tabgroup {spec:?} contains no usable segments")]
    EmptyPath {
        /// Rendering of the offending spec.
        spec: String,
    },
    /// A tabgroup value is not a string, segment list, or position map.
    #[error("unsupported tabgroup shape: {found}")]
    InvalidPathShape {
        /// Description of the rejected value.
        found: String,
    },
}

/// Non-fatal issue collected during composition.
///
/// Warnings are returned alongside the result rather than aborting, so the
/// caller can surface them without losing otherwise-valid output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComposeWarning {
    /// A nested item's filter signature matched none of its root's parent
    /// tabs; the item was dropped from the visible tree.
    AmbiguousFilterMatch {
        /// Root segment the item was placed under.
        root: String,
        /// Full placement path of the dropped item.
        path: String,
        /// Canonical signature that found no parent.
        signature: String,
        /// Insertion index of the dropped item.
        index: u64,
    },
}

impl fmt::Display for ComposeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousFilterMatch {
                root,
                path,
                signature,
                index,
            } => write!(
                f,
                "item {index} at {path:?} carries filter {signature:?} matching no parent tab under {root:?}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_spec() {
        let err = ComposeError::EmptyPath {
            spec: "   /   ".to_owned(),
        };
        assert!(err.to_string().contains("   /   "));

        let err = ComposeError::InvalidPathShape {
            found: "number".to_owned(),
        };
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn test_warning_display_names_path_and_root() {
        let warning = ComposeWarning::AmbiguousFilterMatch {
            root: "wave".to_owned(),
            path: "wave/detail".to_owned(),
            signature: "w == 3".to_owned(),
            index: 4,
        };

        let text = warning.to_string();
        assert!(text.contains("wave/detail"));
        assert!(text.contains("w == 3"));
        assert!(text.contains("item 4"));
    }
}
