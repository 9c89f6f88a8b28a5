//! Panel body rendering seam.
//!
//! Actual chart construction is an external collaborator; emission only
//! carries item parameters through. [`PanelRenderer`] is the trait that
//! collaborator implements, and [`PlaceholderRenderer`] is the default
//! used when no host renderer is supplied.

use std::fmt::Write;

use deck_compose::{ItemKind, VizItem};

use crate::html::escape_html;

/// Renders the body of a single visualization panel into host output.
pub trait PanelRenderer {
    /// Append the panel body for `item` to `out`.
    fn render(&self, item: &VizItem, out: &mut String);
}

/// Default body renderer.
///
/// Emits a placeholder element carrying the item's kind and parameters for
/// a client-side renderer to pick up.
pub struct PlaceholderRenderer;

impl PanelRenderer for PlaceholderRenderer {
    fn render(&self, item: &VizItem, out: &mut String) {
        let params = serde_json::to_string(&item.params).unwrap_or_default();
        let _ = write!(
            out,
            r#"<div class="viz" data-kind="{}" data-params="{}"></div>"#,
            kind_tag(item.kind),
            escape_html(&params)
        );
    }
}

fn kind_tag(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Chart => "chart",
        ItemKind::Table => "table",
        ItemKind::Text => "text",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_placeholder_carries_kind_and_params() {
        let item = VizItem::new(ItemKind::Chart).with_param("measure", json!("mean"));

        let mut out = String::new();
        PlaceholderRenderer.render(&item, &mut out);

        assert!(out.contains(r#"data-kind="chart""#));
        assert!(out.contains("measure"));
        assert!(out.contains("mean"));
    }

    #[test]
    fn test_placeholder_escapes_params() {
        let item = VizItem::new(ItemKind::Text).with_param("body", json!("<script>"));

        let mut out = String::new();
        PlaceholderRenderer.render(&item, &mut out);

        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }
}
