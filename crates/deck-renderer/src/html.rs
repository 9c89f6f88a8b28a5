//! HTML emission for composed pages.
//!
//! Walks the ordered [`RenderNode`] list and assembles nested tab-container
//! markup: an accessible button/panel structure by default, or CSS-only
//! radio-input tabs in static mode. Emission is a pure consumer of the
//! composition output; it decides nothing about structure or order.

use std::fmt::Write;

use deck_compose::{RenderNode, StandaloneNode, TabGroupNode};

use crate::labeler::ChunkLabeler;
use crate::panel::{PanelRenderer, PlaceholderRenderer};

/// HTML emitter for the ordered render-node list of a page.
///
/// # Example
///
/// ```
/// use deck_compose::{Composer, ItemKind, VizItem};
/// use deck_renderer::{ChunkLabeler, HtmlEmitter};
///
/// let items = vec![
///     VizItem::new(ItemKind::Chart).with_tabgroup("demographics").with_index(0),
///     VizItem::new(ItemKind::Table).with_tabgroup("demographics").with_index(1),
/// ];
/// let composition = Composer::new().compose(&items).unwrap();
///
/// let mut labeler = ChunkLabeler::new();
/// let html = HtmlEmitter::new().emit(&composition.nodes, &mut labeler);
///
/// assert!(html.contains(r#"role="tablist""#));
/// ```
pub struct HtmlEmitter {
    /// When `true`, render CSS-only tabs using radio inputs instead of
    /// JS-driven buttons.
    static_tabs: bool,
    panels: Box<dyn PanelRenderer>,
}

impl HtmlEmitter {
    /// Create an emitter with the default placeholder panel renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            static_tabs: false,
            panels: Box::new(PlaceholderRenderer),
        }
    }

    /// Enable or disable CSS-only radio-input tabs.
    #[must_use]
    pub fn with_static_tabs(mut self, enabled: bool) -> Self {
        self.static_tabs = enabled;
        self
    }

    /// Replace the panel body renderer.
    #[must_use]
    pub fn with_panel_renderer(mut self, renderer: impl PanelRenderer + 'static) -> Self {
        self.panels = Box::new(renderer);
        self
    }

    /// Emit the page's nodes, allocating chunk identifiers from `labeler`.
    pub fn emit(&self, nodes: &[RenderNode], labeler: &mut ChunkLabeler) -> String {
        let mut out = String::with_capacity(1024);
        for node in nodes {
            self.emit_node(node, labeler, &mut out);
        }
        out
    }

    fn emit_node(&self, node: &RenderNode, labeler: &mut ChunkLabeler, out: &mut String) {
        match node {
            RenderNode::Standalone(panel) => self.emit_panel(panel, labeler, out),
            RenderNode::TabGroup(group) => self.emit_group(group, labeler, out),
        }
    }

    fn emit_panel(&self, panel: &StandaloneNode, labeler: &mut ChunkLabeler, out: &mut String) {
        let id = labeler.label(panel.label.as_deref().unwrap_or("panel"));
        let _ = write!(out, r#"<section class="panel" id="{id}">"#);
        if let Some(label) = &panel.label {
            let _ = write!(out, r#"<h2 class="panel-title">{}</h2>"#, escape_html(label));
        }
        self.panels.render(&panel.item, out);
        out.push_str("</section>");
    }

    fn emit_group(&self, group: &TabGroupNode, labeler: &mut ChunkLabeler, out: &mut String) {
        let group_id = labeler.label(&group.name);
        if self.static_tabs {
            self.emit_static_group(group, &group_id, labeler, out);
        } else {
            self.emit_aria_group(group, &group_id, labeler, out);
        }
    }

    /// Accessible JS-driven tabs: `role="tablist"` buttons plus panels.
    fn emit_aria_group(
        &self,
        group: &TabGroupNode,
        group_id: &str,
        labeler: &mut ChunkLabeler,
        out: &mut String,
    ) {
        let _ = write!(out, r#"<div class="tabs" id="tabs-{group_id}">"#);

        let _ = write!(
            out,
            r#"<div class="tabs-buttons" role="tablist" aria-label="{}">"#,
            escape_html(&group.label)
        );
        for (idx, child) in group.children.iter().enumerate() {
            let selected = idx == 0;
            let _ = write!(
                out,
                r#"<button role="tab" id="tab-{group_id}-{idx}" aria-controls="panel-{group_id}-{idx}" aria-selected="{selected}" tabindex="{}">{}</button>"#,
                if selected { "0" } else { "-1" },
                escape_html(child_label(child))
            );
        }
        out.push_str("</div>");

        for (idx, child) in group.children.iter().enumerate() {
            let hidden = if idx == 0 { "" } else { " hidden" };
            let _ = write!(
                out,
                r#"<div role="tabpanel" id="panel-{group_id}-{idx}" aria-labelledby="tab-{group_id}-{idx}"{hidden}>"#
            );
            self.emit_node(child, labeler, out);
            out.push_str("</div>");
        }

        out.push_str("</div>");
    }

    /// CSS-only tabs: radio inputs and labels, no ARIA roles, no hidden
    /// attribute; visibility is driven by `:checked` selectors.
    fn emit_static_group(
        &self,
        group: &TabGroupNode,
        group_id: &str,
        labeler: &mut ChunkLabeler,
        out: &mut String,
    ) {
        let _ = write!(out, r#"<div class="tabs tabs--static" id="tabs-{group_id}">"#);

        for idx in 0..group.children.len() {
            let checked = if idx == 0 { " checked" } else { "" };
            let _ = write!(
                out,
                r#"<input type="radio" name="tabs-{group_id}" id="tab-{group_id}-{idx}"{checked} />"#
            );
        }

        out.push_str(r#"<div class="tabs-buttons">"#);
        for (idx, child) in group.children.iter().enumerate() {
            let _ = write!(
                out,
                r#"<label for="tab-{group_id}-{idx}">{}</label>"#,
                escape_html(child_label(child))
            );
        }
        out.push_str("</div>");

        for child in &group.children {
            out.push_str(r#"<div class="tabs-panel">"#);
            self.emit_node(child, labeler, out);
            out.push_str("</div>");
        }

        out.push_str("</div>");
    }
}

impl Default for HtmlEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Tab button label for a child node.
fn child_label(node: &RenderNode) -> &str {
    match node {
        RenderNode::Standalone(panel) => panel.label.as_deref().unwrap_or("Tab"),
        RenderNode::TabGroup(group) => &group.label,
    }
}

/// Escape the five HTML-significant characters.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
