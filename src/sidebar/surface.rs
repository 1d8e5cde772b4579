//! The panel surface — the controller's only view of the host UI.
//!
//! All visibility and content mutations go through the `PanelSurface` trait
//! so the controller's decision logic can be exercised without a running
//! shell. `PanelModel` is the in-memory implementation used by both the egui
//! shell and the tests.

use crate::fragment::parser::parse_fragment;
use crate::fragment::FragmentNode;

/// Identifiers of the four fixed controls the widget binds to.
///
/// A missing control is a deployment defect, not a runtime condition: the
/// widget cannot function without all four, so binding fails outright.
pub struct PanelControls {
    pub toggle: Option<String>,
    pub panel: Option<String>,
    pub close: Option<String>,
    pub content: Option<String>,
}

impl PanelControls {
    /// The control set the learning-center page template ships with.
    pub fn standard() -> Self {
        Self {
            toggle: Some("learning-toggle".into()),
            panel: Some("learning-sidebar".into()),
            close: Some("learning-close".into()),
            content: Some("learning-content".into()),
        }
    }
}

/// A required control was absent at initialization.
#[derive(Debug)]
pub struct InitError {
    pub missing: Vec<&'static str>,
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "missing required sidebar controls: {}",
            self.missing.join(", ")
        )
    }
}

impl std::error::Error for InitError {}

/// Host-side view of the sidebar panel.
///
/// The visible-state flag and the `aria-hidden`/`aria-expanded` pair are set
/// together by `set_expanded`, which is what keeps them mutually consistent.
pub trait PanelSurface {
    /// Initialization wiring: marks the toggle script-enabled (so a
    /// no-script fallback can be hidden) and points the panel's accessible
    /// label at the toggle.
    fn mark_script_enabled(&mut self);

    /// Flip visibility. Updates the visible-state flag, `aria-hidden` and
    /// the toggle's `aria-expanded` in one step.
    fn set_expanded(&mut self, expanded: bool);

    fn is_expanded(&self) -> bool;
    fn aria_hidden(&self) -> bool;
    fn aria_expanded(&self) -> bool;

    /// Whether the content container holds no non-whitespace content.
    fn content_is_empty(&self) -> bool;

    /// Replace the content container's HTML.
    fn set_content(&mut self, html: &str);

    fn content_html(&self) -> &str;
}

/// In-memory panel surface backing the egui shell.
///
/// Keeps both the raw fragment HTML and its parsed tree so the shell can
/// render without re-parsing every frame.
#[derive(Debug)]
pub struct PanelModel {
    toggle_id: String,
    panel_id: String,
    close_id: String,
    content_id: String,
    script_enabled: bool,
    active: bool,
    aria_hidden: bool,
    aria_expanded: bool,
    labelled_by: String,
    content_html: String,
    content_tree: FragmentNode,
}

impl PanelModel {
    /// Bind to the named controls. Fails when any control is missing.
    pub fn bind(controls: PanelControls) -> Result<Self, InitError> {
        let mut missing = Vec::new();
        if controls.toggle.is_none() {
            missing.push("toggle");
        }
        if controls.panel.is_none() {
            missing.push("panel");
        }
        if controls.close.is_none() {
            missing.push("close");
        }
        if controls.content.is_none() {
            missing.push("content");
        }
        if !missing.is_empty() {
            return Err(InitError { missing });
        }

        Ok(Self {
            toggle_id: controls.toggle.unwrap_or_default(),
            panel_id: controls.panel.unwrap_or_default(),
            close_id: controls.close.unwrap_or_default(),
            content_id: controls.content.unwrap_or_default(),
            script_enabled: false,
            active: false,
            aria_hidden: true,
            aria_expanded: false,
            labelled_by: String::new(),
            content_html: String::new(),
            content_tree: FragmentNode::fragment(Vec::new()),
        })
    }

    pub fn toggle_id(&self) -> &str {
        &self.toggle_id
    }

    pub fn panel_id(&self) -> &str {
        &self.panel_id
    }

    pub fn close_id(&self) -> &str {
        &self.close_id
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    pub fn script_enabled(&self) -> bool {
        self.script_enabled
    }

    pub fn labelled_by(&self) -> &str {
        &self.labelled_by
    }

    /// Parsed view of the current content, for rendering.
    pub fn content_tree(&self) -> &FragmentNode {
        &self.content_tree
    }
}

impl PanelSurface for PanelModel {
    fn mark_script_enabled(&mut self) {
        self.script_enabled = true;
        self.labelled_by = self.toggle_id.clone();
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.active = expanded;
        self.aria_hidden = !expanded;
        self.aria_expanded = expanded;
    }

    fn is_expanded(&self) -> bool {
        self.active
    }

    fn aria_hidden(&self) -> bool {
        self.aria_hidden
    }

    fn aria_expanded(&self) -> bool {
        self.aria_expanded
    }

    fn content_is_empty(&self) -> bool {
        self.content_html.trim().is_empty()
    }

    fn set_content(&mut self, html: &str) {
        self.content_html = html.to_string();
        self.content_tree = parse_fragment(html);
    }

    fn content_html(&self) -> &str {
        &self.content_html
    }
}
