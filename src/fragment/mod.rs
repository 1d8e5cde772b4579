pub mod parser;

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Fragment,
    Element,
    Text,
}

/// Node in a parsed sidebar fragment.
///
/// Fragments are partial documents returned by the server for injection into
/// the content container, so the root is a bare element list, not a page.
#[derive(Debug, Clone)]
pub struct FragmentNode {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub children: Vec<FragmentNode>,
    pub node_type: NodeType,
}

impl FragmentNode {
    pub fn fragment(children: Vec<FragmentNode>) -> Self {
        Self {
            tag: "#fragment".into(),
            attributes: HashMap::new(),
            text: String::new(),
            children,
            node_type: NodeType::Fragment,
        }
    }

    pub fn element(
        tag: impl Into<String>,
        attrs: HashMap<String, String>,
        children: Vec<FragmentNode>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attributes: attrs,
            text: String::new(),
            children,
            node_type: NodeType::Element,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: String::new(),
            attributes: HashMap::new(),
            text: content.into(),
            children: Vec::new(),
            node_type: NodeType::Text,
        }
    }

    /// Recursively count all nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Collect all text content recursively
    pub fn collect_text(&self) -> String {
        let mut buf = String::new();
        self.collect_text_inner(&mut buf);
        buf
    }

    fn collect_text_inner(&self, buf: &mut String) {
        if !self.text.is_empty() {
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(self.text.trim());
        }
        for child in &self.children {
            child.collect_text_inner(buf);
        }
    }

    /// The anchor target, if this node is an anchor with an `href`.
    pub fn href(&self) -> Option<&str> {
        if self.tag == "a" {
            self.attributes.get("href").map(|s| s.as_str())
        } else {
            None
        }
    }

    /// `Some(href)` when this anchor opted into in-panel navigation via the
    /// `data-sidebar` marker attribute. Ordinary anchors return `None` and
    /// navigate normally.
    pub fn sidebar_href(&self) -> Option<&str> {
        if self.attributes.contains_key("data-sidebar") {
            self.href()
        } else {
            None
        }
    }
}
