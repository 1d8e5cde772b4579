use crate::fragment::FragmentNode;
use scraper::{ElementRef, Html, Node};
use std::collections::HashMap;

/// Tags whose children should be stripped (invisible/script content)
const SKIP_CHILDREN: &[&str] = &["script", "style", "noscript", "svg"];

/// Parse a fragment body into a `FragmentNode` tree.
pub fn parse_fragment(html: &str) -> FragmentNode {
    let document = Html::parse_fragment(html);

    // parse_fragment wraps the content in a synthetic <html> element;
    // lift its children out so the tree mirrors the served fragment.
    let mut children = Vec::new();
    for child_ref in document.root_element().children() {
        match child_ref.value() {
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child_ref) {
                    children.push(convert_element(child_el));
                }
            }
            Node::Text(t) => {
                let s = t.text.to_string();
                if !s.trim().is_empty() {
                    children.push(FragmentNode::text(s));
                }
            }
            _ => {}
        }
    }

    FragmentNode::fragment(children)
}

fn convert_element(el: ElementRef<'_>) -> FragmentNode {
    let tag = el.value().name.local.as_ref().to_string();
    let attributes: HashMap<String, String> = el
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    // Skip children of invisible elements
    if SKIP_CHILDREN.contains(&tag.as_str()) {
        return FragmentNode::element(tag, attributes, Vec::new());
    }

    let mut children = Vec::new();

    for child_ref in el.children() {
        match child_ref.value() {
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child_ref) {
                    children.push(convert_element(child_el));
                }
            }
            Node::Text(t) => {
                let s = t.text.to_string();
                if !s.trim().is_empty() {
                    children.push(FragmentNode::text(s));
                }
            }
            _ => {}
        }
    }

    FragmentNode::element(tag, attributes, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_fragment() {
        let html = r#"
            <h2>Learning center</h2>
            <p>Welcome to the learning center.</p>
        "#;

        let tree = parse_fragment(html);
        assert_eq!(tree.node_type, crate::fragment::NodeType::Fragment);
        assert!(tree.node_count() > 2);
        let text = tree.collect_text();
        assert!(text.contains("Learning center"));
        assert!(text.contains("Welcome"));
    }

    #[test]
    fn detects_sidebar_links() {
        let html = r#"
            <ul>
                <li><a data-sidebar href="/learning-center/topic-2">Topic 2</a></li>
                <li><a href="/docs/external">Elsewhere</a></li>
            </ul>
        "#;

        let tree = parse_fragment(html);
        let mut sidebar_links = Vec::new();
        let mut plain_links = Vec::new();
        collect_links(&tree, &mut sidebar_links, &mut plain_links);

        assert_eq!(sidebar_links, vec!["/learning-center/topic-2"]);
        assert_eq!(plain_links, vec!["/docs/external"]);
    }

    #[test]
    fn strips_script_children() {
        let html = r#"
            <p>Visible</p>
            <script>alert("hidden");</script>
        "#;

        let tree = parse_fragment(html);
        let text = tree.collect_text();
        assert!(text.contains("Visible"));
        assert!(!text.contains("alert"));
    }

    fn collect_links(
        node: &FragmentNode,
        sidebar: &mut Vec<String>,
        plain: &mut Vec<String>,
    ) {
        if let Some(href) = node.sidebar_href() {
            sidebar.push(href.to_string());
        } else if let Some(href) = node.href() {
            plain.push(href.to_string());
        }
        for child in &node.children {
            collect_links(child, sidebar, plain);
        }
    }
}
