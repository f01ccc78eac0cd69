//! Depth-first traversal helpers for mdast trees.

use markdown::mdast::Node;

/// Walks `node` and every descendant in depth-first order, applying `f` to
/// each one.
pub fn visit_mut<F>(node: &mut Node, f: &mut F)
where
    F: FnMut(&mut Node),
{
    f(node);
    if let Some(children) = node.children_mut() {
        for child in children {
            visit_mut(child, f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{ParseOptions, parse_document};

    #[test]
    fn visits_every_node_once() {
        let mut tree = parse_document("# Title\n\nSome *emphasis* here.", &ParseOptions::markdown())
            .unwrap();
        let mut visited = 0usize;
        visit_mut(&mut tree, &mut |_| visited += 1);
        // root, heading, text, paragraph, text, emphasis, text, text
        assert_eq!(visited, 8);
    }

    #[test]
    fn reaches_nested_text_leaves() {
        let mut tree =
            parse_document("> quoted *deep* text", &ParseOptions::markdown()).unwrap();
        let mut deepest = None;
        visit_mut(&mut tree, &mut |node| {
            if let Node::Text(text) = node
                && text.value == "deep"
            {
                deepest = Some(text.value.clone());
            }
        });
        assert_eq!(deepest.as_deref(), Some("deep"));
    }
}
