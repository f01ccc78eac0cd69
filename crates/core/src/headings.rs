//! Heading anchor collection.

use crate::slug::{Slugger, extract_custom_id};
use crate::tree::visit_mut;
use markdown::mdast::Node;
use serde::Serialize;

/// Anchor metadata for one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    /// Heading depth (1-6).
    pub depth: u8,
    /// Visible heading text.
    pub text: String,
    /// Anchor id, generated or taken from a `{#custom-id}` marker.
    pub slug: String,
}

/// Collects anchors for every heading in document order, stripping
/// `{#custom-id}` markers from the tree.
///
/// Slugs are deduplicated per document; an explicit id skips generation
/// but still occupies its name, so a later heading that would produce
/// the same slug gets a suffix.
pub fn collect_headings(tree: &mut Node) -> Vec<HeadingEntry> {
    let mut slugger = Slugger::new();
    let mut entries = Vec::new();

    visit_mut(tree, &mut |node| {
        if let Node::Heading(heading) = node {
            let custom_id = strip_custom_id(&mut heading.children);
            let text = gather_text(&heading.children);
            let slug = match custom_id {
                Some(id) => {
                    slugger.reserve(&id);
                    id
                }
                None => slugger.slug(&text),
            };
            entries.push(HeadingEntry {
                depth: heading.depth,
                text,
                slug,
            });
        }
    });

    entries
}

/// Looks for a `{#custom-id}` marker in the last text descendant and
/// removes it from the tree.
fn strip_custom_id(nodes: &mut [Node]) -> Option<String> {
    match nodes.last_mut()? {
        Node::Text(text) => {
            let (clean, id) = extract_custom_id(&text.value)?;
            let (clean, id) = (clean.to_string(), id.to_string());
            text.value = clean;
            Some(id)
        }
        Node::Strong(n) => strip_custom_id(&mut n.children),
        Node::Emphasis(n) => strip_custom_id(&mut n.children),
        Node::Link(n) => strip_custom_id(&mut n.children),
        Node::Delete(n) => strip_custom_id(&mut n.children),
        _ => None,
    }
}

/// Extracts the visible text of a heading's children.
fn gather_text(nodes: &[Node]) -> String {
    let mut text = String::new();
    for node in nodes {
        gather_into(node, &mut text);
    }
    text.trim().to_string()
}

fn gather_into(node: &Node, buffer: &mut String) {
    match node {
        Node::Text(t) => buffer.push_str(&t.value),
        Node::InlineCode(code) => buffer.push_str(&code.value),
        Node::Strong(n) => n.children.iter().for_each(|c| gather_into(c, buffer)),
        Node::Emphasis(n) => n.children.iter().for_each(|c| gather_into(c, buffer)),
        Node::Link(n) => n.children.iter().for_each(|c| gather_into(c, buffer)),
        Node::Delete(n) => n.children.iter().for_each(|c| gather_into(c, buffer)),
        _ => {}
    }
}
