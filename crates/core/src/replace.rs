//! Character-table substitution over text leaves.

use crate::tree::visit_mut;
use markdown::mdast::Node;

/// Replaces characters in every text leaf according to `table`, returning
/// how many characters were replaced.
///
/// Only `text` leaves are rewritten; code blocks, inline code, MDX
/// constructs, and frontmatter keep their content verbatim. A leaf that
/// contains no source character is left alone without reallocating.
pub fn replace_chars(tree: &mut Node, table: &[(char, char)]) -> usize {
    let mut replaced = 0usize;
    visit_mut(tree, &mut |node| {
        if let Node::Text(text) = node {
            replaced += replace_in_str(&mut text.value, table);
        }
    });
    replaced
}

/// String-level worker behind [`replace_chars`], also used for bare text
/// outside any tree (titles, navigation labels).
pub(crate) fn replace_in_str(value: &mut String, table: &[(char, char)]) -> usize {
    if !value.contains(|c: char| table.iter().any(|&(from, _)| from == c)) {
        return 0;
    }

    let mut out = String::with_capacity(value.len());
    let mut count = 0usize;
    for c in value.chars() {
        match table.iter().find(|&&(from, _)| from == c) {
            Some(&(_, to)) => {
                out.push(to);
                count += 1;
            }
            None => out.push(c),
        }
    }
    *value = out;
    count
}
