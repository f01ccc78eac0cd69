//! Curly-quote to corner-bracket normalization.
//!
//! Chinese typography sets quotations in corner brackets (『』 and 「」)
//! rather than the Western curly marks most editors insert. This pass
//! rewrites the four curly-quote code points in every text leaf and
//! leaves everything else alone.

use crate::pipeline::TreeTransform;
use crate::replace::{replace_chars, replace_in_str};
use markdown::mdast::Node;

/// The fixed replacement table, in substitution order.
pub const QUOTE_REPLACEMENTS: [(char, char); 4] = [
    ('\u{201c}', '『'), // left double quotation mark
    ('\u{201d}', '』'), // right double quotation mark
    ('\u{2018}', '「'), // left single quotation mark
    ('\u{2019}', '」'), // right single quotation mark
];

/// Rewrites every curly quote in the tree's text leaves, in place.
///
/// Tree shape is preserved: no nodes are created or removed, and
/// non-text nodes are untouched. Returns how many characters were
/// replaced. Targets never appear as sources, so a second pass over
/// already-normalized text is a no-op.
pub fn normalize_quotes(tree: &mut Node) -> usize {
    replace_chars(tree, &QUOTE_REPLACEMENTS)
}

/// Rewrites curly quotes in a bare string, for text that never passes
/// through the parser (page titles, navigation labels).
pub fn normalize_text(text: &str) -> String {
    let mut value = text.to_string();
    replace_in_str(&mut value, &QUOTE_REPLACEMENTS);
    value
}

/// [`TreeTransform`] wrapper around [`normalize_quotes`] for pipeline
/// registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteNormalizer;

impl TreeTransform for QuoteNormalizer {
    fn apply(&self, root: &mut Node) {
        normalize_quotes(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{ParseOptions, parse_document};
    use crate::tree::visit_mut;

    fn parse(input: &str) -> Node {
        parse_document(input, &ParseOptions::markdown()).unwrap()
    }

    fn paragraph_text(tree: &Node) -> &str {
        let paragraph = tree.children().unwrap().first().unwrap();
        match paragraph.children().unwrap().first().unwrap() {
            Node::Text(text) => &text.value,
            other => panic!("unexpected node: {other:?}"),
        }
    }

    #[test]
    fn double_quotes_become_white_corner_brackets() {
        let mut tree = parse("“Hello”");
        assert_eq!(normalize_quotes(&mut tree), 2);
        assert_eq!(paragraph_text(&tree), "『Hello』");
    }

    #[test]
    fn single_quotes_become_corner_brackets() {
        let mut tree = parse("‘single’");
        assert_eq!(normalize_quotes(&mut tree), 2);
        assert_eq!(paragraph_text(&tree), "「single」");
    }

    #[test]
    fn nested_quotes_normalize_together() {
        let mut tree = parse("“A ‘B’ C”");
        assert_eq!(normalize_quotes(&mut tree), 4);
        assert_eq!(paragraph_text(&tree), "『A 「B」 C』");
    }

    #[test]
    fn straight_quotes_are_not_touched() {
        let mut tree = parse("\"plain text\"");
        let before = tree.clone();
        assert_eq!(normalize_quotes(&mut tree), 0);
        assert_eq!(tree, before);
        assert_eq!(paragraph_text(&tree), "\"plain text\"");
    }

    #[test]
    fn tree_without_text_leaves_is_a_no_op() {
        for input in ["", "***", "```\n“quoted code”\n```"] {
            let mut tree = parse(input);
            let before = tree.clone();
            assert_eq!(normalize_quotes(&mut tree), 0, "input: {input:?}");
            assert_eq!(tree, before, "input: {input:?}");
        }
    }

    #[test]
    fn bare_text_normalizes_without_parsing() {
        assert_eq!(normalize_text("“第一章”"), "『第一章』");
        assert_eq!(normalize_text("no quotes"), "no quotes");
    }

    #[test]
    fn chinese_prose_normalizes() {
        let mut tree = parse("他说：“这是‘插件’的核心。”");
        assert_eq!(normalize_quotes(&mut tree), 4);
        assert_eq!(paragraph_text(&tree), "他说：『这是「插件」的核心。』");
    }

    #[test]
    fn repeated_application_is_idempotent() {
        let mut tree = parse("“A ‘B’ C”");
        normalize_quotes(&mut tree);
        let once = tree.clone();
        assert_eq!(normalize_quotes(&mut tree), 0);
        assert_eq!(tree, once);
    }

    #[test]
    fn node_count_and_order_survive() {
        let mut tree = parse("# “标题”\n\n段落里有‘引号’。\n\n- “列表”\n- 项目\n");
        let mut before = 0usize;
        visit_mut(&mut tree, &mut |_| before += 1);
        assert!(normalize_quotes(&mut tree) > 0);
        let mut after = 0usize;
        visit_mut(&mut tree, &mut |_| after += 1);
        assert_eq!(before, after);
    }
}
