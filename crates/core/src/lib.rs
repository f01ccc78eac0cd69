#![deny(missing_docs)]
//! cjkmd core: markdown parsing, frontmatter extraction, tree transforms,
//! and heading anchors for CJK documentation pipelines.

/// Core error types.
pub mod error;
/// YAML frontmatter extraction helpers.
pub mod frontmatter;
/// Heading anchor collection.
pub mod headings;
/// mdast to JSON conversion.
pub mod json;
/// Markdown parsing and document format detection.
pub mod parse;
/// Document pipeline and transform registration.
pub mod pipeline;
/// Curly-quote to corner-bracket normalization.
pub mod quotes;
/// Character-table substitution over text leaves.
pub mod replace;
/// Slug generation utilities.
pub mod slug;
/// Tree traversal helpers.
pub mod tree;

pub use error::{PipelineError, SourceLocation};
pub use frontmatter::{FrontmatterError, SplitDocument, extract_frontmatter};
pub use headings::{HeadingEntry, collect_headings};
pub use json::tree_to_json;
pub use parse::{DocFormat, ParseOptions, parse_document};
pub use pipeline::{Document, Pipeline, TreeTransform};
pub use quotes::{QUOTE_REPLACEMENTS, QuoteNormalizer, normalize_quotes, normalize_text};
pub use replace::replace_chars;
pub use slug::{Slugger, extract_custom_id, slugify};
pub use tree::visit_mut;
