//! Markdown parsing and document format detection.

use crate::{PipelineError, SourceLocation};
use markdown::mdast::Node;
use markdown::message::{Message, Place};
use std::path::Path;

/// Document flavor accepted by the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocFormat {
    /// Standard Markdown (.md) without MDX extensions.
    Md,
    /// Full MDX documents (.mdx) with ESM, expressions, and JSX.
    Mdx,
}

impl DocFormat {
    /// Choose a format from a file path's extension (`.mdx` wins, anything
    /// else parses as Markdown).
    pub fn detect(path: &str) -> Self {
        let is_mdx = Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("mdx"));
        if is_mdx { Self::Mdx } else { Self::Md }
    }
}

/// Parser options for building markdown-rs parse options.
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// Document flavor to parse.
    pub format: DocFormat,
    /// Enable GitHub Flavored Markdown constructs.
    pub gfm: bool,
    /// Enable YAML frontmatter parsing.
    pub frontmatter: bool,
}

impl ParseOptions {
    /// Markdown-friendly defaults (no MDX).
    pub const fn markdown() -> Self {
        Self {
            format: DocFormat::Md,
            gfm: true,
            frontmatter: true,
        }
    }

    /// MDX-friendly defaults (JSX/ESM/expression enabled).
    pub const fn mdx() -> Self {
        Self {
            format: DocFormat::Mdx,
            gfm: true,
            frontmatter: true,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: self.frontmatter,
            // MDX has no indented code blocks.
            code_indented: self.format == DocFormat::Md,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_footnote_definition = true;
            constructs.gfm_label_start_footnote = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        if self.format == DocFormat::Mdx {
            constructs.mdx_esm = true;
            constructs.mdx_expression_flow = true;
            constructs.mdx_expression_text = true;
            constructs.mdx_jsx_flow = true;
            constructs.mdx_jsx_text = true;
        }

        markdown::ParseOptions {
            constructs,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::markdown()
    }
}

/// Parse markdown into an mdast tree.
pub fn parse_document(input: &str, options: &ParseOptions) -> Result<Node, PipelineError> {
    markdown::to_mdast(input, &options.to_markdown()).map_err(|err| PipelineError::Markdown {
        message: err.to_string(),
        location: message_location(&err),
    })
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}
