//! NAPI-exposed data structures.

use cjkmd_core::DocFormat;
use napi_derive::napi;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Document flavors accepted by the binding.
#[napi(string_enum)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Standard Markdown (.md) without MDX extensions.
    Markdown,
    /// Full MDX documents (.mdx) with JSX/ESM/expressions.
    Mdx,
}

impl From<InputFormat> for DocFormat {
    fn from(value: InputFormat) -> Self {
        match value {
            InputFormat::Markdown => DocFormat::Md,
            InputFormat::Mdx => DocFormat::Mdx,
        }
    }
}

/// Options accepted by the transform entry points.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct TransformConfig {
    /// Explicit document flavor; overrides extension-based detection.
    pub format: Option<InputFormat>,
    /// Enables GFM extensions. Defaults to true.
    pub gfm: Option<bool>,
    /// Enables YAML frontmatter extraction. Defaults to true.
    pub frontmatter: Option<bool>,
    /// Enables curly-quote normalization. Defaults to true.
    pub normalize_quotes: Option<bool>,
}

/// Parsed frontmatter plus the remaining document body.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct FrontmatterResult {
    /// Structured frontmatter data represented as JSON.
    pub frontmatter: JsonValue,
    /// Document body following the frontmatter block.
    pub body: String,
    /// Any syntax or parsing errors surfaced by the extractor.
    pub errors: Vec<String>,
}

/// Heading metadata returned from the pipeline.
#[napi(object)]
#[derive(Debug, Clone, Serialize)]
pub struct HeadingEntry {
    /// Heading depth (1-6).
    pub depth: u8,
    /// Slugified identifier.
    pub slug: String,
    /// Visible heading text.
    pub text: String,
}

/// Result returned by the document transformer.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// Transformed mdast tree serialized to JSON.
    pub tree: JsonValue,
    /// Frontmatter metadata as a JSON object.
    pub frontmatter: JsonValue,
    /// Heading metadata collected after the transform passes.
    pub headings: Vec<HeadingEntry>,
}

