//! Config resolution and the per-document transform runner.

use crate::types::{HeadingEntry, TransformConfig, TransformResult};
use cjkmd_core::{DocFormat, ParseOptions, Pipeline, PipelineError, tree_to_json};

/// Fully-resolved configuration applied to each document.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    format: Option<DocFormat>,
    gfm: bool,
    frontmatter: bool,
    normalize_quotes: bool,
}

impl ResolvedConfig {
    pub(crate) fn new(config: Option<TransformConfig>) -> Self {
        let config = config.unwrap_or_default();
        Self {
            format: config.format.map(Into::into),
            gfm: config.gfm.unwrap_or(true),
            frontmatter: config.frontmatter.unwrap_or(true),
            normalize_quotes: config.normalize_quotes.unwrap_or(true),
        }
    }

    /// Builds the pipeline for one document, detecting the flavor from the
    /// file path when no explicit format was configured.
    fn pipeline(&self, filepath: Option<&str>) -> Pipeline {
        let format = self
            .format
            .unwrap_or_else(|| filepath.map(DocFormat::detect).unwrap_or(DocFormat::Md));
        let options = ParseOptions {
            format,
            gfm: self.gfm,
            frontmatter: self.frontmatter,
        };
        if self.normalize_quotes {
            Pipeline::docs(options)
        } else {
            Pipeline::new(options)
        }
    }
}

/// Runs one document through the configured pipeline and converts the
/// outcome to the NAPI result shape.
pub(crate) fn run_pipeline(
    config: &ResolvedConfig,
    source: &str,
    filepath: Option<&str>,
) -> Result<TransformResult, PipelineError> {
    let pipeline = config.pipeline(filepath);
    let document = pipeline.run(source)?;

    let tree = tree_to_json(&document.tree);
    let headings = document
        .headings
        .into_iter()
        .map(|h| HeadingEntry {
            depth: h.depth,
            slug: h.slug,
            text: h.text,
        })
        .collect();

    Ok(TransformResult {
        tree,
        frontmatter: document.frontmatter,
        headings,
    })
}
