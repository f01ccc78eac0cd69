//! Document pipeline: split frontmatter, parse, transform, collect anchors.

use crate::PipelineError;
use crate::frontmatter::extract_frontmatter;
use crate::headings::{HeadingEntry, collect_headings};
use crate::parse::{ParseOptions, parse_document};
use crate::quotes::QuoteNormalizer;
use markdown::mdast::Node;
use serde_json::Value as JsonValue;

/// Trait for mutating the parsed mdast in place.
///
/// A pipeline is shared by reference across batch workers, so transforms
/// must be `Send + Sync`; each invocation still gets exclusive access to
/// its own tree.
pub trait TreeTransform: Send + Sync {
    /// Mutate the tree in place.
    fn apply(&self, root: &mut Node);
}

impl<F> TreeTransform for F
where
    F: Fn(&mut Node) + Send + Sync,
{
    fn apply(&self, root: &mut Node) {
        (self)(root)
    }
}

/// Fully processed document.
#[derive(Debug)]
pub struct Document {
    /// Frontmatter metadata as a JSON object.
    pub frontmatter: JsonValue,
    /// Transformed mdast tree.
    pub tree: Node,
    /// Heading anchors, collected after the transform passes.
    pub headings: Vec<HeadingEntry>,
}

/// Configurable document pipeline with ordered tree transforms.
pub struct Pipeline {
    options: ParseOptions,
    transforms: Vec<Box<dyn TreeTransform>>,
}

impl Pipeline {
    /// Empty pipeline with the given parse options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            transforms: Vec::new(),
        }
    }

    /// Documentation preset: quote normalization pre-registered.
    pub fn docs(options: ParseOptions) -> Self {
        Self::new(options).with_transform(QuoteNormalizer)
    }

    /// Appends a transform. Transforms run in registration order.
    pub fn with_transform<T: TreeTransform + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Runs the pipeline over one source document.
    pub fn run(&self, source: &str) -> Result<Document, PipelineError> {
        let (frontmatter, body) = if self.options.frontmatter {
            let split = extract_frontmatter(source)?;
            (split.meta, split.body)
        } else {
            (JsonValue::Object(Default::default()), source)
        };
        let mut tree = parse_document(body, &self.options)?;

        for transform in &self.transforms {
            transform.apply(&mut tree);
        }

        let headings = collect_headings(&mut tree);
        log::debug!(
            "processed document: {} transform pass(es), {} heading(s)",
            self.transforms.len(),
            headings.len()
        );

        Ok(Document {
            frontmatter,
            tree,
            headings,
        })
    }
}
