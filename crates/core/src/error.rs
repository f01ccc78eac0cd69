use crate::frontmatter::FrontmatterError;
use thiserror::Error;

/// Line and column of a parse failure, both 1-indexed. File identity is
/// tracked by callers (the batch layer keys results by input id).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that can occur while running a document through the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// markdown-rs rejected the source text.
    #[error("Parse error at {location}: {message}")]
    Markdown {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// Frontmatter block could not be extracted or parsed.
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}
