//! Batch processing types for parallel document transforms.

use crate::types::{TransformConfig, TransformResult};
use napi_derive::napi;

/// Input for batch processing, one entry per file.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// File identifier (typically the file path).
    pub id: String,
    /// Markdown/MDX source content.
    pub source: String,
    /// Optional filepath override for format detection and error messages.
    pub filepath: Option<String>,
}

/// Result for a single file in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchItemResult {
    /// File identifier matching the input.
    pub id: String,
    /// Transform result (present on success).
    pub result: Option<TransformResult>,
    /// Error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for batch processing.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Total number of files submitted.
    pub total: u32,
    /// Number of successfully transformed files.
    pub succeeded: u32,
    /// Number of failed files.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to the rayon default.
    pub max_threads: Option<u32>,
    /// Whether to continue processing after an error. Defaults to true.
    pub continue_on_error: Option<bool>,
    /// Transform configuration applied to every file.
    pub config: Option<TransformConfig>,
}

/// Result of batch processing containing all results and statistics.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// Individual results for each input file, in input order.
    pub results: Vec<BatchItemResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}
