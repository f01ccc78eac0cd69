#![deny(missing_docs)]
//! Node.js bindings that surface cjkmd's Rust implementation.

use cjkmd_core::{PipelineError, extract_frontmatter};
use napi::bindgen_prelude::*;
use napi_derive::napi;
use serde_json::Value as JsonValue;

/// Batch processing types.
pub mod batch;
/// Config resolution and the per-document transform runner.
mod transform;
/// NAPI-exposed data structures.
pub mod types;
pub use batch::*;
pub use types::*;
use transform::{ResolvedConfig, run_pipeline};

/// Extracts YAML frontmatter without parsing the entire Markdown document.
///
/// Extraction failures are reported through the `errors` field rather than
/// thrown, so callers can fall back to treating the whole input as body text.
#[napi]
pub fn parse_frontmatter(content: String) -> napi::Result<FrontmatterResult> {
    match extract_frontmatter(&content) {
        Ok(split) => Ok(FrontmatterResult {
            frontmatter: split.meta,
            body: split.body.to_string(),
            errors: Vec::new(),
        }),
        Err(err) => Ok(FrontmatterResult {
            frontmatter: empty_frontmatter(),
            body: content,
            errors: vec![err.to_string()],
        }),
    }
}

/// Parses a Markdown/MDX document, runs the registered tree transforms, and
/// returns the transformed tree with frontmatter and heading metadata.
///
/// The document flavor is taken from `config.format` when set, otherwise
/// detected from the `filepath` extension (`.mdx` selects MDX).
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { transformDocument } = require('cjkmd-napi');
///
/// const result = transformDocument('# “第一章”', 'chapter-01.md');
/// console.log(result.headings); // [{ depth: 1, slug: '第一章', text: '『第一章』' }]
/// ```
#[napi(js_name = "transformDocument")]
pub fn transform_document(
    source: String,
    filepath: Option<String>,
    config: Option<TransformConfig>,
) -> napi::Result<TransformResult> {
    let config = ResolvedConfig::new(config);
    run_pipeline(&config, &source, filepath.as_deref()).map_err(convert_error)
}

/// Rewrites curly quotes to corner brackets in a plain string.
///
/// Useful for one-off strings such as page titles or sidebar labels that
/// never pass through the Markdown pipeline.
#[napi(js_name = "normalizeText")]
pub fn normalize_text(text: String) -> String {
    cjkmd_core::normalize_text(&text)
}

/// Transforms multiple Markdown/MDX documents in parallel using Rayon.
///
/// # Arguments
///
/// * `inputs` - Array of documents to transform, each with an id, source, and optional filepath
/// * `options` - Optional batch processing options (thread count, error handling, config)
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { transformBatch } = require('cjkmd-napi');
///
/// const inputs = [
///   { id: 'chapter-01.md', source: '# “第一章”' },
///   { id: 'chapter-02.md', source: '# “第二章”' },
/// ];
///
/// const output = transformBatch(inputs, { continueOnError: true });
/// console.log(`Processed ${output.stats.total} files in ${output.stats.processingTimeMs}ms`);
/// ```
#[napi(js_name = "transformBatch")]
pub fn transform_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> napi::Result<BatchOutput> {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let continue_on_error = opts.continue_on_error.unwrap_or(true);
    let config = ResolvedConfig::new(opts.config);

    // Configure thread pool if max_threads is specified
    let pool = if let Some(max_threads) = opts.max_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    } else {
        None
    };

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchItemResult {
        let filepath = input.filepath.clone().unwrap_or_else(|| input.id.clone());
        match run_pipeline(&config, &input.source, Some(&filepath)) {
            Ok(result) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchItemResult {
                    id: input.id,
                    result: Some(result),
                    error: None,
                }
            }
            Err(err) => {
                failed.fetch_add(1, Ordering::Relaxed);
                BatchItemResult {
                    id: input.id,
                    result: None,
                    error: Some(err.to_string()),
                }
            }
        }
    };

    let results: Vec<BatchItemResult> = if continue_on_error {
        // Process all files regardless of errors
        if let Some(pool) = pool {
            pool.install(|| inputs.into_par_iter().map(process_input).collect())
        } else {
            inputs.into_par_iter().map(process_input).collect()
        }
    } else {
        // Stop on first error; a sequential pass keeps result order stable
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let result = process_input(input);
            let had_error = result.error.is_some();
            results.push(result);
            if had_error {
                break;
            }
        }
        results
    };

    let elapsed = start.elapsed();
    let succeeded = succeeded.load(Ordering::Relaxed);
    let failed = failed.load(Ordering::Relaxed);
    log::debug!(
        "batch transform: {total} file(s), {succeeded} ok, {failed} failed in {:.2}ms",
        elapsed.as_secs_f64() * 1000.0
    );

    Ok(BatchOutput {
        results,
        stats: BatchStats {
            total,
            succeeded,
            failed,
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    })
}

/// Maps pipeline errors onto NAPI statuses.
fn convert_error(err: PipelineError) -> Error {
    match err {
        PipelineError::Markdown { message, location } => Error::new(
            Status::InvalidArg,
            format!("Markdown parser error at {}: {}", location, message),
        ),
        PipelineError::Frontmatter(err) => {
            Error::new(Status::InvalidArg, format!("Frontmatter error: {}", err))
        }
    }
}

fn empty_frontmatter() -> JsonValue {
    JsonValue::Object(Default::default())
}
