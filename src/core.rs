use std::error::Error;
use std::fmt;

use crate::html::ImageRewriter;
use crate::srcset::SourceSetTable;

/// Represents errors that can occur while rewriting a document
#[derive(Debug)]
pub struct RespimgError {
    details: String,
}

impl RespimgError {
    /// Creates a new RespimgError with the given message
    pub fn new(msg: &str) -> RespimgError {
        RespimgError {
            details: msg.to_string(),
        }
    }
}

impl fmt::Display for RespimgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Error for RespimgError {
    fn description(&self) -> &str {
        &self.details
    }
}

/// Configuration options for image rewriting
///
/// Every entry point takes these explicitly; there is no process-global
/// settings state. The defaults leave sources resolved from `src`, write the
/// standard `srcset` attribute, and add no class.
#[derive(Default, Clone)]
pub struct RespimgOptions {
    /// Attribute read instead of `src` when present and non-empty
    /// (e.g. `data-src` for lazy-loading setups)
    pub alternative_src: Option<String>,
    /// Attribute written instead of `srcset` (e.g. `data-srcset`)
    pub alternative_src_set: Option<String>,
    /// CSS class appended to every rewritten image
    pub add_class: Option<String>,
    /// Document encoding label; empty or unknown labels fall back to lossy UTF-8
    pub encoding: Option<String>,
    pub silent: bool,
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Rewrites the `<img>` elements of an HTML document
///
/// Parses the input, attaches `srcset`/`sizes`/class attributes to every image
/// whose resolved source has an entry in `source_sets`, and serializes the
/// document back into bytes. Images without an entry are left untouched.
///
/// # Returns
///
/// The serialized document and the number of images that were rewritten,
/// or an error if there was no input to process.
///
/// # Examples
///
/// ```
/// use respimg::core::{rewrite_document, RespimgOptions};
/// use respimg::srcset::SourceSetTable;
///
/// let html = b"<html><body><img src=\"/photo.jpg\"></body></html>".to_vec();
/// let (output, rewritten) =
///     rewrite_document(html, &SourceSetTable::new(), &RespimgOptions::default()).unwrap();
///
/// assert_eq!(rewritten, 0);
/// assert!(!output.is_empty());
/// ```
pub fn rewrite_document(
    input_data: Vec<u8>,
    source_sets: &SourceSetTable,
    options: &RespimgOptions,
) -> Result<(Vec<u8>, usize), RespimgError> {
    if input_data.is_empty() {
        return Err(RespimgError::new("No input data"));
    }

    let mut rewriter = ImageRewriter::new(&input_data, options.clone());

    Ok(rewriter.inject_source_sets(source_sets))
}

/// Returns the resolved source of every `<img>` element, in document order
///
/// Sources are resolved with the same rule injection uses: the configured
/// alternative source attribute wins over `src` when present and non-empty,
/// and leading/trailing slashes are stripped.
pub fn list_image_sources(
    input_data: Vec<u8>,
    options: &RespimgOptions,
) -> Result<Vec<String>, RespimgError> {
    if input_data.is_empty() {
        return Err(RespimgError::new("No input data"));
    }

    Ok(ImageRewriter::new(&input_data, options.clone()).image_sources())
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
}
