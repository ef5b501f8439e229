//! # Respimg Library
//!
//! Library and CLI tool for adding responsive `srcset` and `sizes` attributes
//! to `<img>` elements in HTML documents, driven by a precomputed table of
//! resized image renditions.
//!
//! ## Module organization
//!
//! - `core` - entry points, configuration options, and the error type
//! - `html` - DOM parsing, the image rewriter, and serialization
//! - `srcset` - source-set descriptors and the rendition table

pub mod core;
pub mod html;
pub mod srcset;

// Re-export commonly used items for convenience
pub use crate::core::{list_image_sources, rewrite_document, RespimgError, RespimgOptions};
pub use crate::html::ImageRewriter;
pub use crate::srcset::{normalize_source_path, SourceSet, SourceSetItem, SourceSetTable};
