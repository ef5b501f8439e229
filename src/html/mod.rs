//! HTML parsing, image rewriting, and serialization.
//!
//! - `dom`: parse bytes into a DOM and read/write element attributes
//! - `rewriter`: attaches srcset/sizes/class attributes to image elements
//! - `serializer`: serialize a DOM back into bytes

pub mod dom;
pub mod rewriter;
pub mod serializer;

// Re-export commonly used items for convenience
pub use dom::{
    encode_non_ascii, find_nodes, get_node_attr, get_node_name, html_to_dom, set_node_attr,
};
pub use rewriter::ImageRewriter;
pub use serializer::serialize_document;
