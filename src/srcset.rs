//! Source-set descriptors for resized image renditions.
//!
//! The table and its entries are built by the caller, typically from a scan of
//! the generated rendition files, and are consumed read-only by the rewriter.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One resized rendition of an image
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct SourceSetItem {
    /// URL the rendition is served from
    pub url: String,
    /// Intrinsic width in pixels
    pub width: u32,
}

/// The available renditions for one source image, ordered by ascending width
///
/// Only the two attribute-formatting operations are consumed by the rewriter;
/// how the renditions were produced is not this crate's concern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceSet {
    items: Vec<SourceSetItem>,
}

impl SourceSet {
    pub fn new() -> SourceSet {
        SourceSet { items: Vec::new() }
    }

    /// Adds a rendition, keeping the set ordered by ascending width.
    /// Renditions with equal widths keep their insertion order.
    pub fn push(&mut self, url: String, width: u32) {
        let position = self
            .items
            .iter()
            .position(|item| item.width > width)
            .unwrap_or(self.items.len());

        self.items.insert(position, SourceSetItem { url, width });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[SourceSetItem] {
        &self.items
    }

    /// Formats the `srcset` attribute value: `url widthw` pairs joined by
    /// commas, smallest rendition first.
    ///
    /// # Examples
    ///
    /// ```
    /// use respimg::srcset::SourceSet;
    ///
    /// let mut set = SourceSet::new();
    /// set.push("/img/a-800.jpg".to_string(), 800);
    /// set.push("/img/a-480.jpg".to_string(), 480);
    ///
    /// assert_eq!(
    ///     set.srcset_attribute(),
    ///     "/img/a-480.jpg 480w, /img/a-800.jpg 800w"
    /// );
    /// ```
    pub fn srcset_attribute(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{} {}w", item.url, item.width))
            .collect::<Vec<String>>()
            .join(", ")
    }

    /// Formats the `sizes` attribute value from the image's `width` attribute.
    ///
    /// A parseable width (trimmed, optional `px` suffix, greater than zero)
    /// caps the slot at that many pixels; anything else falls back to the full
    /// viewport width.
    pub fn sizes_attribute(&self, width_attr: &str) -> String {
        match parse_width_attr(width_attr) {
            Some(width) => format!("(max-width: {width}px) 100vw, {width}px"),
            None => "100vw".to_string(),
        }
    }
}

/// Strips leading and trailing slashes off an image path.
///
/// This is the one normalization rule shared by table keys and image source
/// lookups; both sides apply it, so they can never disagree.
pub fn normalize_source_path(path: &str) -> &str {
    path.trim_matches('/')
}

fn parse_width_attr(value: &str) -> Option<u32> {
    let digits = value.trim().trim_end_matches("px").trim();

    match digits.parse::<u32>() {
        Ok(width) if width > 0 => Some(width),
        _ => None,
    }
}

/// Maps normalized image paths to their available renditions
#[derive(Clone, Debug, Default)]
pub struct SourceSetTable {
    entries: HashMap<String, SourceSet>,
}

impl SourceSetTable {
    pub fn new() -> SourceSetTable {
        SourceSetTable {
            entries: HashMap::new(),
        }
    }

    /// Inserts the renditions for one image; the key is normalized.
    pub fn insert(&mut self, source_path: &str, source_set: SourceSet) {
        self.entries
            .insert(normalize_source_path(source_path).to_string(), source_set);
    }

    /// Looks up the renditions for an image path; the query is normalized, so
    /// raw and normalized forms of the same path both hit.
    pub fn get(&self, source_path: &str) -> Option<&SourceSet> {
        self.entries.get(normalize_source_path(source_path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
