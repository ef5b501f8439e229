use markup5ever_rcdom::{Handle, RcDom};

use crate::core::RespimgOptions;
use crate::srcset::{normalize_source_path, SourceSet, SourceSetTable};

use super::dom::{find_nodes, get_node_attr, html_to_dom, set_node_attr};
use super::serializer::serialize_document;

/// Attaches responsive-image attributes to the `<img>` elements of one
/// document.
///
/// Construction parses the input eagerly and captures every `img` element in
/// document order; that node list is reused by all operations for the lifetime
/// of the instance. Mutating the document through other means between calls is
/// undefined behavior; the list is not recomputed.
pub struct ImageRewriter {
    options: RespimgOptions,
    dom: RcDom,
    img_nodes: Vec<Handle>,
}

impl ImageRewriter {
    pub fn new(input_data: &[u8], options: RespimgOptions) -> ImageRewriter {
        let dom = html_to_dom(input_data, options.encoding.clone().unwrap_or_default());
        let img_nodes = find_nodes(&dom.document, "img");

        ImageRewriter {
            options,
            dom,
            img_nodes,
        }
    }

    /// Returns the resolved source of every image, in document order.
    pub fn image_sources(&self) -> Vec<String> {
        self.img_nodes
            .iter()
            .map(|node| self.resolve_source(node))
            .collect()
    }

    /// Number of `img` elements captured at parse time.
    pub fn image_count(&self) -> usize {
        self.img_nodes.len()
    }

    /// Adds `sizes`, `srcset`, and class attributes to every image whose
    /// resolved source has an entry in the table, then serializes the whole
    /// document.
    ///
    /// Images without an entry are skipped entirely. Existing non-empty
    /// `sizes` and srcset-target attributes always win. The configured class
    /// is appended unconditionally, without deduplication, so running this
    /// twice on the same instance doubles it.
    ///
    /// Returns the serialized document and the number of images rewritten.
    pub fn inject_source_sets(&mut self, source_sets: &SourceSetTable) -> (Vec<u8>, usize) {
        let mut rewritten: usize = 0;

        for node in &self.img_nodes {
            let source_set = match source_sets.get(&self.resolve_source(node)) {
                Some(source_set) => source_set,
                // No resized renditions exist for this image
                None => continue,
            };

            self.set_sizes_attribute(node, source_set);
            self.set_srcset_attribute(node, source_set);
            self.append_class_attribute(node);
            rewritten += 1;
        }

        let document_encoding = self.options.encoding.as_deref().unwrap_or_default();

        (serialize_document(&self.dom, document_encoding), rewritten)
    }

    /// Resolves the lookup key for one image: the configured alternative
    /// source attribute when present and non-empty, `src` otherwise, with
    /// leading and trailing slashes stripped.
    fn resolve_source(&self, node: &Handle) -> String {
        let mut src = get_node_attr(node, "src").unwrap_or_default();

        if let Some(alt_attr) = non_empty(self.options.alternative_src.as_deref()) {
            if let Some(alt_src) = non_empty(get_node_attr(node, alt_attr).as_deref()) {
                src = alt_src.to_string();
            }
        }

        normalize_source_path(&src).to_string()
    }

    fn set_sizes_attribute(&self, node: &Handle, source_set: &SourceSet) {
        // Caller-specified sizing wins
        if non_empty(get_node_attr(node, "sizes").as_deref()).is_some() {
            return;
        }

        let width = get_node_attr(node, "width").unwrap_or_default();
        set_node_attr(node, "sizes", Some(source_set.sizes_attribute(&width)));
    }

    fn set_srcset_attribute(&self, node: &Handle, source_set: &SourceSet) {
        let target_attr =
            non_empty(self.options.alternative_src_set.as_deref()).unwrap_or("srcset");

        if non_empty(get_node_attr(node, target_attr).as_deref()).is_some() {
            return;
        }

        set_node_attr(node, target_attr, Some(source_set.srcset_attribute()));
    }

    fn append_class_attribute(&self, node: &Handle) {
        let class = match non_empty(self.options.add_class.as_deref()) {
            Some(class) => class,
            None => return,
        };

        let classes = get_node_attr(node, "class").unwrap_or_default();
        set_node_attr(node, "class", Some(format!("{classes} {class}")));
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
