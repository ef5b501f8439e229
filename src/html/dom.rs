use std::borrow::Cow;

use encoding_rs::Encoding;
use html5ever::interface::{Attribute, QualName};
use html5ever::parse_document;
use html5ever::tendril::{format_tendril, TendrilSink};
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Converts HTML bytes into a DOM.
///
/// Bytes are decoded with the given encoding label, falling back to lossy
/// UTF-8 when the label is empty or unknown. Characters outside the ASCII
/// range are replaced with numeric character references before parsing so
/// they survive the round trip through the parser unmodified; script and
/// style content and line breaks are kept as-is by the parser defaults.
pub fn html_to_dom(data: &[u8], document_encoding: String) -> RcDom {
    let s: String;

    if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
        let (string, _, _) = encoding.decode(data);
        s = string.to_string();
    } else {
        s = String::from_utf8_lossy(data).to_string();
    }

    let s = encode_non_ascii(&s);

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut s.as_bytes())
        .unwrap()
}

/// Replaces every character outside the ASCII range with a numeric character
/// reference (`&#NNNN;`).
///
/// Borrows the input unchanged when it is already pure ASCII.
pub fn encode_non_ascii(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + s.len() / 2);
    for c in s.chars() {
        if c.is_ascii() {
            result.push(c);
        } else {
            result.push_str(&format!("&#{};", c as u32));
        }
    }

    Cow::Owned(result)
}

/// Collects every element with the given tag name, depth first, preserving
/// document order.
pub fn find_nodes(node: &Handle, node_name: &str) -> Vec<Handle> {
    let mut found_nodes = Vec::new();

    if let NodeData::Element { ref name, .. } = node.data {
        if &*name.local == node_name {
            found_nodes.push(node.clone());
        }
    }

    for child_node in node.children.borrow().iter() {
        found_nodes.append(&mut find_nodes(child_node, node_name));
    }

    found_nodes
}

/// Reads an attribute value off an element node
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Returns the tag name of an element node
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Sets an attribute on an element node, or removes it when `attr_value` is
/// `None`. Non-element nodes are left alone.
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: Option<String>) {
    if let NodeData::Element { ref attrs, .. } = node.data {
        let attrs_mut = &mut attrs.borrow_mut();

        match attr_value {
            Some(attr_value) => {
                if let Some(existing_attr) = attrs_mut
                    .iter_mut()
                    .find(|attr| &*attr.name.local == attr_name)
                {
                    existing_attr.value.clear();
                    existing_attr.value.push_slice(&attr_value);
                } else {
                    attrs_mut.push(Attribute {
                        name: QualName::new(None, ns!(), LocalName::from(attr_name)),
                        value: format_tendril!("{}", attr_value),
                    });
                }
            }
            None => attrs_mut.retain(|attr| &*attr.name.local != attr_name),
        }
    }
}
