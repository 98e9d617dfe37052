//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate giving the extraction passes a small, consistent
//! vocabulary: tag names, attributes, whitespace-normalised text, removal with a diagnostic
//! event, unwrapping and text insertion.

pub use dom_query::{Document, NodeRef, Selection};
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Deep-copy a document by serialising and re-parsing it.
///
/// Each extraction pass mutates its own copy so that the original stays pristine for metadata
/// lookups and for the fallback pass.
#[must_use]
pub fn clone_document(doc: &Document) -> Document {
    Document::from(doc.html().to_string())
}

/// The `<body>` element of a document, if the parser produced one.
#[must_use]
pub fn body<'a>(doc: &'a Document) -> Option<NodeRef<'a>> {
    doc.select("body").nodes().first().copied()
}

// === Tag/Node Information ===

/// Lowercased tag name, `None` for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Whether `node` is an element with one of the given tag names.
#[must_use]
pub fn has_tag(node: &NodeRef, tags: &[&str]) -> bool {
    tag_name(node).is_some_and(|t| tags.contains(&t.as_str()))
}

/// Direct children that are elements.
#[must_use]
pub fn element_children<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    node.children().into_iter().filter(NodeRef::is_element).collect()
}

/// All descendant elements in document order, excluding `node` itself.
#[must_use]
pub fn descendant_elements<'a>(node: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    Selection::from(*node).select("*").nodes().to_vec()
}

// === Attributes ===

/// Attribute value, or an empty string when absent.
#[must_use]
pub fn attr(node: &NodeRef, name: &str) -> String {
    node.attr(name).map(|v| v.to_string()).unwrap_or_default()
}

/// Lowercased `class + " " + id`, the string the class/id regexes are matched against.
#[must_use]
pub fn class_and_id(node: &NodeRef) -> String {
    format!("{} {}", attr(node, "class"), attr(node, "id")).to_lowercase()
}

/// Names of all attributes on the element.
#[must_use]
pub fn attribute_names(node: &NodeRef) -> Vec<String> {
    node.attrs().iter().map(|a| a.name.local.to_string()).collect()
}

/// Parse an attribute as an integer; absent or malformed values yield `0`.
#[must_use]
pub fn parse_attr_as_int(node: &NodeRef, name: &str) -> i32 {
    node.attr(name)
        .and_then(|v| v.trim().parse::<i32>().ok())
        .unwrap_or(0)
}

// === Text Content ===

/// Collapse runs of whitespace into single spaces and trim.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalised text of the node and all its descendants.
#[must_use]
pub fn text(node: &NodeRef) -> String {
    normalize_whitespace(&node.text())
}

/// Character count of [`text`].
#[must_use]
pub fn text_len(node: &NodeRef) -> usize {
    text(node).chars().count()
}

/// Number of non-whitespace characters in the node's descendant text.
#[must_use]
pub fn stripped_text_len(node: &NodeRef) -> usize {
    node.text().chars().filter(|c| !c.is_whitespace()).count()
}

/// Normalised text of the node's direct text children only.
#[must_use]
pub fn own_text(node: &NodeRef) -> String {
    let raw: String = node
        .children()
        .iter()
        .filter(|child| child.is_text())
        .map(|child| child.text().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    normalize_whitespace(&raw)
}

// === Tree Manipulation ===

/// Detach `node` from its parent, emitting a diagnostic event naming the pass.
pub fn remove(node: &NodeRef, pass: &str) {
    tracing::info!(
        pass,
        tag = tag_name(node).as_deref().unwrap_or("#text"),
        "removing node"
    );
    node.remove_from_parent();
}

/// Replace `node` by its children, keeping their order.
pub fn unwrap(node: &NodeRef) {
    for child in node.children() {
        node.insert_before(&child);
    }
    node.remove_from_parent();
}

/// Insert a new text node right after `node`.
pub fn insert_text_after(node: &NodeRef, text: &str) {
    let text_node = node.tree.new_text(text);
    node.insert_after(&text_node);
}

/// Append a new text node as the last child of `node`.
pub fn append_text(node: &NodeRef, text: &str) {
    let text_node = node.tree.new_text(text);
    node.append_child(&text_node);
}

/// Rename an element, keeping its attributes and children.
#[inline]
pub fn rename(node: &NodeRef, new_tag: &str) {
    Selection::from(*node).rename(new_tag);
}

/// Inner HTML of a node.
#[must_use]
pub fn inner_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).inner_html()
}

/// Outer HTML of a node.
#[must_use]
pub fn outer_html(node: &NodeRef) -> StrTendril {
    Selection::from(*node).html()
}
