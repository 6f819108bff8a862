use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};
use tracing::debug;

use super::{Extract, display_path, identifier_for, read_text};
use crate::core::{
    data::{SourceDocument, SourceFormat, TranslatableString},
    error::SourceError,
};

/// XLIFF 1.2 namespace.
pub const XLIFF_NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:1.2";

/// How an element tree was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementTreeMode {
    /// Every element's text and tail.
    Generic,
    /// Only `source` elements; targets are excluded.
    Xliff,
}

/// Which lookup found the XLIFF `source` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLookup {
    Namespaced,
    AnyNamespace,
    NameContains,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTreeSelection {
    pub mode: ElementTreeMode,
    pub strings: Vec<TranslatableString>,
}

/// Extractor for XML and XLIFF documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementTreeExtractor;

impl ElementTreeExtractor {
    pub fn parse(content: &str) -> Result<Document<'_>, roxmltree::Error> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        Document::parse_with_options(content, options)
    }

    pub fn select(&self, doc: &Document) -> ElementTreeSelection {
        if is_xliff(doc) {
            ElementTreeSelection {
                mode: ElementTreeMode::Xliff,
                strings: select_xliff_sources(doc).1,
            }
        } else {
            ElementTreeSelection {
                mode: ElementTreeMode::Generic,
                strings: select_generic(doc),
            }
        }
    }
}

impl Extract for ElementTreeExtractor {
    fn extract(&self, path: &Path) -> Result<SourceDocument, SourceError> {
        let content = read_text(path)?;
        let doc =
            Self::parse(&content).map_err(|e| SourceError::extraction(display_path(path), e))?;
        let selection = self.select(&doc);
        debug!(
            file = %path.display(),
            mode = ?selection.mode,
            strings = selection.strings.len(),
            "extracted element text"
        );
        let format = match selection.mode {
            ElementTreeMode::Generic => SourceFormat::Xml,
            ElementTreeMode::Xliff => SourceFormat::Xliff,
        };
        Ok(SourceDocument::new(
            identifier_for(path),
            format,
            selection.strings,
        ))
    }
}

/// True when the root or any element's qualified tag mentions "xliff".
pub fn is_xliff(doc: &Document) -> bool {
    doc.root_element()
        .descendants()
        .filter(|n| n.is_element())
        .any(|n| qualified_tag(&n).to_lowercase().contains("xliff"))
}

/// `{namespace}name`, matching how namespaced tags are usually printed.
fn qualified_tag(node: &Node) -> String {
    let tag = node.tag_name();
    match tag.namespace() {
        Some(ns) => format!("{{{}}}{}", ns, tag.name()),
        None => tag.name().to_string(),
    }
}

fn push_trimmed(out: &mut Vec<TranslatableString>, text: Option<&str>) {
    if let Some(text) = text.map(str::trim)
        && !text.is_empty()
    {
        out.push(TranslatableString::new(text));
    }
}

/// Concatenated text nodes up to the next element.
///
/// Comments and processing instructions are skipped, so text on both sides
/// of a comment joins up.
fn text_run<'a, 'input: 'a>(nodes: impl Iterator<Item = Node<'a, 'input>>) -> String {
    nodes
        .take_while(|n| !n.is_element())
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Text inside `node` before its first child element.
fn element_text(node: &Node) -> String {
    text_run(node.children())
}

/// Text after `node`'s closing tag, up to its next sibling element.
fn element_tail(node: &Node) -> String {
    text_run(std::iter::successors(node.next_sibling(), |n| n.next_sibling()))
}

/// Text and tail of every element, in document order.
fn select_generic(doc: &Document) -> Vec<TranslatableString> {
    let mut out = Vec::new();
    for node in doc.root_element().descendants().filter(|n| n.is_element()) {
        push_trimmed(&mut out, Some(element_text(&node).as_str()));
        push_trimmed(&mut out, Some(element_tail(&node).as_str()));
    }
    out
}

/// Text of `source` elements, with the lookup that found them.
///
/// Each fallback runs only when the previous lookup matched no elements.
pub fn select_xliff_sources(doc: &Document) -> (SourceLookup, Vec<TranslatableString>) {
    let elements = || doc.root_element().descendants().filter(|n| n.is_element());

    let mut lookup = SourceLookup::Namespaced;
    let mut sources: Vec<Node> = elements()
        .filter(|n| n.has_tag_name((XLIFF_NAMESPACE, "source")))
        .collect();

    if sources.is_empty() {
        lookup = SourceLookup::AnyNamespace;
        sources = elements()
            .filter(|n| n.tag_name().name() == "source")
            .collect();
    }

    if sources.is_empty() {
        lookup = SourceLookup::NameContains;
        sources = elements()
            .filter(|n| n.tag_name().name().to_lowercase().contains("source"))
            .collect();
    }

    let mut out = Vec::new();
    for source in sources {
        let text = element_text(&source);
        let text = text.trim();
        if text.is_empty() {
            continue;
        }
        match trans_unit_id(&source) {
            Some(id) => out.push(TranslatableString::keyed(text, id)),
            None => out.push(TranslatableString::new(text)),
        }
    }
    (lookup, out)
}

fn trans_unit_id(source: &Node) -> Option<String> {
    source
        .ancestors()
        .find(|n| n.is_element() && matches!(n.tag_name().name(), "trans-unit" | "unit"))
        .and_then(|unit| unit.attribute("id"))
        .map(str::to_string)
}
