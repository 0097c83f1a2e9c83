//! Parsed OSIS document tree.
//!
//! The tree is owned and parser independent: the XML parser adapter in
//! [`parser`] converts markup into [`Element`] values once, and every later
//! stage (resolvers, feature detection) only sees `elements_by_name` and
//! `Element::attribute`.

pub mod parser;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfError, Result};

/// Root element carrying the work-level attributes.
pub const OSIS_TEXT: &str = "osisText";

/// OSIS header, removed before feature detection.
pub const HEADER: &str = "header";

/// A single markup element with its attributes, direct text and children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.text.push_str(text.as_ref());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the named attribute. Attributes in the XML namespace are
    /// addressed with their `xml:` prefix (e.g. `xml:lang`).
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Concatenated character data directly inside this element
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Pre-order traversal starting with `self`
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    fn remove_descendants_named(&mut self, name: &str) -> usize {
        let before = self.children.len();
        self.children.retain(|child| child.name != name);
        let mut removed = before - self.children.len();
        for child in &mut self.children {
            removed += child.remove_descendants_named(name);
        }
        removed
    }
}

/// Depth-first iterator over an element subtree in document order
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

/// Work-level attributes of `<osisText>`. Missing attributes read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// `osisIDWork`, used as the module name
    pub name: String,
    /// `xml:lang` as written in the document
    pub lang_text: String,
    /// `osisRefWork`, e.g. "Bible" or "Commentary"
    pub work_type: String,
}

/// An OSIS document parsed into an owned element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsisDocument {
    root: Element,
}

impl OsisDocument {
    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    /// Parse a document from XML text
    pub fn parse(xml: &str) -> Result<Self> {
        parser::parse(xml).map(Self::from_root)
    }

    /// Read and parse a document from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let xml = std::fs::read_to_string(path)?;
        Self::parse(&xml)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// All elements with the given local name, in document order
    pub fn elements_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.root
            .descendants()
            .filter(move |element| element.name == name)
    }

    /// Whether at least one element with the given name exists
    pub fn contains_element(&self, name: &str) -> bool {
        self.elements_by_name(name).next().is_some()
    }

    /// Work-level attributes from the first `<osisText>` element
    pub fn metadata(&self) -> Result<DocumentMetadata> {
        let osis_text = self
            .elements_by_name(OSIS_TEXT)
            .next()
            .ok_or_else(|| ConfError::MissingElement(OSIS_TEXT.to_string()))?;

        let attribute = |name: &str| osis_text.attribute(name).unwrap_or_default().to_string();

        Ok(DocumentMetadata {
            name: attribute("osisIDWork"),
            lang_text: attribute("xml:lang"),
            work_type: attribute("osisRefWork"),
        })
    }

    /// Remove every `<header>` subtree. The header repeats elements such as
    /// `title` that would otherwise be detected as text features.
    pub fn strip_headers(&mut self) -> usize {
        let removed = self.root.remove_descendants_named(HEADER);
        if removed > 0 {
            tracing::debug!("Removed {} header element(s)", removed);
        }
        removed
    }
}
