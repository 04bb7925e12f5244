//! quick-xml driven construction of the normalized tree.
//!
//! The reader keeps a stack of open elements. Each closed element is folded
//! into its parent's field map, so the finished tree never needs a second
//! pass.

use super::node::{TEXT_KEY, XmlElement, XmlNode};
use crate::common::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Default bound on element nesting, the root element counting as 1.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A parsed document: the root element's qualified name and its node.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlTree {
    root_name: String,
    root: XmlNode,
}

/// Element under construction.
struct OpenElement {
    name: String,
    fields: XmlElement,
    /// Attribute names, used to detect attribute/child collisions
    attributes: Vec<String>,
    text: String,
}

impl OpenElement {
    fn from_start(e: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let mut fields = XmlElement::new();
        let mut attributes = Vec::new();

        for attr in e.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push(key.clone());
            fields.insert(key, XmlNode::Text(value));
        }

        Ok(Self {
            name,
            fields,
            attributes,
            text: String::new(),
        })
    }

    /// Fold a closed child into this element.
    ///
    /// A child named like one of our attributes is stored as `name_`.
    fn add_child(&mut self, name: String, node: XmlNode) {
        let key = if self.attributes.contains(&name) {
            format!("{}_", name)
        } else {
            name
        };
        self.fields.insert(key, node);
    }

    fn finish(self) -> (String, XmlNode) {
        let text = self.text.trim();
        let node = if self.fields.is_empty() {
            XmlNode::Text(text.to_string())
        } else {
            let mut fields = self.fields;
            if !text.is_empty() {
                fields.insert(TEXT_KEY.to_string(), XmlNode::Text(text.to_string()));
            }
            XmlNode::Element(fields)
        };
        (self.name, node)
    }
}

impl XmlTree {
    /// Parse XML text into a normalized tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedXml`] if the document is not well-formed:
    /// mismatched or unclosed tags, bad attributes, unknown entities, text
    /// outside the root, zero or several root elements, or nesting deeper
    /// than [`DEFAULT_MAX_DEPTH`].
    pub fn parse(xml: &str) -> Result<Self> {
        Self::parse_with_max_depth(xml, DEFAULT_MAX_DEPTH)
    }

    /// Parse XML text, rejecting elements nested deeper than `max_depth`.
    pub fn parse_with_max_depth(xml: &str, max_depth: usize) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut stack: Vec<OpenElement> = Vec::new();
        let mut root: Option<(String, XmlNode)> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    if stack.is_empty() && root.is_some() {
                        return Err(multiple_roots(e));
                    }
                    check_depth(stack.len(), max_depth)?;
                    stack.push(OpenElement::from_start(e)?);
                },
                Ok(Event::Empty(ref e)) => {
                    if stack.is_empty() && root.is_some() {
                        return Err(multiple_roots(e));
                    }
                    check_depth(stack.len(), max_depth)?;
                    let closed = OpenElement::from_start(e)?.finish();
                    close_element(&mut stack, &mut root, closed);
                },
                Ok(Event::End(_)) => {
                    // quick-xml checks that end names match their start tags
                    let open = stack.pop().ok_or_else(|| {
                        Error::MalformedXml("Unexpected closing tag".to_string())
                    })?;
                    close_element(&mut stack, &mut root, open.finish());
                },
                Ok(Event::Text(ref t)) => {
                    let text = String::from_utf8_lossy(t);
                    push_text(&mut stack, &text)?;
                },
                Ok(Event::CData(ref t)) => {
                    let text = String::from_utf8_lossy(t);
                    push_text(&mut stack, &text)?;
                },
                Ok(Event::GeneralRef(ref r)) => {
                    let name = String::from_utf8_lossy(r).into_owned();
                    let resolved = resolve_reference(&name).ok_or_else(|| {
                        Error::MalformedXml(format!("Unknown entity reference: &{};", name))
                    })?;
                    push_text(&mut stack, resolved.encode_utf8(&mut [0u8; 4]))?;
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::MalformedXml(format!(
                        "XML parsing error at position {}: {}",
                        reader.buffer_position(),
                        e
                    )));
                },
                // Declarations, comments, processing instructions and DOCTYPE
                _ => {},
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(Error::MalformedXml(format!(
                "Unclosed element <{}> at end of document",
                open.name
            )));
        }

        let (root_name, root) =
            root.ok_or_else(|| Error::MalformedXml("Document has no root element".to_string()))?;
        Ok(Self { root_name, root })
    }

    /// Qualified name of the root element.
    #[inline]
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// The root element's node.
    #[inline]
    pub fn root(&self) -> &XmlNode {
        &self.root
    }

    /// The root node if the root element carries one of `names`.
    pub fn root_named(&self, names: &[&str]) -> Option<&XmlNode> {
        names
            .contains(&self.root_name.as_str())
            .then_some(&self.root)
    }
}

fn close_element(
    stack: &mut [OpenElement],
    root: &mut Option<(String, XmlNode)>,
    (name, node): (String, XmlNode),
) {
    match stack.last_mut() {
        Some(parent) => parent.add_child(name, node),
        None => *root = Some((name, node)),
    }
}

/// Fail when an element opened under `open` ancestors would exceed the limit.
fn check_depth(open: usize, max_depth: usize) -> Result<()> {
    if open >= max_depth {
        return Err(Error::MalformedXml(format!(
            "Element nesting exceeds {} levels",
            max_depth
        )));
    }
    Ok(())
}

fn push_text(stack: &mut [OpenElement], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(open) => open.text.push_str(text),
        None if text.trim().is_empty() => {},
        None => {
            return Err(Error::MalformedXml(
                "Text content outside the root element".to_string(),
            ));
        },
    }
    Ok(())
}

fn multiple_roots(e: &BytesStart<'_>) -> Error {
    Error::MalformedXml(format!(
        "Unexpected second root element <{}>",
        String::from_utf8_lossy(e.name().as_ref())
    ))
}

/// Resolve a predefined entity or a character reference (`#38`, `#x26`).
fn resolve_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let reference = name.strip_prefix('#')?;
            let code = match reference.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => reference.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        },
    }
}
