//! Normalized XML tree nodes.
//!
//! An element's attributes and child elements share one field namespace.
//! A field seen once holds a scalar node; a field seen more than once holds a
//! [`XmlNode::List`] in document order. Callers cannot know in advance which
//! shape a field has, so every access site goes through [`to_sequence`].

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field holding the text content of an element that also has fields.
pub const TEXT_KEY: &str = "_";

/// Alternate text-content field produced by some serializers.
pub const ALT_TEXT_KEY: &str = "#text";

/// A node of the normalized tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum XmlNode {
    /// Attribute value, or an element with neither attributes nor children
    Text(String),
    /// Element with attributes and/or children
    Element(XmlElement),
    /// Repeated field, in document order
    List(Vec<XmlNode>),
}

impl XmlNode {
    /// The text of a `Text` node.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlNode::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The fields of an `Element` node.
    #[inline]
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Look up a field; `None` for non-element nodes.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&XmlNode> {
        self.as_element().and_then(|element| element.get(key))
    }

    /// First non-empty text among `keys`, in the order given.
    pub fn first_text(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.get(key).and_then(XmlNode::as_text))
            .find(|text| !text.is_empty())
    }

    /// Look up a field by local name, ignoring any namespace prefix and
    /// ASCII case (`adlcp:dataFromLMS` matches `datafromlms`).
    ///
    /// An exact match wins over a prefixed one.
    pub fn get_local(&self, local: &str) -> Option<&XmlNode> {
        let element = self.as_element()?;
        element.get(local).or_else(|| {
            element
                .fields()
                .find(|(key, _)| local_name(key).eq_ignore_ascii_case(local))
                .map(|(_, node)| node)
        })
    }

    /// Text content of this node: the node itself when it is text, otherwise
    /// its first non-empty `_` or `#text` field.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            XmlNode::Text(text) => Some(text),
            XmlNode::Element(_) => self.first_text(&[TEXT_KEY, ALT_TEXT_KEY]),
            XmlNode::List(_) => None,
        }
    }
}

/// Ordered field map of an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    fields: Vec<(String, XmlNode)>,
}

impl XmlElement {
    /// Create an empty element.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a field by its exact (qualified) name.
    pub fn get(&self, key: &str) -> Option<&XmlNode> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, node)| node)
    }

    /// Add a field. A repeated key turns the existing value into a list.
    pub fn insert(&mut self, key: String, node: XmlNode) {
        match self.fields.iter_mut().find(|(name, _)| *name == key) {
            Some((_, XmlNode::List(items))) => items.push(node),
            Some((_, existing)) => {
                let first = std::mem::replace(existing, XmlNode::List(Vec::with_capacity(2)));
                if let XmlNode::List(items) = existing {
                    items.push(first);
                    items.push(node);
                }
            },
            None => self.fields.push((key, node)),
        }
    }

    /// Iterate over fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &XmlNode)> {
        self.fields.iter().map(|(key, node)| (key.as_str(), node))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for XmlElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, node) in &self.fields {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

/// Normalize a possibly-absent, possibly-repeated field into a sequence.
///
/// Absent fields give an empty slice, scalars a one-element slice, and lists
/// their items.
#[inline]
pub fn to_sequence(value: Option<&XmlNode>) -> &[XmlNode] {
    match value {
        None => &[],
        Some(XmlNode::List(items)) => items,
        Some(node) => std::slice::from_ref(node),
    }
}

/// Strip a namespace prefix from a qualified name.
#[inline]
pub fn local_name(qualified: &str) -> &str {
    qualified.rsplit_once(':').map_or(qualified, |(_, local)| local)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> XmlNode {
        XmlNode::Text(value.to_string())
    }

    #[test]
    fn test_insert_promotes_repeated_key_to_list() {
        let mut element = XmlElement::new();
        element.insert("item".to_string(), text("a"));
        assert_eq!(element.get("item"), Some(&text("a")));

        element.insert("item".to_string(), text("b"));
        element.insert("item".to_string(), text("c"));
        assert_eq!(
            element.get("item"),
            Some(&XmlNode::List(vec![text("a"), text("b"), text("c")]))
        );
        assert_eq!(element.len(), 1);
    }

    #[test]
    fn test_to_sequence_shapes() {
        let single = text("x");
        let list = XmlNode::List(vec![text("x"), text("y")]);

        assert!(to_sequence(None).is_empty());
        assert_eq!(to_sequence(Some(&single)), &[text("x")]);
        assert_eq!(to_sequence(Some(&list)).len(), 2);
    }

    #[test]
    fn test_get_local_ignores_prefix() {
        let mut element = XmlElement::new();
        element.insert("imsmd:general".to_string(), text("g"));
        let node = XmlNode::Element(element);

        assert_eq!(node.get_local("general"), Some(&text("g")));
        assert_eq!(node.get("general"), None);
        assert_eq!(local_name("adlcp:scormtype"), "scormtype");

        let mut element = XmlElement::new();
        element.insert("adlcp:dataFromLMS".to_string(), text("d"));
        assert_eq!(XmlNode::Element(element).get_local("datafromlms"), Some(&text("d")));
        assert_eq!(local_name("manifest"), "manifest");
    }

    #[test]
    fn test_first_text_skips_empty_values() {
        let mut element = XmlElement::new();
        element.insert("identifier".to_string(), text(""));
        element.insert("identifier_".to_string(), text("MANIFEST-1"));
        let node = XmlNode::Element(element);

        assert_eq!(node.first_text(&["identifier", "identifier_"]), Some("MANIFEST-1"));
        assert_eq!(node.first_text(&["missing"]), None);
    }

    #[test]
    fn test_text_content_prefers_plain_text() {
        let mut element = XmlElement::new();
        element.insert("lang".to_string(), text("en"));
        element.insert("#text".to_string(), text("Hello"));

        assert_eq!(text("plain").text_content(), Some("plain"));
        assert_eq!(XmlNode::Element(element).text_content(), Some("Hello"));
        assert_eq!(XmlNode::List(vec![text("a")]).text_content(), None);
    }

    #[test]
    fn test_serializes_as_plain_json() {
        let mut element = XmlElement::new();
        element.insert("schema".to_string(), text("ADL SCORM"));
        element.insert("k".to_string(), text("1"));
        element.insert("k".to_string(), text("2"));

        let json = serde_json::to_value(XmlNode::Element(element)).unwrap();
        assert_eq!(json, serde_json::json!({"schema": "ADL SCORM", "k": ["1", "2"]}));
    }
}
