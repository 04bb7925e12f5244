//! Normalized XML trees.
//!
//! Manifests are read into a loose attribute/element tree rather than bound to
//! a fixed schema. Authoring tools disagree on namespaces, prefixes and
//! whether a field is an attribute or a child element, so the manifest
//! builder reads the tree through [`to_sequence`] and local-name lookups.
//!
//! # Shape rules
//!
//! - attributes and child elements become same-named fields
//! - a field seen once is a scalar, a repeated field is a [`XmlNode::List`]
//! - an element with no attributes and no children is plain text
//! - text next to other fields is stored under [`TEXT_KEY`]
//! - a child named like an attribute of its parent is stored as `name_`

mod node;
mod reader;

pub use node::{ALT_TEXT_KEY, TEXT_KEY, XmlElement, XmlNode, local_name, to_sequence};
pub use reader::{DEFAULT_MAX_DEPTH, XmlTree};
