//! Manifest model construction from a normalized tree.
//!
//! Every repeated element is read through [`to_sequence`], since the tree
//! gives no guarantee whether a field is one node or a list. Missing pieces
//! become empty values here and are reported later by validation; only a
//! missing root element is an error.

use super::model::{
    DEFAULT_RESOURCE_TYPE, DEFAULT_TITLE, Item, Manifest, Metadata, Organization, Resource,
    ResourceFile,
};
use crate::common::{Error, Result};
use crate::xml::{ALT_TEXT_KEY, TEXT_KEY, XmlNode, XmlTree, to_sequence};

/// Root element names accepted for a manifest.
pub const MANIFEST_ROOT_NAMES: [&str; 3] = ["manifest", "imscp:manifest", "imsmanifest"];

/// Default bound on item nesting.
pub const DEFAULT_MAX_ITEM_DEPTH: usize = 64;

/// Builds [`Manifest`] values from parsed trees.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    max_item_depth: usize,
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self {
            max_item_depth: DEFAULT_MAX_ITEM_DEPTH,
        }
    }
}

impl ManifestBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items nested deeper than this are dropped.
    #[inline]
    pub fn with_max_item_depth(mut self, depth: usize) -> Self {
        self.max_item_depth = depth;
        self
    }

    /// Build the manifest model from a parsed tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidManifestStructure`] when the root element is
    /// not a manifest. An empty manifest root is accepted.
    pub fn build(&self, tree: &XmlTree) -> Result<Manifest> {
        let root = tree
            .root_named(&MANIFEST_ROOT_NAMES)
            .ok_or(Error::InvalidManifestStructure)?;

        let organizations =
            to_sequence(root.get("organizations").and_then(|o| o.get("organization")))
                .iter()
                .map(|org| self.parse_organization(org))
                .collect();

        let resources = to_sequence(root.get("resources").and_then(|r| r.get("resource")))
            .iter()
            .map(parse_resource)
            .collect();

        Ok(Manifest {
            identifier: identifier_of(root),
            version: root.first_text(&["version"]).map(str::to_string),
            title: extract_title(root),
            organizations,
            resources,
            metadata: root.get("metadata").map(parse_metadata),
        })
    }

    fn parse_organization(&self, org: &XmlNode) -> Organization {
        Organization {
            identifier: identifier_of(org),
            title: extract_title(org),
            items: self.parse_items(org, 1),
        }
    }

    /// Parse the `item` children of `parent`, which sit at `depth`.
    fn parse_items(&self, parent: &XmlNode, depth: usize) -> Vec<Item> {
        let nodes = to_sequence(parent.get("item"));
        if nodes.is_empty() {
            return Vec::new();
        }
        if depth > self.max_item_depth {
            tracing::warn!(
                depth,
                dropped = nodes.len(),
                "item nesting exceeds the configured limit; dropping nested items"
            );
            return Vec::new();
        }
        nodes.iter().map(|node| self.parse_item(node, depth)).collect()
    }

    fn parse_item(&self, node: &XmlNode, depth: usize) -> Item {
        Item {
            identifier: identifier_of(node),
            identifierref: node
                .first_text(&["identifierref", "identifierref_"])
                .map(str::to_string),
            title: extract_title(node),
            items: self.parse_items(node, depth + 1),
            parameters: node.first_text(&["parameters"]).map(str::to_string),
            is_visible: node
                .first_text(&["isvisible"])
                .is_none_or(|v| !v.trim().eq_ignore_ascii_case("false")),
            prerequisites: local_text(node, "prerequisites"),
            mastery_score: local_text(node, "masteryscore"),
            max_time_allowed: local_text(node, "maxtimeallowed"),
            time_limit_action: local_text(node, "timelimitaction"),
            data_from_lms: local_text(node, "datafromlms"),
        }
    }
}

/// Build a manifest with default limits.
///
/// See [`ManifestBuilder::build`].
pub fn build(tree: &XmlTree) -> Result<Manifest> {
    ManifestBuilder::new().build(tree)
}

/// Extract an element's title.
///
/// Accepts a plain text `title`, then the `_` and `#text` content fields of a
/// `title` element with attributes, and otherwise falls back to
/// [`DEFAULT_TITLE`]. A present but empty plain title stays empty.
pub fn extract_title(element: &XmlNode) -> String {
    match element.get("title") {
        Some(XmlNode::Text(text)) => text.clone(),
        Some(title) => title
            .first_text(&[TEXT_KEY, ALT_TEXT_KEY])
            .unwrap_or(DEFAULT_TITLE)
            .to_string(),
        None => DEFAULT_TITLE.to_string(),
    }
}

fn identifier_of(node: &XmlNode) -> String {
    node.first_text(&["identifier", "identifier_"])
        .unwrap_or_default()
        .to_string()
}

/// Non-empty text content of a field matched by local name.
fn local_text(node: &XmlNode, local: &str) -> Option<String> {
    node.get_local(local)
        .and_then(XmlNode::text_content)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn parse_resource(res: &XmlNode) -> Resource {
    let files = to_sequence(res.get("file"))
        .iter()
        .map(|file| ResourceFile {
            href: file.first_text(&["href"]).unwrap_or_default().to_string(),
        })
        .collect();

    let dependencies = to_sequence(res.get("dependency"))
        .iter()
        .filter_map(|dep| dep.first_text(&["identifierref"]))
        .map(str::to_string)
        .collect();

    Resource {
        identifier: identifier_of(res),
        resource_type: res
            .first_text(&["type"])
            .unwrap_or(DEFAULT_RESOURCE_TYPE)
            .to_string(),
        href: res.first_text(&["href"]).map(str::to_string),
        files,
        scorm_type: local_text(res, "scormtype"),
        base: res.first_text(&["xml:base"]).map(str::to_string),
        dependencies,
    }
}

fn parse_metadata(node: &XmlNode) -> Metadata {
    let general = node
        .get_local("lom")
        .and_then(|lom| lom.get_local("general"));

    let keywords = general
        .map(|g| {
            to_sequence(g.get_local("keyword"))
                .iter()
                .filter_map(lang_string)
                .collect()
        })
        .unwrap_or_default();

    Metadata {
        schema: local_text(node, "schema"),
        schemaversion: local_text(node, "schemaversion"),
        location: local_text(node, "location"),
        title: general.and_then(|g| g.get_local("title")).and_then(lang_string),
        description: general
            .and_then(|g| g.get_local("description"))
            .and_then(lang_string),
        keywords,
        raw: node.clone(),
    }
}

/// Text of a LOM language-string container: direct text, or the first
/// non-empty `langstring` (LOM 1.2) or `string` (LOM 2004) child.
fn lang_string(node: &XmlNode) -> Option<String> {
    let direct = node.text_content().map(str::trim).filter(|t| !t.is_empty());
    direct
        .or_else(|| {
            ["langstring", "string"].iter().find_map(|local| {
                to_sequence(node.get_local(local))
                    .iter()
                    .filter_map(XmlNode::text_content)
                    .map(str::trim)
                    .find(|t| !t.is_empty())
            })
        })
        .map(str::to_string)
}
