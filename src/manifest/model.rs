//! Typed manifest model.
//!
//! These types are plain owned data: an [`Item`] owns its children outright
//! and nothing points back up the tree. Field names serialize in camelCase,
//! the shape hosts persist as the package's manifest data.

use crate::xml::XmlNode;
use serde::Serialize;

/// Title used when an element carries no usable title.
pub const DEFAULT_TITLE: &str = "Untitled Course";

/// Resource type used when a resource declares none.
pub const DEFAULT_RESOURCE_TYPE: &str = "webcontent";

/// A parsed `imsmanifest.xml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Manifest identifier; empty when absent (reported by validation)
    pub identifier: String,
    /// The manifest's own `version` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub title: String,
    pub organizations: Vec<Organization>,
    pub resources: Vec<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Manifest {
    /// The organization used for SCO extraction.
    #[inline]
    pub fn first_organization(&self) -> Option<&Organization> {
        self.organizations.first()
    }

    /// Look up a resource by identifier.
    pub fn resource(&self, identifier: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.identifier == identifier)
    }
}

/// Manifest-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Usually "ADL SCORM"
    pub schema: Option<String>,
    /// Free text such as "1.2", "CAM 1.3" or "2004 4th Edition"
    pub schemaversion: Option<String>,
    /// External metadata file (`adlcp:location`)
    pub location: Option<String>,
    /// LOM general title
    pub title: Option<String>,
    /// LOM general description
    pub description: Option<String>,
    /// LOM general keywords
    pub keywords: Vec<String>,
    /// The whole metadata subtree as parsed
    pub raw: XmlNode,
}

/// A named tree of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub identifier: String,
    pub title: String,
    pub items: Vec<Item>,
}

/// A node of an organization tree.
///
/// An item with children is a grouping node and an item with an
/// `identifierref` refers to a resource. Both may hold at once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub identifier: String,
    pub identifierref: Option<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    /// Query string appended to the launch URL by players
    pub parameters: Option<String>,
    pub is_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mastery_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time_allowed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_from_lms: Option<String>,
}

impl Item {
    /// Create a visible item with no reference and no children.
    pub fn new(identifier: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            identifierref: None,
            title: title.into(),
            items: Vec::new(),
            parameters: None,
            is_visible: true,
            prerequisites: None,
            mastery_score: None,
            max_time_allowed: None,
            time_limit_action: None,
            data_from_lms: None,
        }
    }

    /// Set the resource reference.
    pub fn with_identifierref(mut self, identifierref: impl Into<String>) -> Self {
        self.identifierref = Some(identifierref.into());
        self
    }

    /// Append a child item.
    pub fn with_child(mut self, child: Item) -> Self {
        self.items.push(child);
        self
    }

    /// Whether this item groups sub-items.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.items.is_empty()
    }
}

/// A resource: a launchable or supporting bundle of files.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub identifier: String,
    /// Resource type, `webcontent` unless declared
    #[serde(rename = "type")]
    pub resource_type: String,
    pub href: Option<String>,
    pub files: Vec<ResourceFile>,
    /// `adlcp:scormtype` (1.2) or `adlcp:scormType` (2004): "sco" or "asset"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scorm_type: Option<String>,
    /// `xml:base`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Identifiers of resources this one depends on
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl Resource {
    /// Create a `webcontent` resource with no files.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            resource_type: DEFAULT_RESOURCE_TYPE.to_string(),
            href: None,
            files: Vec::new(),
            scorm_type: None,
            base: None,
            dependencies: Vec::new(),
        }
    }

    /// Set the primary launch href.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Append a file entry.
    pub fn with_file(mut self, href: impl Into<String>) -> Self {
        self.files.push(ResourceFile { href: href.into() });
        self
    }

    /// The path launched for this resource: a non-empty `href`, else the
    /// first file's non-empty path.
    pub fn launch_path(&self) -> Option<&str> {
        self.href
            .as_deref()
            .filter(|href| !href.is_empty())
            .or_else(|| {
                self.files
                    .first()
                    .map(|file| file.href.as_str())
                    .filter(|href| !href.is_empty())
            })
    }
}

/// A file entry of a resource, relative to the archive root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceFile {
    pub href: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_path_prefers_href() {
        let res = Resource::new("R1").with_href("index.html").with_file("other.html");
        assert_eq!(res.launch_path(), Some("index.html"));
    }

    #[test]
    fn test_launch_path_falls_back_to_first_file() {
        let res = Resource::new("R1").with_href("").with_file("a.html").with_file("b.html");
        assert_eq!(res.launch_path(), Some("a.html"));

        let bare = Resource::new("R2");
        assert_eq!(bare.launch_path(), None);

        let blank_file = Resource::new("R3").with_file("");
        assert_eq!(blank_file.launch_path(), None);
    }

    #[test]
    fn test_resource_lookup() {
        let manifest = Manifest {
            resources: vec![Resource::new("A"), Resource::new("B")],
            ..Default::default()
        };
        assert_eq!(manifest.resource("B").map(|r| r.identifier.as_str()), Some("B"));
        assert!(manifest.resource("C").is_none());
        assert!(manifest.first_organization().is_none());
    }

    #[test]
    fn test_serialized_field_names() {
        let res = Resource::new("R1").with_href("index.html");
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["type"], "webcontent");
        assert_eq!(json["href"], "index.html");
        assert!(json.get("scormType").is_none());
    }
}
