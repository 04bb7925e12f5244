//! SCO extraction.
//!
//! The first organization's item tree is flattened depth-first (each item
//! before its children). Every item of that flattening gets an index, and a
//! SCO keeps the index of its item even when earlier items were skipped, so
//! indices follow authoring order and can have gaps.

use crate::manifest::{Item, Manifest};
use serde::Serialize;

/// A launchable unit of a package.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sco {
    pub identifier: String,
    pub title: String,
    /// Archive path of the launch file
    pub launch_url: String,
    /// Same value as `launch_url`, kept separately for hosts
    pub entry_point: String,
    pub metadata: ScoMetadata,
    /// Position of the item in the full flattening of the item tree
    pub order_index: usize,
}

/// Free-form data carried from the item and its resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoMetadata {
    pub resource_type: String,
    pub parameters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scorm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mastery_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_from_lms: Option<String>,
}

/// Flatten an item tree in pre-order.
pub fn flatten_items(items: &[Item]) -> Vec<&Item> {
    let mut flat = Vec::new();
    let mut stack: Vec<&Item> = items.iter().rev().collect();
    while let Some(item) = stack.pop() {
        flat.push(item);
        stack.extend(item.items.iter().rev());
    }
    flat
}

/// Extract the SCOs of a manifest's first organization.
///
/// An item yields a SCO when it references a known resource, that resource
/// resolves to a launch path (its `href`, else its first file) and
/// `has_entry` confirms the path exists in the archive.
pub fn extract<F>(manifest: &Manifest, has_entry: F) -> Vec<Sco>
where
    F: Fn(&str) -> bool,
{
    let Some(organization) = manifest.first_organization() else {
        return Vec::new();
    };

    let mut scos = Vec::new();
    for (index, item) in flatten_items(&organization.items).into_iter().enumerate() {
        let Some(identifierref) = item.identifierref.as_deref() else {
            continue;
        };
        let Some(resource) = manifest.resource(identifierref) else {
            tracing::debug!(
                item = %item.identifier,
                identifierref,
                "item references unknown resource"
            );
            continue;
        };
        let Some(launch_path) = resource.launch_path() else {
            tracing::debug!(
                item = %item.identifier,
                resource = %resource.identifier,
                "resource has no launch file"
            );
            continue;
        };
        if !has_entry(launch_path) {
            tracing::debug!(
                item = %item.identifier,
                launch_path,
                "launch file missing from archive"
            );
            continue;
        }

        scos.push(Sco {
            identifier: item.identifier.clone(),
            title: item.title.clone(),
            launch_url: launch_path.to_string(),
            entry_point: launch_path.to_string(),
            metadata: ScoMetadata {
                resource_type: resource.resource_type.clone(),
                parameters: item.parameters.clone(),
                scorm_type: resource.scorm_type.clone(),
                mastery_score: item.mastery_score.clone(),
                data_from_lms: item.data_from_lms.clone(),
            },
            order_index: index,
        });
    }
    scos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Organization, Resource};

    fn manifest_with(items: Vec<Item>, resources: Vec<Resource>) -> Manifest {
        Manifest {
            identifier: "M".to_string(),
            title: "Course".to_string(),
            organizations: vec![Organization {
                identifier: "O".to_string(),
                title: "Org".to_string(),
                items,
            }],
            resources,
            ..Default::default()
        }
    }

    #[test]
    fn test_flatten_is_preorder() {
        let tree = vec![
            Item::new("A", "A")
                .with_child(Item::new("A1", "A1").with_child(Item::new("A1a", "A1a")))
                .with_child(Item::new("A2", "A2")),
            Item::new("B", "B"),
        ];
        let ids: Vec<&str> = flatten_items(&tree)
            .iter()
            .map(|i| i.identifier.as_str())
            .collect();
        assert_eq!(ids, vec!["A", "A1", "A1a", "A2", "B"]);
    }

    #[test]
    fn test_order_indices_keep_gaps() {
        let m = manifest_with(
            vec![
                Item::new("A", "A").with_identifierref("R1"),
                Item::new("B", "B").with_identifierref("MISSING"),
                Item::new("C", "C").with_identifierref("R2"),
            ],
            vec![
                Resource::new("R1").with_href("a.html"),
                Resource::new("R2").with_file("c.html"),
            ],
        );

        let scos = extract(&m, |_| true);
        let got: Vec<(&str, usize)> = scos
            .iter()
            .map(|s| (s.identifier.as_str(), s.order_index))
            .collect();
        assert_eq!(got, vec![("A", 0), ("C", 2)]);
        assert_eq!(scos[1].launch_url, "c.html");
        assert_eq!(scos[1].entry_point, "c.html");
    }

    #[test]
    fn test_grouping_items_count_toward_indices() {
        let m = manifest_with(
            vec![
                Item::new("MOD", "Module")
                    .with_child(Item::new("L1", "Lesson 1").with_identifierref("R")),
            ],
            vec![Resource::new("R").with_href("l1.html")],
        );
        let scos = extract(&m, |_| true);
        assert_eq!(scos.len(), 1);
        assert_eq!(scos[0].order_index, 1);
        assert_eq!(scos[0].title, "Lesson 1");
    }

    #[test]
    fn test_item_with_reference_and_children_yields_both() {
        let m = manifest_with(
            vec![
                Item::new("INTRO", "Intro").with_identifierref("R1"),
                Item::new("PARENT", "Parent")
                    .with_identifierref("R1")
                    .with_child(Item::new("CHILD", "Child").with_identifierref("R2")),
            ],
            vec![
                Resource::new("R1").with_href("parent.html"),
                Resource::new("R2").with_href("child.html"),
            ],
        );
        assert!(m.first_organization().unwrap().items[1].has_children());

        let scos = extract(&m, |_| true);
        let got: Vec<(&str, usize, &str)> = scos
            .iter()
            .map(|s| (s.identifier.as_str(), s.order_index, s.launch_url.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("INTRO", 0, "parent.html"),
                ("PARENT", 1, "parent.html"),
                ("CHILD", 2, "child.html"),
            ]
        );
    }

    #[test]
    fn test_missing_launch_file_is_skipped() {
        let m = manifest_with(
            vec![
                Item::new("A", "A").with_identifierref("R1"),
                Item::new("B", "B").with_identifierref("R2"),
            ],
            vec![
                Resource::new("R1").with_href("present.html"),
                Resource::new("R2").with_href("absent.html"),
            ],
        );
        let scos = extract(&m, |path| path == "present.html");
        assert_eq!(scos.len(), 1);
        assert_eq!(scos[0].identifier, "A");
    }

    #[test]
    fn test_resource_without_launch_path_is_skipped() {
        let m = manifest_with(
            vec![Item::new("A", "A").with_identifierref("R1")],
            vec![Resource::new("R1")],
        );
        assert!(extract(&m, |_| true).is_empty());
    }

    #[test]
    fn test_no_organization_gives_no_scos() {
        let m = Manifest {
            resources: vec![Resource::new("R").with_href("a.html")],
            ..Default::default()
        };
        assert!(extract(&m, |_| true).is_empty());
    }

    #[test]
    fn test_only_first_organization_is_used() {
        let mut m = manifest_with(
            vec![Item::new("A", "A").with_identifierref("R")],
            vec![Resource::new("R").with_href("a.html")],
        );
        m.organizations.push(Organization {
            identifier: "O2".to_string(),
            title: "Other".to_string(),
            items: vec![Item::new("Z", "Z").with_identifierref("R")],
        });
        let scos = extract(&m, |_| true);
        assert_eq!(scos.len(), 1);
        assert_eq!(scos[0].identifier, "A");
    }

    #[test]
    fn test_sco_metadata_carries_item_and_resource_data() {
        let mut item = Item::new("A", "A").with_identifierref("R");
        item.parameters = Some("?page=2".to_string());
        item.mastery_score = Some("75".to_string());
        let mut resource = Resource::new("R").with_href("a.html");
        resource.scorm_type = Some("sco".to_string());

        let scos = extract(&manifest_with(vec![item], vec![resource]), |_| true);
        let meta = &scos[0].metadata;
        assert_eq!(meta.resource_type, "webcontent");
        assert_eq!(meta.parameters.as_deref(), Some("?page=2"));
        assert_eq!(meta.scorm_type.as_deref(), Some("sco"));
        assert_eq!(meta.mastery_score.as_deref(), Some("75"));

        let json = serde_json::to_value(&scos[0]).unwrap();
        assert_eq!(json["launchUrl"], "a.html");
        assert_eq!(json["orderIndex"], 0);
        assert_eq!(json["metadata"]["resourceType"], "webcontent");
    }
}
