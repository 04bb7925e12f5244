//! Structural validation of a manifest.
//!
//! Validation never fails: problems are reported as values so a host can
//! show them next to the parsed manifest. Errors make the manifest invalid;
//! warnings are advisory.

use super::model::Manifest;
use serde::Serialize;

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub manifest: Manifest,
}

impl ValidationResult {
    /// Whether the manifest produced neither errors nor warnings.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validate a manifest's structure.
///
/// Errors: missing manifest identifier, no organizations, an organization or
/// resource without identifier. Warnings: missing title, no resources, an
/// organization without items, a resource without files.
pub fn validate(manifest: &Manifest) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if manifest.identifier.is_empty() {
        errors.push("Manifest is missing identifier".to_string());
    }
    if manifest.title.is_empty() {
        warnings.push("Manifest is missing title".to_string());
    }
    if manifest.organizations.is_empty() {
        errors.push("Manifest must contain at least one organization".to_string());
    }
    if manifest.resources.is_empty() {
        warnings.push("Manifest contains no resources".to_string());
    }

    for (idx, org) in manifest.organizations.iter().enumerate() {
        if org.identifier.is_empty() {
            errors.push(format!("Organization {} is missing identifier", idx));
        }
        if org.items.is_empty() {
            warnings.push(format!("Organization {} contains no items", idx));
        }
    }

    // An unnamed resource is an error, an empty file list only a warning
    for (idx, res) in manifest.resources.iter().enumerate() {
        if res.identifier.is_empty() {
            errors.push(format!("Resource {} is missing identifier", idx));
        }
        if res.files.is_empty() {
            warnings.push(format!("Resource {} contains no files", idx));
        }
    }

    tracing::debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        "validated manifest {}",
        manifest.identifier
    );

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
        manifest: manifest.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::model::{Item, Organization, Resource};

    fn minimal() -> Manifest {
        Manifest {
            identifier: "M".to_string(),
            title: "Course".to_string(),
            organizations: vec![Organization {
                identifier: "O".to_string(),
                title: "Org".to_string(),
                items: vec![Item::new("I", "Lesson").with_identifierref("R")],
            }],
            resources: vec![Resource::new("R").with_href("index.html").with_file("index.html")],
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_manifest_is_clean() {
        let result = validate(&minimal());
        assert!(result.valid);
        assert!(result.is_clean());
        assert_eq!(result.manifest, minimal());
    }

    #[test]
    fn test_no_organizations_is_fatal() {
        let mut m = minimal();
        m.organizations.clear();
        let result = validate(&m);
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("organization")));
    }

    #[test]
    fn test_missing_identifiers_are_fatal() {
        let mut m = minimal();
        m.identifier.clear();
        m.organizations[0].identifier.clear();
        m.resources[0].identifier.clear();

        let result = validate(&m);
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "Manifest is missing identifier",
                "Organization 0 is missing identifier",
                "Resource 0 is missing identifier",
            ]
        );
    }

    #[test]
    fn test_advisory_conditions_only_warn() {
        let mut m = minimal();
        m.title.clear();
        m.organizations[0].items.clear();
        m.resources[0].files.clear();

        let result = validate(&m);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(
            result.warnings,
            vec![
                "Manifest is missing title",
                "Organization 0 contains no items",
                "Resource 0 contains no files",
            ]
        );
    }

    #[test]
    fn test_no_resources_only_warns() {
        let mut m = minimal();
        m.resources.clear();
        let result = validate(&m);
        assert!(result.valid);
        assert_eq!(result.warnings, vec!["Manifest contains no resources"]);
    }

    #[test]
    fn test_result_json_shape() {
        let json = serde_json::to_value(validate(&minimal())).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["valid", "errors", "warnings", "manifest"] {
            assert!(keys.contains(&key), "missing {}", key);
        }
    }
}
