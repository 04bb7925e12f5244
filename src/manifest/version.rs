//! SCORM version detection.
//!
//! `schemaversion` is free text that authoring tools fill inconsistently
//! ("1.2", "CAM 1.3", "2004 3rd Edition"), so detection is a substring
//! heuristic with a 1.2 default.

use super::model::Manifest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SCORM edition of a package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScormVersion {
    #[default]
    #[serde(rename = "1.2")]
    V1_2,
    #[serde(rename = "2004")]
    V2004,
}

impl ScormVersion {
    /// The version as written at the boundary: `"1.2"` or `"2004"`.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ScormVersion::V1_2 => "1.2",
            ScormVersion::V2004 => "2004",
        }
    }
}

impl fmt::Display for ScormVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the SCORM version of a manifest.
///
/// A `schemaversion` containing "2004" means SCORM 2004, one containing
/// "1.2" means SCORM 1.2, and anything else (including no metadata at all)
/// defaults to SCORM 1.2.
pub fn detect(manifest: &Manifest) -> ScormVersion {
    let schemaversion = manifest
        .metadata
        .as_ref()
        .and_then(|meta| meta.schemaversion.as_deref());

    let version = match schemaversion {
        Some(sv) if sv.contains("2004") => ScormVersion::V2004,
        Some(sv) if sv.contains("1.2") => ScormVersion::V1_2,
        _ => ScormVersion::default(),
    };
    tracing::debug!(?schemaversion, %version, "detected SCORM version");
    version
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::model::Metadata;
    use crate::xml::XmlNode;

    fn with_schemaversion(sv: Option<&str>) -> Manifest {
        Manifest {
            metadata: Some(Metadata {
                schema: Some("ADL SCORM".to_string()),
                schemaversion: sv.map(str::to_string),
                location: None,
                title: None,
                description: None,
                keywords: Vec::new(),
                raw: XmlNode::Text(String::new()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_detect_2004() {
        let m = with_schemaversion(Some("ADL SCORM 2004 3rd Edition"));
        assert_eq!(detect(&m), ScormVersion::V2004);
    }

    #[test]
    fn test_detect_1_2() {
        assert_eq!(detect(&with_schemaversion(Some("1.2"))), ScormVersion::V1_2);
    }

    #[test]
    fn test_detect_defaults_to_1_2() {
        assert_eq!(detect(&Manifest::default()), ScormVersion::V1_2);
        assert_eq!(detect(&with_schemaversion(None)), ScormVersion::V1_2);
        // "CAM 1.3" is SCORM 2004 in practice, but the heuristic only
        // recognizes the two literal markers
        assert_eq!(detect(&with_schemaversion(Some("CAM 1.3"))), ScormVersion::V1_2);
    }

    #[test]
    fn test_version_serializes_as_boundary_string() {
        assert_eq!(serde_json::to_string(&ScormVersion::V2004).unwrap(), "\"2004\"");
        assert_eq!(ScormVersion::V1_2.to_string(), "1.2");
    }
}
