//! SCORM package reading.
//!
//! A package is a ZIP archive with an `imsmanifest.xml` at its root. Reading
//! one runs the whole pipeline: manifest entry → normalized tree → manifest
//! model → version and SCOs.
//!
//! ```no_run
//! use scorm_core::package::ScormPackage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("course.zip")?;
//! let package = ScormPackage::from_bytes(&data)?;
//!
//! println!("SCORM {} package, {} SCOs", package.version, package.scos.len());
//! for sco in &package.scos {
//!     println!("{:>3} {} -> {}", sco.order_index, sco.title, sco.launch_url);
//! }
//!
//! let report = package.validate();
//! if !report.valid {
//!     eprintln!("invalid package: {:?}", report.errors);
//! }
//! # Ok(())
//! # }
//! ```

mod archive;
mod modules;
mod options;
mod sco;

#[cfg(test)]
pub(crate) mod fixtures;

pub use archive::{
    MAX_ENTRY_SIZE, MemoryArchive, ZipPackageReader, ZipReader, normalize_entry_path,
};
pub use modules::{CourseModuleDraft, course_modules};
pub use options::{MANIFEST_ENTRY, PackageOptions};
pub use sco::{Sco, ScoMetadata, extract, flatten_items};

use crate::common::bom::decode_text;
use crate::common::{Error, Result};
use crate::manifest::{self, Manifest, ManifestBuilder, ScormVersion, ValidationResult};
use crate::xml::XmlTree;
use serde::Serialize;

/// Organization identifier reported when a manifest has none.
pub const DEFAULT_ORGANIZATION: &str = "default";

/// A parsed SCORM package.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScormPackage {
    pub version: ScormVersion,
    pub manifest: Manifest,
    pub scos: Vec<Sco>,
    /// First organization's identifier, or [`DEFAULT_ORGANIZATION`]
    pub organization_identifier: String,
}

/// Short description of a package, for upload previews.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub version: ScormVersion,
    pub title: String,
    pub scos_count: usize,
    pub organization_identifier: String,
}

impl ScormPackage {
    /// Parse a package from ZIP bytes with default options.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedArchive`] if the bytes are not a ZIP archive
    /// - [`Error::MissingManifest`] if `imsmanifest.xml` is absent
    /// - [`Error::MalformedArchive`] also if the manifest entry is larger than
    ///   [`PackageOptions::max_entry_size`]
    /// - [`Error::MalformedXml`] if the manifest is not well-formed or nests
    ///   deeper than [`PackageOptions::max_xml_depth`]
    /// - [`Error::InvalidManifestStructure`] if it has no manifest root
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, &PackageOptions::default())
    }

    /// Parse a package from ZIP bytes.
    pub fn from_bytes_with_options(data: &[u8], options: &PackageOptions) -> Result<Self> {
        let archive = ZipPackageReader::new(data)?.with_max_entry_size(options.max_entry_size);
        Self::from_archive(&archive, options)
    }

    /// Parse a package from any archive implementation.
    ///
    /// The manifest entry is looked up before any XML is processed.
    pub fn from_archive<A>(archive: &A, options: &PackageOptions) -> Result<Self>
    where
        A: ZipReader + ?Sized,
    {
        let bytes = archive
            .entry(&options.manifest_entry)?
            .ok_or_else(|| Error::MissingManifest(options.manifest_entry.clone()))?;

        let tree = XmlTree::parse_with_max_depth(&decode_text(&bytes), options.max_xml_depth)?;
        let manifest = ManifestBuilder::new()
            .with_max_item_depth(options.max_item_depth)
            .build(&tree)?;

        let version = manifest::detect(&manifest);
        let scos = if options.verify_launch_files {
            extract(&manifest, |path| archive.contains(path))
        } else {
            extract(&manifest, |_| true)
        };

        let organization_identifier = manifest
            .first_organization()
            .map(|org| org.identifier.as_str())
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_ORGANIZATION)
            .to_string();

        tracing::debug!(
            manifest = %manifest.identifier,
            %version,
            scos = scos.len(),
            "parsed SCORM package"
        );

        Ok(Self {
            version,
            manifest,
            scos,
            organization_identifier,
        })
    }

    /// Validate the package's manifest.
    #[inline]
    pub fn validate(&self) -> ValidationResult {
        manifest::validate(&self.manifest)
    }

    /// Summarize the package.
    pub fn summary(&self) -> PackageSummary {
        PackageSummary {
            version: self.version,
            title: self.manifest.title.clone(),
            scos_count: self.scos.len(),
            organization_identifier: self.organization_identifier.clone(),
        }
    }

    /// Course-module drafts for this package's SCOs.
    #[inline]
    pub fn course_modules(&self, course_id: &str) -> Vec<CourseModuleDraft> {
        course_modules(&self.scos, course_id)
    }
}

/// Parse a SCORM package from ZIP bytes with default options.
///
/// Shorthand for [`ScormPackage::from_bytes`].
#[inline]
pub fn parse_package(data: &[u8]) -> Result<ScormPackage> {
    ScormPackage::from_bytes(data)
}
