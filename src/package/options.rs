/// Configuration for reading SCORM packages.
///
/// Hosts usually keep the defaults; the fields are public and the type
/// deserializes from a host configuration file, missing keys taking their
/// default values.
///
/// # Examples
///
/// ```rust
/// use scorm_core::package::PackageOptions;
///
/// // Create with defaults
/// let options = PackageOptions::default();
/// assert_eq!(options.manifest_entry, "imsmanifest.xml");
///
/// // Or customize
/// let options = PackageOptions::new()
///     .with_max_item_depth(16)
///     .with_verify_launch_files(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PackageOptions {
    /// Archive entry holding the manifest
    pub manifest_entry: String,
    /// Items nested deeper than this are dropped while building the manifest
    pub max_item_depth: usize,
    /// Skip SCOs whose launch file is not present in the archive
    pub verify_launch_files: bool,
    /// Largest manifest entry read from a ZIP, in decompressed bytes
    pub max_entry_size: u64,
    /// Manifest elements nested deeper than this make the XML malformed
    pub max_xml_depth: usize,
}

/// Archive entry name of a SCORM manifest.
pub const MANIFEST_ENTRY: &str = "imsmanifest.xml";

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            manifest_entry: MANIFEST_ENTRY.to_string(),
            max_item_depth: crate::manifest::DEFAULT_MAX_ITEM_DEPTH,
            verify_launch_files: true,
            max_entry_size: super::archive::MAX_ENTRY_SIZE,
            max_xml_depth: crate::xml::DEFAULT_MAX_DEPTH,
        }
    }
}

impl PackageOptions {
    /// Create a new `PackageOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the archive entry read as the manifest.
    #[inline]
    pub fn with_manifest_entry(mut self, entry: impl Into<String>) -> Self {
        self.manifest_entry = entry.into();
        self
    }

    /// Set the item nesting limit.
    #[inline]
    pub fn with_max_item_depth(mut self, depth: usize) -> Self {
        self.max_item_depth = depth;
        self
    }

    /// Set the largest manifest entry accepted from a ZIP archive.
    #[inline]
    pub fn with_max_entry_size(mut self, limit: u64) -> Self {
        self.max_entry_size = limit;
        self
    }

    /// Set the element nesting limit of the manifest XML.
    #[inline]
    pub fn with_max_xml_depth(mut self, depth: usize) -> Self {
        self.max_xml_depth = depth;
        self
    }

    /// Set whether launch files must exist in the archive.
    ///
    /// When disabled, every item whose resource resolves to a launch path
    /// becomes a SCO.
    #[inline]
    pub fn with_verify_launch_files(mut self, verify: bool) -> Self {
        self.verify_launch_files = verify;
        self
    }
}
