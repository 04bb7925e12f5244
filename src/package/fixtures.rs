//! In-memory package fixtures for tests.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

/// Build a ZIP archive holding `entries` as (path, content) pairs.
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    zip_raw(
        &entries
            .iter()
            .map(|(name, content)| (*name, content.as_bytes().to_vec()))
            .collect::<Vec<_>>(),
    )
}

/// Build a ZIP archive from raw byte entries.
pub fn zip_raw(entries: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// One organization, one item, one resource with one file.
pub const MINIMAL_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest identifier="com.example.minimal" version="1.0"
          xmlns="http://www.imsproject.org/xsd/imscp_rootv1p1p2"
          xmlns:adlcp="http://www.adlnet.org/xsd/adlcp_rootv1p2">
  <metadata>
    <schema>ADL SCORM</schema>
    <schemaversion>1.2</schemaversion>
  </metadata>
  <title>Minimal Course</title>
  <organizations default="ORG-1">
    <organization identifier="ORG-1">
      <title>Minimal Course</title>
      <item identifier="ITEM-1" identifierref="RES-1">
        <title>Only Lesson</title>
      </item>
    </organization>
  </organizations>
  <resources>
    <resource identifier="RES-1" type="webcontent" adlcp:scormtype="sco" href="index.html">
      <file href="index.html"/>
    </resource>
  </resources>
</manifest>
"#;
