//! Byte Order Mark (BOM) utilities for manifest text.
//!
//! Authoring tools emit `imsmanifest.xml` as UTF-8 with or without a BOM, and
//! occasionally as UTF-16. The XML parser works on `&str`, so the raw entry
//! bytes are decoded here first.

use encoding_rs::{UTF_16BE, UTF_16LE};
use std::borrow::Cow;

/// Supported BOM encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    Utf8,
    Utf16Le,
    Utf16Be,
}

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// UTF-16 little-endian BOM bytes.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// UTF-16 big-endian BOM bytes.
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Detects the BOM at the start of `bytes`, if any.
pub fn detect_bom(bytes: &[u8]) -> Option<BomKind> {
    if bytes.starts_with(&UTF8_BOM) {
        Some(BomKind::Utf8)
    } else if bytes.starts_with(&UTF16_LE_BOM) {
        Some(BomKind::Utf16Le)
    } else if bytes.starts_with(&UTF16_BE_BOM) {
        Some(BomKind::Utf16Be)
    } else {
        None
    }
}

/// Decode text bytes, honoring a leading BOM.
///
/// Without a BOM the bytes are treated as UTF-8; invalid sequences are
/// replaced rather than rejected.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match detect_bom(bytes) {
        Some(BomKind::Utf8) => String::from_utf8_lossy(&bytes[UTF8_BOM.len()..]),
        Some(BomKind::Utf16Le) => {
            UTF_16LE
                .decode_without_bom_handling(&bytes[UTF16_LE_BOM.len()..])
                .0
        },
        Some(BomKind::Utf16Be) => {
            UTF_16BE
                .decode_without_bom_handling(&bytes[UTF16_BE_BOM.len()..])
                .0
        },
        None => String::from_utf8_lossy(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_strips_utf8_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"<manifest/>");
        assert_eq!(decode_text(&bytes), "<manifest/>");
    }

    #[test]
    fn test_decode_utf16_le() {
        let mut bytes = UTF16_LE_BOM.to_vec();
        for unit in "<a/>".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(detect_bom(&bytes), Some(BomKind::Utf16Le));
        assert_eq!(decode_text(&bytes), "<a/>");
    }

    #[test]
    fn test_decode_without_bom_is_lossy_utf8() {
        assert_eq!(decode_text(b"abc"), "abc");
        assert_eq!(decode_text(&[b'a', 0xFF]), "a\u{FFFD}");
    }
}
