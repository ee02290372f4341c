//! Canonical codepoint handling.
//!
//! Throughout the crate a codepoint is an uppercase hex string of at least
//! four digits, e.g. `0041` for "A". These helpers convert between that
//! canonical form, raw numbers, literal characters and glyph names.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::{error::GlyphsBuildError, names};

static CODEPOINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // the pattern is a literal
    Regex::new(r"^[0-9A-Fa-f]{4,6}$").unwrap()
});

/// Format a scalar value as a canonical codepoint string: `0x7A` -> `"007A"`.
pub fn format_codepoint(value: u32) -> SmolStr {
    SmolStr::new(format!("{:04X}", value))
}

/// Parse a canonical codepoint string back to a number: `"0055"` -> `0x55`.
pub fn parse_codepoint(s: &str) -> Result<u32, GlyphsBuildError> {
    u32::from_str_radix(s, 16).map_err(|_| GlyphsBuildError::BadCodepoint {
        value: s.to_string(),
    })
}

/// Test whether a string has the canonical codepoint shape.
pub fn is_codepoint(s: &str) -> bool {
    CODEPOINT_RE.is_match(s)
}

/// A user-supplied glyph identifier, prior to normalization.
///
/// Accepts whatever a pipeline configuration might reasonably throw at us:
/// a raw number, a codepoint string, a single literal character, or a glyph
/// name known to the [`names`] table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodepointRef {
    Number(u32),
    Text(SmolStr),
}

impl From<u32> for CodepointRef {
    fn from(value: u32) -> Self {
        CodepointRef::Number(value)
    }
}

impl From<char> for CodepointRef {
    fn from(value: char) -> Self {
        CodepointRef::Number(value as u32)
    }
}

impl From<&str> for CodepointRef {
    fn from(value: &str) -> Self {
        CodepointRef::Text(SmolStr::new(value))
    }
}

/// Normalize an identifier to a canonical codepoint string.
pub fn normalize(reference: &CodepointRef) -> Result<SmolStr, GlyphsBuildError> {
    match reference {
        CodepointRef::Number(n) => Ok(format_codepoint(*n)),
        CodepointRef::Text(s) if is_codepoint(s) => Ok(SmolStr::new(s.to_uppercase())),
        CodepointRef::Text(s) => {
            let mut chars = s.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Ok(format_codepoint(c as u32));
            }
            names::codepoint_for_name(s)
                .map(SmolStr::new)
                .ok_or_else(|| GlyphsBuildError::BadCodepoint {
                    value: s.to_string(),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0x007A, "007A")]
    #[case(0x0041, "0041")]
    #[case(0x1F600, "1F600")]
    fn test_format_codepoint(#[case] value: u32, #[case] expected: &str) {
        assert_eq!(format_codepoint(value), expected);
    }

    #[test]
    fn test_parse_roundtrip() {
        assert_eq!(parse_codepoint("0041").unwrap(), 0x41);
        assert_eq!(parse_codepoint(&format_codepoint(0x00BB)).unwrap(), 0xBB);
        assert!(parse_codepoint("XO90").is_err());
    }

    #[rstest]
    #[case("007a", true)]
    #[case("0075", true)]
    #[case("1F600", true)]
    #[case("XO90", false)]
    #[case("41", false)]
    fn test_is_codepoint(#[case] s: &str, #[case] expected: bool) {
        assert_eq!(is_codepoint(s), expected);
    }

    #[rstest]
    #[case(CodepointRef::from(0x61), "0061")]
    #[case(CodepointRef::from("0061"), "0061")]
    #[case(CodepointRef::from("007a"), "007A")]
    #[case(CodepointRef::from('a'), "0061")]
    #[case(CodepointRef::from("A"), "0041")]
    #[case(CodepointRef::from("ellipsis"), "2026")]
    fn test_normalize(#[case] reference: CodepointRef, #[case] expected: &str) {
        assert_eq!(normalize(&reference).unwrap(), expected);
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        let err = normalize(&CodepointRef::from("not-a-glyph")).unwrap_err();
        assert!(err.to_string().contains("not-a-glyph"));
    }
}
