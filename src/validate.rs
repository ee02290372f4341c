//! Schema validation for font data.
//!
//! A small set of declarative checks run before writing and after loading.
//! Path nodes and transforms are already shape-checked during parsing, so
//! validation covers what the type system cannot: header sanity, canonical
//! codepoints and the no-duplicate-codepoint invariant.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::{codepoint, error::GlyphsBuildError, font::Font};

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)] // the pattern is a literal
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} [+-]\d{4}$").unwrap()
});

fn fail(reason: String) -> Result<(), GlyphsBuildError> {
    Err(GlyphsBuildError::Validation { reason })
}

/// Validate a font, reporting the first failure with a descriptive reason.
pub fn validate(font: &Font) -> Result<(), GlyphsBuildError> {
    if font.family_name.is_empty() {
        return fail("familyName must not be empty".to_string());
    }
    if !(0..=999).contains(&font.version_minor) {
        return fail(format!(
            "versionMinor must be between 0 and 999, got {}",
            font.version_minor
        ));
    }
    if let Some(date) = font.rest.get("date").and_then(|v| v.as_str()) {
        if !DATE_RE.is_match(date) {
            return fail(format!(
                "date \"{}\" is not of the form \"YYYY-MM-DD HH:mm:ss +0000\"",
                date
            ));
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for glyph in font.glyphs.iter() {
        if let Some(unicode) = glyph.unicode.as_deref() {
            if !codepoint::is_codepoint(unicode)
                || unicode.bytes().any(|b| b.is_ascii_lowercase())
            {
                return fail(format!(
                    "glyph {} has non-canonical unicode \"{}\"",
                    glyph.glyphname, unicode
                ));
            }
            if !seen.insert(unicode) {
                return fail(format!(
                    "more than one glyph is assigned to codepoint {}",
                    unicode
                ));
            }
        }
    }
    Ok(())
}
