//! Glyph remapping and subsetting.
//!
//! Remapping reassigns glyphs across codepoint (or name) keys, with
//! configurable rename, provenance and collision rules; subsetting is
//! remapping a codepoint selection onto itself while dropping everything
//! outside it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::{
    blocks, codepoint,
    error::GlyphsBuildError,
    font::Font,
    glyph::{Glyph, GlyphList},
    names,
};

/// One or more destination codepoints for a source glyph. A list fans the
/// source out to several destinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Destination {
    One(SmolStr),
    Many(Vec<SmolStr>),
}

impl Destination {
    fn as_slice(&self) -> &[SmolStr] {
        match self {
            Destination::One(d) => std::slice::from_ref(d),
            Destination::Many(d) => d,
        }
    }
}

/// Source-to-destination glyph assignments, in application order.
pub type Mapping = IndexMap<SmolStr, Destination>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemapOptions {
    /// Overwrite the mapped glyph's name with the canonical name for its
    /// destination codepoint, when the name table has one.
    pub rename_glyphs: bool,
    /// Match mapping source keys against `glyphname` instead of `unicode`.
    pub select_source_by_glyph_name: bool,
    /// Keep glyphs whose key never appears as a mapping source; newly
    /// placed glyphs still take precedence over old occupants.
    pub include_unmapped_glyphs: bool,
}

impl Default for RemapOptions {
    fn default() -> Self {
        RemapOptions {
            rename_glyphs: true,
            select_source_by_glyph_name: false,
            include_unmapped_glyphs: false,
        }
    }
}

fn key_of<'a>(glyph: &'a Glyph, by_name: bool) -> Option<&'a str> {
    if by_name {
        Some(glyph.glyphname.as_str())
    } else {
        glyph.unicode.as_deref()
    }
}

/// Map glyphs of a font to different codepoint positions.
///
/// Returns a new font; the input is untouched. A source key with no
/// matching glyph is skipped with a warning rather than failing the whole
/// mapping.
pub fn remap(
    font: &Font,
    mapping: &Mapping,
    options: &RemapOptions,
) -> Result<Font, GlyphsBuildError> {
    let by_name = options.select_source_by_glyph_name;

    // Glyphs not consumed or evicted by the mapping; appended to the output
    // when unmapped glyphs are kept.
    let mut pool: Vec<Glyph> = font.glyphs.to_vec();
    let mut produced: Vec<Glyph> = Vec::new();

    for (source, destinations) in mapping {
        let Some(source_glyph) = font
            .glyphs
            .iter()
            .find(|g| key_of(g, by_name) == Some(source.as_str()))
        else {
            log::warn!("No glyph in the font for mapping source \"{}\"; skipping", source);
            continue;
        };

        for destination in destinations.as_slice() {
            let mut glyph = source_glyph.clone();
            glyph.unicode = Some(destination.clone());
            if options.rename_glyphs {
                if let Some(name) = names::name_for(destination) {
                    glyph.glyphname = name.to_string();
                }
            }
            // Later placements win at a contested destination.
            produced.retain(|g| g.unicode.as_deref() != Some(destination.as_str()));
            if options.include_unmapped_glyphs {
                pool.retain(|occupant| occupant.unicode.as_deref() != Some(destination.as_str()));
            }
            produced.push(glyph);
        }

        if options.include_unmapped_glyphs {
            pool.retain(|g| key_of(g, by_name) != Some(source.as_str()));
        }
    }

    if options.include_unmapped_glyphs {
        produced.extend(pool);
    }

    let mut font = font.clone();
    font.glyphs = GlyphList(produced);
    Ok(font)
}

/// One element of a subset selection: a single codepoint, a Unicode block
/// name, or an inclusive `[start, end]` codepoint range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coverage {
    Single(SmolStr),
    Range(SmolStr, SmolStr),
}

fn range_codepoints(start: u32, end: u32, codepoints: &mut Vec<SmolStr>) {
    for value in start..=end {
        codepoints.push(codepoint::format_codepoint(value));
    }
}

/// Subset a font, discarding glyphs outside the selection.
///
/// The selection expands to a codepoint set which becomes an identity
/// mapping through [`remap`] with default options; codepoints the font does
/// not cover are simply absent from the output.
pub fn subset(font: &Font, coverage: &[Coverage]) -> Result<Font, GlyphsBuildError> {
    let mut codepoints: Vec<SmolStr> = Vec::new();
    for entry in coverage {
        match entry {
            Coverage::Single(s) if codepoint::is_codepoint(s) => {
                codepoints.push(SmolStr::new(s.to_uppercase()));
            }
            Coverage::Single(block_name) => {
                let (start, end) = blocks::block_range(block_name)?;
                range_codepoints(start, end, &mut codepoints);
            }
            Coverage::Range(start, end) => {
                range_codepoints(
                    codepoint::parse_codepoint(start)?,
                    codepoint::parse_codepoint(end)?,
                    &mut codepoints,
                );
            }
        }
    }

    let mapping: Mapping = codepoints
        .into_iter()
        .map(|cp| (cp.clone(), Destination::One(cp)))
        .collect();
    remap(font, &mapping, &RemapOptions::default())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use pretty_assertions::assert_eq;

    fn latin_font() -> Font {
        serde_json::from_str(
            r#"{
                "familyName": "Test Font",
                "versionMajor": 1,
                "glyphs": [
                    {
                        "glyphname": "A",
                        "unicode": "0041",
                        "layers": [
                            {
                                "layerId": "master-1",
                                "paths": [{"nodes": ["0 0 LINE", "50 700 LINE", "100 0 LINE"], "closed": 1}]
                            }
                        ]
                    },
                    {"glyphname": "B", "unicode": "0042", "layers": [{"layerId": "master-1"}]},
                    {"glyphname": "C", "unicode": "0043", "layers": [{"layerId": "master-1"}]},
                    {"glyphname": "D", "unicode": "0044", "layers": [{"layerId": "master-1"}]},
                    {"glyphname": "E", "unicode": "0045", "layers": [{"layerId": "master-1"}]},
                    {"glyphname": "F", "unicode": "0046", "layers": [{"layerId": "master-1"}]},
                    {"glyphname": "G", "unicode": "0047", "layers": [{"layerId": "master-1"}]},
                    {"glyphname": "a", "unicode": "0061", "layers": [{"layerId": "master-1"}]}
                ]
            }"#,
        )
        .unwrap()
    }

    fn mapping(pairs: &[(&str, Destination)]) -> Mapping {
        pairs
            .iter()
            .map(|(source, destination)| (SmolStr::new(source), destination.clone()))
            .collect()
    }

    #[test]
    fn test_map_fan_out() {
        let font = latin_font();
        let mapping = mapping(&[(
            "0041",
            Destination::Many(vec!["0061".into(), "007A".into()]),
        )]);
        let mapped = remap(&font, &mapping, &RemapOptions::default()).unwrap();
        assert_eq!(mapped.glyphs.len(), 2);
        assert_eq!(mapped.glyphs[0].unicode.as_deref(), Some("0061"));
        assert_eq!(mapped.glyphs[1].unicode.as_deref(), Some("007A"));
        let original_layers = &font.glyphs.get("A").unwrap().layers;
        assert_eq!(&mapped.glyphs[0].layers, original_layers);
        assert_eq!(&mapped.glyphs[1].layers, original_layers);
    }

    #[test]
    fn test_map_renames_by_default() {
        let font = latin_font();
        let mapping = mapping(&[("0041", Destination::One("0061".into()))]);
        let mapped = remap(&font, &mapping, &RemapOptions::default()).unwrap();
        assert_eq!(mapped.glyphs[0].glyphname, "a");

        let keep_names = RemapOptions {
            rename_glyphs: false,
            ..Default::default()
        };
        let mapped = remap(&font, &mapping, &keep_names).unwrap();
        assert_eq!(mapped.glyphs[0].glyphname, "A");
    }

    #[test]
    fn test_map_by_glyph_name() {
        let font = latin_font();
        let mapping = mapping(&[("A", Destination::One("00C5".into()))]);
        let options = RemapOptions {
            select_source_by_glyph_name: true,
            ..Default::default()
        };
        let mapped = remap(&font, &mapping, &options).unwrap();
        assert_eq!(mapped.glyphs.len(), 1);
        assert_eq!(mapped.glyphs[0].unicode.as_deref(), Some("00C5"));
        assert_eq!(mapped.glyphs[0].glyphname, "Aring");
    }

    #[test]
    fn test_empty_mapping() {
        let font = latin_font();
        let empty = Mapping::new();
        let dropped = remap(&font, &empty, &RemapOptions::default()).unwrap();
        assert_eq!(dropped.glyphs.len(), 0);

        let keep_all = RemapOptions {
            include_unmapped_glyphs: true,
            ..Default::default()
        };
        let kept = remap(&font, &empty, &keep_all).unwrap();
        assert_eq!(kept.glyphs, font.glyphs);
    }

    #[test]
    fn test_collision_precedence() {
        let font = latin_font();
        // move A onto a's codepoint; the existing a must be evicted
        let mapping = mapping(&[("0041", Destination::One("0061".into()))]);
        let options = RemapOptions {
            include_unmapped_glyphs: true,
            ..Default::default()
        };
        let mapped = remap(&font, &mapping, &options).unwrap();
        assert_eq!(mapped.glyphs.len(), font.glyphs.len() - 1);
        let at_destination: Vec<&Glyph> = mapped
            .glyphs
            .iter()
            .filter(|g| g.unicode.as_deref() == Some("0061"))
            .collect();
        assert_eq!(at_destination.len(), 1);
        assert_eq!(
            at_destination[0].layers,
            font.glyphs.get("A").unwrap().layers
        );
    }

    #[test]
    fn test_missing_source_is_skipped() {
        let font = latin_font();
        let mapping = mapping(&[
            ("0639", Destination::One("0061".into())),
            ("0041", Destination::One("0062".into())),
        ]);
        let mapped = remap(&font, &mapping, &RemapOptions::default()).unwrap();
        assert_eq!(mapped.glyphs.len(), 1);
        assert_eq!(mapped.glyphs[0].unicode.as_deref(), Some("0062"));
    }

    #[test]
    fn test_subset_single_codepoint() {
        let font = latin_font();
        let subsetted = subset(&font, &[Coverage::Single("0041".into())]).unwrap();
        assert_eq!(subsetted.glyphs.len(), 1);
        assert_eq!(
            subsetted.glyphs.get_by_codepoint("0041").unwrap().layers,
            font.glyphs.get_by_codepoint("0041").unwrap().layers
        );
    }

    #[test]
    fn test_subset_range() {
        let font = latin_font();
        let subsetted = subset(
            &font,
            &[Coverage::Range("0041".into(), "0047".into())],
        )
        .unwrap();
        assert_eq!(subsetted.glyphs.len(), 7);
        for value in 0x41..=0x47u32 {
            let cp = codepoint::format_codepoint(value);
            assert!(subsetted.glyphs.get_by_codepoint(&cp).is_some(), "{cp} missing");
        }
    }

    #[test]
    fn test_subset_block_name() {
        let font = latin_font();
        let subsetted = subset(&font, &[Coverage::Single("Basic Latin".into())]).unwrap();
        // only what the font covers survives
        assert_eq!(subsetted.glyphs.len(), font.glyphs.len());
    }

    #[test]
    fn test_subset_unknown_block() {
        let font = latin_font();
        let err = subset(&font, &[Coverage::Single("Made Up Block".into())]).unwrap_err();
        assert!(err.to_string().contains("Made Up Block"));
    }

    #[test]
    fn test_subset_mixed_selection() {
        let font = latin_font();
        let subsetted = subset(
            &font,
            &[
                Coverage::Single("0061".into()),
                Coverage::Range("0041".into(), "0042".into()),
            ],
        )
        .unwrap();
        assert_eq!(subsetted.glyphs.len(), 3);
    }
}
