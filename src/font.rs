use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::GlyphsBuildError, glyph::GlyphList};

fn default_upm() -> u16 {
    1000
}

fn upm_is_default(upm: &u16) -> bool {
    *upm == default_upm()
}

/// The root font object.
///
/// Only the fields the core operates on are typed; everything else in the
/// source file lands in `rest` and is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[serde(
        rename = "unitsPerEm",
        default = "default_upm",
        skip_serializing_if = "upm_is_default"
    )]
    pub units_per_em: u16,
    #[serde(rename = "versionMajor", default)]
    pub version_major: i32,
    #[serde(rename = "versionMinor", default)]
    pub version_minor: i32,
    #[serde(default, skip_serializing_if = "GlyphList::is_empty")]
    pub glyphs: GlyphList,
    #[serde(flatten)]
    pub rest: IndexMap<String, serde_json::Value>,
}

/// Which version property to bump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    #[default]
    Minor,
}

impl FromStr for VersionBump {
    type Err = GlyphsBuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            _ => Err(GlyphsBuildError::BadTaskArguments {
                task: "version".to_string(),
                reason: format!("expected \"major\" or \"minor\", got \"{}\"", s),
            }),
        }
    }
}

impl Font {
    pub fn new(family_name: impl Into<String>) -> Self {
        Font {
            family_name: family_name.into(),
            units_per_em: default_upm(),
            version_major: 0,
            version_minor: 0,
            glyphs: GlyphList::default(),
            rest: IndexMap::new(),
        }
    }

    /// A copy of this font with the version incremented: a minor bump
    /// increments `versionMinor`, a major bump increments `versionMajor`
    /// and resets `versionMinor` to zero.
    pub fn with_version_bump(&self, bump: VersionBump) -> Font {
        let mut font = self.clone();
        match bump {
            VersionBump::Major => {
                font.version_major += 1;
                font.version_minor = 0;
            }
            VersionBump::Minor => {
                font.version_minor += 1;
            }
        }
        font
    }

    /// A copy of this font with one metadata value replaced.
    ///
    /// The typed header fields are checked; any other key goes through the
    /// free-form passthrough. The glyph list is not settable this way.
    pub fn with_value(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> Result<Font, GlyphsBuildError> {
        let bad = |reason: &str| GlyphsBuildError::BadTaskArguments {
            task: "set".to_string(),
            reason: reason.to_string(),
        };
        let mut font = self.clone();
        match key {
            "familyName" => {
                font.family_name = value
                    .as_str()
                    .ok_or_else(|| bad("familyName takes a string"))?
                    .to_string();
            }
            "unitsPerEm" => {
                font.units_per_em = value
                    .as_u64()
                    .and_then(|v| u16::try_from(v).ok())
                    .ok_or_else(|| bad("unitsPerEm takes a small positive integer"))?;
            }
            "versionMajor" => {
                font.version_major = value
                    .as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .ok_or_else(|| bad("versionMajor takes an integer"))?;
            }
            "versionMinor" => {
                font.version_minor = value
                    .as_i64()
                    .and_then(|v| i32::try_from(v).ok())
                    .ok_or_else(|| bad("versionMinor takes an integer"))?;
            }
            "glyphs" => {
                return Err(bad("the glyph list cannot be set directly; use map or subset"));
            }
            _ => {
                font.rest.insert(key.to_string(), value);
            }
        }
        Ok(font)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_version_bump() {
        let mut font = Font::new("Test Font");
        font.version_major = 1;
        let minor_bumped = font.with_version_bump(VersionBump::Minor);
        assert_eq!((minor_bumped.version_major, minor_bumped.version_minor), (1, 1));
        let major_bumped = minor_bumped.with_version_bump(VersionBump::Major);
        assert_eq!((major_bumped.version_major, major_bumped.version_minor), (2, 0));
        // the input is untouched
        assert_eq!((font.version_major, font.version_minor), (1, 0));
    }

    #[test]
    fn test_with_value() {
        let font = Font::new("Test Font");
        let renamed = font
            .with_value("familyName", serde_json::json!("Other Font"))
            .unwrap();
        assert_eq!(renamed.family_name, "Other Font");
        let noted = font
            .with_value("designer", serde_json::json!("Jan Tschichold"))
            .unwrap();
        assert_eq!(
            noted.rest.get("designer"),
            Some(&serde_json::json!("Jan Tschichold"))
        );
        assert!(font
            .with_value("glyphs", serde_json::json!([]))
            .is_err());
        assert!(font
            .with_value("unitsPerEm", serde_json::json!("a lot"))
            .is_err());
    }
}
