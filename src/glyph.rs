use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::layer::Layer;

/// One character/symbol definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Human-facing identifier, independent of codepoint
    pub glyphname: String,
    /// Canonical codepoint, the primary addressing key for most operations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unicode: Option<SmolStr>,
    /// One layer per font master, keyed by `layerId`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<Layer>,
    #[serde(flatten)]
    pub rest: IndexMap<String, serde_json::Value>,
}

impl Glyph {
    pub fn get_layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.layer_id == id)
    }

    /// Whether any layer of this glyph still carries component references.
    pub fn has_components(&self) -> bool {
        self.layers.iter().any(Layer::has_components)
    }
}

/// The font's ordered glyph sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphList(pub Vec<Glyph>);

impl GlyphList {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Glyph> {
        self.0.iter().find(|glyph| glyph.glyphname == name)
    }

    pub fn get_by_codepoint(&self, codepoint: &str) -> Option<&Glyph> {
        self.0
            .iter()
            .find(|glyph| glyph.unicode.as_deref() == Some(codepoint))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Glyph> {
        self.0.iter()
    }
}

impl Deref for GlyphList {
    type Target = Vec<Glyph>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for GlyphList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
