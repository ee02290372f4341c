use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::shape::{Component, Path};

/// One master's visual definition of a glyph.
///
/// A layer is composite (holds `components`), outline (holds `paths`), or
/// transiently both while expansion is appending outline data; expansion
/// output is always pure outline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(rename = "layerId", default)]
    pub layer_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<Path>,
    /// Width, anchors, hints and anything else the core does not interpret
    #[serde(flatten)]
    pub rest: IndexMap<String, serde_json::Value>,
}

impl Layer {
    pub fn has_components(&self) -> bool {
        !self.components.is_empty()
    }

    pub fn has_paths(&self) -> bool {
        !self.paths.is_empty()
    }
}
