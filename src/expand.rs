//! Component expansion: resolving composite glyphs into literal outlines.
//!
//! A composite layer carries references to other glyphs rather than path
//! data. Expansion looks each reference up by name, recursively expands the
//! source if it is itself composite, applies the component's affine
//! transform to the source layer's nodes and appends the result to the
//! referencing layer, which ends up pure outline.

use std::collections::HashSet;

use smol_str::SmolStr;

use crate::{
    codepoint::{self, CodepointRef},
    error::GlyphsBuildError,
    font::Font,
    glyph::Glyph,
    layer::Layer,
};

pub const DEFAULT_MAX_DEPTH: u32 = 10;

#[derive(Debug, Clone)]
pub struct ExpandOptions {
    /// Glyphs to expand, as raw identifiers. Defaults to all glyphs.
    pub target_glyphs: Option<Vec<CodepointRef>>,
    /// Maximum recursion depth; the guard that turns a component reference
    /// cycle into a fast, deterministic failure.
    pub max_depth: u32,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        ExpandOptions {
            target_glyphs: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Expand component references into paths for the targeted glyphs of a font.
///
/// Returns a new font; the input is untouched. Non-targeted glyphs pass
/// through unchanged.
pub fn expand(font: &Font, options: &ExpandOptions) -> Result<Font, GlyphsBuildError> {
    let targets: Option<HashSet<SmolStr>> = options
        .target_glyphs
        .as_ref()
        .map(|refs| refs.iter().map(codepoint::normalize).collect())
        .transpose()?;

    let mut expanded = Vec::with_capacity(font.glyphs.len());
    for glyph in font.glyphs.iter() {
        let targeted = match (&targets, &glyph.unicode) {
            (None, _) => true,
            (Some(set), Some(unicode)) => set.contains(unicode),
            (Some(_), None) => false,
        };
        if targeted {
            expanded.push(expand_glyph(glyph, font, 0, options.max_depth)?);
        } else {
            expanded.push(glyph.clone());
        }
    }

    let mut font = font.clone();
    font.glyphs.0 = expanded;
    Ok(font)
}

/// Expand one glyph against the font it came from.
///
/// A diamond-shaped reference graph re-expands the shared source once per
/// incoming reference; fonts are small and expansion is offline tooling, so
/// no memoization.
fn expand_glyph(
    glyph: &Glyph,
    font: &Font,
    depth: u32,
    max_depth: u32,
) -> Result<Glyph, GlyphsBuildError> {
    let mut layers = Vec::with_capacity(glyph.layers.len());
    for layer in &glyph.layers {
        if !layer.has_components() {
            layers.push(layer.clone());
            continue;
        }

        let mut expanded_paths = Vec::new();
        for component in &layer.components {
            let mut source = font
                .glyphs
                .get(&component.name)
                .ok_or_else(|| GlyphsBuildError::MissingComponentSource {
                    glyph: glyph.glyphname.clone(),
                    reference: component.name.to_string(),
                })?
                .clone();

            if source.has_components() {
                if depth >= max_depth {
                    return Err(GlyphsBuildError::MaxDepthExceeded { max_depth });
                }
                source = expand_glyph(&source, font, depth + 1, max_depth)?;
            }

            let source_layer = source.get_layer(&layer.layer_id).ok_or_else(|| {
                GlyphsBuildError::MissingLayer {
                    glyph: component.name.to_string(),
                    layer_id: layer.layer_id.clone(),
                }
            })?;

            for path in &source_layer.paths {
                expanded_paths.push(path.transformed(&component.transform));
            }
        }

        // Pre-existing literal paths stay first, expanded paths follow in
        // component order.
        let mut new_layer = Layer {
            layer_id: layer.layer_id.clone(),
            components: Vec::new(),
            paths: layer.paths.clone(),
            rest: layer.rest.clone(),
        };
        new_layer.paths.extend(expanded_paths);
        layers.push(new_layer);
    }

    Ok(Glyph {
        glyphname: glyph.glyphname.clone(),
        unicode: glyph.unicode.clone(),
        layers,
        rest: glyph.rest.clone(),
    })
}
