#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod blocks;
pub mod codepoint;
mod error;
mod expand;
mod font;
mod glyph;
mod layer;
pub mod names;
mod pipeline;
mod remap;
mod serde_helpers;
mod shape;
mod validate;

pub use crate::{
    codepoint::CodepointRef,
    error::GlyphsBuildError,
    expand::{expand, ExpandOptions},
    font::{Font, VersionBump},
    glyph::{Glyph, GlyphList},
    layer::Layer,
    pipeline::{build, run_build, run_tasks, Build, BuildConfig, LoadSpec, Task},
    remap::{remap, subset, Coverage, Destination, Mapping, RemapOptions},
    shape::{Component, Node, NodeType, Path, Transform},
    validate::validate,
};

use std::fs;
use std::path::PathBuf;

/// Load and validate a font source file.
pub fn load(path: impl Into<PathBuf>) -> Result<Font, GlyphsBuildError> {
    let path = path.into();
    log::debug!("Loading {}", path.display());
    let text = fs::read_to_string(&path).map_err(|source| GlyphsBuildError::IO {
        path: path.clone(),
        source,
    })?;
    let font: Font = serde_json::from_str(&text)?;
    validate(&font)?;
    Ok(font)
}

/// Validate and write a font source file.
pub fn write(path: impl Into<PathBuf>, font: &Font) -> Result<(), GlyphsBuildError> {
    let path = path.into();
    validate(font)?;
    let mut text = serde_json::to_string_pretty(font)?;
    text.push('\n');
    fs::write(&path, text).map_err(|source| GlyphsBuildError::IO { path, source })?;
    Ok(())
}
