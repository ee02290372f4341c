use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlyphsBuildError {
    #[error("IO error on {path:?}: {source}")]
    IO {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing font data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Font failed validation: {reason}")]
    Validation { reason: String },

    #[error("Glyph {glyph} references component source {reference}, which is not in the font")]
    MissingComponentSource { glyph: String, reference: String },

    #[error(
        "Tried expanding components, but stopped after {max_depth} recursions. \
         The font may contain a component reference cycle, or you can try \
         increasing the max_depth option."
    )]
    MaxDepthExceeded { max_depth: u32 },

    #[error(
        "Component source {glyph} has no layer with id {layer_id}; the masters may be out of sync"
    )]
    MissingLayer { glyph: String, layer_id: String },

    #[error("\"{name}\" is not a valid Unicode block name")]
    UnknownBlock { name: String },

    #[error("Could not interpret \"{value}\" as a codepoint, character or glyph name")]
    BadCodepoint { value: String },

    #[error("Ill-formed node definition: \"{text}\"")]
    BadNode { text: String },

    #[error("Ill-formed transformation matrix: \"{text}\"")]
    BadTransform { text: String },

    #[error("Bad arguments for task \"{task}\": {reason}")]
    BadTaskArguments { task: String, reason: String },

    #[error("Build \"{build}\" loads more than one source; merging is not yet supported")]
    UnsupportedMerge { build: String },

    #[error("Build \"{build}\" loads no sources")]
    NoSources { build: String },

    #[error("No build named \"{name}\" in the configuration")]
    UnknownBuild { name: String },
}
