//! Build orchestration: named builds composing load, transform tasks and
//! write.
//!
//! Tasks are `(taskName, ...args)` descriptors so that pipelines can be
//! written down in configuration. An unrecognized task name is not a hard
//! failure; it is logged and the font passes through unchanged, so one typo
//! in a long pipeline does not abort the whole build.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    error::GlyphsBuildError,
    font::{Font, VersionBump},
    remap::{remap, subset, Coverage, Mapping, RemapOptions},
    validate::validate,
};

/// One pipeline step.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Map {
        mapping: Mapping,
        options: RemapOptions,
    },
    Subset(Vec<Coverage>),
    Set {
        key: String,
        value: serde_json::Value,
    },
    Validate,
    Version(VersionBump),
    /// Unknown task name, kept for the skip-with-warning pass-through.
    Other(String),
}

impl<'de> Deserialize<'de> for Task {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let mut parts = Vec::<serde_json::Value>::deserialize(deserializer)?.into_iter();
        let name = match parts.next() {
            Some(serde_json::Value::String(name)) => name,
            _ => return Err(D::Error::custom("a task must start with its name")),
        };
        let task = match name.as_str() {
            "map" => {
                let mapping = parts
                    .next()
                    .ok_or_else(|| D::Error::custom("map task needs a mapping"))?;
                let options = match parts.next() {
                    Some(value) => serde_json::from_value(value).map_err(D::Error::custom)?,
                    None => RemapOptions::default(),
                };
                Task::Map {
                    mapping: serde_json::from_value(mapping).map_err(D::Error::custom)?,
                    options,
                }
            }
            "subset" => {
                let selection = parts
                    .next()
                    .ok_or_else(|| D::Error::custom("subset task needs a selection"))?;
                let coverage = match selection {
                    serde_json::Value::String(single) => vec![Coverage::Single(single.into())],
                    other => serde_json::from_value(other).map_err(D::Error::custom)?,
                };
                Task::Subset(coverage)
            }
            "set" => {
                let key = match parts.next() {
                    Some(serde_json::Value::String(key)) => key,
                    _ => return Err(D::Error::custom("set task needs a string key")),
                };
                let value = parts
                    .next()
                    .ok_or_else(|| D::Error::custom("set task needs a value"))?;
                Task::Set { key, value }
            }
            "validate" => Task::Validate,
            "version" => match parts.next() {
                None => Task::Version(VersionBump::default()),
                Some(serde_json::Value::String(which)) => {
                    Task::Version(which.parse().map_err(D::Error::custom)?)
                }
                Some(_) => return Err(D::Error::custom("version takes \"major\" or \"minor\"")),
            },
            _ => Task::Other(name),
        };
        Ok(task)
    }
}

/// Run a task list over a font, returning the transformed copy.
pub fn run_tasks(font: Font, tasks: &[Task]) -> Result<Font, GlyphsBuildError> {
    let mut font = font;
    for task in tasks {
        font = match task {
            Task::Map { mapping, options } => remap(&font, mapping, options)?,
            Task::Subset(coverage) => subset(&font, coverage)?,
            Task::Set { key, value } => font.with_value(key, value.clone())?,
            Task::Validate => {
                validate(&font)?;
                font
            }
            Task::Version(bump) => font.with_version_bump(*bump),
            Task::Other(name) => {
                log::warn!(
                    "Task type \"{}\" is unknown, should be one of \"map\", \"set\", \
                     \"subset\", \"validate\" or \"version\".",
                    name
                );
                font
            }
        };
    }
    Ok(font)
}

/// What a build reads: one file, several files, or files with per-source
/// task lists run before processing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LoadSpec {
    One(PathBuf),
    Many(Vec<PathBuf>),
    WithTasks(IndexMap<String, Vec<Task>>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Build {
    pub load: LoadSpec,
    #[serde(default)]
    pub process: Vec<Task>,
    pub write: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    pub builds: IndexMap<String, Build>,
}

/// Run one named build: load, per-source tasks, process tasks, write.
pub fn run_build(name: &str, build: &Build) -> Result<(), GlyphsBuildError> {
    log::info!("Running build \"{}\"...", name);
    let mut sources: Vec<Font> = Vec::new();
    match &build.load {
        LoadSpec::One(path) => sources.push(crate::load(path)?),
        LoadSpec::Many(paths) => {
            for path in paths {
                sources.push(crate::load(path)?);
            }
        }
        LoadSpec::WithTasks(map) => {
            for (path, tasks) in map {
                sources.push(run_tasks(crate::load(path)?, tasks)?);
            }
        }
    }
    if sources.len() > 1 {
        // TODO: merge multiple sources once a merge strategy exists
        return Err(GlyphsBuildError::UnsupportedMerge {
            build: name.to_string(),
        });
    }
    let font = sources.pop().ok_or_else(|| GlyphsBuildError::NoSources {
        build: name.to_string(),
    })?;
    let font = run_tasks(font, &build.process)?;
    log::info!("Writing to {}...", build.write.display());
    crate::write(&build.write, &font)?;
    log::info!("Finished build \"{}\"!", name);
    Ok(())
}

/// Run every build in a configuration, in order.
pub fn build(config: &BuildConfig) -> Result<(), GlyphsBuildError> {
    for (name, build) in &config.builds {
        run_build(name, build)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_task_deserialization() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[
                ["subset", "0041"],
                ["subset", [["0041", "005A"], "General Punctuation"]],
                ["map", {"0041": "0061"}, {"renameGlyphs": false}],
                ["set", "familyName", "Subset Font"],
                ["validate"],
                ["version", "major"],
                ["version"]
            ]"#,
        )
        .unwrap();
        assert_eq!(tasks.len(), 7);
        assert_eq!(tasks[0], Task::Subset(vec![Coverage::Single("0041".into())]));
        assert!(matches!(&tasks[2], Task::Map { options, .. } if !options.rename_glyphs));
        assert_eq!(tasks[5], Task::Version(VersionBump::Major));
        assert_eq!(tasks[6], Task::Version(VersionBump::Minor));
    }

    #[test]
    fn test_unknown_task_name_is_not_fatal() {
        let tasks: Vec<Task> = serde_json::from_str(r#"[["subet", "0041"]]"#).unwrap();
        assert_eq!(tasks[0], Task::Other("subet".to_string()));
        let font = Font::new("Test Font");
        let unchanged = run_tasks(font.clone(), &tasks).unwrap();
        assert_eq!(unchanged, font);
    }

    #[test]
    fn test_malformed_known_task_is_rejected() {
        assert!(serde_json::from_str::<Vec<Task>>(r#"[["map"]]"#).is_err());
        assert!(serde_json::from_str::<Vec<Task>>(r#"[["version", "biggest"]]"#).is_err());
        assert!(serde_json::from_str::<Vec<Task>>(r#"[[42]]"#).is_err());
    }

    #[test]
    fn test_run_tasks_sequences() {
        let mut font = Font::new("Test Font");
        font.version_major = 1;
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[["set", "designer", "Someone"], ["version", "minor"], ["validate"]]"#,
        )
        .unwrap();
        let result = run_tasks(font, &tasks).unwrap();
        assert_eq!(result.version_minor, 1);
        assert_eq!(
            result.rest.get("designer"),
            Some(&serde_json::json!("Someone"))
        );
    }
}
