//! Configuration schema types for `xfl.toml`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project directories section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Input project directory (holds `DOMDocument.xml` and `library/`)
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Output directory for the JSON descriptor and copied media
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { input: default_input(), output: default_output() }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("input")
}

fn default_output() -> PathBuf {
    PathBuf::from("output")
}

/// Conversion behavior section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Pretty-print the output JSON
    #[serde(default)]
    pub pretty_json: bool,
    /// Copy `library/media` into the output directory
    #[serde(default = "default_copy_media")]
    pub copy_media: bool,
    /// Worker pool size for symbol extraction (default: available parallelism)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub jobs: Option<usize>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self { pretty_json: false, copy_media: default_copy_media(), jobs: None }
    }
}

fn default_copy_media() -> bool {
    true
}

/// Complete `xfl.toml` configuration.
///
/// Passed explicitly to the pipeline; there is no ambient global state, so
/// tests can vary configuration freely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub convert: ConvertConfig,
}

impl Config {
    /// Root document filename inside the input directory.
    pub const ROOT_DOCUMENT: &'static str = "DOMDocument.xml";
    /// Library directory name inside the input directory.
    pub const LIBRARY_DIR: &'static str = "library";
    /// Media directory name inside the library (and the output).
    pub const MEDIA_DIR: &'static str = "media";

    /// Path of the root document.
    pub fn root_document_path(&self) -> PathBuf {
        self.project.input.join(Self::ROOT_DOCUMENT)
    }

    /// Path of the symbol library directory.
    pub fn library_dir(&self) -> PathBuf {
        self.project.input.join(Self::LIBRARY_DIR)
    }

    /// Path of the input media assets.
    pub fn input_media_dir(&self) -> PathBuf {
        self.library_dir().join(Self::MEDIA_DIR)
    }

    /// Path of the output media copy.
    pub fn output_media_dir(&self) -> PathBuf {
        self.project.output.join(Self::MEDIA_DIR)
    }

    /// Path of the serialized descriptor for a given entity name.
    pub fn descriptor_path(&self, entity_name: &str) -> PathBuf {
        self.project.output.join(format!("{}.json", entity_name))
    }

    /// Rebase relative project directories onto a config file's directory.
    pub fn rebase_on(&mut self, dir: &Path) {
        if self.project.input.is_relative() {
            self.project.input = dir.join(&self.project.input);
        }
        if self.project.output.is_relative() {
            self.project.output = dir.join(&self.project.output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.project.input, PathBuf::from("input"));
        assert_eq!(config.project.output, PathBuf::from("output"));
        assert!(!config.convert.pretty_json);
        assert!(config.convert.copy_media);
        assert!(config.convert.jobs.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [project]
            input = "assets/zombie"

            [convert]
            pretty_json = true
            jobs = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.project.input, PathBuf::from("assets/zombie"));
        assert_eq!(config.project.output, PathBuf::from("output"));
        assert!(config.convert.pretty_json);
        assert_eq!(config.convert.jobs, Some(4));
    }

    #[test]
    fn test_derived_paths() {
        let config = Config::default();
        assert_eq!(config.root_document_path(), PathBuf::from("input/DOMDocument.xml"));
        assert_eq!(config.input_media_dir(), PathBuf::from("input/library/media"));
        assert_eq!(config.output_media_dir(), PathBuf::from("output/media"));
        assert_eq!(config.descriptor_path("zombie"), PathBuf::from("output/zombie.json"));
    }
}
