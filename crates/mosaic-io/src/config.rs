// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::IoError;
use mosaic_core::asset::MaterialConfig;
use mosaic_core::renderer::FilterSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Represents the structure of the `Materials.toml` project file.
///
/// ```toml
/// [materials]
/// root = "textures"
/// extensions = ["png", "jpg"]
/// excludes = ["*_norm"]
///
/// [filter]
/// min_filter = "linear"
/// mag_filter = "nearest"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Where collections are found and which files they contain.
    pub materials: MaterialConfig,
    /// The filters every prepared collection is bound with.
    pub filter: FilterSettings,
}

impl ProjectConfig {
    /// Parses a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads the configuration file at `path`.
    ///
    /// A relative `materials.root` is resolved against the directory that
    /// contains the file.
    pub fn load(path: &Path) -> Result<Self, IoError> {
        let text = std::fs::read_to_string(path).map_err(|source| IoError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text).map_err(|source| IoError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        if config.materials.root.is_relative() {
            if let Some(base) = path.parent() {
                config.materials.root = base.join(&config.materials.root);
            }
        }
        Ok(config)
    }

    /// Reads the configuration file at `path`, or returns the defaults if it
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, IoError> {
        if !path.exists() {
            log::info!(
                "No project config at '{}', using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::renderer::FilterMode;
    use std::path::PathBuf;

    #[test]
    fn parses_full_config() {
        let config = ProjectConfig::from_toml_str(
            r#"
            [materials]
            root = "textures"
            extensions = ["png"]
            excludes = ["*_norm"]

            [filter]
            min_filter = "nearest"
            mag_filter = "linear"
            "#,
        )
        .unwrap();

        assert_eq!(config.materials.root, PathBuf::from("textures"));
        assert_eq!(config.materials.extensions, vec!["png".to_string()]);
        assert_eq!(config.materials.excludes, vec!["*_norm".to_string()]);
        assert_eq!(config.filter.min_filter, FilterMode::Nearest);
        assert_eq!(config.filter.mag_filter, FilterMode::Linear);
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config = ProjectConfig::from_toml_str("[filter]\nmag_filter = \"nearest\"\n").unwrap();
        assert_eq!(config.materials, MaterialConfig::default());
        assert_eq!(config.filter.min_filter, FilterMode::Linear);
        assert_eq!(config.filter.mag_filter, FilterMode::Nearest);
    }

    #[test]
    fn unknown_filter_is_rejected() {
        assert!(ProjectConfig::from_toml_str("[filter]\nmin_filter = \"cubic\"\n").is_err());
    }

    #[test]
    fn relative_root_is_resolved_next_to_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Materials.toml");
        std::fs::write(&path, "[materials]\nroot = \"textures\"\n").unwrap();

        let config = ProjectConfig::load(&path).unwrap();
        assert_eq!(config.materials.root, dir.path().join("textures"));
    }

    #[test]
    fn absent_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProjectConfig::load_or_default(&dir.path().join("Materials.toml")).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Materials.toml");
        std::fs::write(&path, "[materials\n").unwrap();

        let err = ProjectConfig::load(&path).unwrap_err();
        assert!(matches!(err, IoError::Config { .. }));
        assert!(err.to_string().contains("Materials.toml"));
    }
}
