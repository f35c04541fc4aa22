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
use mosaic_core::asset::{CollectionFinder, MaterialConfig, ReconcileError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds material collections as the immediate subdirectories of the
/// configured root, sorted by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryCollectionFinder;

impl DirectoryCollectionFinder {
    /// Creates a new finder.
    pub fn new() -> Self {
        Self
    }

    fn list_directories(&self, root: &Path) -> Result<Vec<PathBuf>, IoError> {
        if !root.is_dir() {
            return Err(IoError::NotADirectory(root.to_path_buf()));
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| IoError::Walk {
                path: root.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_dir() {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }
}

impl CollectionFinder for DirectoryCollectionFinder {
    fn find_collections(&self, config: &MaterialConfig) -> Result<Vec<PathBuf>, ReconcileError> {
        self.list_directories(&config.root)
            .map_err(|e| ReconcileError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_sorted_subdirectories_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("zeta")).unwrap();
        std::fs::create_dir(dir.path().join("alpha")).unwrap();
        std::fs::create_dir_all(dir.path().join("alpha/nested")).unwrap();
        std::fs::write(dir.path().join("readme.txt"), "").unwrap();

        let config = MaterialConfig {
            root: dir.path().to_path_buf(),
            ..Default::default()
        };
        let paths = DirectoryCollectionFinder::new()
            .find_collections(&config)
            .unwrap();

        assert_eq!(
            paths,
            vec![dir.path().join("alpha"), dir.path().join("zeta")]
        );
    }

    #[test]
    fn missing_root_is_a_reconcile_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = MaterialConfig {
            root: dir.path().join("nowhere"),
            ..Default::default()
        };

        let err = DirectoryCollectionFinder::new()
            .find_collections(&config)
            .unwrap_err();
        assert!(err.message.contains("nowhere"));
    }
}
