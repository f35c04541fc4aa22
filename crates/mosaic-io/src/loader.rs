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

//! Loading material collections from directories of image files.

use crate::IoError;
use mosaic_core::asset::{CollectionLoader, LoadError, Material, MaterialCollection, MaterialConfig};
use mosaic_core::renderer::CpuTexture;
use std::path::Path;
use walkdir::WalkDir;

/// Loads a material collection from a directory.
///
/// Every file directly inside the directory whose extension is accepted by
/// the [`MaterialConfig`] becomes a material named after the file stem, in
/// file name order. Excluded names are skipped, as are files that fail to
/// decode (with a warning), so one broken image does not discard the whole
/// collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryCollectionLoader;

impl DirectoryCollectionLoader {
    /// Creates a new loader.
    pub fn new() -> Self {
        Self
    }

    fn read_materials(&self, path: &Path, config: &MaterialConfig) -> Result<Vec<Material>, IoError> {
        if !path.is_dir() {
            return Err(IoError::NotADirectory(path.to_path_buf()));
        }

        let mut materials = Vec::new();
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| IoError::Walk {
                path: path.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() || !config.accepts_extension(entry.path()) {
                continue;
            }

            let Some(name) = entry.path().file_stem().and_then(|stem| stem.to_str()) else {
                log::warn!("Skipping material with non UTF-8 name: {}", entry.path().display());
                continue;
            };
            if config.is_excluded(name) {
                log::debug!("Skipping excluded material '{}'", name);
                continue;
            }

            match decode_material(entry.path(), name) {
                Ok(material) => materials.push(material),
                Err(e) => log::warn!("{}", e),
            }
        }
        Ok(materials)
    }
}

impl CollectionLoader for DirectoryCollectionLoader {
    fn load(&self, path: &Path, config: &MaterialConfig) -> Result<MaterialCollection, LoadError> {
        let materials = self
            .read_materials(path, config)
            .map_err(|e| LoadError::new(path, e.to_string()))?;
        Ok(MaterialCollection::new(path, materials))
    }
}

/// Decodes one image file into an RGBA8 material.
fn decode_material(path: &Path, name: &str) -> Result<Material, IoError> {
    let bytes = std::fs::read(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let img = image::load_from_memory(&bytes).map_err(|source| IoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    // Convert to RGBA8 (keep in sRGB space)
    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    Ok(Material::new(
        name,
        CpuTexture::rgba8(width, height, rgba_img.into_raw()),
    ))
}
