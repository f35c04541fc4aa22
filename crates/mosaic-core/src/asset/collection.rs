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

//! Material collections and their load/prepare state machine.

use super::{CollectionError, CollectionId, Material};
use crate::math::Origin3D;
use crate::renderer::{FilterSettings, GraphicsDevice, ResourceError, SamplerId, TextureId};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The lifecycle stage of a [`MaterialCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionState {
    /// A placeholder for a path that failed to load. It holds no materials.
    Unloaded,
    /// The materials are decoded in memory but have no GPU resources yet.
    Loaded,
    /// Every material has been uploaded and a sampler is bound.
    Prepared,
}

/// The GPU resources owned by a prepared collection.
///
/// Dropping the binding releases every resource exactly once.
#[derive(Debug)]
struct GpuBinding {
    device: Arc<dyn GraphicsDevice>,
    textures: Vec<TextureId>,
    sampler: Option<SamplerId>,
    filter: FilterSettings,
}

impl Drop for GpuBinding {
    fn drop(&mut self) {
        for id in self.textures.drain(..) {
            if let Err(e) = self.device.destroy_texture(id) {
                log::warn!("Failed to release texture {:?}: {}", id, e);
            }
        }
        if let Some(id) = self.sampler.take() {
            if let Err(e) = self.device.destroy_sampler(id) {
                log::warn!("Failed to release sampler {:?}: {}", id, e);
            }
        }
    }
}

/// An ordered group of materials loaded together from one source path.
///
/// A collection is not `Clone`: it is the sole owner of its materials and of
/// the GPU resources created for them, which are released when it is dropped.
#[derive(Debug)]
pub struct MaterialCollection {
    id: CollectionId,
    path: PathBuf,
    materials: Vec<Material>,
    loaded: bool,
    gpu: Option<GpuBinding>,
}

impl MaterialCollection {
    /// Creates a loaded collection holding `materials` in order.
    pub fn new(path: impl Into<PathBuf>, materials: Vec<Material>) -> Self {
        Self {
            id: CollectionId::new(),
            path: path.into(),
            materials,
            loaded: true,
            gpu: None,
        }
    }

    /// Creates an empty placeholder for a path that could not be loaded.
    pub fn unloaded(path: impl Into<PathBuf>) -> Self {
        Self {
            id: CollectionId::new(),
            path: path.into(),
            materials: Vec::new(),
            loaded: false,
            gpu: None,
        }
    }

    /// The identifier of this instance.
    pub fn id(&self) -> CollectionId {
        self.id
    }

    /// The path this collection was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The materials in load order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Returns `true` unless this is a placeholder for a failed load.
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// Returns `true` once the materials have been uploaded.
    pub fn prepared(&self) -> bool {
        self.gpu.is_some()
    }

    /// The current lifecycle stage.
    pub fn state(&self) -> CollectionState {
        match (self.loaded, &self.gpu) {
            (false, _) => CollectionState::Unloaded,
            (true, None) => CollectionState::Loaded,
            (true, Some(_)) => CollectionState::Prepared,
        }
    }

    /// The filters the collection is currently bound with, if prepared.
    pub fn filter_settings(&self) -> Option<FilterSettings> {
        self.gpu.as_ref().map(|binding| binding.filter)
    }

    /// The GPU texture of the material at `index`, if prepared.
    pub fn texture_id(&self, index: usize) -> Option<TextureId> {
        self.gpu
            .as_ref()
            .and_then(|binding| binding.textures.get(index).copied())
    }

    /// The sampler shared by all materials of the collection, if prepared.
    pub fn sampler_id(&self) -> Option<SamplerId> {
        self.gpu.as_ref().and_then(|binding| binding.sampler)
    }

    /// Uploads every material to `device` and binds a sampler built from `filter`.
    ///
    /// This succeeds at most once per instance. If any resource cannot be
    /// created, everything created so far is released and the collection stays
    /// `Loaded`.
    ///
    /// # Errors
    /// - [`CollectionError::NotLoaded`] for a placeholder.
    /// - [`CollectionError::AlreadyPrepared`] if the collection already owns GPU resources.
    /// - [`CollectionError::Resource`] if the device fails.
    pub fn prepare(
        &mut self,
        device: &Arc<dyn GraphicsDevice>,
        filter: FilterSettings,
    ) -> Result<(), CollectionError> {
        if !self.loaded {
            return Err(CollectionError::NotLoaded {
                path: self.path.clone(),
            });
        }
        if self.gpu.is_some() {
            return Err(CollectionError::AlreadyPrepared {
                path: self.path.clone(),
            });
        }

        let mut binding = GpuBinding {
            device: Arc::clone(device),
            textures: Vec::with_capacity(self.materials.len()),
            sampler: None,
            filter,
        };

        for material in &self.materials {
            let texture = material.texture();
            let id = device.create_texture(
                &texture.to_descriptor(Some(Cow::Borrowed(material.name()))),
            )?;
            binding.textures.push(id);
            let bytes_per_row =
                u32::try_from(texture.row_size()).map_err(|_| ResourceError::OutOfBounds)?;
            device.write_texture(
                id,
                &texture.pixels,
                Some(bytes_per_row),
                Origin3D::default(),
                texture.size,
            )?;
        }

        let label = self.path.display().to_string();
        let sampler = device.create_sampler(&filter.to_sampler_descriptor(Some(label.into())))?;
        binding.sampler = Some(sampler);

        self.gpu = Some(binding);
        Ok(())
    }

    /// Re-binds the sampler of a prepared collection with new filters.
    ///
    /// Does nothing for a collection that is not prepared; it picks up the
    /// current filters when it is prepared later.
    ///
    /// On failure the collection keeps its previous sampler and filters. A
    /// previous sampler that cannot be released is only logged.
    pub fn set_filter_mode(&mut self, filter: FilterSettings) -> Result<(), CollectionError> {
        let Some(binding) = self.gpu.as_mut() else {
            return Ok(());
        };

        let label = self.path.display().to_string();
        let sampler = binding
            .device
            .create_sampler(&filter.to_sampler_descriptor(Some(label.into())))?;
        let previous = binding.sampler.replace(sampler);
        binding.filter = filter;

        if let Some(previous) = previous {
            if let Err(e) = binding.device.destroy_sampler(previous) {
                log::warn!("Failed to release sampler {:?}: {}", previous, e);
            }
        }
        Ok(())
    }
}
