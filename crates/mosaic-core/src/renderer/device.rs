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

use crate::math::dimension;
use crate::renderer::error::ResourceError;
use crate::renderer::texture::*;
use std::fmt::Debug;

/// The texture-facing part of a graphics backend.
///
/// Material collections allocate, upload and release their GPU resources
/// exclusively through this trait. Implementations are expected to be called
/// only while their rendering context is current on the calling thread.
pub trait GraphicsDevice: Send + Sync + Debug + 'static {
    /// Creates a new GPU texture.
    /// ## Arguments
    /// * `descriptor` - A reference to a `TextureDescriptor` containing the texture configuration.
    /// ## Returns
    /// A `Result` containing the ID of the created texture or an error if the creation fails.
    fn create_texture(&self, descriptor: &TextureDescriptor) -> Result<TextureId, ResourceError>;

    /// Destroys a GPU texture.
    /// ## Arguments
    /// * `id` - The ID of the texture to be destroyed.
    /// ## Returns
    /// A `Result` indicating success or failure of the operation.
    fn destroy_texture(&self, id: TextureId) -> Result<(), ResourceError>;

    /// Writes data to a GPU texture.
    /// ## Arguments
    /// * `texture_id` - The ID of the texture to write to.
    /// * `data` - A slice of bytes containing the data to be written.
    /// * `bytes_per_row` - The number of bytes per row in the texture data.
    /// * `offset` - The offset in the texture where the data will be written.
    /// * `size` - The size of the texture.
    /// ## Returns
    /// A `Result` indicating success or failure of the operation.
    fn write_texture(
        &self,
        texture_id: TextureId,
        data: &[u8],
        bytes_per_row: Option<u32>,
        offset: dimension::Origin3D,
        size: dimension::Extent3D,
    ) -> Result<(), ResourceError>;

    /// Creates a new sampler.
    /// ## Arguments
    /// * `descriptor` - A reference to a `SamplerDescriptor` containing the sampler configuration.
    /// ## Returns
    /// A `Result` containing the ID of the created sampler or an error if the creation fails.
    fn create_sampler(&self, descriptor: &SamplerDescriptor) -> Result<SamplerId, ResourceError>;

    /// Destroys a sampler.
    /// ## Arguments
    /// * `id` - The ID of the sampler to be destroyed.
    /// ## Returns
    /// A `Result` indicating success or failure of the operation.
    fn destroy_sampler(&self, id: SamplerId) -> Result<(), ResourceError>;
}
