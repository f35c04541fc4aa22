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

use crate::math::Extent2D;
use crate::renderer::CpuTexture;

/// A named image that can be applied to surfaces.
///
/// A material is owned by exactly one [`MaterialCollection`](super::MaterialCollection).
/// Its name keeps the case it was loaded with; lookups by name are
/// case-insensitive.
#[derive(Debug, Clone)]
pub struct Material {
    name: String,
    texture: CpuTexture,
}

impl Material {
    /// Creates a material from its name and decoded pixels.
    pub fn new(name: impl Into<String>, texture: CpuTexture) -> Self {
        Self {
            name: name.into(),
            texture,
        }
    }

    /// The name as it was loaded, for display.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The decoded pixels uploaded when the owning collection is prepared.
    pub fn texture(&self) -> &CpuTexture {
        &self.texture
    }

    /// Width and height in pixels.
    pub fn size(&self) -> Extent2D {
        Extent2D {
            width: self.texture.size.width,
            height: self.texture.size.height,
        }
    }
}
