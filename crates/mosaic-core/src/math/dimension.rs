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

//! Provides structs for representing extents (sizes) and origins (offsets) of textures.
//!
//! They use integer (`u32`) components, making them suitable for pixel-based
//! coordinates and sizes.

/// A two-dimensional extent, typically the width and height of a material image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent2D {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
}

/// A three-dimensional extent, representing width, height, and depth.
///
/// Material textures are always 2D, so their depth is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent3D {
    /// The width component of the extent.
    pub width: u32,
    /// The height component of the extent.
    pub height: u32,
    /// The depth or number of array layers.
    pub depth_or_array_layers: u32,
}

impl From<Extent2D> for Extent3D {
    fn from(extent: Extent2D) -> Self {
        Self {
            width: extent.width,
            height: extent.height,
            depth_or_array_layers: 1,
        }
    }
}

/// A three-dimensional origin, representing an (x, y, z) offset into a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Origin3D {
    /// The x-coordinate of the origin.
    pub x: u32,
    /// The y-coordinate of the origin.
    pub y: u32,
    /// The z-coordinate or array layer of the origin.
    pub z: u32,
}
