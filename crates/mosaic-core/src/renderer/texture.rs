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

//! Defines data structures related to GPU texture and sampler resources.

use crate::math::Extent3D;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The format of the texels in a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// Four 8-bit unsigned normalized components (RGBA) in the sRGB color space.
    Rgba8UnormSrgb,
}

impl TextureFormat {
    /// Returns the size in bytes of a single pixel for this format.
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::Rgba8UnormSrgb => 4,
        }
    }
}

/// Defines the filtering mode for texture sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Point sampling. Returns the value of the nearest texel.
    Nearest,
    /// Linear interpolation. Returns a weighted average of the four nearest texels.
    #[default]
    Linear,
}

/// The minification and magnification filters applied to every prepared
/// material collection.
///
/// The material manager treats both values as opaque and passes them through
/// verbatim to collection preparation and re-binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// The filter used when the texture is smaller on screen than its resolution.
    pub min_filter: FilterMode,
    /// The filter used when the texture is larger on screen than its resolution.
    pub mag_filter: FilterMode,
}

impl FilterSettings {
    /// Creates filter settings from a minification and a magnification mode.
    pub fn new(min_filter: FilterMode, mag_filter: FilterMode) -> Self {
        Self {
            min_filter,
            mag_filter,
        }
    }

    /// Builds the sampler descriptor used to bind a collection with these settings.
    pub fn to_sampler_descriptor<'a>(&self, label: Option<Cow<'a, str>>) -> SamplerDescriptor<'a> {
        SamplerDescriptor {
            label,
            mag_filter: self.mag_filter,
            min_filter: self.min_filter,
        }
    }
}

/// A descriptor used to create a [`TextureId`].
#[derive(Debug, Clone)]
pub struct TextureDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// The dimensions (width, height, depth/layers) of the texture.
    pub size: Extent3D,
    /// The number of mipmap levels for the texture.
    pub mip_level_count: u32,
    /// The format of the texels in the texture.
    pub format: TextureFormat,
}

/// A descriptor used to create a [`SamplerId`].
/// A sampler defines how a shader will sample from a texture.
#[derive(Debug, Clone)]
pub struct SamplerDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// The filter mode for magnification.
    pub mag_filter: FilterMode,
    /// The filter mode for minification.
    pub min_filter: FilterMode,
}

/// A CPU-side representation of a decoded texture, ready to be uploaded to the GPU.
#[derive(Debug, Clone)]
pub struct CpuTexture {
    /// The raw pixel data (e.g., in RGBA format)
    pub pixels: Vec<u8>,
    /// The size of the texture
    pub size: Extent3D,
    /// The format of the pixel data
    pub format: TextureFormat,
    /// The number of mip levels
    pub mip_level_count: u32,
}

impl CpuTexture {
    /// Creates a single-level RGBA8 sRGB texture from raw pixels.
    pub fn rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            pixels,
            size: Extent3D {
                width,
                height,
                depth_or_array_layers: 1,
            },
            format: TextureFormat::Rgba8UnormSrgb,
            mip_level_count: 1,
        }
    }

    /// Creates a texture descriptor from this CPU texture data
    pub fn to_descriptor<'a>(&self, label: Option<Cow<'a, str>>) -> TextureDescriptor<'a> {
        TextureDescriptor {
            label,
            size: self.size,
            mip_level_count: self.mip_level_count,
            format: self.format,
        }
    }

    /// Gets the row size in bytes (important for texture upload alignment)
    pub fn row_size(&self) -> usize {
        let bytes_per_pixel = self.format.bytes_per_pixel();
        self.size.width as usize * bytes_per_pixel as usize
    }
}

/// An opaque handle to a GPU texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// An opaque handle to a GPU sampler resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplerId(pub usize);
