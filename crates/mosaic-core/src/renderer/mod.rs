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

//! Provides the backend-agnostic texture contracts used by material collections.
//!
//! This module defines the "common language" between the material system and a
//! graphics backend: the [`GraphicsDevice`] trait, texture and sampler
//! descriptors, the filter settings, and the resource error type. The
//! [`HeadlessDevice`] implements the trait without a GPU.

pub mod device;
pub mod error;
pub mod headless;
pub mod texture;

// Re-export the most important traits and types for easier use.
pub use self::device::GraphicsDevice;
pub use self::error::ResourceError;
pub use self::headless::{DeviceStats, HeadlessDevice};
pub use self::texture::*;
