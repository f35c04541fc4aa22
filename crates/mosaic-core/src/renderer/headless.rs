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

//! An in-memory [`GraphicsDevice`] that performs no real GPU work.
//!
//! It keeps track of every live texture and sampler so callers can verify
//! when resources are created and released. It backs the sandbox tool and the
//! test suites.

use crate::math::dimension::{Extent3D, Origin3D};
use crate::renderer::device::GraphicsDevice;
use crate::renderer::error::ResourceError;
use crate::renderer::texture::*;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Cumulative resource counters of a [`HeadlessDevice`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceStats {
    /// Total number of textures ever created.
    pub textures_created: usize,
    /// Total number of textures destroyed.
    pub textures_destroyed: usize,
    /// Total number of samplers ever created.
    pub samplers_created: usize,
    /// Total number of samplers destroyed.
    pub samplers_destroyed: usize,
    /// Total number of bytes written into textures.
    pub bytes_uploaded: usize,
}

#[derive(Debug)]
struct TextureRecord {
    label: Option<String>,
    size: Extent3D,
    format: TextureFormat,
}

#[derive(Debug, Default)]
struct HeadlessState {
    next_id: usize,
    textures: HashMap<usize, TextureRecord>,
    samplers: HashMap<usize, FilterSettings>,
    texture_budget: Option<usize>,
    failing_samplers: usize,
    stats: DeviceStats,
}

/// A graphics device that records resources in memory instead of on a GPU.
#[derive(Debug, Default)]
pub struct HeadlessDevice {
    state: Mutex<HeadlessState>,
}

impl HeadlessDevice {
    /// Creates a new device with no live resources and no texture budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the number of textures that may be alive at the same time.
    ///
    /// Creating a texture beyond the budget fails with a backend error, which
    /// emulates a device running out of memory. `None` removes the limit.
    pub fn set_texture_budget(&self, budget: Option<usize>) {
        self.lock().texture_budget = budget;
    }

    /// Makes the next `count` sampler creations fail with a backend error.
    pub fn fail_next_samplers(&self, count: usize) {
        self.lock().failing_samplers = count;
    }

    /// Returns the cumulative resource counters.
    pub fn stats(&self) -> DeviceStats {
        self.lock().stats
    }

    /// Returns the number of textures currently alive.
    pub fn live_textures(&self) -> usize {
        self.lock().textures.len()
    }

    /// Returns the number of samplers currently alive.
    pub fn live_samplers(&self) -> usize {
        self.lock().samplers.len()
    }

    /// Returns the debug label a live texture was created with.
    pub fn texture_label(&self, id: TextureId) -> Option<String> {
        self.lock()
            .textures
            .get(&id.0)
            .and_then(|record| record.label.clone())
    }

    /// Returns the filters a live sampler was created with.
    pub fn sampler_filters(&self, id: SamplerId) -> Option<FilterSettings> {
        self.lock().samplers.get(&id.0).copied()
    }

    fn lock(&self) -> MutexGuard<'_, HeadlessState> {
        // The state stays consistent across a panic, so a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl GraphicsDevice for HeadlessDevice {
    fn create_texture(&self, descriptor: &TextureDescriptor) -> Result<TextureId, ResourceError> {
        let mut state = self.lock();
        if let Some(budget) = state.texture_budget {
            if state.textures.len() >= budget {
                return Err(ResourceError::BackendError(format!(
                    "texture budget of {budget} exhausted"
                )));
            }
        }

        let id = state.next_id;
        state.next_id += 1;
        state.textures.insert(
            id,
            TextureRecord {
                label: descriptor.label.as_ref().map(|label| label.to_string()),
                size: descriptor.size,
                format: descriptor.format,
            },
        );
        state.stats.textures_created += 1;
        Ok(TextureId(id))
    }

    fn destroy_texture(&self, id: TextureId) -> Result<(), ResourceError> {
        let mut state = self.lock();
        state
            .textures
            .remove(&id.0)
            .ok_or(ResourceError::InvalidHandle)?;
        state.stats.textures_destroyed += 1;
        Ok(())
    }

    fn write_texture(
        &self,
        texture_id: TextureId,
        data: &[u8],
        bytes_per_row: Option<u32>,
        offset: Origin3D,
        size: Extent3D,
    ) -> Result<(), ResourceError> {
        let mut state = self.lock();
        let record = state
            .textures
            .get(&texture_id.0)
            .ok_or(ResourceError::InvalidHandle)?;

        let right = offset.x.checked_add(size.width);
        let bottom = offset.y.checked_add(size.height);
        match (right, bottom) {
            (Some(right), Some(bottom))
                if right <= record.size.width && bottom <= record.size.height => {}
            _ => return Err(ResourceError::OutOfBounds),
        }

        let row = match bytes_per_row {
            Some(row) => row as usize,
            None => size.width as usize * record.format.bytes_per_pixel() as usize,
        };
        let needed = row
            .checked_mul(size.height as usize)
            .ok_or(ResourceError::OutOfBounds)?;
        if data.len() < needed {
            return Err(ResourceError::OutOfBounds);
        }

        state.stats.bytes_uploaded += data.len();
        Ok(())
    }

    fn create_sampler(&self, descriptor: &SamplerDescriptor) -> Result<SamplerId, ResourceError> {
        let mut state = self.lock();
        if state.failing_samplers > 0 {
            state.failing_samplers -= 1;
            return Err(ResourceError::BackendError(
                "sampler creation failed".to_string(),
            ));
        }

        let id = state.next_id;
        state.next_id += 1;
        state.samplers.insert(
            id,
            FilterSettings::new(descriptor.min_filter, descriptor.mag_filter),
        );
        state.stats.samplers_created += 1;
        Ok(SamplerId(id))
    }

    fn destroy_sampler(&self, id: SamplerId) -> Result<(), ResourceError> {
        let mut state = self.lock();
        state
            .samplers
            .remove(&id.0)
            .ok_or(ResourceError::InvalidHandle)?;
        state.stats.samplers_destroyed += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn descriptor(width: u32, height: u32) -> TextureDescriptor<'static> {
        CpuTexture::rgba8(width, height, vec![0; (width * height * 4) as usize])
            .to_descriptor(Some(Cow::Borrowed("test")))
    }

    #[test]
    fn textures_are_tracked_until_destroyed() {
        let device = HeadlessDevice::new();
        let id = device.create_texture(&descriptor(2, 2)).unwrap();
        assert_eq!(device.live_textures(), 1);
        assert_eq!(device.texture_label(id).as_deref(), Some("test"));

        device.destroy_texture(id).unwrap();
        assert_eq!(device.live_textures(), 0);
        assert_eq!(device.stats().textures_destroyed, 1);
    }

    #[test]
    fn destroying_twice_is_an_invalid_handle() {
        let device = HeadlessDevice::new();
        let id = device.create_texture(&descriptor(1, 1)).unwrap();
        device.destroy_texture(id).unwrap();
        assert_eq!(
            device.destroy_texture(id),
            Err(ResourceError::InvalidHandle)
        );
    }

    #[test]
    fn write_outside_texture_is_rejected() {
        let device = HeadlessDevice::new();
        let id = device.create_texture(&descriptor(2, 2)).unwrap();
        let size = Extent3D {
            width: 4,
            height: 2,
            depth_or_array_layers: 1,
        };
        assert_eq!(
            device.write_texture(id, &[0; 32], None, Origin3D::default(), size),
            Err(ResourceError::OutOfBounds)
        );
    }

    #[test]
    fn write_with_overflowing_offset_is_rejected() {
        let device = HeadlessDevice::new();
        let id = device.create_texture(&descriptor(2, 2)).unwrap();
        let offset = Origin3D {
            x: u32::MAX,
            y: 0,
            z: 0,
        };
        let size = Extent3D {
            width: 2,
            height: 2,
            depth_or_array_layers: 1,
        };
        assert_eq!(
            device.write_texture(id, &[0; 16], None, offset, size),
            Err(ResourceError::OutOfBounds)
        );
    }

    #[test]
    fn budget_limits_live_textures() {
        let device = HeadlessDevice::new();
        device.set_texture_budget(Some(1));
        let first = device.create_texture(&descriptor(1, 1)).unwrap();
        assert!(matches!(
            device.create_texture(&descriptor(1, 1)),
            Err(ResourceError::BackendError(_))
        ));

        device.destroy_texture(first).unwrap();
        assert!(device.create_texture(&descriptor(1, 1)).is_ok());
    }

    #[test]
    fn samplers_remember_their_filters() {
        let device = HeadlessDevice::new();
        let settings = FilterSettings::new(FilterMode::Nearest, FilterMode::Nearest);
        let id = device
            .create_sampler(&settings.to_sampler_descriptor(None))
            .unwrap();
        assert_eq!(device.sampler_filters(id), Some(settings));
        device.destroy_sampler(id).unwrap();
        assert_eq!(device.live_samplers(), 0);
    }

    #[test]
    fn injected_sampler_failures_are_consumed() {
        let device = HeadlessDevice::new();
        device.fail_next_samplers(1);
        let descriptor = FilterSettings::default().to_sampler_descriptor(None);

        assert!(matches!(
            device.create_sampler(&descriptor),
            Err(ResourceError::BackendError(_))
        ));
        assert!(device.create_sampler(&descriptor).is_ok());
        assert_eq!(device.stats().samplers_created, 1);
    }
}
