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

//! Defines the error types of the material system.

use crate::renderer::ResourceError;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single material collection could not be loaded.
///
/// This is never fatal to a reconciliation: the collection is replaced by an
/// unloaded placeholder and the remaining paths are still processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    /// The path of the collection that failed to load.
    pub path: PathBuf,
    /// A human-readable description of the failure.
    pub message: String,
}

impl LoadError {
    /// Creates a load error for `path`.
    pub fn new(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to load material collection '{}': {}",
            self.path.display(),
            self.message
        )
    }
}

impl std::error::Error for LoadError {}

/// The set of collection paths could not be determined at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileError {
    /// A human-readable description of the failure.
    pub message: String,
}

impl ReconcileError {
    /// Creates a reconciliation error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ReconcileError {}

/// An operation on a [`MaterialCollection`](super::MaterialCollection) was
/// rejected or failed on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The collection is an unloaded placeholder and has nothing to upload.
    NotLoaded {
        /// The path of the collection.
        path: PathBuf,
    },
    /// The collection already owns GPU resources.
    AlreadyPrepared {
        /// The path of the collection.
        path: PathBuf,
    },
    /// The graphics device failed to create or write a resource.
    Resource(ResourceError),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::NotLoaded { path } => {
                write!(f, "Material collection '{}' is not loaded", path.display())
            }
            CollectionError::AlreadyPrepared { path } => {
                write!(
                    f,
                    "Material collection '{}' is already prepared",
                    path.display()
                )
            }
            CollectionError::Resource(err) => write!(f, "GPU resource error: {err}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectionError::Resource(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResourceError> for CollectionError {
    fn from(err: ResourceError) -> Self {
        CollectionError::Resource(err)
    }
}
