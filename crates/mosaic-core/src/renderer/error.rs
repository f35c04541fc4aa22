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

//! Defines the error type for GPU resource operations.

use std::fmt;

/// An error related to the creation or use of a GPU resource (textures, samplers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The handle or ID used to reference a resource is invalid.
    InvalidHandle,
    /// An error originating from the specific graphics backend implementation.
    BackendError(String),
    /// An attempt was made to access a resource out of its bounds.
    OutOfBounds,
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::InvalidHandle => write!(f, "Invalid resource handle or ID."),
            ResourceError::BackendError(msg) => {
                write!(f, "Backend-specific resource error: {msg}")
            }
            ResourceError::OutOfBounds => {
                write!(f, "Resource access out of bounds.")
            }
        }
    }
}

impl std::error::Error for ResourceError {}
