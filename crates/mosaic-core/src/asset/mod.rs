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

//! Provides the foundational traits and types for Mosaic's material system.
//!
//! This module defines the "common language" for all material-related
//! operations. It contains the contracts that loaders implement and the
//! material manager consumes, but it has no knowledge of how collections are
//! found or decoded on disk.
//!
//! The key components are:
//! - [`Material`] and [`MaterialCollection`]: named images grouped by the path
//!   they were loaded from, with the collection's load/prepare state machine.
//! - [`CollectionLoader`] and [`CollectionFinder`]: the interfaces to the
//!   filesystem and decoder subsystem.

mod collection;
mod config;
mod error;
mod loader;
mod material;
mod uuid;

pub use collection::*;
pub use config::*;
pub use error::*;
pub use loader::*;
pub use material::*;
pub use uuid::*;
