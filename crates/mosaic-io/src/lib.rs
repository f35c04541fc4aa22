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

//! # Mosaic IO
//!
//! Filesystem services for the material system: finding collection
//! directories, decoding their images into materials, and reading the
//! `Materials.toml` project configuration.

#![warn(missing_docs)]

mod config;
mod discovery;
mod error;
mod loader;

pub use config::ProjectConfig;
pub use discovery::DirectoryCollectionFinder;
pub use error::IoError;
pub use loader::DirectoryCollectionLoader;
