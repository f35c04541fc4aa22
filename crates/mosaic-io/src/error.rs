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

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading material files and project configuration.
#[derive(Debug, Error)]
pub enum IoError {
    /// A file could not be read from disk.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file was read but is not a decodable image.
    #[error("Failed to decode image '{}': {source}", path.display())]
    Decode {
        /// The file that failed to decode.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// A directory could not be traversed.
    #[error("Failed to list '{}': {source}", path.display())]
    Walk {
        /// The directory being listed.
        path: PathBuf,
        /// The underlying traversal error.
        #[source]
        source: walkdir::Error,
    },

    /// A path expected to be a directory is missing or is a file.
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The project configuration is not valid TOML for [`ProjectConfig`](crate::ProjectConfig).
    #[error("Failed to parse config '{}': {source}", path.display())]
    Config {
        /// The configuration file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: toml::de::Error,
    },
}
