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

use super::{LoadError, MaterialCollection, MaterialConfig, ReconcileError};
use std::path::{Path, PathBuf};

/// A trait for types that can load a whole material collection from a path.
///
/// This represents the "Data Plane" part of material loading. Implementors are
/// responsible for the potentially expensive work of reading and decoding the
/// files behind `path`. A loader must not touch anything besides the
/// collection it returns.
pub trait CollectionLoader {
    /// Loads the collection stored at `path`.
    ///
    /// # Returns
    /// A loaded collection on success, or a [`LoadError`] describing why the
    /// collection could not be produced.
    fn load(&self, path: &Path, config: &MaterialConfig) -> Result<MaterialCollection, LoadError>;
}

/// A trait for types that can enumerate the collection paths of a project.
pub trait CollectionFinder {
    /// Returns the collection paths in precedence order (later paths win on
    /// name conflicts).
    fn find_collections(&self, config: &MaterialConfig) -> Result<Vec<PathBuf>, ReconcileError>;
}

impl<F> CollectionLoader for F
where
    F: Fn(&Path, &MaterialConfig) -> Result<MaterialCollection, LoadError>,
{
    fn load(&self, path: &Path, config: &MaterialConfig) -> Result<MaterialCollection, LoadError> {
        self(path, config)
    }
}
