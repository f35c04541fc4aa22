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

//! The case-insensitive name index over a list of material collections.

use mosaic_core::asset::MaterialCollection;
use std::collections::BTreeMap;

/// The position of a material inside the collection list it was indexed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialRef {
    /// Position of the owning collection.
    pub collection: usize,
    /// Position of the material inside that collection.
    pub material: usize,
}

/// Maps lower-cased material names to the material that wins for that name.
///
/// Collections are visited in order and materials in load order, so a later
/// collection (or a later material of the same collection) overrides an
/// earlier one with the same name. The index stores positions only and is
/// valid for exactly the slice it was last rebuilt from.
#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    by_name: BTreeMap<String, MaterialRef>,
    flat: Vec<MaterialRef>,
}

impl NameIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of the index with the materials of `collections`.
    pub fn rebuild(&mut self, collections: &[MaterialCollection]) {
        self.by_name.clear();

        for (collection_index, collection) in collections.iter().enumerate() {
            for (material_index, material) in collection.materials().iter().enumerate() {
                self.by_name.insert(
                    normalize(material.name()),
                    MaterialRef {
                        collection: collection_index,
                        material: material_index,
                    },
                );
            }
        }

        // Sorted by key, so enumeration order does not depend on hashing.
        self.flat = self.by_name.values().copied().collect();
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.by_name.clear();
        self.flat.clear();
    }

    /// Looks up the winning material for `name`, ignoring case.
    pub fn find(&self, name: &str) -> Option<MaterialRef> {
        self.by_name.get(&normalize(name)).copied()
    }

    /// Every winning material, ordered by lower-cased name.
    pub fn refs(&self) -> &[MaterialRef] {
        &self.flat
    }

    /// The number of distinct names.
    pub fn len(&self) -> usize {
        self.flat.len()
    }

    /// Returns `true` if no material is indexed.
    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}
