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

//! The MaterialManager owns the active material collections and schedules
//! their GPU work.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mosaic_core::asset::{
    CollectionFinder, CollectionId, CollectionLoader, Material, MaterialCollection,
    MaterialConfig, ReconcileError,
};
use mosaic_core::renderer::{FilterSettings, GraphicsDevice};

use super::index::NameIndex;

/// What a call to [`MaterialManager::commit`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    /// Prepared collections re-bound with new filter settings.
    pub rebound: usize,
    /// Collections uploaded to the device.
    pub prepared: usize,
    /// Superseded collections whose resources were released.
    pub released: usize,
    /// Collections whose prepare or re-bind failed. Both are retried by the
    /// next commit.
    pub failed: Vec<PathBuf>,
}

impl CommitReport {
    /// Returns `true` if the commit had nothing to do.
    pub fn is_empty(&self) -> bool {
        self.rebound == 0 && self.prepared == 0 && self.released == 0 && self.failed.is_empty()
    }
}

/// Manages the ordered set of active material collections.
///
/// Loading happens eagerly inside [`set_collections`](Self::set_collections).
/// Everything that touches the GPU (uploads, sampler re-binds, releases) is
/// deferred until [`commit`](Self::commit), which must be called while the
/// device's context is current.
///
/// Later collections take precedence over earlier ones when two materials
/// share a name. The name index is rebuilt at the end of every operation
/// that changes the collection list.
#[derive(Debug, Default)]
pub struct MaterialManager {
    collections: Vec<MaterialCollection>,
    to_prepare: Vec<CollectionId>,
    to_remove: Vec<MaterialCollection>,
    index: NameIndex,
    filter: FilterSettings,
    filter_dirty: bool,
}

impl MaterialManager {
    /// Creates an empty manager that prepares collections with `filter`.
    pub fn new(filter: FilterSettings) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    /// Finds the project's collection paths with `finder` and reconciles
    /// against them.
    ///
    /// If the paths cannot be determined, the error is logged and the manager
    /// reconciles against an empty list, scheduling every current collection
    /// for removal.
    pub fn reload<F, L>(&mut self, finder: &F, loader: &L, config: &MaterialConfig)
    where
        F: CollectionFinder + ?Sized,
        L: CollectionLoader + ?Sized,
    {
        self.reload_with(finder, loader, config, |_| Vec::new());
    }

    /// Like [`reload`](Self::reload), but `recover` chooses the paths to
    /// reconcile against when the finder fails.
    pub fn reload_with<F, L, R>(
        &mut self,
        finder: &F,
        loader: &L,
        config: &MaterialConfig,
        recover: R,
    ) where
        F: CollectionFinder + ?Sized,
        L: CollectionLoader + ?Sized,
        R: FnOnce(&ReconcileError) -> Vec<PathBuf>,
    {
        match finder.find_collections(config) {
            Ok(paths) => self.set_collections(paths, loader, config),
            Err(e) => {
                log::error!("Could not reload material collections: {}", e);
                let paths = recover(&e);
                self.set_collections(paths, loader, config);
            }
        }
    }

    /// Reconciles the active collections against `paths`, in order.
    ///
    /// A collection that is already loaded from one of the paths is kept as
    /// is. Every other path is loaded with `loader`; a failed load leaves an
    /// unloaded placeholder at that position. Collections whose paths are no
    /// longer requested are scheduled for release at the next commit.
    ///
    /// A placeholder from an earlier failure is loaded again. Only the first
    /// failure of a path is reported as an error.
    pub fn set_collections<I, L>(&mut self, paths: I, loader: &L, config: &MaterialConfig)
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
        L: CollectionLoader + ?Sized,
    {
        let mut previous = std::mem::take(&mut self.collections);
        self.to_prepare.clear();

        for path in paths {
            let path = path.as_ref();
            let existing = previous.iter().position(|c| c.path() == path);

            if let Some(position) = existing.filter(|&i| previous[i].loaded()) {
                let collection = previous.remove(position);
                self.add_collection(collection);
                continue;
            }

            let collection = match loader.load(path, config) {
                Ok(collection) => {
                    if !collection.materials().is_empty() {
                        log::info!("Loaded material collection '{}'", path.display());
                    }
                    collection
                }
                Err(e) => {
                    if existing.is_none() {
                        log::error!(
                            "Could not load material collection '{}': {}",
                            path.display(),
                            e.message
                        );
                    } else {
                        log::debug!(
                            "Material collection '{}' still fails to load: {}",
                            path.display(),
                            e.message
                        );
                    }
                    MaterialCollection::unloaded(path)
                }
            };

            if let Some(position) = existing {
                self.to_remove.push(previous.remove(position));
            }
            self.add_collection(collection);
        }

        self.index.rebuild(&self.collections);
        self.to_remove.append(&mut previous);
    }

    /// Appends already built collections after the current ones.
    pub fn insert_collections(&mut self, collections: Vec<MaterialCollection>) {
        for collection in collections {
            self.add_collection(collection);
        }
        self.index.rebuild(&self.collections);
    }

    fn add_collection(&mut self, collection: MaterialCollection) {
        if collection.loaded() && !collection.prepared() {
            self.to_prepare.push(collection.id());
        }
        log::debug!(
            "Added material collection '{}'",
            collection.path().display()
        );
        self.collections.push(collection);
    }

    /// Drops every active collection immediately, releasing its GPU
    /// resources now rather than at the next commit.
    ///
    /// Collections already scheduled for removal and the filter settings are
    /// left untouched.
    pub fn clear(&mut self) {
        self.collections.clear();
        self.to_prepare.clear();
        self.index.clear();
    }

    /// Changes the filters. Prepared collections are re-bound at the next commit.
    pub fn set_filter_mode(&mut self, filter: FilterSettings) {
        self.filter = filter;
        self.filter_dirty = true;
    }

    /// Applies all deferred GPU work on `device`.
    ///
    /// In order: re-binds prepared collections if the filters changed,
    /// prepares newly added collections, then releases superseded ones.
    /// Failed re-binds and failed prepares are attempted again by the next
    /// commit.
    pub fn commit(&mut self, device: &Arc<dyn GraphicsDevice>) -> CommitReport {
        let mut report = CommitReport::default();
        let filter = self.filter;

        if self.filter_dirty {
            let mut retry = false;
            let stale = self
                .collections
                .iter_mut()
                .filter(|c| c.prepared() && c.filter_settings() != Some(filter));
            for collection in stale {
                match collection.set_filter_mode(filter) {
                    Ok(()) => report.rebound += 1,
                    Err(e) => {
                        log::warn!(
                            "Could not re-bind material collection '{}': {}",
                            collection.path().display(),
                            e
                        );
                        report.failed.push(collection.path().to_path_buf());
                        retry = true;
                    }
                }
            }
            // Collections still bound with old filters are retried next commit.
            self.filter_dirty = retry;
        }

        for id in std::mem::take(&mut self.to_prepare) {
            // Identifiers of collections that are no longer resident match nothing.
            let Some(collection) = self.collections.iter_mut().find(|c| c.id() == id) else {
                continue;
            };
            if collection.prepared() {
                continue;
            }

            match collection.prepare(device, filter) {
                Ok(()) => report.prepared += 1,
                Err(e) => {
                    log::warn!(
                        "Could not prepare material collection '{}': {}",
                        collection.path().display(),
                        e
                    );
                    report.failed.push(collection.path().to_path_buf());
                    self.to_prepare.push(id);
                }
            }
        }

        report.released = self.to_remove.len();
        self.to_remove.clear();

        if !report.is_empty() {
            log::debug!(
                "Committed material changes: {} re-bound, {} prepared, {} released",
                report.rebound,
                report.prepared,
                report.released
            );
        }
        report
    }

    /// Looks up a material by name, ignoring case.
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.index.find(name).and_then(|r| {
            self.collections
                .get(r.collection)
                .and_then(|c| c.materials().get(r.material))
        })
    }

    /// Every material that wins for its name, ordered by lower-cased name.
    pub fn materials(&self) -> impl Iterator<Item = &Material> + '_ {
        self.index.refs().iter().filter_map(move |r| {
            self.collections
                .get(r.collection)
                .and_then(|c| c.materials().get(r.material))
        })
    }

    /// The active collections in precedence order.
    pub fn collections(&self) -> &[MaterialCollection] {
        &self.collections
    }

    /// The active collection loaded from `path`, if any.
    pub fn collection(&self, path: impl AsRef<Path>) -> Option<&MaterialCollection> {
        let path = path.as_ref();
        self.collections.iter().find(|c| c.path() == path)
    }

    /// The number of collections waiting to be prepared.
    pub fn pending_preparations(&self) -> usize {
        self.to_prepare.len()
    }

    /// The number of collections waiting to be released.
    pub fn pending_removals(&self) -> usize {
        self.to_remove.len()
    }

    /// The filters used for preparing and re-binding collections.
    pub fn filter_settings(&self) -> FilterSettings {
        self.filter
    }
}
