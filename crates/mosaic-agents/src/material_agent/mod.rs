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

//! Acts as the agent for the material subsystem.
//!
//! This module provides the high-level logic for material management. It
//! decides which collections are active, when they are loaded, uploaded and
//! released, and which material a name resolves to, but delegates the actual
//! reading and decoding of files to a `CollectionLoader` and all GPU work to
//! a `GraphicsDevice`.
//!
//! The entry point is the [`MaterialManager`].

mod index;
mod manager;

pub use index::*;
pub use manager::*;
