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

//! # Mosaic Agents
//!
//! High-level managers that drive the core contracts. The material agent keeps
//! the set of active material collections reconciled with the project and
//! schedules their GPU work around an explicit commit point.

#![warn(missing_docs)]

pub mod material_agent;

pub use material_agent::{CommitReport, MaterialManager, NameIndex};
