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

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Describes where material collections live and which files they consist of.
///
/// This is handed verbatim to every [`CollectionLoader`](super::CollectionLoader)
/// and [`CollectionFinder`](super::CollectionFinder) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    /// The directory whose subdirectories are material collections.
    pub root: PathBuf,
    /// File extensions (without the dot) that are decoded as materials.
    pub extensions: Vec<String>,
    /// Glob patterns (`*` and `?`) of material names that are never loaded.
    pub excludes: Vec<String>,
}

impl Default for MaterialConfig {
    /// Points to `resources/textures` and accepts the common image formats.
    fn default() -> Self {
        Self {
            root: PathBuf::from("resources/textures"),
            extensions: ["png", "jpg", "jpeg", "bmp", "tga"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            excludes: Vec::new(),
        }
    }
}

impl MaterialConfig {
    /// Returns `true` if the extension of `path` is one of the configured
    /// extensions, ignoring case.
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|accepted| accepted.eq_ignore_ascii_case(ext))
            })
    }

    /// Returns `true` if a material called `name` matches one of the exclude
    /// patterns, ignoring case.
    pub fn is_excluded(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.excludes
            .iter()
            .any(|pattern| glob_matches(&pattern.to_lowercase(), &name))
    }
}

/// Matches `text` against a pattern where `*` matches any run of characters
/// and `?` matches exactly one.
fn glob_matches(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // Position of the last `*` in the pattern and the text index it resumed at.
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == text[t]) {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, t));
            p += 1;
        } else if let Some((star, resumed)) = backtrack {
            p = star + 1;
            t = resumed + 1;
            backtrack = Some((star, resumed + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
