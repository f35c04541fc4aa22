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

// Mosaic sandbox
// Loads the project's material collections, uploads them to a headless
// device and looks up materials by name.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mosaic_agents::MaterialManager;
use mosaic_core::renderer::{FilterMode, FilterSettings, GraphicsDevice, HeadlessDevice};
use mosaic_io::{DirectoryCollectionFinder, DirectoryCollectionLoader, ProjectConfig};

#[derive(Parser)]
#[command(name = "sandbox", version, about = "Material collection sandbox")]
struct Cli {
    /// Project configuration file.
    #[arg(long, value_name = "PATH", default_value = "Materials.toml")]
    config: PathBuf,

    /// Switch every collection to nearest filtering after the first commit.
    #[arg(long)]
    nearest: bool,

    /// Material names to look up.
    names: Vec<String>,
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = ProjectConfig::load_or_default(&cli.config)
        .with_context(|| format!("reading {}", cli.config.display()))?;

    let headless = Arc::new(HeadlessDevice::new());
    let device: Arc<dyn GraphicsDevice> = headless.clone();
    let mut manager = MaterialManager::new(config.filter);

    manager.reload(
        &DirectoryCollectionFinder::new(),
        &DirectoryCollectionLoader::new(),
        &config.materials,
    );
    let report = manager.commit(&device);
    log::info!(
        "{} collections active, {} prepared, {} failed",
        manager.collections().len(),
        report.prepared,
        report.failed.len()
    );

    if cli.nearest {
        manager.set_filter_mode(FilterSettings::new(FilterMode::Nearest, FilterMode::Nearest));
        let report = manager.commit(&device);
        log::info!("Re-bound {} collections with nearest filtering", report.rebound);
    }

    for collection in manager.collections() {
        log::info!(
            "  {} [{:?}] {} materials",
            collection.path().display(),
            collection.state(),
            collection.materials().len()
        );
    }

    for name in &cli.names {
        match manager.material(name) {
            Some(material) => {
                let size = material.size();
                log::info!("'{}' -> {} ({}x{})", name, material.name(), size.width, size.height);
            }
            None => log::warn!("No material named '{}'", name),
        }
    }

    let stats = headless.stats();
    log::info!(
        "Device: {} textures, {} bytes uploaded",
        headless.live_textures(),
        stats.bytes_uploaded
    );
    Ok(())
}
