//! Headless driver: load a scene, rebuild it in memory and export it.

use anyhow::{Context, Result};
use clap::Parser;
use config::constants::{GlobalConfig, MAX_SEGMENTS};
use scene_io::{decode_rows, encode_rows, export_file_name, ExportSnapshot};
use scene_model::SceneConfig;
use scene_sync::{GeometryStore, MemoryBackend, SceneSynchronizer};
use std::fs;
use std::path::Path;

mod cli;
mod logging;

use cli::{Cli, Command, OutputArgs};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = global_config(cli.segments)?;

    let (store, output) = match cli.command {
        Command::Import { file, output } => (import_store(&file, config)?, output),
        Command::Example { output } => {
            (GeometryStore::with_config(SceneConfig::example(), config), output)
        }
    };

    rebuild(&store).await?;
    write_outputs(&store, &output)
}

/// Generator settings for an optional `--segments` override. The maximum
/// stays at `MAX_SEGMENTS`.
fn global_config(segments: Option<u32>) -> Result<GlobalConfig> {
    match segments {
        Some(segments) => {
            GlobalConfig::new(segments, MAX_SEGMENTS).context("invalid --segments")
        }
        None => Ok(GlobalConfig::default()),
    }
}

fn import_store(path: &Path, config: GlobalConfig) -> Result<GeometryStore> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let report =
        decode_rows(&text).with_context(|| format!("failed to import {}", path.display()))?;

    for warning in &report.warnings {
        log::warn!("{warning}");
    }
    log::info!(
        "Imported {} rows from {} ({} skipped)",
        report.records.len(),
        path.display(),
        report.warnings.len()
    );

    let mut store = GeometryStore::with_config(SceneConfig::default(), config);
    store.replace_all(report.records);
    Ok(store)
}

async fn rebuild(store: &GeometryStore) -> Result<()> {
    let synchronizer = SceneSynchronizer::new(MemoryBackend::new());
    let report = synchronizer.sync(store).await.context("rebuild failed")?;

    for skipped in &report.skipped {
        log::warn!("Skipped record {} ({}): {}", skipped.index, skipped.id, skipped.error);
    }

    let backend = synchronizer.into_backend();
    let vertices: usize = backend.primitives().iter().map(|p| p.geometry.vertex_count()).sum();
    let triangles: usize = backend.primitives().iter().map(|p| p.geometry.triangle_count()).sum();

    println!("Scene:      {}", store.scene().name);
    println!("Records:    {}", store.len());
    println!("Primitives: {}", report.added);
    println!("Vertices:   {vertices}");
    println!("Triangles:  {triangles}");
    Ok(())
}

fn write_outputs(store: &GeometryStore, output: &OutputArgs) -> Result<()> {
    if let Some(path) = &output.json {
        let now = chrono::Utc::now();
        let path = if path.is_dir() { path.join(export_file_name(now)) } else { path.clone() };
        let json = ExportSnapshot::at(store.scene(), now).to_json()?;
        write_file(&path, &json)?;
    }
    if let Some(path) = &output.csv {
        write_file(path, &encode_rows(store.records()))?;
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
