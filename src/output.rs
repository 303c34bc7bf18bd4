//! Writing icon sets to disk
//!
//! Each target is rendered and saved independently, so a batch may run on
//! several threads. Results always come back in target order.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rendering::raster::digest_hex;
use crate::rendering::render_png;
use crate::{IconSetConfig, IconTarget};

/// A PNG file produced by the batch; also the manifest entry format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenIcon {
    pub size: u32,
    pub file: String,
    /// SHA-256 of the PNG file bytes
    pub sha256: String,
    pub bytes: usize,
    #[serde(skip)]
    pub path: PathBuf,
}

/// Render one target and save it under `out_dir`.
pub fn write_icon(out_dir: &Path, target: &IconTarget) -> Result<WrittenIcon> {
    let icon = render_png(target.size)?;
    let path = out_dir.join(&target.file_name);
    fs::write(&path, &icon.png_data).map_err(|e| Error::io(&path, e))?;
    info!("wrote {} ({}px, {} bytes)", path.display(), target.size, icon.png_data.len());
    Ok(WrittenIcon {
        size: target.size,
        file: target.file_name.clone(),
        sha256: digest_hex(&icon.png_data),
        bytes: icon.png_data.len(),
        path,
    })
}

/// Render and save every target of `config`, then write the manifest if one is configured.
///
/// Sizes and file names are validated up front, so an invalid batch writes
/// nothing. For I/O failures the first failing target (in target order) is
/// returned; with more than one job, targets after it may already be on disk.
pub fn write_icons(config: &IconSetConfig) -> Result<Vec<WrittenIcon>> {
    config.validate()?;
    fs::create_dir_all(&config.out_dir).map_err(|e| Error::io(&config.out_dir, e))?;

    let workers = config.jobs.min(config.targets.len());
    let written = if workers <= 1 {
        config
            .targets
            .iter()
            .map(|t| write_icon(&config.out_dir, t))
            .collect::<Result<Vec<_>>>()?
    } else {
        write_parallel(&config.out_dir, &config.targets, workers)
            .into_iter()
            .collect::<Result<Vec<_>>>()?
    };

    if let Some(manifest) = &config.manifest {
        let path = manifest_path(&config.out_dir, manifest);
        write_manifest(&path, &written)?;
    }
    Ok(written)
}

fn write_parallel(out_dir: &Path, targets: &[IconTarget], workers: usize) -> Vec<Result<WrittenIcon>> {
    debug!("rendering {} icons on {} threads", targets.len(), workers);
    let mut slots: Vec<Option<Result<WrittenIcon>>> = targets.iter().map(|_| None).collect();
    thread::scope(|s| {
        let handles: Vec<_> = (0..workers)
            .map(|w| {
                s.spawn(move || {
                    targets
                        .iter()
                        .enumerate()
                        .skip(w)
                        .step_by(workers)
                        .map(|(i, t)| (i, write_icon(out_dir, t)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            let done = handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e));
            for (i, res) in done {
                slots[i] = Some(res);
            }
        }
    });
    slots.into_iter().flatten().collect()
}

fn manifest_path(out_dir: &Path, manifest: &Path) -> PathBuf {
    if manifest.is_absolute() {
        manifest.to_path_buf()
    } else {
        out_dir.join(manifest)
    }
}

/// Write `icons` as a pretty-printed JSON array.
pub fn write_manifest(path: &Path, icons: &[WrittenIcon]) -> Result<()> {
    let json = serde_json::to_string_pretty(icons)?;
    fs::write(path, json).map_err(|e| Error::io(path, e))?;
    info!("wrote manifest {} ({} entries)", path.display(), icons.len());
    Ok(())
}
