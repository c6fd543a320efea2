//! Zip packaging of collected comment files

use crate::error::RycError;
use crate::utils::filename::archive_entry_name;
use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Write `files` into a zip archive at `archive_path`, each under its base name.
///
/// An existing archive at that path is replaced. A base name that was
/// already written is skipped.
pub fn build_archive(files: &[PathBuf], archive_path: &Path) -> Result<PathBuf, RycError> {
    info!("Building archive {:?} with {} files", archive_path, files.len());

    let output = File::create(archive_path)?;
    let mut writer = ZipWriter::new(output);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut written = HashSet::new();
    for path in files {
        let Some(name) = archive_entry_name(path) else {
            warn!("Skipping {:?}: no usable file name", path);
            continue;
        };
        if !written.insert(name.clone()) {
            warn!("Skipping {:?}: {} is already in the archive", path, name);
            continue;
        }

        debug!("Adding {} to archive", name);
        writer.start_file(name, options)?;
        let mut source = File::open(path)?;
        std::io::copy(&mut source, &mut writer)?;
    }

    writer.finish()?;
    Ok(archive_path.to_path_buf())
}

/// [`build_archive`] on the blocking thread pool
pub async fn build_archive_async(
    files: Vec<PathBuf>,
    archive_path: PathBuf,
) -> Result<PathBuf, RycError> {
    tokio::task::spawn_blocking(move || build_archive(&files, &archive_path)).await?
}
