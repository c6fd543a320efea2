//! Output file naming

use std::path::{Path, PathBuf};

/// Extension of per-video comment files
pub const COMMENTS_EXTENSION: &str = "txt";

/// Default name of the channel-mode archive
pub const DEFAULT_ARCHIVE_NAME: &str = "comentarios_coletados.zip";

/// File name holding the comments of a video: `<video_id>.txt`
pub fn comments_file_name(video_id: &str) -> String {
    format!("{}.{}", video_id, COMMENTS_EXTENSION)
}

/// Full path of a video's comment file inside `output_dir`
pub fn comments_file_path(output_dir: &Path, video_id: &str) -> PathBuf {
    output_dir.join(comments_file_name(video_id))
}

/// Name a file is stored under inside the archive
pub fn archive_entry_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}
