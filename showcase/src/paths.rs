//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "trellis";
const APPLICATION: &str = "showcase";

const LATEST_LOG: &str = "latest.log";
const PREVIOUS_LOG: &str = "previous.log";

/// Used when no home directory can be determined.
pub const FALLBACK_LOG: &str = "showcase.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, where logs live.
///
/// - Linux: `$XDG_CACHE_HOME/showcase` or `~/.cache/showcase`
/// - macOS: `~/Library/Caches/dev.trellis.showcase`
/// - Windows: `C:\Users\<User>\AppData\Local\trellis\showcase\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// `latest.log` inside `dir`, or the working-directory fallback.
pub fn log_file_in(dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) => dir.join(LATEST_LOG),
        None => PathBuf::from(FALLBACK_LOG),
    }
}

/// Keep one previous run: `latest.log` becomes `previous.log`.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs(dir: &Path) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let _ = fs::rename(&latest, dir.join(PREVIOUS_LOG));
    }
}
