//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "gridpin";
const APPLICATION: &str = "gridpin";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, where logs are written.
///
/// - Linux: `$XDG_CACHE_HOME/gridpin` or `~/.cache/gridpin`
/// - macOS: `~/Library/Caches/dev.gridpin.gridpin`
/// - Windows: `C:\Users\<User>\AppData\Local\gridpin\gridpin\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory for the default theme file.
///
/// - Linux: `$XDG_CONFIG_HOME/gridpin` or `~/.config/gridpin`
/// - macOS: `~/Library/Application Support/dev.gridpin.gridpin`
/// - Windows: `C:\Users\<User>\AppData\Roaming\gridpin\gridpin\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Theme file used when `--theme` is not given, if it exists.
pub fn default_theme() -> Option<PathBuf> {
    config_dir().and_then(|dir| theme_in(&dir))
}

fn theme_in(dir: &Path) -> Option<PathBuf> {
    Some(dir.join("theme.json")).filter(|path| path.is_file())
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archived logs kept next to `latest.log`.
const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";

/// What a log rotation did. Rotation runs before the logger exists, so the
/// outcome is carried here and logged afterwards.
#[derive(Debug, Default)]
pub struct Rotation {
    pub archived: Option<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub failures: Vec<String>,
}

impl Rotation {
    pub fn log(&self) {
        if let Some(path) = &self.archived {
            log::debug!("Archived previous log to {}", path.display());
        }
        for path in &self.removed {
            log::debug!("Removed old log {}", path.display());
        }
        for failure in &self.failures {
            log::debug!("Log rotation: {}", failure);
        }
    }
}

/// Archive the previous run's log and prune old archives in the cache dir.
pub fn rotate_logs() -> Rotation {
    cache_dir()
        .map(|dir| rotate_logs_in(&dir, MAX_OLD_LOGS))
        .unwrap_or_default()
}

fn rotate_logs_in(dir: &Path, keep: usize) -> Rotation {
    let mut rotation = Rotation::default();

    let latest = dir.join(LATEST_LOG);
    if latest.is_file() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S_%3f");
        let archived = dir.join(format!("{stamp}.log"));
        match fs::rename(&latest, &archived) {
            Ok(()) => rotation.archived = Some(archived),
            Err(e) => rotation
                .failures
                .push(format!("rename {}: {}", latest.display(), e)),
        }
    }

    prune_archives(dir, keep, &mut rotation);
    rotation
}

/// Archive names are timestamps, so name order is age order.
fn prune_archives(dir: &Path, keep: usize, rotation: &mut Rotation) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            rotation.failures.push(format!("read {}: {}", dir.display(), e));
            return;
        }
    };

    let mut archives: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "log")
                && path.file_name().is_some_and(|name| name != LATEST_LOG)
        })
        .collect();
    archives.sort();

    let excess = archives.len().saturating_sub(keep);
    for path in archives.into_iter().take(excess) {
        match fs::remove_file(&path) {
            Ok(()) => rotation.removed.push(path),
            Err(e) => rotation
                .failures
                .push(format!("remove {}: {}", path.display(), e)),
        }
    }
}
