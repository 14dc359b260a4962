//! Install-root directory layout.
//!
//! Layout, relative to the install root (`base_dir`):
//!
//!   config/      configuration files
//!   logs/        log output
//!   data/        application data
//!
//! Audio recordings and temp directories live in [`AudioConfig`]; when they
//! are relative they are resolved against `base_dir` as well.
//!
//! [`AudioConfig`]: crate::config::AudioConfig

use std::path::{Path, PathBuf};

use super::ConfigError;

/// Holds the install root and the directories derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    /// Install root every other directory is derived from.
    pub base_dir: PathBuf,
    pub config_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl AppPaths {
    /// Derives `config/`, `logs/` and `data/` under `base_dir`.
    ///
    /// Pure; nothing is created until [`AppPaths::ensure_dirs`].
    pub fn from_base(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        Self {
            config_dir: base_dir.join("config"),
            logs_dir: base_dir.join("logs"),
            data_dir: base_dir.join("data"),
            base_dir,
        }
    }

    /// Directory containing the running executable.
    ///
    /// Falls back to the current directory if the executable path cannot be
    /// determined.
    pub fn install_root() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolves a possibly relative path against `base_dir`.
    ///
    /// Absolute paths are returned unchanged: `Path::join` replaces the base
    /// when its argument is absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    /// Creates `config/`, `logs/` and `data/`. Idempotent.
    pub fn ensure_dirs(&self) -> Result<(), ConfigError> {
        for dir in [&self.config_dir, &self.logs_dir, &self.data_dir] {
            ensure_dir(dir)?;
        }
        Ok(())
    }
}

/// Creates `path` and any missing parents.
///
/// An existing directory is not an error; anything else that prevents the
/// directory from existing afterwards (permissions, a file in the way) is.
pub fn ensure_dir(path: &Path) -> Result<(), ConfigError> {
    if path.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(path).map_err(|source| ConfigError::CreateDir {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("created directory {}", path.display());
    Ok(())
}
