/// File access provided by the mod manager
///
/// Every read and write of game data goes through [`Host`]. Paths are
/// relative to the game's `data/` root, e.g. `global/excel/misc.txt`.
use crate::backup::{backup_and_swap, BackupError};
use crate::encoding::{read_text, Encoding};
use crate::formats::tsv::TsvTable;
use crate::formats::FormatError;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

pub const MINIMUM_HOST_VERSION: [u32; 3] = [1, 5, 0];

#[derive(Debug, Error)]
pub enum HostError {
    #[error("D2RMM version 1.5.0 or higher is required to run this mod.")]
    VersionTooLow,

    #[error("required file {path} could not be read: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}: {source}")]
    Format {
        path: String,
        #[source]
        source: FormatError,
    },

    #[error("path {0} leaves the game data directory")]
    InvalidPath(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: BackupError,
    },

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub trait Host {
    /// `[major, minor, patch]` of the running mod manager, if it reports one.
    fn version(&self) -> Option<[u32; 3]>;

    fn read_tsv(&mut self, path: &str) -> Result<TsvTable, HostError>;

    fn write_tsv(&mut self, path: &str, table: &TsvTable) -> Result<(), HostError>;

    fn read_json(&mut self, path: &str) -> Result<Value, HostError>;

    fn write_json(&mut self, path: &str, value: &Value) -> Result<(), HostError>;

    /// Copy `src` from the mod's own directory to `dest` in the output.
    fn copy_file(&mut self, src: &Path, dest: &str, overwrite: bool) -> Result<(), HostError>;
}

/// Fail unless the host reports at least [`MINIMUM_HOST_VERSION`].
pub fn require_version(host: &impl Host, minimum: [u32; 3]) -> Result<(), HostError> {
    match host.version() {
        Some(version) if version >= minimum => Ok(()),
        _ => Err(HostError::VersionTooLow),
    }
}

/// Parse `x.y.z`; missing trailing parts count as zero.
pub fn parse_version(text: &str) -> Option<[u32; 3]> {
    let mut version = [0; 3];
    let mut parts = text.trim().split('.');
    for slot in &mut version {
        match parts.next() {
            Some(part) => *slot = part.parse().ok()?,
            None => break,
        }
    }
    parts.next().is_none().then_some(version)
}

/// Directory-backed host: reads only the extracted game data and writes only
/// to the output directory, so earlier output never feeds a later run.
#[derive(Debug)]
pub struct FsHost {
    game_data: PathBuf,
    output: PathBuf,
    version: Option<[u32; 3]>,
    keep_backups: bool,
    encodings: HashMap<String, Encoding>,
}

impl FsHost {
    pub fn new(game_data: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            game_data: game_data.into(),
            output: output.into(),
            version: Some(MINIMUM_HOST_VERSION),
            keep_backups: false,
            encodings: HashMap::new(),
        }
    }

    pub fn with_version(mut self, version: Option<[u32; 3]>) -> Self {
        self.version = version;
        self
    }

    pub fn with_backups(mut self, keep_backups: bool) -> Self {
        self.keep_backups = keep_backups;
        self
    }

    pub fn output_path(&self, path: &str) -> Result<PathBuf, HostError> {
        Ok(self.output.join(relative(path)?))
    }

    fn read_text(&mut self, path: &str) -> Result<String, HostError> {
        let source = self.game_data.join(relative(path)?);
        let bytes = fs::read(&source).map_err(|source| HostError::Unreadable {
            path: path.to_string(),
            source,
        })?;
        let (text, encoding) = read_text(&bytes).map_err(|source| HostError::Format {
            path: path.to_string(),
            source,
        })?;
        self.encodings.insert(path.to_string(), encoding);
        Ok(text)
    }

    fn write_text(&mut self, path: &str, text: &str, fallback: Encoding) -> Result<(), HostError> {
        let encoding = self.encodings.get(path).copied().unwrap_or(fallback);
        let bytes = encoding.encode(text).map_err(|source| HostError::Format {
            path: path.to_string(),
            source,
        })?;
        let target = self.output_path(path)?;
        backup_and_swap(&target, &bytes, self.keep_backups).map_err(|source| HostError::Write {
            path: path.to_string(),
            source,
        })?;
        log::debug!("wrote {}", target.display());
        Ok(())
    }
}

impl Host for FsHost {
    fn version(&self) -> Option<[u32; 3]> {
        self.version
    }

    fn read_tsv(&mut self, path: &str) -> Result<TsvTable, HostError> {
        let text = self.read_text(path)?;
        TsvTable::parse(&text).map_err(|source| HostError::Format {
            path: path.to_string(),
            source,
        })
    }

    fn write_tsv(&mut self, path: &str, table: &TsvTable) -> Result<(), HostError> {
        self.write_text(path, &table.to_string(), Encoding::Utf8)
    }

    fn read_json(&mut self, path: &str) -> Result<Value, HostError> {
        let text = self.read_text(path)?;
        serde_json::from_str(&text).map_err(|e| HostError::Format {
            path: path.to_string(),
            source: FormatError::ParseError(format!("JSON parse error: {}", e)),
        })
    }

    fn write_json(&mut self, path: &str, value: &Value) -> Result<(), HostError> {
        let text = serde_json::to_string_pretty(value).map_err(|e| HostError::Format {
            path: path.to_string(),
            source: FormatError::SerializationError(format!("JSON serialize error: {}", e)),
        })?;
        self.write_text(path, &text, Encoding::Utf8Bom)
    }

    fn copy_file(&mut self, src: &Path, dest: &str, overwrite: bool) -> Result<(), HostError> {
        let target = self.output_path(dest)?;
        if target.exists() && !overwrite {
            return Err(HostError::AlreadyExists(dest.to_string()));
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, &target)?;
        Ok(())
    }
}

/// Reject absolute paths and `..` so every access stays under the data roots.
fn relative(path: &str) -> Result<PathBuf, HostError> {
    let candidate = Path::new(path);
    let escapes = candidate
        .components()
        .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
    if path.is_empty() || escapes {
        return Err(HostError::InvalidPath(path.to_string()));
    }
    Ok(candidate.to_path_buf())
}
