/// Atomic writes into the output directory
///
/// Contents are written to a sibling temp file and renamed over the target.
/// When asked, an existing target is first copied to `<name>.bak.<timestamp>`.
use chrono::Local;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BackupOutcome {
    pub backup_path: Option<PathBuf>,
    pub final_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("could not create backup file: {0}")]
    BackupCreate(String),
}

pub fn backup_and_swap(
    target: &Path,
    contents: &[u8],
    keep_backup: bool,
) -> Result<BackupOutcome, BackupError> {
    let parent = target
        .parent()
        .ok_or_else(|| BackupError::BackupCreate("target path has no parent directory".into()))?;
    fs::create_dir_all(parent)?;

    let backup_path = if keep_backup && target.exists() {
        let candidate = backup_path(target);
        fs::copy(target, &candidate).map_err(|err| BackupError::BackupCreate(err.to_string()))?;
        log::debug!("backed up {} to {}", target.display(), candidate.display());
        Some(candidate)
    } else {
        None
    };

    let temp_path = build_temp_path(target);
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&temp_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);

    #[cfg(target_os = "windows")]
    {
        use std::io::ErrorKind;
        if let Err(err) = fs::rename(&temp_path, target) {
            if err.kind() == ErrorKind::AlreadyExists {
                fs::remove_file(target)?;
                fs::rename(&temp_path, target)?;
            } else {
                return Err(BackupError::Io(err));
            }
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        fs::rename(&temp_path, target)?;
    }

    Ok(BackupOutcome {
        backup_path,
        final_path: target.to_path_buf(),
    })
}

fn backup_path(target: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d%H%M%S");
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".bak.{timestamp}"));
    target.with_file_name(name)
}

fn build_temp_path(target: &Path) -> PathBuf {
    let mut temp = target.to_path_buf();
    let pid = std::process::id();
    let suffix = format!("__tmp__pid_{}", pid);
    match temp.file_name() {
        Some(name) => {
            let mut os_string = name.to_os_string();
            os_string.push(suffix);
            temp.set_file_name(os_string);
        }
        None => {
            temp.push(format!("temp_{pid}"));
        }
    }
    temp
}
