use std::fs::{self, OpenOptions};
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Duration, Local};

use crate::error::FixError;

pub const BACKUP_PREFIX: &str = "_backup_";
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn backup_dir_name(at: DateTime<Local>) -> String {
    format!("{BACKUP_PREFIX}{}", at.format(STAMP_FORMAT))
}

/// Per-run snapshot location under the repository root.
///
/// The directory itself is only created by the first [`BackupDir::backup_file`] call, so a run
/// that never backs anything up leaves no trace on disk.
#[derive(Debug)]
pub struct BackupDir {
    root: PathBuf,
    name: String,
    path: PathBuf,
}

impl BackupDir {
    /// Picks the backup directory for a run started at `now`.
    ///
    /// An existing directory is never reused: if the name for `now` is taken the stamp moves
    /// forward a second at a time until a free one is found.
    pub fn for_run(root: &Path, now: DateTime<Local>) -> Self {
        let mut stamp = now;
        let mut name = backup_dir_name(stamp);
        while root.join(&name).exists() {
            stamp += Duration::seconds(1);
            name = backup_dir_name(stamp);
        }
        Self {
            root: root.to_path_buf(),
            path: root.join(&name),
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copies `file` (bytes, permissions and mtime) to the same relative location under the
    /// backup directory and returns the copy's path.
    pub fn backup_file(&self, file: &Path) -> Result<PathBuf, FixError> {
        let relative = self.relative_to_root(file)?;
        if !file.is_file() {
            return Err(FixError::MissingTarget(file.to_path_buf()));
        }

        fs::create_dir_all(&self.path).map_err(FixError::io("create", &self.path))?;

        let target = self.path.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(FixError::io("create", parent))?;
        }

        fs::copy(file, &target).map_err(FixError::io("copy", file))?;
        preserve_mtime(file, &target)?;
        Ok(target)
    }

    fn relative_to_root<'a>(&self, file: &'a Path) -> Result<&'a Path, FixError> {
        let relative = file
            .strip_prefix(&self.root)
            .map_err(|_| FixError::OutsideRepository(file.to_path_buf()))?;
        let plain = relative.components().next().is_some()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if plain {
            Ok(relative)
        } else {
            Err(FixError::OutsideRepository(file.to_path_buf()))
        }
    }
}

fn preserve_mtime(source: &Path, target: &Path) -> Result<(), FixError> {
    let modified = fs::metadata(source)
        .and_then(|meta| meta.modified())
        .map_err(FixError::io("read metadata of", source))?;
    OpenOptions::new()
        .write(true)
        .open(target)
        .and_then(|copy| copy.set_modified(modified))
        .map_err(FixError::io("set modification time of", target))
}
