use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// 備份檔案使用的副檔名。 / Suffix appended to the manifest path for its backup copy.
pub const BACKUP_SUFFIX: &str = ".bak";

/// 寫入備份時可能發生的錯誤。 / Error raised while writing a backup copy.
#[derive(Debug, Error)]
#[error("failed to write backup {}", .path.display())]
pub struct BackupError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// 回傳指定檔案的備份路徑（`<path>.bak`）。 / Returns the sibling backup path, `<path>.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// 將原始位元組寫入備份檔，覆蓋任何既有備份。 / Writes the pristine bytes to `<path>.bak`, replacing an older backup.
pub fn write_backup(path: &Path, original: &[u8]) -> Result<PathBuf, BackupError> {
    let target = backup_path(path);
    fs::write(&target, original).map_err(|source| BackupError {
        path: target.clone(),
        source,
    })?;
    Ok(target)
}
