//! Manifest file primitives: encoding-aware text documents and backups.
//! 方案檔的讀寫基礎：保留編碼的文字文件與備份。

pub mod backup;
pub mod document;

pub use backup::{backup_path, write_backup, BackupError, BACKUP_SUFFIX};
pub use document::{Document, DocumentError, Encoding, LineEnding};
