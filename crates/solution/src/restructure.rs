//! End-to-end rewrite of a solution file: read, back up, transform, write.
//! 方案檔的完整重整流程：讀取、備份、轉換、寫回。

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use slnfolders_core::{write_backup, BackupError, Document, DocumentError, LineEnding};
use thiserror::Error;

use crate::generate::{folder_declarations, nested_projects_section, nesting_entries};
use crate::parser::{parse_solution, ParsedSolution};
use crate::report::Summary;
use crate::splice::{splice, SpliceError, SpliceOutcome};
use crate::taxonomy::Taxonomy;

/// Solution file rewritten when no path is given.
pub const DEFAULT_SOLUTION_FILE: &str = "ACommerce.Libraries.sln";

/// Errors raised while restructuring a solution file.
#[derive(Debug, Error)]
pub enum RestructureError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
    #[error(transparent)]
    Backup(#[from] BackupError),
    #[error("{} left unchanged{}", .path.display(), backup_note(.backup.as_deref()))]
    Splice {
        path: PathBuf,
        backup: Option<PathBuf>,
        #[source]
        source: SpliceError,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
}

fn backup_note(backup: Option<&Path>) -> String {
    match backup {
        Some(backup) => format!("; original kept in {}", backup.display()),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestructureOptions {
    /// Parse, classify and report without touching the disk.
    pub dry_run: bool,
}

/// What a restructure run did.
#[derive(Debug, Clone)]
pub struct RestructureReport {
    pub solution: PathBuf,
    /// `None` on a dry run.
    pub backup: Option<PathBuf>,
    pub parsed: ParsedSolution,
    pub folders_removed: usize,
    pub nesting_removed: bool,
    pub summary: Summary,
    pub written: bool,
}

/// Pure transformation of solution text with a given taxonomy.
/// Generated lines end with `line_ending`; every kept line keeps its own terminator.
pub fn restructure_text(
    text: &str,
    taxonomy: &Taxonomy,
    line_ending: LineEnding,
) -> Result<(ParsedSolution, SpliceOutcome), SpliceError> {
    let parsed = parse_solution(text);
    let declarations = folder_declarations(taxonomy);
    let nesting = nesting_entries(taxonomy, &parsed.projects);
    let section = nested_projects_section(&nesting);
    let outcome = splice(text, &declarations, &section, line_ending.as_str())?;
    Ok((parsed, outcome))
}

/// Rewrites the solution at `path` with a freshly generated taxonomy.
///
/// The original bytes are backed up to `<path>.bak` before any transformation;
/// the manifest itself is only rewritten once the splice has succeeded.
pub fn restructure(
    path: &Path,
    options: &RestructureOptions,
) -> Result<RestructureReport, RestructureError> {
    restructure_with(path, options, &Taxonomy::generate())
}

/// Same as [`restructure`] with a caller-supplied taxonomy.
pub fn restructure_with(
    path: &Path,
    options: &RestructureOptions,
    taxonomy: &Taxonomy,
) -> Result<RestructureReport, RestructureError> {
    let bytes = fs::read(path).map_err(|source| RestructureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut document = Document::from_bytes(Some(path.to_path_buf()), &bytes).map_err(|source| {
        RestructureError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::debug!(
        path = %path.display(),
        encoding = document.encoding().name(),
        bom = document.has_bom(),
        line_ending = ?document.line_ending(),
        "loaded solution"
    );

    let backup = if options.dry_run {
        None
    } else {
        let backup = write_backup(path, &bytes)?;
        tracing::info!(backup = %backup.display(), "backup created");
        Some(backup)
    };

    let (parsed, outcome) =
        restructure_text(document.contents(), taxonomy, document.line_ending()).map_err(
            |source| RestructureError::Splice {
                path: path.to_path_buf(),
                backup: backup.clone(),
                source,
            },
        )?;
    let summary = Summary::from_projects(&parsed.projects);

    let written = if options.dry_run {
        false
    } else {
        document.set_contents(outcome.text);
        document.save().map_err(|source| RestructureError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "solution rewritten");
        true
    };

    Ok(RestructureReport {
        solution: path.to_path_buf(),
        backup,
        parsed,
        folders_removed: outcome.folders_removed,
        nesting_removed: outcome.nesting_removed,
        summary,
        written,
    })
}
