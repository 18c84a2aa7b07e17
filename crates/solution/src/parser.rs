//! Extraction of project and folder declarations from solution text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::record::{is_folder_type, ProjectRecord};

static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Project\("\{([^}]+)\}"\)\s*=\s*"([^"]+)",\s*"([^"]+)",\s*"\{([^}]+)\}""#)
        .expect("declaration pattern must compile")
});

static DECLARATION_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*Project\("\{([^}]+)\}"\)"#).expect("declaration head pattern must compile")
});

/// Declarations found in a solution, split by kind and kept in file order.
/// 依類型分開並保留檔案順序的宣告集合。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSolution {
    pub projects: Vec<ProjectRecord>,
    pub folders: Vec<ProjectRecord>,
}

/// Scans `text` for `Project("{TYPE}") = "NAME", "PATH", "{GUID}"` declarations.
///
/// Folder declarations go to `folders`, every other type to `projects`.
/// Lines that look like a declaration but do not match the full shape are skipped.
pub fn parse_solution(text: &str) -> ParsedSolution {
    let mut parsed = ParsedSolution::default();
    for line in text.lines() {
        match parse_declaration(line) {
            Some(record) if record.is_folder() => parsed.folders.push(record),
            Some(record) => parsed.projects.push(record),
            None => {
                if DECLARATION_HEAD.is_match(line) {
                    tracing::trace!(line, "skipping malformed project declaration");
                }
            }
        }
    }
    tracing::debug!(
        projects = parsed.projects.len(),
        folders = parsed.folders.len(),
        "parsed solution declarations"
    );
    parsed
}

/// Parses a single declaration line.
pub fn parse_declaration(line: &str) -> Option<ProjectRecord> {
    let captures = DECLARATION.captures(line)?;
    Some(ProjectRecord::new(
        &captures[2],
        &captures[3],
        &captures[4],
        &captures[1],
    ))
}

/// Returns true when `line` opens a solution-folder declaration.
pub(crate) fn is_folder_declaration(line: &str) -> bool {
    DECLARATION_HEAD
        .captures(line)
        .map_or(false, |captures| is_folder_type(&captures[1]))
}
