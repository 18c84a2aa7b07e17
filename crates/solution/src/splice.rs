//! Structural edits that swap the folder declarations and nesting section.
//! 替換資料夾宣告與巢狀區段的結構編輯。

use thiserror::Error;

use crate::parser::is_folder_declaration;

const GLOBAL_MARKER: &str = "Global";
const END_GLOBAL_MARKER: &str = "EndGlobal";
const END_PROJECT_MARKER: &str = "EndProject";
const NESTED_PROJECTS_MARKER: &str = "GlobalSection(NestedProjects)";
const END_SECTION_MARKER: &str = "EndGlobalSection";

/// Reasons the splice cannot be applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("could not find the Global section")]
    MissingGlobalSection,
    #[error("could not find EndGlobal after the Global section")]
    MissingEndGlobal,
}

/// Result of a successful splice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceOutcome {
    pub text: String,
    /// Number of legacy folder declaration blocks dropped.
    pub folders_removed: usize,
    /// Whether a legacy `NestedProjects` section was dropped.
    pub nesting_removed: bool,
}

/// Rewrites `text`:
/// drops every solution-folder block and the old `NestedProjects` section,
/// inserts `declarations` right before the `Global` line and `nested_section`
/// right before the `EndGlobal` line.
///
/// Kept lines are re-emitted with their own terminators, so mixed line endings
/// and stray `\r` characters inside a line survive untouched. Generated lines
/// end with `line_ending`.
pub fn splice(
    text: &str,
    declarations: &[String],
    nested_section: &[String],
    line_ending: &str,
) -> Result<SpliceOutcome, SpliceError> {
    let (kept, folders_removed, nesting_removed) = strip_legacy_grouping(text);

    let global_idx = kept
        .iter()
        .position(|line| line_content(line).trim() == GLOBAL_MARKER)
        .ok_or(SpliceError::MissingGlobalSection)?;
    let end_global_idx = kept[global_idx..]
        .iter()
        .position(|line| line_content(line).trim() == END_GLOBAL_MARKER)
        .map(|offset| global_idx + offset)
        .ok_or(SpliceError::MissingEndGlobal)?;

    let mut output = String::with_capacity(text.len() + 128 * declarations.len());
    for (idx, line) in kept.into_iter().enumerate() {
        if idx == global_idx {
            push_generated(&mut output, declarations, line_ending);
        }
        if idx == end_global_idx {
            push_generated(&mut output, nested_section, line_ending);
        }
        output.push_str(line);
    }

    tracing::debug!(
        folders_removed,
        nesting_removed,
        declarations = declarations.len(),
        nesting_lines = nested_section.len(),
        "spliced solution text"
    );

    Ok(SpliceOutcome {
        text: output,
        folders_removed,
        nesting_removed,
    })
}

fn push_generated(output: &mut String, lines: &[String], line_ending: &str) {
    for line in lines {
        output.push_str(line);
        output.push_str(line_ending);
    }
}

/// Strips the `\n` or `\r\n` terminator from a line produced by `split_inclusive`.
fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn strip_legacy_grouping(text: &str) -> (Vec<&str>, usize, bool) {
    let mut kept = Vec::new();
    let mut folders_removed = 0;
    let mut nesting_removed = false;
    let mut in_folder = false;
    let mut in_nesting = false;

    for line in text.split_inclusive('\n') {
        let content = line_content(line);
        if in_folder {
            if content.trim() == END_PROJECT_MARKER {
                in_folder = false;
            }
            continue;
        }
        if in_nesting {
            if content.contains(END_SECTION_MARKER) {
                in_nesting = false;
            }
            continue;
        }
        if is_folder_declaration(content) {
            in_folder = true;
            folders_removed += 1;
            continue;
        }
        if content.contains(NESTED_PROJECTS_MARKER) {
            in_nesting = true;
            nesting_removed = true;
            continue;
        }
        kept.push(line);
    }

    (kept, folders_removed, nesting_removed)
}
