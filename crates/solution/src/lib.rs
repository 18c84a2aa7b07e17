//! Solution-folder restructuring for `.sln` manifests.
//! 依新的目錄配置重整 `.sln` 方案資料夾。
//!
//! The pipeline parses `Project(...)` declarations, classifies every project by
//! path prefix into a fixed folder taxonomy, and splices fresh folder
//! declarations plus a new `NestedProjects` section into the manifest.

pub mod classify;
pub mod generate;
pub mod parser;
pub mod record;
pub mod report;
pub mod restructure;
pub mod splice;
pub mod taxonomy;

pub use classify::{classify, classify_with, PrefixRule, PREFIX_RULES};
pub use generate::{folder_declarations, nested_projects_section, nesting_entries};
pub use parser::{parse_declaration, parse_solution, ParsedSolution};
pub use record::{NestingEntry, ProjectRecord, SOLUTION_FOLDER_TYPE_GUID};
pub use report::Summary;
pub use slnfolders_core::LineEnding;
pub use restructure::{
    restructure, restructure_text, restructure_with, RestructureError, RestructureOptions,
    RestructureReport, DEFAULT_SOLUTION_FILE,
};
pub use splice::{splice, SpliceError, SpliceOutcome};
pub use taxonomy::{new_guid, Folder, FolderSpec, Taxonomy, FOLDERS};
