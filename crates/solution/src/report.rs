use std::collections::BTreeMap;
use std::fmt;

use crate::classify::classify;
use crate::record::ProjectRecord;

/// Per-folder project counts plus the number of projects left unassigned.
/// 各資料夾的專案數量與未分類專案數。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub per_folder: BTreeMap<&'static str, usize>,
    pub unassigned: usize,
}

impl Summary {
    pub fn from_projects(projects: &[ProjectRecord]) -> Self {
        let mut summary = Summary::default();
        for project in projects {
            match classify(&project.path) {
                Some(folder) => *summary.per_folder.entry(folder).or_default() += 1,
                None => summary.unassigned += 1,
            }
        }
        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Projects by folder:")?;
        for (folder, count) in &self.per_folder {
            writeln!(f, "  {folder}: {count}")?;
        }
        writeln!(f)?;
        write!(f, "Unassigned projects: {}", self.unassigned)
    }
}
