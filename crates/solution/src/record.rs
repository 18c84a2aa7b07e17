use std::fmt;

/// Type GUID Visual Studio assigns to solution folders.
/// 方案資料夾使用的類型 GUID。
pub const SOLUTION_FOLDER_TYPE_GUID: &str = "2150E333-8FDC-42A3-9474-1A3956D46DE8";

/// Type GUID of classic C# projects.
#[cfg(test)]
pub(crate) const CSHARP_PROJECT_TYPE_GUID: &str = "FAE04EC0-301F-11D3-BF4B-00C04F79EFBC";

/// One `Project(...)` declaration from a solution file. GUIDs are stored without braces.
/// 方案檔中的單一 `Project(...)` 宣告；GUID 不含大括號。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: String,
    pub path: String,
    pub guid: String,
    pub type_guid: String,
}

impl ProjectRecord {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        guid: impl Into<String>,
        type_guid: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            guid: guid.into(),
            type_guid: type_guid.into(),
        }
    }

    /// Returns true when the record is a solution folder rather than a buildable unit.
    pub fn is_folder(&self) -> bool {
        is_folder_type(&self.type_guid)
    }
}

pub(crate) fn is_folder_type(type_guid: &str) -> bool {
    type_guid.eq_ignore_ascii_case(SOLUTION_FOLDER_TYPE_GUID)
}

/// One `{child} = {parent}` pair of the `NestedProjects` section.
/// `NestedProjects` 區段中的一組 `{子} = {父}` 對應。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestingEntry {
    pub child: String,
    pub parent: String,
}

impl NestingEntry {
    pub fn new(child: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            child: child.into(),
            parent: parent.into(),
        }
    }
}

impl fmt::Display for NestingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\t\t{{{}}} = {{{}}}", self.child, self.parent)
    }
}
