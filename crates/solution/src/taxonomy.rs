//! Fixed folder taxonomy imposed on the solution.
//! 方案使用的固定資料夾分類。

use uuid::Uuid;

/// Static description of one logical solution folder.
/// 單一邏輯方案資料夾的靜態描述。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderSpec {
    pub key: &'static str,
    pub parent: Option<&'static str>,
    pub display: Option<&'static str>,
}

impl FolderSpec {
    const fn root(key: &'static str) -> Self {
        Self {
            key,
            parent: None,
            display: None,
        }
    }

    const fn child(key: &'static str, parent: &'static str) -> Self {
        Self {
            key,
            parent: Some(parent),
            display: None,
        }
    }

    const fn displayed_as(self, display: &'static str) -> Self {
        Self {
            display: Some(display),
            ..self
        }
    }

    /// Name shown in the IDE; defaults to the key.
    pub fn display_name(&self) -> &'static str {
        self.display.unwrap_or(self.key)
    }
}

/// Folder tree in declaration order. Parents always precede their children.
pub const FOLDERS: &[FolderSpec] = &[
    FolderSpec::root("libs"),
    FolderSpec::child("backend", "libs"),
    FolderSpec::child("frontend", "libs"),
    FolderSpec::child("core", "backend"),
    FolderSpec::child("auth", "backend"),
    FolderSpec::child("catalog", "backend"),
    FolderSpec::child("sales", "backend"),
    FolderSpec::child("marketplace", "backend"),
    FolderSpec::child("messaging", "backend"),
    FolderSpec::child("files", "backend"),
    FolderSpec::child("shipping", "backend"),
    FolderSpec::child("integration", "backend"),
    FolderSpec::child("other", "backend"),
    FolderSpec::child("fe-core", "frontend").displayed_as("core"),
    FolderSpec::child("clients", "frontend"),
    FolderSpec::child("realtime", "frontend"),
    FolderSpec::child("discovery", "frontend"),
    FolderSpec::root("apps"),
    FolderSpec::root("templates"),
    FolderSpec::child("examples", "apps"),
];

/// A folder spec paired with the GUID assigned to it for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub spec: FolderSpec,
    pub guid: String,
}

/// The taxonomy instantiated for one run, with a fresh GUID per folder.
/// 單次執行所產生的分類實例，每個資料夾都有新的 GUID。
#[derive(Debug, Clone)]
pub struct Taxonomy {
    folders: Vec<Folder>,
}

impl Taxonomy {
    /// Instantiates [`FOLDERS`] with random v4 GUIDs.
    pub fn generate() -> Self {
        Self::with_guids(FOLDERS, new_guid)
    }

    /// Instantiates `specs`, drawing one GUID per entry from `next_guid` in table order.
    pub fn with_guids(specs: &[FolderSpec], mut next_guid: impl FnMut() -> String) -> Self {
        let folders = specs
            .iter()
            .map(|spec| Folder {
                spec: *spec,
                guid: next_guid(),
            })
            .collect();
        Self { folders }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn get(&self, key: &str) -> Option<&Folder> {
        self.folders.iter().find(|folder| folder.spec.key == key)
    }

    pub fn guid_of(&self, key: &str) -> Option<&str> {
        self.get(key).map(|folder| folder.guid.as_str())
    }

    /// Returns the GUID of `folder`'s parent, if it has one in this taxonomy.
    pub fn parent_guid(&self, folder: &Folder) -> Option<&str> {
        folder.spec.parent.and_then(|parent| self.guid_of(parent))
    }
}

/// Uppercase hyphenated v4 UUID without braces, as solution files spell them.
pub fn new_guid() -> String {
    Uuid::new_v4().hyphenated().to_string().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_parent_is_declared_before_its_children() {
        let mut seen = HashSet::new();
        for spec in FOLDERS {
            if let Some(parent) = spec.parent {
                assert!(seen.contains(parent), "{parent} must precede {}", spec.key);
            }
            assert!(seen.insert(spec.key), "duplicate key {}", spec.key);
        }
    }

    #[test]
    fn generated_guids_are_unique_uppercase_uuids() {
        let taxonomy = Taxonomy::generate();
        let guids: HashSet<&str> = taxonomy.folders().iter().map(|f| f.guid.as_str()).collect();
        assert_eq!(guids.len(), FOLDERS.len());
        for guid in guids {
            assert_eq!(guid.len(), 36);
            assert_eq!(guid, guid.to_ascii_uppercase());
            assert!(Uuid::parse_str(guid).is_ok());
        }
    }

    #[test]
    fn frontend_core_is_displayed_as_core() {
        let taxonomy = Taxonomy::generate();
        let fe_core = taxonomy.get("fe-core").unwrap();
        assert_eq!(fe_core.spec.display_name(), "core");
        assert_eq!(taxonomy.get("core").unwrap().spec.display_name(), "core");
        assert_ne!(fe_core.guid, taxonomy.guid_of("core").unwrap());
    }

    #[test]
    fn parent_guid_follows_the_table() {
        let mut counter = 0;
        let taxonomy = Taxonomy::with_guids(FOLDERS, || {
            counter += 1;
            format!("G{counter}")
        });
        let auth = taxonomy.get("auth").unwrap();
        assert_eq!(taxonomy.parent_guid(auth), taxonomy.guid_of("backend"));
        let apps = taxonomy.get("apps").unwrap();
        assert_eq!(taxonomy.parent_guid(apps), None);
        assert_eq!(taxonomy.guid_of("libs"), Some("G1"));
    }
}
