//! Text generation for the new folder declarations and nesting section.
//! 產生新的資料夾宣告與巢狀對應區段。

use crate::classify::classify;
use crate::record::{NestingEntry, ProjectRecord, SOLUTION_FOLDER_TYPE_GUID};
use crate::taxonomy::Taxonomy;

pub const NESTED_PROJECTS_HEADER: &str = "\tGlobalSection(NestedProjects) = preSolution";
pub const NESTED_PROJECTS_FOOTER: &str = "\tEndGlobalSection";

/// Emits a `Project(...)`/`EndProject` pair for every taxonomy folder, in table order.
pub fn folder_declarations(taxonomy: &Taxonomy) -> Vec<String> {
    let mut lines = Vec::with_capacity(taxonomy.folders().len() * 2);
    for folder in taxonomy.folders() {
        let name = folder.spec.display_name();
        lines.push(format!(
            "Project(\"{{{SOLUTION_FOLDER_TYPE_GUID}}}\") = \"{name}\", \"{name}\", \"{{{}}}\"",
            folder.guid
        ));
        lines.push("EndProject".to_string());
    }
    lines
}

/// Child/parent pairs: folder edges in table order, then project edges in file order.
///
/// Projects whose path matches no prefix produce no entry and stay at the solution root.
pub fn nesting_entries(taxonomy: &Taxonomy, projects: &[ProjectRecord]) -> Vec<NestingEntry> {
    let folder_edges = taxonomy.folders().iter().filter_map(|folder| {
        taxonomy
            .parent_guid(folder)
            .map(|parent| NestingEntry::new(folder.guid.as_str(), parent))
    });

    let project_edges = projects.iter().filter_map(|project| {
        let key = classify(&project.path)?;
        let parent = taxonomy.guid_of(key)?;
        Some(NestingEntry::new(project.guid.as_str(), parent))
    });

    folder_edges.chain(project_edges).collect()
}

/// Wraps nesting entries in the `GlobalSection(NestedProjects)` markers.
pub fn nested_projects_section(entries: &[NestingEntry]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(NESTED_PROJECTS_HEADER.to_string());
    lines.extend(entries.iter().map(ToString::to_string));
    lines.push(NESTED_PROJECTS_FOOTER.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CSHARP_PROJECT_TYPE_GUID;
    use crate::taxonomy::{FolderSpec, FOLDERS};

    fn numbered_taxonomy() -> Taxonomy {
        let mut counter = 0;
        Taxonomy::with_guids(FOLDERS, || {
            counter += 1;
            format!("F{counter:02}")
        })
    }

    fn project(guid: &str, path: &str) -> ProjectRecord {
        ProjectRecord::new("P", path, guid, CSHARP_PROJECT_TYPE_GUID)
    }

    #[test]
    fn declarations_use_display_name_for_name_and_path() {
        let taxonomy = numbered_taxonomy();
        let lines = folder_declarations(&taxonomy);
        assert_eq!(lines.len(), FOLDERS.len() * 2);
        assert_eq!(
            lines[0],
            "Project(\"{2150E333-8FDC-42A3-9474-1A3956D46DE8}\") = \"libs\", \"libs\", \"{F01}\""
        );
        assert_eq!(lines[1], "EndProject");

        let fe_core = FOLDERS.iter().position(|spec| spec.key == "fe-core").unwrap();
        assert_eq!(
            lines[fe_core * 2],
            format!(
                "Project(\"{{2150E333-8FDC-42A3-9474-1A3956D46DE8}}\") = \"core\", \"core\", \"{{F{:02}}}\"",
                fe_core + 1
            )
        );
    }

    #[test]
    fn folder_edges_precede_project_edges() {
        let taxonomy = numbered_taxonomy();
        let projects = [
            project("P1", r"libs\backend\auth\Foo.csproj"),
            project("P2", r"tools\misc\X.csproj"),
            project("P3", r"Apps\Demo\Demo.csproj"),
        ];
        let entries = nesting_entries(&taxonomy, &projects);

        let folder_edges = FOLDERS.iter().filter(|spec| spec.parent.is_some()).count();
        assert_eq!(entries.len(), folder_edges + 2);
        assert!(entries[..folder_edges]
            .iter()
            .all(|entry| entry.child.starts_with('F')));

        let auth = taxonomy.guid_of("auth").unwrap();
        let apps = taxonomy.guid_of("apps").unwrap();
        assert_eq!(entries[folder_edges], NestingEntry::new("P1", auth));
        assert_eq!(entries[folder_edges + 1], NestingEntry::new("P3", apps));
    }

    #[test]
    fn root_folders_have_no_nesting_line() {
        let taxonomy = numbered_taxonomy();
        let entries = nesting_entries(&taxonomy, &[]);
        for root in ["libs", "apps", "templates"] {
            let guid = taxonomy.guid_of(root).unwrap();
            assert!(entries.iter().all(|entry| entry.child != guid));
        }
        let backend = taxonomy.guid_of("backend").unwrap();
        let libs = taxonomy.guid_of("libs").unwrap();
        assert!(entries.contains(&NestingEntry::new(backend, libs)));
    }

    #[test]
    fn section_wraps_entries_with_markers() {
        let specs = [FolderSpec {
            key: "solo",
            parent: None,
            display: None,
        }];
        let taxonomy = Taxonomy::with_guids(&specs, || "S".to_string());
        let entries = nesting_entries(&taxonomy, &[]);
        assert!(entries.is_empty());

        let section = nested_projects_section(&[NestingEntry::new("A", "B")]);
        assert_eq!(
            section,
            vec![
                NESTED_PROJECTS_HEADER.to_string(),
                "\t\t{A} = {B}".to_string(),
                NESTED_PROJECTS_FOOTER.to_string(),
            ]
        );
    }
}
