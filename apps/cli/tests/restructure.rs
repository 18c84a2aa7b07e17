use std::error::Error;
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const SOLUTION: &str = "\u{feff}\r\n\
Microsoft Visual Studio Solution File, Format Version 12.00\r\n\
Project(\"{2150E333-8FDC-42A3-9474-1A3956D46DE8}\") = \"Catalog\", \"Catalog\", \"{F0000000-0000-0000-0000-000000000001}\"\r\n\
EndProject\r\n\
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"ACommerce.Catalog.Products\", \"libs\\backend\\catalog\\ACommerce.Catalog.Products\\ACommerce.Catalog.Products.csproj\", \"{C0000000-0000-0000-0000-000000000001}\"\r\n\
EndProject\r\n\
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"ACommerce.Catalog.Listings\", \"libs\\backend\\catalog\\ACommerce.Catalog.Listings\\ACommerce.Catalog.Listings.csproj\", \"{C0000000-0000-0000-0000-000000000002}\"\r\n\
EndProject\r\n\
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Scratch\", \"tools\\misc\\Scratch.csproj\", \"{C0000000-0000-0000-0000-000000000003}\"\r\n\
EndProject\r\n\
Global\r\n\
\tGlobalSection(NestedProjects) = preSolution\r\n\
\t\t{C0000000-0000-0000-0000-000000000001} = {F0000000-0000-0000-0000-000000000001}\r\n\
\tEndGlobalSection\r\n\
EndGlobal\r\n";

#[test]
fn restructures_solution_in_place() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let solution = dir.path().join("Shop.sln");
    fs::write(&solution, SOLUTION)?;

    Command::cargo_bin("slnfolders")?
        .arg(&solution)
        .assert()
        .success()
        .stdout(predicate::str::contains("Solution: "))
        .stdout(predicate::str::contains("Backup created:"))
        .stdout(predicate::str::contains("Found 3 projects and 1 old folders"))
        .stdout(predicate::str::contains("  catalog: 2"))
        .stdout(predicate::str::contains("Unassigned projects: 1"));

    let backup = fs::read(dir.path().join("Shop.sln.bak"))?;
    assert_eq!(backup, SOLUTION.as_bytes());

    let rewritten = fs::read_to_string(&solution)?;
    assert!(rewritten.starts_with('\u{feff}'));
    assert!(!rewritten.contains("F0000000-0000-0000-0000-000000000001"));
    assert!(rewritten.contains("\"catalog\", \"catalog\""));
    assert!(rewritten.contains("\tGlobalSection(NestedProjects) = preSolution\r\n"));
    assert!(!rewritten.contains("{C0000000-0000-0000-0000-000000000003} ="));
    Ok(())
}

#[test]
fn uses_default_solution_name_in_working_directory() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("ACommerce.Libraries.sln"), SOLUTION)?;

    Command::cargo_bin("slnfolders")?
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Solution file updated successfully!"));

    assert!(dir.path().join("ACommerce.Libraries.sln.bak").exists());
    Ok(())
}

#[test]
fn dry_run_writes_nothing() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let solution = dir.path().join("Shop.sln");
    fs::write(&solution, SOLUTION)?;

    Command::cargo_bin("slnfolders")?
        .args(["--dry-run"])
        .arg(&solution)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run only"))
        .stdout(predicate::str::contains("Backup created:").not());

    assert_eq!(fs::read_to_string(&solution)?, SOLUTION);
    assert!(!dir.path().join("Shop.sln.bak").exists());
    Ok(())
}

#[test]
fn missing_global_section_fails_without_rewriting() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let solution = dir.path().join("Broken.sln");
    let original = "Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"A\", \"Apps\\A\\A.csproj\", \"{A0000000-0000-0000-0000-000000000001}\"\nEndProject\n";
    fs::write(&solution, original)?;

    Command::cargo_bin("slnfolders")?
        .arg(&solution)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not find the Global section"))
        .stderr(predicate::str::contains("original kept in"))
        .stderr(predicate::str::contains("Broken.sln.bak"));

    assert_eq!(fs::read_to_string(&solution)?, original);
    assert!(dir.path().join("Broken.sln.bak").exists());
    Ok(())
}

#[test]
fn missing_solution_file_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    Command::cargo_bin("slnfolders")?
        .arg(dir.path().join("absent.sln"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
    Ok(())
}
