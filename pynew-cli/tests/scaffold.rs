//! Integration tests for project generation through the library API

use std::fs;
use std::path::Path;

use pynew_cli_lib::{Invocation, NewCommand, ProjectKind, ResourceDir, ScaffoldError};
use tempfile::TempDir;

fn invocation(target: &str, kind: ProjectKind, force: bool) -> Invocation {
    Invocation {
        target: Some(target.to_string()),
        app: kind == ProjectKind::App,
        lib: kind == ProjectKind::Lib,
        force,
    }
}

fn generate(cwd: &Path, target: &str, kind: ProjectKind, force: bool) -> Result<(), ScaffoldError> {
    let project = invocation(target, kind, force).resolve(cwd, None)?;
    NewCommand::new(project, ResourceDir::bundled())
        .quiet(true)
        .execute()
}

/// `demo --lib` from a fresh working directory
#[test]
fn test_lib_end_to_end() {
    let work = TempDir::new().unwrap();
    generate(work.path(), "demo", ProjectKind::Lib, false).unwrap();

    let root = work.path().join("demo");
    assert_eq!(fs::read(root.join("tests/__init__.py")).unwrap(), b"");
    assert!(root.join("demo/__init__.py").is_file());
    assert!(!fs::read_to_string(root.join("demo/__init__.py")).unwrap().is_empty());

    let setup = fs::read_to_string(root.join("setup.py")).unwrap();
    assert!(setup.contains("setup(name='demo',"));

    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert_eq!(readme.lines().next(), Some("# demo"));
    assert!(readme.contains("`mypy demo tests`"));
}

/// Application layout has a marker package and no packaging manifest
#[test]
fn test_app_end_to_end() {
    let work = TempDir::new().unwrap();
    generate(work.path(), "service", ProjectKind::App, false).unwrap();

    let root = work.path().join("service");
    assert_eq!(fs::read(root.join("app/__init__.py")).unwrap(), b"");
    assert!(!root.join("setup.py").exists());
    assert!(root.join("Pipfile").is_file());

    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert_eq!(readme.lines().next(), Some("# service"));
}

/// Every copied resource matches its source byte-for-byte, except the
/// substituted drone config
#[test]
fn test_copies_match_resources() {
    let work = TempDir::new().unwrap();
    generate(work.path(), "service", ProjectKind::App, false).unwrap();

    let resources = ResourceDir::bundled();
    let root = work.path().join("service");
    for (source, output) in [
        (".drone.yml_app", ".drone.yml"),
        (".gitignore_app", ".gitignore"),
        ("Pipfile", "Pipfile"),
        ("setup.cfg", "setup.cfg"),
        ("tests_conftest.py", "tests/conftest.py"),
        ("CHANGELOG.md", "CHANGELOG.md"),
        ("clean.sh", "scripts/clean.sh"),
    ] {
        let expected = fs::read(resources.resolve(source).unwrap()).unwrap();
        let actual = fs::read(root.join(output)).unwrap();
        assert_eq!(actual, expected, "{output} differs from {source}");
    }
}

/// A second run without `--force` fails and leaves the first run's output alone
#[test]
fn test_second_run_requires_force() {
    let work = TempDir::new().unwrap();
    generate(work.path(), "demo", ProjectKind::Lib, false).unwrap();

    let readme_path = work.path().join("demo/README.md");
    fs::write(&readme_path, "# edited\n").unwrap();

    let err = generate(work.path(), "demo", ProjectKind::Lib, false).unwrap_err();
    assert!(matches!(err, ScaffoldError::DirectoryExists(_)));
    assert_eq!(fs::read_to_string(&readme_path).unwrap(), "# edited\n");

    generate(work.path(), "demo", ProjectKind::Lib, true).unwrap();
    assert_eq!(
        fs::read_to_string(&readme_path).unwrap().lines().next(),
        Some("# demo")
    );
}

/// A path target uses its final component as the project name
#[test]
fn test_nested_path_target() {
    let work = TempDir::new().unwrap();
    let target = work.path().join("code").join("libs").join("parser");
    generate(work.path(), target.to_str().unwrap(), ProjectKind::Lib, false).unwrap();

    assert!(target.join("parser/__init__.py").is_file());
    assert!(fs::read_to_string(target.join("setup.py"))
        .unwrap()
        .contains("name='parser'"));
}

/// A missing template on a fresh target leaves nothing behind
#[test]
fn test_rollback_removes_fresh_tree() {
    let work = TempDir::new().unwrap();
    let partial = TempDir::new().unwrap();
    let bundled = ResourceDir::bundled();
    for name in ["lib_init.py", ".drone.yml_lib", ".gitignore_lib", "setup.cfg"] {
        fs::copy(bundled.resolve(name).unwrap(), partial.path().join(name)).unwrap();
    }

    let project = invocation("demo", ProjectKind::Lib, false)
        .resolve(work.path(), None)
        .unwrap();
    let err = NewCommand::new(project, ResourceDir::new(partial.path()))
        .quiet(true)
        .execute()
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::ResourceMissing { ref name, .. } if name == "tests_conftest.py"));
    assert!(!work.path().join("demo").exists());
}

/// A plain I/O failure mid-copy removes a tree this run created.
/// A library named after a copied resource gets its package directory at the
/// path the resource is copied to, so the copy fails.
#[test]
fn test_io_failure_removes_fresh_tree() {
    let work = TempDir::new().unwrap();
    let err = generate(work.path(), "CHANGELOG.md", ProjectKind::Lib, false).unwrap_err();

    assert!(
        matches!(err, ScaffoldError::Mutation { ref path, .. } if path.ends_with("CHANGELOG.md/CHANGELOG.md")),
        "unexpected error: {err:?}"
    );
    assert!(!work.path().join("CHANGELOG.md").exists());
}

/// A plain I/O failure under `--force` leaves the pre-existing target alone
#[test]
fn test_io_failure_keeps_forced_target() {
    let work = TempDir::new().unwrap();
    let target = work.path().join("demo");
    fs::write(&target, "not a directory").unwrap();

    let err = generate(work.path(), "demo", ProjectKind::App, true).unwrap_err();

    assert!(
        matches!(err, ScaffoldError::Mutation { ref path, .. } if path == &target),
        "unexpected error: {err:?}"
    );
    assert!(target.is_file());
    assert_eq!(fs::read_to_string(&target).unwrap(), "not a directory");
}
