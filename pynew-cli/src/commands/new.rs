//! Project scaffolding command

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, OpenOptions};
use std::path::Path;
use tracing::info;

use crate::error::{Result, ScaffoldError};
use crate::resolver::ResolvedProject;
use crate::rollback::RollbackGuard;
use crate::templates::{
    substitute_project_name, ProjectTemplate, ResourceDir, TemplateManifest, TemplateMapping,
    Transform, PACKAGE_MARKER, TESTS_DIR,
};
use crate::ProjectKind;

/// Create a new Python project skeleton
pub struct NewCommand {
    project: ResolvedProject,
    manifest: TemplateManifest,
    resources: ResourceDir,
    quiet: bool,
}

impl NewCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `project` - Validated target from [`crate::Invocation::resolve`]
    /// * `resources` - Where the template resources are read from
    #[must_use]
    pub fn new(project: ResolvedProject, resources: ResourceDir) -> Self {
        let manifest = TemplateManifest::for_kind(project.kind());
        Self {
            project,
            manifest,
            resources,
            quiet: false,
        }
    }

    /// Suppress progress and next-steps output
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Execute the command
    ///
    /// On failure the project directory is removed if this run created it, and
    /// left in place otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::ResourceMissing`], [`ScaffoldError::Mutation`] or
    /// [`ScaffoldError::Render`] if any step fails.
    pub fn execute(&self) -> Result<()> {
        if !self.quiet {
            println!(
                "{} {} {}",
                style("Creating").green().bold(),
                style(format!("python {} project:", self.project.kind())).bold(),
                style(self.project.name()).cyan().bold()
            );
            println!();
        }

        let spinner = self.spinner();
        let guard = RollbackGuard::new(self.project.dir(), self.project.already_existed());

        let outcome = self.scaffold(&spinner);
        spinner.finish_and_clear();
        outcome?;

        guard.commit();

        if !self.quiet {
            self.print_success();
        }

        Ok(())
    }

    fn spinner(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner
    }

    fn scaffold(&self, spinner: &ProgressBar) -> Result<()> {
        spinner.set_message("Creating project structure...");
        self.create_structure()?;

        spinner.set_message("Adding project skeleton files...");
        self.copy_templates()?;

        spinner.set_message("Generating project files...");
        self.generate_files()
    }

    /// Create the root, `tests/` and the main source package
    fn create_structure(&self) -> Result<()> {
        let root = self.project.dir();
        info!("Making a new project in directory {}...", root.display());
        create_dir(root)?;

        let tests_dir = root.join(TESTS_DIR);
        info!("Making the tests directory {} and {PACKAGE_MARKER}...", tests_dir.display());
        create_dir(&tests_dir)?;
        touch(&tests_dir.join(PACKAGE_MARKER))?;

        let main_dir = root.join(self.project.kind().source_dir(self.project.name()));
        info!("Making the main directory {} and {PACKAGE_MARKER}...", main_dir.display());
        create_dir(&main_dir)?;

        let init = main_dir.join(PACKAGE_MARKER);
        match self.manifest.source_init() {
            Some(resource) => {
                self.resources.copy_to(resource, &init)?;
            }
            None => touch(&init)?,
        }

        Ok(())
    }

    /// Copy every manifest resource into place
    fn copy_templates(&self) -> Result<()> {
        info!("Adding project skeleton files...");

        for mapping in self.manifest.copies() {
            self.copy_template(mapping)?;
        }

        Ok(())
    }

    fn copy_template(&self, mapping: &TemplateMapping) -> Result<()> {
        let dest = self.project.dir().join(mapping.output);
        if let Some(parent) = dest.parent() {
            create_dir(parent)?;
        }

        self.resources.copy_to(mapping.source, &dest)?;

        if mapping.transform == Transform::SubstituteProjectName {
            let text = fs::read_to_string(&dest)
                .map_err(|err| ScaffoldError::mutation("read back", &dest, err))?;
            write_file(&dest, &substitute_project_name(&text, self.project.name()))?;
        }

        if mapping.is_script() {
            make_executable(&dest)?;
        }

        Ok(())
    }

    /// Render README and, for libraries, `setup.py`
    fn generate_files(&self) -> Result<()> {
        let template = ProjectTemplate::new(self.project.name(), self.project.kind());

        for &file in self.manifest.generated() {
            let rendered = template.render(file)?;
            write_file(&self.project.dir().join(file.output()), &rendered)?;
        }

        Ok(())
    }

    /// Print success message with next steps
    fn print_success(&self) {
        println!("{}", style("✓ Project created successfully!").green().bold());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Navigate to project:", style("1.").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style(format!("cd {}", self.project.dir().display())).cyan()
        );
        println!();

        let (install, source) = match self.project.kind() {
            ProjectKind::App => ("pipenv install --dev", "app"),
            ProjectKind::Lib => ("pipenv install -e '.[dev]'", self.project.name()),
        };
        println!("  {} Install dependencies:", style("2.").cyan());
        println!("     {} {}", style("$").dim(), style(install).cyan());
        println!();
        println!("  {} Run the checks:", style("3.").cyan());
        println!("     {} {}", style("$").dim(), style("pipenv run flake8").cyan());
        println!(
            "     {} {}",
            style("$").dim(),
            style(format!("pipenv run pytest tests --cov {source}")).cyan()
        );
        println!();
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|err| ScaffoldError::mutation("create directory", path, err))
}

/// Create an empty file, leaving existing content alone
fn touch(path: &Path) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(|err| ScaffoldError::mutation("create file", path, err))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|err| ScaffoldError::mutation("write file", path, err))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|err| ScaffoldError::mutation("set permissions on", path, err))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Invocation;
    use tempfile::TempDir;

    fn resolve(cwd: &Path, target: &str, kind: ProjectKind, force: bool) -> ResolvedProject {
        Invocation {
            target: Some(target.to_string()),
            app: kind == ProjectKind::App,
            lib: kind == ProjectKind::Lib,
            force,
        }
        .resolve(cwd, None)
        .unwrap()
    }

    fn run(project: ResolvedProject, resources: ResourceDir) -> Result<()> {
        NewCommand::new(project, resources).quiet(true).execute()
    }

    #[test]
    fn test_app_layout() {
        let cwd = TempDir::new().unwrap();
        let project = resolve(cwd.path(), "demo_app", ProjectKind::App, false);
        run(project, ResourceDir::bundled()).unwrap();

        let root = cwd.path().join("demo_app");
        assert_eq!(fs::read(root.join("app/__init__.py")).unwrap(), b"");
        assert_eq!(fs::read(root.join("tests/__init__.py")).unwrap(), b"");
        assert!(root.join("Pipfile").is_file());
        assert!(!root.join("setup.py").exists());
        assert!(!root.join("demo_app").exists());
        for file in [".drone.yml", ".gitignore", "setup.cfg", "CHANGELOG.md", "README.md", "tests/conftest.py", "scripts/clean.sh"] {
            assert!(root.join(file).is_file(), "missing {file}");
        }
    }

    #[test]
    fn test_lib_layout() {
        let cwd = TempDir::new().unwrap();
        let project = resolve(cwd.path(), "demo", ProjectKind::Lib, false);
        run(project, ResourceDir::bundled()).unwrap();

        let root = cwd.path().join("demo");
        let init = fs::read_to_string(root.join("demo/__init__.py")).unwrap();
        let bundled_init = fs::read_to_string(ResourceDir::bundled().resolve("lib_init.py").unwrap()).unwrap();
        assert_eq!(init, bundled_init);
        assert!(!root.join("app").exists());
        assert!(!root.join("Pipfile").exists());

        let setup = fs::read_to_string(root.join("setup.py")).unwrap();
        assert!(setup.contains("name='demo'"));

        let drone = fs::read_to_string(root.join(".drone.yml")).unwrap();
        assert!(drone.contains("mypy demo tests"));
        assert!(!drone.contains("{project_name}"));
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_script_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let cwd = TempDir::new().unwrap();
        let project = resolve(cwd.path(), "demo", ProjectKind::App, false);
        run(project, ResourceDir::bundled()).unwrap();

        let mode = fs::metadata(cwd.path().join("demo/scripts/clean.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_missing_resource_rolls_back_fresh_dir() {
        let cwd = TempDir::new().unwrap();
        let empty = TempDir::new().unwrap();
        let project = resolve(cwd.path(), "demo", ProjectKind::Lib, false);

        let err = run(project, ResourceDir::new(empty.path())).unwrap_err();
        assert!(matches!(err, ScaffoldError::ResourceMissing { .. }));
        assert!(!cwd.path().join("demo").exists());
    }

    #[test]
    fn test_missing_resource_keeps_forced_dir() {
        let cwd = TempDir::new().unwrap();
        let empty = TempDir::new().unwrap();
        let root = cwd.path().join("demo");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("notes.txt"), "keep me").unwrap();

        let project = resolve(cwd.path(), "demo", ProjectKind::App, true);
        let err = run(project, ResourceDir::new(empty.path())).unwrap_err();
        assert!(matches!(err, ScaffoldError::ResourceMissing { .. }));

        assert!(root.is_dir());
        assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "keep me");
        // Everything before the first copy was written.
        assert!(root.join("tests/__init__.py").exists());
    }

    #[test]
    fn test_force_keeps_existing_marker_content() {
        let cwd = TempDir::new().unwrap();
        let root = cwd.path().join("demo");
        fs::create_dir_all(root.join("tests")).unwrap();
        fs::write(root.join("tests/__init__.py"), "# existing\n").unwrap();

        let project = resolve(cwd.path(), "demo", ProjectKind::App, true);
        run(project, ResourceDir::bundled()).unwrap();

        assert_eq!(fs::read_to_string(root.join("tests/__init__.py")).unwrap(), "# existing\n");
        assert!(root.join("README.md").is_file());
    }
}
