//! Project template generation
//!
//! A [`TemplateManifest`] lists, per [`ProjectKind`], which shipped resources are
//! copied where and which files are generated. Generated files are rendered by
//! [`ProjectTemplate`]; resources are read from a [`ResourceDir`].

use std::path::Path;

use handlebars::Handlebars;
use serde_json::json;

use crate::error::{Result, ScaffoldError};
use crate::ProjectKind;

pub mod files;
pub mod resources;
pub use files::*;
pub use resources::ResourceDir;

/// Placeholder replaced in resources marked [`Transform::SubstituteProjectName`]
pub const PROJECT_NAME_PLACEHOLDER: &str = "{project_name}";

/// What happens to a resource after it is copied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Byte-for-byte copy
    Verbatim,
    /// Replace every literal `{project_name}` with the project name
    SubstituteProjectName,
}

/// Mapping from a shipped resource to its place in the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateMapping {
    /// File name in the resource directory
    pub source: &'static str,
    /// Output path relative to the project root
    pub output: &'static str,
    /// Post-copy transform
    pub transform: Transform,
}

impl TemplateMapping {
    const fn verbatim(source: &'static str, output: &'static str) -> Self {
        Self {
            source,
            output,
            transform: Transform::Verbatim,
        }
    }

    /// Shell scripts are made executable after copying
    #[must_use]
    pub fn is_script(&self) -> bool {
        Path::new(self.output)
            .extension()
            .is_some_and(|ext| ext == "sh")
    }
}

/// Files rendered rather than copied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratedFile {
    /// `README.md`, kind-specific
    Readme,
    /// `setup.py` packaging manifest
    SetupPy,
}

impl GeneratedFile {
    /// Output path relative to the project root
    #[must_use]
    pub const fn output(self) -> &'static str {
        match self {
            Self::Readme => "README.md",
            Self::SetupPy => "setup.py",
        }
    }
}

/// Application-only copies
const APP_MAPPINGS: &[TemplateMapping] = &[
    TemplateMapping::verbatim(".drone.yml_app", ".drone.yml"),
    TemplateMapping::verbatim(".gitignore_app", ".gitignore"),
    TemplateMapping::verbatim("Pipfile", "Pipfile"),
];

/// Library-only copies
const LIB_MAPPINGS: &[TemplateMapping] = &[
    TemplateMapping {
        source: ".drone.yml_lib",
        output: ".drone.yml",
        transform: Transform::SubstituteProjectName,
    },
    TemplateMapping::verbatim(".gitignore_lib", ".gitignore"),
];

/// Copies shared by every kind
const COMMON_MAPPINGS: &[TemplateMapping] = &[
    TemplateMapping::verbatim("setup.cfg", "setup.cfg"),
    TemplateMapping::verbatim("tests_conftest.py", "tests/conftest.py"),
    TemplateMapping::verbatim("CHANGELOG.md", "CHANGELOG.md"),
    TemplateMapping::verbatim("clean.sh", "scripts/clean.sh"),
];

/// Files rendered for applications
const APP_GENERATED: &[GeneratedFile] = &[GeneratedFile::Readme];

/// Files rendered for libraries
const LIB_GENERATED: &[GeneratedFile] = &[GeneratedFile::SetupPy, GeneratedFile::Readme];

/// Resource copied to `<lib>/__init__.py`
pub const LIB_INIT_RESOURCE: &str = "lib_init.py";

/// Marker file that makes a directory an importable package
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Tests directory name
pub const TESTS_DIR: &str = "tests";

/// Fixed description of everything generated for one [`ProjectKind`]
#[derive(Debug, Clone, Copy)]
pub struct TemplateManifest {
    kind: ProjectKind,
    specific: &'static [TemplateMapping],
    generated: &'static [GeneratedFile],
    source_init: Option<&'static str>,
}

impl TemplateManifest {
    /// Manifest for `kind`
    #[must_use]
    pub const fn for_kind(kind: ProjectKind) -> Self {
        match kind {
            ProjectKind::App => Self {
                kind,
                specific: APP_MAPPINGS,
                generated: APP_GENERATED,
                source_init: None,
            },
            ProjectKind::Lib => Self {
                kind,
                specific: LIB_MAPPINGS,
                generated: LIB_GENERATED,
                source_init: Some(LIB_INIT_RESOURCE),
            },
        }
    }

    /// Kind this manifest describes
    #[must_use]
    pub const fn kind(&self) -> ProjectKind {
        self.kind
    }

    /// Resource copies, kind-specific first
    pub fn copies(&self) -> impl Iterator<Item = &'static TemplateMapping> {
        self.specific.iter().chain(COMMON_MAPPINGS)
    }

    /// Files rendered into the project
    #[must_use]
    pub const fn generated(&self) -> &'static [GeneratedFile] {
        self.generated
    }

    /// Resource to use as the source package's `__init__.py`; `None` means an
    /// empty marker
    #[must_use]
    pub const fn source_init(&self) -> Option<&'static str> {
        self.source_init
    }

    /// Every resource this manifest needs
    pub fn required_resources(&self) -> impl Iterator<Item = &'static str> {
        self.source_init
            .into_iter()
            .chain(self.copies().map(|mapping| mapping.source))
    }
}

/// Renderer for generated files
pub struct ProjectTemplate {
    name: String,
    kind: ProjectKind,
    handlebars: Handlebars<'static>,
}

impl ProjectTemplate {
    /// Create a renderer for project `name`
    #[must_use]
    pub fn new(name: &str, kind: ProjectKind) -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating plain text and Python
        handlebars.register_escape_fn(handlebars::no_escape);

        Self {
            name: name.to_string(),
            kind,
            handlebars,
        }
    }

    /// Render one generated file
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] if the template fails to render.
    pub fn render(&self, file: GeneratedFile) -> Result<String> {
        let (name, template) = match file {
            GeneratedFile::Readme => (
                "README.md",
                match self.kind {
                    ProjectKind::App => README_APP,
                    ProjectKind::Lib => README_LIB,
                },
            ),
            GeneratedFile::SetupPy => ("setup.py", SETUP_PY),
        };

        let context = json!({
            "project_name": self.name,
            "kind": self.kind.to_string(),
        });

        self.handlebars
            .render_template(&dedent(template), &context)
            .map_err(|source| ScaffoldError::Render { name, source })
    }
}

/// Replace every literal `{project_name}` in `text`
#[must_use]
pub fn substitute_project_name(text: &str, project_name: &str) -> String {
    text.replace(PROJECT_NAME_PLACEHOLDER, project_name)
}

/// Strip the indentation shared by all non-blank lines, blank out whitespace-only
/// lines and drop the leading line break
#[must_use]
pub fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let dedented = text
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                &line[indent..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    match dedented.strip_prefix('\n') {
        Some(rest) => rest.to_string(),
        None => dedented,
    }
}
