//! The template catalog: the authoritative, ordered set of template units.
//!
//! A catalog maps one [`ProjectParameters`] + [`ReferenceConfig`] pair to a
//! complete [`ProjectStructure`]. Rendering is pure and deterministic; the
//! same inputs always produce byte-identical output in the same order.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, instrument};

use crate::domain::{
    entities::{
        common::RelativePath,
        contract::{ImportSource, SymbolContract},
        project::ProjectParameters,
        project_structure::ProjectStructure,
        reference::ReferenceConfig,
        template::{DirectorySpec, RenderContext, TemplateUnit},
    },
    error::DomainError,
};

/// Ordered template units plus reserved directories.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    units: Vec<TemplateUnit>,
    directories: Vec<DirectorySpec>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, unit: TemplateUnit) -> Self {
        self.units.push(unit);
        self
    }

    pub fn with_directory(mut self, dir: DirectorySpec) -> Self {
        self.directories.push(dir);
        self
    }

    pub fn units(&self) -> &[TemplateUnit] {
        &self.units
    }

    pub fn directories(&self) -> &[DirectorySpec] {
        &self.directories
    }

    pub fn unit(&self, path: &str) -> Option<&TemplateUnit> {
        self.units.iter().find(|u| u.path.as_str() == path)
    }

    /// Relative paths of all units, in write order.
    pub fn paths(&self) -> impl Iterator<Item = &RelativePath> {
        self.units.iter().map(|u| &u.path)
    }

    /// Structural validation: non-empty, unique paths, and no file sitting
    /// where another entry needs a directory. Also runs
    /// [`Self::check_consistency`].
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.units.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut files = BTreeSet::new();
        for unit in &self.units {
            if !files.insert(&unit.path) {
                return Err(DomainError::DuplicatePath {
                    path: unit.path.to_string(),
                });
            }
        }

        let mut dirs = BTreeSet::new();
        for dir in &self.directories {
            if files.contains(&dir.path) || !dirs.insert(&dir.path) {
                return Err(DomainError::DuplicatePath {
                    path: dir.path.to_string(),
                });
            }
        }

        let ancestors = self
            .units
            .iter()
            .map(|u| &u.path)
            .chain(self.directories.iter().map(|d| &d.path))
            .flat_map(RelativePath::ancestors);
        for ancestor in ancestors {
            if files.contains(&ancestor) {
                return Err(DomainError::InvalidPath {
                    path: ancestor.to_string(),
                    reason: "used both as a file and as a directory".into(),
                });
            }
        }

        self.check_consistency()
    }

    /// Check that every relative import resolves to a unit that exports the
    /// imported symbols.
    ///
    /// Imports from the external reference location are not checked here:
    /// the library behind it is outside the workspace.
    pub fn check_consistency(&self) -> Result<(), DomainError> {
        let contracts: BTreeMap<&RelativePath, &SymbolContract> = self
            .units
            .iter()
            .map(|u| (&u.path, &u.contract))
            .collect();

        for unit in &self.units {
            for import in unit.contract.imports() {
                let ImportSource::Relative(specifier) = import.source else {
                    continue;
                };

                let unresolved = || DomainError::UnresolvedImport {
                    importer: unit.path.to_string(),
                    specifier: specifier.to_string(),
                };
                let target = unit.path.resolve(specifier).ok_or_else(unresolved)?;
                let exports = contracts.get(&target).ok_or_else(unresolved)?;

                if let Some(missing) = import.symbols.iter().find(|s| !exports.exports_symbol(**s))
                {
                    return Err(DomainError::MissingExport {
                        importer: unit.path.to_string(),
                        source_path: target.to_string(),
                        symbol: missing.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Render every unit into a [`ProjectStructure`] rooted at the project
    /// name. Reserved directories come first, then files in catalog order.
    #[instrument(skip_all, fields(project = %params.name(), reference = %reference))]
    pub fn render(
        &self,
        params: &ProjectParameters,
        reference: &ReferenceConfig,
    ) -> Result<ProjectStructure, DomainError> {
        self.validate()?;

        let ctx = RenderContext::new(params, reference);
        let mut structure = ProjectStructure::new(params.name());

        for dir in &self.directories {
            structure.add_directory(dir.path.clone());
        }
        for unit in &self.units {
            let contents = unit.render(&ctx);
            debug!(path = %unit.path, bytes = contents.len(), "rendered template unit");
            structure.add_file(unit.path.clone(), contents);
        }

        structure.validate()?;
        Ok(structure)
    }
}
