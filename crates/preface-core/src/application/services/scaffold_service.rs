//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire `create` workflow:
//! 1. Validate the project name
//! 2. Load the reference configuration
//! 3. Render the catalog
//! 4. Materialize the workspace
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, Materializer,
        ports::{Filesystem, ReferenceSource},
    },
    domain::{
        DomainValidator as validator, ProjectParameters, ProjectStructure, ReferenceConfig,
        TemplateCatalog,
    },
    error::{PrefaceError, PrefaceResult},
};

/// Main scaffolding service.
pub struct ScaffoldService {
    catalog: TemplateCatalog,
    references: Box<dyn ReferenceSource>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given catalog and adapters.
    ///
    /// The catalog is validated up front; an inconsistent catalog is a bug
    /// and never reaches the filesystem.
    pub fn new(
        catalog: TemplateCatalog,
        references: Box<dyn ReferenceSource>,
        filesystem: Box<dyn Filesystem>,
    ) -> PrefaceResult<Self> {
        validator::validate_catalog(&catalog)?;
        Ok(Self {
            catalog,
            references,
            filesystem,
        })
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Create a new workspace named `name` inside `parent`.
    ///
    /// Returns the workspace root on success. Invalid names and configuration
    /// errors are reported before any filesystem access.
    #[instrument(
        skip_all,
        fields(project = %name.as_ref(), parent = %parent.as_ref().display())
    )]
    pub fn create(&self, name: impl AsRef<str>, parent: impl AsRef<Path>) -> PrefaceResult<PathBuf> {
        let structure = self.plan(name, parent)?;

        info!(
            files = structure.file_count(),
            directories = structure.directories().len(),
            "Catalog rendered"
        );

        let root = Materializer::new(self.filesystem.as_ref()).materialize(&structure)?;

        info!(root = %root.display(), "Project created");
        Ok(root)
    }

    /// Everything `create` does short of touching the filesystem.
    pub fn plan(
        &self,
        name: impl AsRef<str>,
        parent: impl AsRef<Path>,
    ) -> PrefaceResult<ProjectStructure> {
        let params = ProjectParameters::new(name.as_ref())?;
        let reference = self.load_reference()?;

        let structure = self.catalog.render(&params, &reference)?;
        Ok(structure.rooted_at(parent.as_ref().join(params.name())))
    }

    /// A dry run of `create`: the plan, refused when `create` itself would be
    /// refused because the root is already taken.
    pub fn preview(
        &self,
        name: impl AsRef<str>,
        parent: impl AsRef<Path>,
    ) -> PrefaceResult<ProjectStructure> {
        let structure = self.plan(name, parent)?;
        if self.filesystem.exists(structure.root()) {
            return Err(ApplicationError::WorkspaceAlreadyExists {
                path: structure.root().to_path_buf(),
            }
            .into());
        }
        Ok(structure)
    }

    /// Load and normalise the reference configuration. Domain validation
    /// failures from the source surface as configuration errors.
    fn load_reference(&self) -> PrefaceResult<ReferenceConfig> {
        self.references.load().map_err(|e| match e {
            PrefaceError::Domain(domain) => PrefaceError::Configuration {
                message: domain.to_string(),
            },
            other => other,
        })
    }
}
