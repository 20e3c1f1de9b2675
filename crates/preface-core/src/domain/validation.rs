use crate::domain::{
    catalog::TemplateCatalog, entities::ProjectStructure, error::DomainError,
};

/// Centralized domain validation.
///
/// Entities validate themselves; this is the single entry point services call.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_catalog(catalog: &TemplateCatalog) -> Result<(), DomainError> {
        catalog.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
