pub mod common;
pub mod contract;
pub mod project;
pub mod project_structure;
pub mod reference;
pub mod template;

pub use crate::domain::DomainError;
pub use project::ProjectParameters;
pub use project_structure::ProjectStructure;
pub use reference::ReferenceConfig;
pub use template::TemplateUnit;
