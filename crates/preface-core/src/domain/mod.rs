//! Core domain layer for Preface.
//!
//! This module contains pure logic with no I/O. Materialization happens via
//! ports (traits) defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: parameters, references and catalogs never change
//!   after construction
pub mod catalog;
pub mod entities;
pub mod error;

mod validation;

pub use catalog::TemplateCatalog;

pub use entities::{
    common::RelativePath,
    contract::{ImportSpec, Symbol, SymbolContract},
    project::ProjectParameters,
    project_structure::{DirectoryToCreate, FsEntry, ProjectStructure, RenderedFile},
    reference::ReferenceConfig,
    template::{DirectorySpec, RenderContext, RenderFn, TemplateContent, TemplateUnit},
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;
