//! Preface Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Preface
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           preface-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (ScaffoldService, Materializer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, References)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    preface-adapters (Infrastructure)    │
//! │ (LocalFilesystem, builtin catalog, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (TemplateCatalog, SymbolContract, ...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use preface_core::application::ScaffoldService;
//!
//! // Adapters come from `preface-adapters`.
//! let service = ScaffoldService::new(catalog, references, filesystem)?;
//! let root = service.create("myapp", ".")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Materializer, ScaffoldService,
        ports::{Filesystem, ReferenceSource},
    };
    pub use crate::domain::{
        ImportSpec, ProjectParameters, ProjectStructure, ReferenceConfig, RelativePath,
        RenderContext, RenderedFile, Symbol, SymbolContract, TemplateCatalog, TemplateContent,
        TemplateUnit,
    };
    pub use crate::error::{PrefaceError, PrefaceResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
