//! Application layer for Preface.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, Materializer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! template knowledge itself. The catalog lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{Materializer, ScaffoldService};

pub use ports::{Filesystem, ReferenceSource};

pub use error::ApplicationError;
