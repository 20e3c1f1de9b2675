//! Infrastructure adapters for Preface.
//!
//! This crate implements the ports defined in `preface-core::application::ports`
//! and ships the built-in template catalog. It contains all I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod reference;

// Re-export commonly used adapters
pub use builtin_templates::preface_catalog;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use reference::FixedReference;
