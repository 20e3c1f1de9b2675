//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `preface-adapters` and the CLI
//! implement these.
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file operations
//!   - `ReferenceSource`: Delivers the reference configuration

pub mod output;

pub use output::{Filesystem, ReferenceSource};

#[cfg(test)]
pub use output::{MockFilesystem, MockReferenceSource};
