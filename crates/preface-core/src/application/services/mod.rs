//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` drives `create`; `Materializer` turns a rendered
//! `ProjectStructure` into files through the `Filesystem` port.

pub mod materializer;
pub mod scaffold_service;

pub use materializer::Materializer;
pub use scaffold_service::ScaffoldService;
