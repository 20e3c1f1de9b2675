//! Template units and their rendering context.
//!
//! ```text
//! TemplateCatalog
//! ├── Vec<DirectorySpec>        reserved directories (e.g. `dist/`)
//! └── Vec<TemplateUnit>         one per output file, in write order
//!      ├── RelativePath          where the file goes
//!      ├── SymbolContract        what it imports / exports
//!      └── TemplateContent       how its text is produced
//! ```
//!
//! Rendering is pure: a unit's text depends only on the [`RenderContext`],
//! which is built from [`ProjectParameters`] and [`ReferenceConfig`].

use std::collections::BTreeMap;
use std::fmt;

use super::{
    common::RelativePath, contract::SymbolContract, project::ProjectParameters,
    reference::ReferenceConfig,
};

/// Variable holding the project name.
pub const PROJECT_NAME: &str = "PROJECT_NAME";

/// Variable holding the configured reference location.
pub const REFERENCE_LOCATION: &str = "REFERENCE_LOCATION";

/// Context for template rendering.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `PROJECT_NAME` | "myapp" |
/// | `REFERENCE_LOCATION` | "https://deno.land/x/preface/mod.ts" |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    params: ProjectParameters,
    reference: ReferenceConfig,
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new(params: &ProjectParameters, reference: &ReferenceConfig) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert(PROJECT_NAME.to_string(), params.name().to_string());
        variables.insert(
            REFERENCE_LOCATION.to_string(),
            reference.primary_reference_location().to_string(),
        );

        Self {
            params: params.clone(),
            reference: reference.clone(),
            variables,
        }
    }

    pub fn project_name(&self) -> &str {
        self.params.name()
    }

    pub fn reference_location(&self) -> &str {
        self.reference.primary_reference_location()
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Single left-to-right pass: substituted values are never rescanned, so
    /// a project name that itself looks like a placeholder is emitted
    /// verbatim. Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            match after.find("}}") {
                Some(end) => match self.get(&after[..end]) {
                    Some(value) => {
                        out.push_str(value);
                        rest = &after[end + 2..];
                    }
                    None => {
                        out.push('{');
                        rest = &rest[start + 1..];
                    }
                },
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// A pure function producing a file body from the render context.
pub type RenderFn = fn(&RenderContext) -> String;

/// How a unit's text is produced.
#[derive(Clone, Copy)]
pub enum TemplateContent {
    /// Content used exactly as provided.
    Literal(&'static str),

    /// Content with `{{VARIABLE}}` placeholders to be substituted.
    Parameterized(&'static str),

    /// Content assembled in code, typically from the same symbol constants
    /// the unit's contract is built from.
    Generated(RenderFn),
}

impl TemplateContent {
    pub fn render(&self, ctx: &RenderContext) -> String {
        match self {
            Self::Literal(source) => (*source).to_string(),
            Self::Parameterized(source) => ctx.render(source),
            Self::Generated(render) => render(ctx),
        }
    }
}

impl fmt::Debug for TemplateContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(&s.len()).finish(),
            Self::Parameterized(s) => f.debug_tuple("Parameterized").field(&s.len()).finish(),
            Self::Generated(_) => f.write_str("Generated(..)"),
        }
    }
}

/// One output file of the catalog.
#[derive(Debug, Clone)]
pub struct TemplateUnit {
    pub path: RelativePath,
    pub description: &'static str,
    pub contract: SymbolContract,
    pub content: TemplateContent,
}

impl TemplateUnit {
    pub fn new(
        path: impl Into<RelativePath>,
        description: &'static str,
        contract: SymbolContract,
        content: TemplateContent,
    ) -> Self {
        Self {
            path: path.into(),
            description,
            contract,
            content,
        }
    }

    pub fn render(&self, ctx: &RenderContext) -> String {
        self.content.render(ctx)
    }
}

/// A directory the catalog creates even when no file lands in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    pub path: RelativePath,
}

impl DirectorySpec {
    pub fn new(path: impl Into<RelativePath>) -> Self {
        Self { path: path.into() }
    }
}
