//! Implementation of the `preface list` command.

use serde::Serialize;

use preface_adapters::preface_catalog;
use preface_core::{
    domain::{ImportSpec, RelativePath, Symbol, TemplateCatalog},
    error::PrefaceError,
};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let catalog = preface_catalog();
    catalog.validate().map_err(PrefaceError::from)?;

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Files in a new Preface project:")?;
            for unit in catalog.units() {
                output.print(&format!("  {:<36} {}", unit.path.as_str(), unit.description))?;
                let exports = describe_exports(unit.contract.exports());
                if !exports.is_empty() {
                    output.detail(&format!("  {:<34} exports {exports}", ""))?;
                }
            }
            for dir in catalog.directories() {
                output.print(&format!("  {:<36} reserved, left empty", format!("{}/", dir.path)))?;
            }
        }

        ListFormat::List => {
            for path in catalog.paths() {
                output.print(path.as_str())?;
            }
            for dir in catalog.directories() {
                output.print(&format!("{}/", dir.path))?;
            }
        }

        ListFormat::Json => output.json(&CatalogListing::new(&catalog))?,
    }

    Ok(())
}

fn describe_exports(exports: &[Symbol]) -> String {
    exports
        .iter()
        .map(Symbol::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ── JSON listing ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CatalogListing<'a> {
    files: Vec<UnitListing<'a>>,
    directories: Vec<&'a RelativePath>,
}

#[derive(Debug, Serialize)]
struct UnitListing<'a> {
    path: &'a RelativePath,
    description: &'static str,
    exports: &'a [Symbol],
    imports: &'a [ImportSpec],
}

impl<'a> CatalogListing<'a> {
    fn new(catalog: &'a TemplateCatalog) -> Self {
        Self {
            files: catalog
                .units()
                .iter()
                .map(|unit| UnitListing {
                    path: &unit.path,
                    description: unit.description,
                    exports: unit.contract.exports(),
                    imports: unit.contract.imports(),
                })
                .collect(),
            directories: catalog.directories().iter().map(|d| &d.path).collect(),
        }
    }
}
