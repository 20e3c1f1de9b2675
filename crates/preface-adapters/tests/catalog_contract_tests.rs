//! The rendered sources must agree with the contracts the catalog declares.
//!
//! These tests read the generated TypeScript back, pull out its import and
//! export statements with a deliberately small parser, and compare them with
//! the unit contracts and with each other.

use std::collections::{BTreeMap, BTreeSet};

use preface_adapters::{
    builtin_templates::{CONTROLLER_FIELDS, symbols},
    preface_catalog,
};
use preface_core::domain::{
    ProjectParameters, ProjectStructure, ReferenceConfig, RelativePath, Symbol,
    entities::contract::ImportSource,
};

const REFERENCE: &str = "https://cdn.example.com/preface/mod.ts";

fn rendered() -> ProjectStructure {
    preface_catalog()
        .render(
            &ProjectParameters::new("demo").unwrap(),
            &ReferenceConfig::new(REFERENCE).unwrap(),
        )
        .unwrap()
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
enum Name {
    Default,
    Named(String),
}

#[derive(Debug, Default)]
struct Module {
    imports: BTreeMap<String, BTreeSet<Name>>,
    exports: BTreeSet<Name>,
}

/// Joins multi-line statements, then reads `import`/`export` forms the
/// templates actually use.
fn parse_module(text: &str) -> Module {
    let mut module = Module::default();

    let mut statements = Vec::new();
    let mut pending = String::new();
    for line in text.lines() {
        let line = line.trim();
        if pending.is_empty() && !(line.starts_with("import ") || line.starts_with("export ")) {
            continue;
        }
        pending.push_str(line);
        pending.push(' ');
        if line.ends_with(';') || line.ends_with("=> {") || line.ends_with('`') {
            statements.push(std::mem::take(&mut pending));
        }
    }

    for statement in statements {
        let statement = statement.trim();
        if let Some(rest) = statement.strip_prefix("import ") {
            let (clause, source) = split_from(rest);
            module
                .imports
                .entry(source)
                .or_default()
                .extend(parse_clause(&clause));
        } else if statement.starts_with("export default") {
            module.exports.insert(Name::Default);
        } else if let Some(rest) = statement.strip_prefix("export ") {
            let (clause, source) = split_from(rest);
            let names = parse_clause(&clause);
            module.exports.extend(names.iter().cloned());
            module.imports.entry(source).or_default().extend(names);
        }
    }

    module
}

fn split_from(rest: &str) -> (String, String) {
    let (clause, source) = rest.rsplit_once(" from ").unwrap();
    let source = source.trim().trim_end_matches(';').trim_matches('"');
    (clause.trim().to_string(), source.to_string())
}

fn parse_clause(clause: &str) -> Vec<Name> {
    match clause.strip_prefix('{') {
        Some(inner) => inner
            .trim_end_matches('}')
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Name::Named(s.to_string()))
            .collect(),
        None => vec![Name::Default],
    }
}

fn to_name(symbol: &Symbol) -> Name {
    match symbol {
        Symbol::Default => Name::Default,
        Symbol::Named(n) => Name::Named((*n).to_string()),
    }
}

fn script_units() -> impl Iterator<Item = (RelativePath, String)> {
    rendered()
        .files()
        .filter(|f| {
            let name = f.path.file_name();
            name.ends_with(".ts") || name.ends_with(".tsx")
        })
        .map(|f| (f.path.clone(), f.contents.clone()))
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
fn text_imports_match_declared_contracts() {
    let catalog = preface_catalog();

    for (path, text) in script_units() {
        let unit = catalog.unit(path.as_str()).unwrap();
        let parsed = parse_module(&text);

        let mut declared: BTreeMap<String, BTreeSet<Name>> = BTreeMap::new();
        for spec in unit.contract.imports() {
            let source = match &spec.source {
                ImportSource::Relative(s) => (*s).to_string(),
                ImportSource::Reference => REFERENCE.to_string(),
            };
            declared
                .entry(source)
                .or_default()
                .extend(spec.symbols.iter().map(to_name));
        }

        assert_eq!(parsed.imports, declared, "imports of {path}");
    }
}

#[test]
fn text_exports_match_declared_contracts() {
    let catalog = preface_catalog();

    for (path, text) in script_units() {
        let unit = catalog.unit(path.as_str()).unwrap();
        let declared: BTreeSet<Name> = unit.contract.exports().iter().map(to_name).collect();
        assert_eq!(parse_module(&text).exports, declared, "exports of {path}");
    }
}

#[test]
fn every_relative_import_is_satisfied_by_its_target() {
    let modules: BTreeMap<RelativePath, Module> = script_units()
        .map(|(path, text)| (path, parse_module(&text)))
        .collect();

    for (path, module) in &modules {
        for (source, names) in &module.imports {
            if source == REFERENCE {
                continue;
            }
            let target = path
                .resolve(source)
                .unwrap_or_else(|| panic!("{path} imports unresolvable {source}"));
            let exporter = modules
                .get(&target)
                .unwrap_or_else(|| panic!("{path} imports missing {target}"));
            for name in names {
                assert!(
                    exporter.exports.contains(name),
                    "{path} imports {name:?} that {target} does not export"
                );
            }
        }
    }
}

#[test]
fn hub_exports_exactly_what_is_consumed() {
    let modules: BTreeMap<RelativePath, Module> = script_units()
        .map(|(path, text)| (path, parse_module(&text)))
        .collect();
    let hub = RelativePath::new("src/deps.ts");

    let mut consumed = BTreeSet::new();
    for (path, module) in &modules {
        for (source, names) in &module.imports {
            if path.resolve(source).as_ref() == Some(&hub) {
                consumed.extend(names.iter().cloned());
            }
        }
    }
    // The tooling configuration consumes the markup namespace.
    consumed.insert(Name::Named(symbols::JSX.to_string()));

    assert_eq!(modules[&hub].exports, consumed);
}

#[test]
fn template_uses_exactly_the_controller_fields() {
    let structure = rendered();
    let controller = &structure
        .file("src/components/Main/controller.ts")
        .unwrap()
        .contents;
    let template = &structure
        .file("src/components/Main/template.tsx")
        .unwrap()
        .contents;

    let returned: BTreeSet<&str> = controller
        .split("return {")
        .nth(1)
        .unwrap()
        .split('}')
        .next()
        .unwrap()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let used: BTreeSet<&str> = template
        .split("state.")
        .skip(1)
        .map(|rest| {
            let end = rest
                .find(|c: char| !c.is_ascii_alphanumeric())
                .unwrap_or(rest.len());
            &rest[..end]
        })
        .collect();

    let expected: BTreeSet<&str> = CONTROLLER_FIELDS.into_iter().collect();
    assert_eq!(returned, expected);
    assert_eq!(used, expected);
}

#[test]
fn template_classes_exist_in_style() {
    let structure = rendered();
    let style = &structure.file("src/style.ts").unwrap().contents;
    let template = &structure
        .file("src/components/Main/template.tsx")
        .unwrap()
        .contents;

    let classes: BTreeSet<&str> = template
        .split("class=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect();

    assert_eq!(classes, BTreeSet::from(["block", "main"]));
    for class in classes {
        assert!(style.contains(&format!(".{class} {{")), "missing .{class}");
    }
}

#[test]
fn event_bindings_use_dollar_prefix() {
    let structure = rendered();
    let template = &structure
        .file("src/components/Main/template.tsx")
        .unwrap()
        .contents;

    assert!(template.contains("$input={state.textChange}"));
    assert!(template.contains("$click="));
    assert!(!template.contains("onClick"));
}
