//! Symbol contracts: what each template unit imports and exports.
//!
//! The text body of a unit is opaque to the domain. Its contract is not: the
//! catalog checks every relative import against the exports of the unit it
//! resolves to, so cross-file references are verified without parsing any
//! generated source.

use std::fmt;

use serde::Serialize;

/// One importable symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    /// The module's default export.
    Default,
    /// A named export.
    Named(&'static str),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Where an import points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "specifier")]
pub enum ImportSource {
    /// A module specifier relative to the importing file (`./x.ts`).
    Relative(&'static str),
    /// The configured external reference location.
    Reference,
}

/// A single import statement (or tooling reference) of a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSpec {
    pub source: ImportSource,
    pub symbols: Vec<Symbol>,
}

impl ImportSpec {
    pub fn relative(specifier: &'static str, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            source: ImportSource::Relative(specifier),
            symbols: symbols.into_iter().collect(),
        }
    }

    pub fn reference(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            source: ImportSource::Reference,
            symbols: symbols.into_iter().collect(),
        }
    }
}

/// Imports and exports of one template unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolContract {
    exports: Vec<Symbol>,
    imports: Vec<ImportSpec>,
}

impl SymbolContract {
    /// A contract with no imports and no exports (documents, configs).
    pub fn none() -> Self {
        Self::default()
    }

    pub fn export(mut self, symbol: Symbol) -> Self {
        if !self.exports.contains(&symbol) {
            self.exports.push(symbol);
        }
        self
    }

    pub fn export_all(self, symbols: impl IntoIterator<Item = Symbol>) -> Self {
        symbols.into_iter().fold(self, Self::export)
    }

    pub fn import(mut self, spec: ImportSpec) -> Self {
        self.imports.push(spec);
        self
    }

    pub fn exports(&self) -> &[Symbol] {
        &self.exports
    }

    pub fn imports(&self) -> &[ImportSpec] {
        &self.imports
    }

    pub fn exports_symbol(&self, symbol: Symbol) -> bool {
        self.exports.contains(&symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_are_deduplicated() {
        let contract = SymbolContract::none()
            .export(Symbol::Default)
            .export(Symbol::Default)
            .export_all([Symbol::Named("a"), Symbol::Named("a")]);

        assert_eq!(contract.exports(), &[Symbol::Default, Symbol::Named("a")]);
    }

    #[test]
    fn symbol_display() {
        assert_eq!(Symbol::Default.to_string(), "default");
        assert_eq!(Symbol::Named("JSX").to_string(), "JSX");
    }
}
