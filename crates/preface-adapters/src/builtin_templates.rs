//! Built-in Preface catalog.
//!
//! This module provides [`preface_catalog`], the single entry-point for the
//! templates that ship with Preface: a Deno + TSX application with one sample
//! component, laid out as
//!
//! ```text
//! <name>/
//!   README.md
//!   tsconfig.json
//!   index.html
//!   dist/
//!   src/
//!     deps.ts
//!     style.ts
//!     index.ts
//!     components/Main/
//!       controller.ts
//!       template.tsx
//!       mod.ts
//! ```
//!
//! # Cross-file contract
//!
//! Every unit carries a [`SymbolContract`] built from the constants in
//! [`symbols`]. `deps.ts` and `tsconfig.json` are generated from those same
//! constants; the remaining bodies are literal text whose imports are checked
//! against the contracts by this crate's tests.
//!
//! Only the element factory (`JSX.h`) is configured. The sample template
//! never uses fragments, so no fragment factory is exported or referenced.

use preface_core::domain::{
    DirectorySpec, ImportSpec, RenderContext, Symbol, SymbolContract, TemplateCatalog,
    TemplateContent, TemplateUnit,
};
use tracing::instrument;

// ── Shared names ──────────────────────────────────────────────────────────────

/// Names exported by `src/deps.ts` and imported everywhere else.
pub mod symbols {
    /// Application factory.
    pub const CREATE_APPLICATION: &str = "createApplication";
    /// Component primitive.
    pub const COMPONENT: &str = "Component";
    /// Reactive value primitive.
    pub const REACTIVE: &str = "reactive";
    /// Derived (cached) value primitive.
    pub const CACHED: &str = "cached";
    /// Markup namespace; its `h` member is the element factory.
    pub const JSX: &str = "JSX";
    /// Element factory as named in the tooling configuration.
    pub const JSX_FACTORY: &str = "JSX.h";

    /// Re-export order in `deps.ts`.
    pub const REEXPORTS: [&str; 5] = [CACHED, COMPONENT, CREATE_APPLICATION, JSX, REACTIVE];
}

/// Fields the controller returns and the template consumes.
pub const CONTROLLER_FIELDS: [&str; 5] = ["text", "textLower", "textUpper", "textChange", "count"];

/// Id of the element the application mounts into.
pub const MOUNT_ID: &str = "app";

pub const TOOLING_CONFIG: &str = "tsconfig.json";
pub const BUNDLE_ENTRY: &str = "src/index.ts";
pub const BUNDLE_OUTPUT: &str = "dist/index.js";

/// The command the README tells the user to run.
pub const BUILD_COMMAND: &str =
    "deno bundle --watch -c tsconfig.json src/index.ts dist/index.js";

// ── Public API ────────────────────────────────────────────────────────────────

/// The built-in catalog, in write order.
#[instrument]
pub fn preface_catalog() -> TemplateCatalog {
    use symbols::*;

    TemplateCatalog::new()
        .with_directory(DirectorySpec::new("dist"))
        .with_unit(TemplateUnit::new(
            "README.md",
            "Project documentation and build command",
            SymbolContract::none(),
            TemplateContent::Parameterized(README),
        ))
        .with_unit(TemplateUnit::new(
            TOOLING_CONFIG,
            "TypeScript compiler options for TSX",
            SymbolContract::none().import(ImportSpec::relative("./src/deps.ts", [named(JSX)])),
            TemplateContent::Generated(ts_config),
        ))
        .with_unit(TemplateUnit::new(
            "index.html",
            "HTML entry document",
            SymbolContract::none(),
            TemplateContent::Generated(index_html),
        ))
        .with_unit(TemplateUnit::new(
            "src/deps.ts",
            "Re-exports of the UI framework primitives",
            SymbolContract::none()
                .export_all(REEXPORTS.map(named))
                .import(ImportSpec::reference(REEXPORTS.map(named))),
            TemplateContent::Generated(deps),
        ))
        .with_unit(TemplateUnit::new(
            "src/style.ts",
            "Application style sheet",
            SymbolContract::none().export(Symbol::Default),
            TemplateContent::Literal(STYLE),
        ))
        .with_unit(TemplateUnit::new(
            BUNDLE_ENTRY,
            "Application bootstrap",
            SymbolContract::none()
                .import(ImportSpec::relative("./deps.ts", [named(CREATE_APPLICATION)]))
                .import(ImportSpec::relative(
                    "./components/Main/mod.ts",
                    [Symbol::Default],
                ))
                .import(ImportSpec::relative("./style.ts", [Symbol::Default])),
            TemplateContent::Literal(INDEX_TS),
        ))
        .with_unit(TemplateUnit::new(
            "src/components/Main/controller.ts",
            "Main component state and handlers",
            SymbolContract::none()
                .export(Symbol::Default)
                .import(ImportSpec::relative(
                    "../../deps.ts",
                    [named(CACHED), named(COMPONENT), named(REACTIVE)],
                )),
            TemplateContent::Literal(CONTROLLER_TS),
        ))
        .with_unit(TemplateUnit::new(
            "src/components/Main/template.tsx",
            "Main component markup",
            SymbolContract::none()
                .export(Symbol::Default)
                .import(ImportSpec::relative("../../deps.ts", [named(JSX)]))
                .import(ImportSpec::relative("./controller.ts", [Symbol::Default])),
            TemplateContent::Literal(TEMPLATE_TSX),
        ))
        .with_unit(TemplateUnit::new(
            "src/components/Main/mod.ts",
            "Main component assembly",
            SymbolContract::none()
                .export(Symbol::Default)
                .import(ImportSpec::relative("./template.tsx", [Symbol::Default])),
            TemplateContent::Literal(MOD_TS),
        ))
}

fn named(name: &'static str) -> Symbol {
    Symbol::Named(name)
}

// ── Generated bodies ──────────────────────────────────────────────────────────

const README: &str = "# {{PROJECT_NAME}}

## Launch development

```sh
deno bundle --watch -c tsconfig.json src/index.ts dist/index.js
```
";

fn ts_config(_ctx: &RenderContext) -> String {
    use symbols::JSX_FACTORY;

    format!(
        r#"{{
  "compilerOptions": {{
    "lib": ["dom", "esnext"],
    "jsx": "react",
    "jsxFactory": "{JSX_FACTORY}",
    "experimentalDecorators": true,
    "emitDecoratorMetadata": true
  }}
}}
"#
    )
}

fn index_html(ctx: &RenderContext) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="./{BUNDLE_OUTPUT}"></script>
  </head>
  <body>
    <div id="{MOUNT_ID}"></div>
  </body>
</html>
"#,
        title = escape_html(ctx.project_name())
    )
}

fn deps(ctx: &RenderContext) -> String {
    let mut out = String::from("export {\n");
    for symbol in symbols::REEXPORTS {
        out.push_str("  ");
        out.push_str(symbol);
        out.push_str(",\n");
    }
    out.push_str(&format!("}} from \"{}\";\n", ctx.reference_location()));
    out
}

/// Project names cannot contain `<`, `>` or `"`; `&` and `'` are still legal.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('\'', "&#39;")
}

// ── Literal bodies ────────────────────────────────────────────────────────────

const STYLE: &str = r#"export default `
body {
  font-family: sans-serif;
  margin: 0;
}
.main {
  background-color: #f0f0f0;
  margin: 1rem;
  padding: 1rem;
}
.block {
  background-color: #e8e8e8;
  padding: 1rem;
}
button, input {
  background-color: #fff;
  border: 1px solid #000;
  border-radius: 0.25rem;
  padding: 0.5rem 0.75rem;
}
button:hover, input:hover {
  background-color: #f8f8f8;
}
`;
"#;

const INDEX_TS: &str = r##"import { createApplication } from "./deps.ts";
import Main from "./components/Main/mod.ts";
import style from "./style.ts";

createApplication(Main, style).then((ci) => {
  ci.mount("#app");
});
"##;

const CONTROLLER_TS: &str = r#"import { cached, Component, reactive } from "../../deps.ts";

export default new Component(() => {
  const text = reactive("This is an example text");
  const textLower = cached(() => {
    return text.value.toLowerCase();
  });
  const textUpper = cached(() => {
    return text.value.toUpperCase();
  });
  const textChange = (event: Event) => {
    if (event && event.target) {
      text.value = (event.target as HTMLInputElement).value;
    }
  };
  const count = reactive(0);
  return {
    text,
    textLower,
    textUpper,
    textChange,
    count,
  };
});
"#;

const TEMPLATE_TSX: &str = r#"import { JSX } from "../../deps.ts";
import controller from "./controller.ts";

export default controller.render((state) => {
  return (
    <div class="main">
      <h1>Preface</h1>
      <div class="block">
        <h2>Reactivity</h2>
        <input type="text" value={state.text} $input={state.textChange} />
        &nbsp;(length: {state.text.length})
        <br /><br />
        Lower case : {state.textLower}
        <br /><br />
        Upper case : {state.textUpper}
      </div>
      <br />
      <div class="block">
        <h2>Button count</h2>
        <button type="button" $click={() => (state.count += 1)}>
          Number of Click{state.count > 1 && "s" || ""} : {state.count}
        </button>&nbsp;
        <button type="button" $click={() => (state.count = 0)}>
          Reset
        </button>
      </div>
    </div>
  );
});
"#;

const MOD_TS: &str = r#"import template from "./template.tsx";
export default template.end();
"#;
