//! `routes.{ts,js}` - the operation registry.

use std::path::{Path, PathBuf};

use sdkgen_codegen::{
    builder::{CodeFragment, Renderable},
    generation::FileHeader,
};
use sdkgen_core::GeneratedFile;
use sdkgen_ir::HttpMethod;

use crate::{
    Flavor,
    ast::{Fn, JsObject, quote},
    code_file::{CodeFile, RawCode},
};

/// One registry entry, keyed by exported function name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub name: String,
    pub method: HttpMethod,
    pub uri: String,
}

/// The routes module.
pub struct RoutesFile {
    flavor: Flavor,
    header: Option<FileHeader>,
    entries: Vec<RouteEntry>,
}

impl RoutesFile {
    /// Entries are rendered sorted by name.
    pub fn new(flavor: Flavor, header: Option<FileHeader>, mut entries: Vec<RouteEntry>) -> Self {
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            flavor,
            header,
            entries,
        }
    }

    fn routes_object(&self) -> JsObject {
        self.entries.iter().fold(JsObject::new(), |obj, entry| {
            obj.object(
                &entry.name,
                JsObject::new()
                    .string("method", entry.method.as_str())
                    .string("uri", &entry.uri),
            )
        })
    }

    fn operation_name_type(&self) -> RawCode {
        if self.entries.is_empty() {
            return RawCode::new("export type OperationName = never;");
        }
        let mut code = String::from("export type OperationName =");
        for entry in &self.entries {
            code.push_str("\n  | ");
            code.push_str(&quote(&entry.name));
        }
        code.push(';');
        RawCode::new(code)
    }
}

struct RoutesConst<'a> {
    flavor: Flavor,
    routes: &'a JsObject,
}

impl Renderable for RoutesConst<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = match self.flavor {
            Flavor::TypeScript => {
                "export const routes: Readonly<Record<OperationName, Route>> = Object.freeze({"
            }
            Flavor::JavaScript => "export const routes = Object.freeze({",
        };
        vec![
            CodeFragment::jsdoc("Registered operations, sorted by name."),
            CodeFragment::block(header, self.routes.to_fragments(), "});"),
        ]
    }
}

const HTTP_METHOD_TYPE: &str =
    "export type HttpMethod = \"GET\" | \"POST\" | \"PUT\" | \"DELETE\" | \"PATCH\" | \"HEAD\" | \"OPTIONS\";";

const ROUTE_INTERFACE: &str = "export interface Route {
  readonly method: HttpMethod;
  readonly uri: string;
}";

impl GeneratedFile for RoutesFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.flavor.file_name("routes"))
    }

    fn render(&self) -> String {
        let routes = self.routes_object();

        let endpoints = Fn::new("Endpoints", self.flavor)
            .doc("Every operation, keyed by its exported function name.\n\nReturns a copy; mutating it does not affect the SDK.")
            .returns("Record<OperationName, Route>")
            .body_line(match self.flavor {
                Flavor::TypeScript => "const copy = {} as Record<OperationName, Route>;",
                Flavor::JavaScript => "const copy = {};",
            })
            .body_line(match self.flavor {
                Flavor::TypeScript => {
                    "for (const name of Object.keys(routes) as OperationName[]) {"
                }
                Flavor::JavaScript => "for (const name of Object.keys(routes)) {",
            })
            .body_line("  copy[name] = { ...routes[name] };")
            .body_line("}")
            .body_line("return copy;");

        CodeFile::new(self.flavor)
            .header(self.header.clone())
            .add_typed(RawCode::new(HTTP_METHOD_TYPE))
            .add_typed(RawCode::new(ROUTE_INTERFACE))
            .add_typed(self.operation_name_type())
            .add(RoutesConst {
                flavor: self.flavor,
                routes: &routes,
            })
            .add(endpoints)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<RouteEntry> {
        vec![
            RouteEntry {
                name: "postDogs".into(),
                method: HttpMethod::Post,
                uri: "/dogs".into(),
            },
            RouteEntry {
                name: "getDogs".into(),
                method: HttpMethod::Get,
                uri: "/dogs".into(),
            },
        ]
    }

    #[test]
    fn test_entries_sorted_by_name() {
        let code = RoutesFile::new(Flavor::JavaScript, None, entries()).render();
        let get = code.find("getDogs: {").unwrap();
        let post = code.find("postDogs: {").unwrap();
        assert!(get < post);
        assert!(code.contains("  getDogs: { method: \"GET\", uri: \"/dogs\" },\n"));
    }

    #[test]
    fn test_typescript_declares_types() {
        let code = RoutesFile::new(Flavor::TypeScript, None, entries()).render();
        assert!(code.contains("export type OperationName =\n  | \"getDogs\"\n  | \"postDogs\";"));
        assert!(code.contains("export function Endpoints(): Record<OperationName, Route> {"));
    }

    #[test]
    fn test_empty_registry() {
        let code = RoutesFile::new(Flavor::TypeScript, None, Vec::new()).render();
        assert!(code.contains("export type OperationName = never;"));
        assert!(code.contains("Object.freeze({\n});"));
    }
}
