//! `index.{ts,js}` - the package entry point.

use std::path::{Path, PathBuf};

use sdkgen_codegen::generation::FileHeader;
use sdkgen_core::GeneratedFile;

use crate::{Flavor, ast::Export, code_file::CodeFile};

pub struct IndexFile {
    flavor: Flavor,
    header: Option<FileHeader>,
}

impl IndexFile {
    pub fn new(flavor: Flavor, header: Option<FileHeader>) -> Self {
        Self { flavor, header }
    }
}

impl GeneratedFile for IndexFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.flavor.file_name("index"))
    }

    fn render(&self) -> String {
        let requests = self.flavor.import_path("requests");
        let routes = self.flavor.import_path("routes");

        CodeFile::new(self.flavor)
            .header(self.header.clone())
            .export(Export::from(&requests).named_all([
                "Client",
                "MissingPathParamError",
                "defaultClient",
                "setBaseUrl",
                "setTokenProvider",
                "setTransport",
            ]))
            .export(
                Export::from(&requests)
                    .named_all([
                        "CallConfig",
                        "ModuleConfig",
                        "PathParams",
                        "QueryParams",
                        "ResponseEnvelope",
                        "TokenProvider",
                    ])
                    .type_only(),
            )
            .export(Export::from(&routes).named_all(["Endpoints", "routes"]))
            .export(
                Export::from(&routes)
                    .named_all(["HttpMethod", "OperationName", "Route"])
                    .type_only(),
            )
            .export(Export::from(self.flavor.import_path("sdk")))
            .render()
    }
}
