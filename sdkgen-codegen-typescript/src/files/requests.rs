//! `requests.{ts,js}` - client, envelope and request building.
//!
//! The module body is the same for every API; only the banner differs.

use std::path::{Path, PathBuf};

use sdkgen_codegen::generation::FileHeader;
use sdkgen_core::GeneratedFile;

use crate::{
    Flavor,
    ast::Import,
    code_file::{CodeFile, RawCode},
};

/// The requests module.
pub struct RequestsFile {
    flavor: Flavor,
    header: Option<FileHeader>,
}

impl RequestsFile {
    pub fn new(flavor: Flavor, header: Option<FileHeader>) -> Self {
        Self { flavor, header }
    }
}

impl GeneratedFile for RequestsFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.flavor.file_name("requests"))
    }

    fn render(&self) -> String {
        let (types, helpers, client, default_client) = match self.flavor {
            Flavor::TypeScript => (Some(TS_TYPES), TS_HELPERS, TS_CLIENT, TS_DEFAULT_CLIENT),
            Flavor::JavaScript => (None, JS_HELPERS, JS_CLIENT, JS_DEFAULT_CLIENT),
        };

        let mut file = CodeFile::new(self.flavor)
            .header(self.header.clone())
            .import(Import::new("axios").default("axios"))
            .import(Import::new("axios").named("AxiosInstance").type_only())
            .import(
                Import::new(self.flavor.import_path("routes"))
                    .named("Route")
                    .type_only(),
            );
        if let Some(types) = types {
            file = file.add(RawCode::new(types));
        }
        file.add(RawCode::new(helpers))
            .add(RawCode::new(client))
            .add(RawCode::new(default_client))
            .render()
    }
}

const TS_TYPES: &str = r#"export type PathParams = Record<string, string | number | boolean>;

export type QueryValue = string | number | boolean | null | undefined;

export type QueryParams = Record<string, QueryValue | QueryValue[]>;

export type TokenProvider = () => string | Promise<string>;

/** Uniform result of every operation. Exactly one of `data` and `error` is set. */
export interface ResponseEnvelope<T = unknown> {
  success: boolean;
  data: T | null;
  error: string | null;
}

/** Per-call overrides, merged over the client configuration. */
export interface CallConfig {
  headers?: Record<string, string>;
  timeout?: number;
  debug?: boolean;
  client?: Client;
}

export interface ModuleConfig {
  readonly baseUrl: string;
  readonly tokenProvider: TokenProvider;
}

export interface OperationOptions {
  hasBody: boolean;
  authRequired: boolean;
  basePath?: string;
}"#;

const TS_HELPERS: &str = r#"export class MissingPathParamError extends Error {
  readonly param: string;
  readonly uri: string;

  constructor(param: string, uri: string) {
    super(`missing path parameter "${param}" for ${uri}`);
    this.name = "MissingPathParam";
    this.param = param;
    this.uri = uri;
  }
}

/** Substitute every `{name}` placeholder with its percent-encoded value. */
export function buildPath(uri: string, path: PathParams = {}): string {
  return uri.replace(/\{([^}]+)\}/g, (_match: string, name: string) => {
    const value = path[name];
    if (value === undefined || value === null) {
      throw new MissingPathParamError(name, uri);
    }
    return encodeURIComponent(String(value));
  });
}

/** Encode a query object; null and undefined are skipped, arrays repeat the key. */
export function buildQuery(query?: QueryParams): string {
  if (!query) {
    return "";
  }
  const params = new URLSearchParams();
  for (const [key, value] of Object.entries(query)) {
    const values = Array.isArray(value) ? value : [value];
    for (const item of values) {
      if (item !== undefined && item !== null) {
        params.append(key, String(item));
      }
    }
  }
  const encoded = params.toString();
  return encoded ? `?${encoded}` : "";
}

/** Parse JSON text bodies; anything else is returned as is. */
export function normalizeBody(data: unknown): unknown {
  if (data === undefined || data === null) {
    return null;
  }
  if (typeof data !== "string") {
    return data;
  }
  if (data.trim() === "") {
    return null;
  }
  try {
    return JSON.parse(data);
  } catch {
    return data;
  }
}

export function describeError(err: unknown): string {
  if (err instanceof Error) {
    return err.message;
  }
  return String(err);
}

function describeStatus(status: number, data: unknown): string {
  if (data === null) {
    return `HTTP ${status}`;
  }
  const detail = typeof data === "string" ? data : JSON.stringify(data);
  return `HTTP ${status}: ${detail}`;
}

function failure<T>(error: string): ResponseEnvelope<T> {
  return { success: false, data: null, error };
}"#;

const TS_CLIENT: &str = r#"/**
 * Owns the base URL, token provider and transport for a set of operations.
 *
 * Configuration is snapshotted once per call, so setters never affect
 * requests already in flight.
 */
export class Client {
  private config: ModuleConfig = { baseUrl: "", tokenProvider: () => "" };
  private transport: AxiosInstance | null = null;

  setBaseUrl(url: string): void {
    this.config = { ...this.config, baseUrl: url };
  }

  setTokenProvider(provider: TokenProvider): void {
    this.config = { ...this.config, tokenProvider: provider };
  }

  /** Send requests through `transport`; `null` restores the global axios instance. */
  setTransport(transport: AxiosInstance | null): void {
    this.transport = transport;
  }

  async request<T = unknown>(
    route: Route,
    options: OperationOptions,
    path?: PathParams,
    query?: QueryParams,
    body?: unknown,
    config: CallConfig = {},
  ): Promise<ResponseEnvelope<T>> {
    const snapshot = this.config;
    try {
      const url = snapshot.baseUrl.replace(/\/+$/, "") + (options.basePath ?? "") + buildPath(route.uri, path) + buildQuery(query);

      const headers: Record<string, string> = { Accept: "application/json" };
      if (options.authRequired) {
        const token = await snapshot.tokenProvider();
        if (token) {
          headers.Authorization = `Bearer ${token}`;
        }
      }
      const sendBody = options.hasBody && body !== undefined;
      if (sendBody) {
        headers["Content-Type"] = "application/json";
      }
      Object.assign(headers, config.headers);

      const transport = this.transport ?? axios;
      const response = await transport.request({
        method: route.method.toLowerCase(),
        url,
        headers,
        data: sendBody ? JSON.stringify(body) : undefined,
        timeout: config.timeout,
        validateStatus: () => true,
        transformResponse: [(data: unknown) => data],
      });
      if (config.debug) {
        console.debug(`[sdk] ${route.method} ${url} -> ${response.status}`);
      }

      const data = normalizeBody(response.data);
      if (response.status >= 200 && response.status < 300) {
        return { success: true, data: data as T, error: null };
      }
      return failure(describeStatus(response.status, data));
    } catch (err) {
      if (config.debug) {
        console.debug(`[sdk] ${route.method} ${route.uri} failed`, err);
      }
      return failure(describeError(err));
    }
  }
}"#;

const JS_HELPERS: &str = r#"export class MissingPathParamError extends Error {
  constructor(param, uri) {
    super(`missing path parameter "${param}" for ${uri}`);
    this.name = "MissingPathParam";
    this.param = param;
    this.uri = uri;
  }
}

/** Substitute every `{name}` placeholder with its percent-encoded value. */
export function buildPath(uri, path = {}) {
  return uri.replace(/\{([^}]+)\}/g, (_match, name) => {
    const value = path[name];
    if (value === undefined || value === null) {
      throw new MissingPathParamError(name, uri);
    }
    return encodeURIComponent(String(value));
  });
}

/** Encode a query object; null and undefined are skipped, arrays repeat the key. */
export function buildQuery(query) {
  if (!query) {
    return "";
  }
  const params = new URLSearchParams();
  for (const [key, value] of Object.entries(query)) {
    const values = Array.isArray(value) ? value : [value];
    for (const item of values) {
      if (item !== undefined && item !== null) {
        params.append(key, String(item));
      }
    }
  }
  const encoded = params.toString();
  return encoded ? `?${encoded}` : "";
}

/** Parse JSON text bodies; anything else is returned as is. */
export function normalizeBody(data) {
  if (data === undefined || data === null) {
    return null;
  }
  if (typeof data !== "string") {
    return data;
  }
  if (data.trim() === "") {
    return null;
  }
  try {
    return JSON.parse(data);
  } catch {
    return data;
  }
}

export function describeError(err) {
  if (err instanceof Error) {
    return err.message;
  }
  return String(err);
}

function describeStatus(status, data) {
  if (data === null) {
    return `HTTP ${status}`;
  }
  const detail = typeof data === "string" ? data : JSON.stringify(data);
  return `HTTP ${status}: ${detail}`;
}

function failure(error) {
  return { success: false, data: null, error };
}"#;

const JS_CLIENT: &str = r#"/**
 * Owns the base URL, token provider and transport for a set of operations.
 *
 * Configuration is snapshotted once per call, so setters never affect
 * requests already in flight.
 */
export class Client {
  #config = { baseUrl: "", tokenProvider: () => "" };
  #transport = null;

  setBaseUrl(url) {
    this.#config = { ...this.#config, baseUrl: url };
  }

  setTokenProvider(provider) {
    this.#config = { ...this.#config, tokenProvider: provider };
  }

  /** Send requests through `transport`; `null` restores the global axios instance. */
  setTransport(transport) {
    this.#transport = transport;
  }

  async request(route, options, path = undefined, query = undefined, body = undefined, config = {}) {
    const snapshot = this.#config;
    try {
      const url = snapshot.baseUrl.replace(/\/+$/, "") + (options.basePath ?? "") + buildPath(route.uri, path) + buildQuery(query);

      const headers = { Accept: "application/json" };
      if (options.authRequired) {
        const token = await snapshot.tokenProvider();
        if (token) {
          headers.Authorization = `Bearer ${token}`;
        }
      }
      const sendBody = options.hasBody && body !== undefined;
      if (sendBody) {
        headers["Content-Type"] = "application/json";
      }
      Object.assign(headers, config.headers);

      const transport = this.#transport ?? axios;
      const response = await transport.request({
        method: route.method.toLowerCase(),
        url,
        headers,
        data: sendBody ? JSON.stringify(body) : undefined,
        timeout: config.timeout,
        validateStatus: () => true,
        transformResponse: [(data) => data],
      });
      if (config.debug) {
        console.debug(`[sdk] ${route.method} ${url} -> ${response.status}`);
      }

      const data = normalizeBody(response.data);
      if (response.status >= 200 && response.status < 300) {
        return { success: true, data, error: null };
      }
      return failure(describeStatus(response.status, data));
    } catch (err) {
      if (config.debug) {
        console.debug(`[sdk] ${route.method} ${route.uri} failed`, err);
      }
      return failure(describeError(err));
    }
  }
}"#;

const TS_DEFAULT_CLIENT: &str = r#"/** Process-wide client used when a call does not pass `config.client`. */
export const defaultClient = new Client();

export function setBaseUrl(url: string): void {
  defaultClient.setBaseUrl(url);
}

export function setTokenProvider(provider: TokenProvider): void {
  defaultClient.setTokenProvider(provider);
}

export function setTransport(transport: AxiosInstance | null): void {
  defaultClient.setTransport(transport);
}"#;

const JS_DEFAULT_CLIENT: &str = r#"/** Process-wide client used when a call does not pass `config.client`. */
export const defaultClient = new Client();

export function setBaseUrl(url) {
  defaultClient.setBaseUrl(url);
}

export function setTokenProvider(provider) {
  defaultClient.setTokenProvider(provider);
}

export function setTransport(transport) {
  defaultClient.setTransport(transport);
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_imports() {
        let code = RequestsFile::new(Flavor::TypeScript, None).render();
        assert!(code.starts_with(
            "import axios from \"axios\";\nimport type { AxiosInstance } from \"axios\";\nimport type { Route } from \"./routes.js\";\n\n"
        ));
        assert!(code.contains("export interface ResponseEnvelope<T = unknown> {"));
    }

    #[test]
    fn test_javascript_has_no_types() {
        let code = RequestsFile::new(Flavor::JavaScript, None).render();
        assert!(code.starts_with("import axios from \"axios\";\n\n"));
        assert!(!code.contains("interface"));
        assert!(!code.contains(": string"));
        assert!(code.contains("export const defaultClient = new Client();"));
    }

    #[test]
    fn test_base_path_joins_url() {
        for flavor in [Flavor::TypeScript, Flavor::JavaScript] {
            let code = RequestsFile::new(flavor, None).render();
            assert!(code.contains(
                "snapshot.baseUrl.replace(/\\/+$/, \"\") + (options.basePath ?? \"\") + buildPath(route.uri, path)"
            ));
        }
    }
}
