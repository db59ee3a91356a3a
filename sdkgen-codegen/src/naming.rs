//! Operation name derivation.
//!
//! Every endpoint gets a casing-neutral [`OperationName`]: a verb from the
//! [`VerbTable`] followed by the words of the path's static segments, or the
//! words of the endpoint's `operationId` when one is declared and preferred.
//! Emitters apply their own casing to the words.
//!
//! | Endpoint                       | Omit (default)          | ByName                         |
//! |--------------------------------|-------------------------|--------------------------------|
//! | `GET /dogs`                    | `get dogs`              | `get dogs`                     |
//! | `GET /dogs/{id}/appointments`  | `get dogs appointments` | `get dogs by id appointments`  |
//! | `POST /phone-numbers`          | `post phone numbers`    | `post phone numbers`           |

use std::collections::{BTreeMap, HashMap};

use sdkgen_core::split_words;
use sdkgen_ir::{Endpoint, HttpMethod, OperationName, Segment};
pub use sdkgen_spec::{PlaceholderStyle, VerbPreset};
use sdkgen_spec::NamingConfig;

/// Maps each HTTP method to the verb that leads derived names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbTable {
    verbs: BTreeMap<HttpMethod, String>,
}

impl VerbTable {
    /// Lowercased method names.
    pub fn identity() -> Self {
        Self {
            verbs: HttpMethod::ALL
                .into_iter()
                .map(|m| (m, m.as_lower().to_string()))
                .collect(),
        }
    }

    /// Identity table with `POST → create`, `PUT → replace`, `PATCH → update`.
    pub fn semantic() -> Self {
        Self::identity()
            .with(HttpMethod::Post, "create")
            .with(HttpMethod::Put, "replace")
            .with(HttpMethod::Patch, "update")
    }

    pub fn from_preset(preset: VerbPreset) -> Self {
        match preset {
            VerbPreset::Identity => Self::identity(),
            VerbPreset::Semantic => Self::semantic(),
        }
    }

    /// Override the verb for one method.
    pub fn with(mut self, method: HttpMethod, verb: impl Into<String>) -> Self {
        self.verbs.insert(method, verb.into());
        self
    }

    pub fn verb(&self, method: HttpMethod) -> &str {
        self.verbs
            .get(&method)
            .map(String::as_str)
            .unwrap_or_else(|| method.as_lower())
    }
}

impl Default for VerbTable {
    fn default() -> Self {
        Self::identity()
    }
}

/// Options controlling name derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingOptions {
    pub verbs: VerbTable,
    pub placeholders: PlaceholderStyle,
    /// Use `operationId` words when the endpoint declares one.
    pub prefer_operation_id: bool,
}

impl Default for NamingOptions {
    fn default() -> Self {
        Self {
            verbs: VerbTable::identity(),
            placeholders: PlaceholderStyle::Omit,
            prefer_operation_id: true,
        }
    }
}

impl NamingOptions {
    /// Build options from the `[naming]` config section.
    pub fn from_config(config: &NamingConfig) -> Self {
        let verbs = config
            .verb_overrides()
            .fold(VerbTable::from_preset(config.preset), |table, (method, verb)| {
                table.with(method, verb)
            });
        Self {
            verbs,
            placeholders: config.placeholders,
            prefer_operation_id: config.prefer_operation_id,
        }
    }
}

/// Outcome of naming one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedName {
    /// The unique name assigned.
    pub name: OperationName,
    /// The earlier name whose fold key the candidate collided with.
    pub collided_with: Option<OperationName>,
}

/// Assigns unique names to endpoints in registration order.
///
/// Uniqueness is checked on [`OperationName::fold_key`], so names stay
/// distinct under every casing an emitter may apply.
#[derive(Debug, Clone)]
pub struct NameDeriver {
    options: NamingOptions,
    taken: HashMap<String, OperationName>,
}

impl NameDeriver {
    pub fn new(options: NamingOptions) -> Self {
        Self {
            options,
            taken: HashMap::new(),
        }
    }

    /// The candidate name for `endpoint`, before collision handling.
    pub fn base_name(&self, endpoint: &Endpoint) -> OperationName {
        let from_id = endpoint
            .operation_id
            .as_deref()
            .filter(|_| self.options.prefer_operation_id)
            .map(split_words)
            .filter(|words| !words.is_empty());

        let words = from_id.unwrap_or_else(|| self.path_words(endpoint));
        normalize(OperationName::new(words))
    }

    fn path_words(&self, endpoint: &Endpoint) -> Vec<String> {
        let mut words = split_words(self.options.verbs.verb(endpoint.method));
        for segment in endpoint.uri.segments() {
            match (segment, self.options.placeholders) {
                (Segment::Static(lit), _) => words.extend(split_words(lit)),
                (Segment::Param(_), PlaceholderStyle::Omit) => {}
                (Segment::Param(name), PlaceholderStyle::ByName) => {
                    words.push("by".to_string());
                    words.extend(split_words(name));
                }
            }
        }
        words
    }

    /// Name `endpoint`, appending `2`, `3`, … when the candidate is taken.
    pub fn derive(&mut self, endpoint: &Endpoint) -> DerivedName {
        let base = self.base_name(endpoint);
        let collided_with = self.taken.get(&base.fold_key()).cloned();

        let mut name = base.clone();
        let mut suffix = 2usize;
        while self.taken.contains_key(&name.fold_key()) {
            name = base.with_suffix(suffix.to_string());
            suffix += 1;
        }

        self.taken.insert(name.fold_key(), name.clone());
        DerivedName {
            name,
            collided_with,
        }
    }
}

/// Apply the identifier rules: never empty, never leading with a digit.
fn normalize(name: OperationName) -> OperationName {
    let starts_with_digit = name
        .words()
        .first()
        .and_then(|w| w.chars().next())
        .is_some_and(|c| c.is_ascii_digit());

    if name.is_empty() {
        OperationName::new(["op"])
    } else if starts_with_digit {
        name.with_prefix("op")
    } else {
        name
    }
}
