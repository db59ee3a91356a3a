use sdkgen_spec::{AuthMode, Config};

use crate::naming::NamingOptions;

/// Settings that influence how a document is lowered and named.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Fallback when neither the operation nor the document declares security.
    /// `AuthMode::None` disables tokens everywhere.
    pub auth: AuthMode,
    pub naming: NamingOptions,
}

impl PipelineOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            auth: config.sdk.auth,
            naming: NamingOptions::from_config(&config.naming),
        }
    }
}
