use sdkgen_spec::Config;

use super::FileHeader;

/// Settings shared by every emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// SDK name shown in the banner and used for the client class.
    pub sdk_name: String,
    /// Emit the generated-file banner.
    pub banner: bool,
}

impl EmitOptions {
    pub fn new(sdk_name: impl Into<String>) -> Self {
        Self {
            sdk_name: sdk_name.into(),
            banner: true,
        }
    }

    /// Options from `[sdk]`; `fallback_name` is used when no name is set
    /// (usually the API title).
    pub fn from_config(config: &Config, fallback_name: &str) -> Self {
        Self {
            sdk_name: config
                .sdk
                .name
                .clone()
                .unwrap_or_else(|| fallback_name.to_string()),
            banner: config.sdk.banner,
        }
    }

    pub fn without_banner(mut self) -> Self {
        self.banner = false;
        self
    }

    /// The banner, or `None` when suppressed.
    pub fn header(&self) -> Option<FileHeader> {
        self.banner.then(|| FileHeader::new(&self.sdk_name))
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self::new("SDK")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_falls_back_to_title() {
        let config: Config = "[sdk]\nbanner = false\n".parse().unwrap();
        let options = EmitOptions::from_config(&config, "Telephone API");
        assert_eq!(options.sdk_name, "Telephone API");
        assert!(options.header().is_none());

        let config: Config = "[sdk]\nname = \"PhoneSDK\"\n".parse().unwrap();
        let options = EmitOptions::from_config(&config, "Telephone API");
        assert_eq!(options.header().unwrap().sdk_name, "PhoneSDK");
    }
}
