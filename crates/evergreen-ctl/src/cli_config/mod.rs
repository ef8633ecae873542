//! CLI configuration: default output location and expansion options.
//!
//! Flags given on the command line take precedence over anything loaded here.

pub(crate) mod loader;

pub(crate) use loader::{expand_path, load_cli_config, CONFIG_FILENAME};

use serde::Deserialize;

/// Settings read from `.evergreen-ctl.toml`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    /// Where `generate` writes the document when `--output` is absent. Stdout if unset.
    pub output: Option<String>,

    /// Include the multi-mongos sharded cluster variant.
    #[serde(default)]
    pub multi_mongos: bool,
}

impl CliConfig {
    /// Resolve the multi-mongos switch; an explicit flag wins over the file.
    pub fn multi_mongos(&self, flag: Option<bool>) -> bool {
        flag.unwrap_or(self.multi_mongos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.output.is_none());
        assert!(!config.multi_mongos);
    }

    #[test]
    fn test_parse_config_toml() {
        let config: CliConfig = toml::from_str(
            r#"
output = ".evergreen/config.yml"
multi-mongos = true
"#,
        )
        .unwrap();
        assert_eq!(config.output.as_deref(), Some(".evergreen/config.yml"));
        assert!(config.multi_mongos);
    }

    #[test]
    fn test_parse_empty_config() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = CliConfig::default();
        assert!(!config.multi_mongos(None));
        assert!(config.multi_mongos(Some(true)));
        assert!(!config.multi_mongos(Some(false)));
    }

    #[test]
    fn test_flag_disables_configured_multi_mongos() {
        let config = CliConfig {
            multi_mongos: true,
            ..CliConfig::default()
        };
        assert!(config.multi_mongos(None));
        assert!(!config.multi_mongos(Some(false)));
    }
}
