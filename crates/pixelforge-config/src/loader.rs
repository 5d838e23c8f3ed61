//! Configuration loader.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a file, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.pixelforge`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.server.transport, "stdio");
    }

    #[test]
    fn test_load_basic_config() {
        let content = r#"
            [logging]
            level = "debug"

            [tools]
            embed_output = true
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.tools.embed_output);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"warn\"").unwrap();
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = ConfigLoader::load_or_default(Path::new("/nonexistent/pixelforge.toml")).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_var_expansion() {
        // SAFETY: test-local variable, no concurrent reader depends on it.
        unsafe { std::env::set_var("PIXELFORGE_TEST_LEVEL", "trace") };
        let config =
            ConfigLoader::load_str("[logging]\nlevel = \"${PIXELFORGE_TEST_LEVEL}\"").unwrap();
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_env_var_missing() {
        let result = ConfigLoader::load_str("[logging]\ndir = \"${PIXELFORGE_UNSET_VAR_XYZ}\"");
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_path() {
        let expanded = ConfigLoader::expand_path("~/.pixelforge");
        assert!(!expanded.starts_with('~'));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            ConfigLoader::load_str("not = [valid"),
            Err(ConfigError::Parse(_))
        ));
    }
}
