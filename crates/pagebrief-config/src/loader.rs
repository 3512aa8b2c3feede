//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => {
                debug!("No config file at {}, using defaults", path.display());
                Ok(Config::default())
            }
            other => other,
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
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        let mut result = content.to_string();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.pagebrief`).
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
        assert_eq!(config.gemini.candidates.len(), 5);
        assert_eq!(config.gemini.max_input_chars, 20_000);
    }

    #[test]
    fn test_load_gemini_section() {
        let content = r#"
            [gemini]
            base_url = "http://localhost:9000"
            temperature = 0.5
            max_output_tokens = 512
            max_input_chars = 1000
            request_timeout_secs = 30
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.gemini.base_url, "http://localhost:9000");
        assert_eq!(config.gemini.temperature, 0.5);
        assert_eq!(config.gemini.max_output_tokens, 512);
        assert_eq!(config.gemini.max_input_chars, 1000);
        assert_eq!(config.gemini.request_timeout_secs, Some(30));
    }

    #[test]
    fn test_load_custom_candidates_replace_defaults() {
        let content = r#"
            [[gemini.candidates]]
            api_version = "v1"
            model = "gemini-pro"

            [[gemini.candidates]]
            api_version = "v1beta"
            model = "gemini-1.5-flash"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.gemini.candidates.len(), 2);
        assert_eq!(config.gemini.candidates[0].api_version, "v1");
        assert_eq!(config.gemini.candidates[0].model, "gemini-pro");
        assert_eq!(config.gemini.candidates[1].model, "gemini-1.5-flash");
    }

    #[test]
    fn test_load_storage_and_logging() {
        let content = r#"
            [storage]
            path = "/tmp/pagebrief.json"

            [logging]
            level = "debug"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.storage.path, "/tmp/pagebrief.json");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[gemini]").unwrap();
        writeln!(file, "max_input_chars = 5000").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.gemini.max_input_chars, 5000);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_nonexistent_file() {
        let config =
            ConfigLoader::load_or_default(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config.gemini.temperature, 0.2);
    }

    #[test]
    fn test_load_or_default_propagates_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid = [unclosed").unwrap();

        let result = ConfigLoader::load_or_default(file.path());
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("PAGEBRIEF_TEST_BASE_URL", "http://127.0.0.1:1234");
        }
        let content = "[gemini]\nbase_url = \"${PAGEBRIEF_TEST_BASE_URL}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.gemini.base_url, "http://127.0.0.1:1234");
        unsafe {
            std::env::remove_var("PAGEBRIEF_TEST_BASE_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_PAGEBRIEF_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_expand_path_no_tilde() {
        assert_eq!(ConfigLoader::expand_path("/usr/local/bin"), "/usr/local/bin");
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/test");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/test"));
    }
}
