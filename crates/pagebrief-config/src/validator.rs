//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a [`ConfigError`], if any.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_endpoint(config, &mut result);
        Self::validate_candidates(config, &mut result);
        Self::validate_generation(config, &mut result);
        Self::validate_storage(config, &mut result);

        result
    }

    fn validate_endpoint(config: &Config, result: &mut ValidationResult) {
        let url = &config.gemini.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "gemini.base_url",
                "base_url must start with http:// or https://",
            ));
        }

        if config.gemini.request_timeout_secs == Some(0) {
            result.add_error(ValidationError::new(
                "gemini.request_timeout_secs",
                "request_timeout_secs must be greater than 0 when set",
            ));
        }
    }

    fn validate_candidates(config: &Config, result: &mut ValidationResult) {
        let candidates = &config.gemini.candidates;
        if candidates.is_empty() {
            result.add_error(ValidationError::new(
                "gemini.candidates",
                "At least one model candidate is required",
            ));
            return;
        }

        let mut seen = HashSet::new();
        for (i, candidate) in candidates.iter().enumerate() {
            if candidate.model.trim().is_empty() {
                result.add_error(ValidationError::new(
                    format!("gemini.candidates[{}].model", i),
                    "model cannot be empty",
                ));
            }
            if candidate.api_version.trim().is_empty() {
                result.add_error(ValidationError::new(
                    format!("gemini.candidates[{}].api_version", i),
                    "api_version cannot be empty",
                ));
            }
            if !seen.insert(candidate) {
                result.add_warning(ValidationWarning::new(
                    format!("gemini.candidates[{}]", i),
                    format!("Duplicate candidate '{}' will be tried twice", candidate),
                ));
            }
        }
    }

    fn validate_generation(config: &Config, result: &mut ValidationResult) {
        let gemini = &config.gemini;

        if !(0.0..=2.0).contains(&gemini.temperature) {
            result.add_error(ValidationError::new(
                "gemini.temperature",
                "temperature must be between 0.0 and 2.0",
            ));
        }

        if gemini.max_output_tokens == 0 {
            result.add_error(ValidationError::new(
                "gemini.max_output_tokens",
                "max_output_tokens must be greater than 0",
            ));
        }

        if gemini.max_input_chars == 0 {
            result.add_error(ValidationError::new(
                "gemini.max_input_chars",
                "max_input_chars must be greater than 0",
            ));
        }

        if gemini.safety_categories.is_empty() {
            result.add_warning(ValidationWarning::new(
                "gemini.safety_categories",
                "No safety categories set, the service defaults will apply",
            ));
        }
    }

    fn validate_storage(config: &Config, result: &mut ValidationResult) {
        if config.storage.path.trim().is_empty() {
            result.add_error(ValidationError::new(
                "storage.path",
                "Storage path cannot be empty",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
