//! Summarization request types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum credential length accepted before any network call.
pub const MIN_API_KEY_LEN: usize = 20;

/// Requested shape of the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    Brief,
    Detailed,
    Bullets,
    #[default]
    Default,
}

impl SummaryStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Detailed => "detailed",
            Self::Bullets => "bullets",
            Self::Default => "default",
        }
    }

    /// Lenient parse: anything unrecognized is [`SummaryStyle::Default`].
    pub fn from_selector(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brief" => Ok(Self::Brief),
            "detailed" => Ok(Self::Detailed),
            "bullets" => Ok(Self::Bullets),
            "default" => Ok(Self::Default),
            other => Err(format!("unknown summary style: {other}")),
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque API credential. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Length check only; validity is decided by the remote service.
    pub fn is_well_formed(&self) -> bool {
        self.0.trim().chars().count() >= MIN_API_KEY_LEN
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: String = self.0.chars().take(4).collect();
        write!(f, "ApiKey({visible}***)")
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// One summarization request.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub text: String,
    pub style: SummaryStyle,
    pub credential: ApiKey,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>, style: SummaryStyle, credential: impl Into<ApiKey>) -> Self {
        Self {
            text: text.into(),
            style,
            credential: credential.into(),
        }
    }
}

/// One (API version, model) pair tried during fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelCandidate {
    pub api_version: String,
    pub model: String,
}

impl ModelCandidate {
    pub fn new(api_version: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_version: api_version.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for ModelCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.api_version, self.model)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
