//! Memory configuration

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for one memory manager instance.
///
/// Values are taken as given. A zero budget is not an error; it just produces
/// an empty context window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Maximum number of messages forwarded to the model
    pub max_messages: usize,
    /// Maximum estimated tokens forwarded to the model
    pub max_tokens: usize,
    /// Summarize messages that fall out of the context window
    pub enable_summary: bool,
    /// Retained for compatibility with stored configs; messages carry no system role
    pub keep_system_messages: bool,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_messages: 20,
            max_tokens: 4000,
            enable_summary: false,
            keep_system_messages: true,
        }
    }
}

impl MemoryConfig {
    /// Parse a JSON config document; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_max_messages(mut self, max_messages: usize) -> Self {
        self.max_messages = max_messages;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_summary(mut self, enable_summary: bool) -> Self {
        self.enable_summary = enable_summary;
        self
    }

    /// Shallow-merge `update` into this config
    pub fn apply(&mut self, update: MemoryConfigUpdate) {
        if let Some(max_messages) = update.max_messages {
            self.max_messages = max_messages;
        }
        if let Some(max_tokens) = update.max_tokens {
            self.max_tokens = max_tokens;
        }
        if let Some(enable_summary) = update.enable_summary {
            self.enable_summary = enable_summary;
        }
        if let Some(keep_system_messages) = update.keep_system_messages {
            self.keep_system_messages = keep_system_messages;
        }
    }

    /// Return a merged copy, leaving `self` untouched
    pub fn merged(&self, update: MemoryConfigUpdate) -> Self {
        let mut next = self.clone();
        next.apply(update);
        next
    }
}

/// Partial config; `None` fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfigUpdate {
    pub max_messages: Option<usize>,
    pub max_tokens: Option<usize>,
    pub enable_summary: Option<bool>,
    pub keep_system_messages: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MemoryConfig::default();
        assert_eq!(config.max_messages, 20);
        assert_eq!(config.max_tokens, 4000);
        assert!(!config.enable_summary);
        assert!(config.keep_system_messages);
    }

    #[test]
    fn test_apply_is_shallow() {
        let mut config = MemoryConfig::default();
        config.apply(MemoryConfigUpdate {
            max_tokens: Some(0),
            ..Default::default()
        });
        assert_eq!(config.max_tokens, 0);
        assert_eq!(config.max_messages, 20);
        assert!(config.keep_system_messages);
    }

    #[test]
    fn test_merged_leaves_original() {
        let config = MemoryConfig::default();
        let next = config.merged(MemoryConfigUpdate {
            enable_summary: Some(true),
            ..Default::default()
        });
        assert!(next.enable_summary);
        assert!(!config.enable_summary);
    }

    #[test]
    fn test_from_json_partial() {
        let config = MemoryConfig::from_json(r#"{"max_messages": 6}"#).unwrap();
        assert_eq!(config.max_messages, 6);
        assert_eq!(config.max_tokens, 4000);

        assert!(MemoryConfig::from_json("{not json").is_err());
        assert!(MemoryConfig::from_json(r#"{"max_tokens": -1}"#).is_err());
    }
}
