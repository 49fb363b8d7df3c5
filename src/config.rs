//! Board-wide limits shared by the lifecycle, chat and upload paths.
//!
//! Hosts usually embed these settings in their own JSON configuration, so
//! [`BoardConfig`] deserializes with every field optional.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Limits applied to user-supplied text and uploads.
///
/// # Examples
///
/// ```
/// use projectflow::config::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.max_title_chars, 200);
///
/// let strict = BoardConfig::strict();
/// assert!(strict.max_comment_chars < config.max_comment_chars);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Maximum task or project title length in characters.
    pub max_title_chars: usize,
    /// Maximum comment length in characters.
    pub max_comment_chars: usize,
    /// Maximum chat message length in characters.
    pub max_chat_message_chars: usize,
    /// Maximum attachment upload size in bytes.
    pub max_attachment_bytes: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_title_chars: 200,
            max_comment_chars: 4_000,
            max_chat_message_chars: 2_000,
            max_attachment_bytes: 10 * 1024 * 1024, // 10 MiB
        }
    }
}

impl BoardConfig {
    /// Creates a strict configuration with reduced limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_chars: 80,
            max_comment_chars: 1_000,
            max_chat_message_chars: 500,
            max_attachment_bytes: 1024 * 1024, // 1 MiB
        }
    }

    /// Parses a configuration from JSON, filling absent keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the payload is not valid JSON for
    /// this shape, or [`ConfigError::ZeroLimit`] when a limit is zero.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the maximum title length.
    #[must_use]
    pub const fn with_max_title_chars(mut self, chars: usize) -> Self {
        self.max_title_chars = chars;
        self
    }

    /// Sets the maximum comment length.
    #[must_use]
    pub const fn with_max_comment_chars(mut self, chars: usize) -> Self {
        self.max_comment_chars = chars;
        self
    }

    /// Sets the maximum chat message length.
    #[must_use]
    pub const fn with_max_chat_message_chars(mut self, chars: usize) -> Self {
        self.max_chat_message_chars = chars;
        self
    }

    /// Sets the maximum attachment size.
    #[must_use]
    pub const fn with_max_attachment_bytes(mut self, bytes: usize) -> Self {
        self.max_attachment_bytes = bytes;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("max_title_chars", self.max_title_chars),
            ("max_comment_chars", self.max_comment_chars),
            ("max_chat_message_chars", self.max_chat_message_chars),
            ("max_attachment_bytes", self.max_attachment_bytes),
        ];
        match limits.iter().find(|(_, value)| *value == 0) {
            Some(&(name, _)) => Err(ConfigError::ZeroLimit(name)),
            None => Ok(()),
        }
    }
}

/// Errors returned while loading a [`BoardConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON payload could not be parsed.
    #[error("invalid board configuration: {0}")]
    Parse(#[source] serde_json::Error),

    /// A limit was configured as zero, which would reject every input.
    #[error("board configuration limit '{0}' must be greater than zero")]
    ZeroLimit(&'static str),
}
