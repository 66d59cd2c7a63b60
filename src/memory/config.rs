use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Configuration for a `Remember` history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberConfig {
    /// Maximum number of actions kept; the oldest are evicted on push
    #[serde(default)]
    pub max_len: Option<NonZeroUsize>,
}

impl RememberConfig {
    /// Creates a configuration bounded to `max_len` actions
    pub fn bounded(max_len: NonZeroUsize) -> Self {
        Self {
            max_len: Some(max_len),
        }
    }

    /// Number of actions that must be evicted to fit `len` actions
    pub(crate) fn overflow(&self, len: usize) -> usize {
        match self.max_len {
            Some(max) => len.saturating_sub(max.get()),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = RememberConfig::default();
        assert_eq!(config.max_len, None);
        assert_eq!(config.overflow(usize::MAX), 0);
    }

    #[test]
    fn test_bounded_overflow() {
        let config = RememberConfig::bounded(NonZeroUsize::new(3).unwrap());
        assert_eq!(config.overflow(2), 0);
        assert_eq!(config.overflow(3), 0);
        assert_eq!(config.overflow(5), 2);
    }

    #[test]
    fn test_missing_max_len_deserializes_unbounded() {
        let config: RememberConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RememberConfig::default());
    }

    #[test]
    fn test_bounded_config_from_settings() {
        let config: RememberConfig = serde_json::from_str(r#"{"max_len": 3}"#).unwrap();
        assert_eq!(config, RememberConfig::bounded(NonZeroUsize::new(3).unwrap()));

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"max_len":3}"#);
        assert_eq!(serde_json::from_str::<RememberConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_zero_max_len_is_rejected() {
        assert!(serde_json::from_str::<RememberConfig>(r#"{"max_len": 0}"#).is_err());
    }
}
