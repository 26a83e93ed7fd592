use crate::{Error, Result};

/// Settings for identity value synthesis.
///
/// Deserializes from any serde format; missing keys take their defaults.
///
/// ```
/// # use sift_core::identity::IdentityConfig;
/// let config = IdentityConfig::from_json(r#"{ "worker_id": 7 }"#).unwrap();
/// assert_eq!(config.worker_id, 7);
/// assert_eq!(config.random_max, IdentityConfig::default().random_max);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
    /// Distinguishes processes sharing a key space. At most
    /// [`IdentityConfig::MAX_WORKER_ID`].
    pub worker_id: u16,

    /// Upper bound for random small-integer keys, further capped by the
    /// field type's maximum.
    pub random_max: i64,

    /// Serial numbers count milliseconds from this Unix timestamp.
    pub epoch_ms: u64,
}

impl IdentityConfig {
    pub const MAX_WORKER_ID: u16 = (1 << 10) - 1;

    /// 2020-01-01T00:00:00Z
    pub const DEFAULT_EPOCH_MS: u64 = 1_577_836_800_000;

    pub fn from_json(src: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.worker_id > Self::MAX_WORKER_ID {
            return Err(Error::configuration(
                "IdentityConfig",
                format!(
                    "worker_id {} exceeds {}",
                    self.worker_id,
                    Self::MAX_WORKER_ID
                ),
            ));
        }

        if self.random_max < 1 {
            return Err(Error::configuration(
                "IdentityConfig",
                format!("random_max must be positive, got {}", self.random_max),
            ));
        }

        let now = chrono::Utc::now().timestamp_millis();
        if i64::try_from(self.epoch_ms).map_or(true, |epoch| epoch > now) {
            return Err(Error::configuration(
                "IdentityConfig",
                format!("epoch_ms {} is in the future", self.epoch_ms),
            ));
        }

        Ok(())
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            worker_id: 0,
            random_max: i64::from(i32::MAX),
            epoch_ms: Self::DEFAULT_EPOCH_MS,
        }
    }
}
