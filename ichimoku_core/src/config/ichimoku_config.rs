use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::common::ichimoku_exception::{ErrCode, IchimokuException};

/// Ichimoku computation configuration
#[derive(Debug, Clone)]
pub struct IchimokuConfig {
    /// Tenkan-sen (conversion line) lookback, nominally 9 bars
    pub tenkan_period: usize,
    /// Kijun-sen (base line) lookback, nominally 26 bars
    pub kijun_period: usize,
    /// Senkou span B lookback, nominally 52 bars
    pub senkou_b_period: usize,
    pub kl_data_check: bool,
    pub autofix: bool,
}

impl IchimokuConfig {
    pub fn new(conf: Option<HashMap<String, serde_json::Value>>) -> Result<Self, IchimokuException> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());

        let config = Self {
            tenkan_period: conf.get("tenkan_period")?.unwrap_or(9),
            kijun_period: conf.get("kijun_period")?.unwrap_or(26),
            senkou_b_period: conf.get("senkou_b_period")?.unwrap_or(52),
            kl_data_check: conf.get("kl_data_check")?.unwrap_or(true),
            autofix: conf.get("autofix")?.unwrap_or(false),
        };

        for (name, period) in [
            ("tenkan_period", config.tenkan_period),
            ("kijun_period", config.kijun_period),
            ("senkou_b_period", config.senkou_b_period),
        ] {
            if period == 0 {
                return Err(IchimokuException::new(
                    format!("{} must be positive", name),
                    ErrCode::ParaError,
                ));
            }
        }

        conf.check()?;
        Ok(config)
    }
}

impl Default for IchimokuConfig {
    fn default() -> Self {
        Self {
            tenkan_period: 9,
            kijun_period: 26,
            senkou_b_period: 52,
            kl_data_check: true,
            autofix: false,
        }
    }
}

/// Wrapper that consumes config keys as they are read; `check` rejects
/// any key left unconsumed.
struct ConfigWithCheck {
    conf: HashMap<String, serde_json::Value>,
}

impl ConfigWithCheck {
    fn new(conf: HashMap<String, serde_json::Value>) -> Self {
        Self { conf }
    }

    fn get<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, IchimokuException> {
        match self.conf.remove(key) {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| {
                    IchimokuException::new(
                        format!("invalid value for {}: {}", key, e),
                        ErrCode::ConfigError,
                    )
                }),
            None => Ok(None),
        }
    }

    fn check(&self) -> Result<(), IchimokuException> {
        if let Some(key) = self.conf.keys().next() {
            return Err(IchimokuException::new(
                format!("unknown para = {}", key),
                ErrCode::ParaError,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_periods() {
        let config = IchimokuConfig::new(None).unwrap();
        assert_eq!(config.tenkan_period, 9);
        assert_eq!(config.kijun_period, 26);
        assert_eq!(config.senkou_b_period, 52);
        assert!(config.kl_data_check);
        assert!(!config.autofix);
    }

    #[test]
    fn test_override_period() {
        let mut conf = HashMap::new();
        conf.insert("kijun_period".to_string(), serde_json::Value::from(30));
        let config = IchimokuConfig::new(Some(conf)).unwrap();
        assert_eq!(config.kijun_period, 30);
        assert_eq!(config.tenkan_period, 9);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut conf = HashMap::new();
        conf.insert("kijun_periods".to_string(), serde_json::Value::from(30));
        let err = IchimokuConfig::new(Some(conf)).unwrap_err();
        assert_eq!(err.errcode, ErrCode::ParaError);
    }

    #[test]
    fn test_zero_period_rejected() {
        let mut conf = HashMap::new();
        conf.insert("tenkan_period".to_string(), serde_json::Value::from(0));
        let err = IchimokuConfig::new(Some(conf)).unwrap_err();
        assert_eq!(err.errcode, ErrCode::ParaError);
    }

    #[test]
    fn test_wrong_value_type_rejected() {
        let mut conf = HashMap::new();
        conf.insert(
            "tenkan_period".to_string(),
            serde_json::Value::from("nine"),
        );
        let err = IchimokuConfig::new(Some(conf)).unwrap_err();
        assert_eq!(err.errcode, ErrCode::ConfigError);
    }
}
