//! Trade sweep settings.

use serde::Deserialize;

use crate::application::SweepSettings;
use crate::domain::{Location, DEFAULT_EXCLUDED_ORIGIN, DEFAULT_LOWEST_PROFIT};

/// Settings for the `ferengi` sweep.
#[derive(Debug, Clone, Deserialize)]
pub struct TradingConfig {
    /// Minimum per-unit profit, in credits, for a sweep hit.
    #[serde(default = "default_lowest_profit")]
    pub lowest_profit: i64,

    /// Canonical names of locations that never act as an origin.
    #[serde(default = "default_excluded_origins")]
    pub excluded_origins: Vec<String>,
}

fn default_lowest_profit() -> i64 {
    DEFAULT_LOWEST_PROFIT
}

fn default_excluded_origins() -> Vec<String> {
    vec![DEFAULT_EXCLUDED_ORIGIN.to_string()]
}

impl TradingConfig {
    /// Excluded origins as locations.
    pub fn excluded_locations(&self) -> Vec<Location> {
        self.excluded_origins.iter().map(Location::new).collect()
    }

    /// Settings handed to the sweep use case.
    pub fn sweep_settings(&self) -> SweepSettings {
        SweepSettings {
            lowest_profit: self.lowest_profit,
            excluded_origins: self.excluded_locations(),
        }
    }
}

impl Default for TradingConfig {
    fn default() -> Self {
        Self {
            lowest_profit: default_lowest_profit(),
            excluded_origins: default_excluded_origins(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_exclude_the_permanent_hub() {
        let settings = TradingConfig::default().sweep_settings();
        assert_eq!(settings.lowest_profit, 500);
        assert_eq!(
            settings.excluded_origins,
            vec![Location::from("Shinrarta Dezhra.Jameson Memorial")]
        );
    }

    #[test]
    fn empty_exclusion_list_is_kept() {
        let config: TradingConfig = toml::from_str("excluded_origins = []").unwrap();
        assert!(config.sweep_settings().excluded_origins.is_empty());
        assert_eq!(config.lowest_profit, 500);
    }
}
