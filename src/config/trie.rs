//! Trie configuration module.
//!
//! Validation rules for the tunables carried by each
//! [`WeightedTrie`](crate::data_structures::weighted_trie::WeightedTrie).

use super::{ConfigResult, Validate};
use crate::data_structures::weighted_trie::{OptimizeCost, RebalanceTrigger, WeightedTrieConfig};
use crate::error::config::ConfigError;

impl Validate for WeightedTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.rebalance_threshold == 0 {
            return Err(ConfigError::ValidationError(
                "rebalance_threshold must be greater than 0".to_string(),
            ));
        }

        if self.decay_factor == 0 {
            return Err(ConfigError::ValidationError(
                "decay_factor must be greater than 0".to_string(),
            ));
        }

        self.trigger.validate()?;
        self.optimize.validate()?;
        Ok(())
    }
}

impl Validate for RebalanceTrigger {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_weight == 0 {
            return Err(ConfigError::ValidationError(
                "trigger.max_weight must be greater than 0".to_string(),
            ));
        }

        if self.average_weight > self.max_weight {
            return Err(ConfigError::ValidationError(format!(
                "trigger.average_weight ({}) must not exceed trigger.max_weight ({})",
                self.average_weight, self.max_weight
            )));
        }

        Ok(())
    }
}

impl Validate for OptimizeCost {
    fn validate(&self) -> ConfigResult<()> {
        if self.depth_cost < 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "optimize.depth_cost".to_string(),
                message: format!("{} is negative", self.depth_cost),
            });
        }

        if self.age_cost < 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "optimize.age_cost".to_string(),
                message: format!("{} is negative", self.age_cost),
            });
        }

        Ok(())
    }
}
