use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    common::FastHashMap,
    error::WrapResultError,
    modifier::ModifierKind,
};

fn default_max_pokeballs_per_type() -> u32 {
    99
}

fn default_max_pp_ups() -> u32 {
    3
}

fn default_vitamin_boost_per_stack() -> f64 {
    0.1
}

fn default_chance_denominator() -> u64 {
    10
}

fn default_berry_preserve_chance_per_stack() -> u64 {
    3
}

fn default_money_multiplier_per_stack() -> f64 {
    0.2
}

fn default_money_interest_per_stack() -> f64 {
    0.1
}

fn default_damage_money_per_stack() -> f64 {
    0.5
}

fn default_friendship_boost_per_stack() -> f64 {
    0.5
}

fn default_nature_weight_per_stack() -> f64 {
    0.1
}

fn default_field_effect_turns_per_stack() -> i64 {
    2
}

fn default_tera_battles() -> u32 {
    10
}

fn default_multi_hit_power_multipliers() -> Vec<f64> {
    vec![0.4, 0.25, 0.175]
}

/// Numeric balance constants used by modifier effects.
///
/// Every field has a default, so a partial JSON object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceConfig {
    /// Ceiling for the number of balls of a single type the session can hold.
    #[serde(default = "default_max_pokeballs_per_type")]
    pub max_pokeballs_per_type: u32,
    /// Ceiling for PP ups on a single move.
    #[serde(default = "default_max_pp_ups")]
    pub max_pp_ups: u32,
    /// Base stat boost granted by each vitamin stack.
    #[serde(default = "default_vitamin_boost_per_stack")]
    pub vitamin_boost_per_stack: f64,
    /// Denominator of the 1-in-N rolls made by chance-based held items.
    #[serde(default = "default_chance_denominator")]
    pub chance_denominator: u64,
    /// Numerator added per stack to the berry preservation roll.
    #[serde(default = "default_berry_preserve_chance_per_stack")]
    pub berry_preserve_chance_per_stack: u64,
    #[serde(default = "default_money_multiplier_per_stack")]
    pub money_multiplier_per_stack: f64,
    #[serde(default = "default_money_interest_per_stack")]
    pub money_interest_per_stack: f64,
    #[serde(default = "default_damage_money_per_stack")]
    pub damage_money_per_stack: f64,
    #[serde(default = "default_friendship_boost_per_stack")]
    pub friendship_boost_per_stack: f64,
    #[serde(default = "default_nature_weight_per_stack")]
    pub nature_weight_per_stack: f64,
    #[serde(default = "default_field_effect_turns_per_stack")]
    pub field_effect_turns_per_stack: i64,
    /// Number of battles a tera shard lasts.
    #[serde(default = "default_tera_battles")]
    pub tera_battles: u32,
    /// Power multiplier of each extra hit, indexed by stack count minus one.
    #[serde(default = "default_multi_hit_power_multipliers")]
    pub multi_hit_power_multipliers: Vec<f64>,

    /// Replaces the built-in stack ceiling of a modifier kind.
    #[serde(default)]
    pub max_stack_overrides: FastHashMap<ModifierKind, u32>,
}

impl BalanceConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(input: &str) -> anyhow::Result<Self> {
        serde_json::from_str(input).wrap_error_with_message("invalid balance config")
    }

    /// The multi-hit power multiplier for the given stack count.
    pub fn multi_hit_power_multiplier(&self, stack_count: u32) -> f64 {
        let index = (stack_count as usize).saturating_sub(1);
        self.multi_hit_power_multipliers
            .get(index)
            .or(self.multi_hit_power_multipliers.last())
            .copied()
            .unwrap_or(1.0)
    }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            max_pokeballs_per_type: default_max_pokeballs_per_type(),
            max_pp_ups: default_max_pp_ups(),
            vitamin_boost_per_stack: default_vitamin_boost_per_stack(),
            chance_denominator: default_chance_denominator(),
            berry_preserve_chance_per_stack: default_berry_preserve_chance_per_stack(),
            money_multiplier_per_stack: default_money_multiplier_per_stack(),
            money_interest_per_stack: default_money_interest_per_stack(),
            damage_money_per_stack: default_damage_money_per_stack(),
            friendship_boost_per_stack: default_friendship_boost_per_stack(),
            nature_weight_per_stack: default_nature_weight_per_stack(),
            field_effect_turns_per_stack: default_field_effect_turns_per_stack(),
            tera_battles: default_tera_battles(),
            multi_hit_power_multipliers: default_multi_hit_power_multipliers(),
            max_stack_overrides: FastHashMap::default(),
        }
    }
}

#[cfg(test)]
mod balance_config_test {
    use pretty_assertions::assert_eq;

    use crate::{
        config::BalanceConfig,
        modifier::ModifierKind,
    };

    #[test]
    fn empty_object_uses_defaults() {
        assert_eq!(
            BalanceConfig::from_json("{}").unwrap(),
            BalanceConfig::default()
        );
    }

    #[test]
    fn overrides_named_fields() {
        let config = BalanceConfig::from_json(
            r#"{
                "max_pp_ups": 5,
                "max_stack_overrides": {
                    "TurnHealModifier": 8
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.max_pp_ups, 5);
        assert_eq!(config.chance_denominator, 10);
        assert_eq!(
            config.max_stack_overrides.get(&ModifierKind::TurnHeal),
            Some(&8)
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            BalanceConfig::from_json(r#"{"max_pp_ups": "many"}"#)
                .err()
                .map(|err| err.to_string()),
            Some("invalid balance config".to_owned())
        );
    }

    #[test]
    fn clamps_multi_hit_index() {
        let config = BalanceConfig::default();
        assert_eq!(config.multi_hit_power_multiplier(1), 0.4);
        assert_eq!(config.multi_hit_power_multiplier(3), 0.175);
        assert_eq!(config.multi_hit_power_multiplier(7), 0.175);
    }
}
