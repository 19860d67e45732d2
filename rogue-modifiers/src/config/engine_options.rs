use rogue_prng::{
    PseudoRandomNumberGenerator,
    SeededRandomNumberGenerator,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::config::BalanceConfig;

fn default_rng_factory() -> fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
    |seed: Option<u64>| Box::new(SeededRandomNumberGenerator::new(seed))
}

/// Options for the owner of the modifier collections.
#[derive(Clone, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Balance constants read by modifier effects.
    #[serde(default)]
    pub balance: BalanceConfig,

    /// Function for creating the random source that every gameplay roll is drawn from.
    ///
    /// Primarily useful for tests where we wish to have fine-grained control over rolls.
    #[serde(skip, default = "default_rng_factory")]
    pub rng_factory: fn(seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator>,
}

impl EngineOptions {
    /// Creates a new random source from the configured factory.
    pub fn create_rng(&self, seed: Option<u64>) -> Box<dyn PseudoRandomNumberGenerator> {
        (self.rng_factory)(seed)
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            balance: BalanceConfig::default(),
            rng_factory: default_rng_factory(),
        }
    }
}

#[cfg(test)]
mod engine_options_test {
    use pretty_assertions::assert_eq;

    use crate::config::EngineOptions;

    #[test]
    fn default_factory_is_deterministic() {
        let options = EngineOptions::default();
        let mut a = options.create_rng(Some(100));
        let mut b = options.create_rng(Some(100));
        assert_eq!(a.initial_seed(), 100);
        assert_eq!(
            (0..4).map(|_| a.next()).collect::<Vec<_>>(),
            (0..4).map(|_| b.next()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn deserializes_balance_section() {
        let options =
            serde_json::from_str::<EngineOptions>(r#"{"balance":{"tera_battles":3}}"#).unwrap();
        assert_eq!(options.balance.tera_battles, 3);
        assert_eq!(options.balance.max_pp_ups, 3);
    }
}
