use rogue_prng::PseudoRandomNumberGenerator;

use crate::{
    combatant::{
        CombatantProvider,
        NoCombatants,
    },
    config::BalanceConfig,
};

/// Everything an `apply` call may read besides its event arguments.
pub struct ApplyContext<'a> {
    pub config: &'a BalanceConfig,
    pub prng: &'a mut dyn PseudoRandomNumberGenerator,
}

impl<'a> ApplyContext<'a> {
    pub fn new(config: &'a BalanceConfig, prng: &'a mut dyn PseudoRandomNumberGenerator) -> Self {
        Self { config, prng }
    }
}

/// Everything needed to compute stack ceilings.
///
/// Some ceilings depend on the owning combatant, so merges consult the live roster.
#[derive(Clone, Copy)]
pub struct StackContext<'a> {
    pub config: &'a BalanceConfig,
    pub combatants: &'a dyn CombatantProvider,
}

impl<'a> StackContext<'a> {
    pub fn new(config: &'a BalanceConfig, combatants: &'a dyn CombatantProvider) -> Self {
        Self { config, combatants }
    }

    /// A context with no roster, for party-wide modifiers.
    pub fn without_combatants(config: &'a BalanceConfig) -> Self {
        Self {
            config,
            combatants: &NoCombatants,
        }
    }
}
