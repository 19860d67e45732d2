use std::sync::Arc;

use anyhow::Result;
use rogue_modifiers::{
    BalanceConfig,
    CombatantProvider,
    ConsumableModifier,
    GeneratorContext,
    Modifier,
    ModifierTarget,
    ModifierTypeRegistry,
    NoCombatants,
    PersistentModifier,
    error::WrapOptionError,
};
use rogue_prng::SeededRandomNumberGenerator;
use serde_json::Value;

/// Builds modifiers from the builtin type registry by id.
pub struct TestModifiers {
    pub config: BalanceConfig,
    pub registry: ModifierTypeRegistry,
}

impl Default for TestModifiers {
    fn default() -> Self {
        Self::new()
    }
}

impl TestModifiers {
    pub fn new() -> Self {
        Self::with_config(BalanceConfig::default())
    }

    pub fn with_config(config: BalanceConfig) -> Self {
        let registry = ModifierTypeRegistry::with_builtin_types(&config);
        Self { config, registry }
    }

    fn create(
        &self,
        id: &str,
        pregen_args: &[&str],
        target: &ModifierTarget,
        combatants: &dyn CombatantProvider,
    ) -> Result<Modifier> {
        let pregen_args = pregen_args
            .iter()
            .map(|arg| Value::from(*arg))
            .collect::<Vec<_>>();
        let pregen_args = (!pregen_args.is_empty()).then_some(&pregen_args[..]);
        let mut prng = SeededRandomNumberGenerator::new(Some(0));
        let modifier_type = self.registry.resolve(
            id,
            pregen_args,
            &mut GeneratorContext::new(combatants, &mut prng),
        )?;
        Arc::new(modifier_type).new_modifier(target)
    }

    /// Creates a persistent modifier with one stack.
    pub fn persistent(&self, id: &str, target: &ModifierTarget) -> Result<PersistentModifier> {
        self.generated(id, &[], target)
    }

    /// Creates a persistent modifier of a generated type, chosen by its pregeneration labels.
    pub fn generated(
        &self,
        id: &str,
        pregen_args: &[&str],
        target: &ModifierTarget,
    ) -> Result<PersistentModifier> {
        self.create(id, pregen_args, target, &NoCombatants)?
            .into_persistent()
            .wrap_expectation(format!("{id} is not persistent"))
    }

    pub fn consumable(&self, id: &str, target: &ModifierTarget) -> Result<ConsumableModifier> {
        self.create(id, &[], target, &NoCombatants)?
            .into_consumable()
            .wrap_expectation(format!("{id} is not consumable"))
    }
}
