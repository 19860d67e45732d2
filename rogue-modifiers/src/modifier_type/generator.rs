use std::{
    fmt::{
        self,
        Debug,
    },
    mem,
    sync::Arc,
};

use anyhow::Result;
use rogue_prng::PseudoRandomNumberGenerator;
use serde_json::Value;

use crate::{
    combatant::{
        Combatant,
        CombatantProvider,
    },
    data::ModifierTier,
    modifier_type::ModifierType,
};

/// Everything a generator may read when choosing a concrete type.
pub struct GeneratorContext<'a> {
    pub combatants: &'a dyn CombatantProvider,
    pub prng: &'a mut dyn PseudoRandomNumberGenerator,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(
        combatants: &'a dyn CombatantProvider,
        prng: &'a mut dyn PseudoRandomNumberGenerator,
    ) -> Self {
        Self { combatants, prng }
    }

    /// The live members of the player's party.
    pub fn party(&self) -> Vec<&'a dyn Combatant> {
        let combatants = self.combatants;
        combatants
            .party(true)
            .into_iter()
            .filter_map(|id| combatants.combatant(id))
            .collect()
    }
}

type GenerateFn = Arc<
    dyn Fn(&mut GeneratorContext, Option<&[Value]>) -> Result<Option<ModifierType>> + Send + Sync,
>;

/// A parameterized type that resolves to a concrete [`ModifierType`] only once given context.
///
/// With pregeneration arguments, the same concrete type is always produced. Without them, the
/// generator chooses from the party context and the random source, and may produce nothing.
#[derive(Clone)]
pub struct ModifierTypeGenerator {
    pub id: String,
    pub tier: Option<ModifierTier>,
    generate: GenerateFn,
}

impl ModifierTypeGenerator {
    pub fn new<I, F>(id: I, generate: F) -> Self
    where
        I: Into<String>,
        F: Fn(&mut GeneratorContext, Option<&[Value]>) -> Result<Option<ModifierType>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            id: id.into(),
            tier: None,
            generate: Arc::new(generate),
        }
    }

    pub fn with_tier(mut self, tier: ModifierTier) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Generates a concrete type.
    pub fn generate(
        &self,
        ctx: &mut GeneratorContext,
        pregen_args: Option<&[Value]>,
    ) -> Result<Option<ModifierType>> {
        let Some(mut modifier_type) = (self.generate)(ctx, pregen_args)? else {
            return Ok(None);
        };
        modifier_type.generator_id = Some(mem::replace(&mut modifier_type.id, self.id.clone()));
        if self.tier.is_some() {
            modifier_type.tier = self.tier;
        }
        Ok(Some(modifier_type))
    }
}

impl Debug for ModifierTypeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierTypeGenerator")
            .field("id", &self.id)
            .field("tier", &self.tier)
            .finish_non_exhaustive()
    }
}
