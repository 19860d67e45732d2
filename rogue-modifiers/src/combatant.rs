//! Collaborator contracts the engine calls into.
//!
//! The engine never stores a combatant inside a modifier. Held items refer to their owner by
//! [`CombatantId`], and live combatants are handed to the engine per event through
//! [`ModifierArgs`][`crate::modifier::ModifierArgs`] or looked up through a
//! [`CombatantProvider`].

use crate::{
    common::Id,
    data::{
        BattleStat,
        Nature,
        PokeballType,
        PokemonType,
        Stat,
        StatusEffect,
        VoucherType,
    },
};

/// The stable identity of a combatant across battles.
pub type CombatantId = u32;

/// A live combatant that modifiers can observe and mutate.
pub trait Combatant {
    fn id(&self) -> CombatantId;

    /// Is the combatant on the player's side?
    fn is_player(&self) -> bool;

    fn hp(&self) -> u32;
    fn max_hp(&self) -> u32;
    fn set_hp(&mut self, hp: u32);

    /// Heals the combatant, returning the amount of HP actually restored.
    fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp().saturating_sub(self.hp()));
        self.set_hp(self.hp() + healed);
        healed
    }

    fn is_full_hp(&self) -> bool {
        self.hp() >= self.max_hp()
    }

    fn is_fainted(&self) -> bool {
        self.hp() == 0
    }

    fn status(&self) -> Option<StatusEffect>;

    /// Attempts to inflict a status, returning whether it was applied.
    fn try_set_status(&mut self, status: StatusEffect) -> bool;

    fn reset_status(&mut self);

    fn stat_stage(&self, stat: BattleStat) -> i8;
    fn set_stat_stage(&mut self, stat: BattleStat, stage: i8);

    /// Raises the critical hit stage for the rest of the battle.
    fn boost_crit_stage(&mut self) -> bool;

    fn iv(&self, stat: Stat) -> u32;

    fn species(&self) -> &Id;
    fn fusion_species(&self) -> Option<&Id>;

    /// Can the combatant's species still evolve?
    fn is_unevolved(&self) -> bool;

    /// Can the combatant's fusion species still evolve?
    ///
    /// `None` if the combatant is not fused.
    fn fusion_is_unevolved(&self) -> Option<bool>;

    fn damage_dealt_this_turn(&self) -> u32;
    fn took_super_effective_hit(&self) -> bool;

    /// Multiplier applied to the chance of secondary effects, such as flinching.
    fn secondary_chance_multiplier(&self) -> f64 {
        1.0
    }

    fn move_count(&self) -> usize;
    fn pp_used(&self, move_index: usize) -> u32;
    fn set_pp_used(&mut self, move_index: usize, pp_used: u32);
    fn max_pp(&self, move_index: usize) -> u32;
    fn pp_ups(&self, move_index: usize) -> u32;
    fn set_pp_ups(&mut self, move_index: usize, pp_ups: u32);

    /// Overrides the combatant's nature.
    fn set_nature(&mut self, nature: Nature);

    fn level(&self) -> u32;
    fn set_level(&mut self, level: u32);

    fn add_friendship(&mut self, amount: i32);

    fn types(&self) -> Vec<PokemonType>;

    /// Types of the moves the combatant knows.
    fn move_types(&self) -> Vec<PokemonType>;

    fn learn_move(&mut self, move_id: &Id) -> bool;

    /// Relearns a move from the combatant's level-up learnset.
    fn remember_level_move(&mut self, level_move_index: usize) -> bool;

    fn try_evolve(&mut self, item: &Id) -> bool;

    fn fuse(&mut self, other: CombatantId) -> bool;

    /// Checks for a form change triggered by a held item.
    fn trigger_form_change(&mut self, item: &Id, active: bool) -> bool;
}

/// Looks up live combatants by id.
pub trait CombatantProvider {
    fn combatant(&self, id: CombatantId) -> Option<&dyn Combatant>;

    /// Ids of every combatant in the given side's party.
    fn party(&self, player: bool) -> Vec<CombatantId>;
}

/// A [`CombatantProvider`] with no combatants, for operations on party-wide modifiers only.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCombatants;

impl CombatantProvider for NoCombatants {
    fn combatant(&self, _: CombatantId) -> Option<&dyn Combatant> {
        None
    }

    fn party(&self, _: bool) -> Vec<CombatantId> {
        Vec::new()
    }
}

/// The run-wide session state that some modifiers credit.
pub trait Session {
    fn money(&self) -> u64;
    fn add_money(&mut self, amount: u64);

    /// The money reward for the current wave, scaled by the given multiplier.
    fn wave_money_amount(&self, multiplier: f64) -> u64;

    fn pokeball_count(&self, pokeball: PokeballType) -> u32;
    fn set_pokeball_count(&mut self, pokeball: PokeballType, count: u32);

    fn add_vouchers(&mut self, voucher: VoucherType, count: u32);
}
