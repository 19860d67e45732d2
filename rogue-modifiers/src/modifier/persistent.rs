use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::{
    modifier::{
        ApplyContext,
        EnemyEffect,
        HeldItemModifier,
        LapsingModifier,
        ModifierArgs,
        ModifierKind,
        ModifierOwner,
        PartyEffect,
        StackContext,
    },
    modifier_type::ModifierType,
};

/// The behavior family of a persistent modifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Behavior {
    Lapsing(LapsingModifier),
    Party(PartyEffect),
    Enemy(EnemyEffect),
    HeldItem(HeldItemModifier),
}

impl Behavior {
    pub fn kind(&self) -> ModifierKind {
        match self {
            Self::Lapsing(lapsing) => lapsing.effect.kind(),
            Self::Party(effect) => effect.kind(),
            Self::Enemy(effect) => effect.kind(),
            Self::HeldItem(held_item) => held_item.effect.kind(),
        }
    }

    fn matches_any_type(&self) -> bool {
        match self {
            Self::HeldItem(held_item) => held_item.effect.matches_any_type(),
            _ => false,
        }
    }

    fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Lapsing(a), Self::Lapsing(b)) => a.matches(b),
            (Self::Party(a), Self::Party(b)) => a == b,
            (Self::Enemy(a), Self::Enemy(b)) => a == b,
            (Self::HeldItem(a), Self::HeldItem(b)) => a.matches(b),
            _ => false,
        }
    }

    fn default_max_stack_count(&self, ctx: &StackContext) -> u32 {
        match self {
            Self::Lapsing(lapsing) => lapsing.default_max_stack_count(),
            Self::Party(effect) => effect.default_max_stack_count(),
            Self::Enemy(effect) => effect.default_max_stack_count(),
            Self::HeldItem(held_item) => held_item.default_max_stack_count(ctx),
        }
    }

    fn should_apply(&self, args: &ModifierArgs) -> bool {
        match self {
            Self::Lapsing(lapsing) => lapsing.should_apply(args),
            Self::Party(effect) => effect.should_apply(args),
            Self::Enemy(effect) => effect.should_apply(args),
            Self::HeldItem(held_item) => held_item.should_apply(args),
        }
    }

    fn apply(&mut self, stack_count: u32, args: &mut ModifierArgs, ctx: &mut ApplyContext) -> bool {
        match self {
            Self::Lapsing(lapsing) => lapsing.apply(args, ctx),
            Self::Party(effect) => effect.apply(stack_count, args, ctx),
            Self::Enemy(effect) => effect.apply(stack_count, args, ctx),
            Self::HeldItem(held_item) => held_item.apply(stack_count, args, ctx),
        }
    }

    fn args(&self) -> Vec<Value> {
        match self {
            Self::Lapsing(lapsing) => lapsing.args(),
            Self::Party(effect) => effect.args(),
            Self::Enemy(effect) => effect.args(),
            Self::HeldItem(held_item) => held_item.args(),
        }
    }
}

/// A modifier stored in a collection across battles.
///
/// The effective stack count is the persisted stack count plus any virtual stacks. Virtual stacks
/// are granted temporarily and are never written to save records.
#[derive(Debug, Clone)]
pub struct PersistentModifier {
    modifier_type: Arc<ModifierType>,
    stack_count: u32,
    virtual_stack_count: u32,
    behavior: Behavior,
}

impl PersistentModifier {
    pub fn new(modifier_type: Arc<ModifierType>, behavior: Behavior, stack_count: u32) -> Self {
        Self {
            modifier_type,
            stack_count,
            virtual_stack_count: 0,
            behavior,
        }
    }

    pub fn modifier_type(&self) -> &Arc<ModifierType> {
        &self.modifier_type
    }

    pub fn type_id(&self) -> &str {
        &self.modifier_type.id
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut Behavior {
        &mut self.behavior
    }

    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    pub fn virtual_stack_count(&self) -> u32 {
        self.virtual_stack_count
    }

    pub fn effective_stack_count(&self) -> u32 {
        self.stack_count + self.virtual_stack_count
    }

    pub fn set_stack_count(&mut self, stack_count: u32) {
        self.stack_count = stack_count;
    }

    /// Removes stacks, taking persisted stacks first. Returns whether any stacks remain.
    pub fn decrement_stack(&mut self, amount: u32) -> bool {
        let from_persisted = amount.min(self.stack_count);
        self.stack_count -= from_persisted;
        self.virtual_stack_count = self
            .virtual_stack_count
            .saturating_sub(amount - from_persisted);
        self.effective_stack_count() > 0
    }

    pub fn clear_virtual_stacks(&mut self) {
        self.virtual_stack_count = 0;
    }

    /// Moves every persisted stack into virtual stacks.
    pub(crate) fn make_virtual(&mut self) {
        self.virtual_stack_count += self.stack_count;
        self.stack_count = 0;
    }

    pub fn kind(&self) -> ModifierKind {
        self.behavior.kind()
    }

    pub fn is(&self, kind: ModifierKind) -> bool {
        self.kind().is(kind)
    }

    pub fn owner(&self) -> Option<ModifierOwner> {
        match &self.behavior {
            Behavior::HeldItem(held_item) => Some(held_item.owner),
            _ => None,
        }
    }

    pub fn held_item(&self) -> Option<&HeldItemModifier> {
        match &self.behavior {
            Behavior::HeldItem(held_item) => Some(held_item),
            _ => None,
        }
    }

    pub fn held_item_mut(&mut self) -> Option<&mut HeldItemModifier> {
        match &mut self.behavior {
            Behavior::HeldItem(held_item) => Some(held_item),
            _ => None,
        }
    }

    pub fn is_transferable(&self) -> bool {
        self.held_item()
            .is_some_and(|held_item| held_item.is_transferable())
    }

    pub fn is_lapsing(&self) -> bool {
        match &self.behavior {
            Behavior::Lapsing(_) => true,
            Behavior::HeldItem(held_item) => held_item.is_lapsing(),
            _ => false,
        }
    }

    /// Does `other` represent the same item, so that the two may share one stack?
    ///
    /// Compares the class, the type identity, and every behaviorally relevant parameter, but not
    /// stack counts or runtime state such as countdowns.
    pub fn matches(&self, other: &Self) -> bool {
        self.kind() == other.kind()
            && (self.type_id() == other.type_id() || self.behavior.matches_any_type())
            && self.behavior.matches(&other.behavior)
    }

    /// The maximum effective stack count.
    pub fn max_stack_count(&self, ctx: &StackContext) -> u32 {
        match ctx.config.max_stack_overrides.get(&self.kind()) {
            Some(max) => *max,
            None => self.behavior.default_max_stack_count(ctx),
        }
    }

    /// The stack ceiling used for reward thresholds.
    ///
    /// Held items take the highest ceiling across their owner's party.
    pub fn max_stack_count_for_threshold(&self, ctx: &StackContext) -> u32 {
        match (ctx.config.max_stack_overrides.get(&self.kind()), &self.behavior) {
            (Some(max), _) => *max,
            (None, Behavior::HeldItem(held_item)) => {
                held_item.default_max_stack_count_for_threshold(ctx)
            }
            (None, behavior) => behavior.default_max_stack_count(ctx),
        }
    }

    /// Adds stacks if they fit under the stack ceiling.
    pub fn increment_stack(&mut self, amount: u32, virtual_stacks: bool, ctx: &StackContext) -> bool {
        if self.effective_stack_count() + amount > self.max_stack_count(ctx) {
            return false;
        }
        if virtual_stacks {
            self.virtual_stack_count += amount;
        } else {
            self.stack_count += amount;
        }
        true
    }

    /// Merges a matching candidate into this modifier.
    ///
    /// Lapsing party modifiers refresh or extend their countdown instead of stacking.
    pub fn merge(&mut self, candidate: &Self, virtual_stacks: bool, ctx: &StackContext) -> bool {
        match (&mut self.behavior, &candidate.behavior) {
            (Behavior::Lapsing(existing), Behavior::Lapsing(candidate)) => existing.merge(candidate),
            _ => self.increment_stack(candidate.stack_count, virtual_stacks, ctx),
        }
    }

    pub fn should_apply(&self, args: &ModifierArgs) -> bool {
        self.behavior.should_apply(args)
    }

    pub fn apply(&mut self, args: &mut ModifierArgs, ctx: &mut ApplyContext) -> bool {
        let stack_count = self.effective_stack_count();
        let applied = self.behavior.apply(stack_count, args, ctx);
        if applied {
            debug!("applied {}", self.modifier_type.name);
        }
        applied
    }

    /// Counts down one battle, returning whether the modifier should be kept.
    pub fn lapse(&mut self) -> bool {
        match &mut self.behavior {
            Behavior::Lapsing(lapsing) => lapsing.lapse(),
            Behavior::HeldItem(held_item) => held_item.lapse(),
            _ => true,
        }
    }

    /// The ordered constructor arguments following the type.
    pub fn args(&self) -> Vec<Value> {
        self.behavior.args()
    }

    /// A copy of this held item bound to another owner, carrying `stack_count` stacks.
    pub fn with_owner(&self, owner: ModifierOwner, stack_count: u32) -> Option<Self> {
        let Behavior::HeldItem(held_item) = &self.behavior else {
            return None;
        };
        let mut held_item = held_item.clone();
        held_item.owner = owner;
        Some(Self::new(
            self.modifier_type.clone(),
            Behavior::HeldItem(held_item),
            stack_count,
        ))
    }
}

#[cfg(test)]
mod persistent_test {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use crate::{
        config::BalanceConfig,
        data::Stat,
        modifier::{
            Behavior,
            HeldItemEffect,
            HeldItemModifier,
            ModifierKind,
            ModifierOwner,
            PartyEffect,
            PersistentModifier,
            StackContext,
        },
        modifier_type::ModifierType,
    };

    fn party(id: &str, effect: PartyEffect) -> PersistentModifier {
        PersistentModifier::new(
            Arc::new(ModifierType::new(id, id)),
            Behavior::Party(effect),
            1,
        )
    }

    fn held(id: &str, owner: ModifierOwner, effect: HeldItemEffect) -> PersistentModifier {
        PersistentModifier::new(
            Arc::new(ModifierType::new(id, id)),
            Behavior::HeldItem(HeldItemModifier::new(owner, effect)),
            1,
        )
    }

    #[test]
    fn increments_up_to_cap() {
        let config = BalanceConfig::default();
        let ctx = StackContext::without_combatants(&config);
        let mut charm = party(
            "SHINY_CHARM",
            PartyEffect::ShinyRateBooster,
        );
        assert!(charm.increment_stack(3, false, &ctx));
        assert!(!charm.increment_stack(1, false, &ctx));
        assert!(!charm.increment_stack(1, true, &ctx));
        assert_eq!(charm.stack_count(), 4);
    }

    #[test]
    fn virtual_stacks_count_toward_cap() {
        let config = BalanceConfig::default();
        let ctx = StackContext::without_combatants(&config);
        let mut map = party("MAP", PartyEffect::Map);
        map.make_virtual();
        assert_eq!(map.stack_count(), 0);
        assert_eq!(map.effective_stack_count(), 1);
        assert!(!map.increment_stack(1, false, &ctx));
        map.clear_virtual_stacks();
        assert!(map.increment_stack(1, false, &ctx));
    }

    #[test]
    fn config_overrides_cap() {
        let mut config = BalanceConfig::default();
        config.max_stack_overrides.insert(ModifierKind::Map, 3);
        let ctx = StackContext::without_combatants(&config);
        let map = party("MAP", PartyEffect::Map);
        assert_eq!(map.max_stack_count(&ctx), 3);
        assert_eq!(map.max_stack_count_for_threshold(&ctx), 3);
    }

    #[test]
    fn matches_type_and_parameters() {
        let a = held(
            "LEFTOVERS",
            ModifierOwner::Combatant(1),
            HeldItemEffect::TurnHeal,
        );
        let b = held(
            "LEFTOVERS",
            ModifierOwner::Combatant(1),
            HeldItemEffect::TurnHeal,
        );
        let other_owner = held(
            "LEFTOVERS",
            ModifierOwner::Combatant(2),
            HeldItemEffect::TurnHeal,
        );
        assert!(a.matches(&b));
        assert!(b.matches(&a));
        assert!(!a.matches(&other_owner));
    }

    #[test]
    fn stat_boosters_match_only_same_stats() {
        let boost = |stats: Vec<Stat>| {
            held(
                "EVIOLITE",
                ModifierOwner::Combatant(1),
                HeldItemEffect::EvolutionStatBooster {
                    stats,
                    multiplier: 1.5,
                },
            )
        };
        assert!(boost(vec![Stat::Def, Stat::SpDef]).matches(&boost(vec![Stat::Def, Stat::SpDef])));
        assert!(!boost(vec![Stat::Def]).matches(&boost(vec![Stat::SpDef])));
    }

    #[test]
    fn status_orbs_match_each_other() {
        let toxic = held(
            "TOXIC_ORB",
            ModifierOwner::Combatant(1),
            HeldItemEffect::TurnStatusEffect {
                effect: crate::data::StatusEffect::Toxic,
            },
        );
        let flame = held(
            "FLAME_ORB",
            ModifierOwner::Combatant(1),
            HeldItemEffect::TurnStatusEffect {
                effect: crate::data::StatusEffect::Burn,
            },
        );
        assert!(toxic.matches(&flame));
        assert!(flame.matches(&toxic));
    }

    #[test]
    fn vitamins_cannot_stack_without_holder() {
        let config = BalanceConfig::default();
        let ctx = StackContext::without_combatants(&config);
        let mut vitamin = held(
            "BASE_STAT_BOOSTER",
            ModifierOwner::Any,
            HeldItemEffect::BaseStat { stat: Stat::Atk },
        );
        assert_eq!(vitamin.max_stack_count(&ctx), 0);
        assert!(!vitamin.increment_stack(1, false, &ctx));
    }

    #[test]
    fn with_owner_rebinds_held_items_only() {
        let leftovers = held(
            "LEFTOVERS",
            ModifierOwner::Combatant(1),
            HeldItemEffect::TurnHeal,
        );
        let moved = leftovers.with_owner(ModifierOwner::Combatant(7), 2).unwrap();
        assert_eq!(moved.owner(), Some(ModifierOwner::Combatant(7)));
        assert_eq!(moved.stack_count(), 2);
        assert_eq!(party("MAP", PartyEffect::Map).with_owner(ModifierOwner::Any, 1).map(|m| m.stack_count()), None);
    }
}
