use rogue_prng::rand_util;
use serde_json::Value;

use crate::{
    collection::TransferRequest,
    combatant::Combatant,
    common::Id,
    data::{
        BattleStat,
        BerryType,
        PokemonType,
        Stat,
        StatusEffect,
    },
    modifier::{
        ApplyContext,
        ModifierArgs,
        ModifierKind,
        ModifierOwner,
        StackContext,
        berry,
        lapsing::BattleCountdown,
    },
};

const MIN_BASE_STAT: i64 = 1;
const MAX_BASE_STAT: i64 = 999999;
const MAX_MOVE_ACCURACY: i64 = 100;

/// The effect of a held item.
#[derive(Debug, Clone, PartialEq)]
pub enum HeldItemEffect {
    Terastallize {
        tera_type: PokemonType,
        countdown: BattleCountdown,
    },
    BaseStat {
        stat: Stat,
    },
    PokemonBaseStatTotal {
        stat_modifier: i64,
    },
    PokemonBaseStatFlat {
        stat_modifier: i64,
        stats: Vec<Stat>,
    },
    PokemonIncrementingStat,
    StatBooster {
        stats: Vec<Stat>,
        multiplier: f64,
    },
    EvolutionStatBooster {
        stats: Vec<Stat>,
        multiplier: f64,
    },
    SpeciesStatBooster {
        stats: Vec<Stat>,
        multiplier: f64,
        species: Vec<Id>,
    },
    CritBooster {
        stage_increment: i64,
    },
    SpeciesCritBooster {
        stage_increment: i64,
        species: Vec<Id>,
    },
    AttackTypeBooster {
        move_type: PokemonType,
        boost_percent: f64,
    },
    SurviveDamage,
    BypassSpeedChance,
    FlinchChance,
    TurnHeal,
    TurnStatusEffect {
        effect: StatusEffect,
    },
    HitHeal,
    Berry {
        berry_type: BerryType,
        consumed: bool,
    },
    PokemonInstantRevive,
    ResetNegativeStatStage,
    FieldEffect,
    PokemonExpBooster {
        boost_percent: f64,
    },
    PokemonFriendshipBooster,
    PokemonNatureWeight,
    PokemonMoveAccuracyBooster {
        accuracy: i64,
    },
    PokemonMultiHit,
    PokemonFormChangeItem {
        form_change_item: Id,
        active: bool,
    },
    DamageMoneyReward,
    SwitchEffectTransfer,
    TurnHeldItemTransfer,
    ContactHeldItemTransferChance {
        chance_percent: f64,
    },
}

impl HeldItemEffect {
    pub fn kind(&self) -> ModifierKind {
        match self {
            Self::Terastallize { .. } => ModifierKind::Terastallize,
            Self::BaseStat { .. } => ModifierKind::BaseStat,
            Self::PokemonBaseStatTotal { .. } => ModifierKind::PokemonBaseStatTotal,
            Self::PokemonBaseStatFlat { .. } => ModifierKind::PokemonBaseStatFlat,
            Self::PokemonIncrementingStat => ModifierKind::PokemonIncrementingStat,
            Self::StatBooster { .. } => ModifierKind::StatBooster,
            Self::EvolutionStatBooster { .. } => ModifierKind::EvolutionStatBooster,
            Self::SpeciesStatBooster { .. } => ModifierKind::SpeciesStatBooster,
            Self::CritBooster { .. } => ModifierKind::CritBooster,
            Self::SpeciesCritBooster { .. } => ModifierKind::SpeciesCritBooster,
            Self::AttackTypeBooster { .. } => ModifierKind::AttackTypeBooster,
            Self::SurviveDamage => ModifierKind::SurviveDamage,
            Self::BypassSpeedChance => ModifierKind::BypassSpeedChance,
            Self::FlinchChance => ModifierKind::FlinchChance,
            Self::TurnHeal => ModifierKind::TurnHeal,
            Self::TurnStatusEffect { .. } => ModifierKind::TurnStatusEffect,
            Self::HitHeal => ModifierKind::HitHeal,
            Self::Berry { .. } => ModifierKind::Berry,
            Self::PokemonInstantRevive => ModifierKind::PokemonInstantRevive,
            Self::ResetNegativeStatStage => ModifierKind::ResetNegativeStatStage,
            Self::FieldEffect => ModifierKind::FieldEffect,
            Self::PokemonExpBooster { .. } => ModifierKind::PokemonExpBooster,
            Self::PokemonFriendshipBooster => ModifierKind::PokemonFriendshipBooster,
            Self::PokemonNatureWeight => ModifierKind::PokemonNatureWeight,
            Self::PokemonMoveAccuracyBooster { .. } => ModifierKind::PokemonMoveAccuracyBooster,
            Self::PokemonMultiHit => ModifierKind::PokemonMultiHit,
            Self::PokemonFormChangeItem { .. } => ModifierKind::PokemonFormChangeItem,
            Self::DamageMoneyReward => ModifierKind::DamageMoneyReward,
            Self::SwitchEffectTransfer => ModifierKind::SwitchEffectTransfer,
            Self::TurnHeldItemTransfer => ModifierKind::TurnHeldItemTransfer,
            Self::ContactHeldItemTransferChance { .. } => {
                ModifierKind::ContactHeldItemTransferChance
            }
        }
    }

    /// Can the item be stolen or moved to another combatant?
    pub fn is_transferable(&self) -> bool {
        !matches!(
            self,
            Self::Terastallize { .. }
                | Self::BaseStat { .. }
                | Self::PokemonBaseStatTotal { .. }
                | Self::PokemonBaseStatFlat { .. }
                | Self::PokemonIncrementingStat
                | Self::PokemonFormChangeItem { .. }
        )
    }

    /// Does a match ignore the item's type identity?
    ///
    /// A combatant holds at most one status orb, whichever status it inflicts.
    pub fn matches_any_type(&self) -> bool {
        matches!(self, Self::TurnStatusEffect { .. })
    }

    /// Compares everything but runtime state.
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Terastallize { tera_type: a, .. },
                Self::Terastallize { tera_type: b, .. },
            ) => a == b,
            (Self::TurnStatusEffect { .. }, Self::TurnStatusEffect { .. }) => true,
            (Self::Berry { berry_type: a, .. }, Self::Berry { berry_type: b, .. }) => a == b,
            (
                Self::PokemonFormChangeItem {
                    form_change_item: a,
                    ..
                },
                Self::PokemonFormChangeItem {
                    form_change_item: b,
                    ..
                },
            ) => a == b,
            _ => self == other,
        }
    }

    /// The stack ceiling of the item for a specific holder.
    ///
    /// Vitamins are capped by the holder's IV for the boosted stat, so they cannot be stacked
    /// without a known holder.
    pub fn default_max_stack_count(&self, holder: Option<&dyn Combatant>) -> u32 {
        match self {
            Self::BaseStat { stat } => holder.map(|holder| holder.iv(*stat)).unwrap_or(0),
            Self::Berry { berry_type, .. } => berry::max_stack_count(*berry_type),
            Self::Terastallize { .. }
            | Self::PokemonBaseStatFlat { .. }
            | Self::StatBooster { .. }
            | Self::EvolutionStatBooster { .. }
            | Self::SpeciesStatBooster { .. }
            | Self::CritBooster { .. }
            | Self::SpeciesCritBooster { .. }
            | Self::TurnStatusEffect { .. }
            | Self::PokemonInstantRevive
            | Self::PokemonFormChangeItem { .. }
            | Self::SwitchEffectTransfer
            | Self::TurnHeldItemTransfer => 1,
            Self::PokemonBaseStatTotal { .. }
            | Self::ResetNegativeStatStage
            | Self::FieldEffect => 2,
            Self::BypassSpeedChance
            | Self::FlinchChance
            | Self::PokemonFriendshipBooster
            | Self::PokemonMoveAccuracyBooster { .. }
            | Self::PokemonMultiHit => 3,
            Self::TurnHeal | Self::HitHeal => 4,
            Self::SurviveDamage
            | Self::DamageMoneyReward
            | Self::ContactHeldItemTransferChance { .. } => 5,
            Self::PokemonNatureWeight => 10,
            Self::PokemonIncrementingStat => 50,
            Self::AttackTypeBooster { .. } | Self::PokemonExpBooster { .. } => 99,
        }
    }

    fn expects(&self, args: &ModifierArgs) -> bool {
        match self {
            Self::Terastallize { .. } => matches!(args, ModifierArgs::TeraType { .. }),
            Self::BaseStat { .. }
            | Self::PokemonBaseStatTotal { .. }
            | Self::PokemonBaseStatFlat { .. } => matches!(args, ModifierArgs::BaseStats { .. }),
            Self::PokemonIncrementingStat => matches!(args, ModifierArgs::CombatantStat { .. }),
            Self::StatBooster { stats, .. }
            | Self::EvolutionStatBooster { stats, .. }
            | Self::SpeciesStatBooster { stats, .. } => match args {
                ModifierArgs::CombatantStat { stat, .. } => stats.contains(stat),
                _ => false,
            },
            Self::CritBooster { .. }
            | Self::SpeciesCritBooster { .. }
            | Self::FieldEffect
            | Self::PokemonExpBooster { .. }
            | Self::PokemonFriendshipBooster
            | Self::PokemonMoveAccuracyBooster { .. } => {
                matches!(args, ModifierArgs::CombatantInteger { .. })
            }
            Self::AttackTypeBooster { move_type, .. } => match args {
                ModifierArgs::MovePower {
                    move_type: event_type,
                    ..
                } => move_type == event_type,
                _ => false,
            },
            Self::SurviveDamage | Self::BypassSpeedChance | Self::FlinchChance => {
                matches!(args, ModifierArgs::CombatantFlag { .. })
            }
            Self::TurnHeal
            | Self::TurnStatusEffect { .. }
            | Self::HitHeal
            | Self::PokemonInstantRevive
            | Self::ResetNegativeStatStage
            | Self::SwitchEffectTransfer => matches!(args, ModifierArgs::Combatant(_)),
            Self::Berry { .. } => matches!(args, ModifierArgs::Berry { .. }),
            Self::PokemonNatureWeight => matches!(args, ModifierArgs::CombatantNumber { .. }),
            Self::PokemonMultiHit => matches!(args, ModifierArgs::MultiHit { .. }),
            Self::PokemonFormChangeItem { .. } => matches!(args, ModifierArgs::FormChange { .. }),
            Self::DamageMoneyReward => matches!(args, ModifierArgs::DamageMoney { .. }),
            Self::TurnHeldItemTransfer | Self::ContactHeldItemTransferChance { .. } => {
                matches!(args, ModifierArgs::HeldItemTransfer { .. })
            }
        }
    }

    fn holds_for_species(species: &[Id], combatant: &dyn Combatant) -> bool {
        species.contains(combatant.species())
            || combatant
                .fusion_species()
                .is_some_and(|fusion| species.contains(fusion))
    }

    pub fn should_apply(&self, args: &ModifierArgs) -> bool {
        if !self.expects(args) {
            return false;
        }
        match (self, args) {
            (Self::Berry { berry_type, consumed }, ModifierArgs::Berry { combatant, .. }) => {
                !consumed && berry::should_eat(*berry_type, &**combatant)
            }
            _ => true,
        }
    }

    pub fn apply(&mut self, stack_count: u32, args: &mut ModifierArgs, ctx: &mut ApplyContext) -> bool {
        let stacks = stack_count as f64;
        match (self, args) {
            (Self::Terastallize { tera_type, .. }, ModifierArgs::TeraType { tera_type: value, .. }) => {
                **value = Some(*tera_type);
                true
            }
            (Self::BaseStat { stat }, ModifierArgs::BaseStats { base_stats, .. }) => {
                let boosted = (base_stats.get(*stat) as f64
                    * (1.0 + stacks * ctx.config.vitamin_boost_per_stack))
                    .floor();
                base_stats.set(*stat, boosted as u32);
                true
            }
            (
                Self::PokemonBaseStatTotal { stat_modifier },
                ModifierArgs::BaseStats { base_stats, .. },
            ) => {
                for stat in Stat::ALL {
                    let delta = match stat {
                        Stat::HP => (*stat_modifier as f64 / 2.0).floor() as i64,
                        _ => *stat_modifier,
                    };
                    let value = (base_stats.get(stat) as i64 + delta).clamp(MIN_BASE_STAT, MAX_BASE_STAT);
                    base_stats.set(stat, value as u32);
                }
                true
            }
            (
                Self::PokemonBaseStatFlat {
                    stat_modifier,
                    stats,
                },
                ModifierArgs::BaseStats { base_stats, .. },
            ) => {
                for stat in stats.iter() {
                    let value = (base_stats.get(*stat) as i64 + *stat_modifier)
                        .clamp(MIN_BASE_STAT, MAX_BASE_STAT);
                    base_stats.set(*stat, value as u32);
                }
                true
            }
            (
                Self::PokemonIncrementingStat,
                ModifierArgs::CombatantStat { stat, value, .. },
            ) => {
                let at_cap = stack_count >= 50;
                match stat {
                    Stat::HP => {
                        **value += 2.0 * stacks;
                        if at_cap {
                            **value = (**value * 1.1).floor();
                        }
                    }
                    _ => {
                        **value += stacks;
                        if at_cap {
                            **value = (**value * 1.05).floor();
                        }
                    }
                }
                true
            }
            (
                Self::StatBooster { multiplier, .. },
                ModifierArgs::CombatantStat { value, .. },
            ) => {
                **value *= *multiplier;
                true
            }
            (
                Self::EvolutionStatBooster { multiplier, .. },
                ModifierArgs::CombatantStat {
                    combatant, value, ..
                },
            ) => {
                let unevolved = combatant.is_unevolved();
                match combatant.fusion_is_unevolved() {
                    Some(fusion_unevolved) if fusion_unevolved != unevolved => {
                        **value *= 1.0 + (*multiplier - 1.0) / 2.0;
                        true
                    }
                    _ if unevolved => {
                        **value *= *multiplier;
                        true
                    }
                    _ => false,
                }
            }
            (
                Self::SpeciesStatBooster {
                    multiplier,
                    species,
                    ..
                },
                ModifierArgs::CombatantStat {
                    combatant, value, ..
                },
            ) => {
                if !Self::holds_for_species(species, &**combatant) {
                    return false;
                }
                **value *= *multiplier;
                true
            }
            (
                Self::CritBooster { stage_increment },
                ModifierArgs::CombatantInteger { value, .. },
            ) => {
                **value += *stage_increment;
                true
            }
            (
                Self::SpeciesCritBooster {
                    stage_increment,
                    species,
                },
                ModifierArgs::CombatantInteger { combatant, value },
            ) => {
                if !Self::holds_for_species(species, &**combatant) {
                    return false;
                }
                **value += *stage_increment;
                true
            }
            (
                Self::AttackTypeBooster { boost_percent, .. },
                ModifierArgs::MovePower { power, .. },
            ) => {
                if **power < 1.0 {
                    return false;
                }
                **power = (**power * (1.0 + stacks * *boost_percent / 100.0)).floor();
                true
            }
            (
                Self::SurviveDamage | Self::BypassSpeedChance,
                ModifierArgs::CombatantFlag { flag, .. },
            ) => {
                if !**flag {
                    **flag = rand_util::rand_int(ctx.prng, ctx.config.chance_denominator)
                        < stack_count as u64;
                }
                true
            }
            (Self::FlinchChance, ModifierArgs::CombatantFlag { combatant, flag }) => {
                if !**flag {
                    let roll = rand_util::rand_int(ctx.prng, ctx.config.chance_denominator);
                    **flag = (roll as f64) < stacks * combatant.secondary_chance_multiplier();
                }
                true
            }
            (Self::TurnHeal, ModifierArgs::Combatant(combatant)) => {
                if combatant.is_full_hp() {
                    return false;
                }
                combatant.heal((combatant.max_hp() / 16).max(1) * stack_count);
                true
            }
            (Self::TurnStatusEffect { effect }, ModifierArgs::Combatant(combatant)) => {
                combatant.try_set_status(*effect)
            }
            (Self::HitHeal, ModifierArgs::Combatant(combatant)) => {
                let dealt = combatant.damage_dealt_this_turn();
                if dealt > 0 && !combatant.is_full_hp() {
                    combatant.heal((dealt / 8).max(1) * stack_count);
                }
                true
            }
            (
                Self::Berry {
                    berry_type,
                    consumed,
                },
                ModifierArgs::Berry {
                    combatant,
                    preserved,
                },
            ) => {
                berry::eat(*berry_type, &mut **combatant, ctx.prng);
                if !*preserved {
                    *consumed = true;
                }
                true
            }
            (Self::PokemonInstantRevive, ModifierArgs::Combatant(combatant)) => {
                combatant.heal((combatant.max_hp() / 2).max(1));
                combatant.reset_status();
                true
            }
            (Self::ResetNegativeStatStage, ModifierArgs::Combatant(combatant)) => {
                let mut reset = false;
                for stat in BattleStat::ALL {
                    if combatant.stat_stage(stat) < 0 {
                        combatant.set_stat_stage(stat, 0);
                        reset = true;
                    }
                }
                reset
            }
            (Self::FieldEffect, ModifierArgs::CombatantInteger { value, .. }) => {
                **value += ctx.config.field_effect_turns_per_stack * stack_count as i64;
                true
            }
            (
                Self::PokemonExpBooster { boost_percent },
                ModifierArgs::CombatantInteger { value, .. },
            ) => {
                **value = (**value as f64 * (1.0 + stacks * *boost_percent / 100.0)).floor() as i64;
                true
            }
            (Self::PokemonFriendshipBooster, ModifierArgs::CombatantInteger { value, .. }) => {
                **value = (**value as f64
                    * (1.0 + ctx.config.friendship_boost_per_stack * stacks))
                    .floor() as i64;
                true
            }
            (Self::PokemonNatureWeight, ModifierArgs::CombatantNumber { value, .. }) => {
                if **value == 1.0 {
                    return false;
                }
                let step = ctx.config.nature_weight_per_stack * stacks;
                **value += if **value > 1.0 { step } else { -step };
                true
            }
            (
                Self::PokemonMoveAccuracyBooster { accuracy },
                ModifierArgs::CombatantInteger { value, .. },
            ) => {
                **value = (**value + *accuracy * stack_count as i64).min(MAX_MOVE_ACCURACY);
                true
            }
            (
                Self::PokemonMultiHit,
                ModifierArgs::MultiHit {
                    hit_count,
                    power_multiplier,
                    ..
                },
            ) => {
                **hit_count *= stack_count as i64 + 1;
                **power_multiplier *= ctx.config.multi_hit_power_multiplier(stack_count);
                true
            }
            (
                Self::PokemonFormChangeItem {
                    form_change_item,
                    active,
                },
                ModifierArgs::FormChange {
                    combatant,
                    active: holder_active,
                },
            ) => combatant.trigger_form_change(form_change_item, *active && *holder_active),
            (
                Self::DamageMoneyReward,
                ModifierArgs::DamageMoney { damage, money, .. },
            ) => {
                **money += (*damage as f64 * ctx.config.damage_money_per_stack * stacks).floor()
                    as i64;
                true
            }
            (Self::SwitchEffectTransfer, ModifierArgs::Combatant(_)) => true,
            (
                Self::TurnHeldItemTransfer,
                ModifierArgs::HeldItemTransfer {
                    holder,
                    targets,
                    requests,
                },
            ) => {
                let Some(target) = rand_util::sample_slice(ctx.prng, &targets[..]).copied() else {
                    return false;
                };
                requests.push(TransferRequest::new(*holder, target, stack_count));
                true
            }
            (
                Self::ContactHeldItemTransferChance { chance_percent },
                ModifierArgs::HeldItemTransfer {
                    holder,
                    targets,
                    requests,
                },
            ) => {
                let Some(target) = rand_util::sample_slice(ctx.prng, &targets[..]).copied() else {
                    return false;
                };
                if rand_util::rand_float(ctx.prng) >= *chance_percent / 100.0 * stacks {
                    return false;
                }
                requests.push(TransferRequest::new(*holder, target, 1));
                true
            }
            _ => false,
        }
    }

    /// Constructor arguments following the owner id.
    pub fn args(&self) -> Vec<Value> {
        fn stat_list(stats: &[Stat]) -> Value {
            Value::from(stats.iter().map(|stat| stat.to_string()).collect::<Vec<_>>())
        }
        fn id_list(ids: &[Id]) -> Value {
            Value::from(ids.iter().map(|id| id.to_string()).collect::<Vec<_>>())
        }

        match self {
            Self::Terastallize {
                tera_type,
                countdown,
            } => vec![
                Value::from(tera_type.to_string()),
                Value::from(countdown.battles_left()),
            ],
            Self::BaseStat { stat } => vec![Value::from(stat.to_string())],
            Self::PokemonBaseStatTotal { stat_modifier } => vec![Value::from(*stat_modifier)],
            Self::PokemonBaseStatFlat {
                stat_modifier,
                stats,
            } => vec![Value::from(*stat_modifier), stat_list(stats)],
            Self::StatBooster { stats, multiplier }
            | Self::EvolutionStatBooster { stats, multiplier } => {
                vec![stat_list(stats), Value::from(*multiplier)]
            }
            Self::SpeciesStatBooster {
                stats,
                multiplier,
                species,
            } => vec![stat_list(stats), Value::from(*multiplier), id_list(species)],
            Self::CritBooster { stage_increment } => vec![Value::from(*stage_increment)],
            Self::SpeciesCritBooster {
                stage_increment,
                species,
            } => vec![Value::from(*stage_increment), id_list(species)],
            Self::AttackTypeBooster {
                move_type,
                boost_percent,
            } => vec![
                Value::from(move_type.to_string()),
                Value::from(*boost_percent),
            ],
            Self::TurnStatusEffect { effect } => vec![Value::from(effect.to_string())],
            Self::Berry { berry_type, .. } => vec![Value::from(berry_type.to_string())],
            Self::PokemonExpBooster { boost_percent } => vec![Value::from(*boost_percent)],
            Self::PokemonMoveAccuracyBooster { accuracy } => vec![Value::from(*accuracy)],
            Self::PokemonFormChangeItem {
                form_change_item,
                active,
            } => vec![
                Value::from(form_change_item.to_string()),
                Value::from(*active),
            ],
            Self::ContactHeldItemTransferChance { chance_percent } => {
                vec![Value::from(*chance_percent)]
            }
            Self::PokemonIncrementingStat
            | Self::SurviveDamage
            | Self::BypassSpeedChance
            | Self::FlinchChance
            | Self::TurnHeal
            | Self::HitHeal
            | Self::PokemonInstantRevive
            | Self::ResetNegativeStatStage
            | Self::FieldEffect
            | Self::PokemonFriendshipBooster
            | Self::PokemonNatureWeight
            | Self::PokemonMultiHit
            | Self::DamageMoneyReward
            | Self::SwitchEffectTransfer
            | Self::TurnHeldItemTransfer => Vec::new(),
        }
    }
}

/// A modifier bound to a combatant.
#[derive(Debug, Clone, PartialEq)]
pub struct HeldItemModifier {
    pub owner: ModifierOwner,
    pub effect: HeldItemEffect,
}

impl HeldItemModifier {
    pub fn new(owner: ModifierOwner, effect: HeldItemEffect) -> Self {
        Self { owner, effect }
    }

    pub fn is_transferable(&self) -> bool {
        self.effect.is_transferable()
    }

    pub fn matches(&self, other: &Self) -> bool {
        self.owner == other.owner && self.effect.matches(&other.effect)
    }

    pub fn default_max_stack_count(&self, ctx: &StackContext) -> u32 {
        let holder = self
            .owner
            .combatant()
            .and_then(|id| ctx.combatants.combatant(id));
        self.effect.default_max_stack_count(holder)
    }

    /// The highest stack ceiling the item could have on any member of the holder's party.
    pub fn default_max_stack_count_for_threshold(&self, ctx: &StackContext) -> u32 {
        let Some(holder) = self
            .owner
            .combatant()
            .and_then(|id| ctx.combatants.combatant(id))
        else {
            return self.effect.default_max_stack_count(None);
        };
        ctx.combatants
            .party(holder.is_player())
            .into_iter()
            .filter_map(|id| ctx.combatants.combatant(id))
            .map(|member| self.effect.default_max_stack_count(Some(member)))
            .max()
            .unwrap_or(0)
    }

    pub fn should_apply(&self, args: &ModifierArgs) -> bool {
        self.owner.accepts(args.combatant_id()) && self.effect.should_apply(args)
    }

    pub fn apply(&mut self, stack_count: u32, args: &mut ModifierArgs, ctx: &mut ApplyContext) -> bool {
        self.effect.apply(stack_count, args, ctx)
    }

    pub fn is_lapsing(&self) -> bool {
        matches!(self.effect, HeldItemEffect::Terastallize { .. })
    }

    /// Counts down a lapsing held item, returning whether any battles remain.
    ///
    /// Items without a countdown never expire.
    pub fn lapse(&mut self) -> bool {
        match &mut self.effect {
            HeldItemEffect::Terastallize { countdown, .. } => countdown.lapse(),
            _ => true,
        }
    }

    /// Constructor arguments: the owner id, then the effect's own arguments.
    pub fn args(&self) -> Vec<Value> {
        let mut args = vec![Value::from(self.owner.to_arg())];
        args.extend(self.effect.args());
        args
    }
}
