use rogue_prng::rand_util;
use serde_json::Value;

use crate::{
    data::StatusEffect,
    modifier::{
        ApplyContext,
        ModifierArgs,
        ModifierKind,
    },
};

/// The effect of a modifier granted to the enemy side as difficulty scales.
///
/// Percent arguments are stored as given so that save records reproduce them exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum EnemyEffect {
    DamageBooster { boost_percent: f64 },
    DamageReducer { reduction_percent: f64 },
    TurnHeal { heal_percent: f64 },
    AttackStatusEffectChance { effect: StatusEffect, chance_percent: f64 },
    StatusEffectHealChance { chance_percent: f64 },
    EndureChance { chance_percent: f64 },
    FusionChance { chance_percent: f64 },
}

impl EnemyEffect {
    pub fn kind(&self) -> ModifierKind {
        match self {
            Self::DamageBooster { .. } => ModifierKind::EnemyDamageBooster,
            Self::DamageReducer { .. } => ModifierKind::EnemyDamageReducer,
            Self::TurnHeal { .. } => ModifierKind::EnemyTurnHeal,
            Self::AttackStatusEffectChance { .. } => ModifierKind::EnemyAttackStatusEffectChance,
            Self::StatusEffectHealChance { .. } => ModifierKind::EnemyStatusEffectHealChance,
            Self::EndureChance { .. } => ModifierKind::EnemyEndureChance,
            Self::FusionChance { .. } => ModifierKind::EnemyFusionChance,
        }
    }

    pub fn default_max_stack_count(&self) -> u32 {
        match self {
            Self::DamageBooster { .. } => 999,
            Self::DamageReducer { .. } => 99,
            _ => 10,
        }
    }

    pub fn should_apply(&self, args: &ModifierArgs) -> bool {
        match (self, args) {
            (Self::DamageBooster { .. } | Self::DamageReducer { .. }, ModifierArgs::Number(_)) => {
                true
            }
            (
                Self::TurnHeal { .. }
                | Self::AttackStatusEffectChance { .. }
                | Self::StatusEffectHealChance { .. },
                ModifierArgs::Combatant(_),
            ) => true,
            (Self::EndureChance { .. }, ModifierArgs::CombatantFlag { .. }) => true,
            (Self::FusionChance { .. }, ModifierArgs::Flag(_)) => true,
            _ => false,
        }
    }

    pub fn apply(&mut self, stack_count: u32, args: &mut ModifierArgs, ctx: &mut ApplyContext) -> bool {
        let stacks = stack_count as f64;
        match (self, args) {
            (Self::DamageBooster { boost_percent }, ModifierArgs::Number(damage)) => {
                let multiplier = 1.0 + *boost_percent / 100.0;
                **damage = (**damage * multiplier.powi(stack_count as i32)).floor();
                true
            }
            (Self::DamageReducer { reduction_percent }, ModifierArgs::Number(damage)) => {
                let multiplier = 1.0 - *reduction_percent / 100.0;
                **damage = (**damage * multiplier.powi(stack_count as i32)).floor();
                true
            }
            (Self::TurnHeal { heal_percent }, ModifierArgs::Combatant(combatant)) => {
                if combatant.is_full_hp() {
                    return false;
                }
                let per_stack = (combatant.max_hp() as f64 * *heal_percent / 100.0).floor() as u32;
                combatant.heal((per_stack * stack_count).max(1));
                true
            }
            (
                Self::AttackStatusEffectChance {
                    effect,
                    chance_percent,
                },
                ModifierArgs::Combatant(target),
            ) => {
                if rand_util::rand_float(ctx.prng) < *chance_percent / 100.0 * stacks {
                    return target.try_set_status(*effect);
                }
                false
            }
            (Self::StatusEffectHealChance { chance_percent }, ModifierArgs::Combatant(target)) => {
                if target.status().is_some()
                    && rand_util::rand_float(ctx.prng) < *chance_percent / 100.0 * stacks
                {
                    target.reset_status();
                    return true;
                }
                false
            }
            (Self::EndureChance { chance_percent }, ModifierArgs::CombatantFlag { flag, .. }) => {
                if **flag || rand_util::rand_float(ctx.prng) >= *chance_percent / 100.0 * stacks {
                    return false;
                }
                **flag = true;
                true
            }
            (Self::FusionChance { chance_percent }, ModifierArgs::Flag(fusion)) => {
                if rand_util::rand_float(ctx.prng) >= *chance_percent / 100.0 * stacks {
                    return false;
                }
                **fusion = true;
                true
            }
            _ => false,
        }
    }

    pub fn args(&self) -> Vec<Value> {
        match self {
            Self::DamageBooster { boost_percent } => vec![Value::from(*boost_percent)],
            Self::DamageReducer { reduction_percent } => vec![Value::from(*reduction_percent)],
            Self::TurnHeal { heal_percent } => vec![Value::from(*heal_percent)],
            Self::AttackStatusEffectChance {
                effect,
                chance_percent,
            } => vec![Value::from(effect.to_string()), Value::from(*chance_percent)],
            Self::StatusEffectHealChance { chance_percent }
            | Self::EndureChance { chance_percent }
            | Self::FusionChance { chance_percent } => vec![Value::from(*chance_percent)],
        }
    }
}
