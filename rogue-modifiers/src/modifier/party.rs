use rogue_prng::rand_util;
use serde_json::Value;

use crate::modifier::{
    ApplyContext,
    ModifierArgs,
    ModifierKind,
};

/// The effect of a party-wide persistent modifier.
#[derive(Debug, Clone, PartialEq)]
pub enum PartyEffect {
    Map,
    MegaEvolutionAccess,
    GigantamaxAccess,
    TerastallizeAccess,
    LockModifierTiers,
    MultipleParticipantExpBonus,
    ExpShare,
    ExpBalance,
    IvScanner,
    LevelIncrementBooster,
    PreserveBerry,
    HealingBooster { multiplier: f64 },
    ExpBooster { boost_percent: f64 },
    MoneyMultiplier,
    MoneyInterest,
    HiddenAbilityRateBooster,
    ShinyRateBooster,
    ExtraModifier,
}

impl PartyEffect {
    pub fn kind(&self) -> ModifierKind {
        match self {
            Self::Map => ModifierKind::Map,
            Self::MegaEvolutionAccess => ModifierKind::MegaEvolutionAccess,
            Self::GigantamaxAccess => ModifierKind::GigantamaxAccess,
            Self::TerastallizeAccess => ModifierKind::TerastallizeAccess,
            Self::LockModifierTiers => ModifierKind::LockModifierTiers,
            Self::MultipleParticipantExpBonus => ModifierKind::MultipleParticipantExpBonus,
            Self::ExpShare => ModifierKind::ExpShare,
            Self::ExpBalance => ModifierKind::ExpBalance,
            Self::IvScanner => ModifierKind::IvScanner,
            Self::LevelIncrementBooster => ModifierKind::LevelIncrementBooster,
            Self::PreserveBerry => ModifierKind::PreserveBerry,
            Self::HealingBooster { .. } => ModifierKind::HealingBooster,
            Self::ExpBooster { .. } => ModifierKind::ExpBooster,
            Self::MoneyMultiplier => ModifierKind::MoneyMultiplier,
            Self::MoneyInterest => ModifierKind::MoneyInterest,
            Self::HiddenAbilityRateBooster => ModifierKind::HiddenAbilityRateBooster,
            Self::ShinyRateBooster => ModifierKind::ShinyRateBooster,
            Self::ExtraModifier => ModifierKind::ExtraModifier,
        }
    }

    /// Effects whose only behavior is being held.
    pub fn is_presence_flag(&self) -> bool {
        matches!(
            self,
            Self::Map
                | Self::MegaEvolutionAccess
                | Self::GigantamaxAccess
                | Self::TerastallizeAccess
                | Self::LockModifierTiers
                | Self::MultipleParticipantExpBonus
                | Self::ExpShare
                | Self::ExpBalance
                | Self::IvScanner
        )
    }

    pub fn default_max_stack_count(&self) -> u32 {
        match self {
            Self::Map
            | Self::MegaEvolutionAccess
            | Self::GigantamaxAccess
            | Self::TerastallizeAccess
            | Self::LockModifierTiers => 1,
            Self::MultipleParticipantExpBonus | Self::ExpShare => 5,
            Self::ExpBalance => 4,
            Self::IvScanner => 3,
            Self::LevelIncrementBooster => 99,
            Self::PreserveBerry => 3,
            Self::HealingBooster { .. } => 5,
            Self::ExpBooster { boost_percent } => {
                let boost = boost_percent / 100.0;
                if boost < 0.6 {
                    99
                } else if boost < 1.0 {
                    30
                } else {
                    10
                }
            }
            Self::MoneyMultiplier | Self::MoneyInterest => 5,
            Self::HiddenAbilityRateBooster | Self::ShinyRateBooster => 4,
            Self::ExtraModifier => 3,
        }
    }

    pub fn should_apply(&self, args: &ModifierArgs) -> bool {
        if self.is_presence_flag() {
            return true;
        }
        match (self, args) {
            (
                Self::LevelIncrementBooster
                | Self::ExpBooster { .. }
                | Self::MoneyMultiplier
                | Self::ExtraModifier,
                ModifierArgs::Integer(_),
            ) => true,
            (Self::PreserveBerry, ModifierArgs::Flag(_)) => true,
            (
                Self::HealingBooster { .. }
                | Self::HiddenAbilityRateBooster
                | Self::ShinyRateBooster,
                ModifierArgs::Number(_),
            ) => true,
            (Self::MoneyInterest, ModifierArgs::Session(_)) => true,
            _ => false,
        }
    }

    pub fn apply(&mut self, stack_count: u32, args: &mut ModifierArgs, ctx: &mut ApplyContext) -> bool {
        if self.is_presence_flag() {
            return true;
        }
        let stacks = stack_count as f64;
        match (self, args) {
            (Self::LevelIncrementBooster, ModifierArgs::Integer(levels)) => {
                **levels += stack_count as i64;
                true
            }
            (Self::PreserveBerry, ModifierArgs::Flag(preserved)) => {
                if !**preserved {
                    **preserved = rand_util::rand_int(ctx.prng, ctx.config.chance_denominator)
                        < stack_count as u64 * ctx.config.berry_preserve_chance_per_stack;
                }
                true
            }
            (Self::HealingBooster { multiplier }, ModifierArgs::Number(value)) => {
                **value *= 1.0 + (*multiplier - 1.0) * stacks;
                true
            }
            (Self::ExpBooster { boost_percent }, ModifierArgs::Integer(exp)) => {
                **exp = (**exp as f64 * (1.0 + stacks * *boost_percent / 100.0)).floor() as i64;
                true
            }
            (Self::MoneyMultiplier, ModifierArgs::Integer(money)) => {
                **money += (**money as f64 * ctx.config.money_multiplier_per_stack * stacks).floor()
                    as i64;
                true
            }
            (Self::MoneyInterest, ModifierArgs::Session(session)) => {
                let interest = (session.money() as f64
                    * ctx.config.money_interest_per_stack
                    * stacks)
                    .floor() as u64;
                session.add_money(interest);
                true
            }
            (Self::HiddenAbilityRateBooster, ModifierArgs::Number(rate)) => {
                **rate *= 2f64.powi(-1 - stack_count as i32);
                true
            }
            (Self::ShinyRateBooster, ModifierArgs::Number(rate)) => {
                **rate *= 2f64.powi(1 + stack_count as i32);
                true
            }
            (Self::ExtraModifier, ModifierArgs::Integer(count)) => {
                **count += stack_count as i64;
                true
            }
            _ => false,
        }
    }

    pub fn args(&self) -> Vec<Value> {
        match self {
            Self::HealingBooster { multiplier } => vec![Value::from(*multiplier)],
            Self::ExpBooster { boost_percent } => vec![Value::from(*boost_percent)],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod party_test {
    use pretty_assertions::assert_eq;
    use rogue_prng::SeededRandomNumberGenerator;

    use crate::{
        config::BalanceConfig,
        modifier::{
            ApplyContext,
            ModifierArgs,
            party::PartyEffect,
        },
    };

    fn apply(effect: &mut PartyEffect, stack_count: u32, args: &mut ModifierArgs) -> bool {
        let config = BalanceConfig::default();
        let mut prng = SeededRandomNumberGenerator::new(Some(100));
        let mut ctx = ApplyContext::new(&config, &mut prng);
        effect.should_apply(args) && effect.apply(stack_count, args, &mut ctx)
    }

    #[test]
    fn exp_booster_cap_depends_on_boost() {
        assert_eq!(
            PartyEffect::ExpBooster {
                boost_percent: 25.0
            }
            .default_max_stack_count(),
            99
        );
        assert_eq!(
            PartyEffect::ExpBooster {
                boost_percent: 60.0
            }
            .default_max_stack_count(),
            30
        );
        assert_eq!(
            PartyEffect::ExpBooster {
                boost_percent: 100.0
            }
            .default_max_stack_count(),
            10
        );
    }

    #[test]
    fn exp_booster_floors_result() {
        let mut exp = 101;
        assert!(apply(
            &mut PartyEffect::ExpBooster {
                boost_percent: 25.0
            },
            2,
            &mut ModifierArgs::Integer(&mut exp)
        ));
        assert_eq!(exp, 151);
    }

    #[test]
    fn money_multiplier_adds_fraction_per_stack() {
        let mut money = 1000;
        assert!(apply(
            &mut PartyEffect::MoneyMultiplier,
            3,
            &mut ModifierArgs::Integer(&mut money)
        ));
        assert_eq!(money, 1600);
    }

    #[test]
    fn healing_booster_scales_with_stacks() {
        let mut multiplier = 1.0;
        assert!(apply(
            &mut PartyEffect::HealingBooster { multiplier: 1.1 },
            2,
            &mut ModifierArgs::Number(&mut multiplier)
        ));
        assert!((multiplier - 1.2).abs() < 1e-9);
    }

    #[test]
    fn rate_boosters_use_powers_of_two() {
        let mut shiny = 1.0;
        assert!(apply(
            &mut PartyEffect::ShinyRateBooster,
            2,
            &mut ModifierArgs::Number(&mut shiny)
        ));
        assert_eq!(shiny, 8.0);

        let mut hidden = 64.0;
        assert!(apply(
            &mut PartyEffect::HiddenAbilityRateBooster,
            1,
            &mut ModifierArgs::Number(&mut hidden)
        ));
        assert_eq!(hidden, 16.0);
    }

    #[test]
    fn preserve_berry_never_unpreserves() {
        let mut preserved = true;
        assert!(apply(
            &mut PartyEffect::PreserveBerry,
            1,
            &mut ModifierArgs::Flag(&mut preserved)
        ));
        assert!(preserved);
    }

    #[test]
    fn preserve_berry_rolls_against_stacks() {
        // Seed 100 rolls a 6 out of 10 first.
        let mut preserved = false;
        assert!(apply(
            &mut PartyEffect::PreserveBerry,
            2,
            &mut ModifierArgs::Flag(&mut preserved)
        ));
        assert!(!preserved);
        assert!(apply(
            &mut PartyEffect::PreserveBerry,
            3,
            &mut ModifierArgs::Flag(&mut preserved)
        ));
        assert!(preserved);
    }

    #[test]
    fn presence_flags_apply_to_any_event() {
        assert!(apply(&mut PartyEffect::ExpShare, 1, &mut ModifierArgs::None));
        let mut value = 0.0;
        assert!(apply(
            &mut PartyEffect::Map,
            1,
            &mut ModifierArgs::Number(&mut value)
        ));
    }

    #[test]
    fn rejects_unexpected_shapes() {
        let mut value = 10.0;
        assert!(!apply(
            &mut PartyEffect::MoneyMultiplier,
            1,
            &mut ModifierArgs::Number(&mut value)
        ));
        assert_eq!(value, 10.0);
    }
}
