use serde_json::Value;

use crate::{
    data::TempBattleStat,
    modifier::{
        ApplyContext,
        ModifierArgs,
        ModifierKind,
    },
};

/// A countdown of remaining battles.
///
/// The countdown is only ever decremented by [`BattleCountdown::lapse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleCountdown {
    max_battles: u32,
    battles_left: u32,
}

impl BattleCountdown {
    /// Creates a full countdown.
    pub fn new(max_battles: u32) -> Self {
        Self {
            max_battles,
            battles_left: max_battles,
        }
    }

    /// Creates a countdown that has already partially elapsed.
    pub fn with_battles_left(max_battles: u32, battles_left: u32) -> Self {
        Self {
            max_battles,
            battles_left: battles_left.min(max_battles),
        }
    }

    pub fn max_battles(&self) -> u32 {
        self.max_battles
    }

    pub fn battles_left(&self) -> u32 {
        self.battles_left
    }

    pub fn is_full(&self) -> bool {
        self.battles_left >= self.max_battles
    }

    /// Counts down one battle, returning whether any battles remain.
    pub fn lapse(&mut self) -> bool {
        self.battles_left = self.battles_left.saturating_sub(1);
        self.battles_left > 0
    }

    /// Restores the countdown to its maximum.
    pub fn reset(&mut self) {
        self.battles_left = self.max_battles;
    }

    /// Adds battles to the countdown, raising the maximum along with it.
    pub fn extend(&mut self, battles: u32) {
        self.battles_left += battles;
        self.max_battles = self.max_battles.max(self.battles_left);
    }
}

/// How a matching lapsing modifier merges into an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapsingMergePolicy {
    /// Refresh the existing countdown to its maximum.
    Reset,
    /// Add the candidate's duration to the existing countdown.
    Extend,
}

/// The effect of a party-wide modifier that lasts a number of battles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapsingEffect {
    DoubleBattleChanceBooster,
    TempStatStageBooster { stat: TempBattleStat },
    TempCritBooster,
    TempExtraModifier,
}

impl LapsingEffect {
    pub fn kind(&self) -> ModifierKind {
        match self {
            Self::DoubleBattleChanceBooster => ModifierKind::DoubleBattleChanceBooster,
            Self::TempStatStageBooster { .. } => ModifierKind::TempStatStageBooster,
            Self::TempCritBooster => ModifierKind::TempCritBooster,
            Self::TempExtraModifier => ModifierKind::TempExtraModifier,
        }
    }

    pub fn merge_policy(&self) -> LapsingMergePolicy {
        match self {
            Self::TempExtraModifier => LapsingMergePolicy::Extend,
            _ => LapsingMergePolicy::Reset,
        }
    }
}

/// A party-wide modifier that lasts a number of battles.
#[derive(Debug, Clone, PartialEq)]
pub struct LapsingModifier {
    pub effect: LapsingEffect,
    pub countdown: BattleCountdown,
}

impl LapsingModifier {
    pub fn new(effect: LapsingEffect, countdown: BattleCountdown) -> Self {
        Self { effect, countdown }
    }

    pub fn default_max_stack_count(&self) -> u32 {
        2
    }

    /// Lure durations are part of identity; the remaining countdown is not.
    pub fn matches(&self, other: &Self) -> bool {
        self.effect == other.effect
            && (self.effect != LapsingEffect::DoubleBattleChanceBooster
                || self.countdown.max_battles() == other.countdown.max_battles())
    }

    /// Merges a matching candidate according to the effect's merge policy.
    pub fn merge(&mut self, candidate: &Self) -> bool {
        match self.effect.merge_policy() {
            LapsingMergePolicy::Reset => {
                if self.countdown.is_full() {
                    return false;
                }
                self.countdown.reset();
                true
            }
            LapsingMergePolicy::Extend => {
                self.countdown.extend(candidate.countdown.max_battles());
                true
            }
        }
    }

    pub fn should_apply(&self, args: &ModifierArgs) -> bool {
        match (self.effect, args) {
            (LapsingEffect::DoubleBattleChanceBooster, ModifierArgs::Number(_)) => true,
            (
                LapsingEffect::TempStatStageBooster { stat },
                ModifierArgs::TempStatStage { stat: event_stat, .. },
            ) => stat == *event_stat,
            (LapsingEffect::TempCritBooster, ModifierArgs::Integer(_)) => true,
            (LapsingEffect::TempExtraModifier, ModifierArgs::Integer(_)) => true,
            _ => false,
        }
    }

    pub fn apply(&mut self, args: &mut ModifierArgs, _: &mut ApplyContext) -> bool {
        match (self.effect, args) {
            (LapsingEffect::DoubleBattleChanceBooster, ModifierArgs::Number(chance)) => {
                **chance = (**chance / 4.0).ceil();
                true
            }
            (LapsingEffect::TempStatStageBooster { stat }, ModifierArgs::TempStatStage {
                stat: event_stat,
                multiplier,
            }) if stat == *event_stat => {
                **multiplier += match stat {
                    TempBattleStat::Accuracy => 1.0,
                    _ => 0.3,
                };
                true
            }
            (LapsingEffect::TempCritBooster, ModifierArgs::Integer(stage)) => {
                **stage += 1;
                true
            }
            (LapsingEffect::TempExtraModifier, ModifierArgs::Integer(count)) => {
                **count += 1;
                true
            }
            _ => false,
        }
    }

    pub fn lapse(&mut self) -> bool {
        self.countdown.lapse()
    }

    /// Constructor arguments: the effect's own arguments, then `[maxBattles, battleCount]`.
    pub fn args(&self) -> Vec<Value> {
        let mut args = Vec::new();
        if let LapsingEffect::TempStatStageBooster { stat } = self.effect {
            args.push(Value::from(stat.to_string()));
        }
        args.push(Value::from(self.countdown.max_battles()));
        args.push(Value::from(self.countdown.battles_left()));
        args
    }
}
