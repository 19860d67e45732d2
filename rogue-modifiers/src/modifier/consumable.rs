use std::sync::Arc;

use serde_json::Value;

use crate::{
    combatant::{
        Combatant,
        CombatantId,
    },
    common::Id,
    data::{
        Nature,
        PokeballType,
        VoucherType,
    },
    modifier::{
        ApplyContext,
        ModifierArgs,
        ModifierKind,
        ModifierOwner,
    },
    modifier_type::ModifierType,
};

const LEVEL_UP_FRIENDSHIP: i32 = 5;

/// The effect of a single-use modifier.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsumableEffect {
    AddPokeball {
        pokeball: PokeballType,
        count: u32,
    },
    AddVoucher {
        voucher: VoucherType,
        count: u32,
    },
    MoneyReward {
        multiplier: f64,
    },
    PokemonHpRestore {
        target: ModifierOwner,
        restore_points: u32,
        restore_percent: f64,
        heal_status: bool,
        fainted: bool,
    },
    PokemonStatusHeal {
        target: ModifierOwner,
    },
    /// Negative points restore the move fully.
    PokemonPpRestore {
        target: ModifierOwner,
        move_index: usize,
        restore_points: i64,
    },
    PokemonAllMovePpRestore {
        target: ModifierOwner,
        restore_points: i64,
    },
    PokemonPpUp {
        target: ModifierOwner,
        move_index: usize,
        up_points: u32,
    },
    PokemonNatureChange {
        target: ModifierOwner,
        nature: Nature,
    },
    PokemonLevelIncrement {
        target: ModifierOwner,
    },
    Tm {
        target: ModifierOwner,
        move_id: Id,
    },
    RememberMove {
        target: ModifierOwner,
        level_move_index: usize,
    },
    EvolutionItem {
        target: ModifierOwner,
        item: Id,
    },
    FusePokemon {
        target: ModifierOwner,
        other: CombatantId,
    },
}

impl ConsumableEffect {
    pub fn kind(&self) -> ModifierKind {
        match self {
            Self::AddPokeball { .. } => ModifierKind::AddPokeball,
            Self::AddVoucher { .. } => ModifierKind::AddVoucher,
            Self::MoneyReward { .. } => ModifierKind::MoneyReward,
            Self::PokemonHpRestore { .. } => ModifierKind::PokemonHpRestore,
            Self::PokemonStatusHeal { .. } => ModifierKind::PokemonStatusHeal,
            Self::PokemonPpRestore { .. } => ModifierKind::PokemonPpRestore,
            Self::PokemonAllMovePpRestore { .. } => ModifierKind::PokemonAllMovePpRestore,
            Self::PokemonPpUp { .. } => ModifierKind::PokemonPpUp,
            Self::PokemonNatureChange { .. } => ModifierKind::PokemonNatureChange,
            Self::PokemonLevelIncrement { .. } => ModifierKind::PokemonLevelIncrement,
            Self::Tm { .. } => ModifierKind::Tm,
            Self::RememberMove { .. } => ModifierKind::RememberMove,
            Self::EvolutionItem { .. } => ModifierKind::EvolutionItem,
            Self::FusePokemon { .. } => ModifierKind::FusePokemon,
        }
    }

    /// The combatant a pokemon consumable is used on.
    pub fn target(&self) -> Option<ModifierOwner> {
        match self {
            Self::AddPokeball { .. } | Self::AddVoucher { .. } | Self::MoneyReward { .. } => None,
            Self::PokemonHpRestore { target, .. }
            | Self::PokemonStatusHeal { target }
            | Self::PokemonPpRestore { target, .. }
            | Self::PokemonAllMovePpRestore { target, .. }
            | Self::PokemonPpUp { target, .. }
            | Self::PokemonNatureChange { target, .. }
            | Self::PokemonLevelIncrement { target }
            | Self::Tm { target, .. }
            | Self::RememberMove { target, .. }
            | Self::EvolutionItem { target, .. }
            | Self::FusePokemon { target, .. } => Some(*target),
        }
    }

    fn should_apply_to(&self, combatant: &dyn Combatant) -> bool {
        match self {
            Self::PokemonHpRestore { fainted, .. } => *fainted == combatant.is_fainted(),
            Self::PokemonPpRestore { move_index, .. } | Self::PokemonPpUp { move_index, .. } => {
                *move_index < combatant.move_count()
            }
            _ => true,
        }
    }

    pub fn args(&self) -> Vec<Value> {
        match self {
            Self::AddPokeball { pokeball, count } => {
                vec![Value::from(pokeball.to_string()), Value::from(*count)]
            }
            Self::AddVoucher { voucher, count } => {
                vec![Value::from(voucher.to_string()), Value::from(*count)]
            }
            Self::MoneyReward { multiplier } => vec![Value::from(*multiplier)],
            Self::PokemonHpRestore {
                target,
                restore_points,
                restore_percent,
                heal_status,
                fainted,
            } => vec![
                Value::from(target.to_arg()),
                Value::from(*restore_points),
                Value::from(*restore_percent),
                Value::from(*heal_status),
                Value::from(*fainted),
            ],
            Self::PokemonStatusHeal { target } | Self::PokemonLevelIncrement { target } => {
                vec![Value::from(target.to_arg())]
            }
            Self::PokemonPpRestore {
                target,
                move_index,
                restore_points,
            } => vec![
                Value::from(target.to_arg()),
                Value::from(*move_index),
                Value::from(*restore_points),
            ],
            Self::PokemonAllMovePpRestore {
                target,
                restore_points,
            } => vec![Value::from(target.to_arg()), Value::from(*restore_points)],
            Self::PokemonPpUp {
                target,
                move_index,
                up_points,
            } => vec![
                Value::from(target.to_arg()),
                Value::from(*move_index),
                Value::from(*up_points),
            ],
            Self::PokemonNatureChange { target, nature } => {
                vec![Value::from(target.to_arg()), Value::from(nature.to_string())]
            }
            Self::Tm { target, move_id } => {
                vec![Value::from(target.to_arg()), Value::from(move_id.to_string())]
            }
            Self::RememberMove {
                target,
                level_move_index,
            } => vec![Value::from(target.to_arg()), Value::from(*level_move_index)],
            Self::EvolutionItem { target, item } => {
                vec![Value::from(target.to_arg()), Value::from(item.to_string())]
            }
            Self::FusePokemon { target, other } => {
                vec![Value::from(target.to_arg()), Value::from(*other)]
            }
        }
    }
}

fn restore_pp(combatant: &mut dyn Combatant, move_index: usize, restore_points: i64) {
    let pp_used = combatant.pp_used(move_index);
    let pp_used = match u32::try_from(restore_points) {
        Ok(points) => pp_used.saturating_sub(points),
        Err(_) => 0,
    };
    combatant.set_pp_used(move_index, pp_used);
}

/// A modifier that is applied once when obtained and never stored.
#[derive(Debug, Clone)]
pub struct ConsumableModifier {
    modifier_type: Arc<ModifierType>,
    effect: ConsumableEffect,
}

impl ConsumableModifier {
    pub fn new(modifier_type: Arc<ModifierType>, effect: ConsumableEffect) -> Self {
        Self {
            modifier_type,
            effect,
        }
    }

    pub fn modifier_type(&self) -> &Arc<ModifierType> {
        &self.modifier_type
    }

    pub fn effect(&self) -> &ConsumableEffect {
        &self.effect
    }

    pub fn kind(&self) -> ModifierKind {
        self.effect.kind()
    }

    pub fn is(&self, kind: ModifierKind) -> bool {
        self.kind().is(kind)
    }

    pub fn args(&self) -> Vec<Value> {
        self.effect.args()
    }

    /// Pokemon consumables only apply to a player combatant they target.
    pub fn should_apply(&self, args: &ModifierArgs) -> bool {
        let ModifierArgs::Consumable { combatant, .. } = args else {
            return false;
        };
        match (self.effect.target(), combatant) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(target), Some(combatant)) => {
                combatant.is_player()
                    && target.accepts(Some(combatant.id()))
                    && self.effect.should_apply_to(&**combatant)
            }
        }
    }

    pub fn apply(&mut self, args: &mut ModifierArgs, ctx: &mut ApplyContext) -> bool {
        let ModifierArgs::Consumable {
            combatant,
            session,
            boosters,
        } = args
        else {
            return false;
        };

        match (&self.effect, combatant.as_deref_mut()) {
            (ConsumableEffect::AddPokeball { pokeball, count }, _) => {
                let total = session.pokeball_count(*pokeball) + count;
                session.set_pokeball_count(*pokeball, total.min(ctx.config.max_pokeballs_per_type));
                true
            }
            (ConsumableEffect::AddVoucher { voucher, count }, _) => {
                session.add_vouchers(*voucher, *count);
                true
            }
            (ConsumableEffect::MoneyReward { multiplier }, _) => {
                let mut money = session.wave_money_amount(*multiplier) as i64;
                boosters.apply_all(
                    ModifierKind::MoneyMultiplier,
                    &mut ModifierArgs::Integer(&mut money),
                    ctx,
                );
                session.add_money(money.max(0) as u64);
                true
            }
            (
                ConsumableEffect::PokemonHpRestore {
                    restore_points,
                    restore_percent,
                    heal_status,
                    fainted,
                    ..
                },
                Some(combatant),
            ) => {
                let mut multiplier = 1.0;
                boosters.apply_all(
                    ModifierKind::HealingBooster,
                    &mut ModifierArgs::Number(&mut multiplier),
                    ctx,
                );
                let points = if *fainted {
                    *restore_points as f64
                } else {
                    (*restore_points as f64 * multiplier).floor()
                };
                let percent_points =
                    (*restore_percent / 100.0 * combatant.max_hp() as f64).floor();
                combatant.heal((points.max(percent_points).ceil() as u32).max(1));
                if *heal_status {
                    combatant.reset_status();
                }
                true
            }
            (ConsumableEffect::PokemonStatusHeal { .. }, Some(combatant)) => {
                combatant.reset_status();
                true
            }
            (
                ConsumableEffect::PokemonPpRestore {
                    move_index,
                    restore_points,
                    ..
                },
                Some(combatant),
            ) => {
                restore_pp(combatant, *move_index, *restore_points);
                true
            }
            (ConsumableEffect::PokemonAllMovePpRestore { restore_points, .. }, Some(combatant)) => {
                for move_index in 0..combatant.move_count() {
                    restore_pp(combatant, move_index, *restore_points);
                }
                true
            }
            (
                ConsumableEffect::PokemonPpUp {
                    move_index,
                    up_points,
                    ..
                },
                Some(combatant),
            ) => {
                let pp_ups = (combatant.pp_ups(*move_index) + up_points).min(ctx.config.max_pp_ups);
                combatant.set_pp_ups(*move_index, pp_ups);
                true
            }
            (ConsumableEffect::PokemonNatureChange { nature, .. }, Some(combatant)) => {
                combatant.set_nature(*nature);
                true
            }
            (ConsumableEffect::PokemonLevelIncrement { .. }, Some(combatant)) => {
                let mut levels = 1;
                boosters.apply_all(
                    ModifierKind::LevelIncrementBooster,
                    &mut ModifierArgs::Integer(&mut levels),
                    ctx,
                );
                let level = combatant.level() + levels.max(0) as u32;
                combatant.set_level(level);
                combatant.add_friendship(LEVEL_UP_FRIENDSHIP);
                true
            }
            (ConsumableEffect::Tm { move_id, .. }, Some(combatant)) => combatant.learn_move(move_id),
            (
                ConsumableEffect::RememberMove {
                    level_move_index, ..
                },
                Some(combatant),
            ) => combatant.remember_level_move(*level_move_index),
            (ConsumableEffect::EvolutionItem { item, .. }, Some(combatant)) => {
                combatant.try_evolve(item)
            }
            (ConsumableEffect::FusePokemon { other, .. }, Some(combatant)) => {
                combatant.fuse(*other)
            }
            _ => false,
        }
    }
}
