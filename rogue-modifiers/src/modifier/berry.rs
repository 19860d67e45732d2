use rogue_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    combatant::Combatant,
    data::{
        BattleStat,
        BerryType,
    },
};

const MAX_STAT_STAGE: i8 = 6;
const LEPPA_PP_RESTORED: u32 = 10;

const STARF_STATS: [BattleStat; 5] = [
    BattleStat::Atk,
    BattleStat::Def,
    BattleStat::SpAtk,
    BattleStat::SpDef,
    BattleStat::Spe,
];

fn hp_ratio(combatant: &dyn Combatant) -> f64 {
    match combatant.max_hp() {
        0 => 0.0,
        max_hp => combatant.hp() as f64 / max_hp as f64,
    }
}

fn pinch_stat(berry: BerryType) -> Option<BattleStat> {
    match berry {
        BerryType::Liechi => Some(BattleStat::Atk),
        BerryType::Ganlon => Some(BattleStat::Def),
        BerryType::Petaya => Some(BattleStat::SpAtk),
        BerryType::Apicot => Some(BattleStat::SpDef),
        BerryType::Salac => Some(BattleStat::Spe),
        _ => None,
    }
}

fn depleted_move(combatant: &dyn Combatant) -> Option<usize> {
    (0..combatant.move_count())
        .find(|index| combatant.pp_used(*index) >= combatant.max_pp(*index))
}

/// The maximum number of a berry a combatant can hold.
pub fn max_stack_count(berry: BerryType) -> u32 {
    match berry {
        BerryType::Sitrus | BerryType::Lum | BerryType::Enigma | BerryType::Leppa => 2,
        _ => 3,
    }
}

/// Does the combatant's current state trigger the berry?
pub fn should_eat(berry: BerryType, combatant: &dyn Combatant) -> bool {
    if combatant.is_fainted() {
        return false;
    }
    match berry {
        BerryType::Sitrus => hp_ratio(combatant) < 0.5,
        BerryType::Lum => combatant.status().is_some(),
        BerryType::Enigma => combatant.took_super_effective_hit(),
        BerryType::Liechi
        | BerryType::Ganlon
        | BerryType::Petaya
        | BerryType::Apicot
        | BerryType::Salac => {
            hp_ratio(combatant) < 0.25
                && pinch_stat(berry)
                    .is_some_and(|stat| combatant.stat_stage(stat) < MAX_STAT_STAGE)
        }
        BerryType::Lansat => hp_ratio(combatant) < 0.25,
        BerryType::Starf => {
            hp_ratio(combatant) < 0.25
                && STARF_STATS
                    .iter()
                    .any(|stat| combatant.stat_stage(*stat) < MAX_STAT_STAGE)
        }
        BerryType::Leppa => depleted_move(combatant).is_some(),
    }
}

/// Applies the berry's effect to the combatant.
pub fn eat(
    berry: BerryType,
    combatant: &mut dyn Combatant,
    prng: &mut dyn PseudoRandomNumberGenerator,
) {
    match berry {
        BerryType::Sitrus | BerryType::Enigma => {
            combatant.heal((combatant.max_hp() / 4).max(1));
        }
        BerryType::Lum => combatant.reset_status(),
        BerryType::Liechi
        | BerryType::Ganlon
        | BerryType::Petaya
        | BerryType::Apicot
        | BerryType::Salac => {
            if let Some(stat) = pinch_stat(berry) {
                let stage = combatant.stat_stage(stat);
                combatant.set_stat_stage(stat, (stage + 1).min(MAX_STAT_STAGE));
            }
        }
        BerryType::Lansat => {
            combatant.boost_crit_stage();
        }
        BerryType::Starf => {
            if let Some(stat) = rand_util::sample_slice(prng, &STARF_STATS) {
                let stage = combatant.stat_stage(*stat);
                combatant.set_stat_stage(*stat, (stage + 2).min(MAX_STAT_STAGE));
            }
        }
        BerryType::Leppa => {
            if let Some(index) = depleted_move(combatant) {
                let pp_used = combatant.pp_used(index);
                combatant.set_pp_used(index, pp_used.saturating_sub(LEPPA_PP_RESTORED));
            }
        }
    }
}
