use std::sync::LazyLock;

use anyhow::Result;

use crate::{
    common::FastHashMap,
    config::BalanceConfig,
    error::{
        WrapOptionError,
        invalid_arguments_error,
    },
    modifier::{
        BattleCountdown,
        Behavior,
        EnemyEffect,
        HeldItemEffect,
        HeldItemModifier,
        LapsingEffect,
        LapsingModifier,
        ModifierKind,
        PartyEffect,
    },
    serialization::arg_reader::ArgReader,
};

/// Rebuilds the behavior of one persistent class from its ordered constructor arguments.
type Constructor = fn(&mut ArgReader, &BalanceConfig) -> Result<Behavior>;

fn countdown(args: &mut ArgReader) -> Result<BattleCountdown> {
    let max_battles = args.u32()?;
    let battles_left = args.u32()?;
    Ok(BattleCountdown::with_battles_left(max_battles, battles_left))
}

fn lapsing(effect: LapsingEffect, args: &mut ArgReader) -> Result<Behavior> {
    Ok(Behavior::Lapsing(LapsingModifier::new(
        effect,
        countdown(args)?,
    )))
}

fn held<F>(args: &mut ArgReader, effect: F) -> Result<Behavior>
where
    F: FnOnce(&mut ArgReader) -> Result<HeldItemEffect>,
{
    let owner = args.owner()?;
    let effect = effect(args)?;
    Ok(Behavior::HeldItem(HeldItemModifier::new(owner, effect)))
}

fn simple_held(args: &mut ArgReader, effect: HeldItemEffect) -> Result<Behavior> {
    held(args, |_| Ok(effect))
}

fn party(effect: PartyEffect) -> Result<Behavior> {
    Ok(Behavior::Party(effect))
}

fn enemy(effect: EnemyEffect) -> Result<Behavior> {
    Ok(Behavior::Enemy(effect))
}

/// Constructors keyed by the record's class name. Generated types share their generator's id, so
/// a type id alone does not name a class.
static CONSTRUCTORS: LazyLock<FastHashMap<ModifierKind, Constructor>> = LazyLock::new(|| {
    let mut constructors = FastHashMap::<ModifierKind, Constructor>::default();

    // Lapsing party modifiers.
    constructors.insert(ModifierKind::DoubleBattleChanceBooster, |args, _| {
        lapsing(LapsingEffect::DoubleBattleChanceBooster, args)
    });
    constructors.insert(ModifierKind::TempStatStageBooster, |args, _| {
        let stat = args.label()?;
        lapsing(LapsingEffect::TempStatStageBooster { stat }, args)
    });
    constructors.insert(ModifierKind::TempCritBooster, |args, _| {
        lapsing(LapsingEffect::TempCritBooster, args)
    });
    constructors.insert(ModifierKind::TempExtraModifier, |args, _| {
        lapsing(LapsingEffect::TempExtraModifier, args)
    });

    // Party-wide modifiers.
    constructors.insert(ModifierKind::Map, |_, _| party(PartyEffect::Map));
    constructors.insert(ModifierKind::MegaEvolutionAccess, |_, _| {
        party(PartyEffect::MegaEvolutionAccess)
    });
    constructors.insert(ModifierKind::GigantamaxAccess, |_, _| {
        party(PartyEffect::GigantamaxAccess)
    });
    constructors.insert(ModifierKind::TerastallizeAccess, |_, _| {
        party(PartyEffect::TerastallizeAccess)
    });
    constructors.insert(ModifierKind::LockModifierTiers, |_, _| {
        party(PartyEffect::LockModifierTiers)
    });
    constructors.insert(ModifierKind::MultipleParticipantExpBonus, |_, _| {
        party(PartyEffect::MultipleParticipantExpBonus)
    });
    constructors.insert(ModifierKind::ExpShare, |_, _| party(PartyEffect::ExpShare));
    constructors.insert(ModifierKind::ExpBalance, |_, _| party(PartyEffect::ExpBalance));
    constructors.insert(ModifierKind::IvScanner, |_, _| party(PartyEffect::IvScanner));
    constructors.insert(ModifierKind::LevelIncrementBooster, |_, _| {
        party(PartyEffect::LevelIncrementBooster)
    });
    constructors.insert(ModifierKind::PreserveBerry, |_, _| {
        party(PartyEffect::PreserveBerry)
    });
    constructors.insert(ModifierKind::HealingBooster, |args, _| {
        party(PartyEffect::HealingBooster {
            multiplier: args.f64()?,
        })
    });
    constructors.insert(ModifierKind::ExpBooster, |args, _| {
        party(PartyEffect::ExpBooster {
            boost_percent: args.f64()?,
        })
    });
    constructors.insert(ModifierKind::MoneyMultiplier, |_, _| {
        party(PartyEffect::MoneyMultiplier)
    });
    constructors.insert(ModifierKind::MoneyInterest, |_, _| {
        party(PartyEffect::MoneyInterest)
    });
    constructors.insert(ModifierKind::HiddenAbilityRateBooster, |_, _| {
        party(PartyEffect::HiddenAbilityRateBooster)
    });
    constructors.insert(ModifierKind::ShinyRateBooster, |_, _| {
        party(PartyEffect::ShinyRateBooster)
    });
    constructors.insert(ModifierKind::ExtraModifier, |_, _| {
        party(PartyEffect::ExtraModifier)
    });

    // Enemy modifiers.
    constructors.insert(ModifierKind::EnemyDamageBooster, |args, _| {
        enemy(EnemyEffect::DamageBooster {
            boost_percent: args.f64()?,
        })
    });
    constructors.insert(ModifierKind::EnemyDamageReducer, |args, _| {
        enemy(EnemyEffect::DamageReducer {
            reduction_percent: args.f64()?,
        })
    });
    constructors.insert(ModifierKind::EnemyTurnHeal, |args, _| {
        enemy(EnemyEffect::TurnHeal {
            heal_percent: args.f64()?,
        })
    });
    constructors.insert(ModifierKind::EnemyAttackStatusEffectChance, |args, _| {
        let effect = args.label()?;
        enemy(EnemyEffect::AttackStatusEffectChance {
            effect,
            chance_percent: args.f64()?,
        })
    });
    constructors.insert(ModifierKind::EnemyStatusEffectHealChance, |args, _| {
        enemy(EnemyEffect::StatusEffectHealChance {
            chance_percent: args.f64()?,
        })
    });
    constructors.insert(ModifierKind::EnemyEndureChance, |args, _| {
        enemy(EnemyEffect::EndureChance {
            chance_percent: args.f64()?,
        })
    });
    constructors.insert(ModifierKind::EnemyFusionChance, |args, _| {
        enemy(EnemyEffect::FusionChance {
            chance_percent: args.f64()?,
        })
    });

    // Held items, whose first argument is always the owner.
    constructors.insert(ModifierKind::Terastallize, |args, config| {
        held(args, |args| {
            let tera_type = args.label()?;
            let battles_left = args.u32()?;
            Ok(HeldItemEffect::Terastallize {
                tera_type,
                countdown: BattleCountdown::with_battles_left(
                    config.tera_battles.max(battles_left),
                    battles_left,
                ),
            })
        })
    });
    constructors.insert(ModifierKind::BaseStat, |args, _| {
        held(args, |args| {
            Ok(HeldItemEffect::BaseStat { stat: args.label()? })
        })
    });
    constructors.insert(ModifierKind::PokemonBaseStatTotal, |args, _| {
        held(args, |args| {
            Ok(HeldItemEffect::PokemonBaseStatTotal {
                stat_modifier: args.i64()?,
            })
        })
    });
    constructors.insert(ModifierKind::PokemonBaseStatFlat, |args, _| {
        held(args, |args| {
            let stat_modifier = args.i64()?;
            Ok(HeldItemEffect::PokemonBaseStatFlat {
                stat_modifier,
                stats: args.labels()?,
            })
        })
    });
    constructors.insert(ModifierKind::PokemonIncrementingStat, |args, _| {
        simple_held(args, HeldItemEffect::PokemonIncrementingStat)
    });
    constructors.insert(ModifierKind::StatBooster, |args, _| {
        held(args, |args| {
            let stats = args.labels()?;
            Ok(HeldItemEffect::StatBooster {
                stats,
                multiplier: args.f64()?,
            })
        })
    });
    constructors.insert(ModifierKind::EvolutionStatBooster, |args, _| {
        held(args, |args| {
            let stats = args.labels()?;
            Ok(HeldItemEffect::EvolutionStatBooster {
                stats,
                multiplier: args.f64()?,
            })
        })
    });
    constructors.insert(ModifierKind::SpeciesStatBooster, |args, _| {
        held(args, |args| {
            let stats = args.labels()?;
            let multiplier = args.f64()?;
            Ok(HeldItemEffect::SpeciesStatBooster {
                stats,
                multiplier,
                species: args.ids()?,
            })
        })
    });
    constructors.insert(ModifierKind::CritBooster, |args, _| {
        held(args, |args| {
            Ok(HeldItemEffect::CritBooster {
                stage_increment: args.i64()?,
            })
        })
    });
    constructors.insert(ModifierKind::SpeciesCritBooster, |args, _| {
        held(args, |args| {
            let stage_increment = args.i64()?;
            Ok(HeldItemEffect::SpeciesCritBooster {
                stage_increment,
                species: args.ids()?,
            })
        })
    });
    constructors.insert(ModifierKind::AttackTypeBooster, |args, _| {
        held(args, |args| {
            let move_type = args.label()?;
            Ok(HeldItemEffect::AttackTypeBooster {
                move_type,
                boost_percent: args.f64()?,
            })
        })
    });
    constructors.insert(ModifierKind::SurviveDamage, |args, _| {
        simple_held(args, HeldItemEffect::SurviveDamage)
    });
    constructors.insert(ModifierKind::BypassSpeedChance, |args, _| {
        simple_held(args, HeldItemEffect::BypassSpeedChance)
    });
    constructors.insert(ModifierKind::FlinchChance, |args, _| {
        simple_held(args, HeldItemEffect::FlinchChance)
    });
    constructors.insert(ModifierKind::TurnHeal, |args, _| {
        simple_held(args, HeldItemEffect::TurnHeal)
    });
    constructors.insert(ModifierKind::TurnStatusEffect, |args, _| {
        held(args, |args| {
            Ok(HeldItemEffect::TurnStatusEffect {
                effect: args.label()?,
            })
        })
    });
    constructors.insert(ModifierKind::HitHeal, |args, _| {
        simple_held(args, HeldItemEffect::HitHeal)
    });
    constructors.insert(ModifierKind::Berry, |args, _| {
        held(args, |args| {
            Ok(HeldItemEffect::Berry {
                berry_type: args.label()?,
                consumed: false,
            })
        })
    });
    constructors.insert(ModifierKind::PokemonInstantRevive, |args, _| {
        simple_held(args, HeldItemEffect::PokemonInstantRevive)
    });
    constructors.insert(ModifierKind::ResetNegativeStatStage, |args, _| {
        simple_held(args, HeldItemEffect::ResetNegativeStatStage)
    });
    constructors.insert(ModifierKind::FieldEffect, |args, _| {
        simple_held(args, HeldItemEffect::FieldEffect)
    });
    constructors.insert(ModifierKind::PokemonExpBooster, |args, _| {
        held(args, |args| {
            Ok(HeldItemEffect::PokemonExpBooster {
                boost_percent: args.f64()?,
            })
        })
    });
    constructors.insert(ModifierKind::PokemonFriendshipBooster, |args, _| {
        simple_held(args, HeldItemEffect::PokemonFriendshipBooster)
    });
    constructors.insert(ModifierKind::PokemonNatureWeight, |args, _| {
        simple_held(args, HeldItemEffect::PokemonNatureWeight)
    });
    constructors.insert(ModifierKind::PokemonMoveAccuracyBooster, |args, _| {
        held(args, |args| {
            Ok(HeldItemEffect::PokemonMoveAccuracyBooster {
                accuracy: args.i64()?,
            })
        })
    });
    constructors.insert(ModifierKind::PokemonMultiHit, |args, _| {
        simple_held(args, HeldItemEffect::PokemonMultiHit)
    });
    constructors.insert(ModifierKind::PokemonFormChangeItem, |args, _| {
        held(args, |args| {
            let form_change_item = args.id()?;
            Ok(HeldItemEffect::PokemonFormChangeItem {
                form_change_item,
                active: args.bool()?,
            })
        })
    });
    constructors.insert(ModifierKind::DamageMoneyReward, |args, _| {
        simple_held(args, HeldItemEffect::DamageMoneyReward)
    });
    constructors.insert(ModifierKind::SwitchEffectTransfer, |args, _| {
        simple_held(args, HeldItemEffect::SwitchEffectTransfer)
    });
    constructors.insert(ModifierKind::TurnHeldItemTransfer, |args, _| {
        simple_held(args, HeldItemEffect::TurnHeldItemTransfer)
    });
    constructors.insert(ModifierKind::ContactHeldItemTransferChance, |args, _| {
        held(args, |args| {
            Ok(HeldItemEffect::ContactHeldItemTransferChance {
                chance_percent: args.f64()?,
            })
        })
    });

    constructors
});

/// Reconstructs the behavior of a persistent modifier from its class name and arguments.
///
/// Every argument must be consumed.
pub fn construct(
    class_name: &str,
    args: &[serde_json::Value],
    config: &BalanceConfig,
) -> Result<Behavior> {
    let kind = serde_json::from_value::<ModifierKind>(serde_json::Value::from(class_name))
        .map_err(|_| invalid_arguments_error(class_name, "unknown class"))?;
    let constructor = CONSTRUCTORS
        .get(&kind)
        .wrap_not_found_error_with_format(format_args!("constructor for {kind}"))?;
    let mut reader = ArgReader::new(kind, args);
    let behavior = constructor(&mut reader, config)?;
    reader.finish()?;
    Ok(behavior)
}

#[cfg(test)]
mod constructors_test {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::{
        Value,
        json,
    };

    use crate::{
        common::Id,
        config::BalanceConfig,
        data::{
            BerryType,
            PokemonType,
            Stat,
            StatusEffect,
            TempBattleStat,
        },
        modifier::{
            BattleCountdown,
            Behavior,
            EnemyEffect,
            HeldItemEffect,
            HeldItemModifier,
            LapsingEffect,
            LapsingModifier,
            ModifierKind,
            ModifierOwner,
            PartyEffect,
        },
        serialization::constructors::{
            CONSTRUCTORS,
            construct,
        },
    };

    fn held(owner: u32, effect: HeldItemEffect) -> Behavior {
        Behavior::HeldItem(HeldItemModifier::new(ModifierOwner::Combatant(owner), effect))
    }

    fn args_of(behavior: &Behavior) -> Vec<Value> {
        match behavior {
            Behavior::Lapsing(lapsing) => lapsing.args(),
            Behavior::Party(effect) => effect.args(),
            Behavior::Enemy(effect) => effect.args(),
            Behavior::HeldItem(held_item) => held_item.args(),
        }
    }

    #[test]
    fn every_persistent_concrete_kind_has_constructor() {
        let kinds = [
            ModifierKind::DoubleBattleChanceBooster,
            ModifierKind::TempStatStageBooster,
            ModifierKind::TempCritBooster,
            ModifierKind::TempExtraModifier,
            ModifierKind::Map,
            ModifierKind::HealingBooster,
            ModifierKind::ExpBooster,
            ModifierKind::ExtraModifier,
            ModifierKind::EnemyDamageBooster,
            ModifierKind::EnemyFusionChance,
            ModifierKind::Terastallize,
            ModifierKind::StatBooster,
            ModifierKind::CritBooster,
            ModifierKind::Berry,
            ModifierKind::ContactHeldItemTransferChance,
        ];
        for kind in kinds {
            assert!(CONSTRUCTORS.contains_key(&kind), "{kind} has no constructor");
        }
        assert!(CONSTRUCTORS.keys().all(|kind| !kind.is_abstract()));
        assert!(
            CONSTRUCTORS
                .keys()
                .all(|kind| kind.is(ModifierKind::Persistent))
        );
    }

    #[test]
    fn rebuilds_behaviors_from_their_own_args() {
        let behaviors = [
            Behavior::Lapsing(LapsingModifier::new(
                LapsingEffect::TempStatStageBooster {
                    stat: TempBattleStat::Spe,
                },
                BattleCountdown::with_battles_left(5, 2),
            )),
            Behavior::Lapsing(LapsingModifier::new(
                LapsingEffect::DoubleBattleChanceBooster,
                BattleCountdown::new(25),
            )),
            Behavior::Party(PartyEffect::HealingBooster { multiplier: 1.1 }),
            Behavior::Party(PartyEffect::ShinyRateBooster),
            Behavior::Enemy(EnemyEffect::AttackStatusEffectChance {
                effect: StatusEffect::Burn,
                chance_percent: 5.0,
            }),
            held(
                3,
                HeldItemEffect::SpeciesStatBooster {
                    stats: vec![Stat::Atk, Stat::SpAtk],
                    multiplier: 2.0,
                    species: vec![Id::from("pikachu")],
                },
            ),
            held(
                4,
                HeldItemEffect::PokemonBaseStatFlat {
                    stat_modifier: 20,
                    stats: vec![Stat::HP, Stat::Def, Stat::SpDef],
                },
            ),
            held(
                5,
                HeldItemEffect::PokemonFormChangeItem {
                    form_change_item: Id::from("Blue Orb"),
                    active: true,
                },
            ),
            held(6, HeldItemEffect::TurnHeal),
        ];

        let config = BalanceConfig::default();
        for behavior in behaviors {
            let class_name = behavior.kind().class_name();
            let rebuilt = construct(&class_name, &args_of(&behavior), &config).unwrap();
            assert_eq!(rebuilt, behavior);
        }
    }

    #[test]
    fn resets_consumed_berries() {
        let config = BalanceConfig::default();
        let behavior = construct("BerryModifier", &[json!(2), json!("Lum")], &config).unwrap();
        assert_eq!(
            behavior,
            held(
                2,
                HeldItemEffect::Berry {
                    berry_type: BerryType::Lum,
                    consumed: false,
                }
            )
        );
    }

    #[test]
    fn terastallize_keeps_remaining_battles() {
        let config = BalanceConfig::default();
        let behavior = construct(
            "TerastallizeModifier",
            &[json!(1), json!("Fire"), json!(4)],
            &config,
        )
        .unwrap();
        assert_matches!(behavior, Behavior::HeldItem(held_item) => {
            assert_matches!(held_item.effect, HeldItemEffect::Terastallize { tera_type, countdown } => {
                assert_eq!(tera_type, PokemonType::Fire);
                assert_eq!(countdown.battles_left(), 4);
                assert_eq!(countdown.max_battles(), config.tera_battles);
            });
        });
    }

    #[test]
    fn rejects_unknown_and_abstract_classes() {
        let config = BalanceConfig::default();
        assert!(construct("WishingStarModifier", &[], &config).is_err());
        assert!(construct("PokemonHeldItemModifier", &[json!(1)], &config).is_err());
        assert!(construct("MoneyRewardModifier", &[], &config).is_err());
    }

    #[test]
    fn rejects_bad_argument_lists() {
        let config = BalanceConfig::default();
        assert!(construct("TurnHealModifier", &[], &config).is_err());
        assert!(construct("MapModifier", &[json!(1)], &config).is_err());
        assert!(construct("BaseStatModifier", &[json!(1), json!("luck")], &config).is_err());
    }
}
