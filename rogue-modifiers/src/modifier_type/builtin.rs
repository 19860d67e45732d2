use std::sync::Arc;

use anyhow::Result;
use rogue_prng::rand_util;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    common::Id,
    config::BalanceConfig,
    data::{
        BerryType,
        ModifierTier,
        Nature,
        PokeballType,
        PokemonType,
        Stat,
        StatusEffect,
        TempBattleStat,
        VoucherType,
    },
    error::{
        WrapOptionError,
        WrapResultError,
    },
    modifier::{
        BattleCountdown,
        Behavior,
        ConsumableEffect,
        ConsumableModifier,
        EnemyEffect,
        HeldItemEffect,
        HeldItemModifier,
        LapsingEffect,
        LapsingModifier,
        Modifier,
        PartyEffect,
        PersistentModifier,
    },
    modifier_type::{
        GeneratorContext,
        ModifierTarget,
        ModifierType,
        ModifierTypeGenerator,
        ModifierTypeRegistry,
    },
};

const TEMP_STAT_STAGE_BOOSTER_BATTLES: u32 = 5;
const ATTACK_TYPE_BOOST_PERCENT: f64 = 20.0;
const MAX_ATTACK_TYPE_WEIGHT: u32 = 3;

const TEMP_STAT_STAGE_BOOSTERS: [(TempBattleStat, &str, &str); 6] = [
    (TempBattleStat::Atk, "X_ATTACK", "X Attack"),
    (TempBattleStat::Def, "X_DEFENSE", "X Defense"),
    (TempBattleStat::SpAtk, "X_SP_ATK", "X Sp. Atk"),
    (TempBattleStat::SpDef, "X_SP_DEF", "X Sp. Def"),
    (TempBattleStat::Spe, "X_SPEED", "X Speed"),
    (TempBattleStat::Accuracy, "X_ACCURACY", "X Accuracy"),
];

const BASE_STAT_BOOSTERS: [(Stat, &str, &str); 6] = [
    (Stat::HP, "HP_UP", "HP Up"),
    (Stat::Atk, "PROTEIN", "Protein"),
    (Stat::Def, "IRON", "Iron"),
    (Stat::SpAtk, "CALCIUM", "Calcium"),
    (Stat::SpDef, "ZINC", "Zinc"),
    (Stat::Spe, "CARBOS", "Carbos"),
];

const ATTACK_TYPE_BOOSTERS: [(PokemonType, &str, &str); 18] = [
    (PokemonType::Normal, "SILK_SCARF", "Silk Scarf"),
    (PokemonType::Fighting, "BLACK_BELT", "Black Belt"),
    (PokemonType::Flying, "SHARP_BEAK", "Sharp Beak"),
    (PokemonType::Poison, "POISON_BARB", "Poison Barb"),
    (PokemonType::Ground, "SOFT_SAND", "Soft Sand"),
    (PokemonType::Rock, "HARD_STONE", "Hard Stone"),
    (PokemonType::Bug, "SILVER_POWDER", "Silver Powder"),
    (PokemonType::Ghost, "SPELL_TAG", "Spell Tag"),
    (PokemonType::Steel, "METAL_COAT", "Metal Coat"),
    (PokemonType::Fire, "CHARCOAL", "Charcoal"),
    (PokemonType::Water, "MYSTIC_WATER", "Mystic Water"),
    (PokemonType::Grass, "MIRACLE_SEED", "Miracle Seed"),
    (PokemonType::Electric, "MAGNET", "Magnet"),
    (PokemonType::Psychic, "TWISTED_SPOON", "Twisted Spoon"),
    (PokemonType::Ice, "NEVER_MELT_ICE", "Never-Melt Ice"),
    (PokemonType::Dragon, "DRAGON_FANG", "Dragon Fang"),
    (PokemonType::Dark, "BLACK_GLASSES", "Black Glasses"),
    (PokemonType::Fairy, "FAIRY_FEATHER", "Fairy Feather"),
];

struct SpeciesStatBooster {
    id: &'static str,
    name: &'static str,
    stats: &'static [Stat],
    multiplier: f64,
    species: &'static [&'static str],
}

static SPECIES_STAT_BOOSTERS: [SpeciesStatBooster; 4] = [
    SpeciesStatBooster {
        id: "LIGHT_BALL",
        name: "Light Ball",
        stats: &[Stat::Atk, Stat::SpAtk],
        multiplier: 2.0,
        species: &["pikachu"],
    },
    SpeciesStatBooster {
        id: "THICK_CLUB",
        name: "Thick Club",
        stats: &[Stat::Atk],
        multiplier: 2.0,
        species: &["cubone", "marowak", "alolamarowak"],
    },
    SpeciesStatBooster {
        id: "METAL_POWDER",
        name: "Metal Powder",
        stats: &[Stat::Def],
        multiplier: 2.0,
        species: &["ditto"],
    },
    SpeciesStatBooster {
        id: "QUICK_POWDER",
        name: "Quick Powder",
        stats: &[Stat::Spe],
        multiplier: 2.0,
        species: &["ditto"],
    },
];

fn persistent<F>(
    behavior: F,
) -> impl Fn(&Arc<ModifierType>, &ModifierTarget) -> Result<Modifier> + Clone + Send + Sync + 'static
where
    F: Fn(&ModifierTarget) -> Result<Behavior> + Clone + Send + Sync + 'static,
{
    move |modifier_type: &Arc<ModifierType>, target: &ModifierTarget| -> Result<Modifier> {
        Ok(PersistentModifier::new(modifier_type.clone(), behavior(target)?, 1).into())
    }
}

fn party(
    effect: PartyEffect,
) -> impl Fn(&Arc<ModifierType>, &ModifierTarget) -> Result<Modifier> + Clone + Send + Sync + 'static
{
    persistent(move |_: &ModifierTarget| Ok(Behavior::Party(effect.clone())))
}

fn enemy(
    effect: EnemyEffect,
) -> impl Fn(&Arc<ModifierType>, &ModifierTarget) -> Result<Modifier> + Clone + Send + Sync + 'static
{
    persistent(move |_: &ModifierTarget| Ok(Behavior::Enemy(effect.clone())))
}

fn lapsing(
    effect: LapsingEffect,
    battles: u32,
) -> impl Fn(&Arc<ModifierType>, &ModifierTarget) -> Result<Modifier> + Clone + Send + Sync + 'static
{
    persistent(move |_: &ModifierTarget| {
        Ok(Behavior::Lapsing(LapsingModifier::new(
            effect,
            BattleCountdown::new(battles),
        )))
    })
}

/// Held items created for the party belong to any combatant.
fn held(
    effect: HeldItemEffect,
) -> impl Fn(&Arc<ModifierType>, &ModifierTarget) -> Result<Modifier> + Clone + Send + Sync + 'static
{
    persistent(move |target: &ModifierTarget| {
        Ok(Behavior::HeldItem(HeldItemModifier::new(
            target.owner(),
            effect.clone(),
        )))
    })
}

fn consumable<F>(
    effect: F,
) -> impl Fn(&Arc<ModifierType>, &ModifierTarget) -> Result<Modifier> + Clone + Send + Sync + 'static
where
    F: Fn(&ModifierTarget) -> Result<ConsumableEffect> + Clone + Send + Sync + 'static,
{
    move |modifier_type: &Arc<ModifierType>, target: &ModifierTarget| -> Result<Modifier> {
        Ok(ConsumableModifier::new(modifier_type.clone(), effect(target)?).into())
    }
}

fn register<F>(
    registry: &mut ModifierTypeRegistry,
    id: &'static str,
    name: &'static str,
    tier: ModifierTier,
    factory: F,
) where
    F: Fn(&Arc<ModifierType>, &ModifierTarget) -> Result<Modifier> + Clone + Send + Sync + 'static,
{
    registry.register_type(id, move || {
        ModifierType::new(id, name)
            .with_tier(tier)
            .with_factory(factory.clone())
    });
}

fn pregen_arg<T>(generator: &str, pregen_args: &[Value]) -> Result<T>
where
    T: DeserializeOwned,
{
    let value = pregen_args
        .first()
        .wrap_expectation(format!("{generator} requires a pregeneration argument"))?;
    serde_json::from_value(value.clone())
        .wrap_error_with_format(format_args!("invalid pregeneration argument for {generator}"))
}

fn label<T: ToString>(value: T) -> Value {
    Value::from(value.to_string())
}

fn upper_snake(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

fn temp_stat_stage_booster_type(stat: TempBattleStat) -> ModifierType {
    let (_, id, name) = TEMP_STAT_STAGE_BOOSTERS
        .iter()
        .find(|(entry, _, _)| *entry == stat)
        .copied()
        .unwrap_or((stat, "X_ITEM", "X Item"));
    ModifierType::new(id, name)
        .with_pregen_args(vec![label(stat)])
        .with_factory(lapsing(
            LapsingEffect::TempStatStageBooster { stat },
            TEMP_STAT_STAGE_BOOSTER_BATTLES,
        ))
}

fn base_stat_booster_type(stat: Stat) -> ModifierType {
    let (_, id, name) = BASE_STAT_BOOSTERS
        .iter()
        .find(|(entry, _, _)| *entry == stat)
        .copied()
        .unwrap_or((stat, "VITAMIN", "Vitamin"));
    ModifierType::new(id, name)
        .with_pregen_args(vec![label(stat)])
        .with_factory(held(HeldItemEffect::BaseStat { stat }))
}

fn attack_type_booster_type(move_type: PokemonType) -> ModifierType {
    let (id, name) = ATTACK_TYPE_BOOSTERS
        .iter()
        .find(|(entry, _, _)| *entry == move_type)
        .map(|(_, id, name)| (id.to_string(), name.to_string()))
        .unwrap_or_else(|| {
            (
                format!("{}_BOOSTER", upper_snake(&move_type.to_string())),
                format!("{move_type} Booster"),
            )
        });
    ModifierType::new(id, name)
        .with_pregen_args(vec![label(move_type)])
        .with_factory(held(HeldItemEffect::AttackTypeBooster {
            move_type,
            boost_percent: ATTACK_TYPE_BOOST_PERCENT,
        }))
}

fn berry_type(berry_type: BerryType) -> ModifierType {
    let name = format!("{berry_type} Berry");
    ModifierType::new(upper_snake(&name), name)
        .with_pregen_args(vec![label(berry_type)])
        .with_factory(held(HeldItemEffect::Berry {
            berry_type,
            consumed: false,
        }))
}

fn mint_type(nature: Nature) -> ModifierType {
    let name = format!("{nature} Mint");
    ModifierType::new(upper_snake(&name), name)
        .with_icon("mint")
        .with_pregen_args(vec![label(nature)])
        .with_factory(consumable(move |target: &ModifierTarget| {
            Ok(ConsumableEffect::PokemonNatureChange {
                target: target.owner(),
                nature,
            })
        }))
}

fn tera_shard_type(tera_type: PokemonType, battles: u32) -> ModifierType {
    let name = format!("{tera_type} Tera Shard");
    ModifierType::new(upper_snake(&name), name)
        .with_icon("tera_shard")
        .with_pregen_args(vec![label(tera_type)])
        .with_factory(held(HeldItemEffect::Terastallize {
            tera_type,
            countdown: BattleCountdown::new(battles),
        }))
}

fn species_stat_booster_type(item: &SpeciesStatBooster) -> ModifierType {
    ModifierType::new(item.id, item.name)
        .with_pregen_args(vec![Value::from(item.id)])
        .with_factory(held(HeldItemEffect::SpeciesStatBooster {
            stats: item.stats.to_vec(),
            multiplier: item.multiplier,
            species: item.species.iter().map(|species| Id::from(*species)).collect(),
        }))
}

/// Weights each attacking move type in the party by occurrence, up to a ceiling per type.
///
/// Types keep the order in which they were first seen.
fn attack_type_weights(move_types: impl IntoIterator<Item = PokemonType>) -> Vec<(PokemonType, u32)> {
    let mut weights = Vec::<(PokemonType, u32)>::new();
    for move_type in move_types {
        match weights.iter_mut().find(|(entry, _)| *entry == move_type) {
            Some((_, weight)) => *weight = (*weight + 1).min(MAX_ATTACK_TYPE_WEIGHT),
            None => weights.push((move_type, 1)),
        }
    }
    weights
}

fn pick_attack_type(ctx: &mut GeneratorContext) -> Option<PokemonType> {
    let weights = attack_type_weights(
        ctx.party()
            .into_iter()
            .flat_map(|combatant| combatant.move_types()),
    );
    let total = weights.iter().map(|(_, weight)| *weight as u64).sum::<u64>();
    if total == 0 {
        return None;
    }
    let mut roll = rand_util::rand_int(ctx.prng, total);
    for (move_type, weight) in weights {
        if roll < weight as u64 {
            return Some(move_type);
        }
        roll -= weight as u64;
    }
    None
}

/// Sitrus, Lum and Leppa berries are each twice as likely as any other berry.
fn pick_berry(ctx: &mut GeneratorContext) -> BerryType {
    match rand_util::rand_int(ctx.prng, 12) {
        0 | 1 => BerryType::Sitrus,
        2 | 3 => BerryType::Lum,
        4 | 5 => BerryType::Leppa,
        _ => {
            let index = 2 + rand_util::rand_int(ctx.prng, BerryType::ALL.len() as u64 - 3) as usize;
            BerryType::ALL[index]
        }
    }
}

fn pick_tera_type(ctx: &mut GeneratorContext) -> PokemonType {
    if rand_util::rand_int(ctx.prng, 3) == 0 {
        let party_types = ctx
            .party()
            .into_iter()
            .flat_map(|combatant| combatant.types())
            .collect::<Vec<_>>();
        if let Some(tera_type) = rand_util::sample_slice(ctx.prng, &party_types[..]) {
            return *tera_type;
        }
    }
    if rand_util::rand_int(ctx.prng, 64) == 0 {
        return PokemonType::Stellar;
    }
    rand_util::sample_slice(ctx.prng, &PokemonType::ATTACK_TYPES[..])
        .copied()
        .unwrap_or(PokemonType::Normal)
}

fn pick_species_stat_booster(ctx: &mut GeneratorContext) -> Option<&'static SpeciesStatBooster> {
    let party = ctx.party();
    let eligible = SPECIES_STAT_BOOSTERS
        .iter()
        .filter(|item| {
            party.iter().any(|combatant| {
                item.species.iter().any(|species| {
                    combatant.species().as_str() == *species
                        || combatant
                            .fusion_species()
                            .is_some_and(|fusion| fusion.as_str() == *species)
                })
            })
        })
        .collect::<Vec<_>>();
    rand_util::sample_slice(ctx.prng, &eligible[..]).copied()
}

fn register_generators(registry: &mut ModifierTypeRegistry, config: &BalanceConfig) {
    registry.register_generator(
        ModifierTypeGenerator::new("TEMP_STAT_STAGE_BOOSTER", |ctx, pregen_args| {
            let stat = match pregen_args {
                Some(args) => pregen_arg("TEMP_STAT_STAGE_BOOSTER", args)?,
                None => *rand_util::sample_slice(ctx.prng, &TempBattleStat::ALL[..])
                    .wrap_expectation("no temporary stats")?,
            };
            Ok(Some(temp_stat_stage_booster_type(stat)))
        })
        .with_tier(ModifierTier::Common),
    );

    registry.register_generator(
        ModifierTypeGenerator::new("BASE_STAT_BOOSTER", |ctx, pregen_args| {
            let stat = match pregen_args {
                Some(args) => pregen_arg("BASE_STAT_BOOSTER", args)?,
                None => *rand_util::sample_slice(ctx.prng, &Stat::ALL[..])
                    .wrap_expectation("no stats")?,
            };
            Ok(Some(base_stat_booster_type(stat)))
        })
        .with_tier(ModifierTier::Great),
    );

    registry.register_generator(
        ModifierTypeGenerator::new("ATTACK_TYPE_BOOSTER", |ctx, pregen_args| {
            let move_type = match pregen_args {
                Some(args) => pregen_arg("ATTACK_TYPE_BOOSTER", args)?,
                None => match pick_attack_type(ctx) {
                    Some(move_type) => move_type,
                    None => return Ok(None),
                },
            };
            Ok(Some(attack_type_booster_type(move_type)))
        })
        .with_tier(ModifierTier::Ultra),
    );

    registry.register_generator(
        ModifierTypeGenerator::new("BERRY", |ctx, pregen_args| {
            let berry = match pregen_args {
                Some(args) => pregen_arg("BERRY", args)?,
                None => pick_berry(ctx),
            };
            Ok(Some(berry_type(berry)))
        })
        .with_tier(ModifierTier::Great),
    );

    registry.register_generator(
        ModifierTypeGenerator::new("MINT", |ctx, pregen_args| {
            let nature = match pregen_args {
                Some(args) => pregen_arg("MINT", args)?,
                None => *rand_util::sample_slice(ctx.prng, &Nature::ALL[..])
                    .wrap_expectation("no natures")?,
            };
            Ok(Some(mint_type(nature)))
        })
        .with_tier(ModifierTier::Ultra),
    );

    let tera_battles = config.tera_battles;
    registry.register_generator(
        ModifierTypeGenerator::new("TERA_SHARD", move |ctx, pregen_args| {
            let tera_type = match pregen_args {
                Some(args) => pregen_arg("TERA_SHARD", args)?,
                None => pick_tera_type(ctx),
            };
            Ok(Some(tera_shard_type(tera_type, tera_battles)))
        })
        .with_tier(ModifierTier::Great),
    );

    registry.register_generator(
        ModifierTypeGenerator::new("SPECIES_STAT_BOOSTER", |ctx, pregen_args| {
            let item = match pregen_args {
                Some(args) => {
                    let id = pregen_arg::<String>("SPECIES_STAT_BOOSTER", args)?;
                    SPECIES_STAT_BOOSTERS
                        .iter()
                        .find(|item| item.id == id)
                        .wrap_not_found_error_with_format(format_args!("species stat booster {id}"))?
                }
                None => match pick_species_stat_booster(ctx) {
                    Some(item) => item,
                    None => return Ok(None),
                },
            };
            Ok(Some(species_stat_booster_type(item)))
        })
        .with_tier(ModifierTier::Ultra),
    );

    // Learnsets and evolution data live outside the engine, so these generators only reproduce
    // items chosen by the caller.
    registry.register_generator(
        ModifierTypeGenerator::new("EVOLUTION_ITEM", |_, pregen_args| {
            let Some(args) = pregen_args else {
                return Ok(None);
            };
            let item = pregen_arg::<Id>("EVOLUTION_ITEM", args)?;
            let name = item.to_string();
            Ok(Some(
                ModifierType::new(upper_snake(&name), name)
                    .with_pregen_args(vec![label(&item)])
                    .with_factory(consumable(move |target: &ModifierTarget| {
                        Ok(ConsumableEffect::EvolutionItem {
                            target: target.owner(),
                            item: item.clone(),
                        })
                    })),
            ))
        })
        .with_tier(ModifierTier::Ultra),
    );

    registry.register_generator(
        ModifierTypeGenerator::new("FORM_CHANGE_ITEM", |_, pregen_args| {
            let Some(args) = pregen_args else {
                return Ok(None);
            };
            let item = pregen_arg::<Id>("FORM_CHANGE_ITEM", args)?;
            let name = item.to_string();
            Ok(Some(
                ModifierType::new(upper_snake(&name), name)
                    .with_icon("form_change_item")
                    .with_pregen_args(vec![label(&item)])
                    .with_factory(held(HeldItemEffect::PokemonFormChangeItem {
                        form_change_item: item,
                        active: true,
                    })),
            ))
        })
        .with_tier(ModifierTier::Ultra),
    );

    registry.register_generator(
        ModifierTypeGenerator::new("TM", |_, pregen_args| {
            let Some(args) = pregen_args else {
                return Ok(None);
            };
            let move_id = pregen_arg::<Id>("TM", args)?;
            let name = format!("TM {move_id}");
            Ok(Some(
                ModifierType::new(format!("TM_{}", upper_snake(move_id.as_str())), name)
                    .with_icon("tm")
                    .with_pregen_args(vec![label(&move_id)])
                    .with_factory(consumable(move |target: &ModifierTarget| {
                        Ok(ConsumableEffect::Tm {
                            target: target.owner(),
                            move_id: move_id.clone(),
                        })
                    })),
            ))
        })
        .with_tier(ModifierTier::Great),
    );
}

fn register_consumables(registry: &mut ModifierTypeRegistry) {
    use ModifierTier::*;

    for (id, name, tier, pokeball, count) in [
        ("POKEBALL", "Poké Ball", Common, PokeballType::PokeBall, 5),
        ("GREAT_BALL", "Great Ball", Great, PokeballType::GreatBall, 5),
        ("ULTRA_BALL", "Ultra Ball", Ultra, PokeballType::UltraBall, 5),
        ("ROGUE_BALL", "Rogue Ball", Rogue, PokeballType::RogueBall, 5),
        ("MASTER_BALL", "Master Ball", Master, PokeballType::MasterBall, 1),
    ] {
        register(
            registry,
            id,
            name,
            tier,
            consumable(move |_: &ModifierTarget| {
                Ok(ConsumableEffect::AddPokeball { pokeball, count })
            }),
        );
    }

    for (id, name, tier, voucher) in [
        ("VOUCHER", "Egg Voucher", Ultra, VoucherType::Regular),
        ("VOUCHER_PLUS", "Egg Voucher Plus", Master, VoucherType::Plus),
        ("VOUCHER_PREMIUM", "Egg Voucher Premium", Luxury, VoucherType::Premium),
    ] {
        register(
            registry,
            id,
            name,
            tier,
            consumable(move |_: &ModifierTarget| {
                Ok(ConsumableEffect::AddVoucher { voucher, count: 1 })
            }),
        );
    }

    for (id, name, tier, multiplier) in [
        ("NUGGET", "Nugget", Ultra, 1.0),
        ("BIG_NUGGET", "Big Nugget", Master, 2.5),
        ("RELIC_GOLD", "Relic Gold", Luxury, 10.0),
    ] {
        register(
            registry,
            id,
            name,
            tier,
            consumable(move |_: &ModifierTarget| Ok(ConsumableEffect::MoneyReward { multiplier })),
        );
    }

    for (id, name, tier, restore_points, restore_percent, heal_status) in [
        ("POTION", "Potion", Common, 20, 10.0, false),
        ("SUPER_POTION", "Super Potion", Common, 50, 25.0, false),
        ("HYPER_POTION", "Hyper Potion", Great, 200, 50.0, false),
        ("MAX_POTION", "Max Potion", Great, 0, 100.0, false),
        ("FULL_RESTORE", "Full Restore", Great, 0, 100.0, true),
    ] {
        register(
            registry,
            id,
            name,
            tier,
            consumable(move |target: &ModifierTarget| {
                Ok(ConsumableEffect::PokemonHpRestore {
                    target: target.owner(),
                    restore_points,
                    restore_percent,
                    heal_status,
                    fainted: false,
                })
            }),
        );
    }

    for (id, name, tier, restore_percent) in [
        ("REVIVE", "Revive", Great, 50.0),
        ("MAX_REVIVE", "Max Revive", Great, 100.0),
    ] {
        register(
            registry,
            id,
            name,
            tier,
            consumable(move |target: &ModifierTarget| {
                Ok(ConsumableEffect::PokemonHpRestore {
                    target: target.owner(),
                    restore_points: 0,
                    restore_percent,
                    heal_status: false,
                    fainted: true,
                })
            }),
        );
    }

    register(
        registry,
        "FULL_HEAL",
        "Full Heal",
        Great,
        consumable(|target: &ModifierTarget| {
            Ok(ConsumableEffect::PokemonStatusHeal {
                target: target.owner(),
            })
        }),
    );

    for (id, name, tier, restore_points) in [
        ("ETHER", "Ether", Common, 10),
        ("MAX_ETHER", "Max Ether", Common, -1),
    ] {
        register(
            registry,
            id,
            name,
            tier,
            consumable(move |target: &ModifierTarget| {
                Ok(ConsumableEffect::PokemonPpRestore {
                    target: target.owner(),
                    move_index: target.move_index()?,
                    restore_points,
                })
            }),
        );
    }

    for (id, name, tier, restore_points) in [
        ("ELIXIR", "Elixir", Great, 10),
        ("MAX_ELIXIR", "Max Elixir", Great, -1),
    ] {
        register(
            registry,
            id,
            name,
            tier,
            consumable(move |target: &ModifierTarget| {
                Ok(ConsumableEffect::PokemonAllMovePpRestore {
                    target: target.owner(),
                    restore_points,
                })
            }),
        );
    }

    for (id, name, tier, up_points) in [
        ("PP_UP", "PP Up", Great, 1),
        ("PP_MAX", "PP Max", Ultra, 3),
    ] {
        register(
            registry,
            id,
            name,
            tier,
            consumable(move |target: &ModifierTarget| {
                Ok(ConsumableEffect::PokemonPpUp {
                    target: target.owner(),
                    move_index: target.move_index()?,
                    up_points,
                })
            }),
        );
    }

    register(
        registry,
        "RARE_CANDY",
        "Rare Candy",
        Common,
        consumable(|target: &ModifierTarget| {
            Ok(ConsumableEffect::PokemonLevelIncrement {
                target: target.owner(),
            })
        }),
    );
    register(
        registry,
        "MEMORY_MUSHROOM",
        "Memory Mushroom",
        Great,
        consumable(|target: &ModifierTarget| {
            Ok(ConsumableEffect::RememberMove {
                target: target.owner(),
                level_move_index: target.level_move_index()?,
            })
        }),
    );
    register(
        registry,
        "DNA_SPLICERS",
        "DNA Splicers",
        Master,
        consumable(|target: &ModifierTarget| {
            Ok(ConsumableEffect::FusePokemon {
                target: target.owner(),
                other: target.other()?,
            })
        }),
    );
}

fn register_party_items(registry: &mut ModifierTypeRegistry) {
    use ModifierTier::*;

    for (id, name, tier, effect) in [
        ("MEGA_BRACELET", "Mega Bracelet", Rogue, PartyEffect::MegaEvolutionAccess),
        ("DYNAMAX_BAND", "Dynamax Band", Rogue, PartyEffect::GigantamaxAccess),
        ("TERA_ORB", "Tera Orb", Ultra, PartyEffect::TerastallizeAccess),
        ("MAP", "Map", Ultra, PartyEffect::Map),
        ("EXP_SHARE", "EXP. All", Ultra, PartyEffect::ExpShare),
        ("EXP_BALANCE", "EXP. Balance", Ultra, PartyEffect::ExpBalance),
        ("OVAL_CHARM", "Oval Charm", Master, PartyEffect::MultipleParticipantExpBonus),
        ("EXP_CHARM", "EXP. Charm", Ultra, PartyEffect::ExpBooster { boost_percent: 25.0 }),
        (
            "SUPER_EXP_CHARM",
            "Super EXP. Charm",
            Rogue,
            PartyEffect::ExpBooster { boost_percent: 60.0 },
        ),
        (
            "GOLDEN_EXP_CHARM",
            "Golden EXP. Charm",
            Luxury,
            PartyEffect::ExpBooster { boost_percent: 100.0 },
        ),
        ("AMULET_COIN", "Amulet Coin", Ultra, PartyEffect::MoneyMultiplier),
        ("COIN_CASE", "Coin Case", Rogue, PartyEffect::MoneyInterest),
        ("LOCK_CAPSULE", "Lock Capsule", Ultra, PartyEffect::LockModifierTiers),
        (
            "HEALING_CHARM",
            "Healing Charm",
            Master,
            PartyEffect::HealingBooster { multiplier: 1.1 },
        ),
        ("CANDY_JAR", "Candy Jar", Ultra, PartyEffect::LevelIncrementBooster),
        ("BERRY_POUCH", "Berry Pouch", Rogue, PartyEffect::PreserveBerry),
        ("SHINY_CHARM", "Shiny Charm", Master, PartyEffect::ShinyRateBooster),
        ("ABILITY_CHARM", "Ability Charm", Ultra, PartyEffect::HiddenAbilityRateBooster),
        ("IV_SCANNER", "IV Scanner", Ultra, PartyEffect::IvScanner),
        ("GOLDEN_POKEBALL", "Golden Poké Ball", Luxury, PartyEffect::ExtraModifier),
    ] {
        register(registry, id, name, tier, party(effect));
    }

    for (id, name, tier, effect, battles) in [
        ("LURE", "Lure", Common, LapsingEffect::DoubleBattleChanceBooster, 5),
        ("SUPER_LURE", "Super Lure", Great, LapsingEffect::DoubleBattleChanceBooster, 10),
        ("MAX_LURE", "Max Lure", Ultra, LapsingEffect::DoubleBattleChanceBooster, 25),
        ("DIRE_HIT", "Dire Hit", Great, LapsingEffect::TempCritBooster, 5),
        (
            "EXTRA_REWARD_TICKET",
            "Extra Reward Ticket",
            Rogue,
            LapsingEffect::TempExtraModifier,
            5,
        ),
    ] {
        register(registry, id, name, tier, lapsing(effect, battles));
    }
}

fn register_held_items(registry: &mut ModifierTypeRegistry) {
    use ModifierTier::*;

    let items = [
        ("LUCKY_EGG", "Lucky Egg", Ultra, HeldItemEffect::PokemonExpBooster { boost_percent: 40.0 }),
        (
            "GOLDEN_EGG",
            "Golden Egg",
            Master,
            HeldItemEffect::PokemonExpBooster { boost_percent: 100.0 },
        ),
        ("SOOTHE_BELL", "Soothe Bell", Great, HeldItemEffect::PokemonFriendshipBooster),
        ("SOUL_DEW", "Soul Dew", Rogue, HeldItemEffect::PokemonNatureWeight),
        ("GOLDEN_PUNCH", "Golden Punch", Ultra, HeldItemEffect::DamageMoneyReward),
        (
            "GRIP_CLAW",
            "Grip Claw",
            Ultra,
            HeldItemEffect::ContactHeldItemTransferChance { chance_percent: 10.0 },
        ),
        (
            "WIDE_LENS",
            "Wide Lens",
            Master,
            HeldItemEffect::PokemonMoveAccuracyBooster { accuracy: 5 },
        ),
        ("MULTI_LENS", "Multi Lens", Master, HeldItemEffect::PokemonMultiHit),
        ("REVIVER_SEED", "Reviver Seed", Ultra, HeldItemEffect::PokemonInstantRevive),
        ("FOCUS_BAND", "Focus Band", Rogue, HeldItemEffect::SurviveDamage),
        ("QUICK_CLAW", "Quick Claw", Rogue, HeldItemEffect::BypassSpeedChance),
        ("KINGS_ROCK", "King's Rock", Rogue, HeldItemEffect::FlinchChance),
        ("LEFTOVERS", "Leftovers", Rogue, HeldItemEffect::TurnHeal),
        ("SHELL_BELL", "Shell Bell", Rogue, HeldItemEffect::HitHeal),
        (
            "TOXIC_ORB",
            "Toxic Orb",
            Rogue,
            HeldItemEffect::TurnStatusEffect {
                effect: StatusEffect::Toxic,
            },
        ),
        (
            "FLAME_ORB",
            "Flame Orb",
            Rogue,
            HeldItemEffect::TurnStatusEffect {
                effect: StatusEffect::Burn,
            },
        ),
        ("BATON", "Baton", Rogue, HeldItemEffect::SwitchEffectTransfer),
        ("MINI_BLACK_HOLE", "Mini Black Hole", Master, HeldItemEffect::TurnHeldItemTransfer),
        (
            "EVIOLITE",
            "Eviolite",
            Ultra,
            HeldItemEffect::EvolutionStatBooster {
                stats: vec![Stat::Def, Stat::SpDef],
                multiplier: 1.5,
            },
        ),
        (
            "SCOPE_LENS",
            "Scope Lens",
            Ultra,
            HeldItemEffect::CritBooster { stage_increment: 1 },
        ),
        (
            "LEEK",
            "Leek",
            Ultra,
            HeldItemEffect::SpeciesCritBooster {
                stage_increment: 2,
                species: vec![
                    Id::from("farfetchd"),
                    Id::from("galarfarfetchd"),
                    Id::from("sirfetchd"),
                ],
            },
        ),
        ("WHITE_HERB", "White Herb", Ultra, HeldItemEffect::ResetNegativeStatStage),
        ("MYSTICAL_ROCK", "Mystical Rock", Ultra, HeldItemEffect::FieldEffect),
        ("MACHO_BRACE", "Macho Brace", Master, HeldItemEffect::PokemonIncrementingStat),
        (
            "SHUCKLE_JUICE",
            "Shuckle Juice",
            Rogue,
            HeldItemEffect::PokemonBaseStatTotal { stat_modifier: 10 },
        ),
        (
            "OLD_GATEAU",
            "Old Gateau",
            Rogue,
            HeldItemEffect::PokemonBaseStatFlat {
                stat_modifier: 20,
                stats: vec![Stat::HP, Stat::Def, Stat::SpDef],
            },
        ),
    ];
    for (id, name, tier, effect) in items {
        register(registry, id, name, tier, held(effect));
    }
}

fn register_enemy_items(registry: &mut ModifierTypeRegistry) {
    use ModifierTier::*;

    let items = [
        (
            "ENEMY_DAMAGE_BOOSTER",
            "Damage Token",
            Common,
            EnemyEffect::DamageBooster { boost_percent: 5.0 },
        ),
        (
            "ENEMY_DAMAGE_REDUCTION",
            "Protection Token",
            Common,
            EnemyEffect::DamageReducer {
                reduction_percent: 2.5,
            },
        ),
        (
            "ENEMY_HEAL",
            "Recovery Token",
            Great,
            EnemyEffect::TurnHeal { heal_percent: 2.0 },
        ),
        (
            "ENEMY_ATTACK_POISON_CHANCE",
            "Poison Token",
            Great,
            EnemyEffect::AttackStatusEffectChance {
                effect: StatusEffect::Poison,
                chance_percent: 5.0,
            },
        ),
        (
            "ENEMY_ATTACK_PARALYZE_CHANCE",
            "Paralysis Token",
            Great,
            EnemyEffect::AttackStatusEffectChance {
                effect: StatusEffect::Paralysis,
                chance_percent: 2.5,
            },
        ),
        (
            "ENEMY_ATTACK_BURN_CHANCE",
            "Burn Token",
            Great,
            EnemyEffect::AttackStatusEffectChance {
                effect: StatusEffect::Burn,
                chance_percent: 5.0,
            },
        ),
        (
            "ENEMY_STATUS_EFFECT_HEAL_CHANCE",
            "Full Heal Token",
            Great,
            EnemyEffect::StatusEffectHealChance {
                chance_percent: 2.5,
            },
        ),
        (
            "ENEMY_ENDURE_CHANCE",
            "Endure Token",
            Ultra,
            EnemyEffect::EndureChance {
                chance_percent: 2.0,
            },
        ),
        (
            "ENEMY_FUSED_CHANCE",
            "Fusion Token",
            Ultra,
            EnemyEffect::FusionChance {
                chance_percent: 1.0,
            },
        ),
    ];
    for (id, name, tier, effect) in items {
        register(registry, id, name, tier, enemy(effect));
    }
}

impl ModifierTypeRegistry {
    /// Creates a registry holding every built-in item and generator.
    pub fn with_builtin_types(config: &BalanceConfig) -> Self {
        let mut registry = Self::new();
        register_consumables(&mut registry);
        register_party_items(&mut registry);
        register_held_items(&mut registry);
        register_enemy_items(&mut registry);
        register_generators(&mut registry, config);
        registry
    }
}

#[cfg(test)]
mod builtin_test {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use rogue_prng::SeededRandomNumberGenerator;
    use serde_json::Value;

    use crate::{
        combatant::NoCombatants,
        config::BalanceConfig,
        data::{
            BerryType,
            ModifierTier,
            PokemonType,
            Stat,
            TempBattleStat,
        },
        modifier::{
            Behavior,
            ConsumableEffect,
            HeldItemEffect,
            LapsingEffect,
            Modifier,
            ModifierKind,
            ModifierOwner,
        },
        modifier_type::{
            GeneratorContext,
            ModifierTarget,
            ModifierTypeRegistry,
            builtin::{
                attack_type_weights,
                upper_snake,
            },
        },
    };

    fn registry() -> ModifierTypeRegistry {
        ModifierTypeRegistry::with_builtin_types(&BalanceConfig::default())
    }

    #[test]
    fn resolves_plain_types_with_tiers() {
        let registry = registry();
        let mut prng = SeededRandomNumberGenerator::new(Some(1));
        let mut ctx = GeneratorContext::new(&NoCombatants, &mut prng);
        let leftovers = registry.resolve("LEFTOVERS", None, &mut ctx).unwrap();
        assert_eq!(leftovers.id, "LEFTOVERS");
        assert_eq!(leftovers.name, "Leftovers");
        assert_eq!(leftovers.icon, "leftovers");
        assert_eq!(leftovers.tier, Some(ModifierTier::Rogue));
        assert!(!leftovers.is_generated());
    }

    #[test]
    fn held_item_factory_binds_target_owner() {
        let registry = registry();
        let mut prng = SeededRandomNumberGenerator::new(Some(1));
        let mut ctx = GeneratorContext::new(&NoCombatants, &mut prng);
        let modifier_type = Arc::new(registry.resolve("FOCUS_BAND", None, &mut ctx).unwrap());

        let modifier = modifier_type
            .new_modifier(&ModifierTarget::Combatant(7))
            .unwrap();
        let persistent = modifier.as_persistent().unwrap();
        assert_eq!(persistent.kind(), ModifierKind::SurviveDamage);
        assert_eq!(persistent.owner(), Some(ModifierOwner::Combatant(7)));
        assert_eq!(persistent.stack_count(), 1);

        let modifier = modifier_type.new_modifier(&ModifierTarget::Party).unwrap();
        assert_eq!(
            modifier.as_persistent().unwrap().owner(),
            Some(ModifierOwner::Any)
        );
    }

    #[test]
    fn move_consumables_require_move_slot() {
        let registry = registry();
        let mut prng = SeededRandomNumberGenerator::new(Some(1));
        let mut ctx = GeneratorContext::new(&NoCombatants, &mut prng);
        let ether = Arc::new(registry.resolve("ETHER", None, &mut ctx).unwrap());

        assert!(ether.new_modifier(&ModifierTarget::Combatant(1)).is_err());
        let modifier = ether
            .new_modifier(&ModifierTarget::CombatantMove(1, 2))
            .unwrap();
        assert_matches!(modifier, Modifier::Consumable(consumable) => {
            assert_eq!(
                consumable.effect(),
                &ConsumableEffect::PokemonPpRestore {
                    target: ModifierOwner::Combatant(1),
                    move_index: 2,
                    restore_points: 10,
                }
            );
        });
    }

    #[test]
    fn lures_carry_their_duration() {
        let registry = registry();
        let mut prng = SeededRandomNumberGenerator::new(Some(1));
        let mut ctx = GeneratorContext::new(&NoCombatants, &mut prng);
        let lure = Arc::new(registry.resolve("SUPER_LURE", None, &mut ctx).unwrap());
        let modifier = lure.new_modifier(&ModifierTarget::Party).unwrap();
        assert_matches!(modifier.as_persistent().unwrap().behavior(), Behavior::Lapsing(lapsing) => {
            assert_eq!(lapsing.effect, LapsingEffect::DoubleBattleChanceBooster);
            assert_eq!(lapsing.countdown.max_battles(), 10);
        });
    }

    #[test]
    fn generator_with_pregen_args_is_deterministic() {
        let registry = registry();
        let mut prng = SeededRandomNumberGenerator::new(Some(1));
        let mut ctx = GeneratorContext::new(&NoCombatants, &mut prng);
        let args = [Value::from("spe")];
        let carbos = registry
            .resolve("BASE_STAT_BOOSTER", Some(&args[..]), &mut ctx)
            .unwrap();
        assert_eq!(carbos.id, "BASE_STAT_BOOSTER");
        assert_eq!(carbos.generator_id.as_deref(), Some("CARBOS"));
        assert_eq!(carbos.pregen_args, Some(vec![Value::from("spe")]));
        assert_eq!(carbos.tier, Some(ModifierTier::Great));

        let again = registry
            .resolve("BASE_STAT_BOOSTER", carbos.pregen_args.as_deref(), &mut ctx)
            .unwrap();
        assert_eq!(again, carbos);

        let modifier = Arc::new(carbos)
            .new_modifier(&ModifierTarget::Combatant(3))
            .unwrap();
        assert_matches!(modifier.as_persistent().unwrap().behavior(), Behavior::HeldItem(held) => {
            assert_eq!(held.effect, HeldItemEffect::BaseStat { stat: Stat::Spe });
        });
    }

    #[test]
    fn generator_rejects_bad_pregen_args() {
        let registry = registry();
        let mut prng = SeededRandomNumberGenerator::new(Some(1));
        let mut ctx = GeneratorContext::new(&NoCombatants, &mut prng);
        let args = [Value::from(12)];
        assert!(registry.resolve("BERRY", Some(&args[..]), &mut ctx).is_err());
        assert!(registry.resolve("BERRY", Some(&[][..]), &mut ctx).is_err());
    }

    #[test]
    fn generators_without_party_context() {
        let registry = registry();
        let mut prng = SeededRandomNumberGenerator::new(Some(100));
        let mut ctx = GeneratorContext::new(&NoCombatants, &mut prng);

        assert!(registry.resolve("ATTACK_TYPE_BOOSTER", None, &mut ctx).is_err());
        assert!(registry.resolve("TM", None, &mut ctx).is_err());

        let berry = registry.resolve("BERRY", None, &mut ctx).unwrap();
        let berry_type = serde_json::from_value::<BerryType>(
            berry.pregen_args.as_ref().unwrap()[0].clone(),
        )
        .unwrap();
        assert!(BerryType::ALL.contains(&berry_type));

        let booster = registry
            .resolve("TEMP_STAT_STAGE_BOOSTER", None, &mut ctx)
            .unwrap();
        let stat = serde_json::from_value::<TempBattleStat>(
            booster.pregen_args.as_ref().unwrap()[0].clone(),
        )
        .unwrap();
        assert!(TempBattleStat::ALL.contains(&stat));
    }

    #[test]
    fn tera_shard_uses_configured_duration() {
        let mut config = BalanceConfig::default();
        config.tera_battles = 3;
        let registry = ModifierTypeRegistry::with_builtin_types(&config);
        let mut prng = SeededRandomNumberGenerator::new(Some(1));
        let mut ctx = GeneratorContext::new(&NoCombatants, &mut prng);
        let args = [Value::from("Fire")];
        let shard = registry.resolve("TERA_SHARD", Some(&args[..]), &mut ctx).unwrap();
        assert_eq!(shard.generator_id.as_deref(), Some("FIRE_TERA_SHARD"));
        assert_eq!(shard.icon, "tera_shard");

        let modifier = Arc::new(shard)
            .new_modifier(&ModifierTarget::Combatant(1))
            .unwrap();
        assert_matches!(modifier.as_persistent().unwrap().behavior(), Behavior::HeldItem(held) => {
            assert_matches!(held.effect, HeldItemEffect::Terastallize { tera_type: PokemonType::Fire, countdown } => {
                assert_eq!(countdown.battles_left(), 3);
            });
        });
    }

    #[test]
    fn attack_type_weights_are_capped() {
        use PokemonType::*;
        assert_eq!(
            attack_type_weights([Fire, Water, Fire, Fire, Fire, Grass, Water]),
            vec![(Fire, 3), (Water, 2), (Grass, 1)]
        );
    }

    #[test]
    fn formats_generated_ids() {
        assert_eq!(upper_snake("Never-Melt Ice"), "NEVER_MELT_ICE");
        assert_eq!(upper_snake("King's Rock"), "KINGS_ROCK");
    }
}
