use std::sync::Arc;

use anyhow::Result;
use log::{
    debug,
    error,
    warn,
};
use rogue_prng::PseudoRandomNumberGenerator;

use crate::{
    collection::{
        ModifierCollection,
        ModifierStore,
    },
    combatant::CombatantProvider,
    config::BalanceConfig,
    error::{
        WrapResultError,
        general_error,
    },
    modifier::{
        PersistentModifier,
        StackContext,
    },
    modifier_type::{
        GeneratorContext,
        ModifierTypeRegistry,
    },
    serialization::{
        ModifierRecord,
        constructors::construct,
    },
};

/// Everything needed to rebuild modifiers from save records.
///
/// The roster may differ from the one the records were saved with. Stack ceilings and generated
/// types are recomputed against the current roster.
pub struct LoadContext<'a> {
    pub config: &'a BalanceConfig,
    pub combatants: &'a dyn CombatantProvider,
    pub prng: &'a mut dyn PseudoRandomNumberGenerator,
}

impl<'a> LoadContext<'a> {
    pub fn new(
        config: &'a BalanceConfig,
        combatants: &'a dyn CombatantProvider,
        prng: &'a mut dyn PseudoRandomNumberGenerator,
    ) -> Self {
        Self {
            config,
            combatants,
            prng,
        }
    }
}

/// Flattens a modifier into its save record.
///
/// Only persisted stacks are written.
pub fn to_record(modifier: &PersistentModifier, player: bool) -> ModifierRecord {
    let modifier_type = modifier.modifier_type();
    ModifierRecord {
        type_id: modifier_type.id.clone(),
        type_pregen_args: if modifier_type.is_generated() {
            modifier_type.pregen_args.clone()
        } else {
            None
        },
        args: modifier.args(),
        stack_count: modifier.stack_count(),
        class_name: modifier.kind().class_name(),
        player,
    }
}

/// Rebuilds a modifier from its save record.
///
/// The stack count is clamped to the modifier's current stack ceiling. Returns `None` for a
/// record that fails to rebuild or is left with no stacks, and logs why.
pub fn from_record(
    record: &ModifierRecord,
    registry: &ModifierTypeRegistry,
    ctx: &mut LoadContext,
) -> Option<PersistentModifier> {
    match try_from_record(record, registry, ctx) {
        Ok(Some(modifier)) => Some(modifier),
        Ok(None) => {
            debug!("skipped {} with no stacks", record.type_id);
            None
        }
        Err(err) => {
            error!(
                "failed to load {} ({}): {err:#}",
                record.type_id, record.class_name
            );
            None
        }
    }
}

fn try_from_record(
    record: &ModifierRecord,
    registry: &ModifierTypeRegistry,
    ctx: &mut LoadContext,
) -> Result<Option<PersistentModifier>> {
    if registry.factory(&record.type_id)?.is_generator() && record.type_pregen_args.is_none() {
        return Err(general_error(format!(
            "{} is generated but has no pregeneration arguments",
            record.type_id
        )));
    }
    let modifier_type = registry
        .resolve(
            &record.type_id,
            record.type_pregen_args.as_deref(),
            &mut GeneratorContext::new(ctx.combatants, &mut *ctx.prng),
        )
        .wrap_error_with_format(format_args!("failed to resolve type {}", record.type_id))?;
    let behavior = construct(&record.class_name, &record.args, ctx.config)?;

    let mut modifier = PersistentModifier::new(Arc::new(modifier_type), behavior, 0);
    let max = modifier.max_stack_count(&StackContext::new(ctx.config, ctx.combatants));
    if record.stack_count > max {
        warn!(
            "clamping {} from {} to {max} stacks",
            record.type_id, record.stack_count
        );
    }
    let stack_count = record.stack_count.min(max);
    if stack_count == 0 {
        return Ok(None);
    }
    modifier.set_stack_count(stack_count);
    Ok(Some(modifier))
}

/// Flattens every modifier of a collection, in collection order.
pub fn save_collection(collection: &ModifierCollection, player: bool) -> Vec<ModifierRecord> {
    collection
        .iter()
        .map(|modifier| to_record(modifier, player))
        .collect()
}

/// Rebuilds a collection, appending surviving records in record order.
///
/// A record that fails to rebuild is dropped without affecting the others.
pub fn load_collection(
    records: &[ModifierRecord],
    registry: &ModifierTypeRegistry,
    ctx: &mut LoadContext,
) -> ModifierCollection {
    let mut collection = ModifierCollection::new();
    for record in records {
        if let Some(modifier) = from_record(record, registry, ctx) {
            collection.push(modifier);
        }
    }
    collection
}

/// Flattens both sides of the field, player modifiers first.
pub fn save_store(store: &ModifierStore) -> Vec<ModifierRecord> {
    let mut records = save_collection(&store.player, true);
    records.extend(save_collection(&store.enemy, false));
    records
}

/// Rebuilds both sides of the field, splitting records by their side.
pub fn load_store(
    records: &[ModifierRecord],
    registry: &ModifierTypeRegistry,
    ctx: &mut LoadContext,
) -> ModifierStore {
    let (player, enemy): (Vec<_>, Vec<_>) =
        records.iter().cloned().partition(|record| record.player);
    ModifierStore {
        player: load_collection(&player, registry, ctx),
        enemy: load_collection(&enemy, registry, ctx),
    }
}

#[cfg(test)]
mod adapter_test {
    use pretty_assertions::assert_eq;
    use rogue_prng::SeededRandomNumberGenerator;
    use serde_json::json;

    use crate::{
        collection::ModifierCollection,
        combatant::NoCombatants,
        config::BalanceConfig,
        modifier::{
            ModifierKind,
            StackContext,
        },
        modifier_type::{
            GeneratorContext,
            ModifierTarget,
            ModifierTypeRegistry,
        },
        serialization::{
            ModifierRecord,
            adapter::{
                LoadContext,
                from_record,
                load_collection,
                save_collection,
                to_record,
            },
        },
    };

    fn record(type_id: &str, class_name: &str, args: Vec<serde_json::Value>, stack_count: u32) -> ModifierRecord {
        ModifierRecord {
            type_id: type_id.to_owned(),
            type_pregen_args: None,
            args,
            stack_count,
            class_name: class_name.to_owned(),
            player: true,
        }
    }

    #[test]
    fn round_trips_party_modifiers() {
        let config = BalanceConfig::default();
        let registry = ModifierTypeRegistry::with_builtin_types(&config);
        let mut prng = SeededRandomNumberGenerator::new(Some(1));
        let stack_ctx = StackContext::without_combatants(&config);

        let mut collection = ModifierCollection::new();
        for id in ["EXP_CHARM", "EXP_CHARM", "HEALING_CHARM", "MAP", "LURE"] {
            let modifier_type = registry
                .resolve(id, None, &mut GeneratorContext::new(&NoCombatants, &mut prng))
                .unwrap();
            let modifier = std::sync::Arc::new(modifier_type)
                .new_modifier(&ModifierTarget::Party)
                .unwrap()
                .into_persistent()
                .unwrap();
            assert!(collection.add(modifier, false, &stack_ctx));
        }

        let records = save_collection(&collection, true);
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].type_id, "EXP_CHARM");
        assert_eq!(records[0].stack_count, 2);
        assert_eq!(records[0].args, vec![json!(25.0)]);

        let mut ctx = LoadContext::new(&config, &NoCombatants, &mut prng);
        let loaded = load_collection(&records, &registry, &mut ctx);
        assert_eq!(save_collection(&loaded, true), records);
        assert_eq!(loaded.count_kind(ModifierKind::ExpBooster), 2);
    }

    #[test]
    fn generated_types_record_pregen_args() {
        let config = BalanceConfig::default();
        let registry = ModifierTypeRegistry::with_builtin_types(&config);
        let mut prng = SeededRandomNumberGenerator::new(Some(1));
        let modifier_type = registry
            .resolve(
                "TEMP_STAT_STAGE_BOOSTER",
                Some(&[json!("spe")][..]),
                &mut GeneratorContext::new(&NoCombatants, &mut prng),
            )
            .unwrap();
        let modifier = std::sync::Arc::new(modifier_type)
            .new_modifier(&ModifierTarget::Party)
            .unwrap()
            .into_persistent()
            .unwrap();

        let saved = to_record(&modifier, true);
        assert_eq!(saved.type_id, "TEMP_STAT_STAGE_BOOSTER");
        assert_eq!(saved.type_pregen_args, Some(vec![json!("spe")]));
        assert_eq!(saved.class_name, "TempStatStageBoosterModifier");

        let mut ctx = LoadContext::new(&config, &NoCombatants, &mut prng);
        let loaded = from_record(&saved, &registry, &mut ctx).unwrap();
        assert_eq!(loaded.modifier_type().generator_id.as_deref(), Some("X_SPEED"));
        assert_eq!(loaded.args(), modifier.args());
    }

    #[test]
    fn drops_bad_records_and_keeps_the_rest() {
        let config = BalanceConfig::default();
        let registry = ModifierTypeRegistry::with_builtin_types(&config);
        let mut prng = SeededRandomNumberGenerator::new(Some(1));
        let records = [
            record("MAP", "MapModifier", vec![], 1),
            record("WISHING_STAR", "MapModifier", vec![], 1),
            record("AMULET_COIN", "NotAModifier", vec![], 1),
            record("HEALING_CHARM", "HealingBoosterModifier", vec![json!("lots")], 1),
            record("BERRY", "BerryModifier", vec![json!(-1), json!("Lum")], 1),
            record("SHINY_CHARM", "ShinyRateBoosterModifier", vec![], 2),
        ];
        let mut ctx = LoadContext::new(&config, &NoCombatants, &mut prng);
        let loaded = load_collection(&records, &registry, &mut ctx);
        assert_eq!(
            loaded.iter().map(|modifier| modifier.type_id()).collect::<Vec<_>>(),
            vec!["MAP", "SHINY_CHARM"]
        );
    }

    #[test]
    fn clamps_to_current_ceiling() {
        let config = BalanceConfig::default();
        let registry = ModifierTypeRegistry::with_builtin_types(&config);
        let mut prng = SeededRandomNumberGenerator::new(Some(1));
        let mut ctx = LoadContext::new(&config, &NoCombatants, &mut prng);
        let loaded = from_record(
            &record("SHINY_CHARM", "ShinyRateBoosterModifier", vec![], 9),
            &registry,
            &mut ctx,
        )
        .unwrap();
        assert_eq!(loaded.stack_count(), 4);
    }

    #[test]
    fn skips_records_without_persisted_stacks() {
        let config = BalanceConfig::default();
        let registry = ModifierTypeRegistry::with_builtin_types(&config);
        let mut prng = SeededRandomNumberGenerator::new(Some(1));
        let mut ctx = LoadContext::new(&config, &NoCombatants, &mut prng);
        assert!(
            from_record(&record("MAP", "MapModifier", vec![], 0), &registry, &mut ctx).is_none()
        );
    }
}
