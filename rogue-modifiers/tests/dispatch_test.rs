use rogue_modifiers::{
    ApplyContext,
    ModifierArgs,
    ModifierCollection,
    ModifierKind,
    ModifierTarget,
    StackContext,
    data::{
        PokemonType,
        TempBattleStat,
    },
};
use rogue_prng::SeededRandomNumberGenerator;
use rogue_test_utils::{
    TestCombatant,
    TestModifiers,
    setup_test_environment,
};

fn collection_of(modifiers: &TestModifiers, items: &[(&str, ModifierTarget)]) -> ModifierCollection {
    let ctx = StackContext::without_combatants(&modifiers.config);
    let mut collection = ModifierCollection::new();
    for (id, target) in items {
        assert!(collection.add(modifiers.persistent(id, target).unwrap(), false, &ctx));
    }
    collection
}

fn apply_exp(collection: &mut ModifierCollection, modifiers: &TestModifiers, exp: i64) -> (i64, Vec<String>) {
    let mut prng = SeededRandomNumberGenerator::new(Some(0));
    let mut ctx = ApplyContext::new(&modifiers.config, &mut prng);
    let mut exp = exp;
    let applied = collection.apply_all(
        ModifierKind::ExpBooster,
        &mut ModifierArgs::Integer(&mut exp),
        &mut ctx,
    );
    (exp, applied)
}

#[test]
fn boosters_compound_in_collection_order() {
    setup_test_environment();
    let modifiers = TestModifiers::new();

    let mut collection = collection_of(
        &modifiers,
        &[
            ("EXP_CHARM", ModifierTarget::Party),
            ("SUPER_EXP_CHARM", ModifierTarget::Party),
        ],
    );
    let (exp, applied) = apply_exp(&mut collection, &modifiers, 7);
    pretty_assertions::assert_eq!(applied, vec!["EXP_CHARM", "SUPER_EXP_CHARM"]);
    // floor(7 * 1.25) = 8, floor(8 * 1.6) = 12
    assert_eq!(exp, 12);

    let mut collection = collection_of(
        &modifiers,
        &[
            ("SUPER_EXP_CHARM", ModifierTarget::Party),
            ("EXP_CHARM", ModifierTarget::Party),
        ],
    );
    let (exp, applied) = apply_exp(&mut collection, &modifiers, 7);
    pretty_assertions::assert_eq!(applied, vec!["SUPER_EXP_CHARM", "EXP_CHARM"]);
    // floor(7 * 1.6) = 11, floor(11 * 1.25) = 13
    assert_eq!(exp, 13);
}

#[test]
fn boost_scales_with_stack_count() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut collection = collection_of(
        &modifiers,
        &[
            ("EXP_CHARM", ModifierTarget::Party),
            ("EXP_CHARM", ModifierTarget::Party),
        ],
    );
    let (exp, applied) = apply_exp(&mut collection, &modifiers, 100);
    pretty_assertions::assert_eq!(applied, vec!["EXP_CHARM"]);
    assert_eq!(exp, 150);
}

#[test]
fn unexpected_arguments_are_skipped() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut collection = collection_of(&modifiers, &[("EXP_CHARM", ModifierTarget::Party)]);
    let mut prng = SeededRandomNumberGenerator::new(Some(0));
    let mut ctx = ApplyContext::new(&modifiers.config, &mut prng);

    let mut value = 100.0;
    let applied = collection.apply_all(
        ModifierKind::ExpBooster,
        &mut ModifierArgs::Number(&mut value),
        &mut ctx,
    );
    assert!(applied.is_empty());
    assert_eq!(value, 100.0);
}

#[test]
fn stat_stage_boosters_only_boost_their_stat() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let ctx = StackContext::without_combatants(&modifiers.config);
    let mut collection = ModifierCollection::new();
    for stat in ["def", "atk"] {
        assert!(collection.add(
            modifiers
                .generated("TEMP_STAT_STAGE_BOOSTER", &[stat], &ModifierTarget::Party)
                .unwrap(),
            false,
            &ctx
        ));
    }

    let mut prng = SeededRandomNumberGenerator::new(Some(0));
    let mut ctx = ApplyContext::new(&modifiers.config, &mut prng);
    let mut multiplier = 1.0;
    let applied = collection.apply_first(
        ModifierKind::TempStatStageBooster,
        &mut ModifierArgs::TempStatStage {
            stat: TempBattleStat::Atk,
            multiplier: &mut multiplier,
        },
        &mut ctx,
    );
    assert_eq!(applied.as_deref(), Some("TEMP_STAT_STAGE_BOOSTER"));
    assert_eq!(multiplier, 1.3);

    let mut multiplier = 1.0;
    let applied = collection.apply_all(
        ModifierKind::TempStatStageBooster,
        &mut ModifierArgs::TempStatStage {
            stat: TempBattleStat::Spe,
            multiplier: &mut multiplier,
        },
        &mut ctx,
    );
    assert!(applied.is_empty());
    assert_eq!(multiplier, 1.0);
}

#[test]
fn held_items_only_apply_to_their_holder() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut collection = collection_of(
        &modifiers,
        &[
            ("LEFTOVERS", ModifierTarget::Combatant(1)),
            ("LEFTOVERS", ModifierTarget::Combatant(1)),
            ("LEFTOVERS", ModifierTarget::Combatant(2)),
        ],
    );
    let mut prng = SeededRandomNumberGenerator::new(Some(0));
    let mut ctx = ApplyContext::new(&modifiers.config, &mut prng);

    let mut holder = TestCombatant::new(1, "snorlax").with_hp(10, 160);
    let applied = collection.apply_all(
        ModifierKind::TurnHeal,
        &mut ModifierArgs::Combatant(&mut holder),
        &mut ctx,
    );
    pretty_assertions::assert_eq!(applied, vec!["LEFTOVERS"]);
    assert_eq!(holder.hp, 30);

    let mut bystander = TestCombatant::new(3, "pikachu").with_hp(10, 160);
    let applied = collection.apply_all(
        ModifierKind::TurnHeal,
        &mut ModifierArgs::Combatant(&mut bystander),
        &mut ctx,
    );
    assert!(applied.is_empty());
    assert_eq!(bystander.hp, 10);
}

#[test]
fn abstract_kinds_dispatch_to_every_member() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut collection = collection_of(
        &modifiers,
        &[
            ("LEFTOVERS", ModifierTarget::Combatant(1)),
            ("EXP_CHARM", ModifierTarget::Party),
            ("SHELL_BELL", ModifierTarget::Combatant(1)),
        ],
    );
    let mut prng = SeededRandomNumberGenerator::new(Some(0));
    let mut ctx = ApplyContext::new(&modifiers.config, &mut prng);

    let mut holder = TestCombatant::new(1, "snorlax").with_hp(10, 160);
    holder.damage_dealt_this_turn = 80;
    let applied = collection.apply_all(
        ModifierKind::PokemonHeldItem,
        &mut ModifierArgs::Combatant(&mut holder),
        &mut ctx,
    );
    pretty_assertions::assert_eq!(applied, vec!["LEFTOVERS", "SHELL_BELL"]);
    // 160 / 16 from leftovers, then 80 / 8 from the shell bell
    assert_eq!(holder.hp, 30);
}

#[test]
fn attack_type_booster_matches_move_type() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let ctx = StackContext::without_combatants(&modifiers.config);
    let mut collection = ModifierCollection::new();
    assert!(collection.add(
        modifiers
            .generated("ATTACK_TYPE_BOOSTER", &["Fire"], &ModifierTarget::Combatant(1))
            .unwrap(),
        false,
        &ctx
    ));

    let mut prng = SeededRandomNumberGenerator::new(Some(0));
    let mut ctx = ApplyContext::new(&modifiers.config, &mut prng);
    let mut holder = TestCombatant::new(1, "charmander");

    let mut power = 100.0;
    collection.apply_all(
        ModifierKind::AttackTypeBooster,
        &mut ModifierArgs::MovePower {
            combatant: &mut holder,
            move_type: PokemonType::Water,
            power: &mut power,
        },
        &mut ctx,
    );
    assert_eq!(power, 100.0);

    collection.apply_all(
        ModifierKind::AttackTypeBooster,
        &mut ModifierArgs::MovePower {
            combatant: &mut holder,
            move_type: PokemonType::Fire,
            power: &mut power,
        },
        &mut ctx,
    );
    assert!(power > 100.0);
}

#[test]
fn enemy_damage_tokens_compound_per_stack() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut collection = collection_of(
        &modifiers,
        &[
            ("ENEMY_DAMAGE_BOOSTER", ModifierTarget::Party),
            ("ENEMY_DAMAGE_BOOSTER", ModifierTarget::Party),
        ],
    );
    let mut prng = SeededRandomNumberGenerator::new(Some(0));
    let mut ctx = ApplyContext::new(&modifiers.config, &mut prng);

    let mut damage = 100.0;
    collection.apply_all(
        ModifierKind::EnemyDamageMultiplier,
        &mut ModifierArgs::Number(&mut damage),
        &mut ctx,
    );
    // floor(100 * 1.05^2)
    assert_eq!(damage, 110.0);
}

#[test]
fn presence_flags_apply_without_arguments() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut collection = collection_of(&modifiers, &[("MAP", ModifierTarget::Party)]);
    let mut prng = SeededRandomNumberGenerator::new(Some(0));
    let mut ctx = ApplyContext::new(&modifiers.config, &mut prng);

    pretty_assertions::assert_eq!(
        collection.apply_all(ModifierKind::Map, &mut ModifierArgs::None, &mut ctx),
        vec!["MAP"]
    );
    assert!(
        collection
            .apply_all(ModifierKind::MegaEvolutionAccess, &mut ModifierArgs::None, &mut ctx)
            .is_empty()
    );
}
