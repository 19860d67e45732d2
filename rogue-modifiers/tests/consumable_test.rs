use rogue_modifiers::{
    ApplyContext,
    ModifierCollection,
    ModifierTarget,
    StackContext,
    data::{
        PokeballType,
        PokemonType,
        StatusEffect,
    },
};
use rogue_prng::SeededRandomNumberGenerator;
use rogue_test_utils::{
    TestCombatant,
    TestModifiers,
    TestMove,
    TestSession,
    setup_test_environment,
};

fn boosters(modifiers: &TestModifiers, ids: &[&str]) -> ModifierCollection {
    let ctx = StackContext::without_combatants(&modifiers.config);
    let mut collection = ModifierCollection::new();
    for id in ids {
        assert!(collection.add(
            modifiers.persistent(id, &ModifierTarget::Party).unwrap(),
            false,
            &ctx
        ));
    }
    collection
}

/// Uses a consumable on combatant 1 and returns whether it applied.
fn use_on(
    modifiers: &TestModifiers,
    collection: &mut ModifierCollection,
    id: &str,
    target: ModifierTarget,
    combatant: &mut TestCombatant,
    session: &mut TestSession,
) -> bool {
    let mut consumable = modifiers.consumable(id, &target).unwrap();
    let mut prng = SeededRandomNumberGenerator::new(Some(0));
    let mut ctx = ApplyContext::new(&modifiers.config, &mut prng);
    collection.use_consumable(&mut consumable, Some(combatant), session, &mut ctx)
}

#[test]
fn potion_is_boosted_by_healing_charm() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut session = TestSession::new();

    let mut collection = boosters(&modifiers, &[]);
    let mut combatant = TestCombatant::new(1, "snorlax").with_hp(10, 100);
    assert!(use_on(
        &modifiers,
        &mut collection,
        "POTION",
        ModifierTarget::Combatant(1),
        &mut combatant,
        &mut session,
    ));
    assert_eq!(combatant.hp, 30);

    let mut collection = boosters(&modifiers, &["HEALING_CHARM"]);
    let mut combatant = TestCombatant::new(1, "snorlax").with_hp(10, 100);
    assert!(use_on(
        &modifiers,
        &mut collection,
        "POTION",
        ModifierTarget::Combatant(1),
        &mut combatant,
        &mut session,
    ));
    assert_eq!(combatant.hp, 32);
}

#[test]
fn pokemon_consumables_only_apply_to_their_player_target() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut session = TestSession::new();
    let mut collection = boosters(&modifiers, &[]);

    let mut other = TestCombatant::new(2, "snorlax").with_hp(10, 100);
    assert!(!use_on(
        &modifiers,
        &mut collection,
        "POTION",
        ModifierTarget::Combatant(1),
        &mut other,
        &mut session,
    ));
    assert_eq!(other.hp, 10);

    let mut enemy = TestCombatant::new(1, "snorlax").enemy().with_hp(10, 100);
    assert!(!use_on(
        &modifiers,
        &mut collection,
        "POTION",
        ModifierTarget::Combatant(1),
        &mut enemy,
        &mut session,
    ));
    assert_eq!(enemy.hp, 10);

    let mut prng = SeededRandomNumberGenerator::new(Some(0));
    let mut ctx = ApplyContext::new(&modifiers.config, &mut prng);
    let mut potion = modifiers
        .consumable("POTION", &ModifierTarget::Combatant(1))
        .unwrap();
    assert!(!collection.use_consumable(&mut potion, None, &mut session, &mut ctx));
}

#[test]
fn revives_only_apply_to_fainted_combatants() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut session = TestSession::new();
    let mut collection = boosters(&modifiers, &[]);

    let mut fainted = TestCombatant::new(1, "snorlax").with_hp(0, 100);
    assert!(!use_on(
        &modifiers,
        &mut collection,
        "POTION",
        ModifierTarget::Combatant(1),
        &mut fainted,
        &mut session,
    ));
    assert!(use_on(
        &modifiers,
        &mut collection,
        "REVIVE",
        ModifierTarget::Combatant(1),
        &mut fainted,
        &mut session,
    ));
    assert_eq!(fainted.hp, 50);
    assert!(!use_on(
        &modifiers,
        &mut collection,
        "REVIVE",
        ModifierTarget::Combatant(1),
        &mut fainted,
        &mut session,
    ));
}

#[test]
fn full_restore_heals_status() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut session = TestSession::new();
    let mut collection = boosters(&modifiers, &[]);

    let mut combatant = TestCombatant::new(1, "snorlax")
        .with_hp(10, 100)
        .with_status(StatusEffect::Burn);
    assert!(use_on(
        &modifiers,
        &mut collection,
        "FULL_RESTORE",
        ModifierTarget::Combatant(1),
        &mut combatant,
        &mut session,
    ));
    assert_eq!(combatant.hp, 100);
    assert_eq!(combatant.status, None);
}

#[test]
fn money_rewards_are_multiplied() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut session = TestSession::new().with_wave_money(1000);
    let mut collection = boosters(&modifiers, &["AMULET_COIN"]);

    let mut nugget = modifiers
        .consumable("NUGGET", &ModifierTarget::Party)
        .unwrap();
    let mut prng = SeededRandomNumberGenerator::new(Some(0));
    let mut ctx = ApplyContext::new(&modifiers.config, &mut prng);
    assert!(collection.use_consumable(&mut nugget, None, &mut session, &mut ctx));
    assert_eq!(session.money, 1200);
}

#[test]
fn pokeballs_are_capped() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut session = TestSession::new();
    session.pokeballs.insert(PokeballType::PokeBall, 97);
    let mut collection = boosters(&modifiers, &[]);

    let mut pokeballs = modifiers
        .consumable("POKEBALL", &ModifierTarget::Party)
        .unwrap();
    let mut prng = SeededRandomNumberGenerator::new(Some(0));
    let mut ctx = ApplyContext::new(&modifiers.config, &mut prng);
    assert!(collection.use_consumable(&mut pokeballs, None, &mut session, &mut ctx));
    assert_eq!(session.pokeballs.get(&PokeballType::PokeBall), Some(&99));
}

#[test]
fn rare_candy_is_boosted_by_candy_jar() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut session = TestSession::new();
    let mut collection = boosters(&modifiers, &["CANDY_JAR", "CANDY_JAR"]);

    let mut combatant = TestCombatant::new(1, "snorlax");
    assert!(use_on(
        &modifiers,
        &mut collection,
        "RARE_CANDY",
        ModifierTarget::Combatant(1),
        &mut combatant,
        &mut session,
    ));
    assert_eq!(combatant.level, 53);
    assert_eq!(combatant.friendship, 5);
}

#[test]
fn move_consumables_target_one_move() {
    setup_test_environment();
    let modifiers = TestModifiers::new();
    let mut session = TestSession::new();
    let mut collection = boosters(&modifiers, &[]);

    assert!(
        modifiers
            .consumable("ETHER", &ModifierTarget::Combatant(1))
            .is_err()
    );

    let mut tired_move = TestMove::new(PokemonType::Normal, 20);
    tired_move.pp_used = 15;
    let mut combatant = TestCombatant::new(1, "snorlax")
        .with_move(tired_move.clone())
        .with_move(tired_move);

    assert!(use_on(
        &modifiers,
        &mut collection,
        "ETHER",
        ModifierTarget::CombatantMove(1, 1),
        &mut combatant,
        &mut session,
    ));
    assert_eq!(combatant.moves[0].pp_used, 15);
    assert_eq!(combatant.moves[1].pp_used, 5);

    assert!(use_on(
        &modifiers,
        &mut collection,
        "MAX_ETHER",
        ModifierTarget::CombatantMove(1, 0),
        &mut combatant,
        &mut session,
    ));
    assert_eq!(combatant.moves[0].pp_used, 0);

    assert!(!use_on(
        &modifiers,
        &mut collection,
        "ETHER",
        ModifierTarget::CombatantMove(1, 4),
        &mut combatant,
        &mut session,
    ));

    combatant.moves[0].pp_ups = 2;
    assert!(use_on(
        &modifiers,
        &mut collection,
        "PP_MAX",
        ModifierTarget::CombatantMove(1, 0),
        &mut combatant,
        &mut session,
    ));
    assert_eq!(combatant.moves[0].pp_ups, 3);
}
