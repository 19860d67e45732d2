use ahash::HashMap;
use rogue_modifiers::{
    Combatant,
    CombatantId,
    common::Id,
    data::{
        BattleStat,
        Nature,
        PokemonType,
        Stat,
        StatusEffect,
    },
};

/// A move slot of a [`TestCombatant`].
#[derive(Debug, Clone, PartialEq)]
pub struct TestMove {
    pub move_type: PokemonType,
    pub max_pp: u32,
    pub pp_used: u32,
    pub pp_ups: u32,
}

impl TestMove {
    pub fn new(move_type: PokemonType, max_pp: u32) -> Self {
        Self {
            move_type,
            max_pp,
            pp_used: 0,
            pp_ups: 0,
        }
    }
}

/// An in-memory combatant for tests.
///
/// Every mutation the engine makes is recorded in a public field, so tests can assert on it
/// directly.
#[derive(Debug, Clone)]
pub struct TestCombatant {
    pub id: CombatantId,
    pub player: bool,
    pub hp: u32,
    pub max_hp: u32,
    pub status: Option<StatusEffect>,
    pub stat_stages: HashMap<BattleStat, i8>,
    pub crit_boosts: u32,
    pub ivs: HashMap<Stat, u32>,
    pub species: Id,
    pub fusion_species: Option<Id>,
    pub unevolved: bool,
    pub fusion_unevolved: Option<bool>,
    pub damage_dealt_this_turn: u32,
    pub took_super_effective_hit: bool,
    pub moves: Vec<TestMove>,
    pub nature: Nature,
    pub level: u32,
    pub friendship: i32,
    pub types: Vec<PokemonType>,
    pub learned_moves: Vec<Id>,
    pub remembered_moves: Vec<usize>,
    pub evolution_items: Vec<Id>,
    pub fused_with: Option<CombatantId>,
    pub form_changes: Vec<(Id, bool)>,
}

impl TestCombatant {
    /// A healthy level 50 player combatant with perfect IVs.
    pub fn new(id: CombatantId, species: &str) -> Self {
        Self {
            id,
            player: true,
            hp: 100,
            max_hp: 100,
            status: None,
            stat_stages: HashMap::default(),
            crit_boosts: 0,
            ivs: Stat::ALL.into_iter().map(|stat| (stat, 31)).collect(),
            species: Id::from(species),
            fusion_species: None,
            unevolved: false,
            fusion_unevolved: None,
            damage_dealt_this_turn: 0,
            took_super_effective_hit: false,
            moves: Vec::new(),
            nature: Nature::Hardy,
            level: 50,
            friendship: 0,
            types: vec![PokemonType::Normal],
            learned_moves: Vec::new(),
            remembered_moves: Vec::new(),
            evolution_items: Vec::new(),
            fused_with: None,
            form_changes: Vec::new(),
        }
    }

    pub fn enemy(mut self) -> Self {
        self.player = false;
        self
    }

    pub fn with_hp(mut self, hp: u32, max_hp: u32) -> Self {
        self.hp = hp;
        self.max_hp = max_hp;
        self
    }

    pub fn with_status(mut self, status: StatusEffect) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_iv(mut self, stat: Stat, iv: u32) -> Self {
        self.ivs.insert(stat, iv);
        self
    }

    pub fn with_types(mut self, types: &[PokemonType]) -> Self {
        self.types = types.to_vec();
        self
    }

    pub fn with_move(mut self, test_move: TestMove) -> Self {
        self.moves.push(test_move);
        self
    }

    pub fn with_fusion(mut self, species: &str, unevolved: bool) -> Self {
        self.fusion_species = Some(Id::from(species));
        self.fusion_unevolved = Some(unevolved);
        self
    }

    pub fn unevolved(mut self) -> Self {
        self.unevolved = true;
        self
    }
}

impl Combatant for TestCombatant {
    fn id(&self) -> CombatantId {
        self.id
    }

    fn is_player(&self) -> bool {
        self.player
    }

    fn hp(&self) -> u32 {
        self.hp
    }

    fn max_hp(&self) -> u32 {
        self.max_hp
    }

    fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp);
    }

    fn status(&self) -> Option<StatusEffect> {
        self.status
    }

    fn try_set_status(&mut self, status: StatusEffect) -> bool {
        if self.status.is_some() || self.is_fainted() {
            return false;
        }
        self.status = Some(status);
        true
    }

    fn reset_status(&mut self) {
        self.status = None;
    }

    fn stat_stage(&self, stat: BattleStat) -> i8 {
        self.stat_stages.get(&stat).copied().unwrap_or(0)
    }

    fn set_stat_stage(&mut self, stat: BattleStat, stage: i8) {
        self.stat_stages.insert(stat, stage);
    }

    fn boost_crit_stage(&mut self) -> bool {
        self.crit_boosts += 1;
        true
    }

    fn iv(&self, stat: Stat) -> u32 {
        self.ivs.get(&stat).copied().unwrap_or(0)
    }

    fn species(&self) -> &Id {
        &self.species
    }

    fn fusion_species(&self) -> Option<&Id> {
        self.fusion_species.as_ref()
    }

    fn is_unevolved(&self) -> bool {
        self.unevolved
    }

    fn fusion_is_unevolved(&self) -> Option<bool> {
        self.fusion_unevolved
    }

    fn damage_dealt_this_turn(&self) -> u32 {
        self.damage_dealt_this_turn
    }

    fn took_super_effective_hit(&self) -> bool {
        self.took_super_effective_hit
    }

    fn move_count(&self) -> usize {
        self.moves.len()
    }

    fn pp_used(&self, move_index: usize) -> u32 {
        self.moves
            .get(move_index)
            .map_or(0, |test_move| test_move.pp_used)
    }

    fn set_pp_used(&mut self, move_index: usize, pp_used: u32) {
        if let Some(test_move) = self.moves.get_mut(move_index) {
            test_move.pp_used = pp_used;
        }
    }

    fn max_pp(&self, move_index: usize) -> u32 {
        self.moves
            .get(move_index)
            .map_or(0, |test_move| test_move.max_pp)
    }

    fn pp_ups(&self, move_index: usize) -> u32 {
        self.moves
            .get(move_index)
            .map_or(0, |test_move| test_move.pp_ups)
    }

    fn set_pp_ups(&mut self, move_index: usize, pp_ups: u32) {
        if let Some(test_move) = self.moves.get_mut(move_index) {
            test_move.pp_ups = pp_ups;
        }
    }

    fn set_nature(&mut self, nature: Nature) {
        self.nature = nature;
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    fn add_friendship(&mut self, amount: i32) {
        self.friendship += amount;
    }

    fn types(&self) -> Vec<PokemonType> {
        self.types.clone()
    }

    fn move_types(&self) -> Vec<PokemonType> {
        self.moves
            .iter()
            .map(|test_move| test_move.move_type)
            .collect()
    }

    fn learn_move(&mut self, move_id: &Id) -> bool {
        if self.learned_moves.contains(move_id) {
            return false;
        }
        self.learned_moves.push(move_id.clone());
        true
    }

    fn remember_level_move(&mut self, level_move_index: usize) -> bool {
        self.remembered_moves.push(level_move_index);
        true
    }

    fn try_evolve(&mut self, item: &Id) -> bool {
        if !self.unevolved {
            return false;
        }
        self.evolution_items.push(item.clone());
        self.unevolved = false;
        true
    }

    fn fuse(&mut self, other: CombatantId) -> bool {
        if self.fused_with.is_some() || other == self.id {
            return false;
        }
        self.fused_with = Some(other);
        true
    }

    fn trigger_form_change(&mut self, item: &Id, active: bool) -> bool {
        self.form_changes.push((item.clone(), active));
        true
    }
}
