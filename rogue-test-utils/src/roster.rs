use rogue_modifiers::{
    Combatant,
    CombatantId,
    CombatantProvider,
};

use crate::TestCombatant;

/// An in-memory roster of both sides of the field, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TestRoster {
    combatants: Vec<TestCombatant>,
}

impl TestRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, combatant: TestCombatant) -> Self {
        self.add(combatant);
        self
    }

    /// Adds a combatant, replacing any combatant with the same id.
    pub fn add(&mut self, combatant: TestCombatant) {
        self.remove(combatant.id);
        self.combatants.push(combatant);
    }

    pub fn remove(&mut self, id: CombatantId) -> Option<TestCombatant> {
        let index = self
            .combatants
            .iter()
            .position(|combatant| combatant.id == id)?;
        Some(self.combatants.remove(index))
    }

    pub fn get(&self, id: CombatantId) -> Option<&TestCombatant> {
        self.combatants.iter().find(|combatant| combatant.id == id)
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut TestCombatant> {
        self.combatants
            .iter_mut()
            .find(|combatant| combatant.id == id)
    }
}

impl CombatantProvider for TestRoster {
    fn combatant(&self, id: CombatantId) -> Option<&dyn Combatant> {
        self.get(id).map(|combatant| combatant as &dyn Combatant)
    }

    fn party(&self, player: bool) -> Vec<CombatantId> {
        self.combatants
            .iter()
            .filter(|combatant| combatant.player == player)
            .map(|combatant| combatant.id)
            .collect()
    }
}
