use anyhow::Result;

use crate::{
    combatant::CombatantId,
    error::general_error,
    modifier::ModifierOwner,
};

/// What a new modifier is being created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierTarget {
    /// The whole party; held items created for the party belong to any combatant.
    Party,
    Combatant(CombatantId),
    /// A combatant and one of its move slots.
    CombatantMove(CombatantId, usize),
    /// A combatant and another combatant it interacts with.
    CombatantPair(CombatantId, CombatantId),
    /// A combatant and an index into its level-up learnset.
    LevelMove(CombatantId, usize),
}

impl ModifierTarget {
    pub fn combatant(&self) -> Option<CombatantId> {
        match self {
            Self::Party => None,
            Self::Combatant(id)
            | Self::CombatantMove(id, _)
            | Self::CombatantPair(id, _)
            | Self::LevelMove(id, _) => Some(*id),
        }
    }

    pub fn owner(&self) -> ModifierOwner {
        match self.combatant() {
            Some(id) => ModifierOwner::Combatant(id),
            None => ModifierOwner::Any,
        }
    }

    pub fn move_index(&self) -> Result<usize> {
        match self {
            Self::CombatantMove(_, index) => Ok(*index),
            _ => Err(general_error(format!("{self:?} does not name a move slot"))),
        }
    }

    pub fn level_move_index(&self) -> Result<usize> {
        match self {
            Self::LevelMove(_, index) => Ok(*index),
            _ => Err(general_error(format!("{self:?} does not name a level move"))),
        }
    }

    pub fn other(&self) -> Result<CombatantId> {
        match self {
            Self::CombatantPair(_, other) => Ok(*other),
            _ => Err(general_error(format!("{self:?} does not name a second combatant"))),
        }
    }
}
