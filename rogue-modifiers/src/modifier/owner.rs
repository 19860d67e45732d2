use std::fmt::{
    self,
    Display,
};

use crate::combatant::CombatantId;

/// The combatant a held item or pokemon consumable is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModifierOwner {
    /// Applies regardless of which combatant is active.
    Any,
    Combatant(CombatantId),
}

impl ModifierOwner {
    /// The sentinel used for [`ModifierOwner::Any`] in save records.
    pub const ANY_ARG: i64 = -1;

    /// Does this owner accept events for the given combatant?
    ///
    /// An event with no combatant is accepted by every owner.
    pub fn accepts(&self, combatant: Option<CombatantId>) -> bool {
        match (self, combatant) {
            (Self::Any, _) | (_, None) => true,
            (Self::Combatant(owner), Some(combatant)) => *owner == combatant,
        }
    }

    pub fn combatant(&self) -> Option<CombatantId> {
        match self {
            Self::Any => None,
            Self::Combatant(id) => Some(*id),
        }
    }

    /// The key used when ordering a collection, with unowned entries first.
    pub fn sort_key(&self) -> i64 {
        self.to_arg()
    }

    pub fn to_arg(&self) -> i64 {
        match self {
            Self::Any => Self::ANY_ARG,
            Self::Combatant(id) => *id as i64,
        }
    }

    /// Decodes an owner argument; negative values mean [`ModifierOwner::Any`].
    pub fn from_arg(value: i64) -> Option<Self> {
        if value < 0 {
            return Some(Self::Any);
        }
        CombatantId::try_from(value).ok().map(Self::Combatant)
    }
}

impl From<CombatantId> for ModifierOwner {
    fn from(value: CombatantId) -> Self {
        Self::Combatant(value)
    }
}

impl Display for ModifierOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Combatant(id) => write!(f, "{id}"),
        }
    }
}
