use std::sync::Arc;

use serde_json::Value;

use crate::{
    modifier::{
        ApplyContext,
        ConsumableModifier,
        ModifierArgs,
        ModifierKind,
        PersistentModifier,
    },
    modifier_type::ModifierType,
};

/// A single modifier instance, as produced by a modifier type.
#[derive(Debug, Clone)]
pub enum Modifier {
    /// Stored in a collection and merged with matching entries.
    Persistent(PersistentModifier),
    /// Applied once when obtained.
    Consumable(ConsumableModifier),
}

impl Modifier {
    pub fn modifier_type(&self) -> &Arc<ModifierType> {
        match self {
            Self::Persistent(modifier) => modifier.modifier_type(),
            Self::Consumable(modifier) => modifier.modifier_type(),
        }
    }

    pub fn type_id(&self) -> &str {
        &self.modifier_type().id
    }

    pub fn kind(&self) -> ModifierKind {
        match self {
            Self::Persistent(modifier) => modifier.kind(),
            Self::Consumable(modifier) => modifier.kind(),
        }
    }

    pub fn is(&self, kind: ModifierKind) -> bool {
        self.kind().is(kind)
    }

    pub fn class_name(&self) -> String {
        self.kind().class_name()
    }

    pub fn args(&self) -> Vec<Value> {
        match self {
            Self::Persistent(modifier) => modifier.args(),
            Self::Consumable(modifier) => modifier.args(),
        }
    }

    pub fn should_apply(&self, args: &ModifierArgs) -> bool {
        match self {
            Self::Persistent(modifier) => modifier.should_apply(args),
            Self::Consumable(modifier) => modifier.should_apply(args),
        }
    }

    pub fn apply(&mut self, args: &mut ModifierArgs, ctx: &mut ApplyContext) -> bool {
        match self {
            Self::Persistent(modifier) => modifier.apply(args, ctx),
            Self::Consumable(modifier) => modifier.apply(args, ctx),
        }
    }

    pub fn as_persistent(&self) -> Option<&PersistentModifier> {
        match self {
            Self::Persistent(modifier) => Some(modifier),
            Self::Consumable(_) => None,
        }
    }

    pub fn into_persistent(self) -> Option<PersistentModifier> {
        match self {
            Self::Persistent(modifier) => Some(modifier),
            Self::Consumable(_) => None,
        }
    }

    pub fn into_consumable(self) -> Option<ConsumableModifier> {
        match self {
            Self::Persistent(_) => None,
            Self::Consumable(modifier) => Some(modifier),
        }
    }
}

impl From<PersistentModifier> for Modifier {
    fn from(value: PersistentModifier) -> Self {
        Self::Persistent(value)
    }
}

impl From<ConsumableModifier> for Modifier {
    fn from(value: ConsumableModifier) -> Self {
        Self::Consumable(value)
    }
}
