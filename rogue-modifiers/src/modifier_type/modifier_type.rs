use std::{
    fmt::{
        self,
        Debug,
    },
    sync::Arc,
};

use anyhow::Result;
use serde_json::Value;

use crate::{
    data::ModifierTier,
    error::general_error,
    modifier::Modifier,
    modifier_type::ModifierTarget,
};

/// Creates a modifier of a type for a target.
pub type ModifierFactory =
    Arc<dyn Fn(&Arc<ModifierType>, &ModifierTarget) -> Result<Modifier> + Send + Sync>;

/// The immutable description shared by every instance of one item.
///
/// Types produced by a [`ModifierTypeGenerator`][`crate::modifier_type::ModifierTypeGenerator`]
/// carry the generator's id as their `id`, the concrete item's id as `generator_id`, and the
/// arguments needed to generate them again as `pregen_args`.
#[derive(Clone)]
pub struct ModifierType {
    pub id: String,
    pub generator_id: Option<String>,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub tier: Option<ModifierTier>,
    pub pregen_args: Option<Vec<Value>>,
    factory: ModifierFactory,
}

impl ModifierType {
    /// Creates a type that cannot create modifiers until a factory is attached.
    pub fn new<I, N>(id: I, name: N) -> Self
    where
        I: Into<String>,
        N: Into<String>,
    {
        let id = id.into();
        let icon = id.to_lowercase();
        Self {
            id,
            generator_id: None,
            name: name.into(),
            description: String::new(),
            icon,
            tier: None,
            pregen_args: None,
            factory: Arc::new(|modifier_type, _| {
                Err(general_error(format!(
                    "{} has no modifier factory",
                    modifier_type.id
                )))
            }),
        }
    }

    pub fn with_description<D: Into<String>>(mut self, description: D) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon<I: Into<String>>(mut self, icon: I) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_tier(mut self, tier: ModifierTier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn with_pregen_args(mut self, pregen_args: Vec<Value>) -> Self {
        self.pregen_args = Some(pregen_args);
        self
    }

    pub fn with_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&Arc<ModifierType>, &ModifierTarget) -> Result<Modifier> + Send + Sync + 'static,
    {
        self.factory = Arc::new(factory);
        self
    }

    /// Was the type produced by a generator?
    pub fn is_generated(&self) -> bool {
        self.generator_id.is_some()
    }

    /// Creates a new modifier of this type.
    pub fn new_modifier(self: &Arc<Self>, target: &ModifierTarget) -> Result<Modifier> {
        (self.factory)(self, target)
    }
}

impl Debug for ModifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierType")
            .field("id", &self.id)
            .field("generator_id", &self.generator_id)
            .field("name", &self.name)
            .field("tier", &self.tier)
            .field("pregen_args", &self.pregen_args)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ModifierType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.generator_id == other.generator_id
            && self.pregen_args == other.pregen_args
    }
}
