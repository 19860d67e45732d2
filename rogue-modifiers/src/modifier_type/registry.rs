use std::sync::Arc;

use anyhow::Result;
use itertools::Itertools;
use serde_json::Value;

use crate::{
    common::FastHashMap,
    error::{
        WrapOptionError,
        general_error,
    },
    modifier_type::{
        GeneratorContext,
        ModifierType,
        ModifierTypeGenerator,
    },
};

/// A registered way of producing a type descriptor.
#[derive(Clone)]
pub enum ModifierTypeFactory {
    Type(Arc<dyn Fn() -> ModifierType + Send + Sync>),
    Generator(Arc<ModifierTypeGenerator>),
}

impl ModifierTypeFactory {
    pub fn is_generator(&self) -> bool {
        matches!(self, Self::Generator(_))
    }
}

/// Maps stable type ids to the factories that produce their descriptors.
///
/// The registry holds no mutable game state. The id a factory is registered under is the id of
/// every type it produces.
#[derive(Clone, Default)]
pub struct ModifierTypeRegistry {
    factories: FastHashMap<String, ModifierTypeFactory>,
}

impl ModifierTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_type<I, F>(&mut self, id: I, factory: F)
    where
        I: Into<String>,
        F: Fn() -> ModifierType + Send + Sync + 'static,
    {
        self.factories
            .insert(id.into(), ModifierTypeFactory::Type(Arc::new(factory)));
    }

    pub fn register_generator(&mut self, generator: ModifierTypeGenerator) {
        self.factories.insert(
            generator.id.clone(),
            ModifierTypeFactory::Generator(Arc::new(generator)),
        );
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Every registered id, sorted.
    pub fn ids(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).sorted().collect()
    }

    pub fn factory(&self, id: &str) -> Result<ModifierTypeFactory> {
        self.factories
            .get(id)
            .cloned()
            .wrap_not_found_error_with_format(format_args!("modifier type {id}"))
    }

    /// Resolves an id to a concrete type descriptor.
    ///
    /// Generators use `pregen_args` when given and otherwise choose from the context.
    pub fn resolve(
        &self,
        id: &str,
        pregen_args: Option<&[Value]>,
        ctx: &mut GeneratorContext,
    ) -> Result<ModifierType> {
        match self.factory(id)? {
            ModifierTypeFactory::Type(factory) => {
                let mut modifier_type = factory();
                modifier_type.id = id.to_owned();
                Ok(modifier_type)
            }
            ModifierTypeFactory::Generator(generator) => generator
                .generate(ctx, pregen_args)?
                .ok_or_else(|| general_error(format!("generator {id} produced no type"))),
        }
    }
}
