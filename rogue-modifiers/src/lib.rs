//! # rogue-modifiers
//!
//! **rogue-modifiers** is the persistent item and effect engine of a roguelike monster battler.
//!
//! Every consumable, held item, and passive battle-wide effect is represented as a
//! [`Modifier`][`crate::modifier::Modifier`]: a stackable, serializable unit of state that merges
//! with matching entries of a [`ModifierCollection`][`crate::collection::ModifierCollection`] and
//! is triggered through one uniform `should_apply`/`apply` contract.
//!
//! The engine never owns battle state. Combatants, the session wallet, and the random source are
//! supplied by the caller for every operation.

extern crate alloc;

pub mod collection;
pub mod combatant;
pub mod common;
pub mod config;
pub mod data;
pub mod error;
pub mod modifier;
pub mod modifier_type;
pub mod serialization;

pub use collection::{
    ModifierCollection,
    ModifierStore,
    TransferRequest,
};
pub use combatant::{
    Combatant,
    CombatantId,
    CombatantProvider,
    NoCombatants,
    Session,
};
pub use config::{
    BalanceConfig,
    EngineOptions,
};
pub use modifier::{
    ApplyContext,
    Behavior,
    ConsumableModifier,
    Modifier,
    ModifierArgs,
    ModifierKind,
    ModifierOwner,
    PersistentModifier,
    StackContext,
};
pub use modifier_type::{
    GeneratorContext,
    ModifierTarget,
    ModifierType,
    ModifierTypeFactory,
    ModifierTypeGenerator,
    ModifierTypeRegistry,
};
pub use serialization::{
    LoadContext,
    ModifierRecord,
    load_collection,
    save_collection,
};
