mod args;
pub(crate) mod berry;
mod consumable;
mod context;
mod enemy;
mod held_item;
mod kind;
mod lapsing;
mod modifier;
mod owner;
mod party;
mod persistent;

pub use args::ModifierArgs;
pub use consumable::{
    ConsumableEffect,
    ConsumableModifier,
};
pub use context::{
    ApplyContext,
    StackContext,
};
pub use enemy::EnemyEffect;
pub use held_item::{
    HeldItemEffect,
    HeldItemModifier,
};
pub use kind::ModifierKind;
pub use lapsing::{
    BattleCountdown,
    LapsingEffect,
    LapsingMergePolicy,
    LapsingModifier,
};
pub use modifier::Modifier;
pub use owner::ModifierOwner;
pub use party::PartyEffect;
pub use persistent::{
    Behavior,
    PersistentModifier,
};
