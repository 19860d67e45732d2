//! Game data enums referenced by modifier arguments.

mod berry_type;
mod modifier_tier;
mod nature;
mod pokeball_type;
mod pokemon_type;
mod stat;
mod status_effect;
mod voucher_type;

pub use berry_type::BerryType;
pub use modifier_tier::ModifierTier;
pub use nature::Nature;
pub use pokeball_type::PokeballType;
pub use pokemon_type::PokemonType;
pub use stat::{
    BattleStat,
    Stat,
    StatTable,
    TempBattleStat,
};
pub use status_effect::StatusEffect;
pub use voucher_type::VoucherType;
