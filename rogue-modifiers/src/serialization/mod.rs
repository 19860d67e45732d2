//! Save-file records for persistent modifiers.
//!
//! A record names the modifier's type, its class, and the ordered constructor arguments of the
//! class. Loading looks the class up in a fixed constructor table; nothing is resolved by
//! reflection.

mod adapter;
mod arg_reader;
mod constructors;
mod record;

pub use adapter::{
    LoadContext,
    from_record,
    load_collection,
    load_store,
    save_collection,
    save_store,
    to_record,
};
pub use record::ModifierRecord;
