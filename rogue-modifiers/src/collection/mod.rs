mod collection;
mod store;
mod transfer;

pub use collection::ModifierCollection;
pub use store::ModifierStore;
pub use transfer::{
    TransferRequest,
    apply_held_item_transfers,
    try_transfer_held_item,
};
