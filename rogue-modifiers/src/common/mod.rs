mod hash;
mod id;
pub(crate) mod test_util;

pub use hash::{
    FastHashMap,
    FastHashSet,
};
pub use id::Id;
