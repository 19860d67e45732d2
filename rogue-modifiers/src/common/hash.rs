use std::collections::{
    HashMap,
    HashSet,
};

/// Hash map used across the engine.
pub type FastHashMap<K, V> = HashMap<K, V, ahash::RandomState>;
/// Hash set used across the engine.
pub type FastHashSet<V> = HashSet<V, ahash::RandomState>;
