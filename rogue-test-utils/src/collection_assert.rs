use itertools::Itertools;
use rogue_modifiers::ModifierCollection;

/// Asserts the type ids of a collection, in collection order.
#[track_caller]
pub fn assert_type_ids(collection: &ModifierCollection, want: &[&str]) {
    let got = collection
        .iter()
        .map(|modifier| modifier.type_id())
        .collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, want)
}

/// Asserts the persisted stack counts of a collection as `type_id:count` pairs, in collection
/// order.
#[track_caller]
pub fn assert_stack_counts(collection: &ModifierCollection, want: &str) {
    let got = collection
        .iter()
        .map(|modifier| format!("{}:{}", modifier.type_id(), modifier.stack_count()))
        .join(",");
    pretty_assertions::assert_eq!(got, want)
}
