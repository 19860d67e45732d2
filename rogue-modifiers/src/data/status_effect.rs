use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A non-volatile status condition.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum StatusEffect {
    #[string = "psn"]
    Poison,
    #[string = "tox"]
    Toxic,
    #[string = "par"]
    Paralysis,
    #[string = "slp"]
    Sleep,
    #[string = "frz"]
    Freeze,
    #[string = "brn"]
    Burn,
}
