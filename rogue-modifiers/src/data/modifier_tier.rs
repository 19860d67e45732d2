use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The rarity tier of a modifier type.
///
/// Tiers are ordered from least to most valuable.
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
pub enum ModifierTier {
    #[string = "Common"]
    Common,
    #[string = "Great"]
    Great,
    #[string = "Ultra"]
    Ultra,
    #[string = "Rogue"]
    Rogue,
    #[string = "Master"]
    Master,
    #[string = "Luxury"]
    Luxury,
}
