use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A kind of ball the session keeps a count of.
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
pub enum PokeballType {
    #[string = "Poke Ball"]
    PokeBall,
    #[string = "Great Ball"]
    GreatBall,
    #[string = "Ultra Ball"]
    UltraBall,
    #[string = "Rogue Ball"]
    RogueBall,
    #[string = "Master Ball"]
    MasterBall,
}
