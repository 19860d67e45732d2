use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A berry that can be held and eaten in battle.
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
pub enum BerryType {
    #[string = "Sitrus"]
    Sitrus,
    #[string = "Lum"]
    Lum,
    #[string = "Enigma"]
    Enigma,
    #[string = "Liechi"]
    Liechi,
    #[string = "Ganlon"]
    Ganlon,
    #[string = "Petaya"]
    Petaya,
    #[string = "Apicot"]
    Apicot,
    #[string = "Salac"]
    Salac,
    #[string = "Lansat"]
    Lansat,
    #[string = "Starf"]
    Starf,
    #[string = "Leppa"]
    Leppa,
}

impl BerryType {
    pub const ALL: [BerryType; 11] = [
        BerryType::Sitrus,
        BerryType::Lum,
        BerryType::Enigma,
        BerryType::Liechi,
        BerryType::Ganlon,
        BerryType::Petaya,
        BerryType::Apicot,
        BerryType::Salac,
        BerryType::Lansat,
        BerryType::Starf,
        BerryType::Leppa,
    ];
}
