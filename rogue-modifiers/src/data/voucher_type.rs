use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A kind of egg voucher.
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
pub enum VoucherType {
    #[string = "Regular"]
    Regular,
    #[string = "Plus"]
    Plus,
    #[string = "Premium"]
    Premium,
    #[string = "Golden"]
    Golden,
}
