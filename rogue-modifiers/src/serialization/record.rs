use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

/// The persisted form of one modifier in a save file.
///
/// Field names are part of the save format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierRecord {
    /// The registered type id. Generated types record their generator's id.
    pub type_id: String,
    /// Arguments that regenerate the same concrete type from a generator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_pregen_args: Option<Vec<Value>>,
    /// Ordered constructor arguments following the type.
    pub args: Vec<Value>,
    /// Persisted stacks only; virtual stacks are never saved.
    pub stack_count: u32,
    pub class_name: String,
    /// Whether the modifier belongs to the player's side.
    pub player: bool,
}

#[cfg(test)]
mod record_test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::serialization::ModifierRecord;

    #[test]
    fn uses_save_file_field_names() {
        let record = ModifierRecord {
            type_id: "BERRY".to_owned(),
            type_pregen_args: Some(vec![json!("Sitrus")]),
            args: vec![json!(3), json!("Sitrus")],
            stack_count: 2,
            class_name: "BerryModifier".to_owned(),
            player: true,
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "typeId": "BERRY",
                "typePregenArgs": ["Sitrus"],
                "args": [3, "Sitrus"],
                "stackCount": 2,
                "className": "BerryModifier",
                "player": true,
            })
        );
    }

    #[test]
    fn omits_missing_pregen_args() {
        let record = ModifierRecord {
            type_id: "LEFTOVERS".to_owned(),
            type_pregen_args: None,
            args: vec![json!(1)],
            stack_count: 1,
            class_name: "TurnHealModifier".to_owned(),
            player: false,
        };
        let serialized = serde_json::to_string(&record).unwrap();
        assert!(!serialized.contains("typePregenArgs"));

        let parsed = serde_json::from_str::<ModifierRecord>(
            r#"{"typeId":"LEFTOVERS","args":[1],"stackCount":1,"className":"TurnHealModifier","player":false}"#,
        )
        .unwrap();
        assert_eq!(parsed, record);
    }
}
