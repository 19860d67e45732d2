use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A permanent stat.
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
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "Special Attack"]
    SpAtk,
    #[string = "spd"]
    #[alias = "Special Defense"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
}

impl Stat {
    /// All stats, in table order.
    pub const ALL: [Stat; 6] = [
        Stat::HP,
        Stat::Atk,
        Stat::Def,
        Stat::SpAtk,
        Stat::SpDef,
        Stat::Spe,
    ];
}

/// A stat that has an in-battle stage.
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
pub enum BattleStat {
    #[string = "atk"]
    Atk,
    #[string = "def"]
    Def,
    #[string = "spa"]
    SpAtk,
    #[string = "spd"]
    SpDef,
    #[string = "spe"]
    Spe,
    #[string = "acc"]
    #[alias = "Accuracy"]
    Accuracy,
    #[string = "eva"]
    #[alias = "Evasion"]
    Evasion,
}

impl BattleStat {
    /// All battle stats.
    pub const ALL: [BattleStat; 7] = [
        BattleStat::Atk,
        BattleStat::Def,
        BattleStat::SpAtk,
        BattleStat::SpDef,
        BattleStat::Spe,
        BattleStat::Accuracy,
        BattleStat::Evasion,
    ];
}

/// A stat that can be boosted for a number of battles by an X item.
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
pub enum TempBattleStat {
    #[string = "atk"]
    Atk,
    #[string = "def"]
    Def,
    #[string = "spa"]
    SpAtk,
    #[string = "spd"]
    SpDef,
    #[string = "spe"]
    Spe,
    #[string = "acc"]
    #[alias = "Accuracy"]
    Accuracy,
}

impl TempBattleStat {
    pub const ALL: [TempBattleStat; 6] = [
        TempBattleStat::Atk,
        TempBattleStat::Def,
        TempBattleStat::SpAtk,
        TempBattleStat::SpDef,
        TempBattleStat::Spe,
        TempBattleStat::Accuracy,
    ];
}

impl From<TempBattleStat> for BattleStat {
    fn from(value: TempBattleStat) -> Self {
        match value {
            TempBattleStat::Atk => Self::Atk,
            TempBattleStat::Def => Self::Def,
            TempBattleStat::SpAtk => Self::SpAtk,
            TempBattleStat::SpDef => Self::SpDef,
            TempBattleStat::Spe => Self::Spe,
            TempBattleStat::Accuracy => Self::Accuracy,
        }
    }
}

/// A full table of values for each permanent stat.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatTable {
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub atk: u32,
    #[serde(default)]
    pub def: u32,
    #[serde(default)]
    pub spa: u32,
    #[serde(default)]
    pub spd: u32,
    #[serde(default)]
    pub spe: u32,
}

impl StatTable {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        let slot = match stat {
            Stat::HP => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpAtk => &mut self.spa,
            Stat::SpDef => &mut self.spd,
            Stat::Spe => &mut self.spe,
        };
        *slot = value;
    }

    /// Iterates over every `(stat, value)` pair in table order.
    pub fn entries(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }
}

impl FromIterator<(Stat, u32)> for StatTable {
    fn from_iter<T: IntoIterator<Item = (Stat, u32)>>(iter: T) -> Self {
        let mut table = StatTable::default();
        for (stat, value) in iter {
            table.set(stat, value);
        }
        table
    }
}

#[cfg(test)]
mod stat_test {
    use pretty_assertions::assert_eq;

    use crate::{
        common::test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
        data::{
            BattleStat,
            Stat,
            StatTable,
            TempBattleStat,
        },
    };

    #[test]
    fn serializes_to_short_labels() {
        test_string_serialization(Stat::HP, "hp");
        test_string_serialization(Stat::SpAtk, "spa");
        test_string_serialization(TempBattleStat::Accuracy, "acc");
        test_string_serialization(BattleStat::Evasion, "eva");
    }

    #[test]
    fn deserializes_aliases() {
        test_string_deserialization("Special Defense", Stat::SpDef);
        test_string_deserialization("SPE", Stat::Spe);
        test_string_deserialization("Accuracy", TempBattleStat::Accuracy);
    }

    #[test]
    fn converts_temp_stat_to_battle_stat() {
        assert_eq!(BattleStat::from(TempBattleStat::Spe), BattleStat::Spe);
        assert_eq!(
            BattleStat::from(TempBattleStat::Accuracy),
            BattleStat::Accuracy
        );
    }

    #[test]
    fn collects_table_from_entries() {
        let table = StatTable::from_iter([(Stat::HP, 45), (Stat::Spe, 90)]);
        assert_eq!(table.get(Stat::HP), 45);
        assert_eq!(table.get(Stat::Atk), 0);
        assert_eq!(
            table.entries().map(|(_, value)| value).collect::<Vec<_>>(),
            vec![45, 0, 0, 0, 0, 90]
        );
    }
}
