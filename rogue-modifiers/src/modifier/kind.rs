use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The class of a modifier.
///
/// Concrete kinds name exactly one variant. Abstract kinds group variants and are only used as
/// filters for [`ModifierKind::is`]. Labels are the class names written to save records.
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
pub enum ModifierKind {
    #[string = "Modifier"]
    Modifier,
    #[string = "PersistentModifier"]
    Persistent,
    #[string = "ConsumableModifier"]
    Consumable,
    #[string = "ConsumablePokemonModifier"]
    ConsumablePokemon,
    #[string = "LapsingPersistentModifier"]
    LapsingPersistent,
    #[string = "PokemonHeldItemModifier"]
    PokemonHeldItem,
    #[string = "LapsingPokemonHeldItemModifier"]
    LapsingPokemonHeldItem,
    #[string = "HeldItemTransferModifier"]
    HeldItemTransfer,
    #[string = "EnemyPersistentModifier"]
    EnemyPersistent,
    #[string = "EnemyDamageMultiplierModifier"]
    EnemyDamageMultiplier,
    #[string = "DoubleBattleChanceBoosterModifier"]
    DoubleBattleChanceBooster,
    #[string = "TempStatStageBoosterModifier"]
    TempStatStageBooster,
    #[string = "TempCritBoosterModifier"]
    TempCritBooster,
    #[string = "TempExtraModifierModifier"]
    TempExtraModifier,
    #[string = "MapModifier"]
    Map,
    #[string = "MegaEvolutionAccessModifier"]
    MegaEvolutionAccess,
    #[string = "GigantamaxAccessModifier"]
    GigantamaxAccess,
    #[string = "TerastallizeAccessModifier"]
    TerastallizeAccess,
    #[string = "LockModifierTiersModifier"]
    LockModifierTiers,
    #[string = "MultipleParticipantExpBonusModifier"]
    MultipleParticipantExpBonus,
    #[string = "ExpShareModifier"]
    ExpShare,
    #[string = "ExpBalanceModifier"]
    ExpBalance,
    #[string = "IvScannerModifier"]
    IvScanner,
    #[string = "LevelIncrementBoosterModifier"]
    LevelIncrementBooster,
    #[string = "PreserveBerryModifier"]
    PreserveBerry,
    #[string = "HealingBoosterModifier"]
    HealingBooster,
    #[string = "ExpBoosterModifier"]
    ExpBooster,
    #[string = "MoneyMultiplierModifier"]
    MoneyMultiplier,
    #[string = "MoneyInterestModifier"]
    MoneyInterest,
    #[string = "HiddenAbilityRateBoosterModifier"]
    HiddenAbilityRateBooster,
    #[string = "ShinyRateBoosterModifier"]
    ShinyRateBooster,
    #[string = "ExtraModifierModifier"]
    ExtraModifier,
    #[string = "EnemyDamageBoosterModifier"]
    EnemyDamageBooster,
    #[string = "EnemyDamageReducerModifier"]
    EnemyDamageReducer,
    #[string = "EnemyTurnHealModifier"]
    EnemyTurnHeal,
    #[string = "EnemyAttackStatusEffectChanceModifier"]
    EnemyAttackStatusEffectChance,
    #[string = "EnemyStatusEffectHealChanceModifier"]
    EnemyStatusEffectHealChance,
    #[string = "EnemyEndureChanceModifier"]
    EnemyEndureChance,
    #[string = "EnemyFusionChanceModifier"]
    EnemyFusionChance,
    #[string = "TerastallizeModifier"]
    Terastallize,
    #[string = "BaseStatModifier"]
    BaseStat,
    #[string = "PokemonBaseStatTotalModifier"]
    PokemonBaseStatTotal,
    #[string = "PokemonBaseStatFlatModifier"]
    PokemonBaseStatFlat,
    #[string = "PokemonIncrementingStatModifier"]
    PokemonIncrementingStat,
    #[string = "StatBoosterModifier"]
    StatBooster,
    #[string = "EvolutionStatBoosterModifier"]
    EvolutionStatBooster,
    #[string = "SpeciesStatBoosterModifier"]
    SpeciesStatBooster,
    #[string = "CritBoosterModifier"]
    CritBooster,
    #[string = "SpeciesCritBoosterModifier"]
    SpeciesCritBooster,
    #[string = "AttackTypeBoosterModifier"]
    AttackTypeBooster,
    #[string = "SurviveDamageModifier"]
    SurviveDamage,
    #[string = "BypassSpeedChanceModifier"]
    BypassSpeedChance,
    #[string = "FlinchChanceModifier"]
    FlinchChance,
    #[string = "TurnHealModifier"]
    TurnHeal,
    #[string = "TurnStatusEffectModifier"]
    TurnStatusEffect,
    #[string = "HitHealModifier"]
    HitHeal,
    #[string = "BerryModifier"]
    Berry,
    #[string = "PokemonInstantReviveModifier"]
    PokemonInstantRevive,
    #[string = "ResetNegativeStatStageModifier"]
    ResetNegativeStatStage,
    #[string = "FieldEffectModifier"]
    FieldEffect,
    #[string = "PokemonExpBoosterModifier"]
    PokemonExpBooster,
    #[string = "PokemonFriendshipBoosterModifier"]
    PokemonFriendshipBooster,
    #[string = "PokemonNatureWeightModifier"]
    PokemonNatureWeight,
    #[string = "PokemonMoveAccuracyBoosterModifier"]
    PokemonMoveAccuracyBooster,
    #[string = "PokemonMultiHitModifier"]
    PokemonMultiHit,
    #[string = "PokemonFormChangeItemModifier"]
    PokemonFormChangeItem,
    #[string = "DamageMoneyRewardModifier"]
    DamageMoneyReward,
    #[string = "SwitchEffectTransferModifier"]
    SwitchEffectTransfer,
    #[string = "TurnHeldItemTransferModifier"]
    TurnHeldItemTransfer,
    #[string = "ContactHeldItemTransferChanceModifier"]
    ContactHeldItemTransferChance,
    #[string = "AddPokeballModifier"]
    AddPokeball,
    #[string = "AddVoucherModifier"]
    AddVoucher,
    #[string = "MoneyRewardModifier"]
    MoneyReward,
    #[string = "PokemonHpRestoreModifier"]
    PokemonHpRestore,
    #[string = "PokemonStatusHealModifier"]
    PokemonStatusHeal,
    #[string = "PokemonPpRestoreModifier"]
    PokemonPpRestore,
    #[string = "PokemonAllMovePpRestoreModifier"]
    PokemonAllMovePpRestore,
    #[string = "PokemonPpUpModifier"]
    PokemonPpUp,
    #[string = "PokemonNatureChangeModifier"]
    PokemonNatureChange,
    #[string = "PokemonLevelIncrementModifier"]
    PokemonLevelIncrement,
    #[string = "TmModifier"]
    Tm,
    #[string = "RememberMoveModifier"]
    RememberMove,
    #[string = "EvolutionItemModifier"]
    EvolutionItem,
    #[string = "FusePokemonModifier"]
    FusePokemon,
}

impl ModifierKind {
    /// The kind this kind directly extends, if any.
    pub fn parent(&self) -> Option<ModifierKind> {
        match self {
            Self::Modifier => None,
            Self::Persistent
            | Self::Consumable => Some(Self::Modifier),
            Self::ConsumablePokemon
            | Self::AddPokeball
            | Self::AddVoucher
            | Self::MoneyReward => Some(Self::Consumable),
            Self::LapsingPersistent
            | Self::PokemonHeldItem
            | Self::EnemyPersistent
            | Self::Map
            | Self::MegaEvolutionAccess
            | Self::GigantamaxAccess
            | Self::TerastallizeAccess
            | Self::LockModifierTiers
            | Self::MultipleParticipantExpBonus
            | Self::ExpShare
            | Self::ExpBalance
            | Self::IvScanner
            | Self::LevelIncrementBooster
            | Self::PreserveBerry
            | Self::HealingBooster
            | Self::ExpBooster
            | Self::MoneyMultiplier
            | Self::MoneyInterest
            | Self::HiddenAbilityRateBooster
            | Self::ShinyRateBooster
            | Self::ExtraModifier => Some(Self::Persistent),
            Self::LapsingPokemonHeldItem
            | Self::HeldItemTransfer
            | Self::BaseStat
            | Self::PokemonBaseStatTotal
            | Self::PokemonBaseStatFlat
            | Self::PokemonIncrementingStat
            | Self::StatBooster
            | Self::CritBooster
            | Self::AttackTypeBooster
            | Self::SurviveDamage
            | Self::BypassSpeedChance
            | Self::FlinchChance
            | Self::TurnHeal
            | Self::TurnStatusEffect
            | Self::HitHeal
            | Self::Berry
            | Self::PokemonInstantRevive
            | Self::ResetNegativeStatStage
            | Self::FieldEffect
            | Self::PokemonExpBooster
            | Self::PokemonFriendshipBooster
            | Self::PokemonNatureWeight
            | Self::PokemonMoveAccuracyBooster
            | Self::PokemonMultiHit
            | Self::PokemonFormChangeItem
            | Self::DamageMoneyReward
            | Self::SwitchEffectTransfer => Some(Self::PokemonHeldItem),
            Self::EnemyDamageMultiplier
            | Self::EnemyTurnHeal
            | Self::EnemyAttackStatusEffectChance
            | Self::EnemyStatusEffectHealChance
            | Self::EnemyEndureChance
            | Self::EnemyFusionChance => Some(Self::EnemyPersistent),
            Self::DoubleBattleChanceBooster
            | Self::TempStatStageBooster
            | Self::TempCritBooster
            | Self::TempExtraModifier => Some(Self::LapsingPersistent),
            Self::EnemyDamageBooster
            | Self::EnemyDamageReducer => Some(Self::EnemyDamageMultiplier),
            Self::Terastallize => Some(Self::LapsingPokemonHeldItem),
            Self::EvolutionStatBooster
            | Self::SpeciesStatBooster => Some(Self::StatBooster),
            Self::SpeciesCritBooster => Some(Self::CritBooster),
            Self::TurnHeldItemTransfer
            | Self::ContactHeldItemTransferChance => Some(Self::HeldItemTransfer),
            Self::PokemonHpRestore
            | Self::PokemonStatusHeal
            | Self::PokemonPpRestore
            | Self::PokemonAllMovePpRestore
            | Self::PokemonPpUp
            | Self::PokemonNatureChange
            | Self::PokemonLevelIncrement
            | Self::Tm
            | Self::RememberMove
            | Self::EvolutionItem
            | Self::FusePokemon => Some(Self::ConsumablePokemon),
        }
    }

    /// Does this kind equal `kind` or extend it, directly or transitively?
    pub fn is(&self, kind: ModifierKind) -> bool {
        let mut current = Some(*self);
        while let Some(candidate) = current {
            if candidate == kind {
                return true;
            }
            current = candidate.parent();
        }
        false
    }

    /// Abstract kinds group variants but are never instantiated.
    ///
    /// [`ModifierKind::StatBooster`] and [`ModifierKind::CritBooster`] are both a concrete variant
    /// and the parent of their species-gated variants.
    pub fn is_abstract(&self) -> bool {
        matches!(
            self,
            Self::Modifier
                | Self::Persistent
                | Self::Consumable
                | Self::ConsumablePokemon
                | Self::LapsingPersistent
                | Self::PokemonHeldItem
                | Self::LapsingPokemonHeldItem
                | Self::HeldItemTransfer
                | Self::EnemyPersistent
                | Self::EnemyDamageMultiplier
        )
    }

    /// The class name written to save records.
    pub fn class_name(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod kind_test {
    use crate::{
        common::test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
        modifier::ModifierKind,
    };

    #[test]
    fn walks_parent_chain() {
        assert!(ModifierKind::SpeciesStatBooster.is(ModifierKind::StatBooster));
        assert!(ModifierKind::SpeciesStatBooster.is(ModifierKind::PokemonHeldItem));
        assert!(ModifierKind::SpeciesStatBooster.is(ModifierKind::Persistent));
        assert!(ModifierKind::SpeciesStatBooster.is(ModifierKind::Modifier));
        assert!(!ModifierKind::StatBooster.is(ModifierKind::SpeciesStatBooster));
        assert!(!ModifierKind::SpeciesStatBooster.is(ModifierKind::CritBooster));
    }

    #[test]
    fn separates_families() {
        assert!(ModifierKind::Terastallize.is(ModifierKind::LapsingPokemonHeldItem));
        assert!(!ModifierKind::Terastallize.is(ModifierKind::LapsingPersistent));
        assert!(ModifierKind::TempCritBooster.is(ModifierKind::LapsingPersistent));
        assert!(!ModifierKind::TempCritBooster.is(ModifierKind::CritBooster));
        assert!(ModifierKind::EnemyDamageReducer.is(ModifierKind::EnemyDamageMultiplier));
        assert!(!ModifierKind::EnemyTurnHeal.is(ModifierKind::EnemyDamageMultiplier));
        assert!(ModifierKind::Tm.is(ModifierKind::ConsumablePokemon));
        assert!(!ModifierKind::MoneyReward.is(ModifierKind::ConsumablePokemon));
        assert!(!ModifierKind::MoneyReward.is(ModifierKind::Persistent));
    }

    #[test]
    fn labels_with_class_names() {
        test_string_serialization(ModifierKind::TurnHeal, "TurnHealModifier");
        test_string_serialization(ModifierKind::PokemonHeldItem, "PokemonHeldItemModifier");
        test_string_deserialization("TempExtraModifierModifier", ModifierKind::TempExtraModifier);
        assert_eq!(
            ModifierKind::ContactHeldItemTransferChance.class_name(),
            "ContactHeldItemTransferChanceModifier"
        );
    }

    #[test]
    fn parses_class_names_ignoring_case() {
        test_string_deserialization("berrymodifier", ModifierKind::Berry);
        test_string_deserialization("ENEMYTURNHEALMODIFIER", ModifierKind::EnemyTurnHeal);
        assert!(serde_json::from_str::<ModifierKind>("\"BerryItem\"").is_err());
    }
}
