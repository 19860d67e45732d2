use crate::{
    collection::{
        ModifierCollection,
        TransferRequest,
    },
    combatant::{
        Combatant,
        CombatantId,
        Session,
    },
    data::{
        PokemonType,
        Stat,
        StatTable,
        TempBattleStat,
    },
};

/// The event arguments passed through a dispatch.
///
/// Every variant declares the shape of argument it accepts. References are mutated in place, so a
/// value compounds across every modifier visited in collection order and is observed by the caller
/// afterwards. A modifier handed a shape it does not expect reports that it should not apply.
pub enum ModifierArgs<'a> {
    /// Events with no arguments, such as checking for the presence of an access item.
    None,
    Number(&'a mut f64),
    Integer(&'a mut i64),
    Flag(&'a mut bool),
    TempStatStage {
        stat: TempBattleStat,
        multiplier: &'a mut f64,
    },
    Session(&'a mut dyn Session),

    Combatant(&'a mut dyn Combatant),
    CombatantFlag {
        combatant: &'a mut dyn Combatant,
        flag: &'a mut bool,
    },
    CombatantNumber {
        combatant: &'a mut dyn Combatant,
        value: &'a mut f64,
    },
    CombatantInteger {
        combatant: &'a mut dyn Combatant,
        value: &'a mut i64,
    },
    /// A single stat value being calculated.
    CombatantStat {
        combatant: &'a mut dyn Combatant,
        stat: Stat,
        value: &'a mut f64,
    },
    BaseStats {
        combatant: &'a mut dyn Combatant,
        base_stats: &'a mut StatTable,
    },
    MovePower {
        combatant: &'a mut dyn Combatant,
        move_type: PokemonType,
        power: &'a mut f64,
    },
    MultiHit {
        combatant: &'a mut dyn Combatant,
        hit_count: &'a mut i64,
        power_multiplier: &'a mut f64,
    },
    TeraType {
        combatant: &'a mut dyn Combatant,
        tera_type: &'a mut Option<PokemonType>,
    },
    /// A form change check; `active` is false while the holder is leaving the field.
    FormChange {
        combatant: &'a mut dyn Combatant,
        active: bool,
    },
    /// Eating a berry, after berry preservation has been rolled.
    Berry {
        combatant: &'a mut dyn Combatant,
        preserved: bool,
    },
    DamageMoney {
        combatant: &'a mut dyn Combatant,
        damage: u64,
        money: &'a mut i64,
    },
    /// Deciding held item transfers; requests are executed by the collection afterwards.
    HeldItemTransfer {
        holder: CombatantId,
        targets: &'a [CombatantId],
        requests: &'a mut Vec<TransferRequest>,
    },

    /// Using a consumable, with the party-wide modifiers that boost it.
    Consumable {
        combatant: Option<&'a mut dyn Combatant>,
        session: &'a mut dyn Session,
        boosters: &'a mut ModifierCollection,
    },
}

impl<'a> ModifierArgs<'a> {
    /// The id of the combatant the event is about, if any.
    pub fn combatant_id(&self) -> Option<CombatantId> {
        match self {
            Self::Combatant(combatant)
            | Self::CombatantFlag { combatant, .. }
            | Self::CombatantNumber { combatant, .. }
            | Self::CombatantInteger { combatant, .. }
            | Self::CombatantStat { combatant, .. }
            | Self::BaseStats { combatant, .. }
            | Self::MovePower { combatant, .. }
            | Self::MultiHit { combatant, .. }
            | Self::TeraType { combatant, .. }
            | Self::FormChange { combatant, .. }
            | Self::Berry { combatant, .. }
            | Self::DamageMoney { combatant, .. } => Some(combatant.id()),
            Self::HeldItemTransfer { holder, .. } => Some(*holder),
            Self::Consumable { combatant, .. } => combatant.as_ref().map(|combatant| combatant.id()),
            Self::None
            | Self::Number(_)
            | Self::Integer(_)
            | Self::Flag(_)
            | Self::TempStatStage { .. }
            | Self::Session(_) => None,
        }
    }

    /// The combatant the event is about, if any.
    pub fn combatant_mut(&mut self) -> Option<&mut (dyn Combatant + 'a)> {
        match self {
            Self::Combatant(combatant)
            | Self::CombatantFlag { combatant, .. }
            | Self::CombatantNumber { combatant, .. }
            | Self::CombatantInteger { combatant, .. }
            | Self::CombatantStat { combatant, .. }
            | Self::BaseStats { combatant, .. }
            | Self::MovePower { combatant, .. }
            | Self::MultiHit { combatant, .. }
            | Self::TeraType { combatant, .. }
            | Self::FormChange { combatant, .. }
            | Self::Berry { combatant, .. }
            | Self::DamageMoney { combatant, .. } => Some(&mut **combatant),
            Self::Consumable { combatant, .. } => combatant.as_deref_mut(),
            _ => None,
        }
    }

    /// Does the event carry a combatant?
    pub fn has_combatant(&self) -> bool {
        self.combatant_id().is_some()
    }
}
