use std::cmp::Ordering;

use log::{
    debug,
    warn,
};

use crate::{
    combatant::{
        Combatant,
        CombatantProvider,
        Session,
    },
    modifier::{
        ApplyContext,
        ConsumableModifier,
        HeldItemEffect,
        ModifierArgs,
        ModifierKind,
        ModifierOwner,
        PersistentModifier,
        StackContext,
    },
};

/// An ordered collection of persistent modifiers belonging to one side of the field.
///
/// Held items live in the same collection as party-wide modifiers, tagged with their owner.
/// Insertion order is preserved until [`ModifierCollection::sort`] is called, and dispatch always
/// visits modifiers in collection order.
#[derive(Debug, Clone, Default)]
pub struct ModifierCollection {
    modifiers: Vec<PersistentModifier>,
}

impl ModifierCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersistentModifier> {
        self.modifiers.iter()
    }

    pub fn get(&self, index: usize) -> Option<&PersistentModifier> {
        self.modifiers.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PersistentModifier> {
        self.modifiers.get_mut(index)
    }

    /// Appends a modifier without merging.
    pub(crate) fn push(&mut self, modifier: PersistentModifier) {
        self.modifiers.push(modifier);
    }

    /// The index of the entry a candidate would merge into.
    pub fn find_match(&self, candidate: &PersistentModifier) -> Option<usize> {
        self.modifiers
            .iter()
            .position(|modifier| modifier.matches(candidate))
    }

    /// Adds a modifier, merging it into a matching entry if one exists.
    ///
    /// Returns false if the matching entry cannot take the candidate's stacks. Virtual grants
    /// never contribute to the persisted stack count.
    pub fn add(
        &mut self,
        mut candidate: PersistentModifier,
        virtual_stacks: bool,
        ctx: &StackContext,
    ) -> bool {
        if let Some(index) = self.find_match(&candidate) {
            let existing = &mut self.modifiers[index];
            let merged = existing.merge(&candidate, virtual_stacks, ctx);
            if merged {
                debug!(
                    "merged {} into stack of {}",
                    candidate.modifier_type().name,
                    existing.effective_stack_count()
                );
            }
            return merged;
        }

        if virtual_stacks {
            candidate.make_virtual();
        }
        debug!("added {}", candidate.modifier_type().name);
        self.modifiers.push(candidate);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<PersistentModifier> {
        if index >= self.modifiers.len() {
            return None;
        }
        Some(self.modifiers.remove(index))
    }

    /// Removes every modifier satisfying the predicate, returning how many were removed.
    pub fn remove_modifier<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&PersistentModifier) -> bool,
    {
        let before = self.modifiers.len();
        self.modifiers.retain(|modifier| !predicate(modifier));
        before - self.modifiers.len()
    }

    pub fn find<F>(&self, mut filter: F) -> Option<&PersistentModifier>
    where
        F: FnMut(&PersistentModifier) -> bool,
    {
        self.modifiers.iter().find(|modifier| filter(modifier))
    }

    pub fn find_kind(&self, kind: ModifierKind) -> Vec<&PersistentModifier> {
        self.modifiers
            .iter()
            .filter(|modifier| modifier.is(kind))
            .collect()
    }

    pub fn find_by_owner(&self, owner: ModifierOwner) -> Vec<&PersistentModifier> {
        self.modifiers
            .iter()
            .filter(|modifier| modifier.owner() == Some(owner))
            .collect()
    }

    /// The sum of effective stack counts of every modifier of the kind.
    pub fn count_kind(&self, kind: ModifierKind) -> u32 {
        self.modifiers
            .iter()
            .filter(|modifier| modifier.is(kind))
            .map(|modifier| modifier.effective_stack_count())
            .sum()
    }

    /// Sorts by owner (unowned first), then class name, then item name.
    pub fn sort(&mut self) {
        self.modifiers.sort_by(Self::display_order);
    }

    fn display_order(a: &PersistentModifier, b: &PersistentModifier) -> Ordering {
        let owner_key =
            |modifier: &PersistentModifier| modifier.owner().map_or(ModifierOwner::ANY_ARG, |owner| owner.sort_key());
        owner_key(a)
            .cmp(&owner_key(b))
            .then_with(|| a.kind().class_name().cmp(&b.kind().class_name()))
            .then_with(|| a.modifier_type().name.cmp(&b.modifier_type().name))
    }

    fn positions(&self, kind: ModifierKind) -> Vec<usize> {
        self.modifiers
            .iter()
            .enumerate()
            .filter(|(_, modifier)| modifier.is(kind))
            .map(|(index, _)| index)
            .collect()
    }

    /// Dispatches an event to every modifier of the kind, in collection order.
    ///
    /// Returns the type ids of the modifiers that applied.
    pub fn apply_all(
        &mut self,
        kind: ModifierKind,
        args: &mut ModifierArgs,
        ctx: &mut ApplyContext,
    ) -> Vec<String> {
        let mut applied = Vec::new();
        for index in self.positions(kind) {
            let modifier = &mut self.modifiers[index];
            if modifier.should_apply(args) && modifier.apply(args, ctx) {
                applied.push(modifier.type_id().to_owned());
            }
        }
        applied
    }

    /// Dispatches an event to modifiers of the kind until one applies.
    pub fn apply_first(
        &mut self,
        kind: ModifierKind,
        args: &mut ModifierArgs,
        ctx: &mut ApplyContext,
    ) -> Option<String> {
        for index in self.positions(kind) {
            let modifier = &mut self.modifiers[index];
            if modifier.should_apply(args) && modifier.apply(args, ctx) {
                return Some(modifier.type_id().to_owned());
            }
        }
        None
    }

    /// Counts down every lapsing modifier, removing the ones that expire.
    ///
    /// Returns the type ids of the removed modifiers.
    pub fn lapse_all(&mut self) -> Vec<String> {
        let mut expired = Vec::new();
        self.modifiers.retain_mut(|modifier| {
            if !modifier.is_lapsing() || modifier.lapse() {
                return true;
            }
            debug!("{} expired", modifier.modifier_type().name);
            expired.push(modifier.type_id().to_owned());
            false
        });
        expired
    }

    pub fn clear_virtual_stacks(&mut self) {
        for modifier in &mut self.modifiers {
            modifier.clear_virtual_stacks();
        }
    }

    /// Drops held items of departed combatants, clears virtual stacks, and removes empty entries.
    pub fn update(&mut self, combatants: &dyn CombatantProvider) {
        self.modifiers.retain(|modifier| match modifier.owner() {
            Some(ModifierOwner::Combatant(id)) if combatants.combatant(id).is_none() => {
                warn!(
                    "dropping {} held by missing combatant {id}",
                    modifier.modifier_type().name
                );
                false
            }
            _ => true,
        });
        self.clear_virtual_stacks();
        self.modifiers.retain(|modifier| modifier.stack_count() > 0);
    }

    /// Removes every held item of a combatant that permanently left the roster.
    pub fn remove_owner_modifiers(&mut self, owner: ModifierOwner) -> usize {
        self.remove_modifier(|modifier| modifier.owner() == Some(owner))
    }

    /// Eats every berry held by the combatant whose trigger holds.
    ///
    /// Berry preservation is rolled before each berry is eaten. Eaten berries are only removed by
    /// [`ModifierCollection::consume_berries`].
    pub fn apply_berries(
        &mut self,
        combatant: &mut dyn Combatant,
        ctx: &mut ApplyContext,
    ) -> Vec<String> {
        let mut eaten = Vec::new();
        for index in self.positions(ModifierKind::Berry) {
            let should_eat = self.modifiers[index].should_apply(&ModifierArgs::Berry {
                combatant: &mut *combatant,
                preserved: false,
            });
            if !should_eat {
                continue;
            }

            let mut preserved = false;
            self.apply_all(
                ModifierKind::PreserveBerry,
                &mut ModifierArgs::Flag(&mut preserved),
                ctx,
            );

            let berry = &mut self.modifiers[index];
            let mut args = ModifierArgs::Berry {
                combatant: &mut *combatant,
                preserved,
            };
            if berry.apply(&mut args, ctx) {
                eaten.push(berry.type_id().to_owned());
            }
        }
        eaten
    }

    /// Removes one stack of every eaten berry.
    pub fn consume_berries(&mut self) {
        for modifier in &mut self.modifiers {
            let Some(held_item) = modifier.held_item_mut() else {
                continue;
            };
            let HeldItemEffect::Berry { consumed, .. } = &mut held_item.effect else {
                continue;
            };
            if !*consumed {
                continue;
            }
            *consumed = false;
            modifier.decrement_stack(1);
        }
        self.modifiers
            .retain(|modifier| modifier.effective_stack_count() > 0);
    }

    /// Credits money for damage dealt by the combatant, boosted by money multipliers.
    ///
    /// Returns the amount credited.
    pub fn award_damage_money(
        &mut self,
        combatant: &mut dyn Combatant,
        damage: u64,
        session: &mut dyn Session,
        ctx: &mut ApplyContext,
    ) -> u64 {
        let mut money = 0;
        self.apply_all(
            ModifierKind::DamageMoneyReward,
            &mut ModifierArgs::DamageMoney {
                combatant,
                damage,
                money: &mut money,
            },
            ctx,
        );
        if money <= 0 {
            return 0;
        }
        self.apply_all(
            ModifierKind::MoneyMultiplier,
            &mut ModifierArgs::Integer(&mut money),
            ctx,
        );
        let money = money as u64;
        session.add_money(money);
        money
    }

    /// Uses a consumable, with this collection's boosters chained in.
    pub fn use_consumable<'a>(
        &'a mut self,
        consumable: &mut ConsumableModifier,
        combatant: Option<&'a mut (dyn Combatant + 'a)>,
        session: &'a mut (dyn Session + 'a),
        ctx: &mut ApplyContext,
    ) -> bool {
        let mut args = ModifierArgs::Consumable {
            combatant,
            session,
            boosters: self,
        };
        if !consumable.should_apply(&args) {
            return false;
        }
        let applied = consumable.apply(&mut args, ctx);
        if applied {
            debug!("used {}", consumable.modifier_type().name);
        }
        applied
    }

    /// Is any modifier of the kind present?
    pub fn has(&self, kind: ModifierKind) -> bool {
        self.modifiers.iter().any(|modifier| modifier.is(kind))
    }
}

impl<'a> IntoIterator for &'a ModifierCollection {
    type Item = &'a PersistentModifier;
    type IntoIter = std::slice::Iter<'a, PersistentModifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.modifiers.iter()
    }
}
