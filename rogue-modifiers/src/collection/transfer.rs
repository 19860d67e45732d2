use std::collections::BTreeMap;

use log::debug;
use rogue_prng::rand_util;

use crate::{
    collection::ModifierCollection,
    combatant::CombatantId,
    data::ModifierTier,
    modifier::{
        ApplyContext,
        ModifierArgs,
        ModifierKind,
        ModifierOwner,
        PersistentModifier,
        StackContext,
    },
};

/// A decision by a transfer item to take items from a target.
///
/// Transfer items only decide during dispatch. The collections execute the requests afterwards,
/// so no collection is mutated while it is being iterated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest {
    /// The combatant receiving the items.
    pub holder: CombatantId,
    /// The combatant losing the items.
    pub target: CombatantId,
    pub count: u32,
}

impl TransferRequest {
    pub fn new(holder: CombatantId, target: CombatantId, count: u32) -> Self {
        Self {
            holder,
            target,
            count,
        }
    }
}

struct TransferPlan {
    matched: Option<usize>,
    moved: PersistentModifier,
    amount: u32,
}

fn plan_transfer(
    item: &PersistentModifier,
    destination: &ModifierCollection,
    recipient: CombatantId,
    transfer_stack: bool,
    ctx: &StackContext,
) -> Option<TransferPlan> {
    let recipient = ModifierOwner::Combatant(recipient);
    if !item.is_transferable() || item.owner() == Some(recipient) || item.stack_count() == 0 {
        return None;
    }
    let moved = item.with_owner(recipient, 0)?;
    let max = moved.max_stack_count(ctx);
    let matched = destination.find_match(&moved);
    let current = matched
        .and_then(|index| destination.get(index))
        .map_or(0, |existing| existing.effective_stack_count());
    if max == 0 || current >= max {
        return None;
    }
    let amount = if transfer_stack {
        item.stack_count().min(max - current)
    } else {
        1
    };
    Some(TransferPlan {
        matched,
        moved,
        amount,
    })
}

fn receive(destination: &mut ModifierCollection, plan: TransferPlan, ctx: &StackContext) -> bool {
    match plan.matched.and_then(|index| destination.get_mut(index)) {
        Some(existing) => existing.increment_stack(plan.amount, false, ctx),
        None => {
            let mut moved = plan.moved;
            moved.set_stack_count(plan.amount);
            destination.push(moved);
            true
        }
    }
}

/// Takes stacks from a donor entry. Returns whether the entry was removed.
fn give(source: &mut ModifierCollection, index: usize, amount: u32) -> bool {
    let Some(item) = source.get_mut(index) else {
        return false;
    };
    let remaining = item.stack_count().saturating_sub(amount);
    item.set_stack_count(remaining);
    if remaining == 0 {
        source.remove(index);
        return true;
    }
    false
}

/// Moves a held item from one collection to a recipient in another.
///
/// One unit is moved, or as much of the stack as fits when `transfer_stack` is set. The moved
/// units merge with the recipient's matching item, and the transfer fails if that item is already
/// at its stack ceiling. A donor entry left with no stacks is removed.
pub fn try_transfer_held_item(
    source: &mut ModifierCollection,
    index: usize,
    destination: &mut ModifierCollection,
    recipient: CombatantId,
    transfer_stack: bool,
    ctx: &StackContext,
) -> bool {
    try_transfer_held_item_impl(source, index, destination, recipient, transfer_stack, ctx).is_some()
}

fn try_transfer_held_item_impl(
    source: &mut ModifierCollection,
    index: usize,
    destination: &mut ModifierCollection,
    recipient: CombatantId,
    transfer_stack: bool,
    ctx: &StackContext,
) -> Option<bool> {
    let item = source.get(index)?;
    let plan = plan_transfer(item, destination, recipient, transfer_stack, ctx)?;
    let amount = plan.amount;
    if !receive(destination, plan, ctx) {
        return None;
    }
    debug!("transferred {amount} of item {index} to {recipient}");
    Some(give(source, index, amount))
}

impl ModifierCollection {
    /// Moves a held item to another combatant on the same side.
    pub fn try_transfer_held_item(
        &mut self,
        index: usize,
        recipient: CombatantId,
        transfer_stack: bool,
        ctx: &StackContext,
    ) -> bool {
        self.try_transfer_held_item_within(index, recipient, transfer_stack, ctx)
            .is_some()
    }

    fn try_transfer_held_item_within(
        &mut self,
        index: usize,
        recipient: CombatantId,
        transfer_stack: bool,
        ctx: &StackContext,
    ) -> Option<bool> {
        let item = self.get(index)?;
        let plan = plan_transfer(item, self, recipient, transfer_stack, ctx)?;
        let amount = plan.amount;
        // New entries are appended, so the donor index stays valid.
        if !receive(self, plan, ctx) {
            return None;
        }
        debug!("transferred {amount} of item {index} to {recipient}");
        Some(give(self, index, amount))
    }
}

/// Runs the transfer items of a holder and executes the transfers they request.
///
/// Each request draws items from the target's transferable held items, preferring the highest
/// tier present and falling through to lower tiers as tiers are exhausted. Untiered items rank
/// lowest. Returns the type ids of the items moved.
pub fn apply_held_item_transfers(
    kind: ModifierKind,
    holder_collection: &mut ModifierCollection,
    donor_collection: &mut ModifierCollection,
    holder: CombatantId,
    targets: &[CombatantId],
    ctx: &mut ApplyContext,
    stack_ctx: &StackContext,
) -> Vec<String> {
    let mut requests = Vec::new();
    holder_collection.apply_all(
        kind,
        &mut ModifierArgs::HeldItemTransfer {
            holder,
            targets,
            requests: &mut requests,
        },
        ctx,
    );

    let mut transferred = Vec::new();
    for request in requests {
        let mut tiers = donor_tiers(donor_collection, request.target);
        for _ in 0..request.count {
            let Some(mut highest) = tiers.last_entry() else {
                break;
            };
            let candidates = highest.get_mut();
            let Some(pick) = rand_util::sample_index(ctx.prng, candidates.len()) else {
                break;
            };
            let index = candidates.remove(pick);
            if candidates.is_empty() {
                highest.remove();
            }
            let Some(type_id) = donor_collection
                .get(index)
                .map(|item| item.type_id().to_owned())
            else {
                continue;
            };
            let Some(removed) = try_transfer_held_item_impl(
                donor_collection,
                index,
                holder_collection,
                request.holder,
                false,
                stack_ctx,
            ) else {
                continue;
            };

            transferred.push(type_id);
            if removed {
                for candidate in tiers.values_mut().flatten() {
                    if *candidate > index {
                        *candidate -= 1;
                    }
                }
            }
        }
    }
    transferred
}

fn donor_tiers(
    donor_collection: &ModifierCollection,
    target: CombatantId,
) -> BTreeMap<Option<ModifierTier>, Vec<usize>> {
    let mut tiers = BTreeMap::<Option<ModifierTier>, Vec<usize>>::new();
    for (index, item) in donor_collection.iter().enumerate() {
        if item.owner() == Some(ModifierOwner::Combatant(target)) && item.is_transferable() {
            tiers
                .entry(item.modifier_type().tier)
                .or_default()
                .push(index);
        }
    }
    tiers
}
