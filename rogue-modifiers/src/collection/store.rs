use crate::{
    collection::{
        ModifierCollection,
        apply_held_item_transfers,
        try_transfer_held_item,
    },
    combatant::{
        CombatantId,
        CombatantProvider,
    },
    modifier::{
        ApplyContext,
        ModifierArgs,
        ModifierKind,
        StackContext,
    },
};

/// The modifier collections of both sides of the field.
#[derive(Debug, Clone, Default)]
pub struct ModifierStore {
    pub player: ModifierCollection,
    pub enemy: ModifierCollection,
}

impl ModifierStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self, player: bool) -> &ModifierCollection {
        if player { &self.player } else { &self.enemy }
    }

    pub fn side_mut(&mut self, player: bool) -> &mut ModifierCollection {
        if player {
            &mut self.player
        } else {
            &mut self.enemy
        }
    }

    /// The collection of one side and the collection of its opponent.
    fn split_mut(&mut self, player: bool) -> (&mut ModifierCollection, &mut ModifierCollection) {
        if player {
            (&mut self.player, &mut self.enemy)
        } else {
            (&mut self.enemy, &mut self.player)
        }
    }

    pub fn apply_all(
        &mut self,
        kind: ModifierKind,
        player: bool,
        args: &mut ModifierArgs,
        ctx: &mut ApplyContext,
    ) -> Vec<String> {
        self.side_mut(player).apply_all(kind, args, ctx)
    }

    /// Runs the transfer items of a holder, taking items from the opposing side.
    pub fn apply_held_item_transfers(
        &mut self,
        kind: ModifierKind,
        holder_is_player: bool,
        holder: CombatantId,
        targets: &[CombatantId],
        ctx: &mut ApplyContext,
        stack_ctx: &StackContext,
    ) -> Vec<String> {
        let (holder_collection, donor_collection) = self.split_mut(holder_is_player);
        apply_held_item_transfers(
            kind,
            holder_collection,
            donor_collection,
            holder,
            targets,
            ctx,
            stack_ctx,
        )
    }

    /// Moves a held item to a recipient on either side.
    pub fn try_transfer_held_item(
        &mut self,
        from_player: bool,
        index: usize,
        to_player: bool,
        recipient: CombatantId,
        transfer_stack: bool,
        ctx: &StackContext,
    ) -> bool {
        if from_player == to_player {
            return self
                .side_mut(from_player)
                .try_transfer_held_item(index, recipient, transfer_stack, ctx);
        }
        let (source, destination) = self.split_mut(from_player);
        try_transfer_held_item(source, index, destination, recipient, transfer_stack, ctx)
    }

    /// Counts down lapsing modifiers on both sides.
    pub fn lapse_all(&mut self) -> Vec<String> {
        let mut expired = self.player.lapse_all();
        expired.extend(self.enemy.lapse_all());
        expired
    }

    pub fn update(&mut self, combatants: &dyn CombatantProvider) {
        self.player.update(combatants);
        self.enemy.update(combatants);
    }

    pub fn clear_virtual_stacks(&mut self) {
        self.player.clear_virtual_stacks();
        self.enemy.clear_virtual_stacks();
    }
}
