use warren_core::{Action, GridPos, Tag, Team, WorldMut, WorldView};

use crate::{DmapWeights, Dungeon, Explorer};

/// Grid-world read access for the influence-map generators and the
/// follower. Hosts back this with their entity store.
pub trait GridWorld: WorldView {
    fn dungeon(&self) -> &Dungeon;

    /// Every live entity, in stable id order.
    fn entities(&self) -> Vec<Self::Agent>;

    fn position(&self, entity: Self::Agent) -> Option<GridPos>;

    fn team(&self, entity: Self::Agent) -> Option<Team>;

    fn hitpoints(&self, entity: Self::Agent) -> Option<f32>;

    fn has_tag(&self, entity: Self::Agent, tag: Tag) -> bool;

    /// Weight table for blended-map movement, if this entity carries one.
    fn dmap_weights(&self, entity: Self::Agent) -> Option<&DmapWeights> {
        let _ = entity;
        None
    }
}

pub trait GridWorldMut: WorldMut + GridWorld {
    /// Write the entity's proposed action for this turn.
    fn set_action(&mut self, entity: Self::Agent, action: Action);

    /// Persistent explore state, if this entity is an explorer. The
    /// explore generator updates it in place.
    fn explorer_mut(&mut self, entity: Self::Agent) -> Option<&mut Explorer> {
        let _ = entity;
        None
    }
}
