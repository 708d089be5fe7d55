use warren_core::GridPos;
use warren_dmap::{GridWorld, GridWorldMut};

/// Crafting progress snapshot: raw resources on hand, items finished,
/// and the quota the crafter works toward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Craft {
    pub resources: i32,
    pub crafted: i32,
    pub quota: i32,
}

/// Chest inventory snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chest {
    pub resources: i32,
    pub items: i32,
}

/// Euclidean radius within which an agent can work a chest.
pub const PICKUP_RANGE: f32 = 2.0;

/// Gameplay read access for predicates, states, and tree leaves.
pub trait TacticsWorld: GridWorld {
    /// Turns left on the agent's ability cooldown, if it carries one. The
    /// host decrements it once per turn during resolution.
    fn cooldown(&self, entity: Self::Agent) -> Option<i32>;

    fn craft(&self, entity: Self::Agent) -> Option<Craft>;

    fn chest(&self, entity: Self::Agent) -> Option<Chest>;

    /// Fixed home position the agent patrols around.
    fn patrol_anchor(&self, entity: Self::Agent) -> Option<GridPos>;

    /// Next link in a waypoint chain.
    fn next_waypoint(&self, entity: Self::Agent) -> Option<Self::Agent>;
}

/// Operational writes for the planning pass.
///
/// Reads return pre-turn snapshots; implementations are free to buffer
/// these writes until [`warren_core::WorldMut::commit`] so no agent
/// observes another's in-flight turn.
pub trait TacticsWorldMut: GridWorldMut + TacticsWorld {
    fn heal(&mut self, entity: Self::Agent, amount: f32);

    fn set_cooldown(&mut self, entity: Self::Agent, turns: i32);

    fn add_craft_resources(&mut self, entity: Self::Agent, delta: i32);

    fn add_crafted_items(&mut self, entity: Self::Agent, delta: i32);

    fn add_chest_resources(&mut self, entity: Self::Agent, delta: i32);

    fn add_chest_items(&mut self, entity: Self::Agent, delta: i32);

    fn clear_chest_items(&mut self, entity: Self::Agent);
}
