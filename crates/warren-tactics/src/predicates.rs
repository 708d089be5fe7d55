//! The transition predicate library.
//!
//! Every predicate is a pure function of current world state and is
//! re-evaluated fresh on each check; nothing is cached across turns.
//! Compose with [`warren_hsm::And`] and [`warren_hsm::Not`].

use warren_core::{Tag, TickContext};
use warren_dmap::GridWorld;
use warren_hsm::Transition;

use crate::{query, TacticsWorld};

/// Any opposing-team entity within Euclidean `range`.
pub struct EnemyNear {
    range: f32,
}

impl EnemyNear {
    pub fn new(range: f32) -> Self {
        Self { range }
    }
}

impl<W> Transition<W> for EnemyNear
where
    W: GridWorld + 'static,
{
    fn ready(&self, _ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        query::nearest_enemy(world, agent).is_some_and(|(_, _, dist)| dist <= self.range)
    }
}

/// Any `tag`-marked entity within Euclidean `range`.
pub struct TagNear {
    tag: Tag,
    range: f32,
}

impl TagNear {
    pub fn new(tag: Tag, range: f32) -> Self {
        Self { tag, range }
    }
}

impl<W> Transition<W> for TagNear
where
    W: GridWorld + 'static,
{
    fn ready(&self, _ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        query::nearest_tagged(world, agent, self.tag).is_some_and(|(_, _, dist)| dist <= self.range)
    }
}

/// The agent's own hit points are strictly below `threshold`.
pub struct HitpointsBelow {
    threshold: f32,
}

impl HitpointsBelow {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

impl<W> Transition<W> for HitpointsBelow
where
    W: GridWorld + 'static,
{
    fn ready(&self, _ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        world
            .hitpoints(agent)
            .is_some_and(|hp| hp < self.threshold)
    }
}

/// Any entity on the agent's own team (itself included) is below
/// `threshold` — a global scan, not a radius check.
pub struct AllyHitpointsBelow {
    threshold: f32,
}

impl AllyHitpointsBelow {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

impl<W> Transition<W> for AllyHitpointsBelow
where
    W: GridWorld + 'static,
{
    fn ready(&self, _ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        let Some(team) = world.team(agent) else {
            return false;
        };
        world.entities().into_iter().any(|e| {
            world.team(e) == Some(team)
                && world.hitpoints(e).is_some_and(|hp| hp < self.threshold)
        })
    }
}

/// The agent's ability cooldown has run out.
pub struct CooldownElapsed;

impl<W> Transition<W> for CooldownElapsed
where
    W: TacticsWorld + 'static,
{
    fn ready(&self, _ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        world.cooldown(agent).is_some_and(|turns| turns <= 0)
    }
}

/// The agent has finished its crafting quota.
pub struct CraftedEnough;

impl<W> Transition<W> for CraftedEnough
where
    W: TacticsWorld + 'static,
{
    fn ready(&self, _ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        world
            .craft(agent)
            .is_some_and(|craft| craft.crafted >= craft.quota)
    }
}

/// The agent holds enough resources for its quota, or a chest in reach
/// has run dry.
pub struct LootedEnough;

impl<W> Transition<W> for LootedEnough
where
    W: TacticsWorld + 'static,
{
    fn ready(&self, _ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        let Some(craft) = world.craft(agent) else {
            return false;
        };
        if craft.resources >= craft.quota {
            return true;
        }
        query::chests_in_reach(world, agent)
            .into_iter()
            .any(|e| world.chest(e).is_some_and(|chest| chest.resources <= 0))
    }
}

/// A chest in reach holds at least `items` finished items.
pub struct ChestFilled {
    items: i32,
}

impl ChestFilled {
    pub fn new(items: i32) -> Self {
        Self { items }
    }
}

impl<W> Transition<W> for ChestFilled
where
    W: TacticsWorld + 'static,
{
    fn ready(&self, _ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        query::chests_in_reach(world, agent)
            .into_iter()
            .any(|e| world.chest(e).is_some_and(|chest| chest.items >= self.items))
    }
}

/// Reachability gate reserved for influence-map wiring. Not implemented;
/// never ready.
pub struct EnemyReachable;

impl<W> Transition<W> for EnemyReachable
where
    W: GridWorld + 'static,
{
    fn ready(&self, _ctx: &TickContext, _agent: W::Agent, _world: &W) -> bool {
        false
    }
}
