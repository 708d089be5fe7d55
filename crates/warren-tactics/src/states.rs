//! The state library.
//!
//! Each state plans at most one turn's worth of work: a single proposed
//! move, or one increment of a stat exchange. A state whose query comes
//! up empty plans nothing and the agent idles — the safe default.

use warren_core::{Tag, TickContext};
use warren_hsm::State;

use crate::{query, TacticsWorldMut};

pub(crate) const PATROL_STREAM: u64 = 1;

/// Step toward the nearest opposing-team entity.
pub struct MoveToEnemy;

impl<W> State<W> for MoveToEnemy
where
    W: TacticsWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let Some((_, enemy_pos, _)) = query::nearest_enemy(&*world, agent) else {
            return;
        };
        let Some(pos) = world.position(agent) else {
            return;
        };
        world.set_action(agent, pos.step_toward(enemy_pos));
    }
}

/// Step exactly opposite the approach move toward the nearest enemy.
pub struct FleeFromEnemy;

impl<W> State<W> for FleeFromEnemy
where
    W: TacticsWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let Some((_, enemy_pos, _)) = query::nearest_enemy(&*world, agent) else {
            return;
        };
        let Some(pos) = world.position(agent) else {
            return;
        };
        world.set_action(agent, pos.step_toward(enemy_pos).reverse());
    }
}

/// Step toward the nearest `tag`-marked entity.
pub struct MoveToTagged {
    tag: Tag,
}

impl MoveToTagged {
    pub fn new(tag: Tag) -> Self {
        Self { tag }
    }
}

impl<W> State<W> for MoveToTagged
where
    W: TacticsWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let Some((_, target_pos, _)) = query::nearest_tagged(&*world, agent, self.tag) else {
            return;
        };
        let Some(pos) = world.position(agent) else {
            return;
        };
        world.set_action(agent, pos.step_toward(target_pos));
    }
}

/// Walk back toward the patrol anchor when beyond `dist`, otherwise take
/// one uniformly random move.
pub struct Patrol {
    dist: f32,
}

impl Patrol {
    pub fn new(dist: f32) -> Self {
        Self { dist }
    }
}

impl<W> State<W> for Patrol
where
    W: TacticsWorldMut + 'static,
{
    fn act(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let Some(pos) = world.position(agent) else {
            return;
        };
        let Some(anchor) = world.patrol_anchor(agent) else {
            return;
        };
        if pos.distance(anchor) > self.dist {
            // Recovery walk back home.
            world.set_action(agent, pos.step_toward(anchor));
        } else {
            let mut rng = ctx.rng_for_agent(agent, PATROL_STREAM);
            world.set_action(agent, rng.pick_move());
        }
    }
}

/// Loose follow: keep within `dist` of the nearest `tag`-marked entity,
/// wandering randomly once close enough.
pub struct PatrolTagged {
    tag: Tag,
    dist: f32,
}

impl PatrolTagged {
    pub fn new(tag: Tag, dist: f32) -> Self {
        Self { tag, dist }
    }
}

impl<W> State<W> for PatrolTagged
where
    W: TacticsWorldMut + 'static,
{
    fn act(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let Some((_, target_pos, _)) = query::nearest_tagged(&*world, agent, self.tag) else {
            return;
        };
        let Some(pos) = world.position(agent) else {
            return;
        };
        if pos.distance(target_pos) > self.dist {
            world.set_action(agent, pos.step_toward(target_pos));
        } else {
            let mut rng = ctx.rng_for_agent(agent, PATROL_STREAM);
            world.set_action(agent, rng.pick_move());
        }
    }
}

/// Heal the acting agent by a fixed amount each turn.
pub struct HealSelf {
    amount: f32,
}

impl HealSelf {
    pub fn new(amount: f32) -> Self {
        Self { amount }
    }
}

impl<W> State<W> for HealSelf
where
    W: TacticsWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        world.heal(agent, self.amount);
    }
}

/// Field medic: walk back into `range` of the patrol anchor, then heal
/// every same-team agent and arm the cooldown.
pub struct HealAllies {
    range: f32,
    amount: f32,
    cooldown: i32,
}

impl HealAllies {
    pub fn new(range: f32, amount: f32, cooldown: i32) -> Self {
        Self {
            range,
            amount,
            cooldown,
        }
    }
}

impl<W> State<W> for HealAllies
where
    W: TacticsWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let Some(pos) = world.position(agent) else {
            return;
        };
        let Some(anchor) = world.patrol_anchor(agent) else {
            return;
        };
        if pos.distance(anchor) > self.range {
            world.set_action(agent, pos.step_toward(anchor));
            return;
        }

        let Some(team) = world.team(agent) else {
            return;
        };
        for entity in world.entities() {
            if world.team(entity) == Some(team) && world.hitpoints(entity).is_some() {
                world.heal(entity, self.amount);
            }
        }
        world.set_cooldown(agent, self.cooldown);
    }
}

/// Convert one resource into one finished item per turn.
///
/// The gate is kept exactly as the source system shipped it: crafting
/// proceeds when resources are on hand *or* the quota is already met,
/// and the resource count goes negative in the latter case. Pinned by
/// test until product intent says otherwise.
pub struct CraftItems;

impl<W> State<W> for CraftItems
where
    W: TacticsWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let Some(craft) = world.craft(agent) else {
            return;
        };
        if craft.resources > 0 || craft.crafted >= craft.quota {
            world.add_crafted_items(agent, 1);
            world.add_craft_resources(agent, -1);
        }
    }
}

/// Exchange with every chest in reach: draw one raw resource, deposit
/// one finished item.
pub struct LootChest;

impl<W> State<W> for LootChest
where
    W: TacticsWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let Some(craft) = world.craft(agent) else {
            return;
        };
        for chest_entity in query::chests_in_reach(&*world, agent) {
            let Some(chest) = world.chest(chest_entity) else {
                continue;
            };
            if chest.resources > 0 {
                world.add_chest_resources(chest_entity, -1);
                world.add_craft_resources(agent, 1);
            }
            if craft.crafted > 0 {
                world.add_crafted_items(agent, -1);
                world.add_chest_items(chest_entity, 1);
            }
        }
    }
}

/// Once the cooldown runs out: re-arm it and clear every chest's finished
/// items, starting the camp's cycle over.
pub struct Sleep {
    turns: i32,
}

impl Sleep {
    pub fn new(turns: i32) -> Self {
        Self { turns }
    }
}

impl<W> State<W> for Sleep
where
    W: TacticsWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        if !world.cooldown(agent).is_some_and(|turns| turns <= 0) {
            return;
        }
        world.set_cooldown(agent, self.turns);
        for entity in world.entities() {
            if world.chest(entity).is_some() {
                world.clear_chest_items(entity);
            }
        }
    }
}

/// Does nothing, on purpose.
pub struct Idle;

impl<W> State<W> for Idle
where
    W: TacticsWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, _agent: W::Agent, _world: &mut W) {}
}

/// Placeholder combat stance. Damage happens in the external resolution
/// pass when an agent moves into an occupied cell, so this leaf plans no
/// state change of its own.
pub struct Attack;

impl<W> State<W> for Attack
where
    W: TacticsWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, _agent: W::Agent, _world: &mut W) {}
}
