//! Behavior-tree leaves.
//!
//! Discovery leaves (`Find*`) locate a target and publish it on the
//! blackboard; movement leaves read a previously published key and plan
//! one step. A find/move pair must sit adjacent under the same sequence —
//! the blackboard is the only channel between them.

use warren_bt::{BtNode, BtStatus};
use warren_core::{BbKey, Blackboard, GridPos, Tag, TickContext, WorldView};
use warren_hsm::Transition;

use crate::states::PATROL_STREAM;
use crate::{query, TacticsWorldMut};

/// Find the nearest opposing entity, optionally within `range`, and
/// publish its id under `key`. Fails when none qualifies.
pub struct FindEnemy<A: 'static> {
    key: BbKey<A>,
    range: Option<f32>,
}

impl<A: 'static> FindEnemy<A> {
    pub fn new(key: BbKey<A>, range: impl Into<Option<f32>>) -> Self {
        Self {
            key,
            range: range.into(),
        }
    }
}

impl<W> BtNode<W> for FindEnemy<W::Agent>
where
    W: TacticsWorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some((enemy, _, dist)) = query::nearest_enemy(&*world, agent) else {
            return BtStatus::Failure;
        };
        if self.range.is_some_and(|range| dist > range) {
            return BtStatus::Failure;
        }
        blackboard.insert(self.key, enemy);
        BtStatus::Success
    }
}

/// Find the nearest `tag`-marked entity, optionally within `range`, and
/// publish its id under `key`.
pub struct FindByTag<A: 'static> {
    key: BbKey<A>,
    tag: Tag,
    range: Option<f32>,
}

impl<A: 'static> FindByTag<A> {
    pub fn new(key: BbKey<A>, tag: Tag, range: impl Into<Option<f32>>) -> Self {
        Self {
            key,
            tag,
            range: range.into(),
        }
    }
}

impl<W> BtNode<W> for FindByTag<W::Agent>
where
    W: TacticsWorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some((target, _, dist)) = query::nearest_tagged(&*world, agent, self.tag) else {
            return BtStatus::Failure;
        };
        if self.range.is_some_and(|range| dist > range) {
            return BtStatus::Failure;
        }
        blackboard.insert(self.key, target);
        BtStatus::Success
    }
}

/// Track a waypoint chain: publish the current waypoint under `key`,
/// advancing along the chain whenever the agent stands on it. Fails when
/// the tracked waypoint no longer exists.
pub struct FindWaypoint<A: 'static> {
    key: BbKey<A>,
    start: A,
}

impl<A: 'static> FindWaypoint<A> {
    pub fn new(key: BbKey<A>, start: A) -> Self {
        Self { key, start }
    }
}

impl<W> BtNode<W> for FindWaypoint<W::Agent>
where
    W: TacticsWorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };

        let mut current = blackboard.get(self.key).copied().unwrap_or(self.start);
        if world.position(current) == Some(pos) {
            if let Some(next) = world.next_waypoint(current) {
                current = next;
            }
        }
        if world.position(current).is_none() {
            return BtStatus::Failure;
        }

        blackboard.insert(self.key, current);
        BtStatus::Success
    }
}

/// Step toward the entity a sibling published under `key`. Fails when the
/// key is absent or the entity is gone; otherwise succeeds.
pub struct MoveToTarget<A: 'static> {
    key: BbKey<A>,
}

impl<A: 'static> MoveToTarget<A> {
    pub fn new(key: BbKey<A>) -> Self {
        Self { key }
    }
}

impl<W> BtNode<W> for MoveToTarget<W::Agent>
where
    W: TacticsWorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(&target) = blackboard.get(self.key) else {
            return BtStatus::Failure;
        };
        let Some(target_pos) = world.position(target) else {
            return BtStatus::Failure;
        };
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        world.set_action(agent, pos.step_toward(target_pos));
        BtStatus::Success
    }
}

/// Step toward a position a sibling published under `key`.
pub struct MoveToPos {
    key: BbKey<GridPos>,
}

impl MoveToPos {
    pub fn new(key: BbKey<GridPos>) -> Self {
        Self { key }
    }
}

impl<W> BtNode<W> for MoveToPos
where
    W: TacticsWorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(&target) = blackboard.get(self.key) else {
            return BtStatus::Failure;
        };
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        world.set_action(agent, pos.step_toward(target));
        BtStatus::Success
    }
}

/// Patrol around a blackboard-stored anchor: the agent's position on
/// first visit becomes the anchor under `key`; beyond `dist` it walks
/// home, inside it wanders. Always succeeds.
pub struct PatrolAnchor {
    dist: f32,
    key: BbKey<GridPos>,
}

impl PatrolAnchor {
    pub fn new(dist: f32, key: BbKey<GridPos>) -> Self {
        Self { dist, key }
    }
}

impl<W> BtNode<W> for PatrolAnchor
where
    W: TacticsWorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };

        let anchor = match blackboard.get(self.key).copied() {
            Some(anchor) => anchor,
            None => {
                blackboard.insert(self.key, pos);
                pos
            }
        };

        if pos.distance(anchor) > self.dist {
            world.set_action(agent, pos.step_toward(anchor));
        } else {
            let mut rng = ctx.rng_for_agent(agent, PATROL_STREAM);
            world.set_action(agent, rng.pick_move());
        }
        BtStatus::Success
    }
}

/// Run any transition predicate as a condition leaf.
pub struct Check<W>
where
    W: WorldView + 'static,
{
    when: Box<dyn Transition<W>>,
}

impl<W> Check<W>
where
    W: WorldView + 'static,
{
    pub fn new(when: Box<dyn Transition<W>>) -> Self {
        Self { when }
    }
}

impl<W> BtNode<W> for Check<W>
where
    W: TacticsWorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) -> BtStatus {
        if self.when.ready(ctx, agent, &*world) {
            BtStatus::Success
        } else {
            BtStatus::Failure
        }
    }
}
