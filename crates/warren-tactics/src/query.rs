//! Shared nearest-entity scans.
//!
//! All scans visit entities in the world's stable order and keep the
//! first-seen minimum, so results are deterministic when distances tie.

use warren_core::{GridPos, Tag};
use warren_dmap::GridWorld;

use crate::TacticsWorld;

/// Nearest opposing-team entity to `agent`, by Euclidean distance.
pub fn nearest_enemy<W>(world: &W, agent: W::Agent) -> Option<(W::Agent, GridPos, f32)>
where
    W: GridWorld,
{
    let pos = world.position(agent)?;
    let team = world.team(agent)?;

    let mut best: Option<(W::Agent, GridPos, f32)> = None;
    for other in world.entities() {
        let Some(other_team) = world.team(other) else {
            continue;
        };
        if !team.opposes(other_team) {
            continue;
        }
        let Some(other_pos) = world.position(other) else {
            continue;
        };
        let dist = pos.distance(other_pos);
        if best.as_ref().map_or(true, |&(_, _, d)| dist < d) {
            best = Some((other, other_pos, dist));
        }
    }
    best
}

/// Nearest `tag`-marked entity to `agent`.
pub fn nearest_tagged<W>(world: &W, agent: W::Agent, tag: Tag) -> Option<(W::Agent, GridPos, f32)>
where
    W: GridWorld,
{
    let pos = world.position(agent)?;

    let mut best: Option<(W::Agent, GridPos, f32)> = None;
    for other in world.entities() {
        if !world.has_tag(other, tag) {
            continue;
        }
        let Some(other_pos) = world.position(other) else {
            continue;
        };
        let dist = pos.distance(other_pos);
        if best.as_ref().map_or(true, |&(_, _, d)| dist < d) {
            best = Some((other, other_pos, dist));
        }
    }
    best
}

/// Chest-holding entities within [`crate::PICKUP_RANGE`] of `agent`.
pub fn chests_in_reach<W>(world: &W, agent: W::Agent) -> Vec<W::Agent>
where
    W: TacticsWorld,
{
    let Some(pos) = world.position(agent) else {
        return Vec::new();
    };

    world
        .entities()
        .into_iter()
        .filter(|&e| {
            world.chest(e).is_some()
                && world
                    .position(e)
                    .is_some_and(|cpos| cpos.distance(pos) <= crate::PICKUP_RANGE)
        })
        .collect()
}
