//! The named influence-map generators.
//!
//! Each generator rebuilds its field from the current world; an agent with
//! no qualifying seeds gets an all-sentinel field, which downstream
//! consumers already treat as "nowhere to go".

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use warren_core::{GridPos, Tag, Team};

use crate::{DijkstraMap, Dungeon, GridWorld, GridWorldMut};

/// Repulsion factor applied to approach costs when building a flee field.
pub const FLEE_REPULSION: f32 = 1.2;

/// Cost to the nearest agent of `team`.
pub fn approach<W: GridWorld>(world: &W, team: Team) -> DijkstraMap {
    let mut seeds = Vec::new();
    for entity in world.entities() {
        if world.team(entity) != Some(team) {
            continue;
        }
        if let Some(pos) = world.position(entity) {
            seeds.push(pos);
        }
    }
    DijkstraMap::compute(world.dungeon(), &seeds)
}

/// The approach field negated and scaled by [`FLEE_REPULSION`], then
/// re-relaxed so adjacent floor cells stay within unit cost of each other
/// and gradient descent remains locally consistent.
pub fn flee<W: GridWorld>(world: &W, team: Team) -> DijkstraMap {
    let mut map = approach(world, team);
    map.scale_reachable(-FLEE_REPULSION);
    map.relax(world.dungeon());
    map
}

/// Cost to the nearest hive-marked entity.
pub fn hive_pack<W: GridWorld>(world: &W) -> DijkstraMap {
    let mut seeds = Vec::new();
    for entity in world.entities() {
        if !world.has_tag(entity, Tag::Hive) {
            continue;
        }
        if let Some(pos) = world.position(entity) {
            seeds.push(pos);
        }
    }
    DijkstraMap::compute(world.dungeon(), &seeds)
}

/// Cost to `agent`'s wounded allies: seeds every same-team entity other
/// than `agent` whose hit points are strictly below `threshold`.
pub fn low_hp_ally<W: GridWorld>(world: &W, agent: W::Agent, threshold: f32) -> DijkstraMap {
    let Some(my_team) = world.team(agent) else {
        return DijkstraMap::sentinel(world.dungeon());
    };

    let mut seeds = Vec::new();
    for entity in world.entities() {
        if entity == agent || world.team(entity) != Some(my_team) {
            continue;
        }
        let Some(hp) = world.hitpoints(entity) else {
            continue;
        };
        if hp >= threshold {
            continue;
        }
        if let Some(pos) = world.position(entity) {
            seeds.push(pos);
        }
    }
    DijkstraMap::compute(world.dungeon(), &seeds)
}

/// Cost to the engagement ring around `team`: seeds every floor cell
/// within Manhattan radius `radius` of a `team` agent that the agent can
/// reach by a straight axis-dominant walk crossing no wall.
pub fn radius_approach<W: GridWorld>(world: &W, team: Team, radius: i32) -> DijkstraMap {
    let dungeon = world.dungeon();
    let mut seeds = Vec::new();
    for entity in world.entities() {
        if world.team(entity) != Some(team) {
            continue;
        }
        let Some(pos) = world.position(entity) else {
            continue;
        };
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx.abs() + dy.abs() > radius {
                    continue;
                }
                let cell = GridPos::new(pos.x + dx, pos.y + dy);
                if dungeon.is_floor(cell) && dungeon.straight_walk_clear(pos, cell) {
                    seeds.push(cell);
                }
            }
        }
    }
    DijkstraMap::compute(dungeon, &seeds)
}

/// Marks each explorer's surroundings explored, then seeds the nearest
/// unexplored floor cell per explorer. The explored set is persistent
/// per-agent state and is updated in place on every call.
pub fn explore<W: GridWorldMut>(world: &mut W) -> DijkstraMap {
    // Clone releases the dungeon borrow so explorer state can be updated
    // while scanning.
    let dungeon = world.dungeon().clone();
    let mut seeds = Vec::new();

    for entity in world.entities() {
        let Some(pos) = world.position(entity) else {
            continue;
        };
        let Some(explorer) = world.explorer_mut(entity) else {
            continue;
        };

        let mut frontier: Option<(i32, GridPos)> = None;
        for y in 0..dungeon.height() {
            for x in 0..dungeon.width() {
                let cell = GridPos::new(x, y);
                if !dungeon.is_floor(cell) {
                    continue;
                }
                let range = pos.manhattan(cell);
                if range <= explorer.radius() {
                    explorer.mark(cell);
                }
                if !explorer.is_explored(cell) && frontier.map_or(true, |(d, _)| range < d) {
                    frontier = Some((range, cell));
                }
            }
        }
        if let Some((_, cell)) = frontier {
            seeds.push(cell);
        }
    }

    DijkstraMap::compute(&dungeon, &seeds)
}

/// Persistent frontier-tracking state for the explore map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Explorer {
    radius: i32,
    width: i32,
    explored: Vec<bool>,
}

impl Explorer {
    pub fn new(radius: i32, dungeon: &Dungeon) -> Self {
        Self {
            radius,
            width: dungeon.width(),
            explored: vec![false; (dungeon.width() * dungeon.height()) as usize],
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn is_explored(&self, pos: GridPos) -> bool {
        let idx = (pos.y * self.width + pos.x) as usize;
        self.explored.get(idx).copied().unwrap_or(false)
    }

    fn mark(&mut self, pos: GridPos) {
        let idx = (pos.y * self.width + pos.x) as usize;
        if let Some(cell) = self.explored.get_mut(idx) {
            *cell = true;
        }
    }
}
