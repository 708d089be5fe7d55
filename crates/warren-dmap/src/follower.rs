#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use warren_core::{Action, AgentId, GridPos};

use crate::{GridWorldMut, MapRegistry, UNREACHABLE};

/// Shaping for one named field: a cell contributes `(value * mult) ^ pow`
/// to the blend.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapWeight {
    pub mult: f32,
    pub pow: f32,
}

impl MapWeight {
    pub const fn new(mult: f32, pow: f32) -> Self {
        Self { mult, pow }
    }
}

/// Per-agent table of named fields to blend. Tuning which maps are
/// attached reproduces approach, flee, pack, or explore movement through
/// the one generic follower.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DmapWeights {
    entries: Vec<(String, MapWeight)>,
}

impl DmapWeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, weight: MapWeight) -> Self {
        self.insert(name, weight);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, weight: MapWeight) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = weight;
        } else {
            self.entries.push((name, weight));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, MapWeight)> {
        self.entries.iter().map(|(n, w)| (n.as_str(), *w))
    }
}

/// Blended cost of standing on `pos`. Sentinel values pass through
/// unshaped so walls and unreached cells never win the minimum; a map
/// missing from the registry contributes nothing.
pub fn blend_at<A: AgentId>(
    registry: &MapRegistry<A>,
    weights: &DmapWeights,
    pos: GridPos,
) -> f32 {
    let mut total = 0.0;
    for (name, weight) in weights.iter() {
        let Some(map) = registry.get(name) else {
            continue;
        };
        let value = map.at(pos);
        total += if value < UNREACHABLE {
            (value * weight.mult).powf(weight.pow)
        } else {
            value
        };
    }
    total
}

/// Cheapest of the five candidate actions for an agent standing on `pos`.
/// Strict-less comparison keeps the first-seen candidate, so ties resolve
/// in {stay, left, right, up, down} order.
pub fn choose_move<A: AgentId>(
    registry: &MapRegistry<A>,
    weights: &DmapWeights,
    pos: GridPos,
) -> Action {
    let mut best = Action::Nop;
    let mut best_cost = blend_at(registry, weights, pos);
    for action in Action::MOVES {
        let cost = blend_at(registry, weights, action.apply(pos));
        if cost < best_cost {
            best_cost = cost;
            best = action;
        }
    }
    best
}

/// Resolve a move for every weight-carrying agent in one pass.
pub fn follow_dmaps<W>(world: &mut W, registry: &MapRegistry<W::Agent>)
where
    W: GridWorldMut + 'static,
{
    for entity in world.entities() {
        let Some(pos) = world.position(entity) else {
            continue;
        };
        let action = match world.dmap_weights(entity) {
            Some(weights) => choose_move(registry, weights, pos),
            None => continue,
        };
        world.set_action(entity, action);
    }
}
