use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use warren_core::{AgentId, Team};

use crate::{gen, DijkstraMap, GridWorldMut};

/// How to rebuild one named influence field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MapSpec<A> {
    /// Cost to the nearest agent of a team.
    Approach { team: Team },
    /// Negated, re-relaxed approach field; pushes away from the team.
    Flee { team: Team },
    /// Cost to the nearest hive-marked entity.
    HivePack,
    /// Cost to one agent's wounded allies.
    LowHpAlly { agent: A, threshold: f32 },
    /// Cost to cells in clear straight-walk range of a team agent.
    RadiusApproach { team: Team, radius: i32 },
    /// Cost to each explorer's nearest unexplored frontier.
    Explore,
}

/// Owns the named influence fields and the recipes to rebuild them.
///
/// `regenerate` runs at the top of every planning step; every map is
/// rebuilt from scratch and stays read-only until the next step. Stale
/// fields never survive a regeneration.
pub struct MapRegistry<A> {
    entries: Vec<(String, MapSpec<A>)>,
    maps: BTreeMap<String, DijkstraMap>,
}

impl<A: AgentId> MapRegistry<A> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            maps: BTreeMap::new(),
        }
    }

    /// Register a named field, replacing any recipe with the same name.
    pub fn insert(&mut self, name: impl Into<String>, spec: MapSpec<A>) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = spec;
        } else {
            self.entries.push((name, spec));
        }
    }

    pub fn get(&self, name: &str) -> Option<&DijkstraMap> {
        self.maps.get(name)
    }

    /// Rebuild every registered field from the current world.
    pub fn regenerate<W>(&mut self, world: &mut W)
    where
        W: GridWorldMut<Agent = A> + 'static,
    {
        self.maps.clear();
        for (name, spec) in &self.entries {
            let map = match *spec {
                MapSpec::Approach { team } => gen::approach(world, team),
                MapSpec::Flee { team } => gen::flee(world, team),
                MapSpec::HivePack => gen::hive_pack(world),
                MapSpec::LowHpAlly { agent, threshold } => {
                    gen::low_hp_ally(world, agent, threshold)
                }
                MapSpec::RadiusApproach { team, radius } => {
                    gen::radius_approach(world, team, radius)
                }
                MapSpec::Explore => gen::explore(world),
            };
            self.maps.insert(name.clone(), map);
        }
    }
}

impl<A: AgentId> Default for MapRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}
