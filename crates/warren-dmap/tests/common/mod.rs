#![allow(dead_code)] // each test binary exercises a different slice

use std::collections::BTreeMap;

use warren_core::{Action, GridPos, Tag, Team, WorldMut, WorldView};
use warren_dmap::{DmapWeights, Dungeon, Explorer, GridWorld, GridWorldMut};

#[derive(Debug, Default)]
pub struct Ent {
    pub pos: GridPos,
    pub team: Option<Team>,
    pub hp: Option<f32>,
    pub tags: Vec<Tag>,
    pub action: Action,
    pub weights: Option<DmapWeights>,
    pub explorer: Option<Explorer>,
}

impl Ent {
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            pos: GridPos::new(x, y),
            ..Self::default()
        }
    }

    pub fn team(mut self, team: u32) -> Self {
        self.team = Some(Team(team));
        self
    }

    pub fn hp(mut self, hp: f32) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

pub struct TestWorld {
    pub dungeon: Dungeon,
    pub ents: BTreeMap<u64, Ent>,
}

impl TestWorld {
    pub fn new(dungeon: Dungeon) -> Self {
        Self {
            dungeon,
            ents: BTreeMap::new(),
        }
    }

    pub fn spawn(&mut self, id: u64, ent: Ent) -> u64 {
        self.ents.insert(id, ent);
        id
    }
}

impl WorldView for TestWorld {
    type Agent = u64;
}

impl WorldMut for TestWorld {}

impl GridWorld for TestWorld {
    fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    fn entities(&self) -> Vec<u64> {
        self.ents.keys().copied().collect()
    }

    fn position(&self, entity: u64) -> Option<GridPos> {
        self.ents.get(&entity).map(|e| e.pos)
    }

    fn team(&self, entity: u64) -> Option<Team> {
        self.ents.get(&entity)?.team
    }

    fn hitpoints(&self, entity: u64) -> Option<f32> {
        self.ents.get(&entity)?.hp
    }

    fn has_tag(&self, entity: u64, tag: Tag) -> bool {
        self.ents
            .get(&entity)
            .is_some_and(|e| e.tags.contains(&tag))
    }

    fn dmap_weights(&self, entity: u64) -> Option<&DmapWeights> {
        self.ents.get(&entity)?.weights.as_ref()
    }
}

impl GridWorldMut for TestWorld {
    fn set_action(&mut self, entity: u64, action: Action) {
        if let Some(ent) = self.ents.get_mut(&entity) {
            ent.action = action;
        }
    }

    fn explorer_mut(&mut self, entity: u64) -> Option<&mut Explorer> {
        self.ents.get_mut(&entity)?.explorer.as_mut()
    }
}
