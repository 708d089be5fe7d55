#![allow(dead_code)] // each test binary exercises a different slice

use std::collections::BTreeMap;

use warren_core::{Action, GridPos, Tag, Team, WorldMut, WorldView};
use warren_dmap::{DmapWeights, Dungeon, Explorer, GridWorld, GridWorldMut};
use warren_tactics::{Chest, Craft, TacticsWorld, TacticsWorldMut};

#[derive(Debug, Default)]
pub struct Ent {
    pub pos: GridPos,
    pub team: Option<Team>,
    pub hp: Option<f32>,
    pub tags: Vec<Tag>,
    pub action: Action,
    pub cooldown: Option<i32>,
    pub craft: Option<Craft>,
    pub chest: Option<Chest>,
    pub anchor: Option<GridPos>,
    pub next_waypoint: Option<u64>,
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

    pub fn cooldown(mut self, turns: i32) -> Self {
        self.cooldown = Some(turns);
        self
    }

    pub fn craft(mut self, resources: i32, crafted: i32, quota: i32) -> Self {
        self.craft = Some(Craft {
            resources,
            crafted,
            quota,
        });
        self
    }

    pub fn chest(mut self, resources: i32, items: i32) -> Self {
        self.chest = Some(Chest { resources, items });
        self.tags.push(Tag::Chest);
        self
    }

    pub fn anchor(mut self, x: i32, y: i32) -> Self {
        self.anchor = Some(GridPos::new(x, y));
        self
    }

    pub fn waypoint_to(mut self, next: u64) -> Self {
        self.next_waypoint = Some(next);
        self.tags.push(Tag::Waypoint);
        self
    }
}

/// Writes queued during a planning scan; applied by `commit`.
enum Effect {
    Heal(u64, f32),
    SetCooldown(u64, i32),
    CraftResources(u64, i32),
    CraftedItems(u64, i32),
    ChestResources(u64, i32),
    ChestItems(u64, i32),
    ClearChestItems(u64),
}

/// Reference host world: reads serve pre-turn snapshots, stat writes
/// queue until `commit`, action slots write through (they are outputs of
/// the planning pass, not observable state).
pub struct SimWorld {
    pub dungeon: Dungeon,
    pub ents: BTreeMap<u64, Ent>,
    pending: Vec<Effect>,
}

impl SimWorld {
    pub fn new(dungeon: Dungeon) -> Self {
        Self {
            dungeon,
            ents: BTreeMap::new(),
            pending: Vec::new(),
        }
    }

    pub fn open(width: u32, height: u32) -> Self {
        Self::new(Dungeon::new(width, height))
    }

    pub fn spawn(&mut self, id: u64, ent: Ent) -> u64 {
        self.ents.insert(id, ent);
        id
    }

    pub fn action(&self, id: u64) -> Action {
        self.ents[&id].action
    }

    pub fn pending_writes(&self) -> usize {
        self.pending.len()
    }
}

impl WorldView for SimWorld {
    type Agent = u64;
}

impl WorldMut for SimWorld {
    fn commit(&mut self) {
        for effect in std::mem::take(&mut self.pending) {
            match effect {
                Effect::Heal(id, amount) => {
                    if let Some(hp) = self.ents.get_mut(&id).and_then(|e| e.hp.as_mut()) {
                        *hp += amount;
                    }
                }
                Effect::SetCooldown(id, turns) => {
                    if let Some(ent) = self.ents.get_mut(&id) {
                        ent.cooldown = Some(turns);
                    }
                }
                Effect::CraftResources(id, delta) => {
                    if let Some(craft) = self.ents.get_mut(&id).and_then(|e| e.craft.as_mut()) {
                        craft.resources += delta;
                    }
                }
                Effect::CraftedItems(id, delta) => {
                    if let Some(craft) = self.ents.get_mut(&id).and_then(|e| e.craft.as_mut()) {
                        craft.crafted += delta;
                    }
                }
                Effect::ChestResources(id, delta) => {
                    if let Some(chest) = self.ents.get_mut(&id).and_then(|e| e.chest.as_mut()) {
                        chest.resources += delta;
                    }
                }
                Effect::ChestItems(id, delta) => {
                    if let Some(chest) = self.ents.get_mut(&id).and_then(|e| e.chest.as_mut()) {
                        chest.items += delta;
                    }
                }
                Effect::ClearChestItems(id) => {
                    if let Some(chest) = self.ents.get_mut(&id).and_then(|e| e.chest.as_mut()) {
                        chest.items = 0;
                    }
                }
            }
        }
    }
}

impl GridWorld for SimWorld {
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

impl GridWorldMut for SimWorld {
    fn set_action(&mut self, entity: u64, action: Action) {
        if let Some(ent) = self.ents.get_mut(&entity) {
            ent.action = action;
        }
    }

    fn explorer_mut(&mut self, entity: u64) -> Option<&mut Explorer> {
        self.ents.get_mut(&entity)?.explorer.as_mut()
    }
}

impl TacticsWorld for SimWorld {
    fn cooldown(&self, entity: u64) -> Option<i32> {
        self.ents.get(&entity)?.cooldown
    }

    fn craft(&self, entity: u64) -> Option<Craft> {
        self.ents.get(&entity)?.craft
    }

    fn chest(&self, entity: u64) -> Option<Chest> {
        self.ents.get(&entity)?.chest
    }

    fn patrol_anchor(&self, entity: u64) -> Option<GridPos> {
        self.ents.get(&entity)?.anchor
    }

    fn next_waypoint(&self, entity: u64) -> Option<u64> {
        self.ents.get(&entity)?.next_waypoint
    }
}

impl TacticsWorldMut for SimWorld {
    fn heal(&mut self, entity: u64, amount: f32) {
        self.pending.push(Effect::Heal(entity, amount));
    }

    fn set_cooldown(&mut self, entity: u64, turns: i32) {
        self.pending.push(Effect::SetCooldown(entity, turns));
    }

    fn add_craft_resources(&mut self, entity: u64, delta: i32) {
        self.pending.push(Effect::CraftResources(entity, delta));
    }

    fn add_crafted_items(&mut self, entity: u64, delta: i32) {
        self.pending.push(Effect::CraftedItems(entity, delta));
    }

    fn add_chest_resources(&mut self, entity: u64, delta: i32) {
        self.pending.push(Effect::ChestResources(entity, delta));
    }

    fn add_chest_items(&mut self, entity: u64, delta: i32) {
        self.pending.push(Effect::ChestItems(entity, delta));
    }

    fn clear_chest_items(&mut self, entity: u64) {
        self.pending.push(Effect::ClearChestItems(entity));
    }
}

pub fn ctx(turn: u64) -> warren_core::TickContext {
    warren_core::TickContext {
        turn,
        dt_seconds: 0.0,
        seed: 0xC0FFEE,
    }
}
