//! Gameplay predicates, states, and behavior-tree leaves for grid
//! roguelike agents.
//!
//! Everything here reads the world through the [`TacticsWorld`] traits
//! and fails soft: a query with no qualifying entity plans nothing (the
//! agent idles for a turn), never errors.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod behaviors;
pub mod predicates;
pub mod query;
pub mod states;
pub mod world;

pub use behaviors::{
    Check, FindByTag, FindEnemy, FindWaypoint, MoveToPos, MoveToTarget, PatrolAnchor,
};
pub use predicates::{
    AllyHitpointsBelow, ChestFilled, CooldownElapsed, CraftedEnough, EnemyNear, EnemyReachable,
    HitpointsBelow, LootedEnough, TagNear,
};
pub use states::{
    Attack, CraftItems, FleeFromEnemy, HealAllies, HealSelf, Idle, LootChest, MoveToEnemy,
    MoveToTagged, Patrol, PatrolTagged, Sleep,
};
pub use world::{Chest, Craft, TacticsWorld, TacticsWorldMut, PICKUP_RANGE};
