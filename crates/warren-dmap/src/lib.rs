//! Dungeon grid and influence-map (Dijkstra map) engine.
//!
//! Influence maps are dense scalar cost fields relaxed outward from seed
//! cells; they are rebuilt at the top of every planning step and read-only
//! for the rest of it. The follower blends several named fields into one
//! movement choice.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod dungeon;
pub mod follower;
pub mod gen;
pub mod map;
pub mod registry;
pub mod world;

pub use dungeon::{Dungeon, Tile};
pub use follower::{blend_at, choose_move, follow_dmaps, DmapWeights, MapWeight};
pub use gen::{Explorer, FLEE_REPULSION};
pub use map::{DijkstraMap, UNREACHABLE};
pub use registry::{MapRegistry, MapSpec};
pub use world::{GridWorld, GridWorldMut};
