//! Kernel primitives for the warren decision core.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod blackboard;
pub mod brain;
pub mod geom;
pub mod policy;
pub mod tick;
pub mod world;

pub use agent::AgentId;
pub use blackboard::{BbKey, Blackboard};
pub use brain::{plan_all, Brain};
pub use geom::{Action, GridPos, Tag, Team};
pub use policy::Policy;
pub use tick::{TickContext, TurnRng};
pub use world::{WorldMut, WorldView};
