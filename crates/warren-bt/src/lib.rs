//! Behavior tree engine.
//!
//! Trees are walked root-down once per planning step, left to right,
//! depth first. Nodes carry no cross-step state of their own — every
//! leaf finishes within the walk that reached it, and siblings talk only
//! through the agent's blackboard, so sibling order is part of a tree's
//! meaning.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod nodes;
pub mod policy;

pub use bt::{BtNode, BtStatus};
pub use nodes::{Condition, Selector, Sequence};
pub use policy::BtPolicy;
