//! Hierarchical state machine engine.
//!
//! A machine owns a list of states and guarded directed edges between
//! them. States are behaviors with `enter`/`exit` hooks; a machine is
//! itself a state, so machines nest. At most one transition fires per
//! `act` call, and a freshly entered state first acts on the following
//! planning step.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod machine;
pub mod policy;
pub mod state;
pub mod transition;

pub use machine::{StateId, StateMachine};
pub use policy::HsmPolicy;
pub use state::State;
pub use transition::{And, Not, Transition};
