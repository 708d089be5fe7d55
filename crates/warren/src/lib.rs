//! Umbrella crate that re-exports the `warren-*` building blocks.
//!
//! The decision core plans one discrete action per agent per turn:
//! regenerate the influence maps, run every agent's state machine or
//! behavior tree, and hand the proposed actions to the host's resolution
//! pass.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use warren_core as core;

#[cfg(feature = "hsm")]
#[cfg_attr(docsrs, doc(cfg(feature = "hsm")))]
pub use warren_hsm as hsm;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use warren_bt as bt;

#[cfg(feature = "dmap")]
#[cfg_attr(docsrs, doc(cfg(feature = "dmap")))]
pub use warren_dmap as dmap;

#[cfg(feature = "tactics")]
#[cfg_attr(docsrs, doc(cfg(feature = "tactics")))]
pub use warren_tactics as tactics;

#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub use warren_trace as trace;
