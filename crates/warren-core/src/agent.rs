use core::fmt::Debug;

/// Stable identifier for an entity in the host's store.
///
/// The planning pass visits agents in `stable_id` order and derives
/// per-agent RNG streams from it, so the id must not change over an
/// entity's lifetime.
pub trait AgentId: Copy + Ord + Eq + Debug + 'static {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        u64::from(self)
    }
}

impl AgentId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}
