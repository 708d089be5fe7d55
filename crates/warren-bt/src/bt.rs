use warren_core::{Blackboard, TickContext, WorldMut};

/// Outcome of one node visit. Every node completes within the walk that
/// reached it; there is no cross-step "running" state in this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BtStatus {
    Success,
    Failure,
}

pub trait BtNode<W>: 'static
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus;
}
