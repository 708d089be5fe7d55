use warren_core::{AgentId, Blackboard, Policy, TickContext, WorldMut};
use warren_trace::{emit, TraceEvent};

use crate::bt::{BtNode, BtStatus};

/// Drives a behavior tree as an agent's planning policy: one full walk
/// per planning step.
pub struct BtPolicy<W>
where
    W: WorldMut + 'static,
{
    root: Box<dyn BtNode<W>>,
    last: Option<BtStatus>,
}

impl<W> BtPolicy<W>
where
    W: WorldMut + 'static,
{
    pub fn new(root: Box<dyn BtNode<W>>) -> Self {
        Self { root, last: None }
    }

    pub fn last_status(&self) -> Option<BtStatus> {
        self.last
    }
}

impl<W> Policy<W> for BtPolicy<W>
where
    W: WorldMut + 'static,
{
    fn plan(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) {
        let status = self.root.tick(ctx, agent, world, blackboard);
        self.last = Some(status);
        emit(
            blackboard,
            TraceEvent::new(ctx.turn, "bt.tick", agent.stable_id())
                .with_detail(matches!(status, BtStatus::Success) as u64),
        );
    }
}
