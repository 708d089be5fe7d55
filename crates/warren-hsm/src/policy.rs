use warren_core::{AgentId, Blackboard, Policy, TickContext, WorldMut};
use warren_trace::{emit, TraceEvent};

use crate::StateMachine;

/// Drives a state machine as an agent's planning policy.
pub struct HsmPolicy<W>
where
    W: WorldMut + 'static,
{
    machine: StateMachine<W>,
}

impl<W> HsmPolicy<W>
where
    W: WorldMut + 'static,
{
    /// Panics on an empty machine: the initial state would be undefined.
    pub fn new(machine: StateMachine<W>) -> Self {
        assert!(!machine.is_empty(), "policy machine has no states");
        Self { machine }
    }

    pub fn machine(&self) -> &StateMachine<W> {
        &self.machine
    }
}

impl<W> Policy<W> for HsmPolicy<W>
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
        let before = self.machine.current();
        self.machine.act(ctx, agent, world);
        let after = self.machine.current();
        if after != before {
            emit(
                blackboard,
                TraceEvent::new(ctx.turn, "hsm.enter", agent.stable_id())
                    .with_detail(after.index() as u64),
            );
        }
    }
}
