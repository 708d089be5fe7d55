use crate::{AgentId, Blackboard, Policy, TickContext, WorldMut};

/// One agent's decision driver plus its private scratch memory.
pub struct Brain<W>
where
    W: WorldMut + 'static,
{
    pub agent: W::Agent,
    pub blackboard: Blackboard,
    pub policy: Box<dyn Policy<W>>,
}

impl<W> Brain<W>
where
    W: WorldMut + 'static,
{
    pub fn new(agent: W::Agent, policy: Box<dyn Policy<W>>) -> Self {
        Self {
            agent,
            blackboard: Blackboard::new(),
            policy,
        }
    }

    pub fn plan(&mut self, ctx: &TickContext, world: &mut W) {
        self.policy
            .plan(ctx, self.agent, world, &mut self.blackboard);
    }
}

/// The per-turn planning pass: plan every agent against the pre-turn
/// world in stable id order, then commit buffered writes. The external
/// resolution pass consumes the action slots afterwards.
pub fn plan_all<W>(ctx: &TickContext, world: &mut W, brains: &mut [Brain<W>])
where
    W: WorldMut + 'static,
{
    brains.sort_by_key(|b| b.agent.stable_id());
    for brain in brains.iter_mut() {
        brain.plan(ctx, world);
    }
    world.commit();
}
