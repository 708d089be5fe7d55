use warren_core::{TickContext, WorldView};

/// Boolean guard over world/agent state, re-evaluated fresh on every
/// check. Guards are immutable after construction; composite guards own
/// their children, so dropping a tree frees it recursively.
pub trait Transition<W>: 'static
where
    W: WorldView + 'static,
{
    fn ready(&self, ctx: &TickContext, agent: W::Agent, world: &W) -> bool;
}

impl<W, F> Transition<W> for F
where
    W: WorldView + 'static,
    F: Fn(&TickContext, W::Agent, &W) -> bool + 'static,
{
    fn ready(&self, ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        self(ctx, agent, world)
    }
}

/// Negation of an owned child guard.
pub struct Not<W>
where
    W: WorldView + 'static,
{
    inner: Box<dyn Transition<W>>,
}

impl<W> Not<W>
where
    W: WorldView + 'static,
{
    pub fn new(inner: Box<dyn Transition<W>>) -> Self {
        Self { inner }
    }
}

impl<W> Transition<W> for Not<W>
where
    W: WorldView + 'static,
{
    fn ready(&self, ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        !self.inner.ready(ctx, agent, world)
    }
}

/// Conjunction of two owned child guards. Both children are evaluated on
/// every check.
pub struct And<W>
where
    W: WorldView + 'static,
{
    lhs: Box<dyn Transition<W>>,
    rhs: Box<dyn Transition<W>>,
}

impl<W> And<W>
where
    W: WorldView + 'static,
{
    pub fn new(lhs: Box<dyn Transition<W>>, rhs: Box<dyn Transition<W>>) -> Self {
        Self { lhs, rhs }
    }
}

impl<W> Transition<W> for And<W>
where
    W: WorldView + 'static,
{
    fn ready(&self, ctx: &TickContext, agent: W::Agent, world: &W) -> bool {
        let lhs = self.lhs.ready(ctx, agent, world);
        let rhs = self.rhs.ready(ctx, agent, world);
        lhs && rhs
    }
}
