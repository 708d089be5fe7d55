use warren_core::{TickContext, WorldMut};

/// One per-turn behavior. `enter`/`exit` default to no-ops.
///
/// `act` may read any component of the acting agent and of other queried
/// entities, but writes only the agent's own action slot and stat fields.
pub trait State<W>: 'static
where
    W: WorldMut + 'static,
{
    fn enter(&mut self) {}

    fn exit(&mut self) {}

    fn act(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W);
}
