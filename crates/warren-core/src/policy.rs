use crate::{Blackboard, TickContext, WorldMut};

/// The single planning seam. Both decision drivers — hierarchical state
/// machines and behavior trees — implement this; an agent carries exactly
/// one.
pub trait Policy<W>: 'static
where
    W: WorldMut + 'static,
{
    /// Plan one turn: read pre-turn state and write at most this agent's
    /// own action slot and stat fields.
    fn plan(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    );
}
