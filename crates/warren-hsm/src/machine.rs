use warren_core::{TickContext, WorldMut};

use crate::{State, Transition};

/// Stable handle to a state within its owning machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateId(usize);

impl StateId {
    pub fn index(self) -> usize {
        self.0
    }
}

struct Edge<W>
where
    W: WorldMut + 'static,
{
    when: Box<dyn Transition<W>>,
    to: StateId,
}

/// A directed graph of states with guarded edges.
///
/// The machine exclusively owns its states and predicate trees; dropping
/// it drops every nested machine and guard. It implements [`State`]
/// itself, so a whole machine nests inside another as a single state and
/// keeps its own current state across exits and re-entries.
pub struct StateMachine<W>
where
    W: WorldMut + 'static,
{
    states: Vec<Box<dyn State<W>>>,
    edges: Vec<Vec<Edge<W>>>,
    current: usize,
}

impl<W> StateMachine<W>
where
    W: WorldMut + 'static,
{
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            edges: Vec::new(),
            current: 0,
        }
    }

    /// Append a state. The first state added becomes the current one.
    pub fn add_state(&mut self, state: Box<dyn State<W>>) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        self.edges.push(Vec::new());
        id
    }

    /// Append a guarded edge, taking ownership of the predicate tree.
    /// Edges out of a state are scanned in insertion order.
    pub fn add_transition(&mut self, when: Box<dyn Transition<W>>, from: StateId, to: StateId) {
        assert!(from.0 < self.states.len(), "transition from unknown state");
        assert!(to.0 < self.states.len(), "transition to unknown state");
        self.edges[from.0].push(Edge { when, to });
    }

    pub fn current(&self) -> StateId {
        StateId(self.current)
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Fire at most one transition, or act in the current state.
    ///
    /// The first ready edge (insertion order) exits the old state, enters
    /// the new one, and ends the call — the new state first acts on the
    /// following planning step, and transitions never chain within one
    /// call. With no ready edge the current state acts; a nested machine
    /// applies the same rule one level down.
    pub fn act(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        assert!(!self.states.is_empty(), "state machine has no states");

        let fired = self.edges[self.current]
            .iter()
            .find(|edge| edge.when.ready(ctx, agent, &*world))
            .map(|edge| edge.to);

        if let Some(to) = fired {
            self.states[self.current].exit();
            self.current = to.0;
            self.states[self.current].enter();
            return;
        }

        self.states[self.current].act(ctx, agent, world);
    }
}

impl<W> Default for StateMachine<W>
where
    W: WorldMut + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> State<W> for StateMachine<W>
where
    W: WorldMut + 'static,
{
    fn act(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        StateMachine::act(self, ctx, agent, world);
    }
}
