use crate::AgentId;

/// Per-planning-step context shared by every agent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Turn counter; one planning step per turn.
    pub turn: u64,
    /// Frame delta handed to state `act` calls. Turn-based behaviors are
    /// free to ignore it.
    pub dt_seconds: f32,
    /// Simulation seed; all randomness derives from it.
    pub seed: u64,
}

impl TickContext {
    /// Deterministic generator for one agent on this turn. `stream`
    /// separates independent draws within the same turn.
    pub fn rng_for_agent<A: AgentId>(&self, agent: A, stream: u64) -> TurnRng {
        let salt = mix64(agent.stable_id().wrapping_add(0x9E37_79B9_7F4A_7C15));
        TurnRng::new(mix64(self.seed ^ salt ^ mix64(stream) ^ mix64(self.turn)))
    }
}

fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Small deterministic generator (SplitMix64 step function). Not
/// cryptographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRng {
    state: u64,
}

impl TurnRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        mix64(self.state)
    }

    /// Uniform draw in `0..n`. `n` must be non-zero.
    pub fn roll(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0, "roll range must be non-empty");
        let x = self.next_u64() >> 32;
        ((x * u64::from(n)) >> 32) as u32
    }

    /// Uniform pick among the four moves.
    pub fn pick_move(&mut self) -> crate::Action {
        crate::Action::MOVES[self.roll(4) as usize]
    }
}
