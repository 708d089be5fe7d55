use crate::AgentId;

/// Read-only world access.
///
/// The kernel does not prescribe which queries a world must expose;
/// subsystems (influence maps, tactics) define extension traits for the
/// components they read.
pub trait WorldView {
    type Agent: AgentId;
}

/// Write access for the planning pass.
pub trait WorldMut: WorldView {
    /// Publish writes buffered during the planning scan.
    ///
    /// Planning reads pre-turn state; hosts that queue stat mutations
    /// (heals, chest transfers, cooldowns) apply them here so no agent
    /// observes another's in-flight turn. Write-through worlds keep the
    /// default no-op.
    fn commit(&mut self) {}
}
