//! Blackboard-routed trace events.
//!
//! Engines emit one event per notable decision (a state transition, a tree
//! walk outcome) into the planning agent's blackboard — but only when the
//! host installed a log or sink there, so the steady-state cost is a map
//! lookup. Events are dumb data for later rendering by tooling.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use warren_core::{BbKey, Blackboard};

/// One recorded decision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub turn: u64,
    pub tag: Cow<'static, str>,
    /// Stable id of the agent the event belongs to.
    pub agent: u64,
    /// Event-specific payload word (a state id, a status code, a count).
    pub detail: u64,
}

impl TraceEvent {
    pub fn new(turn: u64, tag: impl Into<Cow<'static, str>>, agent: u64) -> Self {
        Self {
            turn,
            tag: tag.into(),
            agent,
            detail: 0,
        }
    }

    pub fn with_detail(mut self, detail: u64) -> Self {
        self.detail = detail;
        self
    }
}

/// Streaming consumer for hosts that want events as they happen.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

/// In-memory event buffer.
#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

/// Install under this key to collect events in memory.
pub const TRACE_LOG: BbKey<TraceLog> = BbKey::named("trace.log");
/// Install under this key to stream events into a host-provided sink.
pub const TRACE_SINK: BbKey<Box<dyn TraceSink>> = BbKey::named("trace.sink");

pub fn emit(blackboard: &mut Blackboard, event: TraceEvent) {
    if let Some(log) = blackboard.get_mut(TRACE_LOG) {
        log.events.push(event.clone());
    }
    if let Some(sink) = blackboard.get_mut(TRACE_SINK) {
        sink.record(event);
    }
}
