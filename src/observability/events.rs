//! Service lifecycle events
//!
//! Per-request work is traced with `ObservationScope`. These cover the
//! process itself.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file loaded
    ConfigLoaded,
    /// Listener bound, about to serve
    ServerStart,
    /// Server loop exited
    ServerStop,
    /// Server failed to start or crashed
    ServerFailed,
}

impl Event {
    /// Returns the event name as it appears in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStart => "SERVER_START",
            Event::ServerStop => "SERVER_STOP",
            Event::ServerFailed => "SERVER_FAILED",
        }
    }

    /// Fatal events are logged at FATAL severity
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
