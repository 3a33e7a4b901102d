//! Observability for the PromoSuite backend
//!
//! - Structured logging (JSON, one event per line)
//! - Lifecycle events for the server process
//! - Scoped begin/complete tracing with durations for request handlers
//!
//! ```ignore
//! use promosuite::observability::{Logger, ObservationScope};
//!
//! Logger::info("LAYOUT_TITLE_CENTERED", &[("preview", "Grand Opening")]);
//!
//! let scope = ObservationScope::new("INPAINT");
//! // ... do work ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

fn event_severity(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event_severity(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event_severity(event), event.as_str(), fields);
}
