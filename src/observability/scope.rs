//! ObservationScope for automatic begin/complete logging
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` or `{name}_FAILED` with `duration_ms`
//! - Logs `{name}_INCOMPLETE` on drop if neither was called

use std::time::{Duration, Instant};

use super::logger::Logger;

/// A scope that logs the lifecycle of one unit of work
///
/// ```ignore
/// let scope = ObservationScope::with_fields("BEAUTIFY", &[("user_id", "demo_user")]);
/// // ... do work ...
/// scope.complete();
/// ```
pub struct ObservationScope {
    name: String,
    started: Instant,
    completed: bool,
    fields: Vec<(String, String)>,
}

impl ObservationScope {
    /// Create a new observation scope
    pub fn new(name: &str) -> Self {
        Self::with_fields(name, &[])
    }

    /// Create a new observation scope whose fields are repeated on every line
    pub fn with_fields(name: &str, fields: &[(&str, &str)]) -> Self {
        Logger::info(&format!("{}_BEGIN", name), fields);

        Self {
            name: name.to_string(),
            started: Instant::now(),
            completed: false,
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Time since the scope was opened
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Mark the scope as successfully completed
    pub fn complete(self) {
        self.complete_with_fields(&[]);
    }

    /// Mark the scope as successfully completed with additional fields
    pub fn complete_with_fields(mut self, extra_fields: &[(&str, &str)]) {
        self.completed = true;
        let duration = self.elapsed().as_millis().to_string();

        let mut all_fields = self.field_refs();
        all_fields.extend(extra_fields.iter().copied());
        all_fields.push(("duration_ms", duration.as_str()));

        Logger::info(&format!("{}_COMPLETE", self.name), &all_fields);
    }

    /// Mark the scope as failed with a reason
    pub fn fail(mut self, reason: &str) {
        self.completed = true;
        let duration = self.elapsed().as_millis().to_string();

        let mut all_fields = self.field_refs();
        all_fields.push(("reason", reason));
        all_fields.push(("duration_ms", duration.as_str()));

        Logger::error(&format!("{}_FAILED", self.name), &all_fields);
    }

    /// Check if the scope has been completed
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    fn field_refs(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.completed {
            let mut fields = self.field_refs();
            fields.push(("reason", "scope dropped without completion"));
            Logger::warn(&format!("{}_INCOMPLETE", self.name), &fields);
        }
    }
}
