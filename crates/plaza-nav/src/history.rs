//! # Browser History Mirror
//!
//! The navigation stack mirrors every push into an external history
//! record — in the browser that is `history.pushState`; here it is the
//! [`HistorySink`] seam. Pops are not mirrored: the back signal *comes
//! from* the history mechanism, which has already moved.

/// An external record of pushed locations.
pub trait HistorySink {
    /// Record that `location` became the externally observable path.
    fn push_location(&mut self, location: &str);
}

/// A history sink that remembers every pushed location, for drivers and
/// tests that want to assert on the mirrored path sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedHistory {
    locations: Vec<String>,
}

impl RecordedHistory {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every pushed location, oldest first.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// The most recently pushed location, if any.
    pub fn current(&self) -> Option<&str> {
        self.locations.last().map(String::as_str)
    }
}

impl HistorySink for RecordedHistory {
    fn push_location(&mut self, location: &str) {
        self.locations.push(location.to_string());
    }
}

/// A history sink that discards pushes, for headless pipelines that do
/// not observe locations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHistory;

impl HistorySink for NullHistory {
    fn push_location(&mut self, _location: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_history_accumulates_in_order() {
        let mut history = RecordedHistory::new();
        history.push_location("/");
        history.push_location("/profile");
        history.push_location("/project/p7");
        assert_eq!(history.locations(), &["/", "/profile", "/project/p7"]);
        assert_eq!(history.current(), Some("/project/p7"));
    }

    #[test]
    fn empty_history_has_no_current() {
        assert_eq!(RecordedHistory::new().current(), None);
    }

    #[test]
    fn null_history_discards() {
        let mut history = NullHistory;
        history.push_location("/anything");
    }
}
