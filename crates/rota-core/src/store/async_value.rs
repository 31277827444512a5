//! Lifecycle state for asynchronous operations.

/// State of an asynchronous operation shared by every slice that mirrors a
/// remote call: nothing requested yet, request in flight, finished with a
/// value, or failed with a display message.
///
/// `Complete` and `Error` are terminal for a single request; a slice may
/// move back to `InProgress` when the operation is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncValue<T> {
    /// No request has been made.
    NotStarted,
    /// Request in flight; no data, no error.
    InProgress,
    /// Request finished with a value.
    Complete(T),
    /// Request failed; holds a human-readable message.
    Error(String),
}

// Not derived: a derive would bound `T: Default`, and the default tag
// carries no value.
impl<T> Default for AsyncValue<T> {
    fn default() -> Self {
        AsyncValue::NotStarted
    }
}

impl<T> AsyncValue<T> {
    /// Returns true while a request is in flight.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, AsyncValue::InProgress)
    }

    /// Returns the completed value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            AsyncValue::Complete(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            AsyncValue::Error(message) => Some(message),
            _ => None,
        }
    }
}
