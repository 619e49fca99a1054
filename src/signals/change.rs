//! Change detection against the last signal that was sent.

use crate::models::signal::Signal;

/// Notify when there is no previous marker or the category changed.
pub fn should_notify(new: Signal, marker: Option<Signal>) -> bool {
    marker != Some(new)
}
