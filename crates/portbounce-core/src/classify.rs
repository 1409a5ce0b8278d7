// ── No-change classification ──
//
// Catalyst Center rejects a state change that would not change anything
// with an HTTP error and a free-text message. There is no stable error
// code for it, so the check is a predicate over the raw response body.

/// Message the controller uses when the requested state is already in place.
pub const NO_CHANGE_MARKER: &str = "No change in setting";

/// Decides whether an error body means "already in the requested state".
pub trait NoChangeClassifier: Send + Sync {
    fn is_no_change(&self, body: &str) -> bool;
}

/// Default classifier: substring match on [`NO_CHANGE_MARKER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChangeInSetting;

impl NoChangeClassifier for NoChangeInSetting {
    fn is_no_change(&self, body: &str) -> bool {
        body.contains(NO_CHANGE_MARKER)
    }
}

impl<F> NoChangeClassifier for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_no_change(&self, body: &str) -> bool {
        self(body)
    }
}
