use std::fmt::Display;

use tokio_util::sync::CancellationToken;

use crate::shared::core::errors::Cancelled;
use crate::shared::infrastructure::notifications::Notifier;

/// Lifecycle shared by every detail and form controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Loading,
    Submitting,
    Error(String),
}

impl FormState {
    /// A request is on the wire; further submissions are refused.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, FormState::Loading | FormState::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Record `error` inline and as a transient notice, then hand it back to the caller.
    pub fn fail<E: Display>(&mut self, notifier: &dyn Notifier, error: E) -> E {
        let message = error.to_string();
        notifier.error(&message);
        *self = FormState::Error(message);
        error
    }

    /// Put a request on the wire. Returns what the form showed before, for `settle`.
    pub fn begin(&mut self, busy: FormState) -> FormState {
        std::mem::replace(self, busy)
    }

    /// Checked after the await. A cancelled operation hands the form back exactly as
    /// it was before `begin`, so a late response never writes and never leaves it busy.
    pub fn settle(&mut self, previous: FormState, cancel: &CancellationToken) -> Result<(), Cancelled> {
        if let Err(cancelled) = ensure_live(cancel) {
            *self = previous;
            return Err(cancelled);
        }
        Ok(())
    }
}

/// Checked after every await, before any state is written.
pub fn ensure_live(cancel: &CancellationToken) -> Result<(), Cancelled> {
    if cancel.is_cancelled() {
        return Err(Cancelled);
    }
    Ok(())
}
