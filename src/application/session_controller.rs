use std::cell::RefCell;

use leptos::*;

use crate::domain::errors::DomainResult;
use crate::domain::events::{DomainEvent, EventDispatcher, InMemoryEventDispatcher, SessionEvent};
use crate::domain::logging::LogComponent;
use crate::domain::session::{SessionCommand, SessionState};
use crate::global_state;
use crate::{log_debug, log_info, log_warn};

/// Applies session commands to snapshots and publishes what changed.
///
/// The controller never mutates a snapshot it is handed; it returns the
/// successor state so the caller can replace the stored value in one step.
pub struct SessionController {
    events: InMemoryEventDispatcher,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionController {
    pub fn new() -> Self {
        Self { events: InMemoryEventDispatcher::new() }
    }

    /// Controller whose events are written to the domain logger
    pub fn with_logging() -> Self {
        let mut controller = Self::new();
        controller.subscribe(log_event);
        controller
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&SessionEvent) + 'static,
    {
        self.events.subscribe(handler);
    }

    /// Returns `Ok(None)` when the command left the state untouched.
    pub fn execute(
        &self,
        current: &SessionState,
        command: SessionCommand,
    ) -> DomainResult<Option<SessionState>> {
        let mut next = current.clone();
        let Some(event) = next.apply(command)? else {
            return Ok(None);
        };
        self.events.publish(&event);
        Ok((next != *current).then_some(next))
    }
}

fn log_event(event: &SessionEvent) {
    match event {
        SessionEvent::LookupRequested(_) | SessionEvent::CurrencySelected(_) => {
            log_info!(LogComponent::Application("Session"), "{}", event);
        }
        _ => {
            log_debug!(LogComponent::Application("Session"), "{}: {}", event.event_type(), event);
        }
    }
}

thread_local! {
    static CONTROLLER: RefCell<SessionController> = RefCell::new(SessionController::with_logging());
}

/// Runs `command` against the page session and stores the result.
///
/// The signal is written only when the state actually changed, so a no-op
/// command does not re-render anything. Its event is still published, so a
/// repeated reveal is logged as another lookup.
pub fn dispatch(command: SessionCommand) -> DomainResult<()> {
    let signal = global_state::session();
    let next = signal.with_untracked(|current| {
        CONTROLLER.with(|controller| controller.borrow().execute(current, command))
    })?;
    if let Some(next) = next {
        signal.set(next);
    }
    Ok(())
}

/// [`dispatch`] for event handlers, which have nowhere to send an error.
pub fn dispatch_or_log(command: SessionCommand) {
    if let Err(err) = dispatch(command) {
        log_warn!(LogComponent::Application("Session"), "Command rejected: {}", err);
    }
}
