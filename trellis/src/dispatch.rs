//! Event dispatch table.
//!
//! Handlers are registered against an `(element id, event kind)` pair and run
//! in registration order when a matching event is dispatched.

use std::collections::HashMap;

use log::{debug, trace};
use pagedom::{Document, DomEvent, EventKind};

use crate::error::HandlerError;

/// A registered event handler.
pub type Handler<S> = Box<dyn FnMut(&mut S, &mut Document, &mut DomEvent) -> Result<(), HandlerError>>;

/// Result of event dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// No handler is registered for the event.
    NotHandled,
    /// At least one handler ran.
    Handled { default_prevented: bool },
}

impl DispatchResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, DispatchResult::NotHandled)
    }
}

/// Maps `(target, kind)` to the handlers listening for it.
pub struct Dispatcher<S> {
    handlers: HashMap<(String, EventKind), Vec<Handler<S>>>,
}

impl<S> Dispatcher<S> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for `kind` events targeting `target`.
    pub fn on<F>(&mut self, target: impl Into<String>, kind: EventKind, handler: F) -> &mut Self
    where
        F: FnMut(&mut S, &mut Document, &mut DomEvent) -> Result<(), HandlerError> + 'static,
    {
        let target = target.into();
        trace!("Registering {:?} handler on '{}'", kind, target);
        self.handlers
            .entry((target, kind))
            .or_default()
            .push(Box::new(handler));
        self
    }

    pub fn has_handlers(&self, target: &str, kind: EventKind) -> bool {
        self.handlers
            .get(&(target.to_string(), kind))
            .is_some_and(|h| !h.is_empty())
    }

    /// Run every handler registered for the event. Stops at the first error.
    pub fn dispatch(
        &mut self,
        state: &mut S,
        document: &mut Document,
        event: &mut DomEvent,
    ) -> Result<DispatchResult, HandlerError> {
        let Some(handlers) = self.handlers.get_mut(&(event.target.clone(), event.kind)) else {
            trace!("No handler for {:?} on '{}'", event.kind, event.target);
            return Ok(DispatchResult::NotHandled);
        };

        debug!(
            "Dispatching {:?} on '{}' to {} handler(s)",
            event.kind,
            event.target,
            handlers.len()
        );

        for handler in handlers.iter_mut() {
            handler(state, document, event)?;
        }

        Ok(DispatchResult::Handled {
            default_prevented: event.default_prevented(),
        })
    }
}

impl<S> Default for Dispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}
