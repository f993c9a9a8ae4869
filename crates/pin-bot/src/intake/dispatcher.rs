//! Event dispatcher
//!
//! Runs registered listeners in order for each event. A listener that
//! consumes the event stops the listeners after it.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;

use pin_core::Outcome;

use super::events::PlatformEvent;

/// Whether later listeners still see an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

impl Propagation {
    /// Map a consumed flag
    pub fn from_consumed(consumed: bool) -> Self {
        if consumed {
            Self::Stop
        } else {
            Self::Continue
        }
    }
}

impl From<Outcome> for Propagation {
    fn from(outcome: Outcome) -> Self {
        Self::from_consumed(outcome.consumed)
    }
}

/// A consumer of platform events
#[async_trait]
pub trait EventListener: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    async fn on_event(&self, event: &PlatformEvent) -> Propagation;
}

/// Ordered listener chain
#[derive(Default)]
pub struct EventDispatcher {
    listeners: Vec<Arc<dyn EventListener>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener to the chain
    #[must_use]
    pub fn with_listener(mut self, listener: Arc<dyn EventListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Run the chain for one event
    pub async fn dispatch(&self, event: &PlatformEvent) -> Propagation {
        for listener in &self.listeners {
            if listener.on_event(event).await == Propagation::Stop {
                tracing::trace!(
                    listener = listener.name(),
                    event_type = %event.event_type(),
                    "Event consumed"
                );
                return Propagation::Stop;
            }
        }
        Propagation::Continue
    }

    /// Handle an event on its own task so slow platform calls never block intake
    pub fn spawn(self: &Arc<Self>, event: PlatformEvent) -> JoinHandle<Propagation> {
        let dispatcher = Arc::clone(self);
        tokio::spawn(async move { dispatcher.dispatch(&event).await })
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.listeners.iter().map(|l| l.name()).collect();
        f.debug_struct("EventDispatcher").field("listeners", &names).finish()
    }
}
