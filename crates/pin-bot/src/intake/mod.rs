//! Platform event intake
//!
//! Redis Pub/Sub subscriber, envelope decoding, and the listener chain the
//! decoded events run through.

pub mod dispatcher;
pub mod events;
pub mod listener;
pub mod subscriber;

pub use dispatcher::{EventDispatcher, EventListener, Propagation};
pub use events::{EventDecodeError, EventEnvelope, PlatformEvent, PlatformEventType};
pub use listener::ReactionPinListener;
pub use subscriber::{ping, EventSubscriber, SubscriberConfig, SubscriberError, SubscriberResult};
