//! ReactionPin event listener

use async_trait::async_trait;
use std::sync::Arc;

use pin_service::{PinController, ServiceContext};

use super::dispatcher::{EventListener, Propagation};
use super::events::PlatformEvent;

/// Routes platform events to the pin controller
pub struct ReactionPinListener {
    ctx: Arc<ServiceContext>,
}

impl ReactionPinListener {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl EventListener for ReactionPinListener {
    fn name(&self) -> &'static str {
        "reactionpin"
    }

    async fn on_event(&self, event: &PlatformEvent) -> Propagation {
        let controller = PinController::new(&self.ctx);
        match event {
            PlatformEvent::Reaction(reaction) => controller.handle(reaction).await.into(),
            PlatformEvent::MessageCreate(message) => {
                if message.is_authored_by(self.ctx.bot_user_id()) {
                    Propagation::from_consumed(controller.on_bot_message(message).await)
                } else {
                    Propagation::Continue
                }
            }
        }
    }
}
