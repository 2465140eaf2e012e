use std::fmt::Debug;

use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> u64 {
        use crate::domain::logging::get_time_provider;
        get_time_provider().current_timestamp()
    }
}

/// Zoom gesture lifecycle emitted by the depth engine. `ZoomChanged` carries
/// the axis controller's zoom factor `k`; span and `k` are reciprocal.
#[derive(Debug, Clone, PartialEq)]
pub enum DepthEvent {
    ZoomStarted,
    ZoomChanged { factor: f64 },
    ZoomEnded,
}

impl DomainEvent for DepthEvent {
    fn event_type(&self) -> &'static str {
        match self {
            DepthEvent::ZoomStarted => "ZoomStarted",
            DepthEvent::ZoomChanged { .. } => "ZoomChanged",
            DepthEvent::ZoomEnded => "ZoomEnded",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish_depth_event(&self, event: DepthEvent);
}

/// Simple in-memory event dispatcher; dispatch is a synchronous callback
/// invocation, not a scheduled task.
pub struct InMemoryEventDispatcher {
    depth_handlers: Vec<Box<dyn Fn(&DepthEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self { depth_handlers: Vec::new() }
    }

    pub fn subscribe_to_depth_events<F>(&mut self, handler: F)
    where
        F: Fn(&DepthEvent) + 'static,
    {
        self.depth_handlers.push(Box::new(handler));
    }
}

impl Default for InMemoryEventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_depth_event(&self, event: DepthEvent) {
        log_debug!(LogComponent::Domain("Events"), "dispatching {}", event.event_type());
        for handler in &self.depth_handlers {
            handler(&event);
        }
    }
}
