// events/bus/event_bus.rs
//
// Core event bus implementation.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately in subscription order
// 2. Deterministic - same events -> same result
// 3. Observable - every emission is logged
// 4. Type-safe - events are strongly typed
// 5. No magic - explicit, straightforward code

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::events::types::DomainEvent;

/// Type-erased event handler function
/// Takes a reference to Any (downcasted to concrete event type inside)
type EventHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// The Event Bus
///
/// Central coordination point between the services and whatever renders
/// their output. Services emit facts; subscribers react. Emission is
/// synchronous and handlers run in subscription order, so a re-render
/// handler always observes the state that produced the event.
pub struct EventBus {
    /// Map from event TypeId to list of handlers
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,

    /// Emission trail kept for diagnostics
    emissions: Arc<RwLock<Vec<EventLogEntry>>>,
}

/// One logged emission
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
    pub handler_count: usize,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            emissions: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Subscribe to a specific event type.
    ///
    /// The handler receives a reference to the concrete event. Handlers are
    /// executed in the order they are subscribed.
    ///
    /// Example:
    /// ```ignore
    /// bus.subscribe::<BatchLoaded, _>(|event| {
    ///     println!("loaded ids {}..={}", event.start_id, event.end_id);
    /// });
    /// ```
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let wrapped: EventHandler = Box::new(move |event_any: &dyn Any| {
            match event_any.downcast_ref::<E>() {
                Some(event) => handler(event),
                None => log::error!(
                    "failed to downcast event in handler for {}",
                    std::any::type_name::<E>()
                ),
            }
        });

        let mut handlers = self.handlers.write().unwrap();
        handlers
            .entry(TypeId::of::<E>())
            .or_insert_with(Vec::new)
            .push(wrapped);
    }

    /// Emit an event.
    ///
    /// Records the emission, then executes every handler registered for the
    /// event's type, in subscription order. A panicking handler is isolated
    /// so the remaining handlers still run.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        let handlers = self.handlers.read().unwrap();
        let event_handlers = handlers.get(&TypeId::of::<E>());
        let handler_count = event_handlers.map(|h| h.len()).unwrap_or(0);

        log::debug!(
            "event {} (id: {}) | {} handlers",
            event.event_type(),
            event.event_id(),
            handler_count
        );

        {
            let mut log = self.emissions.write().unwrap();
            log.push(EventLogEntry {
                event_type: event.event_type().to_string(),
                event_id: event.event_id().to_string(),
                occurred_at: event.occurred_at().to_rfc3339(),
                handler_count,
            });
        }

        if let Some(handlers) = event_handlers {
            for (idx, handler) in handlers.iter().enumerate() {
                let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    handler(&event as &dyn Any);
                }));

                if result.is_err() {
                    log::error!("handler {} for {} panicked", idx, event.event_type());
                }
            }
        }
    }

    /// The emission trail (for diagnostics)
    pub fn event_log(&self) -> Vec<EventLogEntry> {
        self.emissions.read().unwrap().clone()
    }

    pub fn clear_event_log(&self) {
        self.emissions.write().unwrap().clear();
    }

    /// Number of subscribers for a specific event type
    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        let handlers = self.handlers.read().unwrap();
        handlers
            .get(&TypeId::of::<E>())
            .map(|h| h.len())
            .unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Make EventBus cloneable (shared reference)
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            emissions: Arc::clone(&self.emissions),
        }
    }
}
