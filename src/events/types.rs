// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// CATALOG LOADING EVENTS
// ============================================================================

/// Emitted after one id range has been consumed by the batch loader.
/// `skipped_ids` is the diagnostics trail for fetches that failed and were
/// dropped without blocking the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub start_id: u32,
    pub end_id: u32,
    pub loaded: usize,
    pub skipped_ids: Vec<u32>,
}

impl BatchLoaded {
    pub fn new(start_id: u32, end_id: u32, loaded: usize, skipped_ids: Vec<u32>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            start_id,
            end_id,
            loaded,
            skipped_ids,
        }
    }
}

impl DomainEvent for BatchLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "BatchLoaded" }
}

/// Emitted whenever the collection is rebuilt from scratch: a fresh initial
/// load or a single-record search. Subscribers re-render from the projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionReplaced {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub count: usize,
}

impl CollectionReplaced {
    pub fn new(count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            count,
        }
    }
}

impl DomainEvent for CollectionReplaced {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CollectionReplaced" }
}

/// Emitted once the pagination cursor has moved past the last catalog id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogExhausted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub total_count: u32,
}

impl CatalogExhausted {
    pub fn new(total_count: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            total_count,
        }
    }
}

impl DomainEvent for CatalogExhausted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogExhausted" }
}

// ============================================================================
// PROFILE EVENTS
// ============================================================================

/// Emitted when a detail record has been assembled for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileViewed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub pokemon_id: u32,
    pub name: String,
}

impl ProfileViewed {
    pub fn new(pokemon_id: u32, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            pokemon_id,
            name,
        }
    }
}

impl DomainEvent for ProfileViewed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ProfileViewed" }
}

// ============================================================================
// COMPARISON EVENTS
// ============================================================================

/// Emitted after the persisted comparison selection changed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub slots: usize,
}

impl ComparisonChanged {
    pub fn new(slots: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            slots,
        }
    }
}

impl DomainEvent for ComparisonChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ComparisonChanged" }
}

// ============================================================================
// ACCOUNT EVENTS
// ============================================================================

/// Emitted when a new credential record enters the local store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegistered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub username: String,
}

impl UserRegistered {
    pub fn new(username: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            username,
        }
    }
}

impl DomainEvent for UserRegistered {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UserRegistered" }
}

/// Emitted when the session marker is set for a username
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLoggedIn {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub username: String,
}

impl UserLoggedIn {
    pub fn new(username: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            username,
        }
    }
}

impl DomainEvent for UserLoggedIn {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UserLoggedIn" }
}

/// Emitted when the session marker is cleared
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLoggedOut {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl UserLoggedOut {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for UserLoggedOut {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for UserLoggedOut {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "UserLoggedOut" }
}
