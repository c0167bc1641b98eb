use std::fmt;

/// Marker for events emitted from domain logic.
pub trait DomainEvent: fmt::Debug + Clone + PartialEq {}

/// Event type for outcomes that never carry events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoEvent {}

impl DomainEvent for NoEvent {}
