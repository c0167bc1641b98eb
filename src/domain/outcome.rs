use crate::domain::event::{DomainEvent, NoEvent};
use crate::domain::ordered_set::OrderedSet;
use std::fmt;

/// Result of a business operation: a success with an optional entity and its
/// domain events, or a failure with its error messages.
///
/// ```rust
/// use shared_toolbox::{DomainEvent, Outcome};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum UserEvent {
///     Registered(String),
/// }
/// impl DomainEvent for UserEvent {}
///
/// let outcome = Outcome::success_with(7, [UserEvent::Registered("ann".into())]);
/// let mapped = outcome.map(|id| format!("user-{}", id));
///
/// assert_eq!(mapped.entity().map(String::as_str), Some("user-7"));
/// assert_eq!(mapped.events(), &[UserEvent::Registered("ann".into())]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T, E = NoEvent> {
    Success {
        entity: Option<T>,
        events: OrderedSet<E>,
    },
    Failure {
        errors: OrderedSet<String>,
    },
}

impl<T, E: DomainEvent> Outcome<T, E> {
    /// Success with an entity and no events.
    pub fn success(entity: T) -> Self {
        Self::Success {
            entity: Some(entity),
            events: OrderedSet::default(),
        }
    }

    /// Success with an entity and the given events; duplicates are dropped.
    pub fn success_with(entity: T, events: impl IntoIterator<Item = E>) -> Self {
        Self::success_from(Some(entity), events)
    }

    /// Success whose entity may be absent. `None` records a success without
    /// an entity, not a failure.
    pub fn success_from(entity: Option<T>, events: impl IntoIterator<Item = E>) -> Self {
        Self::Success {
            entity,
            events: events.into_iter().collect(),
        }
    }

    /// Success without an entity, carrying only events.
    pub fn events_only(events: impl IntoIterator<Item = E>) -> Self {
        Self::success_from(None, events)
    }

    /// Success without an entity and without events.
    pub fn empty() -> Self {
        Self::Success {
            entity: None,
            events: OrderedSet::default(),
        }
    }

    /// Failure with the given messages; duplicates are dropped.
    ///
    /// An empty iterator yields a failure with no messages. It is allowed but
    /// rarely useful.
    pub fn failure<S: Into<String>>(errors: impl IntoIterator<Item = S>) -> Self {
        Self::Failure {
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn failure_msg(message: impl Into<String>) -> Self {
        Self::failure([message])
    }
}

impl<T, E> Outcome<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The entity, absent for failures and for successes without one.
    pub fn entity(&self) -> Option<&T> {
        match self {
            Self::Success { entity, .. } => entity.as_ref(),
            Self::Failure { .. } => None,
        }
    }

    pub fn into_entity(self) -> Option<T> {
        match self {
            Self::Success { entity, .. } => entity,
            Self::Failure { .. } => None,
        }
    }

    /// Events in emission order. Always empty for failures.
    ///
    /// ```rust,compile_fail,E0594
    /// use shared_toolbox::{DomainEvent, Outcome};
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Renamed(&'static str);
    /// impl DomainEvent for Renamed {}
    ///
    /// let outcome = Outcome::success_with(1, [Renamed("ann")]);
    /// outcome.events()[0] = Renamed("bob");
    /// ```
    pub fn events(&self) -> &[E] {
        match self {
            Self::Success { events, .. } => events.as_slice(),
            Self::Failure { .. } => &[],
        }
    }

    /// Error messages in insertion order. Always empty for successes.
    ///
    /// ```rust,compile_fail,E0599
    /// use shared_toolbox::Outcome;
    ///
    /// let outcome: Outcome<i32> = Outcome::failure(["bad"]);
    /// outcome.errors().push("another".to_string());
    /// ```
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { errors } => errors.as_slice(),
        }
    }

    /// Transforms the entity, keeping the success/failure state and events.
    ///
    /// `f` runs at most once: never for failures and never for a success
    /// without an entity. A panic inside `f` propagates to the caller.
    pub fn map<R, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success { entity, events } => Outcome::Success {
                entity: entity.map(f),
                events,
            },
            Self::Failure { errors } => Outcome::Failure { errors },
        }
    }
}

impl<T, E: fmt::Debug> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { events, .. } => {
                write!(f, "Outcome{{success=true, events={:?}, errors={{}}}}", events)
            }
            Self::Failure { errors } => {
                write!(f, "Outcome{{success=false, events={{}}, errors={:?}}}", errors)
            }
        }
    }
}
