//! System and fixed implementations of [`TimeProvider`].

use crate::domain::ports::{Clock, TimeProvider};
use crate::utils::error::{Result, ToolboxError};
use chrono::{DateTime, Utc};

/// Clock reading the system wall time in UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn instant(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock whose every read yields the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Production time provider backed by [`SystemClock`].
///
/// ```rust
/// use shared_toolbox::{SystemTimeProvider, TimeProvider};
///
/// let provider = SystemTimeProvider::new();
/// let now = provider.now();
/// assert!(now.timestamp() > 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider {
    clock: SystemClock,
}

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl TimeProvider for SystemTimeProvider {
    fn clock(&self) -> &dyn Clock {
        &self.clock
    }
}

/// Time provider frozen at one instant, for deterministic tests.
///
/// ```rust
/// use shared_toolbox::{FixedTimeProvider, TimeProvider};
///
/// let provider = FixedTimeProvider::parse("2025-01-01T00:00:00Z").unwrap();
/// assert_eq!(provider.now(), provider.now());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeProvider {
    clock: FixedClock,
}

impl FixedTimeProvider {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self::from_clock(FixedClock::new(instant))
    }

    pub fn from_clock(clock: FixedClock) -> Self {
        tracing::debug!("Fixed time provider set to {}", clock.instant().to_rfc3339());
        Self { clock }
    }

    /// Alias of [`FixedTimeProvider::new`] that reads well at call sites.
    pub fn now_at(instant: DateTime<Utc>) -> Self {
        Self::new(instant)
    }

    /// Builds a provider from RFC 3339 text such as `2025-01-01T12:00:00Z`.
    pub fn parse(text: &str) -> Result<Self> {
        parse_instant(text).map(Self::new)
    }

    pub fn fixed_clock(&self) -> &FixedClock {
        &self.clock
    }
}

impl TimeProvider for FixedTimeProvider {
    fn clock(&self) -> &dyn Clock {
        &self.clock
    }
}

/// Parses RFC 3339 text into a UTC instant, converting any offset to UTC.
pub fn parse_instant(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| ToolboxError::InvalidInstant {
            value: text.to_string(),
            reason: e.to_string(),
        })
}
