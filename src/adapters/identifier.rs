//! System and fixed implementations of [`IdProvider`], plus the canonical
//! `8-4-4-4-12` lowercase text form.

use crate::domain::ports::IdProvider;
use crate::utils::error::{Result, ToolboxError};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

/// Returned by [`FixedIdProvider`] once its sequence is exhausted.
pub const ZERO_ID: Uuid = Uuid::nil();

const CANONICAL_LEN: usize = 36;
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Random (version 4) identifiers, fresh on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdProvider;

impl SystemIdProvider {
    pub fn new() -> Self {
        Self
    }
}

impl IdProvider for SystemIdProvider {
    fn next(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Hands out a pre-seeded sequence of identifiers in order, then [`ZERO_ID`]
/// on every later call.
///
/// Calls are serialized by an internal lock, but the provider is meant for
/// single-threaded test code: with several callers the order each one sees
/// is unspecified.
///
/// ```rust
/// use shared_toolbox::{FixedIdProvider, IdProvider, ZERO_ID};
///
/// let provider = FixedIdProvider::parse(["11111111-1111-1111-1111-111111111111"]).unwrap();
/// assert_eq!(provider.next().to_string(), "11111111-1111-1111-1111-111111111111");
/// assert_eq!(provider.next(), ZERO_ID);
/// ```
#[derive(Debug, Default)]
pub struct FixedIdProvider {
    queue: Mutex<VecDeque<Uuid>>,
}

impl FixedIdProvider {
    pub fn new(ids: impl IntoIterator<Item = Uuid>) -> Self {
        let queue: VecDeque<Uuid> = ids.into_iter().collect();
        tracing::debug!("Fixed id provider seeded with {} identifiers", queue.len());
        Self {
            queue: Mutex::new(queue),
        }
    }

    /// Builds a provider from canonical identifier text.
    pub fn parse<'a>(ids: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let parsed = ids
            .into_iter()
            .map(parse_identifier)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(parsed))
    }

    /// Number of seeded identifiers not handed out yet.
    pub fn remaining(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl IdProvider for FixedIdProvider {
    fn next(&self) -> Uuid {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        match queue.pop_front() {
            Some(id) => id,
            None => {
                tracing::debug!("Fixed id sequence exhausted, returning {}", ZERO_ID);
                ZERO_ID
            }
        }
    }
}

/// Parses the canonical lowercase `8-4-4-4-12` form.
///
/// Braced, URN, simple (no hyphens) and uppercase spellings are rejected even
/// though `Uuid::parse_str` would accept them.
pub fn parse_identifier(text: &str) -> Result<Uuid> {
    let invalid = |reason: &str| ToolboxError::InvalidIdentifier {
        value: text.to_string(),
        reason: reason.to_string(),
    };

    if text.len() != CANONICAL_LEN {
        return Err(invalid("expected 36 characters in 8-4-4-4-12 form"));
    }

    for (index, byte) in text.bytes().enumerate() {
        if HYPHEN_POSITIONS.contains(&index) {
            if byte != b'-' {
                return Err(invalid("expected hyphens between the 8-4-4-4-12 groups"));
            }
        } else if !matches!(byte, b'0'..=b'9' | b'a'..=b'f') {
            return Err(invalid("expected lowercase hexadecimal digits"));
        }
    }

    Uuid::parse_str(text).map_err(|e| invalid(&e.to_string()))
}

/// Renders the canonical lowercase `8-4-4-4-12` form.
pub fn format_identifier(id: &Uuid) -> String {
    id.hyphenated().to_string()
}
