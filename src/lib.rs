pub mod adapters;
pub mod config;
pub mod domain;
pub mod utils;

pub use adapters::identifier::{
    format_identifier, parse_identifier, FixedIdProvider, SystemIdProvider, ZERO_ID,
};
pub use adapters::time::{parse_instant, FixedClock, FixedTimeProvider, SystemClock, SystemTimeProvider};
pub use config::ToolboxConfig;
pub use domain::event::{DomainEvent, NoEvent};
pub use domain::ordered_set::OrderedSet;
pub use domain::outcome::Outcome;
pub use domain::outcomes::combine;
pub use domain::ports::{Clock, IdProvider, TimeProvider};
pub use utils::error::{Result, ToolboxError};
