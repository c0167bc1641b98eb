// Adapters layer: concrete implementations of the domain ports.

pub mod identifier;
pub mod time;
