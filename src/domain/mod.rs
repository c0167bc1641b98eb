// Domain layer: outcome model and ports (interfaces). Concrete providers live in adapters.

pub mod event;
pub mod ordered_set;
pub mod outcome;
pub mod outcomes;
pub mod ports;
