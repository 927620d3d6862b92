mod base;
mod negotiator;

pub use base::*;
pub use negotiator::*;
