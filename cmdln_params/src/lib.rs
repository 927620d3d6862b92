//! Library crate behind `cmdln`: positional parameters and their capture negotiation.
//! See [documentation root](https://docs.rs/cmdln/latest/cmdln/index.html) for usage.
#![deny(missing_docs)]
mod api;
mod constant;
mod duration;
mod model;
mod parser;
mod value;
pub mod prelude;

pub use api::*;
pub use constant::DEFAULT_SENTINEL;
pub use duration::{Duration, DurationError};
pub use model::*;
pub use parser::{negotiate, ArgumentError, Cause, ConfigError};
pub use value::{Boolean, Integer, RadixInteger, ValueError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
