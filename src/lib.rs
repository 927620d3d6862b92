//! `cmdln` is a positional parameter parser for Rust.
//!
//! Most command line parsers centre on flags and options, and treat positional arguments as an afterthought.
//! `cmdln` does the opposite: it takes an ordered list of positional parameters (fixed, optional and variable-length) and decides, in a single deterministic pass, which slice of the command line each of them receives.
//! This makes `git`-style grammars such as `git diff [<commit>...] [--] [<path>...]` straightforward to express.
//! Specifically, `cmdln` attempts to prioritize the following design concerns:
//! * *Type safe argument parsing*:
//! The user should not call any `&str -> T` conversion functions directly.
//! * *Predictable capture*:
//! Earlier variable-length parameters claim ambiguous tokens first, while later required parameters are always guaranteed their minimum.
//! * *Positional only*:
//! Flags (`-x`, `--long=value`) are expected to be stripped before `cmdln` sees the tokens.
//! * *No presentation*:
//! `cmdln` never prints; help, usage and error display belong to the program.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/summer.rs")]
//! ```
//!
//! ```console
//! $ summer 1 2 3
//! Sum: 6
//!
//! $ summer
//! Argument error: Missing required argument 'item'.
//!
//! $ summer 1 blah
//! Argument error: Argument 'item' cannot convert 'blah' to u32.
//! ```
//!
//! # Parameters
//! Configure `cmdln` by starting with a [`ParamSet`] and `add`ing parameters, then `build` it into a [`PositionalParser`].
//! Each parameter is a [`Specification`]; the common one is [`Param`], which pairs a *name*, a [`Bound`] and a *field*.
//!
//! * [`Param::single`]: a required parameter capturing precisely 1 token.
//! * [`Param::list`]: a required parameter capturing at least 1 token, greedily.
//! * [`Param::custom`]: a parameter with any [`Bound`].
//! * [`Param::optional`]: lowers the minimum of any of the above to 0.
//!
//! ### Fields
//! All type `T` parsing in `cmdln` is controlled by [`std::str::FromStr`].
//! * [`Scalar`]: writes a single value onto a `T`.
//! * [`Optional`]: writes a single value onto an `Option<T>`.
//! * [`List`]: writes every captured value onto a collection that implements [Collectable](./prelude/trait.Collectable.html).
//! `cmdln` provides `Collectable` implementations for `Vec<T>` and `HashSet<T>`.
//! Unlike a scalar field, each assignment *replaces* the collection.
//!
//! Any closure `FnMut(&[&str]) -> Result<(), CaptureError>` is also a field.
//!
//! Besides the std types, `cmdln` provides [`Boolean`] (also accepting `1`, `0`, `t`, `f`, ..) and [`Integer`] (also accepting `0x`, `0o`, `0b` and leading `0` radix prefixes) as field types.
//!
//! ### Defaults
//! `cmdln` does not set defaults.
//! The default of an optional parameter is whatever its variable was initialized to, since a parameter capturing zero tokens is never assigned.
//!
//! ```
//! // The default for the 'count' parameter is '1'.
//! let mut count: u32 = 1;
//! ```
//!
//! ### Sentinels
//! A [`Separated`] parameter stops capturing at the first sentinel token (`--` by default).
//! The sentinel itself is consumed, but never assigned.
//!
//! ```no_run
#![doc = include_str!("../demos/git_diff.rs")]
//! ```
//!
//! # Cli Semantics
//! `cmdln` captures tokens according to the following rules.
//!
//! * Parameters capture contiguous, non-overlapping slices of the tokens, in the order they were added.
//! * Each parameter is offered as many tokens as possible, while leaving enough for the minimums of all the parameters after it.
//! A parameter with a maximum captures no more than that maximum.
//! * A required parameter offered no tokens fails with [`Cause::MissingRequiredArgument`].
//! An optional parameter offered no tokens is skipped.
//! * Tokens left over after every parameter has captured fail with [`Cause::TooManyArguments`].
//! * Parsing is not atomic: values assigned before a failure remain assigned.
//!
//! ```console
//! Parameter                      | Bound   | Syntax           | Description
//! ----------------------------------------------------------------------------------------
//! Param::single                  | [1, 1]  | VALUE            | precisely 1
//! Param::single(..).optional()   | [0, 1]  | [VALUE]          | at most 1
//! Param::custom(.., Range(n, n)) | [n, n]  | VALUE .. VALUE   | precisely n
//! Param::list(..).optional()     | [0, ..) | [VALUE ...]      | any amount; captured greedily
//! Param::list                    | [1, ..) | VALUE [...]      | at least 1; captured greedily
//! ```
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events while capturing.
pub use cmdln_params::*;
