//! Terminal 2048 (workspace facade crate).
//!
//! This package exposes `term_2048::{core,input,term,types}` as one public API
//! while the implementation lives in dedicated crates under `crates/`. The
//! [`cli`] module holds the binary's configuration and logging bootstrap.

pub mod cli;

pub use term_2048_core as core;
pub use term_2048_input as input;
pub use term_2048_term as term;
pub use term_2048_types as types;
