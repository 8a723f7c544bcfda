//! Trait definitions for Scrivener model drivers.
//!
//! Actors depend only on [`ScrivenerDriver`], so any provider (or a scripted
//! test double) can stand behind them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ScrivenerDriver, SharedDriver};
