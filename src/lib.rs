//! gamekit - small stateless helpers for game code
//!
//! - [`format`]: big number abbreviation (1.2K, 3.4M, 1.0e30)
//! - [`curves`]: normalized response curves
//! - [`util`]: clamp, lerp, insert-if-absent, in-place replace
//! - [`shuffle`]: Fisher–Yates over a caller-supplied RNG
//! - [`time_sync`]: blocking network time fetch
//! - [`config`] / [`logging`]: layered config and tracing setup for the CLI

pub mod config;
pub mod curves;
pub mod format;
pub mod logging;
pub mod shuffle;
pub mod time_sync;
pub mod util;
