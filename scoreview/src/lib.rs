//! Headless engine for browsing large scored-record lists.
//!
//! For the worker loop, request broker, and resource cache that drive this
//! crate from a background thread, see the `scoreview-worker` crate.
//!
//! This crate focuses on the pure algorithms a viewer needs: a stable,
//! deterministic sort over scored records (including arbitrary-precision
//! ordering of decimal-string ids) and a fixed-extent virtual window
//! calculator that lets a bounded number of rendered rows stand in for an
//! unbounded dataset without changing the total scrollable extent.
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - viewport extent (height for vertical lists)
//! - scroll offset
//! - a fixed per-row extent estimate and an overscan amount
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod sort;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use sort::{cmp_record_ids, sort_records};
pub use types::{Record, SortKey, SortOrder, VirtualWindow};
pub use window::{WindowOptions, compute_window};
