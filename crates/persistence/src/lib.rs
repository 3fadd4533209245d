// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf
)]

//! Store adapters for the Cadence Campaign Tracker.
//!
//! The lifecycle layer treats storage as a document store: it reads
//! full records, computes full replacement records, and writes them
//! back atomically. This crate defines that contract
//! ([`CampaignStore`]) and ships the reference in-memory adapter
//! ([`MemoryStore`]).

mod error;
mod memory;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{CampaignStore, NotificationRecord};
