//! Scheduler layer for the bot
//!
//! This layer polls the review API on a fixed period and turns what it finds
//! into chat notifications. It owns the timestamp cursor and the memory of the
//! last reported failure.

pub mod poller;

pub use poller::{StatusPoller, SystemClock};
