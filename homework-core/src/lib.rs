//! Homework Core
//!
//! Core types and rules for the homework review notifier.
//!
//! This crate contains:
//! - Domain types: homework statuses and the verdict table
//! - Validation: shape checks for the review API payload
//! - Parsing: turning a homework record into a notification text
//!
//! Nothing here performs IO; the bot crate feeds decoded payloads in.

pub mod domain;
pub mod error;
pub mod parse;
pub mod validate;

pub use domain::homework::HomeworkStatus;
pub use error::{ResponseError, StatusError};
pub use parse::parse_status;
pub use validate::check_response;
