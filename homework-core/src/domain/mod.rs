//! Core domain types
//!
//! Types describing what the review API reports about a homework.

pub mod homework;
