//! Repository layer
//!
//! Repositories are the seams between the poller and the outside world:
//! the review API on one side and the chat on the other. They carry no
//! business logic.
//!
//! All repositories are trait-based so the poller can be tested without a
//! network.

mod homework;
mod messages;

// Re-export traits
pub use homework::HomeworkRepository;
pub use messages::MessageRepository;
