//! Storage adapters for the task module.
//!
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-process storage used
//!   by hosts without a database and by the test suites.

pub mod memory;
