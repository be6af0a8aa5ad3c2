//! Taskwell: the domain core of a personal task tracker.
//!
//! Users create tasks, give them an optional due date, and move them through
//! a small status lifecycle. This crate owns the rules behind that: at most
//! one active due date per task, a fixed status transition table, and
//! `YYYY-MM-DD` date validation at every boundary.
//!
//! # Architecture
//!
//! Taskwell follows hexagonal architecture principles:
//!
//! - **Domain**: Value records and pure rule functions
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: The lifecycle service every caller goes through
//!
//! # Modules
//!
//! - [`task`]: Task and due-date lifecycle management

pub mod task;
