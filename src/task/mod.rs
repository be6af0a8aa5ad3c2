//! Task lifecycle management.
//!
//! Creating tasks, changing their status through the transition table, and
//! scheduling due dates while keeping every superseded deadline as history.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
