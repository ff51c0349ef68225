//! Shared types, errors and small utilities.

pub mod error;
pub mod hash;
pub mod time;
pub mod types;
