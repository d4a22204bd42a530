//! Shared helpers and error types

pub mod errors;
