//! Functional core for userbase.
//!
//! Pure domain types and functions: the user record, its validation rules,
//! and the storage contract that the service shell implements.

pub mod storage;
pub mod user;
