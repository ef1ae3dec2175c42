//! Pure request-handling logic shared by the HTTP layer.
//!
//! Nothing in this crate performs I/O: the declarative validation engine,
//! pagination defaults, and the domain error type are all plain functions
//! over borrowed data.

pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
