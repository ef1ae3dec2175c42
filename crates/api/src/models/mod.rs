//! Request and response payload types.

pub mod project;
