//! Feature slices (state + reducer per slice).

pub mod auth;
pub mod employees;
