//! Wire-level DTOs shared by the HTTP boundary.

pub mod api;
pub mod schedule;
