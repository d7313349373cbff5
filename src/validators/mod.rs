//! Input validation helpers.

pub mod common;

pub use common::*;
