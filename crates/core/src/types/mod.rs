//! Core types for Breadbox.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod status;

pub use id::*;
pub use money::{format_usd, line_total};
pub use status::*;
