//! # Invoice Domain
//!
//! Domain types for one invoice — the immutable snapshot handed to the
//! renderer — and the amount calculator that derives monetary values from
//! raw form input.

pub mod amount;
mod types;

pub use types::*;
