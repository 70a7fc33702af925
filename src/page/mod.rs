//! # Page Geometry
//!
//! Fixed sheet dimensions and section offsets for invoice layout.

mod config;

pub use config::*;
