//! # JSON API
//!
//! Deserialize raw form payloads into normalized invoice snapshots.
//!
//! This module is the input boundary: the form hands over exactly what the
//! user typed — numeric fields may be JSON numbers or free text, quantities
//! may be missing — and conversion runs the amount calculator to produce an
//! already-defaulted [`InvoiceSnapshot`](crate::invoice::InvoiceSnapshot).
//!
//! ## Example
//!
//! ```
//! use factura::json_api::JsonInvoice;
//!
//! let json = r#"{
//!     "name": "Alice",
//!     "address": "1 Main St",
//!     "items": [
//!         {"description": "Widget", "price": "10", "quantity": 2},
//!         {"description": "Gadget", "price": 5, "quantity": "3"}
//!     ]
//! }"#;
//!
//! let form: JsonInvoice = serde_json::from_str(json).unwrap();
//! let snapshot = form.to_snapshot();
//! assert_eq!(snapshot.total(), 35.0);
//! ```

mod convert;
mod schema;

pub use convert::JsonApiError;
pub use schema::{JsonInvoice, JsonLineItem, RawField};
