//! # Factura - Invoice Document Layout & Rendering Engine
//!
//! Factura turns a structured invoice record — customer info, a
//! variable-length list of line items, an optional freehand signature, and
//! a caller-generated identifier — into a single-page PDF. It provides:
//!
//! - **Amount calculator**: permissive normalization of raw form input into
//!   per-item extended amounts and a reconciled total
//! - **Fixed-geometry layout**: every region position derived from named
//!   constants plus the item count, with observable overflow state
//! - **Declarative components**: header band, customer block, item table,
//!   total line, signature block, identifier stamp, footer band
//! - **IR pipeline**: inspectable drawing ops, optimized before PDF codegen
//!
//! ## Quick Start
//!
//! ```
//! use factura::{
//!     components::InvoiceDocument,
//!     invoice::{DocumentId, SignatureImage},
//!     json_api::JsonInvoice,
//! };
//!
//! // Raw form payload, exactly as typed (note the free-text numbers).
//! let payload = r#"{
//!     "name": "Alice",
//!     "address": "1 Main St",
//!     "items": [
//!         {"description": "Widget", "price": "10", "quantity": 2},
//!         {"description": "Gadget", "price": "5", "quantity": "3"}
//!     ]
//! }"#;
//!
//! // Normalize into an immutable snapshot; the total is derived, not input.
//! let form: JsonInvoice = serde_json::from_str(payload)?;
//! let snapshot = form.to_snapshot();
//! assert_eq!(snapshot.total(), 35.0);
//!
//! // One identifier per render, stamped in the header and the ID line.
//! let doc = InvoiceDocument::new(snapshot, DocumentId::time_derived());
//!
//! // Write the PDF to any sink the caller controls.
//! let mut buffer = Vec::new();
//! doc.write_to(&mut buffer)?;
//! assert!(buffer.starts_with(b"%PDF"));
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`invoice`] | Domain types and the amount calculator |
//! | [`page`] | Fixed page geometry constants |
//! | [`layout`] | Vertical placement from geometry + item count |
//! | [`components`] | Declarative page regions |
//! | [`ir`] | Drawing-op IR, optimizer, PDF codegen |
//! | [`json_api`] | Raw form payload boundary |
//! | [`samples`] | Pre-built sample invoices |
//! | [`error`] | Error types |
//!
//! ## Scope
//!
//! Rendering is synchronous and stateless: each call is a pure function of
//! the snapshot, the signature capture, and the injected identifier. The
//! layout is single-page by design — tall item lists are detectable via
//! [`layout::InvoiceLayout::collides_with_footer`] but not paginated.

pub mod components;
pub mod error;
pub mod invoice;
pub mod ir;
pub mod json_api;
pub mod layout;
pub mod page;
pub mod samples;

// Re-exports for convenience
pub use components::InvoiceDocument;
pub use error::FacturaError;
pub use invoice::{DocumentId, InvoiceSnapshot, LineItem, SignatureImage};
pub use layout::InvoiceLayout;
pub use page::PageConfig;
