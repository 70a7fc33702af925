//! # Declarative Components
//!
//! React-like components for building the invoice document declaratively.
//!
//! ## Design Philosophy
//!
//! Each region of the page is a component that emits IR ops at positions
//! taken from the shared [`InvoiceLayout`]:
//!
//! ```
//! use factura::components::InvoiceDocument;
//! use factura::invoice::{DocumentId, InvoiceSnapshot, LineItem};
//!
//! let snapshot = InvoiceSnapshot::new(
//!     "Alice",
//!     "1 Main St",
//!     vec![LineItem::new("Widget", 10.0, 2)],
//! );
//! let doc = InvoiceDocument::new(snapshot, DocumentId::new("42"));
//!
//! // Compile to IR (inspectable)
//! let ir = doc.compile();
//! println!("{:#?}", ir);
//!
//! // Generate PDF bytes
//! let bytes = doc.build().unwrap();
//! assert!(bytes.starts_with(b"%PDF"));
//! ```
//!
//! ## Component Trait
//!
//! All regions implement the `Component` trait, which emits IR ops against
//! a layout. The [`InvoiceDocument`] root assembles the regions in page
//! order: header band, customer block, item table, total line, signature
//! block, identifier stamp, footer band.

mod bands;
mod customer;
mod invoice;
mod signature;
mod table;

pub use bands::*;
pub use customer::*;
pub use invoice::*;
pub use signature::*;
pub use table::*;

use crate::ir::{Op, Program, Rgb};
use crate::layout::InvoiceLayout;

// ============================================================================
// STYLE CONSTANTS
// ============================================================================

/// Company name printed in the header band.
pub const COMPANY_NAME: &str = "My Company";

/// Copyright/contact line printed in the footer band.
pub const FOOTER_LINE: &str = "© 2025 My Company | Contact: info@mycompany.com";

/// Placeholder for an empty item description.
pub const EMPTY_DESCRIPTION: &str = "-";

/// Issue-date format stamped next to the identifier.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Header band fill.
pub const HEADER_FILL: Rgb = Rgb::new(0, 120, 255);

/// Table header row fill.
pub const TABLE_HEADER_FILL: Rgb = Rgb::new(240, 240, 240);

/// Footer band fill.
pub const FOOTER_FILL: Rgb = Rgb::new(220, 220, 220);

/// Company-name font size in points.
pub const FONT_SIZE_TITLE: f32 = 18.0;

/// Identifier/date line font size in points.
pub const FONT_SIZE_META: f32 = 10.0;

/// Body font size in points.
pub const FONT_SIZE_BODY: f32 = 12.0;

// ============================================================================
// COMPONENT TRAIT
// ============================================================================

/// Trait for declarative page regions.
///
/// Components emit IR ops at positions derived from the layout. This is the
/// core abstraction that keeps region code independent of the item count.
pub trait Component {
    /// Emit IR ops for this component into the ops vector.
    fn emit(&self, layout: &InvoiceLayout, ops: &mut Vec<Op>);
}

/// Extension trait for compiling components.
pub trait ComponentExt: Component {
    /// Compile this component to an IR program against a layout.
    fn compile_with(&self, layout: &InvoiceLayout) -> Program {
        let mut ops = Vec::new();
        self.emit(layout, &mut ops);
        Program { ops }
    }
}

// Blanket implementation for all components
impl<T: Component> ComponentExt for T {}
