//! # Invoice Document
//!
//! The root container: one snapshot, an optional signature, an injected
//! identifier and issue date, assembled into the full page.

use chrono::{Local, NaiveDate};
use std::io::Write;

use super::{
    Component, CustomerBlock, FooterBand, HeaderBand, IdentifierStamp, ItemTable, SignatureBlock,
    TotalLine,
};
use crate::error::FacturaError;
use crate::invoice::{DocumentId, InvoiceSnapshot, SignatureImage};
use crate::ir::{Op, Program};
use crate::layout::InvoiceLayout;
use crate::page::PageConfig;

/// InvoiceDocument is the root container component.
///
/// It owns everything one render needs: the immutable snapshot, the
/// normalized signature, the identifier (stamped in the header and the
/// identifier line from this single value), and the issue date. Rendering
/// is a pure function of these inputs.
///
/// ## Example
///
/// ```
/// use factura::components::InvoiceDocument;
/// use factura::invoice::{DocumentId, InvoiceSnapshot, LineItem};
///
/// let snapshot = InvoiceSnapshot::new(
///     "Alice",
///     "1 Main St",
///     vec![LineItem::new("Widget", 10.0, 2)],
/// );
/// let bytes = InvoiceDocument::new(snapshot, DocumentId::time_derived())
///     .build()
///     .unwrap();
/// assert!(bytes.starts_with(b"%PDF"));
/// ```
pub struct InvoiceDocument {
    snapshot: InvoiceSnapshot,
    signature: Option<SignatureImage>,
    id: DocumentId,
    issued_on: NaiveDate,
    config: PageConfig,
}

impl InvoiceDocument {
    /// Create a document for one snapshot and a caller-generated
    /// identifier. The issue date defaults to today.
    pub fn new(snapshot: InvoiceSnapshot, id: DocumentId) -> Self {
        Self {
            snapshot,
            signature: None,
            id,
            issued_on: Local::now().date_naive(),
            config: PageConfig::A4,
        }
    }

    /// Pin the issue date (used by tests and reprints).
    pub fn issued_on(mut self, date: NaiveDate) -> Self {
        self.issued_on = date;
        self
    }

    /// Attach a signature capture. Blank captures are dropped here, so the
    /// regions below never see a degenerate image.
    pub fn signature(mut self, signature: SignatureImage) -> Self {
        self.signature = (!signature.is_blank()).then_some(signature);
        self
    }

    /// Override the page geometry.
    pub fn page(mut self, config: PageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn snapshot(&self) -> &InvoiceSnapshot {
        &self.snapshot
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// The computed layout for this document's item count. Check
    /// [`InvoiceLayout::collides_with_footer`] before trusting tall
    /// invoices to a single page.
    pub fn layout(&self) -> InvoiceLayout {
        InvoiceLayout::new(self.config, self.snapshot.items().len())
    }

    /// Compile the full document to an IR program.
    pub fn compile(&self) -> Program {
        let layout = self.layout();
        let mut ops = Vec::new();
        self.emit(&layout, &mut ops);
        Program { ops }
    }

    /// Compile, optimize, and generate PDF bytes.
    pub fn build(&self) -> Result<Vec<u8>, FacturaError> {
        self.compile().optimize().to_pdf_bytes(&self.config)
    }

    /// Compile, optimize, and write the PDF to a caller-supplied sink.
    pub fn write_to<W: Write>(&self, sink: W) -> Result<(), FacturaError> {
        self.compile().optimize().write_pdf(&self.config, sink)
    }
}

impl Component for InvoiceDocument {
    fn emit(&self, layout: &InvoiceLayout, ops: &mut Vec<Op>) {
        HeaderBand {
            id: &self.id,
            issued_on: self.issued_on,
        }
        .emit(layout, ops);

        CustomerBlock {
            name: self.snapshot.customer_name(),
            address: self.snapshot.customer_address(),
        }
        .emit(layout, ops);

        ItemTable {
            items: self.snapshot.items(),
        }
        .emit(layout, ops);

        TotalLine {
            total: self.snapshot.total(),
        }
        .emit(layout, ops);

        SignatureBlock {
            signature: self.signature.as_ref(),
        }
        .emit(layout, ops);

        IdentifierStamp { id: &self.id }.emit(layout, ops);

        FooterBand.emit(layout, ops);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::LineItem;
    use image::{DynamicImage, Rgba, RgbaImage};

    fn snapshot() -> InvoiceSnapshot {
        InvoiceSnapshot::new(
            "Alice",
            "1 Main St",
            vec![
                LineItem::new("Widget", 10.0, 2),
                LineItem::new("Gadget", 5.0, 3),
            ],
        )
    }

    fn document() -> InvoiceDocument {
        InvoiceDocument::new(snapshot(), DocumentId::new("1747000000000"))
            .issued_on(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
    }

    #[test]
    fn test_identifier_stamped_twice_with_same_value() {
        let program = document().compile();
        let stamps: Vec<&str> = program
            .text_runs()
            .into_iter()
            .filter(|t| t.contains("1747000000000"))
            .collect();
        assert_eq!(stamps.len(), 2);
        assert!(stamps[0].starts_with("Invoice #"));
        assert!(stamps[1].starts_with("Invoice ID: "));
    }

    #[test]
    fn test_regions_in_page_order() {
        let program = document().compile();
        let runs = program.text_runs();
        let position = |needle: &str| {
            runs.iter()
                .position(|t| t.contains(needle))
                .unwrap_or_else(|| panic!("missing {needle:?}"))
        };

        assert!(position("My Company") < position("Name: Alice"));
        assert!(position("Name: Alice") < position("Description"));
        assert!(position("Description") < position("Total: "));
        assert!(position("Total: ") < position("Signature:"));
        assert!(position("Signature:") < position("Invoice ID: "));
        assert!(position("Invoice ID: ") < position("© 2025"));
    }

    #[test]
    fn test_blank_signature_is_dropped() {
        let blank = SignatureImage::from_image(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            40,
            20,
            Rgba([0, 0, 0, 0]),
        )));
        let doc = document().signature(blank);
        let program = doc.compile();
        assert!(!program.iter().any(|op| matches!(op, Op::Image { .. })));
    }

    #[test]
    fn test_inked_signature_is_embedded() {
        let mut canvas = RgbaImage::from_pixel(40, 20, Rgba([0, 0, 0, 0]));
        canvas.put_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let doc = document().signature(SignatureImage::from_image(DynamicImage::ImageRgba8(
            canvas,
        )));
        let program = doc.compile();
        assert!(program.iter().any(|op| matches!(op, Op::Image { .. })));
    }

    #[test]
    fn test_build_produces_pdf_bytes() {
        let bytes = document().build().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_write_to_sink_matches_responsibility_boundary() {
        let mut sink = Vec::new();
        document().write_to(&mut sink).unwrap();
        assert!(sink.starts_with(b"%PDF"));
    }

    #[test]
    fn test_layout_reflects_item_count() {
        assert_eq!(document().layout().rows(), 2);
        assert!(!document().layout().collides_with_footer());
    }
}
