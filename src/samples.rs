//! # Invoice Samples
//!
//! Pre-built invoices demonstrating the component system.
//!
//! These produce complete documents ready for PDF emission. The `_golden`
//! variant pins the identifier and issue date so integration tests get
//! reproducible output.

use chrono::NaiveDate;
use image::{DynamicImage, Rgba, RgbaImage};

use crate::components::InvoiceDocument;
use crate::invoice::{DocumentId, InvoiceSnapshot, LineItem, SignatureImage};

/// A small two-item invoice with a signature, stamped with a fresh
/// time-derived identifier and today's date.
pub fn sample_invoice() -> InvoiceDocument {
    InvoiceDocument::new(sample_snapshot(), DocumentId::time_derived())
        .signature(sample_signature())
}

/// The same invoice with a pinned identifier and date, for reproducible
/// tests.
pub fn sample_invoice_golden() -> InvoiceDocument {
    InvoiceDocument::new(sample_snapshot(), DocumentId::new("1747000000000"))
        .issued_on(NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"))
        .signature(sample_signature())
}

fn sample_snapshot() -> InvoiceSnapshot {
    InvoiceSnapshot::new(
        "Alice",
        "1 Main St",
        vec![
            LineItem::new("Widget", 10.0, 2),
            LineItem::new("Gadget", 5.0, 3),
        ],
    )
}

/// A synthetic capture: one wavy stroke on a transparent canvas, the shape
/// a signature widget would export.
fn sample_signature() -> SignatureImage {
    let (width, height) = (120u32, 48u32);
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    for x in 10..width - 10 {
        let t = x as f32 / width as f32;
        let y = (height as f32 / 2.0 + (t * 12.0).sin() * 10.0) as u32;
        for dy in 0..2 {
            canvas.put_pixel(x, (y + dy).min(height - 1), Rgba([20, 20, 60, 255]));
        }
    }
    SignatureImage::from_image(DynamicImage::ImageRgba8(canvas))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_signature_is_not_blank() {
        assert!(!sample_signature().is_blank());
    }

    #[test]
    fn test_golden_sample_is_deterministic() {
        let a = sample_invoice_golden().compile();
        let b = sample_invoice_golden().compile();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_total() {
        assert_eq!(sample_invoice_golden().snapshot().total(), 35.0);
    }
}
