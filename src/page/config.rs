//! # Page Configuration
//!
//! This module defines the fixed page geometry every invoice is laid out on.
//!
//! All lengths are millimetres. Vertical coordinates are measured from the
//! page **top** (the rendering backend flips them into PDF space). Every
//! section offset lives here as a named field so that layout computation and
//! rendering share one source of truth — downstream consumers depend on
//! exact positions.
//!
//! ## Usage
//!
//! ```
//! use factura::page::PageConfig;
//!
//! let config = PageConfig::A4;
//! println!("content width: {}mm", config.content_width());
//! ```

/// # Page Configuration
///
/// Defines the sheet dimensions and every fixed vertical/horizontal offset
/// of the invoice layout.
///
/// ## Coordinate system
///
/// ```text
/// (0,0) ┌──────────────────┐
///       │   header band    │  y grows downward
///       │   …              │
///       │   footer band    │
///       └──────────────────┘ (width, height)
/// ```
///
/// Offsets below the item table are *gaps*: distances from the bottom edge
/// of the last table row, so they slide with the item count. The footer is
/// the exception — it sits at an absolute position regardless of table
/// height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    /// Page width in mm
    pub width: f32,

    /// Page height in mm
    pub height: f32,

    /// Left/right content margin in mm
    pub margin: f32,

    /// Height of the filled header band (from the page top)
    pub header_band_height: f32,

    /// Company-name baseline inside the header band
    pub company_baseline: f32,

    /// Identifier/date line baseline inside the header band
    pub header_meta_baseline: f32,

    /// Customer name baseline
    pub customer_name_baseline: f32,

    /// Customer address baseline
    pub customer_address_baseline: f32,

    /// Top edge of the shaded table header row
    pub table_top: f32,

    /// Height of the table header row and of every item row
    pub row_height: f32,

    /// Header-label baseline, measured from `table_top`
    pub label_drop: f32,

    /// Cell-text baseline, measured from a row's top edge
    pub row_text_drop: f32,

    /// Column x offsets from the margin: description, unit price,
    /// quantity, extended amount
    pub col_description: f32,
    pub col_unit_price: f32,
    pub col_quantity: f32,
    pub col_amount: f32,

    /// Total-line baseline, measured from the last row's bottom edge
    pub total_gap: f32,

    /// Signature rule y, measured from the last row's bottom edge
    pub signature_rule_gap: f32,

    /// "Signature:" baseline, measured from the last row's bottom edge
    pub signature_label_gap: f32,

    /// Signature image top, measured from the last row's bottom edge
    pub signature_image_gap: f32,

    /// Length of the signature rule
    pub signature_rule_length: f32,

    /// Embedded signature image size
    pub signature_width: f32,
    pub signature_height: f32,

    /// Identifier-stamp baseline, measured from the last row's bottom edge
    pub stamp_gap: f32,

    /// Top edge of the filled footer band — absolute, independent of the
    /// item count
    pub footer_top: f32,

    /// Footer band height
    pub footer_height: f32,

    /// Footer text baseline
    pub footer_baseline: f32,
}

impl PageConfig {
    /// # A4 Portrait Configuration
    ///
    /// The standard invoice sheet. 210 × 297 mm, 10 mm margins, 30 mm
    /// header band, 10 mm table rows, footer band fixed at 280 mm.
    pub const A4: Self = Self {
        width: 210.0,
        height: 297.0,
        margin: 10.0,
        header_band_height: 30.0,
        company_baseline: 20.0,
        header_meta_baseline: 25.0,
        customer_name_baseline: 40.0,
        customer_address_baseline: 50.0,
        table_top: 60.0,
        row_height: 10.0,
        label_drop: 6.0,
        row_text_drop: 7.0,
        col_description: 2.0,
        col_unit_price: 60.0,
        col_quantity: 90.0,
        col_amount: 110.0,
        total_gap: 5.0,
        signature_rule_gap: 15.0,
        signature_label_gap: 20.0,
        signature_image_gap: 25.0,
        signature_rule_length: 60.0,
        signature_width: 50.0,
        signature_height: 20.0,
        stamp_gap: 45.0,
        footer_top: 280.0,
        footer_height: 20.0,
        footer_baseline: 290.0,
    };

    /// Width of the content area between the margins
    #[inline]
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// X position of a column, given its offset from the margin
    #[inline]
    pub fn column_x(&self, offset: f32) -> f32 {
        self.margin + offset
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::A4
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_dimensions() {
        let config = PageConfig::A4;
        assert_eq!(config.width, 210.0);
        assert_eq!(config.height, 297.0);
        assert_eq!(config.content_width(), 190.0);
    }

    #[test]
    fn test_footer_band_starts_on_page() {
        let config = PageConfig::A4;
        // The band itself runs past the sheet edge (280 + 20 > 297) and gets
        // clipped; the text baseline stays on the page.
        assert!(config.footer_top < config.height);
        assert!(config.footer_baseline > config.footer_top);
        assert!(config.footer_baseline < config.height);
    }

    #[test]
    fn test_columns_inside_content_area() {
        let config = PageConfig::A4;
        for offset in [
            config.col_description,
            config.col_unit_price,
            config.col_quantity,
            config.col_amount,
        ] {
            assert!(config.column_x(offset) < config.width - config.margin);
        }
    }

    #[test]
    fn test_default_is_a4() {
        assert_eq!(PageConfig::default(), PageConfig::A4);
    }
}
