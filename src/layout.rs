//! # Invoice Layout
//!
//! Derives every vertical position in the document from the page geometry
//! plus the item count. The table grows linearly with the item count, and
//! everything below it (total line, signature block, identifier stamp)
//! slides down with it; the footer band alone stays at an absolute position.
//!
//! That fixed footer is the one place the layout can go wrong: with enough
//! rows the flowing content reaches the footer band, and eventually the
//! sheet edge. Neither condition is repaired here — rendering stays
//! single-page — but both are exposed as queryable state so callers can
//! detect them.

use crate::page::PageConfig;

/// All vertical placement for one invoice, computed from the page geometry
/// and the number of item rows.
///
/// ## Example
///
/// ```
/// use factura::layout::InvoiceLayout;
/// use factura::page::PageConfig;
///
/// let layout = InvoiceLayout::new(PageConfig::A4, 2);
/// assert_eq!(layout.row_top(0), 70.0);
/// assert_eq!(layout.row_top(1), 80.0);
/// assert!(!layout.collides_with_footer());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InvoiceLayout {
    config: PageConfig,
    rows: usize,
}

impl InvoiceLayout {
    pub fn new(config: PageConfig, rows: usize) -> Self {
        Self { config, rows }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Number of item rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Top edge of item row `i`. The first data row starts directly under
    /// the table header row.
    pub fn row_top(&self, i: usize) -> f32 {
        self.config.table_top + self.config.row_height * (i as f32 + 1.0)
    }

    /// Cell-text baseline of item row `i`.
    pub fn row_baseline(&self, i: usize) -> f32 {
        self.row_top(i) + self.config.row_text_drop
    }

    /// Bottom edge of the last item row (or of the header row when there
    /// are no items).
    pub fn rows_bottom(&self) -> f32 {
        self.config.table_top + self.config.row_height * (self.rows as f32 + 1.0)
    }

    /// Baseline of the bold total line.
    pub fn total_baseline(&self) -> f32 {
        self.rows_bottom() + self.config.total_gap
    }

    /// Y of the horizontal signature rule.
    pub fn signature_rule_y(&self) -> f32 {
        self.rows_bottom() + self.config.signature_rule_gap
    }

    /// Baseline of the "Signature:" label.
    pub fn signature_label_baseline(&self) -> f32 {
        self.rows_bottom() + self.config.signature_label_gap
    }

    /// Top edge of the embedded signature image.
    pub fn signature_image_top(&self) -> f32 {
        self.rows_bottom() + self.config.signature_image_gap
    }

    /// Baseline of the identifier stamp line.
    pub fn stamp_baseline(&self) -> f32 {
        self.rows_bottom() + self.config.stamp_gap
    }

    /// Lowest y reached by the flowing content.
    pub fn content_bottom(&self) -> f32 {
        let signature_bottom = self.signature_image_top() + self.config.signature_height;
        self.stamp_baseline().max(signature_bottom)
    }

    /// Whether the flowing content reaches the fixed footer band.
    pub fn collides_with_footer(&self) -> bool {
        self.content_bottom() > self.config.footer_top
    }

    /// Whether the flowing content runs past the sheet edge.
    pub fn overflows_page(&self) -> bool {
        self.content_bottom() > self.config.height
    }
}
