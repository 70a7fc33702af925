//! # Band Components
//!
//! The filled header and footer bands framing the page.

use chrono::NaiveDate;

use super::{
    Component, COMPANY_NAME, DATE_FORMAT, FONT_SIZE_BODY, FONT_SIZE_META, FONT_SIZE_TITLE,
    FOOTER_FILL, FOOTER_LINE, HEADER_FILL,
};
use crate::invoice::DocumentId;
use crate::ir::{Op, Rgb};
use crate::layout::InvoiceLayout;

/// The colored header band: company name plus an identifier/date line in
/// light text on the fill.
pub struct HeaderBand<'a> {
    pub id: &'a DocumentId,
    pub issued_on: NaiveDate,
}

impl Component for HeaderBand<'_> {
    fn emit(&self, layout: &InvoiceLayout, ops: &mut Vec<Op>) {
        let config = layout.config();

        ops.push(Op::SetFillColor(HEADER_FILL));
        ops.push(Op::FillRect {
            x: 0.0,
            y: 0.0,
            width: config.width,
            height: config.header_band_height,
        });

        ops.push(Op::SetFillColor(Rgb::WHITE));
        ops.push(Op::SetFontSize(FONT_SIZE_TITLE));
        ops.push(Op::Text {
            content: COMPANY_NAME.into(),
            x: config.margin,
            y: config.company_baseline,
        });

        ops.push(Op::SetFontSize(FONT_SIZE_META));
        ops.push(Op::Text {
            content: format!(
                "Invoice #{} | Date: {}",
                self.id,
                self.issued_on.format(DATE_FORMAT)
            ),
            x: config.margin,
            y: config.header_meta_baseline,
        });

        // Back to dark text for everything below the band.
        ops.push(Op::SetFillColor(Rgb::BLACK));
    }
}

/// The footer band at a fixed absolute position, independent of the item
/// count.
pub struct FooterBand;

impl Component for FooterBand {
    fn emit(&self, layout: &InvoiceLayout, ops: &mut Vec<Op>) {
        let config = layout.config();

        ops.push(Op::SetFillColor(FOOTER_FILL));
        ops.push(Op::FillRect {
            x: 0.0,
            y: config.footer_top,
            width: config.width,
            height: config.footer_height,
        });

        ops.push(Op::SetFillColor(Rgb::BLACK));
        ops.push(Op::SetFontSize(FONT_SIZE_BODY));
        ops.push(Op::Text {
            content: FOOTER_LINE.into(),
            x: config.margin,
            y: config.footer_baseline,
        });
    }
}
