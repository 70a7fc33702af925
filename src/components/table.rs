//! # Item Table Components
//!
//! The shaded header row, one bordered row per line item, and the bold
//! total line beneath them. Rows are placed purely by index — the table's
//! height is a linear function of the item count.

use super::{Component, EMPTY_DESCRIPTION, FONT_SIZE_BODY, TABLE_HEADER_FILL};
use crate::invoice::amount::{self, CURRENCY};
use crate::invoice::LineItem;
use crate::ir::{Op, Rgb};
use crate::layout::InvoiceLayout;

/// The item table: column labels on a shaded row, then one bordered row per
/// item.
pub struct ItemTable<'a> {
    pub items: &'a [LineItem],
}

impl Component for ItemTable<'_> {
    fn emit(&self, layout: &InvoiceLayout, ops: &mut Vec<Op>) {
        let config = layout.config();

        // Shaded header row with column labels.
        ops.push(Op::SetFillColor(TABLE_HEADER_FILL));
        ops.push(Op::FillRect {
            x: config.margin,
            y: config.table_top,
            width: config.content_width(),
            height: config.row_height,
        });
        ops.push(Op::SetFillColor(Rgb::BLACK));
        ops.push(Op::SetFontSize(FONT_SIZE_BODY));

        let label_baseline = config.table_top + config.label_drop;
        for (label, offset) in [
            ("Description".to_string(), config.col_description),
            (format!("Price ({CURRENCY})"), config.col_unit_price),
            ("Qty".to_string(), config.col_quantity),
            (format!("Total ({CURRENCY})"), config.col_amount),
        ] {
            ops.push(Op::Text {
                content: label,
                x: config.column_x(offset),
                y: label_baseline,
            });
        }

        // One bordered row per item.
        for (i, item) in self.items.iter().enumerate() {
            ops.push(Op::StrokeRect {
                x: config.margin,
                y: layout.row_top(i),
                width: config.content_width(),
                height: config.row_height,
            });

            let baseline = layout.row_baseline(i);
            let description = if item.description.is_empty() {
                EMPTY_DESCRIPTION
            } else {
                &item.description
            };
            ops.push(Op::Text {
                content: description.into(),
                x: config.column_x(config.col_description),
                y: baseline,
            });
            ops.push(Op::Text {
                content: amount::format_amount(item.unit_price),
                x: config.column_x(config.col_unit_price),
                y: baseline,
            });
            ops.push(Op::Text {
                content: item.quantity.to_string(),
                x: config.column_x(config.col_quantity),
                y: baseline,
            });
            ops.push(Op::Text {
                content: amount::format_amount(item.extended_amount()),
                x: config.column_x(config.col_amount),
                y: baseline,
            });
        }
    }
}

/// The bold total line below the last table row.
pub struct TotalLine {
    pub total: f64,
}

impl Component for TotalLine {
    fn emit(&self, layout: &InvoiceLayout, ops: &mut Vec<Op>) {
        let config = layout.config();

        ops.push(Op::SetFontSize(FONT_SIZE_BODY));
        ops.push(Op::SetBold(true));
        ops.push(Op::Text {
            content: format!("Total: {}", amount::format_amount(self.total)),
            x: config.column_x(config.col_amount),
            y: layout.total_baseline(),
        });
        ops.push(Op::SetBold(false));
    }
}
