//! Customer block: two dark-text lines below the header band.

use super::{Component, FONT_SIZE_BODY};
use crate::ir::Op;
use crate::layout::InvoiceLayout;

/// Customer name and address lines.
pub struct CustomerBlock<'a> {
    pub name: &'a str,
    pub address: &'a str,
}

impl Component for CustomerBlock<'_> {
    fn emit(&self, layout: &InvoiceLayout, ops: &mut Vec<Op>) {
        let config = layout.config();

        ops.push(Op::SetFontSize(FONT_SIZE_BODY));
        ops.push(Op::Text {
            content: format!("Name: {}", self.name),
            x: config.margin,
            y: config.customer_name_baseline,
        });
        ops.push(Op::Text {
            content: format!("Address: {}", self.address),
            x: config.margin,
            y: config.customer_address_baseline,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;
    use crate::page::PageConfig;

    #[test]
    fn test_customer_lines() {
        let block = CustomerBlock {
            name: "Alice",
            address: "1 Main St",
        };
        let program = block.compile_with(&InvoiceLayout::new(PageConfig::A4, 0));
        assert_eq!(
            program.text_runs(),
            vec!["Name: Alice", "Address: 1 Main St"]
        );
    }

    #[test]
    fn test_customer_lines_at_fixed_offsets() {
        let block = CustomerBlock {
            name: "Alice",
            address: "1 Main St",
        };
        let program = block.compile_with(&InvoiceLayout::new(PageConfig::A4, 0));
        let baselines: Vec<f32> = program
            .iter()
            .filter_map(|op| match op {
                Op::Text { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(baselines, vec![40.0, 50.0]);
    }
}
