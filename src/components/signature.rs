//! # Signature Block and Identifier Stamp
//!
//! The signature rule with its optional embedded capture, and the
//! identifier line repeated below it. Both slide with the table height.

use super::{Component, FONT_SIZE_BODY};
use crate::invoice::{DocumentId, SignatureImage};
use crate::ir::Op;
use crate::layout::InvoiceLayout;

/// Horizontal rule, "Signature:" label, and — when a capture exists — the
/// signature image at a fixed size below the rule.
pub struct SignatureBlock<'a> {
    pub signature: Option<&'a SignatureImage>,
}

impl Component for SignatureBlock<'_> {
    fn emit(&self, layout: &InvoiceLayout, ops: &mut Vec<Op>) {
        let config = layout.config();
        let rule_y = layout.signature_rule_y();

        ops.push(Op::Line {
            x1: config.margin,
            y1: rule_y,
            x2: config.margin + config.signature_rule_length,
            y2: rule_y,
        });
        ops.push(Op::SetFontSize(FONT_SIZE_BODY));
        ops.push(Op::Text {
            content: "Signature:".into(),
            x: config.margin,
            y: layout.signature_label_baseline(),
        });

        if let Some(signature) = self.signature {
            ops.push(Op::Image {
                raster: signature.to_raster(),
                x: config.margin,
                y: layout.signature_image_top(),
                width: config.signature_width,
                height: config.signature_height,
            });
        }
    }
}

/// Single text line repeating the document identifier.
pub struct IdentifierStamp<'a> {
    pub id: &'a DocumentId,
}

impl Component for IdentifierStamp<'_> {
    fn emit(&self, layout: &InvoiceLayout, ops: &mut Vec<Op>) {
        let config = layout.config();

        ops.push(Op::SetFontSize(FONT_SIZE_BODY));
        ops.push(Op::Text {
            content: format!("Invoice ID: {}", self.id),
            x: config.margin,
            y: layout.stamp_baseline(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;
    use crate::page::PageConfig;
    use image::{DynamicImage, Rgba, RgbaImage};

    fn layout(rows: usize) -> InvoiceLayout {
        InvoiceLayout::new(PageConfig::A4, rows)
    }

    fn inked_signature() -> SignatureImage {
        let mut canvas = RgbaImage::from_pixel(40, 20, Rgba([0, 0, 0, 0]));
        canvas.put_pixel(5, 5, Rgba([0, 0, 0, 255]));
        SignatureImage::from_image(DynamicImage::ImageRgba8(canvas))
    }

    #[test]
    fn test_block_without_signature_has_no_image() {
        let block = SignatureBlock { signature: None };
        let program = block.compile_with(&layout(2));

        assert!(program.iter().any(|op| matches!(op, Op::Line { .. })));
        assert!(program.text_runs().contains(&"Signature:"));
        assert!(!program.iter().any(|op| matches!(op, Op::Image { .. })));
    }

    #[test]
    fn test_block_embeds_signature_at_fixed_size() {
        let signature = inked_signature();
        let block = SignatureBlock {
            signature: Some(&signature),
        };
        let program = block.compile_with(&layout(2));

        let image = program.iter().find_map(|op| match op {
            Op::Image {
                x,
                y,
                width,
                height,
                ..
            } => Some((*x, *y, *width, *height)),
            _ => None,
        });
        assert_eq!(image, Some((10.0, 115.0, 50.0, 20.0)));
    }

    #[test]
    fn test_rule_slides_with_row_count() {
        let block = SignatureBlock { signature: None };
        let short = block.compile_with(&layout(1));
        let tall = block.compile_with(&layout(5));

        let rule_y = |p: &crate::ir::Program| {
            p.iter().find_map(|op| match op {
                Op::Line { y1, .. } => Some(*y1),
                _ => None,
            })
        };
        assert_eq!(rule_y(&short), Some(95.0));
        assert_eq!(rule_y(&tall), Some(135.0));
    }

    #[test]
    fn test_stamp_repeats_identifier() {
        let id = DocumentId::new("1747000000000");
        let stamp = IdentifierStamp { id: &id };
        let program = stamp.compile_with(&layout(2));
        assert_eq!(program.text_runs(), vec!["Invoice ID: 1747000000000"]);
    }
}
