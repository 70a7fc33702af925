//! # Code Generation
//!
//! Converts IR programs to single-page PDF bytes.
//!
//! Ops use top-down page coordinates; this is where they get flipped into
//! PDF space (origin bottom-left). Text draws with the builtin Helvetica
//! pair — regular or bold according to the tracked graphics state.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef,
    Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon, Px,
};
use std::io::{BufWriter, Cursor, Write};

use super::ops::{GraphicsState, Op, Program, Raster, Rgb};
use crate::error::FacturaError;
use crate::page::PageConfig;

/// Points per millimetre. Image pixels are placed at 72 dpi, so one pixel
/// equals one point before scaling.
const MM_TO_PT: f32 = 72.0 / 25.4;

impl Program {
    /// Compile the IR program to PDF bytes for the given page geometry.
    pub fn to_pdf_bytes(&self, config: &PageConfig) -> Result<Vec<u8>, FacturaError> {
        let (doc, page, layer) =
            PdfDocument::new("Invoice", Mm(config.width), Mm(config.height), "Layer 1");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| FacturaError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| FacturaError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        let mut state = GraphicsState::default();
        layer.set_fill_color(pdf_color(state.fill));
        layer.set_outline_color(pdf_color(Rgb::BLACK));
        layer.set_outline_thickness(1.0);

        for op in &self.ops {
            match op {
                // ===== Graphics State =====
                Op::SetFillColor(color) => {
                    state.fill = *color;
                    layer.set_fill_color(pdf_color(*color));
                }
                Op::SetFontSize(size) => {
                    state.font_size = *size;
                }
                Op::SetBold(enabled) => {
                    state.bold = *enabled;
                }

                // ===== Shapes =====
                Op::FillRect {
                    x,
                    y,
                    width,
                    height,
                } => {
                    let points = rect_points(config, *x, *y, *width, *height);
                    layer.add_polygon(Polygon {
                        rings: vec![points],
                        mode: PaintMode::Fill,
                        winding_order: WindingOrder::NonZero,
                    });
                }
                Op::StrokeRect {
                    x,
                    y,
                    width,
                    height,
                } => {
                    let points = rect_points(config, *x, *y, *width, *height);
                    layer.add_line(Line {
                        points,
                        is_closed: true,
                    });
                }
                Op::Line { x1, y1, x2, y2 } => {
                    let points = vec![
                        (Point::new(Mm(*x1), Mm(flip(config, *y1))), false),
                        (Point::new(Mm(*x2), Mm(flip(config, *y2))), false),
                    ];
                    layer.add_line(Line {
                        points,
                        is_closed: false,
                    });
                }

                // ===== Content =====
                Op::Text { content, x, y } => {
                    let font = if state.bold { &bold } else { &regular };
                    draw_text(&layer, content, state.font_size, *x, flip(config, *y), font);
                }
                Op::Image {
                    raster,
                    x,
                    y,
                    width,
                    height,
                } => {
                    embed_raster(&layer, config, raster, *x, *y, *width, *height);
                }
            }
        }

        let mut buf = Vec::new();
        {
            let mut writer = BufWriter::new(Cursor::new(&mut buf));
            doc.save(&mut writer)
                .map_err(|e| FacturaError::Pdf(e.to_string()))?;
        }
        Ok(buf)
    }

    /// Compile and write the PDF to a caller-supplied sink.
    pub fn write_pdf<W: Write>(
        &self,
        config: &PageConfig,
        mut sink: W,
    ) -> Result<(), FacturaError> {
        let bytes = self.to_pdf_bytes(config)?;
        sink.write_all(&bytes)?;
        Ok(())
    }
}

/// Flip a top-down y coordinate into PDF space.
#[inline]
fn flip(config: &PageConfig, y: f32) -> f32 {
    config.height - y
}

/// Corner points of a rectangle given by its top-left corner, in PDF space.
fn rect_points(config: &PageConfig, x: f32, y: f32, w: f32, h: f32) -> Vec<(Point, bool)> {
    let top = flip(config, y);
    let bottom = flip(config, y + h);
    vec![
        (Point::new(Mm(x), Mm(top)), false),
        (Point::new(Mm(x + w), Mm(top)), false),
        (Point::new(Mm(x + w), Mm(bottom)), false),
        (Point::new(Mm(x), Mm(bottom)), false),
    ]
}

fn draw_text(
    layer: &PdfLayerReference,
    content: &str,
    size: f32,
    x: f32,
    y: f32,
    font: &IndirectFontRef,
) {
    layer.use_text(content, size, Mm(x), Mm(y), font);
}

fn embed_raster(
    layer: &PdfLayerReference,
    config: &PageConfig,
    raster: &Raster,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) {
    let image = Image::from(ImageXObject {
        width: Px(raster.width as usize),
        height: Px(raster.height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: raster.pixels.clone(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });

    // At 72 dpi one pixel is one point; scale to the requested box.
    let scale_x = width * MM_TO_PT / raster.width as f32;
    let scale_y = height * MM_TO_PT / raster.height as f32;

    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(flip(config, y + height))),
            scale_x: Some(scale_x),
            scale_y: Some(scale_y),
            dpi: Some(72.0),
            ..Default::default()
        },
    );
}

fn pdf_color(color: Rgb) -> printpdf::Color {
    printpdf::Color::Rgb(printpdf::Rgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        None,
    ))
}
