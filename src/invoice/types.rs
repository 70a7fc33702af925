//! Invoice snapshot types.
//!
//! An [`InvoiceSnapshot`] is a fully-formed, immutable invoice value. It is
//! rebuilt from the live form state before every render — the renderer never
//! observes in-progress edits, and the cached total is recomputed by the
//! constructor so it cannot drift from the items.

use chrono::Utc;
use image::{DynamicImage, RgbaImage};
use std::fmt;

use crate::error::FacturaError;
use crate::invoice::amount;
use crate::ir::Raster;

/// One billable row: description, unit price, quantity.
///
/// Values arrive already normalized (see [`amount`]); negative or zero
/// prices and quantities are accepted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub description: String,
    pub unit_price: f64,
    pub quantity: i64,
}

impl LineItem {
    /// Create a line item from already-normalized values.
    pub fn new(description: impl Into<String>, unit_price: f64, quantity: i64) -> Self {
        Self {
            description: description.into(),
            unit_price,
            quantity,
        }
    }

    /// Unit price × quantity. Derived, never stored.
    pub fn extended_amount(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// An immutable, fully-formed invoice value.
///
/// The total is computed by the constructor from the items, so the invariant
/// `total == Σ extended_amount` holds for every snapshot that exists.
///
/// ## Example
///
/// ```
/// use factura::invoice::{InvoiceSnapshot, LineItem};
///
/// let snapshot = InvoiceSnapshot::new(
///     "Alice",
///     "1 Main St",
///     vec![
///         LineItem::new("Widget", 10.0, 2),
///         LineItem::new("Gadget", 5.0, 3),
///     ],
/// );
/// assert_eq!(snapshot.total(), 35.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSnapshot {
    customer_name: String,
    customer_address: String,
    items: Vec<LineItem>,
    total: f64,
}

impl InvoiceSnapshot {
    /// Build a snapshot, deriving the total from the items.
    pub fn new(
        customer_name: impl Into<String>,
        customer_address: impl Into<String>,
        items: Vec<LineItem>,
    ) -> Self {
        let total = amount::total(&items);
        Self {
            customer_name: customer_name.into(),
            customer_address: customer_address.into(),
            items,
            total,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_address(&self) -> &str {
        &self.customer_address
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all items' extended amounts.
    pub fn total(&self) -> f64 {
        self.total
    }
}

/// A captured freehand signature.
///
/// Wraps the raster the capture widget produced. A capture with no visible
/// strokes (every pixel transparent or white) counts as blank and is
/// omitted from the rendered document.
#[derive(Debug, Clone)]
pub struct SignatureImage {
    image: RgbaImage,
}

impl SignatureImage {
    /// Decode a signature from the PNG bytes the capture widget exports.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, FacturaError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| FacturaError::Image(format!("signature decode failed: {e}")))?;
        Ok(Self::from_image(image))
    }

    /// Wrap an already-decoded image.
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: image.to_rgba8(),
        }
    }

    /// Whether the capture contains no visible strokes.
    pub fn is_blank(&self) -> bool {
        self.image
            .pixels()
            .all(|p| p.0[3] == 0 || (p.0[0] == 255 && p.0[1] == 255 && p.0[2] == 255))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Flatten to an RGB raster for embedding, compositing transparent
    /// pixels over white (signature canvases export a transparent
    /// background).
    pub(crate) fn to_raster(&self) -> Raster {
        let (width, height) = self.image.dimensions();
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for p in self.image.pixels() {
            let [r, g, b, a] = p.0;
            let alpha = a as u16;
            for channel in [r, g, b] {
                let over_white = (channel as u16 * alpha + 255 * (255 - alpha)) / 255;
                pixels.push(over_white as u8);
            }
        }
        Raster {
            width,
            height,
            pixels,
        }
    }
}

/// An opaque document identifier.
///
/// Generated once by the caller and injected into the render call, so the
/// header stamp and the identifier line always carry the same value within
/// one render. Uniqueness is "unlikely to collide within a session", not
/// cryptographic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wrap an externally chosen identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A time-derived identifier: milliseconds since the Unix epoch.
    pub fn time_derived() -> Self {
        Self(Utc::now().timestamp_millis().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
