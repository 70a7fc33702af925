//! Conversion from form payload types to normalized invoice snapshots.

use std::fmt;

use super::schema::{JsonInvoice, JsonLineItem, RawField};
use crate::invoice::amount::{
    self, DEFAULT_QUANTITY, DEFAULT_UNIT_PRICE,
};
use crate::invoice::{InvoiceSnapshot, LineItem};

/// Errors from strict form → snapshot conversion.
#[derive(Debug)]
pub enum JsonApiError {
    /// A field value is invalid.
    InvalidField {
        field: &'static str,
        message: String,
    },
}

impl fmt::Display for JsonApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonApiError::InvalidField { field, message } => {
                write!(f, "invalid {}: {}", field, message)
            }
        }
    }
}

impl std::error::Error for JsonApiError {}

impl JsonInvoice {
    /// Convert this payload to a snapshot with permissive coercion:
    /// unparsable prices become `0`, unparsable or absent quantities become
    /// `1`. Never fails — a malformed row degrades silently.
    pub fn to_snapshot(&self) -> InvoiceSnapshot {
        let items = self.items.iter().map(JsonLineItem::normalize).collect();
        InvoiceSnapshot::new(&self.name, &self.address, items)
    }

    /// Convert with strict validation: unparsable or negative numerics are
    /// rejected instead of coerced. Absent fields still take their
    /// defaults — an untouched quantity field is not malformed input.
    pub fn to_snapshot_strict(&self) -> Result<InvoiceSnapshot, JsonApiError> {
        let items = self
            .items
            .iter()
            .map(JsonLineItem::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(InvoiceSnapshot::new(&self.name, &self.address, items))
    }
}

impl JsonLineItem {
    /// Permissive normalization (the default parsing policy).
    fn normalize(&self) -> LineItem {
        let unit_price = match &self.price {
            None => DEFAULT_UNIT_PRICE,
            Some(RawField::Number(n)) => *n,
            Some(RawField::Text(s)) => amount::parse_unit_price(s),
        };
        let quantity = match &self.quantity {
            None => DEFAULT_QUANTITY,
            Some(RawField::Number(n)) => *n as i64,
            Some(RawField::Text(s)) => amount::parse_quantity(s),
        };
        LineItem::new(&self.description, unit_price, quantity)
    }

    /// Strict validation.
    fn validate(&self) -> Result<LineItem, JsonApiError> {
        let unit_price = match &self.price {
            None => DEFAULT_UNIT_PRICE,
            Some(RawField::Number(n)) if *n >= 0.0 => *n,
            Some(RawField::Number(n)) => {
                return Err(JsonApiError::InvalidField {
                    field: "price",
                    message: format!("negative value {n}"),
                });
            }
            Some(RawField::Text(s)) => {
                amount::try_parse_unit_price(s).map_err(|e| JsonApiError::InvalidField {
                    field: "price",
                    message: e.to_string(),
                })?
            }
        };

        let quantity = match &self.quantity {
            None => DEFAULT_QUANTITY,
            Some(RawField::Number(n)) if *n >= 0.0 && n.fract() == 0.0 => *n as i64,
            Some(RawField::Number(n)) => {
                return Err(JsonApiError::InvalidField {
                    field: "quantity",
                    message: format!("expected a non-negative integer, got {n}"),
                });
            }
            Some(RawField::Text(s)) => {
                amount::try_parse_quantity(s).map_err(|e| JsonApiError::InvalidField {
                    field: "quantity",
                    message: e.to_string(),
                })?
            }
        };

        Ok(LineItem::new(&self.description, unit_price, quantity))
    }
}
