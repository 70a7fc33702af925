//! # Amount Calculator
//!
//! Derives monetary values from raw, possibly-malformed form input.
//!
//! The form hands over numeric fields as free text. The permissive parsers
//! here coerce silently — a bad unit price contributes `0`, a bad quantity
//! counts as `1` — so a malformed row degrades the total instead of aborting
//! the computation. This permissiveness is deliberate; the `try_` variants
//! provide the opt-in strict mode for callers that want rejection instead.
//!
//! All arithmetic is plain IEEE-754 `f64`; the two-decimal rounding happens
//! only at the formatting step.

use crate::error::FacturaError;
use crate::invoice::LineItem;

/// Currency prefix for every rendered monetary value.
pub const CURRENCY: &str = "₹";

/// Value a unit price falls back to when it does not parse.
pub const DEFAULT_UNIT_PRICE: f64 = 0.0;

/// Value a quantity falls back to when it does not parse or is absent.
pub const DEFAULT_QUANTITY: i64 = 1;

/// Parse a unit price, coercing failures to [`DEFAULT_UNIT_PRICE`].
pub fn parse_unit_price(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(DEFAULT_UNIT_PRICE)
}

/// Parse a quantity, coercing failures to [`DEFAULT_QUANTITY`].
///
/// Fractional text truncates toward zero (`"3.7"` → `3`), the same
/// treatment JSON-number quantities get.
pub fn parse_quantity(raw: &str) -> i64 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n as i64,
        _ => DEFAULT_QUANTITY,
    }
}

/// Strict unit-price parse: rejects unparsable and negative input.
pub fn try_parse_unit_price(raw: &str) -> Result<f64, FacturaError> {
    let value: f64 = raw.trim().parse().map_err(|_| FacturaError::InvalidAmount {
        field: "unit price",
        value: raw.to_string(),
    })?;
    if value < 0.0 {
        return Err(FacturaError::InvalidAmount {
            field: "unit price",
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Strict quantity parse: rejects unparsable and negative input.
pub fn try_parse_quantity(raw: &str) -> Result<i64, FacturaError> {
    let value: i64 = raw.trim().parse().map_err(|_| FacturaError::InvalidAmount {
        field: "quantity",
        value: raw.to_string(),
    })?;
    if value < 0 {
        return Err(FacturaError::InvalidAmount {
            field: "quantity",
            value: raw.to_string(),
        });
    }
    Ok(value)
}

/// Sum of all items' extended amounts.
///
/// Recomputed in full on every call — item lists are short, and a full pass
/// keeps the snapshot invariant trivially true.
pub fn total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::extended_amount).sum()
}

/// Format a monetary value: currency-prefixed, exactly two decimals.
pub fn format_amount(value: f64) -> String {
    format!("{CURRENCY}{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unit_price() {
        assert_eq!(parse_unit_price("12.5"), 12.5);
        assert_eq!(parse_unit_price("  9 "), 9.0);
        assert_eq!(parse_unit_price(""), 0.0);
        assert_eq!(parse_unit_price("abc"), 0.0);
        assert_eq!(parse_unit_price("-3.5"), -3.5);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        // Fractional quantities truncate toward zero.
        assert_eq!(parse_quantity("3.7"), 3);
        assert_eq!(parse_quantity("-2"), -2);
        assert_eq!(parse_quantity("-2.9"), -2);
    }

    #[test]
    fn test_strict_parse_rejects_garbage() {
        assert!(try_parse_unit_price("abc").is_err());
        assert!(try_parse_quantity("3.7").is_err());
        assert_eq!(try_parse_unit_price("12.5").unwrap(), 12.5);
        assert_eq!(try_parse_quantity("3").unwrap(), 3);
    }

    #[test]
    fn test_strict_parse_rejects_negatives() {
        assert!(try_parse_unit_price("-1").is_err());
        assert!(try_parse_quantity("-2").is_err());
    }

    #[test]
    fn test_malformed_row_contributes_zero() {
        // unitPrice="" and quantity="" is the empty form row.
        let item = LineItem::new("", parse_unit_price(""), parse_quantity(""));
        assert_eq!(item.extended_amount(), 0.0);
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_total_over_items() {
        let items = vec![
            LineItem::new("Widget", 10.0, 2),
            LineItem::new("Gadget", 5.0, 3),
        ];
        assert_eq!(total(&items), 35.0);
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(27.0), "₹27.00");
        assert_eq!(format_amount(35.0), "₹35.00");
        assert_eq!(format_amount(9.125), "₹9.13");
        assert_eq!(format_amount(-10.0), "₹-10.00");
    }
}
