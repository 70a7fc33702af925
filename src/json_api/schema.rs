//! JSON schema types for the form payload.

use serde::Deserialize;

/// Top-level form payload: customer info plus the item rows as typed.
///
/// A `total` field, if present, is ignored — the total is always a
/// derivation, never caller input.
#[derive(Debug, Deserialize)]
pub struct JsonInvoice {
    /// Customer name.
    #[serde(default)]
    pub name: String,
    /// Customer address.
    #[serde(default)]
    pub address: String,
    /// Item rows in form order.
    #[serde(default)]
    pub items: Vec<JsonLineItem>,
}

/// One item row, fields exactly as the form holds them.
#[derive(Debug, Deserialize)]
pub struct JsonLineItem {
    #[serde(default)]
    pub description: String,
    /// Unit price: a number, free text, or absent.
    #[serde(default)]
    pub price: Option<RawField>,
    /// Quantity: a number, free text, or absent.
    #[serde(default)]
    pub quantity: Option<RawField>,
}

/// A form field that arrives either as a JSON number or as the raw string
/// the user typed.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
}
