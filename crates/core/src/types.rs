//! Core types used throughout Product Manager
//!
//! The product record is owned by the remote store; this crate only
//! describes how it looks on the wire and how a create/update body is
//! shaped.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Wire Helpers
// ============================================================================

/// A JSON scalar that is accepted either as a string or as a number and
/// kept as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?
        .map(TextOrNumber::into_text)
        .unwrap_or_default())
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Product Identifier
// ============================================================================

/// Opaque identifier assigned by the remote store.
///
/// Document stores hand out string ids, relational backends hand out
/// integers; both are carried as text and echoed back unchanged in
/// `/products/{id}` paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as it appears in request paths
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        TextOrNumber::deserialize(deserializer).map(|raw| ProductId(raw.into_text()))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ============================================================================
// Product Record
// ============================================================================

/// A product as returned by `GET /products`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    /// Server-assigned identifier (`_id` from document stores, else `id`)
    pub id: ProductId,

    pub name: String,

    /// Price as text; numbers are rendered with their JSON representation
    pub price: String,

    pub description: String,
}

/// Wire shape of a product. Document stores may send both `_id` and a
/// virtual `id`; `_id` wins.
#[derive(Deserialize)]
struct RawProduct {
    #[serde(rename = "_id", default)]
    document_id: Option<ProductId>,
    #[serde(default)]
    id: Option<ProductId>,
    #[serde(default, deserialize_with = "text_or_empty")]
    name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    price: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    description: String,
}

impl TryFrom<RawProduct> for Product {
    type Error = &'static str;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let id = raw
            .document_id
            .or(raw.id)
            .ok_or("product record has neither `_id` nor `id`")?;

        Ok(Self {
            id,
            name: raw.name,
            price: raw.price,
            description: raw.description,
        })
    }
}

impl Product {
    /// Create a new product record
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }

    /// Price as shown in the table
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

// ============================================================================
// Create / Update Body
// ============================================================================

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// `price` stays the raw text the user typed; it is never coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub description: String,
}

impl ProductDraft {
    /// Create a new draft
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_product_with_numeric_id_and_price() {
        let json = r#"[{"id":1,"name":"Pen","price":2,"description":"Blue pen"}]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();

        assert_eq!(products, vec![Product::new("1", "Pen", "2", "Blue pen")]);
        assert_eq!(products[0].price_label(), "$2");
    }

    #[test]
    fn test_product_with_document_id() {
        let json = r#"{"_id":"65a1f0c2","name":"Mug","price":"5","description":"Ceramic","__v":0}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id.as_str(), "65a1f0c2");
        assert_eq!(product.price, "5");
    }

    #[test]
    fn test_product_with_both_id_keys() {
        let json = r#"[{"_id":"65a1","id":"virtual","name":"Pen","price":2,"description":"Blue pen"}]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();

        assert_eq!(products, vec![Product::new("65a1", "Pen", "2", "Blue pen")]);
    }

    #[test]
    fn test_null_text_fields_keep_the_rest_of_the_list() {
        let json = r#"[
            {"_id":"a","name":null,"price":2,"description":null},
            {"_id":"b","name":"Mug","price":"5","description":"Ceramic"}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();

        assert_eq!(
            products,
            vec![
                Product::new("a", "", "2", ""),
                Product::new("b", "Mug", "5", "Ceramic"),
            ]
        );
    }

    #[test]
    fn test_fractional_price_keeps_json_text() {
        let json = r#"{"id":"a","name":"Tea","price":2.5,"description":"Green"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price_label(), "$2.5");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let json = r#"{"id":"a","price":null}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert!(product.name.is_empty());
        assert!(product.price.is_empty());
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_product_without_id_is_rejected() {
        let json = r#"{"name":"Pen","price":2,"description":"Blue pen"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_draft_serializes_price_as_text() {
        let draft = ProductDraft::new("Mug", "5", "Ceramic");
        assert_eq!(
            serde_json::to_string(&draft).unwrap(),
            r#"{"name":"Mug","price":"5","description":"Ceramic"}"#
        );
    }

    #[test]
    fn test_product_id_display() {
        let id = ProductId::new("abc");
        assert_eq!(id.to_string(), "abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc""#);
    }
}
