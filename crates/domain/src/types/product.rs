//! Catalog product types
//!
//! The remote service and the local fixture store speak the same record
//! shape (`barcode` + `sku_name`). Callers receive the remapped [`Product`].

use serde::{Deserialize, Serialize};

/// Product record as served by `GET /products/by-barcode/{barcode}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub barcode: String,
    pub sku_name: String,
}

impl CatalogEntry {
    pub fn new(barcode: impl Into<String>, sku_name: impl Into<String>) -> Self {
        Self { barcode: barcode.into(), sku_name: sku_name.into() }
    }
}

/// Product in the shape handed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub barcode: String,
    pub name: String,
}

impl From<CatalogEntry> for Product {
    fn from(entry: CatalogEntry) -> Self {
        Self { barcode: entry.barcode, name: entry.sku_name }
    }
}

/// Unvalidated input for adding a product to the local fixture store
///
/// Unknown fields are ignored when deserializing, so arbitrary product JSON
/// can be passed through and only the two required fields survive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDraft {
    pub barcode: Option<String>,
    pub sku_name: Option<String>,
}

impl ProductDraft {
    pub fn new(barcode: impl Into<String>, sku_name: impl Into<String>) -> Self {
        Self { barcode: Some(barcode.into()), sku_name: Some(sku_name.into()) }
    }

    /// Convert into a record, or `None` when a required field is missing or
    /// empty.
    pub fn into_entry(self) -> Option<CatalogEntry> {
        let barcode = self.barcode.filter(|value| !value.is_empty())?;
        let sku_name = self.sku_name.filter(|value| !value.is_empty())?;
        Some(CatalogEntry { barcode, sku_name })
    }
}

impl From<CatalogEntry> for ProductDraft {
    fn from(entry: CatalogEntry) -> Self {
        Self { barcode: Some(entry.barcode), sku_name: Some(entry.sku_name) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_remaps_sku_name_to_name() {
        let product = Product::from(CatalogEntry::new("4607027662161", "Milk 3.2%"));
        assert_eq!(product.barcode, "4607027662161");
        assert_eq!(product.name, "Milk 3.2%");
    }

    #[test]
    fn draft_requires_both_fields() {
        assert!(ProductDraft { barcode: Some("1".into()), sku_name: None }.into_entry().is_none());
        assert!(ProductDraft { barcode: None, sku_name: Some("x".into()) }.into_entry().is_none());
        assert!(ProductDraft::new("", "Bread").into_entry().is_none());
        assert_eq!(
            ProductDraft::new("1", "Bread").into_entry(),
            Some(CatalogEntry::new("1", "Bread"))
        );
    }

    #[test]
    fn draft_ignores_extra_fields() {
        let draft: ProductDraft = serde_json::from_str(
            r#"{"barcode": "42", "sku_name": "Salt", "price": 120, "stock": 3}"#,
        )
        .unwrap();
        assert_eq!(draft.into_entry(), Some(CatalogEntry::new("42", "Salt")));
    }
}
