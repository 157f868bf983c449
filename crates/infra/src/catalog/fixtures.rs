//! In-memory product fixtures for local mode
//!
//! A small ordered list; lookups are a linear scan and the first match wins.
//! Records are only ever appended.

use leema_domain::{CatalogEntry, ProductDraft};
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use super::errors::FixtureError;

const SEED_PRODUCTS: [(&str, &str); 10] = [
    ("4607027662161", "Milk 3.2%"),
    ("4607027662987", "Cheese 45%"),
    ("4607027661123", "Bread White"),
    ("4607027664526", "Eggs 10pcs"),
    ("4607027662345", "Yogurt Strawberry"),
    ("4607027664981", "Water 1.5L"),
    ("4607027663782", "Juice Orange 1L"),
    ("4607027665698", "Chocolate Dark"),
    ("4607027661999", "Coffee 250g"),
    ("4607027663456", "Tea Black 25 bags"),
];

/// The built-in sample catalog
pub fn seed_products() -> Vec<CatalogEntry> {
    SEED_PRODUCTS.iter().map(|(barcode, name)| CatalogEntry::new(*barcode, *name)).collect()
}

/// Barcode-keyed product list used when the client runs in local mode
#[derive(Debug, Default)]
pub struct FixtureStore {
    entries: RwLock<Vec<CatalogEntry>>,
}

impl FixtureStore {
    /// Store pre-filled with [`seed_products`].
    pub fn seeded() -> Self {
        Self::from_entries(seed_products())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from arbitrary entries; later duplicates of a barcode are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut unique: Vec<CatalogEntry> = Vec::new();
        for entry in entries {
            if unique.iter().any(|existing| existing.barcode == entry.barcode) {
                debug!(barcode = %entry.barcode, "dropping duplicate fixture entry");
                continue;
            }
            unique.push(entry);
        }
        Self { entries: RwLock::new(unique) }
    }

    /// Exact-match lookup by barcode.
    pub fn get(&self, barcode: &str) -> Option<CatalogEntry> {
        let found = self.entries.read().iter().find(|entry| entry.barcode == barcode).cloned();

        debug!(barcode = %barcode, found = found.is_some(), "local product lookup");

        found
    }

    /// Append a product.
    ///
    /// # Errors
    /// - `FixtureError::InvalidProduct` when `barcode` or `sku_name` is
    ///   missing or empty
    /// - `FixtureError::DuplicateBarcode` when the barcode is already present
    ///
    /// The store is unchanged on error.
    pub fn add(&self, draft: ProductDraft) -> Result<(), FixtureError> {
        let Some(entry) = draft.into_entry() else {
            error!("Invalid product data");
            return Err(FixtureError::InvalidProduct);
        };

        let mut entries = self.entries.write();
        if entries.iter().any(|existing| existing.barcode == entry.barcode) {
            warn!(barcode = %entry.barcode, "Product with this barcode already exists");
            return Err(FixtureError::DuplicateBarcode(entry.barcode));
        }

        info!(
            barcode = %entry.barcode,
            sku_name = %entry.sku_name,
            "Added product to local database"
        );
        entries.push(entry);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Copy of all entries in insertion order.
    pub fn snapshot(&self) -> Vec<CatalogEntry> {
        self.entries.read().clone()
    }
}
